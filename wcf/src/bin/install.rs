#![allow(clippy::result_large_err)]

use clap::Parser;
use web_code_formatting::cli::{run_install, InstallCli};

fn main() {
  let cli = match InstallCli::try_parse() {
    Ok(cli) => cli,
    Err(e) => {
      // Help and version requests exit clean; a missing or unknown framework
      // is a usage error reported with status 1.
      if e.use_stderr() {
        let _ = e.print();
        std::process::exit(1);
      }

      e.exit();
    }
  };

  if let Err(e) = run_install(cli) {
    eprintln!("Error installing code formatting tools. {e}");
    std::process::exit(1);
  }
}
