#![allow(clippy::result_large_err)]

use clap::Parser;
use web_code_formatting::cli::{run_build, BuildCli};

#[tokio::main]
async fn main() {
  let cli = BuildCli::parse();

  if let Err(e) = run_build(cli).await {
    eprintln!("{e}");
    std::process::exit(1);
  }
}
