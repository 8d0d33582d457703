use clap::Parser;

use crate::{
  paths::{get_cwd, resolve_project_dir, resolve_templates_dir},
  DistBuilder, Framework, Installer, SetupError,
};

/// The cli for the installer binary.
#[derive(Parser, Debug, Clone)]
#[command(name = "wcf-install")]
#[command(version, about = "Installs shared code-formatting and linting configuration into the current project", long_about = None)]
pub struct InstallCli {
  /// The framework the target project is built with.
  #[arg(value_enum)]
  pub framework: Framework,
}

/// The cli for the builder binary.
#[derive(Parser, Debug, Clone)]
#[command(name = "wcf-build")]
#[command(version, about = "Assembles the per-framework distributable folders", long_about = None)]
pub struct BuildCli {}

pub fn run_install(cli: InstallCli) -> Result<(), SetupError> {
  let installer = Installer::new(
    resolve_project_dir(),
    resolve_templates_dir(),
    cli.framework,
  );

  installer.run()?;

  println!("Installation complete.");

  Ok(())
}

pub async fn run_build(_cli: BuildCli) -> Result<(), SetupError> {
  DistBuilder::new(get_cwd()).build_all().await?;

  println!("Build complete.");

  Ok(())
}
