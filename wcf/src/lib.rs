#![allow(clippy::result_large_err)]

pub mod build;
pub mod cli;
pub mod errors;
pub mod framework;
pub mod fs;
pub mod install;
pub mod paths;

pub use build::DistBuilder;
pub use errors::SetupError;
pub use framework::Framework;
pub use install::Installer;

/// The npm name this tool is published under. The installer refuses to run
/// against a project with this name.
pub const PACKAGE_NAME: &str = "@imaginelearning/web-code-formatting";
