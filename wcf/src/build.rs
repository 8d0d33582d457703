use std::path::PathBuf;

use anyhow::anyhow;
use package_json_config::PackageJson;

use crate::{
  fs::{copy_dir_recursive, copy_file, create_all_dirs, deserialize_json, read_file, serialize_json, write_file},
  Framework, SetupError,
};

/// The name of the generic installer launcher shipped at the package root.
pub const INSTALL_SCRIPT: &str = "install.sh";

/// The shell positional the builder replaces with a framework literal.
const ARG_PLACEHOLDER: &str = "\"$1\"";

/// Assembles the per-framework distributable folders under `dist/`.
#[derive(Clone)]
pub struct DistBuilder {
  package_dir: PathBuf,
}

impl DistBuilder {
  pub const fn new(package_dir: PathBuf) -> Self {
    Self { package_dir }
  }

  /// Builds every framework distribution concurrently. A failing build does
  /// not stop the others, but any failure fails the aggregate run; the first
  /// error is reported.
  pub async fn build_all(&self) -> Result<(), SetupError> {
    let mut handles = Vec::new();

    for framework in Framework::ALL {
      let builder = self.clone();

      handles.push((
        framework,
        tokio::task::spawn_blocking(move || builder.build_distribution(framework)),
      ));
    }

    let mut first_error = None;

    for (framework, handle) in handles {
      let result = match handle.await {
        Ok(result) => result,
        Err(e) => Err(SetupError::Other(anyhow!(
          "The {framework} build task panicked: {e}"
        ))),
      };

      if let Err(e) = result {
        if first_error.is_none() {
          first_error = Some(SetupError::BuildFailed {
            framework,
            source: Box::new(e),
          });
        }
      }
    }

    match first_error {
      Some(e) => Err(e),
      None => Ok(()),
    }
  }

  /// Assembles one distribution: the copied configs tree and README, the
  /// installer launcher with the framework name baked in, and the framework
  /// manifest fragment stamped with the source package's version.
  pub fn build_distribution(&self, framework: Framework) -> Result<(), SetupError> {
    println!("Building {framework}...");

    let source_manifest: PackageJson = deserialize_json(&self.package_dir.join("package.json"))?;

    let dest = self
      .package_dir
      .join("dist")
      .join(format!("web-code-formatting-{framework}"));

    create_all_dirs(&dest)?;

    copy_dir_recursive(&self.package_dir.join("configs"), &dest.join("configs"))?;
    copy_file(
      &self.package_dir.join("README.md"),
      &dest.join("README.md"),
    )?;

    let script = read_file(&self.package_dir.join(INSTALL_SCRIPT))?;
    write_file(
      &dest.join(INSTALL_SCRIPT),
      &script.replace(ARG_PLACEHOLDER, &framework.to_string()),
    )?;

    let mut fragment: PackageJson =
      deserialize_json(&self.package_dir.join(framework.to_string()).join("package.json"))?;
    fragment.version = source_manifest.version;

    serialize_json(&fragment, &dest.join("package.json"))
  }
}
