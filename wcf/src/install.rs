use std::path::PathBuf;

use eslint_config::EslintConfig;
use package_json_config::PackageJson;
use serde::{de::DeserializeOwned, Serialize};
use tslint_config::TslintConfig;

use crate::{
  fs::{copy_file, deserialize_json, serialize_json},
  Framework, SetupError, PACKAGE_NAME,
};

pub const PRE_COMMIT_COMMAND: &str = "lint-staged";

/// One installation run against a consuming project.
///
/// Both directories are explicit so the whole run is a function of
/// (project dir, template dir, framework); the binaries resolve them from the
/// environment before constructing this.
pub struct Installer {
  project_dir: PathBuf,
  templates_dir: PathBuf,
  framework: Framework,
}

impl Installer {
  pub const fn new(project_dir: PathBuf, templates_dir: PathBuf, framework: Framework) -> Self {
    Self {
      project_dir,
      templates_dir,
      framework,
    }
  }

  /// Runs every install step in order. Steps are individually idempotent, so
  /// a failed run can simply be repeated once the cause is fixed; files
  /// written before the failure are left in place.
  pub fn run(&self) -> Result<(), SetupError> {
    let package = self.read_project_manifest()?;

    if package.name.as_deref() == Some(PACKAGE_NAME) {
      return Err(SetupError::SelfInstall(PACKAGE_NAME.to_string()));
    }

    self.configure_linting()?;
    self.copy_js_beautify_config()?;
    self.copy_prettier_config()?;
    self.copy_editor_config()?;
    self.configure_hook(package)?;

    Ok(())
  }

  fn read_project_manifest(&self) -> Result<PackageJson, SetupError> {
    deserialize_json(&self.project_dir.join("package.json"))
  }

  /// Merges the bundled linter template into the project's linter config,
  /// creating the file when the project has none. The variant is selected by
  /// framework: eslint for react, tslint otherwise.
  fn configure_linting(&self) -> Result<(), SetupError> {
    match self.framework {
      Framework::React => {
        println!("Configuring eslint...");
        self.merge_config_file(EslintConfig::merge_template)
      }
      Framework::Angular => {
        println!("Configuring tslint...");
        self.merge_config_file(TslintConfig::merge_template)
      }
    }
  }

  fn merge_config_file<T, F>(&self, merge: F) -> Result<(), SetupError>
  where
    T: Default + DeserializeOwned + Serialize,
    F: FnOnce(&mut T, T),
  {
    let path = self.project_dir.join(self.framework.linter_file());

    let mut config: T = if path.is_file() {
      deserialize_json(&path)?
    } else {
      T::default()
    };

    let template: T = deserialize_json(&self.templates_dir.join(self.framework.linter_template()))?;

    merge(&mut config, template);

    serialize_json(&config, &path)
  }

  fn copy_js_beautify_config(&self) -> Result<(), SetupError> {
    println!("Copying js-beautify config...");

    self.copy_template("jsbeautify-config.json", ".jsbeautifyrc")
  }

  fn copy_prettier_config(&self) -> Result<(), SetupError> {
    println!("Copying prettier config...");

    self.copy_template("prettier-config.json", ".prettierrc")?;
    self.copy_template(".prettierignore", ".prettierignore")
  }

  fn copy_editor_config(&self) -> Result<(), SetupError> {
    println!("Copying editor config...");

    self.copy_template(".editorconfig", ".editorconfig")
  }

  fn copy_template(&self, template: &str, target: &str) -> Result<(), SetupError> {
    copy_file(
      &self.templates_dir.join(template),
      &self.project_dir.join(target),
    )
  }

  /// Rewrites the project manifest: lint-staged entries, the pre-commit hook
  /// and the formatting scripts. Object-valued fields are full overwrites of
  /// known keys, so re-running converges.
  fn configure_hook(&self, mut package: PackageJson) -> Result<(), SetupError> {
    println!("Configuring pre-commit hook...");

    let extensions = self.framework.prettier_extensions();

    package.set_lint_staged(
      "*.(htm|html)",
      vec![
        "html-beautify -r --config .jsbeautifyrc".to_string(),
        "git add".to_string(),
      ],
    );
    package.set_lint_staged(
      &format!("*.({})", extensions.join("|")),
      vec![
        "pretty-quick --staged --config .prettierrc".to_string(),
        "git add".to_string(),
      ],
    );

    package.set_hook("pre-commit", PRE_COMMIT_COMMAND);

    package.set_script(
      "format:prettier",
      format!(
        "prettier --config .prettierrc --ignore-path \"node_modules/**\" --write \"**/*.{{{}}}\"",
        extensions.join(",")
      ),
    );
    package.set_script(
      "format:beautify",
      "html-beautify -r --config .jsbeautifyrc \"src/**/*.{htm,html}\"",
    );
    package.set_script("format", "npm run format:prettier && npm run format:beautify");

    if self.framework.is_react() {
      package.set_script("lint", "eslint --ext .js,.jsx,.ts,.tsx src");
    }

    serialize_json(&package, &self.project_dir.join("package.json"))
  }
}
