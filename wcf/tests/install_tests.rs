use std::{
  fs::{create_dir_all, read_to_string, remove_dir_all, write},
  path::{Path, PathBuf},
};

use indoc::indoc;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use web_code_formatting::{Framework, Installer, SetupError};

const MINIMAL_MANIFEST: &str = indoc! {r#"
  {
    "name": "my-app",
    "version": "1.0.0",
    "dependencies": {
      "left-pad": "^1.3.0"
    }
  }
"#};

fn setup_project(name: &str, manifest: &str) -> PathBuf {
  let dir = PathBuf::from("tests/output").join(name);

  if dir.exists() {
    remove_dir_all(&dir)
      .unwrap_or_else(|e| panic!("Failed to empty the output dir '{}': {}", dir.display(), e));
  }

  create_dir_all(&dir)
    .unwrap_or_else(|e| panic!("Failed to create the output dir '{}': {}", dir.display(), e));

  write(dir.join("package.json"), manifest).unwrap();

  dir
}

fn run_install(dir: &Path, framework: Framework) -> Result<(), SetupError> {
  Installer::new(dir.to_path_buf(), PathBuf::from("../configs"), framework).run()
}

fn read_json(path: &Path) -> Value {
  serde_json::from_str(&read_to_string(path).unwrap())
    .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e))
}

#[test]
fn angular_install_on_a_fresh_project_produces_every_config() {
  let dir = setup_project("angular_fresh", MINIMAL_MANIFEST);

  run_install(&dir, Framework::Angular).unwrap();

  for file in [
    "tslint.json",
    ".prettierrc",
    ".prettierignore",
    ".jsbeautifyrc",
    ".editorconfig",
  ] {
    assert!(dir.join(file).is_file(), "missing {file}");
  }

  let tslint = read_json(&dir.join("tslint.json"));
  assert_eq!(tslint["rulesDirectory"], json!(["node_modules/codelyzer"]));
  assert_eq!(tslint["rules"]["quotemark"], json!([true, "single"]));

  let manifest = read_json(&dir.join("package.json"));
  assert_eq!(manifest["husky"]["hooks"]["pre-commit"], json!("lint-staged"));
  assert_eq!(
    manifest["lint-staged"]["*.(htm|html)"],
    json!(["html-beautify -r --config .jsbeautifyrc", "git add"])
  );
  assert_eq!(
    manifest["lint-staged"]["*.(ts|js|json|scss|css)"],
    json!(["pretty-quick --staged --config .prettierrc", "git add"])
  );
  assert_eq!(
    manifest["scripts"]["format"],
    json!("npm run format:prettier && npm run format:beautify")
  );
  assert!(manifest["scripts"]["format:prettier"]
    .as_str()
    .unwrap()
    .contains("**/*.{ts,js,json,scss,css}"));
  assert!(manifest["scripts"].get("lint").is_none());

  // Untouched fields survive the rewrite.
  assert_eq!(manifest["dependencies"]["left-pad"], json!("^1.3.0"));

  // Rewritten documents are tab-indented with a trailing newline.
  let raw = read_to_string(dir.join("package.json")).unwrap();
  assert!(raw.contains("\n\t\"scripts\""));
  assert!(raw.ends_with('\n'));
}

#[test]
fn react_install_uses_the_extended_extension_set() {
  let dir = setup_project("react_fresh", MINIMAL_MANIFEST);

  run_install(&dir, Framework::React).unwrap();

  assert!(dir.join(".eslintrc.json").is_file());
  assert!(!dir.join("tslint.json").exists());

  let manifest = read_json(&dir.join("package.json"));
  assert!(manifest["lint-staged"]
    .get("*.(ts|tsx|js|json|scss|css)")
    .is_some());
  assert!(manifest["lint-staged"].get("*.(ts|js|json|scss|css)").is_none());
  assert!(manifest["scripts"]["format:prettier"]
    .as_str()
    .unwrap()
    .contains("**/*.{ts,tsx,js,json,scss,css}"));
  assert_eq!(
    manifest["scripts"]["lint"],
    json!("eslint --ext .js,.jsx,.ts,.tsx src")
  );
}

#[test]
fn installing_twice_converges() {
  let dir = setup_project("react_idempotent", MINIMAL_MANIFEST);

  run_install(&dir, Framework::React).unwrap();

  let manifest_after_first = read_to_string(dir.join("package.json")).unwrap();
  let eslintrc_after_first = read_to_string(dir.join(".eslintrc.json")).unwrap();

  run_install(&dir, Framework::React).unwrap();

  assert_eq!(
    read_to_string(dir.join("package.json")).unwrap(),
    manifest_after_first
  );
  assert_eq!(
    read_to_string(dir.join(".eslintrc.json")).unwrap(),
    eslintrc_after_first
  );
}

#[test]
fn custom_eslint_rules_and_overrides_survive() {
  let dir = setup_project("react_custom_config", MINIMAL_MANIFEST);

  write(
    dir.join(".eslintrc.json"),
    indoc! {r#"
      {
        "rules": {
          "custom-rule": "warn"
        },
        "overrides": [
          {
            "files": ["*.spec.ts"],
            "rules": {
              "max-lines": "off"
            }
          }
        ]
      }
    "#},
  )
  .unwrap();

  run_install(&dir, Framework::React).unwrap();

  let eslintrc = read_json(&dir.join(".eslintrc.json"));

  assert_eq!(eslintrc["rules"]["custom-rule"], json!("warn"));
  assert_eq!(eslintrc["rules"]["semi"], json!(["error", "always"]));

  let overrides = eslintrc["overrides"].as_array().unwrap();
  assert_eq!(overrides.len(), 2);
  assert_eq!(overrides[0]["files"], json!(["*.spec.ts"]));
  assert_eq!(overrides[0]["rules"]["max-lines"], json!("off"));
  assert_eq!(overrides[1]["files"], json!(["*.test.ts", "*.test.tsx"]));
}

#[test]
fn existing_hook_running_lint_staged_is_untouched() {
  let dir = setup_project(
    "hook_guard",
    indoc! {r#"
      {
        "name": "my-app",
        "husky": {
          "hooks": {
            "pre-commit": "cross-env CI=1 lint-staged"
          }
        }
      }
    "#},
  );

  run_install(&dir, Framework::Angular).unwrap();

  let manifest = read_json(&dir.join("package.json"));
  assert_eq!(
    manifest["husky"]["hooks"]["pre-commit"],
    json!("cross-env CI=1 lint-staged")
  );
}

#[test]
fn self_install_is_refused_before_anything_is_written() {
  let manifest = indoc! {r#"
    {
      "name": "@imaginelearning/web-code-formatting",
      "version": "1.2.0"
    }
  "#};
  let dir = setup_project("self_install", manifest);

  let result = run_install(&dir, Framework::Angular);

  assert!(matches!(result, Err(SetupError::SelfInstall(_))));
  assert!(!dir.join("tslint.json").exists());
  assert!(!dir.join(".prettierrc").exists());
  assert_eq!(read_to_string(dir.join("package.json")).unwrap(), manifest);
}
