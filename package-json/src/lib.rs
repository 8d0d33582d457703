use indexmap::IndexMap;
use json_merge::{JsonMap, StringOrList};
use serde::{Deserialize, Serialize};

type StringIndexMap = IndexMap<String, String>;

/// The contents of a `package.json` file, reduced to the fields that
/// formatting setup reads or rewrites. Every other field round-trips through
/// `extras` in its original order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct PackageJson {
  /// The name of the package.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,

  /// The package version, as a node-semver string.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub version: Option<String>,

  /// A map of shell scripts to launch from the root of the package.
  #[serde(skip_serializing_if = "IndexMap::is_empty")]
  pub scripts: StringIndexMap,

  /// Commands to run against staged files matching each glob pattern.
  #[serde(rename = "lint-staged")]
  #[serde(skip_serializing_if = "IndexMap::is_empty")]
  pub lint_staged: IndexMap<String, StringOrList>,

  /// Git hook configuration for [`husky`](https://github.com/typicode/husky).
  #[serde(skip_serializing_if = "Option::is_none")]
  pub husky: Option<Husky>,

  #[serde(flatten)]
  pub extras: JsonMap,
}

/// The `husky` section of a `package.json` file.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Husky {
  /// A map of git hook names to the command each one runs.
  #[serde(skip_serializing_if = "IndexMap::is_empty")]
  pub hooks: StringIndexMap,

  #[serde(flatten)]
  pub extras: JsonMap,
}

impl PackageJson {
  /// Adds or overwrites a named script. An existing script keeps its position
  /// in the map.
  pub fn set_script(&mut self, name: &str, command: impl Into<String>) {
    self.scripts.insert(name.to_string(), command.into());
  }

  /// Adds or overwrites the lint-staged commands for a glob pattern.
  pub fn set_lint_staged(&mut self, pattern: &str, commands: impl Into<StringOrList>) {
    self.lint_staged.insert(pattern.to_string(), commands.into());
  }

  /// Points the named git hook at `command`, unless the hook is already
  /// configured to run it. A hook that mentions the command anywhere in its
  /// line (for example wrapped in a longer shell invocation) is left exactly
  /// as it is.
  pub fn set_hook(&mut self, hook: &str, command: &str) {
    let hooks = &mut self.husky.get_or_insert_default().hooks;

    match hooks.get(hook) {
      Some(existing) if existing.contains(command) => {}
      _ => {
        hooks.insert(hook.to_string(), command.to_string());
      }
    }
  }
}
