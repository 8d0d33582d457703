use indexmap::IndexMap;
use json_merge::{extend_unique, override_entries, JsonMap, StringOrList};
use serde::{Deserialize, Serialize};

/// The contents of a `tslint.json` file, reduced to the fields this tool
/// merges. Everything else round-trips through `extras` untouched.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct TslintConfig {
  /// Directories holding custom rule implementations, resolved relative to
  /// the config file. Tslint accepts a single string as well as a list.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub rules_directory: Option<StringOrList>,

  /// Settings for individual rules. The rule values themselves are opaque to
  /// this tool.
  #[serde(skip_serializing_if = "IndexMap::is_empty")]
  pub rules: JsonMap,

  #[serde(flatten)]
  pub extras: JsonMap,
}

impl TslintConfig {
  /// Merges a bundled template into this document.
  ///
  /// Project rules are kept and seeded first; the template wins on a rule
  /// name collision. `rulesDirectory` is normalized to a list and template
  /// entries are appended only when not already present. Any other key the
  /// project defines is left untouched.
  pub fn merge_template(&mut self, template: Self) {
    override_entries(&mut self.rules, template.rules);

    let mut directories = self
      .rules_directory
      .take()
      .map(StringOrList::into_list)
      .unwrap_or_default();

    extend_unique(
      &mut directories,
      template
        .rules_directory
        .map(StringOrList::into_list)
        .unwrap_or_default(),
    );

    if !directories.is_empty() {
      self.rules_directory = Some(directories.into());
    }
  }
}
