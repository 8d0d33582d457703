use indexmap::IndexMap;
use json_merge::{extend_unique, merge_keyed, override_entries, JsonMap, StringOrList};
use serde::{Deserialize, Serialize};

/// The contents of an `.eslintrc.json` file, reduced to the fields this tool
/// merges. Everything else round-trips through `extras` untouched.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct EslintConfig {
  /// Shared configurations this file inherits from. Eslint accepts a single
  /// string as well as a list.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub extends: Option<StringOrList>,

  /// Plugins to enable for this config.
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub plugins: Vec<String>,

  /// Settings for individual rules. The rule values themselves are opaque to
  /// this tool.
  #[serde(skip_serializing_if = "IndexMap::is_empty")]
  pub rules: JsonMap,

  /// Rule adjustments scoped to groups of files.
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub overrides: Vec<EslintOverride>,

  #[serde(flatten)]
  pub extras: JsonMap,
}

/// A scoped override block, identified by its `files` patterns.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EslintOverride {
  /// The glob patterns this override applies to.
  pub files: StringOrList,

  #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
  pub rules: JsonMap,

  #[serde(flatten, default)]
  pub extras: JsonMap,
}

impl EslintConfig {
  /// Merges a bundled template into this document.
  ///
  /// `extends` and `plugins` keep the project's entries first and append
  /// template entries not already present. `rules` are merged shallowly with
  /// the template winning on collisions. Overrides are matched on their
  /// `files` patterns: a match combines the nested rules, anything else from
  /// the template is appended, and project-only overrides stay untouched.
  pub fn merge_template(&mut self, template: Self) {
    let mut extends = self
      .extends
      .take()
      .map(StringOrList::into_list)
      .unwrap_or_default();

    extend_unique(
      &mut extends,
      template
        .extends
        .map(StringOrList::into_list)
        .unwrap_or_default(),
    );

    if !extends.is_empty() {
      self.extends = Some(extends.into());
    }

    extend_unique(&mut self.plugins, template.plugins);
    override_entries(&mut self.rules, template.rules);

    merge_keyed(
      &mut self.overrides,
      template.overrides,
      |item| item.files.to_list(),
      |existing, addition| override_entries(&mut existing.rules, addition.rules),
    );
  }
}
