//! Pure merge helpers for small JSON configuration documents.
//!
//! Every function here follows the same contract: the left-hand side is the
//! document being edited in place (the consuming project's own values), the
//! right-hand side is a bundled template. Project values are always seeded
//! first, so repeated merges with the same template are a no-op after the
//! first one.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub type JsonMap = IndexMap<String, Value>;

/// A JSON field that tools accept either as a single string or as a list of
/// strings (`rulesDirectory`, `extends`, the `files` key of an override).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum StringOrList {
  String(String),
  List(Vec<String>),
}

impl StringOrList {
  /// Normalizes the value to list form for merging.
  pub fn into_list(self) -> Vec<String> {
    match self {
      Self::String(s) => vec![s],
      Self::List(list) => list,
    }
  }

  pub fn to_list(&self) -> Vec<String> {
    self.clone().into_list()
  }
}

impl From<Vec<String>> for StringOrList {
  fn from(list: Vec<String>) -> Self {
    Self::List(list)
  }
}

/// Appends the items of `additions` to `base`, skipping any item that is
/// already present. Existing items keep their position.
pub fn extend_unique<T, I>(base: &mut Vec<T>, additions: I)
where
  T: PartialEq,
  I: IntoIterator<Item = T>,
{
  for item in additions {
    if !base.contains(&item) {
      base.push(item);
    }
  }
}

/// Inserts every entry of `overrides` into `base`. On a key collision the
/// override value wins, but the key keeps its original position in the map,
/// so a document that already carries the override values is left unchanged.
pub fn override_entries(base: &mut JsonMap, overrides: JsonMap) {
  for (key, value) in overrides {
    base.insert(key, value);
  }
}

/// Merges `additions` into `base` by a key extracted from each item.
///
/// An addition whose key matches an existing item is combined into it with
/// `combine`; the rest are appended in order. Items of `base` with no
/// matching addition are kept untouched.
pub fn merge_keyed<T, K, F, C>(base: &mut Vec<T>, additions: Vec<T>, key: F, mut combine: C)
where
  K: PartialEq,
  F: Fn(&T) -> K,
  C: FnMut(&mut T, T),
{
  for addition in additions {
    let addition_key = key(&addition);

    if let Some(existing) = base.iter_mut().find(|item| key(item) == addition_key) {
      combine(existing, addition);
    } else {
      base.push(addition);
    }
  }
}
