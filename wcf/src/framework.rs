use std::fmt::{self, Display};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The UI framework a target project is built with. Selects the linter
/// variant, the prettier extension set and the extra npm scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
  Angular,
  React,
}

impl Framework {
  pub const ALL: [Self; 2] = [Self::Angular, Self::React];

  /// The linter config file this framework uses at the project root.
  pub const fn linter_file(&self) -> &'static str {
    match self {
      Self::Angular => "tslint.json",
      Self::React => ".eslintrc.json",
    }
  }

  /// The bundled template the linter config is merged against.
  pub const fn linter_template(&self) -> &'static str {
    match self {
      Self::Angular => "tslint.json",
      Self::React => "eslintrc.json",
    }
  }

  /// The file extensions prettier targets for this framework.
  pub fn prettier_extensions(&self) -> Vec<&'static str> {
    let mut extensions = vec!["ts", "js", "json", "scss", "css"];

    if self.is_react() {
      extensions.insert(1, "tsx");
    }

    extensions
  }

  /// Returns `true` if the framework is [`React`].
  ///
  /// [`React`]: Framework::React
  #[must_use]
  pub const fn is_react(&self) -> bool {
    matches!(self, Self::React)
  }
}

impl Display for Framework {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Angular => {
        write!(f, "angular")
      }
      Self::React => {
        write!(f, "react")
      }
    }
  }
}
