use std::{
  env::{self, current_dir},
  path::PathBuf,
  sync::LazyLock,
};

use regex::Regex;

/// Matches a directory where this package was itself installed as a
/// dependency, e.g. `<project>/node_modules/@imaginelearning/web-code-formatting-react`.
static NESTED_INSTALL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"[/\\]node_modules[/\\]@imaginelearning[/\\]web-code-formatting-(?:angular|react)$")
    .expect("Failed to initialize the nested install regex")
});

pub(crate) fn get_cwd() -> PathBuf {
  current_dir().expect("Could not get the cwd")
}

/// Resolves the project directory the installer should act on.
///
/// `INIT_CWD` (set by npm during script execution) takes precedence over the
/// process cwd, but is discarded when it does not hold a `package.json`.
/// When the result is this package's own nested install directory, the
/// consuming project sits three path segments up.
pub fn resolve_project_dir() -> PathBuf {
  let mut dir = env::var("INIT_CWD")
    .map(PathBuf::from)
    .unwrap_or_else(|_| get_cwd());

  if !dir.join("package.json").is_file() {
    dir = get_cwd();
  }

  rewrite_nested_install(dir)
}

fn rewrite_nested_install(dir: PathBuf) -> PathBuf {
  if !NESTED_INSTALL_REGEX.is_match(&dir.to_string_lossy()) {
    return dir;
  }

  let mut dir = dir;
  for _ in 0..3 {
    if let Some(parent) = dir.parent() {
      dir = parent.to_path_buf();
    }
  }

  dir
}

/// Locates the bundled template directory: `configs/` next to the running
/// executable when present (the distributed package layout), else `configs/`
/// under the cwd (the source checkout layout).
pub fn resolve_templates_dir() -> PathBuf {
  if let Ok(exe) = env::current_exe() {
    if let Some(exe_dir) = exe.parent() {
      let candidate = exe_dir.join("configs");

      if candidate.is_dir() {
        return candidate;
      }
    }
  }

  get_cwd().join("configs")
}
