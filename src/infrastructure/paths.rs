//! Path helpers for locating the data directory.

use crate::Config;
use std::path::PathBuf;

const APP_DIR: &str = "spareshub";

/// Returns the directory holding the listings file and the log.
///
/// Uses `config.data_dir` (tilde-expanded) when set, otherwise
/// `$XDG_DATA_HOME/spareshub`, then `~/.local/share/spareshub`. Without a home
/// directory it falls back to `./.spareshub`.
///
/// # Examples
///
/// ```
/// use spareshub::infrastructure::get_data_dir;
/// use spareshub::Config;
///
/// let config = Config { data_dir: Some("/var/lib/spares".to_string()), ..Config::default() };
/// assert_eq!(get_data_dir(&config).to_str(), Some("/var/lib/spares"));
/// ```
#[must_use]
pub fn get_data_dir(config: &Config) -> PathBuf {
    if let Some(dir) = config.data_dir.as_deref().filter(|dir| !dir.trim().is_empty()) {
        return PathBuf::from(expand_tilde(dir.trim()));
    }

    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").filter(|dir| !dir.is_empty()) {
        return PathBuf::from(xdg).join(APP_DIR);
    }

    home_dir().map_or_else(
        || PathBuf::from(".").join(format!(".{APP_DIR}")),
        |home| home.join(".local").join("share").join(APP_DIR),
    )
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
}

/// Expands a leading `~` to the home directory.
///
/// Paths without a leading tilde, and all paths when `HOME` is unset, are
/// returned unchanged.
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let Some(home) = home_dir() else {
        return path.to_string();
    };
    let home = home.display().to_string();

    if path == "~" {
        home
    } else if let Some(rest) = path.strip_prefix("~/") {
        format!("{}/{rest}", home.trim_end_matches('/'))
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_tilde_paths_are_untouched() {
        assert_eq!(expand_tilde("/abs/path"), "/abs/path");
        assert_eq!(expand_tilde("rel/~/path"), "rel/~/path");
    }

    #[test]
    fn tilde_uses_home_when_set() {
        if let Some(home) = home_dir() {
            let expanded = expand_tilde("~/spares");
            assert!(expanded.starts_with(home.to_str().unwrap().trim_end_matches('/')));
            assert!(expanded.ends_with("/spares"));
        }
    }

    #[test]
    fn configured_dir_wins() {
        let config = Config {
            data_dir: Some("  /tmp/spares  ".to_string()),
            ..Config::default()
        };
        assert_eq!(get_data_dir(&config), PathBuf::from("/tmp/spares"));
    }
}
