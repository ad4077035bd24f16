//! Path resolution for configuration and data files.
//!
//! All data is stored in `~/.pomodoro/` unless overridden:
//! - `config.yaml` - Configuration file
//! - `stats.json` - Completed work sessions per day
//! - `logs/` - Log files

use std::path::PathBuf;

use crate::error::PomodoroError;

/// Paths to configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.pomodoro/`
    pub root: PathBuf,
    /// Config file: `~/.pomodoro/config.yaml`
    pub config_file: PathBuf,
    /// Stats file: `~/.pomodoro/stats.json`
    pub stats_file: PathBuf,
    /// Logs directory: `~/.pomodoro/logs/`
    pub logs: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PomodoroError> {
        let home = std::env::var("HOME").map_err(|_| {
            PomodoroError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".pomodoro")))
    }

    /// Create paths with a custom root directory.
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            stats_file: root.join("stats.json"),
            logs: root.join("logs"),
            root,
        }
    }

    /// Use `root` if given, otherwise the home directory default.
    ///
    /// # Errors
    ///
    /// Returns an error if no root is given and the home directory cannot be
    /// determined.
    pub fn resolve(root: Option<PathBuf>) -> Result<Self, PomodoroError> {
        root.map_or_else(Self::new, |root| Ok(Self::with_root(root)))
    }

    /// Ensure all directories exist, creating them if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), PomodoroError> {
        for dir in [&self.root, &self.logs] {
            if !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    PomodoroError::Config(format!(
                        "Failed to create directory {}: {e}",
                        dir.display()
                    ))
                })?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-pomodoro");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.stats_file, root.join("stats.json"));
        assert_eq!(paths.logs, root.join("logs"));
    }

    #[test]
    fn test_resolve_prefers_explicit_root() {
        let root = PathBuf::from("/tmp/elsewhere");
        let paths = Paths::resolve(Some(root.clone())).unwrap();
        assert_eq!(paths.root, root);
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("data"));

        paths.ensure_dirs().unwrap();

        assert!(paths.root.exists());
        assert!(paths.logs.exists());
    }
}
