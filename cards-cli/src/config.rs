//! Environment loading for the cards CLI

use std::path::PathBuf;

use tracing::{debug, info};

/// Which .env files were applied and which failed to parse.
///
/// Loading happens before the tracing subscriber exists (RUST_LOG may come
/// from a .env file), so the outcome is kept and logged afterwards.
#[derive(Debug, Default)]
pub struct DotenvReport {
    pub loaded: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
}

impl DotenvReport {
    fn merge(&mut self, other: DotenvReport) {
        self.loaded.extend(other.loaded);
        self.failed.extend(other.failed);
    }

    /// Log the outcome; call once tracing is initialized.
    pub fn log(&self) {
        for (path, err) in &self.failed {
            debug!("Failed to load {}: {}", path.display(), err);
        }

        if self.loaded.is_empty() {
            debug!("No .env files found (current dir or ~/.cards)");
        } else {
            let paths: Vec<String> = self.loaded.iter().map(|p| p.display().to_string()).collect();
            info!("Loaded configuration from: {}", paths.join(", "));
        }
    }
}

/// Load environment variables from .env files.
///
/// Priority order (highest to lowest):
/// 1. Variables already set in the environment
/// 2. Current directory .env
/// 3. ~/.cards/.env
///
/// dotenvy never overwrites variables that are already set, so loading the
/// local file first gives it precedence over the global one.
pub fn load_dotenv() -> DotenvReport {
    let mut report = DotenvReport::default();

    if let Ok(path) = dotenvy::dotenv() {
        report.loaded.push(path);
    }

    let global = config_dir().map(|dir| dir.join(".env"));
    report.merge(load_dotenv_files(global));
    report
}

/// Apply each existing file in `candidates`, skipping missing ones.
pub fn load_dotenv_files(candidates: impl IntoIterator<Item = PathBuf>) -> DotenvReport {
    let mut report = DotenvReport::default();

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match dotenvy::from_path(&path) {
            Ok(()) => report.loaded.push(path),
            Err(e) => report.failed.push((path, e.to_string())),
        }
    }

    report
}

/// Get the cards config directory path (~/.cards)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".cards"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_dir_is_under_home() {
        if let Some(dir) = config_dir() {
            assert!(dir.ends_with(".cards"));
        }
    }

    #[test]
    fn reports_loaded_and_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let env_file = dir.path().join(".env");
        std::fs::write(&env_file, "CARDS_CONFIG_TEST_VAR=from-file\n").unwrap();

        let report = load_dotenv_files([env_file.clone(), dir.path().join("missing.env")]);

        assert_eq!(report.loaded, vec![env_file]);
        assert!(report.failed.is_empty());
        assert_eq!(
            std::env::var("CARDS_CONFIG_TEST_VAR").as_deref(),
            Ok("from-file")
        );
    }

    #[test]
    fn reports_unparseable_file() {
        let dir = tempfile::tempdir().unwrap();
        let env_file = dir.path().join(".env");
        std::fs::write(&env_file, "NOT A VALID LINE 'unterminated\n").unwrap();

        let report = load_dotenv_files([env_file.clone()]);

        assert!(report.loaded.is_empty());
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, env_file);
    }
}
