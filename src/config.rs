use crate::util;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE: &str = "moontest.yaml";

fn default_runner_command() -> String {
    "moon run --target wasm-gc src/test".to_string()
}

fn default_ci_command() -> String {
    "python3 .github/scripts/ci_parser.py".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerSettings {
    #[serde(default = "default_runner_command")]
    pub command: String,
}

impl Default for RunnerSettings {
    fn default() -> Self {
        RunnerSettings {
            command: default_runner_command(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CiSettings {
    #[serde(default = "default_ci_command")]
    pub command: String,
}

impl Default for CiSettings {
    fn default() -> Self {
        CiSettings {
            command: default_ci_command(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Suite directory for `-d` when no directory argument is given.
    /// None means ~/.moon/lib/core/builtin.
    #[serde(default)]
    pub suite_dir: Option<PathBuf>,
    #[serde(default)]
    pub runner: RunnerSettings,
    #[serde(default)]
    pub ci: CiSettings,
}

impl Settings {
    /// The suite directory to use when `-d` is given without an argument.
    pub fn suite_dir(&self) -> Result<PathBuf> {
        match &self.suite_dir {
            Some(dir) => Ok(dir.clone()),
            None => util::default_suite_dir(),
        }
    }
}

/// Load settings from `moontest.yaml` in the data directory. Returns defaults
/// when the file does not exist; the dispatcher never writes it.
pub fn load(dir: &Path) -> Result<(Settings, PathBuf)> {
    let path = dir.join(SETTINGS_FILE);
    if !path.exists() {
        return Ok((Settings::default(), path));
    }

    let contents = fs::read_to_string(&path)
        .with_context(|| format!("failed reading settings {}", path.display()))?;
    let settings: Settings = serde_yaml::from_str(&contents)
        .with_context(|| format!("failed parsing settings {}", path.display()))?;
    Ok((settings, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_moon_toolchain() {
        let settings = Settings::default();
        assert_eq!(settings.runner.command, "moon run --target wasm-gc src/test");
        assert_eq!(settings.ci.command, "python3 .github/scripts/ci_parser.py");
        assert!(settings.suite_dir.is_none());
    }

    #[test]
    fn load_returns_defaults_when_file_absent() {
        let dir = tempfile::tempdir().unwrap();
        let (settings, path) = load(dir.path()).unwrap();
        assert_eq!(settings.runner.command, default_runner_command());
        assert_eq!(path, dir.path().join(SETTINGS_FILE));
    }

    #[test]
    fn partial_yaml_keeps_field_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(SETTINGS_FILE),
            "suite_dir: /opt/suites\nrunner:\n  command: \"echo run\"\n",
        )
        .unwrap();

        let (settings, _) = load(dir.path()).unwrap();
        assert_eq!(settings.suite_dir, Some(PathBuf::from("/opt/suites")));
        assert_eq!(settings.runner.command, "echo run");
        assert_eq!(settings.ci.command, default_ci_command());
    }

    #[test]
    fn malformed_yaml_is_an_error_naming_the_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), "runner: [not, a, map").unwrap();

        let err = load(dir.path()).unwrap_err();
        assert!(format!("{:#}", err).contains(SETTINGS_FILE));
    }
}
