use anyhow::Result;
use std::env;
use std::path::{Path, PathBuf};

/// Return the platform-appropriate data directory for moontest.
/// - `MOONTEST_DATA_DIR`, when set, wins
/// - macOS: ~/.moontest
/// - Linux: ~/.local/share/moontest (or $XDG_DATA_HOME/moontest)
/// - Windows: %APPDATA%\\Moontest
pub fn data_dir() -> Result<PathBuf> {
    if let Ok(dir) = env::var("MOONTEST_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }

    let os = env::consts::OS;
    let base = match os {
        "macos" => dirs_home().map(|h| h.join(".moontest")),
        "windows" => {
            if let Ok(appdata) = env::var("APPDATA") {
                Some(PathBuf::from(appdata).join("Moontest"))
            } else {
                dirs_home().map(|h| h.join("AppData").join("Roaming").join("Moontest"))
            }
        }
        _ => {
            if let Ok(xdg) = env::var("XDG_DATA_HOME") {
                Some(PathBuf::from(xdg).join("moontest"))
            } else {
                dirs_home().map(|h| h.join(".local").join("share").join("moontest"))
            }
        }
    };

    base.ok_or_else(|| anyhow::anyhow!("could not resolve home directory"))
}

/// Default suite directory: ~/.moon/lib/core/builtin.
pub fn default_suite_dir() -> Result<PathBuf> {
    dirs_home()
        .map(|h| h.join(".moon").join("lib").join("core").join("builtin"))
        .ok_or_else(|| anyhow::anyhow!("could not resolve home directory"))
}

fn dirs_home() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Resolve a path to absolute form against the current directory.
/// Purely lexical: the path does not have to exist yet.
pub fn absolutize(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(path))
    }
}
