use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{env, fs, io};

const DEFAULT_CHANGED_FILES_DEBOUNCE: Duration = Duration::from_millis(200);
const DEFAULT_HISTORY_LOAD_THRESHOLD: usize = 10;
const MIN_CHANGED_FILES_DEBOUNCE: Duration = Duration::from_millis(1);

const SETTINGS_FILE_VERSION_V1: u32 = 1;
const CURRENT_SETTINGS_FILE_VERSION: u32 = SETTINGS_FILE_VERSION_V1;

pub const SETTINGS_PATH_ENV: &str = "GITCOMPARE_SETTINGS";
const SETTINGS_APP_DIR: &str = "gitcompare";
const SETTINGS_FILE_NAME: &str = "sidebar.json";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SidebarSettings {
    /// Quiescence window for loading the changed files of the selected commit.
    pub changed_files_debounce: Duration,
    /// Rows left below the viewport at which the next history batch is requested.
    pub history_load_threshold: usize,
}

impl Default for SidebarSettings {
    fn default() -> Self {
        Self {
            changed_files_debounce: DEFAULT_CHANGED_FILES_DEBOUNCE,
            history_load_threshold: DEFAULT_HISTORY_LOAD_THRESHOLD,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
struct SidebarSettingsFileV1 {
    #[serde(default)]
    version: u32,
    changed_files_debounce_ms: Option<u64>,
    history_load_threshold: Option<usize>,
}

impl SidebarSettings {
    /// Reads `$GITCOMPARE_SETTINGS`, falling back to `sidebar.json` in the platform state dir.
    pub fn load() -> Self {
        match default_settings_file_path() {
            Some(path) => Self::load_from_path(&path),
            None => Self::default(),
        }
    }

    pub fn load_from_path(path: &Path) -> Self {
        let defaults = Self::default();
        let Some(file) = load_file_v1(path) else {
            return defaults;
        };

        Self {
            changed_files_debounce: file
                .changed_files_debounce_ms
                .map(|ms| Duration::from_millis(ms).max(MIN_CHANGED_FILES_DEBOUNCE))
                .unwrap_or(defaults.changed_files_debounce),
            history_load_threshold: file
                .history_load_threshold
                .unwrap_or(defaults.history_load_threshold),
        }
    }

    pub fn persist_to_path(&self, path: &Path) -> io::Result<()> {
        let file = SidebarSettingsFileV1 {
            version: CURRENT_SETTINGS_FILE_VERSION,
            changed_files_debounce_ms: Some(
                u64::try_from(self.changed_files_debounce.as_millis()).unwrap_or(u64::MAX),
            ),
            history_load_threshold: Some(self.history_load_threshold),
        };
        let contents = serde_json::to_vec_pretty(&file).map_err(io::Error::other)?;

        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let staged = path.with_extension("json.tmp");
        fs::write(&staged, contents)?;
        replace_with_staged(&staged, path).inspect_err(|_| {
            let _ = fs::remove_file(&staged);
        })
    }
}

/// Moves `staged` over `target`. Platforms whose rename refuses to clobber get the old file
/// removed first.
fn replace_with_staged(staged: &Path, target: &Path) -> io::Result<()> {
    match fs::rename(staged, target) {
        Err(err) if target.exists() => {
            tracing::debug!(path = %target.display(), error = %err, "replacing sidebar settings in place");
            fs::remove_file(target)?;
            fs::rename(staged, target)
        }
        result => result,
    }
}

/// `None` for a version that is not a `u32`; a missing field means v1.
fn file_version(value: &serde_json::Value) -> Option<u32> {
    match value.get("version") {
        None => Some(SETTINGS_FILE_VERSION_V1),
        Some(version) => version.as_u64().and_then(|v| u32::try_from(v).ok()),
    }
}

fn load_file_v1(path: &Path) -> Option<SidebarSettingsFileV1> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to read sidebar settings");
            return None;
        }
    };
    let value = match serde_json::from_str::<serde_json::Value>(&contents) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "sidebar settings are not valid json");
            return None;
        }
    };

    match file_version(&value) {
        Some(SETTINGS_FILE_VERSION_V1) => {
            match serde_json::from_value::<SidebarSettingsFileV1>(value) {
                Ok(file) => Some(file),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "ignoring malformed sidebar settings");
                    None
                }
            }
        }
        other => {
            tracing::warn!(path = %path.display(), version = ?value.get("version"), parsed = ?other, "unknown sidebar settings version");
            None
        }
    }
}

fn default_settings_file_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(SETTINGS_PATH_ENV).filter(|path| !path.is_empty()) {
        return Some(PathBuf::from(path));
    }

    // Unit tests never touch the user's state dir.
    if cfg!(test) {
        return None;
    }

    Some(platform_state_dir(SETTINGS_APP_DIR)?.join(SETTINGS_FILE_NAME))
}

fn platform_state_dir(app: &str) -> Option<PathBuf> {
    let var = |name: &str| {
        env::var_os(name)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    };

    let base = if cfg!(target_os = "windows") {
        var("LOCALAPPDATA").or_else(|| var("APPDATA"))?
    } else if cfg!(target_os = "macos") {
        var("HOME")?.join("Library").join("Application Support")
    } else {
        var("XDG_STATE_HOME").or_else(|| Some(var("HOME")?.join(".local").join("state")))?
    };
    Some(base.join(app))
}
