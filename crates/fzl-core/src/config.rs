//! Board configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use fzl_media::DEFAULT_MAX_UPLOAD_BYTES;
use fzl_session::{RestoreMode, DEFAULT_TTL_HOURS};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the database file
    pub database_path: PathBuf,
    /// How the workspace comes back at startup
    pub restore_mode: RestoreMode,
    /// Largest accepted upload, in bytes
    pub max_upload_bytes: u64,
    /// Age after which a last-activity record is no longer offered
    pub last_activity_ttl_hours: i64,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            database_path: data_dir.join("fzl-splits.db"),
            restore_mode: RestoreMode::default(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            last_activity_ttl_hours: DEFAULT_TTL_HOURS,
        }
    }

    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join("FZLSplits"))
            .unwrap_or_else(|| PathBuf::from(".fzl-splits"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}

mod dirs {
    use std::path::PathBuf;

    pub fn data_local_dir() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("LOCALAPPDATA").ok().map(PathBuf::from)
        }
        #[cfg(target_os = "macos")]
        {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join("Library/Application Support"))
        }
        #[cfg(target_os = "linux")]
        {
            std::env::var("XDG_DATA_HOME")
                .ok()
                .map(PathBuf::from)
                .or_else(|| {
                    std::env::var("HOME")
                        .ok()
                        .map(|h| PathBuf::from(h).join(".local/share"))
                })
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new(PathBuf::from("/tmp/fzl"));
        assert_eq!(config.database_path, PathBuf::from("/tmp/fzl/fzl-splits.db"));
        assert_eq!(config.restore_mode, RestoreMode::Silent);
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
        assert_eq!(config.last_activity_ttl_hours, 24);
    }

    #[test]
    fn test_config_from_json() {
        let config: Config = serde_json::from_str(
            r#"{"database_path":"/data/board.db","restore_mode":"prompt","max_upload_bytes":1024,"last_activity_ttl_hours":6}"#,
        )
        .unwrap();
        assert_eq!(config.restore_mode, RestoreMode::Prompt);
        assert_eq!(config.max_upload_bytes, 1024);
    }
}
