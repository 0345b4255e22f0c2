//! Storage keys

/// Filtered tab tree
pub const SNAPSHOT_KEY: &str = "fzl-splits-data";
/// Dark mode flag
pub const THEME_KEY: &str = "fzl-theme-preference";
/// Toolbar visibility flag
pub const CONTROLS_KEY: &str = "fzl-controls-visible";
/// Combined record offered for restore in prompt mode
pub const LAST_ACTIVITY_KEY: &str = "fzl-last-activity";
