//! Board layout modes

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Panes flow into a responsive grid
    #[default]
    Grid,
    /// Panes stacked vertically
    Rows,
    /// Panes side by side
    Columns,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Grid => "grid",
            Layout::Rows => "rows",
            Layout::Columns => "columns",
        }
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "grid" => Ok(Layout::Grid),
            "rows" => Ok(Layout::Rows),
            "columns" => Ok(Layout::Columns),
            _ => Err(format!("Unknown layout: {}", s)),
        }
    }
}
