//! User actions applied to the workspace

use serde::{Deserialize, Serialize};

use crate::layout::Layout;

/// One discrete user action. Applying an action is atomic: it either
/// produces a new tree or leaves the workspace untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    AddTab,
    RemoveTab { index: usize },
    SelectTab { index: usize },
    RenameTab { index: usize, name: String },
    AddSplit,
    RemoveSplit,
    ResetSplits,
    CreateGridLayout,
    SetLayout { layout: Layout },
    UpdateSplitMedia { split_id: String, media: String },
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddTab => "add_tab",
            Action::RemoveTab { .. } => "remove_tab",
            Action::SelectTab { .. } => "select_tab",
            Action::RenameTab { .. } => "rename_tab",
            Action::AddSplit => "add_split",
            Action::RemoveSplit => "remove_split",
            Action::ResetSplits => "reset_splits",
            Action::CreateGridLayout => "create_grid_layout",
            Action::SetLayout { .. } => "set_layout",
            Action::UpdateSplitMedia { .. } => "update_split_media",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_wire_format() {
        let action: Action =
            serde_json::from_str(r#"{"type":"rename_tab","index":1,"name":"Refs"}"#).unwrap();
        assert_eq!(
            action,
            Action::RenameTab {
                index: 1,
                name: "Refs".to_string()
            }
        );

        let json = serde_json::to_string(&Action::SetLayout {
            layout: Layout::Rows,
        })
        .unwrap();
        assert_eq!(json, r#"{"type":"set_layout","layout":"rows"}"#);
    }
}
