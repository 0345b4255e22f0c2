//! FZL Splits Tab Model
//!
//! The canonical in-memory tree of tabs, splits and media references.
//! Every user action is a synchronous transformation of the [`Workspace`];
//! persistence observes the workspace revision instead of being called by
//! the mutators.

mod action;
mod error;
mod layout;
mod split;
mod tab;
mod workspace;

pub use action::Action;
pub use error::TabError;
pub use layout::Layout;
pub use split::Split;
pub use tab::{Tab, MAX_SPLITS_PER_TAB};
pub use workspace::{Workspace, GRID_SPLITS, MAX_TABS};

pub type Result<T> = std::result::Result<T, TabError>;
