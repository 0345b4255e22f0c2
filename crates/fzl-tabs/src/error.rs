//! Tab error types

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TabError {
    #[error("Tab index out of range: {index} (tab count {count})")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("Split not found in active tab: {0}")]
    SplitNotFound(String),
}
