//! Application state management
use fzl_core::{Board, Config, CoreError, Result};
use parking_lot::RwLock;
use std::sync::Arc;

/// Thread-safe application state wrapper
pub struct AppState {
    board: Arc<RwLock<Option<Arc<Board>>>>,
}

impl AppState {
    pub fn new() -> Result<Self> {
        let config = Config::default();
        let board = Board::new(config)?;

        Ok(Self {
            board: Arc::new(RwLock::new(Some(Arc::new(board)))),
        })
    }

    pub fn initialize(&self) -> Result<()> {
        if let Some(board) = self.board.read().as_ref() {
            board.initialize()?;
        }
        Ok(())
    }

    pub fn with_board<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Board) -> Result<T>,
    {
        let guard = self.board.read();
        match guard.as_ref() {
            Some(board) => f(board),
            None => Err(CoreError::NotInitialized),
        }
    }

    /// Owned handle for commands that hold the board across an await
    pub fn board(&self) -> Result<Arc<Board>> {
        self.board.read().clone().ok_or(CoreError::NotInitialized)
    }
}
