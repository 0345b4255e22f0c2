//! Capabilities the host platform may or may not provide
//!
//! The shell implements these for its windowing layer; tests use fakes.

use std::future::Future;

use crate::Result;

/// Screen color sampler
pub trait EyeDropper {
    fn is_supported(&self) -> bool;

    /// Let the user pick a pixel. Resolves to a `#rrggbb` string, or an
    /// error if the pick was cancelled or failed.
    fn open(&self) -> impl Future<Output = Result<String>> + Send;
}

pub trait Clipboard {
    fn write_text(&self, text: &str) -> Result<()>;
}

pub trait Fullscreen {
    fn is_fullscreen(&self) -> Result<bool>;
    fn set_fullscreen(&self, fullscreen: bool) -> Result<()>;
}
