//! FZL Splits Session Persistence
//!
//! - The live workspace is mirrored to storage after every change
//! - Only durable media references are ever written
//! - Stored data of any known schema revision is migrated on load;
//!   anything unrecognized is logged and treated as "no saved data"
//! - Theme and toolbar visibility live under their own keys

mod error;
mod keys;
mod last_activity;
mod preferences;
mod schema;
mod snapshot;
mod store;

pub use error::SessionError;
pub use keys::{CONTROLS_KEY, LAST_ACTIVITY_KEY, SNAPSHOT_KEY, THEME_KEY};
pub use last_activity::{LastActivity, LastActivityStore, RestoreMode, DEFAULT_TTL_HOURS};
pub use preferences::Preferences;
pub use schema::{decode, decode_value, parse_timestamp, Decoded, SchemaVersion};
pub use snapshot::{Snapshot, SnapshotSplit, SnapshotTab, SNAPSHOT_VERSION};
pub use store::SessionStore;

pub type Result<T> = std::result::Result<T, SessionError>;
