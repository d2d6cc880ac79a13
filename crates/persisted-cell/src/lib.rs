//! Persisted Cell
//!
//! Keeps an in-memory value in sync with one slot of a key-value storage.
//! The value is read once when the cell is opened and written back on every change.

mod backend;
mod cell;
mod error;

pub use backend::{BrowserStorage, MemoryStorage, StorageBackend};
pub use cell::{load, PersistedCell};
pub use error::StorageError;
