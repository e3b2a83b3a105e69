//! Persistence for settings, the loaded document, and the reading position.
//!
//! Everything is stored as strings under fixed keys in a [`KeyValueStore`].
//! Load paths never fail: missing or malformed records fall back to
//! defaults and are logged. Save paths return [`StorageError`] so the caller
//! can report them.

use thiserror::Error;

pub mod debounce;
pub mod file;
pub mod memory;
pub mod reader_store;

pub use debounce::PositionDebouncer;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use reader_store::ReaderStore;

pub const SETTINGS_KEY: &str = "speed-reader-settings";
pub const POSITION_KEY: &str = "speed-reader-current-index";
pub const TEXT_KEY: &str = "current-text";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not encode record: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// A flat string-to-string blob store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn put(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).put(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
