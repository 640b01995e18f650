//! Durable slots: named string values that survive restarts.
//!
//! `FileSlots` keeps one file per slot inside the data directory.

use super::files::{atomic_write, read_optional, remove_if_exists};
use anyhow::{bail, Result};
use std::path::PathBuf;

/// Slot holding the serialized task list
pub const TODOS_SLOT: &str = "todos";

/// Slot holding the theme name
pub const THEME_SLOT: &str = "theme";

/// String-keyed durable storage
pub trait SlotStorage {
    /// Read the raw bytes of a slot, `None` if it was never written or has
    /// been removed. Decoding is left to the caller so that bad content can
    /// be told apart from a failed read.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Replace the value of a slot
    fn write(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a slot; removing a missing slot succeeds
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Slots stored as files in a directory
#[derive(Debug, Clone)]
pub struct FileSlots {
    dir: PathBuf,
}

impl FileSlots {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            bail!("Invalid slot name: {:?}", key);
        }
        Ok(self.dir.join(key))
    }
}

impl SlotStorage for FileSlots {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        read_optional(self.slot_path(key)?)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        atomic_write(self.slot_path(key)?, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        remove_if_exists(self.slot_path(key)?)
    }
}
