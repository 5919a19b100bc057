//! String-keyed JSON slot storage on the local filesystem.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Read-whole/write-whole storage for string-keyed JSON slots.
///
/// Each key maps to a single file `<key>.json` under the base directory.
/// There is no locking or transaction discipline: the slots are treated as a
/// single-writer resource, and concurrent writers are last-writer-wins.
#[derive(Debug, Clone)]
pub struct JsonSlotStorage {
    base_dir: PathBuf,
}

impl JsonSlotStorage {
    /// Creates the storage rooted at `base_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(base_dir: impl AsRef<Path>) -> io::Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    /// Creates the storage at the default location
    /// (`<platform data dir>/dreamator`).
    ///
    /// # Errors
    ///
    /// Returns an error if the platform data directory cannot be determined
    /// or the directory cannot be created.
    pub fn default_location() -> io::Result<Self> {
        let data_dir = dirs::data_dir().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "no platform data directory")
        })?;
        Self::new(data_dir.join("dreamator"))
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }

    /// Returns the raw payload stored under `key`, or `None` if the slot is
    /// absent or unreadable.
    pub fn read(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.slot_path(key)).ok()
    }

    /// Overwrites the payload stored under `key`.
    pub fn write(&self, key: &str, payload: &str) -> io::Result<()> {
        fs::write(self.slot_path(key), payload)
    }
}
