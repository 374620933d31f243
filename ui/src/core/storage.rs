//! Local key-value persistence.
//!
//! Web builds keep slots in `window.localStorage`. Native builds keep one JSON
//! file per slot under the platform data directory. Both sit behind
//! [`SlotStore`] so callers (and tests) can swap in [`MemorySlots`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("local storage unavailable")]
    Unavailable,
    #[error("couldn't read slot `{0}`")]
    Read(String),
    #[error("couldn't write slot `{0}`")]
    Write(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("corrupt slot contents: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Named string slots, the same shape as browser local storage.
pub trait SlotStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: SlotStore + ?Sized> SlotStore for Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// In-memory slots. Cloning shares the same backing map.
#[derive(Debug, Clone, Default)]
pub struct MemorySlots {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemorySlots {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStore for MemorySlots {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The platform's persistent slots.
#[derive(Debug, Clone)]
pub struct LocalSlots {
    #[cfg(not(target_arch = "wasm32"))]
    root: std::path::PathBuf,
}

#[cfg(target_arch = "wasm32")]
impl LocalSlots {
    pub fn open() -> Result<Self, StorageError> {
        local_storage()?;
        Ok(Self {})
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

#[cfg(target_arch = "wasm32")]
impl SlotStore for LocalSlots {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(key)
            .map_err(|_| StorageError::Read(key.to_string()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl LocalSlots {
    pub fn open() -> Result<Self, StorageError> {
        let dirs = directories::ProjectDirs::from("com", "Rollcall", "Rollcall")
            .ok_or(StorageError::Unavailable)?;
        Ok(Self::at(dirs.data_dir().join("storage")))
    }

    /// Slots rooted at an explicit directory. Created lazily on first write.
    pub fn at(root: impl Into<std::path::PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn slot_path(&self, key: &str) -> std::path::PathBuf {
        let file: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.root.join(format!("{file}.json"))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl SlotStore for LocalSlots {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.slot_path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::write(self.slot_path(key), value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_slots_share_state_between_clones() {
        let slots = MemorySlots::new();
        let other = slots.clone();
        slots.set("userAvatars", "{}").unwrap();
        assert_eq!(other.get("userAvatars").unwrap().as_deref(), Some("{}"));
        assert_eq!(other.get("missing").unwrap(), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_slots_round_trip_and_report_missing() {
        let dir = tempfile::tempdir().unwrap();
        let slots = LocalSlots::at(dir.path().join("nested"));

        assert_eq!(slots.get("userAvatars").unwrap(), None);
        slots.set("userAvatars", r#"{"1":"data:image/png;base64,AA=="}"#).unwrap();
        assert_eq!(
            slots.get("userAvatars").unwrap().as_deref(),
            Some(r#"{"1":"data:image/png;base64,AA=="}"#)
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_slot_names_are_sanitised() {
        let dir = tempfile::tempdir().unwrap();
        let slots = LocalSlots::at(dir.path());
        slots.set("../escape", "x").unwrap();
        assert!(dir.path().join("___escape.json").exists());
    }
}
