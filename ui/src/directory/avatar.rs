//! Per-user avatar photos: validation, data URL encoding and local persistence.
//!
//! An upload moves through picked -> validated -> encoded -> persisted, or is
//! rejected at validation. Rejections never touch the user collection.

use std::collections::BTreeMap;
use std::future::Future;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::config::DirectoryConfig;
use crate::core::format::format_bytes;
use crate::core::storage::{SlotStore, StorageError};

use super::state::DirectoryState;
use super::user::{User, UserId};

/// Stringified user id -> data URL, as stored in the avatar slot.
pub type AvatarMap = BTreeMap<String, String>;

#[derive(Error, Debug)]
pub enum AvatarError {
    #[error("Please select an image file")]
    NotAnImage,
    #[error("Image size should be less than {}", limit_label(.limit))]
    TooLarge { limit: u64 },
    #[error("Error reading file. Please try another image")]
    Unreadable,
    #[error("Photo updated, but it couldn't be saved on this device ({0})")]
    Persist(#[from] StorageError),
}

fn limit_label(limit: &u64) -> String {
    format_bytes(*limit)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvatarLimits {
    pub max_bytes: u64,
}

impl From<&DirectoryConfig> for AvatarLimits {
    fn from(config: &DirectoryConfig) -> Self {
        Self {
            max_bytes: config.max_avatar_bytes,
        }
    }
}

/// What we know about a picked file before reading it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedFile {
    pub name: String,
    /// Declared media type, empty when unknown.
    pub mime: String,
    pub size: Option<u64>,
}

impl PickedFile {
    /// Describe a file by name, deriving its declared type from the extension.
    pub fn new(name: impl Into<String>, size: Option<u64>) -> Self {
        let name = name.into();
        let mime = mime_for_name(&name).unwrap_or_default().to_string();
        Self { name, mime, size }
    }

    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }
}

fn mime_for_name(name: &str) -> Option<&'static str> {
    let (_, ext) = name.rsplit_once('.')?;
    let mime = match ext.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" | "jfif" | "pjpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "avif" => "image/avif",
        "tif" | "tiff" => "image/tiff",
        "heic" => "image/heic",
        "txt" => "text/plain",
        "pdf" => "application/pdf",
        "json" => "application/json",
        _ => return None,
    };
    Some(mime)
}

/// Type check first, then size. Neither reads the file.
pub fn validate(file: &PickedFile, limits: AvatarLimits) -> Result<(), AvatarError> {
    if !file.is_image() {
        return Err(AvatarError::NotAnImage);
    }
    if file.size.is_some_and(|size| size > limits.max_bytes) {
        return Err(AvatarError::TooLarge {
            limit: limits.max_bytes,
        });
    }
    Ok(())
}

pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Validate `file`, then await `read` and encode the bytes as a data URL.
///
/// `read` is only polled once validation passes.
pub async fn read_validated<F>(
    file: &PickedFile,
    limits: AvatarLimits,
    read: F,
) -> Result<String, AvatarError>
where
    F: Future<Output = Option<Vec<u8>>>,
{
    validate(file, limits)?;

    let bytes = read.await.ok_or(AvatarError::Unreadable)?;
    // Size may have been unknown up front.
    if bytes.len() as u64 > limits.max_bytes {
        return Err(AvatarError::TooLarge {
            limit: limits.max_bytes,
        });
    }

    debug!(file = %file.name, bytes = bytes.len(), "avatar read");
    Ok(encode_data_url(&file.mime, &bytes))
}

/// Assign the avatar in memory, then persist it.
///
/// Returns `Ok(false)` without persisting when the user is no longer present.
pub fn commit_avatar<S: SlotStore>(
    state: &mut DirectoryState,
    store: &AvatarStore<S>,
    id: UserId,
    data_url: String,
) -> Result<bool, AvatarError> {
    if !state.assign_avatar(id, data_url.clone()) {
        debug!(user = id, "avatar for unknown user ignored");
        return Ok(false);
    }
    store.save(id, &data_url)?;
    info!(user = id, "avatar saved");
    Ok(true)
}

/// The avatar map kept in one named storage slot.
#[derive(Debug, Clone)]
pub struct AvatarStore<S> {
    slots: S,
    key: String,
}

impl<S: SlotStore> AvatarStore<S> {
    pub fn new(slots: S, key: impl Into<String>) -> Self {
        Self {
            slots,
            key: key.into(),
        }
    }

    /// The stored map; an empty map when the slot was never written.
    pub fn load(&self) -> Result<AvatarMap, StorageError> {
        match self.slots.get(&self.key)? {
            Some(raw) if !raw.trim().is_empty() => Ok(serde_json::from_str(&raw)?),
            _ => Ok(AvatarMap::new()),
        }
    }

    /// Read-merge-write a single entry. A corrupt slot is replaced.
    pub fn save(&self, id: UserId, data_url: &str) -> Result<(), StorageError> {
        let mut avatars = match self.load() {
            Ok(avatars) => avatars,
            Err(StorageError::Corrupt(err)) => {
                warn!(slot = %self.key, "replacing corrupt avatar slot: {err}");
                AvatarMap::new()
            }
            Err(err) => return Err(err),
        };
        avatars.insert(id.to_string(), data_url.to_string());
        let raw = serde_json::to_string(&avatars)?;
        self.slots.set(&self.key, &raw)
    }

    /// Copy stored avatars onto matching users. Returns how many were applied.
    ///
    /// Storage problems are logged and treated as "no stored avatars".
    pub fn overlay(&self, users: &mut [User]) -> usize {
        let avatars = match self.load() {
            Ok(avatars) => avatars,
            Err(err) => {
                warn!(slot = %self.key, "ignoring stored avatars: {err}");
                return 0;
            }
        };

        let mut applied = 0;
        for user in users.iter_mut() {
            if let Some(url) = avatars.get(&user.id.to_string()) {
                if !url.is_empty() {
                    user.avatar = Some(url.clone());
                    applied += 1;
                }
            }
        }
        applied
    }
}
