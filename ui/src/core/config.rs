//! Runtime configuration for the user directory.

use tracing::warn;

pub use api::DEFAULT_USERS_ENDPOINT;

/// Storage slot holding the persisted avatar map.
pub const DEFAULT_AVATAR_SLOT: &str = "userAvatars";

/// Largest avatar accepted, in bytes (5 MiB).
pub const DEFAULT_MAX_AVATAR_BYTES: u64 = 5 * 1024 * 1024;

const ENV_USERS_ENDPOINT: &str = "ROLLCALL_USERS_ENDPOINT";
const ENV_AVATAR_SLOT: &str = "ROLLCALL_AVATAR_SLOT";
const ENV_MAX_AVATAR_BYTES: &str = "ROLLCALL_MAX_AVATAR_BYTES";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryConfig {
    pub users_endpoint: String,
    pub avatar_slot: String,
    pub max_avatar_bytes: u64,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            users_endpoint: DEFAULT_USERS_ENDPOINT.to_string(),
            avatar_slot: DEFAULT_AVATAR_SLOT.to_string(),
            max_avatar_bytes: DEFAULT_MAX_AVATAR_BYTES,
        }
    }
}

impl DirectoryConfig {
    /// Defaults overridden by `ROLLCALL_*` environment variables (native builds).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(endpoint) = non_blank(lookup(ENV_USERS_ENDPOINT)) {
            config.users_endpoint = endpoint;
        }
        if let Some(slot) = non_blank(lookup(ENV_AVATAR_SLOT)) {
            config.avatar_slot = slot;
        }
        if let Some(raw) = non_blank(lookup(ENV_MAX_AVATAR_BYTES)) {
            match raw.parse::<u64>() {
                Ok(bytes) if bytes > 0 => config.max_avatar_bytes = bytes,
                _ => warn!(value = %raw, "ignoring invalid {ENV_MAX_AVATAR_BYTES}"),
            }
        }

        config
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
