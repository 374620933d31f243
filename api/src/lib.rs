//! Client for the remote user directory. Shared by every platform crate through `ui`.

mod client;
mod model;

pub use client::{parse_users, DirectoryClient, LoadError, DEFAULT_USERS_ENDPOINT};
pub use model::{RemoteUser, UsersResponse};
