//! Initial load: fetch the listing once and overlay stored avatars.

use api::{DirectoryClient, LoadError, RemoteUser};
use tracing::info;

use crate::core::config::DirectoryConfig;
use crate::core::storage::SlotStore;

use super::avatar::AvatarStore;
use super::state::DirectoryState;
use super::user::User;

/// Fetch users from the configured endpoint and build the ready state.
pub async fn load_directory<S: SlotStore>(
    config: &DirectoryConfig,
    store: &AvatarStore<S>,
) -> Result<DirectoryState, LoadError> {
    let client = DirectoryClient::new(config.users_endpoint.clone());
    let remote = client.fetch_users().await?;
    Ok(assemble(remote, store))
}

/// Tag every record with no avatar, then apply whatever the store holds.
pub fn assemble<S: SlotStore>(remote: Vec<RemoteUser>, store: &AvatarStore<S>) -> DirectoryState {
    let mut users: Vec<User> = remote.into_iter().map(User::from).collect();
    let restored = store.overlay(&mut users);
    info!(users = users.len(), restored, "directory ready");
    DirectoryState::new(users)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemorySlots;

    fn remote(id: u64, first: &str, age: u32) -> RemoteUser {
        RemoteUser {
            id,
            first_name: first.into(),
            last_name: "Doe".into(),
            age,
            email: format!("{id}@example.com"),
        }
    }

    #[test]
    fn assemble_keeps_source_order_and_restores_avatars() {
        let store = AvatarStore::new(MemorySlots::new(), "userAvatars");
        store.save(2, "data:image/png;base64,AA==").unwrap();

        let state = assemble(vec![remote(3, "Cy", 40), remote(2, "Bo", 20)], &store);

        let ids: Vec<u64> = state.users().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![3, 2]);
        assert_eq!(state.users()[0].avatar, None);
        assert_eq!(
            state.users()[1].avatar.as_deref(),
            Some("data:image/png;base64,AA==")
        );
    }

    #[test]
    fn empty_listing_is_ready_but_empty() {
        let store = AvatarStore::new(MemorySlots::new(), "userAvatars");
        let state = assemble(Vec::new(), &store);
        assert!(state.visible().is_empty());
    }
}
