//! Application state for the directory page.

use super::filter::{filter_by_age, AgeFilter};
use super::sort::{sort_users, SortKey};
use super::user::{User, UserId};

/// Where the initial load stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

impl LoadPhase {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

/// Full user collection plus the viewer's current filter and sort.
///
/// The visible list is always recomputed from `users`; nothing is patched incrementally.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirectoryState {
    users: Vec<User>,
    filter: AgeFilter,
    sort: SortKey,
}

impl DirectoryState {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users,
            ..Self::default()
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn filter(&self) -> AgeFilter {
        self.filter
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn set_filter(&mut self, filter: AgeFilter) {
        self.filter = filter;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    /// Back to all ages in source order.
    pub fn reset(&mut self) {
        self.filter = AgeFilter::default();
        self.sort = SortKey::default();
    }

    /// Filter first, then sort.
    pub fn visible(&self) -> Vec<User> {
        sort_users(&filter_by_age(&self.users, self.filter), self.sort)
    }

    /// Set a user's avatar. Returns `false` when the id is not in the collection.
    pub fn assign_avatar(&mut self, id: UserId, data_url: String) -> bool {
        match self.users.iter_mut().find(|user| user.id == id) {
            Some(user) => {
                user.avatar = Some(data_url);
                true
            }
            None => false,
        }
    }
}
