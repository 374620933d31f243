//! In-memory user record.

use api::RemoteUser;

pub type UserId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub email: String,
    /// Data URL of the viewer's chosen photo, if any.
    pub avatar: Option<String>,
}

impl User {
    pub fn has_avatar(&self) -> bool {
        self.avatar.is_some()
    }

    /// Element id of this user's hidden file input.
    pub fn avatar_input_id(&self) -> String {
        format!("avatar-input-{}", self.id)
    }
}

impl From<RemoteUser> for User {
    fn from(remote: RemoteUser) -> Self {
        Self {
            id: remote.id,
            first_name: remote.first_name,
            last_name: remote.last_name,
            age: remote.age,
            email: remote.email,
            avatar: None,
        }
    }
}

#[cfg(test)]
pub(crate) fn sample(id: UserId, first: &str, last: &str, age: u32) -> User {
    User {
        id,
        first_name: first.into(),
        last_name: last.into(),
        age,
        email: format!("{}@example.com", first.to_lowercase()),
        avatar: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_records_start_without_avatar() {
        let user = User::from(RemoteUser {
            id: 7,
            first_name: "Ann".into(),
            last_name: "Lee".into(),
            age: 40,
            email: "ann@example.com".into(),
        });
        assert_eq!(user.avatar, None);
        assert!(!user.has_avatar());
        assert_eq!(user.avatar_input_id(), "avatar-input-7");
    }
}
