use thiserror::Error;
use tracing::{debug, info};

use crate::model::{RemoteUser, UsersResponse};

pub const DEFAULT_USERS_ENDPOINT: &str = "https://dummyjson.com/users";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("directory answered with HTTP {0}")]
    Status(u16),
    #[error("malformed user listing: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Thin wrapper over `reqwest` for the single listing call the app makes.
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    http: reqwest::Client,
    endpoint: String,
}

impl DirectoryClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Fetch the full user collection. No retries; the transport's own timeouts apply.
    pub async fn fetch_users(&self) -> Result<Vec<RemoteUser>, LoadError> {
        debug!(endpoint = %self.endpoint, "fetching user listing");
        let response = self.http.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let users = parse_users(&body)?;
        info!(count = users.len(), "user listing received");
        Ok(users)
    }
}

impl Default for DirectoryClient {
    fn default() -> Self {
        Self::new(DEFAULT_USERS_ENDPOINT)
    }
}

/// Decode a listing body. A missing `users` array counts as malformed.
pub fn parse_users(body: &str) -> Result<Vec<RemoteUser>, LoadError> {
    let envelope: UsersResponse = serde_json::from_str(body)?;
    Ok(envelope.users)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "users": [
            {
                "id": 1,
                "firstName": "Emily",
                "lastName": "Johnson",
                "maidenName": "Smith",
                "age": 28,
                "gender": "female",
                "email": "emily.johnson@x.dummyjson.com",
                "address": { "city": "Phoenix" }
            },
            {
                "id": 2,
                "firstName": "Michael",
                "lastName": "Williams",
                "age": 35,
                "email": "michael.williams@x.dummyjson.com"
            }
        ],
        "total": 208,
        "skip": 0,
        "limit": 30
    }"#;

    #[test]
    fn parses_listing_and_ignores_extra_fields() {
        let users = parse_users(SAMPLE).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].first_name, "Emily");
        assert_eq!(users[0].last_name, "Johnson");
        assert_eq!(users[1].age, 35);
    }

    #[test]
    fn missing_users_array_is_malformed() {
        let err = parse_users(r#"{"message":"Not found"}"#).unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
    }

    #[test]
    fn record_without_required_field_is_malformed() {
        let body = r#"{"users":[{"id":1,"firstName":"A","lastName":"B","email":"a@b"}]}"#;
        assert!(matches!(parse_users(body), Err(LoadError::Decode(_))));
    }

    #[test]
    fn garbage_body_is_malformed() {
        assert!(parse_users("<html>").is_err());
    }
}
