//! Wire records returned by the user listing endpoint.

use serde::Deserialize;

/// One user as served by the directory. Fields the app does not display are ignored.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RemoteUser {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub email: String,
}

/// Envelope of the listing response. Paging fields are tolerated but unused.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UsersResponse {
    pub users: Vec<RemoteUser>,
}
