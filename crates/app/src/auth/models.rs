//! Auth data models.

use serde::{Deserialize, Serialize};

salesdesk::time_ordered_id! {
    /// User UUID
    pub struct UserUuid;
}

/// Signed-in user, as persisted in the session file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub uuid: UserUuid,
    pub email: String,
    pub name: String,
}

/// Registration payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub name: String,
}
