//! User entity - represents a registered account

/// User entity
///
/// Accounts are created at seed time and authenticate with a static
/// secret key; there are no update or delete operations for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub secret_key: String,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: i64, name: String, secret_key: String) -> Self {
        Self {
            id,
            name,
            secret_key,
        }
    }

    /// Public `{id, name}` view of this user
    pub fn as_ref_view(&self) -> UserRef {
        UserRef {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

/// Minimal public reference to a user: id plus display name.
///
/// Used wherever a user appears inside another aggregate (tweet author,
/// liker, follower) so the secret key never leaves the domain layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRef {
    pub id: i64,
    pub name: String,
}

impl UserRef {
    /// Create a new UserRef
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
