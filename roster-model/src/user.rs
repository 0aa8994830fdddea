use crate::ids::UserId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single user row as returned by the users listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UserRecord {
    pub id: UserId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub email: String,
    pub active: bool,
}

impl UserRecord {
    pub fn new(
        id: impl Into<UserId>,
        name: impl Into<String>,
        email: impl Into<String>,
        active: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            active,
        }
    }
}
