use std::collections::BTreeSet;
use std::str::FromStr;

use crate::error::ModelError;
use crate::ids::UserId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Field change applied by a bulk update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BulkAction {
    Activate,
    #[default]
    Deactivate,
}

impl BulkAction {
    pub fn all() -> &'static [BulkAction] {
        &[BulkAction::Activate, BulkAction::Deactivate]
    }

    /// Value written to the `active` column.
    pub fn sets_active(self) -> bool {
        matches!(self, BulkAction::Activate)
    }

    pub fn from_active(active: bool) -> Self {
        if active {
            BulkAction::Activate
        } else {
            BulkAction::Deactivate
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BulkAction::Activate => "Activate",
            BulkAction::Deactivate => "Deactivate",
        }
    }
}

impl std::fmt::Display for BulkAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for BulkAction {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "activate" => Ok(BulkAction::Activate),
            "deactivate" | "inactivate" => Ok(BulkAction::Deactivate),
            _ => Err(ModelError::UnknownBulkAction(s.to_string())),
        }
    }
}

/// Field changes carried in the `payload` member of a bulk update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UserPatch {
    pub active: bool,
}

impl From<BulkAction> for UserPatch {
    fn from(action: BulkAction) -> Self {
        Self {
            active: action.sets_active(),
        }
    }
}

/// Body of `PUT /users/bulk-update`.
///
/// Tagged by `mode`:
///
/// ```json
/// {"mode": "explicit", "ids": [3, 7], "payload": {"active": true}}
/// {"mode": "allExcept", "excludeIds": [5], "payload": {"active": false}}
/// ```
///
/// Id sets serialize in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "mode", rename_all = "camelCase")
)]
pub enum BulkUpdateRequest {
    /// Exactly these users.
    Explicit {
        ids: BTreeSet<UserId>,
        payload: UserPatch,
    },
    /// Every user in the collection except these.
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    AllExcept {
        exclude_ids: BTreeSet<UserId>,
        payload: UserPatch,
    },
}

impl BulkUpdateRequest {
    pub fn explicit(
        ids: impl IntoIterator<Item = UserId>,
        action: BulkAction,
    ) -> Self {
        Self::Explicit {
            ids: ids.into_iter().collect(),
            payload: action.into(),
        }
    }

    pub fn all_except(
        exclude_ids: impl IntoIterator<Item = UserId>,
        action: BulkAction,
    ) -> Self {
        Self::AllExcept {
            exclude_ids: exclude_ids.into_iter().collect(),
            payload: action.into(),
        }
    }

    pub fn payload(&self) -> UserPatch {
        match self {
            Self::Explicit { payload, .. } | Self::AllExcept { payload, .. } => {
                *payload
            }
        }
    }

    pub fn set_active(&self) -> bool {
        self.payload().active
    }

    pub fn action(&self) -> BulkAction {
        BulkAction::from_active(self.set_active())
    }

    pub fn mode(&self) -> &'static str {
        match self {
            Self::Explicit { .. } => "explicit",
            Self::AllExcept { .. } => "allExcept",
        }
    }
}

/// Optional success body of the bulk update endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BulkUpdateResponse {
    #[cfg_attr(feature = "serde", serde(default))]
    pub message: String,
    /// Absent when the server only acknowledges the update.
    #[cfg_attr(feature = "serde", serde(default))]
    pub updated_count: Option<u64>,
}
