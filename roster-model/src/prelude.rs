//! Admin/UI focused snapshot of the model surface.
//! Prefer importing from this module instead of individual tree nodes when
//! working in roster-admin or other presentation layers.

pub use super::bulk::{
    BulkAction, BulkUpdateRequest, BulkUpdateResponse, UserPatch,
};
pub use super::ids::UserId;
pub use super::page::{Page, PageQuery};
pub use super::user::UserRecord;
