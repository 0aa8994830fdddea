use roster_core::{BulkUpdateOutcome, FetchError, UpdateError};
use roster_model::{BulkAction, Page, UserId};

#[derive(Clone, Debug)]
pub enum Message {
    // Paging
    LoadPage,
    PageChanged(u64),
    PageLoaded {
        seq: u64,
        page_index: u64,
        result: Result<Page, FetchError>,
    },

    // Selection
    ToggleRow(UserId),
    ToggleSelectAll,
    ClearSelection,

    // Bulk actions
    SetBulkAction(BulkAction),
    SubmitBulkUpdate,
    BulkUpdateCompleted(Result<BulkUpdateOutcome, UpdateError>),

    // Per-row status button
    ToggleUserStatus(UserId),
    UserStatusUpdated {
        id: UserId,
        result: Result<BulkUpdateOutcome, UpdateError>,
    },

    DismissNotice,
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadPage => "UserManagement::LoadPage",
            Self::PageChanged(_) => "UserManagement::PageChanged",
            Self::PageLoaded { .. } => "UserManagement::PageLoaded",
            Self::ToggleRow(_) => "UserManagement::ToggleRow",
            Self::ToggleSelectAll => "UserManagement::ToggleSelectAll",
            Self::ClearSelection => "UserManagement::ClearSelection",
            Self::SetBulkAction(_) => "UserManagement::SetBulkAction",
            Self::SubmitBulkUpdate => "UserManagement::SubmitBulkUpdate",
            Self::BulkUpdateCompleted(_) => {
                "UserManagement::BulkUpdateCompleted"
            }
            Self::ToggleUserStatus(_) => "UserManagement::ToggleUserStatus",
            Self::UserStatusUpdated { .. } => {
                "UserManagement::UserStatusUpdated"
            }
            Self::DismissNotice => "UserManagement::DismissNotice",
        }
    }
}
