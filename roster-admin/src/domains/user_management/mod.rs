//! User management domain
//!
//! Contains the users table state (paging, cross-page selection, bulk
//! action) and the logic driving it

pub mod effects;
pub mod messages;
pub mod update;

use std::collections::{BTreeSet, VecDeque};
use std::sync::Arc;

use roster_core::{FetchSequencer, LoadedPage, PageCursor, SelectionManager};
use roster_model::{BulkAction, UserId};

use self::effects::{Effect, UserManagementRuntime};
use self::messages::Message as UserManagementMessage;
use self::update::update_user_management;
use crate::infrastructure::services::UserAdminService;
use crate::view_model::UsersTableView;

/// Whether a bulk submission is waiting on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    /// `expected_count` is the selected count at submit time.
    InFlight { expected_count: u64 },
}

impl SubmissionState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionState::InFlight { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Blocking notification shown until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// User management domain state
#[derive(Debug, Clone, Default)]
pub struct UserManagementState {
    pub cursor: PageCursor,
    pub sequencer: FetchSequencer,
    /// Last successfully loaded page; kept when a later fetch fails.
    pub page: Option<LoadedPage>,
    pub selection: SelectionManager,
    pub bulk_action: BulkAction,
    pub submission: SubmissionState,
    /// Users whose per-row status change is waiting on the server.
    pub pending_status: BTreeSet<UserId>,
    pub notice: Option<Notice>,
    pub loading: bool,
}

impl UserManagementState {
    pub fn new(page_size: u64) -> Self {
        Self {
            cursor: PageCursor::new(page_size),
            ..Self::default()
        }
    }

    /// Collection size from the last loaded page, if any page has loaded.
    pub fn total_count(&self) -> Option<u64> {
        self.page.as_ref().map(LoadedPage::total)
    }

    pub fn selected_count(&self) -> u64 {
        self.total_count()
            .map(|total| self.selection.selected_count(total))
            .unwrap_or(0)
    }

    pub fn can_submit(&self) -> bool {
        !self.submission.is_in_flight() && self.selected_count() > 0
    }
}

/// Users table controller: state plus the runtime that talks to the server.
pub struct UserManagementDomain {
    pub state: UserManagementState,
    runtime: UserManagementRuntime,
}

impl std::fmt::Debug for UserManagementDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserManagementDomain")
            .field("state", &self.state)
            .finish()
    }
}

impl UserManagementDomain {
    pub fn new(service: Arc<dyn UserAdminService>, page_size: u64) -> Self {
        Self {
            state: UserManagementState::new(page_size),
            runtime: UserManagementRuntime::new(service),
        }
    }

    /// Apply one message without performing its effects.
    pub fn update(&mut self, message: UserManagementMessage) -> Effect {
        update_user_management(&mut self.state, message)
    }

    /// Apply `message` and keep performing effects until none remain.
    /// Network calls are awaited one after another.
    pub async fn dispatch(&mut self, message: UserManagementMessage) {
        let mut pending = VecDeque::from([message]);
        while let Some(message) = pending.pop_front() {
            let effect = self.update(message);
            if effect.is_none() {
                continue;
            }
            pending.extend(self.runtime.perform(effect).await);
        }
    }

    /// Perform an effect obtained from [`update`](Self::update) and return
    /// the follow-up messages without applying them.
    pub async fn perform(&self, effect: Effect) -> Vec<UserManagementMessage> {
        self.runtime.perform(effect).await
    }

    pub fn view(&self) -> UsersTableView {
        UsersTableView::build(&self.state)
    }
}
