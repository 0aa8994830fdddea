//! Toolkit-independent snapshot of the users table.
//!
//! Rebuilt from [`UserManagementState`] on every render; nothing here is
//! cached between renders.

use roster_core::{HeaderTriState, LoadedPage};
use roster_model::{BulkAction, UserId};

use crate::domains::user_management::{Notice, UserManagementState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub active: bool,
    pub checked: bool,
    /// Label of the per-row status button.
    pub status_action_label: &'static str,
    /// A status change for this row is waiting on the server.
    pub status_pending: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersTableView {
    pub rows: Vec<UserRow>,
    pub header: HeaderTriState,
    pub selected_count: u64,
    pub page_count: u64,
    /// Page the admin last asked for.
    pub current_page: u64,
    /// Page whose rows are shown. Differs from `current_page` while a fetch
    /// is pending or after one failed.
    pub displayed_page: Option<u64>,
    pub loading: bool,
    pub bulk_action: BulkAction,
    pub submit: SubmitButton,
    pub notice: Option<Notice>,
}

impl UsersTableView {
    pub fn build(state: &UserManagementState) -> Self {
        let total = state.total_count().unwrap_or(0);
        let selection = &state.selection;

        let (rows, page_ids) = match &state.page {
            Some(loaded) => {
                let rows = loaded
                    .page()
                    .items
                    .iter()
                    .map(|record| UserRow {
                        id: record.id,
                        name: record.name.clone(),
                        email: record.email.clone(),
                        active: record.active,
                        checked: selection.is_selected(record.id),
                        status_action_label: BulkAction::from_active(
                            !record.active,
                        )
                        .label(),
                        status_pending: state.pending_status.contains(&record.id),
                    })
                    .collect();
                (rows, loaded.ids())
            }
            None => (Vec::new(), Vec::new()),
        };

        let selected_count = state.selected_count();

        Self {
            rows,
            header: selection.header_tri_state(&page_ids),
            selected_count,
            page_count: state.cursor.page_count(total),
            current_page: state.cursor.page_index(),
            displayed_page: state.page.as_ref().map(LoadedPage::page_index),
            loading: state.loading,
            bulk_action: state.bulk_action,
            submit: SubmitButton {
                label: submit_label(state.bulk_action, selected_count),
                enabled: state.can_submit(),
            },
            notice: state.notice.clone(),
        }
    }
}

fn submit_label(action: BulkAction, count: u64) -> String {
    let noun = if count == 1 { "User" } else { "Users" };
    format!("{} {} {}", action.label(), count, noun)
}
