use log::{debug, error, info, warn};
use roster_core::LoadedPage;
use roster_model::{BulkAction, BulkUpdateRequest};

use super::effects::Effect;
use super::messages::Message;
use super::{Notice, SubmissionState, UserManagementState};

/// Handle user management domain messages
pub fn update_user_management(
    state: &mut UserManagementState,
    message: Message,
) -> Effect {
    debug!("User management update: {}", message.name());

    match message {
        // Paging
        Message::LoadPage => refresh_current_page(state),

        Message::PageChanged(page_index) => {
            info!("Switching to users page {}", page_index);
            state.cursor.go_to(page_index);
            refresh_current_page(state)
        }

        Message::PageLoaded {
            seq,
            page_index,
            result,
        } => {
            if !state.sequencer.accept(seq) {
                return Effect::none();
            }
            state.loading = false;
            match result {
                Ok(page) => {
                    info!(
                        "Loaded {} users (page {}, total {})",
                        page.items.len(),
                        page_index,
                        page.total
                    );
                    state.page = Some(LoadedPage::new(page_index, page));
                }
                Err(err) => {
                    error!("Failed to load users: {}", err);
                    state.notice =
                        Some(Notice::error(format!("Failed to load users: {err}")));
                }
            }
            Effect::none()
        }

        // Selection
        Message::ToggleRow(id) => {
            state.selection.toggle(id);
            Effect::none()
        }

        Message::ToggleSelectAll => {
            state.selection.toggle_select_all();
            Effect::none()
        }

        Message::ClearSelection => {
            state.selection.reset();
            Effect::none()
        }

        // Bulk actions
        Message::SetBulkAction(action) => {
            state.bulk_action = action;
            Effect::none()
        }

        Message::SubmitBulkUpdate => submit_bulk_update(state),

        Message::BulkUpdateCompleted(result) => {
            let submitted = std::mem::take(&mut state.submission);
            match result {
                Ok(outcome) => {
                    let expected = match submitted {
                        SubmissionState::InFlight { expected_count } => {
                            expected_count
                        }
                        SubmissionState::Idle => state.selected_count(),
                    };
                    let updated = outcome.updated_count.unwrap_or(expected);
                    info!("Bulk update applied to {} users", updated);

                    state.selection.reset();
                    state.notice = Some(Notice::success(format!(
                        "Updated {} {} successfully!",
                        updated,
                        user_noun(updated)
                    )));
                    refresh_current_page(state)
                }
                Err(err) => {
                    error!("Bulk update error: {}", err);
                    state.notice =
                        Some(Notice::error(format!("Bulk update failed: {err}")));
                    Effect::none()
                }
            }
        }

        // Per-row status button
        Message::ToggleUserStatus(id) => {
            if state.pending_status.contains(&id) {
                debug!("Status change for user {} already in flight", id);
                return Effect::none();
            }
            let Some(record) = state
                .page
                .as_ref()
                .and_then(|loaded| loaded.page().get(id))
            else {
                warn!("Ignoring status toggle for user {} not on this page", id);
                return Effect::none();
            };

            let action = BulkAction::from_active(!record.active);
            info!("{} user {}", action, id);
            state.pending_status.insert(id);
            Effect::ApplyStatus {
                id,
                request: BulkUpdateRequest::explicit([id], action),
            }
        }

        Message::UserStatusUpdated { id, result } => {
            state.pending_status.remove(&id);
            match result {
                Ok(_) => refresh_current_page(state),
                Err(err) => {
                    error!("Failed to update status of user {}: {}", id, err);
                    state.notice = Some(Notice::error(format!(
                        "Failed to update user status: {err}"
                    )));
                    Effect::none()
                }
            }
        }

        Message::DismissNotice => {
            state.notice = None;
            Effect::none()
        }
    }
}

fn refresh_current_page(state: &mut UserManagementState) -> Effect {
    match state.sequencer.issue(&state.cursor) {
        Ok(ticket) => {
            state.loading = true;
            Effect::FetchPage(ticket)
        }
        Err(err) => {
            error!("Cannot request users page: {}", err);
            state.notice =
                Some(Notice::error(format!("Failed to load users: {err}")));
            Effect::none()
        }
    }
}

fn submit_bulk_update(state: &mut UserManagementState) -> Effect {
    if state.submission.is_in_flight() {
        debug!("Bulk update already in flight; ignoring submit");
        return Effect::none();
    }
    let Some(total) = state.total_count() else {
        debug!("No page loaded yet; ignoring submit");
        return Effect::none();
    };

    match state.selection.to_bulk_request(state.bulk_action, total) {
        Ok(request) => {
            let expected_count = state.selection.selected_count(total);
            info!(
                "Submitting {} bulk update for {} users",
                request.mode(),
                expected_count
            );
            state.submission = SubmissionState::InFlight { expected_count };
            Effect::ApplyBulk(request)
        }
        Err(err) => {
            debug!("Ignoring submit: {}", err);
            Effect::none()
        }
    }
}

fn user_noun(count: u64) -> &'static str {
    if count == 1 { "user" } else { "users" }
}
