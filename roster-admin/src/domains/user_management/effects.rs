//! Side effects requested by the user management update function and the
//! runtime that performs them.

use std::collections::VecDeque;
use std::sync::Arc;

use log::debug;
use roster_core::FetchTicket;
use roster_model::{BulkUpdateRequest, UserId};

use super::messages::Message;
use crate::infrastructure::services::UserAdminService;

/// Work the update function asks the runtime to do.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Effect {
    #[default]
    None,
    /// Load one page; the response is tagged with the ticket's sequence.
    FetchPage(FetchTicket),
    /// Submit the selection as a bulk update.
    ApplyBulk(BulkUpdateRequest),
    /// Flip one user's status through the bulk endpoint.
    ApplyStatus {
        id: UserId,
        request: BulkUpdateRequest,
    },
    Batch(Vec<Effect>),
}

impl Effect {
    pub fn none() -> Self {
        Effect::None
    }

    pub fn batch(effects: impl IntoIterator<Item = Effect>) -> Self {
        Effect::Batch(effects.into_iter().collect())
    }

    pub fn is_none(&self) -> bool {
        match self {
            Effect::None => true,
            Effect::Batch(effects) => effects.iter().all(Effect::is_none),
            _ => false,
        }
    }

    /// Leaf effects in execution order.
    pub fn flatten(self) -> Vec<Effect> {
        let mut queue = VecDeque::from([self]);
        let mut leaves = Vec::new();
        while let Some(effect) = queue.pop_front() {
            match effect {
                Effect::None => {}
                Effect::Batch(effects) => {
                    for (i, nested) in effects.into_iter().enumerate() {
                        queue.insert(i, nested);
                    }
                }
                leaf => leaves.push(leaf),
            }
        }
        leaves
    }
}

/// Executes effects against the users service, one at a time.
#[derive(Clone)]
pub struct UserManagementRuntime {
    service: Arc<dyn UserAdminService>,
}

impl std::fmt::Debug for UserManagementRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserManagementRuntime").finish_non_exhaustive()
    }
}

impl UserManagementRuntime {
    pub fn new(service: Arc<dyn UserAdminService>) -> Self {
        Self { service }
    }

    /// Runs every leaf of `effect` sequentially and returns the resulting
    /// messages in the same order.
    pub async fn perform(&self, effect: Effect) -> Vec<Message> {
        let mut messages = Vec::new();
        for leaf in effect.flatten() {
            if let Some(message) = self.perform_one(leaf).await {
                messages.push(message);
            }
        }
        messages
    }

    async fn perform_one(&self, effect: Effect) -> Option<Message> {
        match effect {
            Effect::FetchPage(ticket) => {
                debug!(
                    "[UserManagement] Fetching page {} (seq {})",
                    ticket.page_index, ticket.seq
                );
                let result = self.service.fetch_page(ticket.query).await;
                Some(Message::PageLoaded {
                    seq: ticket.seq,
                    page_index: ticket.page_index,
                    result,
                })
            }
            Effect::ApplyBulk(request) => {
                let result = self.service.apply(&request).await;
                Some(Message::BulkUpdateCompleted(result))
            }
            Effect::ApplyStatus { id, request } => {
                let result = self.service.apply(&request).await;
                Some(Message::UserStatusUpdated { id, result })
            }
            Effect::None | Effect::Batch(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{FetchSequencer, PageCursor};
    use roster_model::BulkAction;

    #[test]
    fn flatten_keeps_nested_order() {
        let mut sequencer = FetchSequencer::new();
        let ticket = sequencer.issue(&PageCursor::default()).unwrap();
        let bulk = BulkUpdateRequest::explicit([UserId(1)], BulkAction::Activate);

        let effect = Effect::batch([
            Effect::ApplyBulk(bulk.clone()),
            Effect::batch([Effect::None, Effect::FetchPage(ticket)]),
            Effect::None,
        ]);

        assert_eq!(
            effect.flatten(),
            vec![Effect::ApplyBulk(bulk), Effect::FetchPage(ticket)]
        );
    }

    #[test]
    fn empty_batches_count_as_none() {
        assert!(Effect::batch([Effect::None, Effect::batch([])]).is_none());
        assert!(!Effect::ApplyBulk(BulkUpdateRequest::explicit(
            [UserId(2)],
            BulkAction::Deactivate
        ))
        .is_none());
    }
}
