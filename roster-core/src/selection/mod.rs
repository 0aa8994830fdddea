//! Cross-page selection state
//!
//! Tracks which users the admin has selected without holding the full
//! collection in memory. Selection intent is one of three mutually exclusive
//! variants: nothing, an explicit set of ids, or every user except a set of
//! ids. Counts and header checkbox state are always derived, never stored.

mod tri_state;

pub use tri_state::HeaderTriState;

use std::collections::BTreeSet;

use roster_model::{BulkAction, BulkUpdateRequest, UserId};
use tracing::trace;

use crate::error::{Result, SelectionError};

/// Selection intent across the full collection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionState {
    /// No users selected.
    #[default]
    None,
    /// Exactly these users. Never empty once normalized.
    Explicit(BTreeSet<UserId>),
    /// Every user in the collection except these.
    AllExcept(BTreeSet<UserId>),
}

impl SelectionState {
    /// Collapses an empty explicit set to [`SelectionState::None`].
    pub fn normalized(self) -> Self {
        match self {
            SelectionState::Explicit(ids) if ids.is_empty() => {
                SelectionState::None
            }
            other => other,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SelectionState::None => "none",
            SelectionState::Explicit(_) => "explicit",
            SelectionState::AllExcept(_) => "all_except",
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, SelectionState::None)
    }

    pub fn is_all_except(&self) -> bool {
        matches!(self, SelectionState::AllExcept(_))
    }
}

/// Owns the selection state machine for one users table.
///
/// Transitions happen only through [`toggle`](Self::toggle),
/// [`toggle_select_all`](Self::toggle_select_all) and [`reset`](Self::reset);
/// everything else is a pure read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionManager {
    state: SelectionState,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: SelectionState) -> Self {
        Self {
            state: state.normalized(),
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn is_selected(&self, id: UserId) -> bool {
        match &self.state {
            SelectionState::None => false,
            SelectionState::Explicit(ids) => ids.contains(&id),
            SelectionState::AllExcept(excluded) => !excluded.contains(&id),
        }
    }

    /// Flips the row `id`.
    ///
    /// In all-except mode this only edits the exclusion set; the variant is
    /// kept even when every user ends up excluded.
    pub fn toggle(&mut self, id: UserId) {
        let previous = std::mem::take(&mut self.state);
        self.state = match previous {
            SelectionState::AllExcept(mut excluded) => {
                if !excluded.remove(&id) {
                    excluded.insert(id);
                }
                SelectionState::AllExcept(excluded)
            }
            SelectionState::Explicit(mut ids) => {
                if !ids.remove(&id) {
                    ids.insert(id);
                }
                SelectionState::Explicit(ids).normalized()
            }
            SelectionState::None => {
                SelectionState::Explicit(BTreeSet::from([id]))
            }
        };
        trace!(%id, state = self.state.name(), "selection toggled");
    }

    /// Switches between "every user" and nothing. Any explicit picks or
    /// exclusions are discarded.
    pub fn toggle_select_all(&mut self) {
        self.state = match self.state {
            SelectionState::AllExcept(_) => SelectionState::None,
            _ => SelectionState::AllExcept(BTreeSet::new()),
        };
        trace!(state = self.state.name(), "select all toggled");
    }

    pub fn reset(&mut self) {
        self.state = SelectionState::None;
        trace!("selection reset");
    }

    /// Number of selected users given the collection size last reported by
    /// the server. A stale `total_count` yields a stale count.
    pub fn selected_count(&self, total_count: u64) -> u64 {
        match &self.state {
            SelectionState::None => 0,
            SelectionState::Explicit(ids) => ids.len() as u64,
            SelectionState::AllExcept(excluded) => {
                total_count.saturating_sub(excluded.len() as u64)
            }
        }
    }

    /// Header checkbox state for the visible page.
    pub fn header_tri_state(&self, page_ids: &[UserId]) -> HeaderTriState {
        match &self.state {
            SelectionState::None => HeaderTriState::UNCHECKED,
            SelectionState::Explicit(ids) => {
                let checked = page_ids.iter().all(|id| ids.contains(id));
                let any = page_ids.iter().any(|id| ids.contains(id));
                HeaderTriState {
                    checked,
                    indeterminate: any && !checked,
                }
            }
            SelectionState::AllExcept(excluded) => {
                let any_excluded =
                    page_ids.iter().any(|id| excluded.contains(id));
                let any_included =
                    page_ids.iter().any(|id| !excluded.contains(id));
                HeaderTriState {
                    checked: !any_excluded,
                    indeterminate: any_excluded && any_included,
                }
            }
        }
    }

    /// Serializes the current intent for the bulk update endpoint.
    ///
    /// Refuses when the derived selected count is zero.
    pub fn to_bulk_request(
        &self,
        action: BulkAction,
        total_count: u64,
    ) -> Result<BulkUpdateRequest> {
        if self.selected_count(total_count) == 0 {
            return Err(SelectionError::EmptySelection);
        }
        match &self.state {
            SelectionState::None => Err(SelectionError::EmptySelection),
            SelectionState::Explicit(ids) => {
                Ok(BulkUpdateRequest::explicit(ids.iter().copied(), action))
            }
            SelectionState::AllExcept(excluded) => Ok(
                BulkUpdateRequest::all_except(excluded.iter().copied(), action),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[i64]) -> Vec<UserId> {
        raw.iter().copied().map(UserId).collect()
    }

    fn set(raw: &[i64]) -> BTreeSet<UserId> {
        raw.iter().copied().map(UserId).collect()
    }

    #[test]
    fn starts_empty() {
        let manager = SelectionManager::new();
        assert_eq!(manager.state(), &SelectionState::None);
        assert!(!manager.is_selected(UserId(1)));
        assert_eq!(manager.selected_count(47), 0);
    }

    #[test]
    fn toggling_one_row_on_a_page() {
        let mut manager = SelectionManager::new();
        manager.toggle(UserId(2));

        assert_eq!(manager.state(), &SelectionState::Explicit(set(&[2])));
        assert_eq!(
            manager.header_tri_state(&ids(&[1, 2, 3])),
            HeaderTriState {
                checked: false,
                indeterminate: true
            }
        );
        assert_eq!(manager.selected_count(47), 1);
    }

    #[test]
    fn select_all_then_exclude_one() {
        let mut manager = SelectionManager::new();
        manager.toggle_select_all();
        assert_eq!(manager.state(), &SelectionState::AllExcept(set(&[])));
        assert_eq!(manager.selected_count(47), 47);

        manager.toggle(UserId(5));
        assert_eq!(manager.state(), &SelectionState::AllExcept(set(&[5])));
        assert_eq!(manager.selected_count(47), 46);
        assert!(!manager.is_selected(UserId(5)));
        assert!(manager.is_selected(UserId(6)));
    }

    #[test]
    fn emptied_explicit_set_collapses_to_none() {
        let mut manager =
            SelectionManager::with_state(SelectionState::Explicit(set(&[1, 2])));
        manager.toggle(UserId(1));
        assert_eq!(manager.state(), &SelectionState::Explicit(set(&[2])));
        manager.toggle(UserId(2));
        assert_eq!(manager.state(), &SelectionState::None);
    }

    #[test]
    fn with_state_normalizes_empty_explicit() {
        let manager =
            SelectionManager::with_state(SelectionState::Explicit(set(&[])));
        assert!(manager.state().is_none());
    }

    #[test]
    fn all_except_does_not_collapse_when_everything_is_excluded() {
        let mut manager = SelectionManager::new();
        manager.toggle_select_all();
        for id in ids(&[1, 2, 3]) {
            manager.toggle(id);
        }
        assert_eq!(manager.state(), &SelectionState::AllExcept(set(&[1, 2, 3])));
        assert_eq!(manager.selected_count(3), 0);
        assert_eq!(
            manager.header_tri_state(&ids(&[1, 2, 3])),
            HeaderTriState::UNCHECKED
        );
    }

    #[test]
    fn select_all_discards_explicit_picks() {
        let mut manager =
            SelectionManager::with_state(SelectionState::Explicit(set(&[4, 9])));
        manager.toggle_select_all();
        assert_eq!(manager.state(), &SelectionState::AllExcept(set(&[])));
        manager.toggle_select_all();
        assert_eq!(manager.state(), &SelectionState::None);
    }

    #[test]
    fn reset_clears_exclusions() {
        let mut manager = SelectionManager::new();
        manager.toggle_select_all();
        manager.toggle(UserId(8));
        manager.reset();
        assert_eq!(manager.state(), &SelectionState::None);
    }

    #[test]
    fn header_state_for_explicit_selection() {
        let manager =
            SelectionManager::with_state(SelectionState::Explicit(set(&[1, 2, 3])));
        assert_eq!(
            manager.header_tri_state(&ids(&[1, 2, 3])),
            HeaderTriState::CHECKED
        );
        assert_eq!(
            manager.header_tri_state(&ids(&[7, 8])),
            HeaderTriState::UNCHECKED
        );
        // Vacuously checked on an empty page.
        assert_eq!(manager.header_tri_state(&[]), HeaderTriState::CHECKED);
    }

    #[test]
    fn header_state_for_all_except_selection() {
        let manager =
            SelectionManager::with_state(SelectionState::AllExcept(set(&[2])));
        assert_eq!(
            manager.header_tri_state(&ids(&[1, 2, 3])),
            HeaderTriState::INDETERMINATE
        );
        assert_eq!(
            manager.header_tri_state(&ids(&[11, 12])),
            HeaderTriState::CHECKED
        );
        assert_eq!(manager.header_tri_state(&[]), HeaderTriState::CHECKED);
    }

    #[test]
    fn bulk_request_for_explicit_selection() {
        let manager =
            SelectionManager::with_state(SelectionState::Explicit(set(&[7, 3])));
        let request = manager.to_bulk_request(BulkAction::Activate, 47).unwrap();
        assert_eq!(
            request,
            BulkUpdateRequest::explicit(ids(&[3, 7]), BulkAction::Activate)
        );
    }

    #[test]
    fn bulk_request_for_all_except_selection() {
        let manager =
            SelectionManager::with_state(SelectionState::AllExcept(set(&[5])));
        let request =
            manager.to_bulk_request(BulkAction::Deactivate, 47).unwrap();
        assert_eq!(
            request,
            BulkUpdateRequest::all_except(ids(&[5]), BulkAction::Deactivate)
        );
    }

    #[test]
    fn bulk_request_refused_when_nothing_is_selected() {
        let none = SelectionManager::new();
        assert_eq!(
            none.to_bulk_request(BulkAction::Activate, 47),
            Err(SelectionError::EmptySelection)
        );

        let all_excluded =
            SelectionManager::with_state(SelectionState::AllExcept(set(&[1, 2])));
        assert_eq!(
            all_excluded.to_bulk_request(BulkAction::Activate, 2),
            Err(SelectionError::EmptySelection)
        );

        let empty_collection = SelectionManager::with_state(
            SelectionState::AllExcept(BTreeSet::new()),
        );
        assert_eq!(
            empty_collection.to_bulk_request(BulkAction::Activate, 0),
            Err(SelectionError::EmptySelection)
        );
    }
}
