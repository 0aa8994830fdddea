//! Core library for Roster.
//!
//! Holds the cross-page selection state machine behind the admin users
//! table, the paging/fetch sequencing rules, and the contracts of the
//! external page provider and bulk update service.

#![allow(missing_docs)]

pub mod error;
pub mod paging;
pub mod ports;
pub mod selection;

pub use error::{FetchError, SelectionError, UpdateError};
pub use paging::{
    DEFAULT_PAGE_SIZE, FetchSequencer, FetchTicket, LoadedPage, PageCursor,
};
pub use ports::{BulkUpdateOutcome, BulkUpdateService, PageDataProvider};
pub use selection::{HeaderTriState, SelectionManager, SelectionState};

// Re-export the model crate so downstream crates share one set of types.
pub use roster_model;
