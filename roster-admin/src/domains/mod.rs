//! Domain modules for Roster admin
//!
//! Each domain owns its state, messages and update function; effects are
//! performed by the domain's runtime against the infrastructure services.

pub mod user_management;
