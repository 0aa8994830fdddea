//! API Routes Constants for Roster Admin
//!
//! Endpoints of the users API consumed by the admin table.

/// User listing and bulk update endpoints
pub mod users {
    /// Paged listing (`?skip={offset}&limit={limit}`)
    pub const LIST: &str = "/users";
    /// Bulk activate/deactivate
    pub const BULK_UPDATE: &str = "/users/bulk-update";
}
