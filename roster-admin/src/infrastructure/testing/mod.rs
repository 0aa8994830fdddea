//! In-memory test doubles for the admin ports.

pub mod stubs;
