pub mod users;

pub use users::{TestUserAdminService, sample_user};
