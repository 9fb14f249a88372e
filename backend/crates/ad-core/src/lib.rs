pub mod error;
pub mod models;
pub mod store;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, FieldError, Result};
pub use models::action::Action;
pub use models::action_flags::ActionFlags;
pub use models::matrix_row::{MatrixCell, MatrixRow};
pub use models::permission_catalog::PermissionCatalog;
pub use models::permission_matrix::PermissionMatrix;
pub use models::role_draft::{ResourceSummary, RoleDraft};
pub use models::role_permissions::RolePermissions;
pub use models::user::User;
pub use models::user_fields::UserFields;
pub use models::user_status::UserStatus;
pub use store::Snapshot;
pub use store::role_store::RoleStore;
pub use store::user_store::UserStore;

pub const DEFAULT_USER_ROLE: &str = "Viewer";
pub const DEFAULT_RESOURCES: [&str; 4] = ["events", "users", "products", "orders"];

pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_ROLE: &str = "role";
pub const FIELD_PERMISSIONS: &str = "permissions";
