pub mod action;
pub mod action_flags;
pub mod matrix_row;
pub mod permission_catalog;
pub mod permission_matrix;
pub mod role_draft;
pub mod role_permissions;
pub mod user;
pub mod user_fields;
pub mod user_status;
