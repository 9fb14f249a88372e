mod action;
mod action_flags;
mod matrix_row;
mod permission_catalog;
mod permission_matrix;
mod role_draft;
mod role_permissions;
mod user_status;
