
use crate::Session;

use ad_core::{PermissionCatalog, RolePermissions, RoleStore, UserFields, UserStore};

/// Session with the stock roles and no users
pub(crate) fn stock_session() -> Session {
    let roles =
        RoleStore::with_seed(PermissionCatalog::default(), RolePermissions::stock_roles()).unwrap();
    Session::new(UserStore::new(), roles, UserFields::default())
}
