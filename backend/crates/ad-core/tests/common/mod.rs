#![allow(dead_code)]

use ad_core::{
    Action, ActionFlags, PermissionCatalog, RolePermissions, RoleStore, UserFields, UserStatus,
    UserStore,
};

pub fn user_fields(name: &str, email: &str) -> UserFields {
    UserFields::new(name, email, "Viewer", UserStatus::Active)
}

pub fn store_with_users(count: usize) -> UserStore {
    let mut store = UserStore::new();
    for i in 0..count {
        store
            .create(user_fields(&format!("User {i}"), &format!("user{i}@example.com")))
            .unwrap();
    }
    store
}

/// Admin, Editor and Viewer as a fresh dashboard ships them
pub fn stock_role_store() -> RoleStore {
    RoleStore::with_seed(PermissionCatalog::default(), RolePermissions::stock_roles()).unwrap()
}

/// Store seeded with a "Viewer" whose flags are all false on every resource
pub fn store_with_blank_viewer() -> RoleStore {
    let catalog = PermissionCatalog::default();
    let mut viewer = RolePermissions::new("Viewer");
    for resource in catalog.resources() {
        viewer = viewer.with_resource(resource.clone(), ActionFlags::NONE);
    }
    RoleStore::with_seed(catalog, vec![viewer]).unwrap()
}

pub fn flags(actions: &[Action]) -> ActionFlags {
    ActionFlags::with(actions)
}
