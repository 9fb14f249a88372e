use crate::{Action, ActionFlags, PermissionCatalog, RolePermissions};

fn catalog(resources: &[&str], actions: &[Action]) -> PermissionCatalog {
    PermissionCatalog::new(
        resources.iter().map(|r| r.to_string()).collect(),
        actions.to_vec(),
    )
    .unwrap()
}

#[test]
fn test_restricted_to_drops_resources_outside_catalog() {
    let role = RolePermissions::new("Admin")
        .with_resource("events", ActionFlags::ALL)
        .with_resource("orders", ActionFlags::ALL);

    let restricted = role.restricted_to(&catalog(&["events"], &Action::ALL));

    assert!(restricted.permissions.contains("events"));
    assert!(!restricted.permissions.contains("orders"));
}

#[test]
fn test_restricted_to_clears_disabled_actions_and_prunes() {
    let role = RolePermissions::new("Editor")
        .with_description("Limited administrative access")
        .with_resource("events", ActionFlags::with(&[Action::Create, Action::View]))
        .with_resource("users", ActionFlags::with(&[Action::Create]));

    let restricted = role.restricted_to(&catalog(&["events", "users"], &[Action::View]));

    assert_eq!(
        restricted.permissions.get("events"),
        Some(&ActionFlags::with(&[Action::View]))
    );
    assert!(!restricted.permissions.contains("users"));
    assert_eq!(
        restricted.description.as_deref(),
        Some("Limited administrative access")
    );
}

#[test]
fn test_stock_roles_for_default_catalog_match_stock_roles() {
    let fitted = RolePermissions::stock_roles_for(&PermissionCatalog::default());

    assert_eq!(fitted, RolePermissions::stock_roles());
}
