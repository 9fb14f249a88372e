use crate::{Action, ActionFlags, PermissionCatalog, RoleDraft, RolePermissions};

#[test]
fn test_new_draft_lists_every_resource_all_false() {
    let catalog = PermissionCatalog::default();

    let draft = RoleDraft::new(&catalog);

    assert_eq!(draft.permissions.len(), 4);
    for resource in catalog.resources() {
        assert_eq!(draft.permissions.get(resource), Some(&ActionFlags::NONE));
    }
    assert!(!draft.is_editing());
}

#[test]
fn test_edit_draft_overlays_existing_flags() {
    let catalog = PermissionCatalog::default();
    let role = RolePermissions::new("Auditor")
        .with_description("Reads orders")
        .with_resource("orders", ActionFlags::with(&[Action::View]));

    let draft = RoleDraft::edit(&role, &catalog);

    assert_eq!(draft.role, "Auditor");
    assert_eq!(draft.description, "Reads orders");
    assert_eq!(draft.editing.as_deref(), Some("Auditor"));
    assert!(draft.permissions.is_granted("orders", Action::View));
    assert_eq!(draft.permissions.get("events"), Some(&ActionFlags::NONE));
}

#[test]
fn test_summary_follows_catalog_order() {
    let catalog = PermissionCatalog::default();
    let mut draft = RoleDraft::new(&catalog);
    draft.toggle("users", Action::Update);
    draft.toggle("users", Action::Create);

    let summary = draft.summary(&catalog);

    assert_eq!(summary.len(), 4);
    assert_eq!(summary[0].resource, "events");
    assert!(!summary[0].has_permissions());
    assert_eq!(summary[0].to_string(), "events: No permissions");
    assert_eq!(summary[1].granted, vec![Action::Create, Action::Update]);
    assert_eq!(summary[1].to_string(), "users: create, update");
}

#[test]
fn test_to_role_drops_blank_description() {
    let catalog = PermissionCatalog::default();
    let mut draft = RoleDraft::new(&catalog);
    draft.role = "Support".to_string();
    draft.description = "   ".to_string();

    let role = draft.to_role();

    assert_eq!(role.role, "Support");
    assert_eq!(role.description, None);
    assert_eq!(role.permissions.len(), 4);
}
