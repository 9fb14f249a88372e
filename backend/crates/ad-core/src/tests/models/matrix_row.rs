use crate::{Action, ActionFlags, MatrixRow, PermissionCatalog, RolePermissions};

#[test]
fn test_row_has_one_cell_per_resource_and_action() {
    let catalog = PermissionCatalog::default();
    let role = RolePermissions::new("Viewer")
        .with_resource("events", ActionFlags::with(&[Action::View]));

    let row = MatrixRow::build(&role, &catalog);

    assert_eq!(row.role, "Viewer");
    assert_eq!(row.cells.len(), 16);
    assert_eq!(row.cells[0].resource, "events");
    assert_eq!(row.cells[0].action, Action::Create);
    assert!(row.cell("events", Action::View).unwrap().granted);
    assert!(!row.cell("orders", Action::View).unwrap().granted);
}

#[test]
fn test_row_only_shows_catalog_actions() {
    let catalog =
        PermissionCatalog::new(vec!["events".to_string()], vec![Action::View]).unwrap();
    let role = RolePermissions::new("Admin").with_resource("events", ActionFlags::ALL);

    let row = MatrixRow::build(&role, &catalog);

    assert_eq!(row.cells.len(), 1);
    assert!(row.cell("events", Action::Delete).is_none());
}
