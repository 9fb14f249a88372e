use crate::{Action, PermissionCatalog};

use googletest::prelude::*;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn given_default_catalog_then_has_stock_resources_and_actions() {
    let catalog = PermissionCatalog::default();

    assert_eq!(
        catalog.resources(),
        names(&["events", "users", "products", "orders"]).as_slice()
    );
    assert_eq!(catalog.actions(), Action::ALL.as_slice());
}

#[test]
fn given_custom_lists_when_built_then_order_is_kept() {
    let catalog = PermissionCatalog::new(
        names(&["invoices", " reports "]),
        vec![Action::View, Action::Create],
    )
    .unwrap();

    assert_eq!(catalog.resources(), names(&["invoices", "reports"]).as_slice());
    assert!(catalog.has_action(Action::View));
    assert!(!catalog.has_action(Action::Delete));
}

#[test]
fn given_empty_resources_when_built_then_error() {
    let result = PermissionCatalog::new(Vec::new(), Action::ALL.to_vec());

    assert_that!(result, err(anything()));
}

#[test]
fn given_empty_actions_when_built_then_error() {
    let result = PermissionCatalog::new(names(&["events"]), Vec::new());

    assert_that!(result, err(anything()));
}

#[test]
fn given_duplicate_resource_when_built_then_error() {
    let result = PermissionCatalog::new(names(&["events", "events "]), Action::ALL.to_vec());

    assert_that!(result, err(anything()));
}

#[test]
fn given_blank_resource_when_built_then_error() {
    let result = PermissionCatalog::new(names(&["events", "  "]), Action::ALL.to_vec());

    assert_that!(result, err(anything()));
}

#[test]
fn given_duplicate_action_when_built_then_error() {
    let result = PermissionCatalog::new(names(&["events"]), vec![Action::View, Action::View]);

    assert_that!(result, err(anything()));
}

#[test]
fn given_unknown_resource_when_checked_then_error() {
    let catalog = PermissionCatalog::default();

    assert_that!(catalog.check_resource("orders"), ok(anything()));
    assert_that!(catalog.check_resource("invoices"), err(anything()));
}
