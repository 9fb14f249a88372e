use crate::{Action, ActionFlags, PermissionMatrix};

#[test]
fn test_toggle_creates_missing_entry() {
    let mut matrix = PermissionMatrix::new();

    let granted = matrix.toggle("orders", Action::Delete);

    assert!(granted);
    assert_eq!(
        matrix.get("orders"),
        Some(&ActionFlags::with(&[Action::Delete]))
    );
}

#[test]
fn test_toggle_keeps_all_false_entry() {
    let mut matrix = PermissionMatrix::new();

    matrix.toggle("events", Action::View);
    matrix.toggle("events", Action::View);

    assert!(matrix.contains("events"));
    assert_eq!(matrix.get("events"), Some(&ActionFlags::NONE));
}

#[test]
fn test_prune_drops_only_all_false_entries() {
    let mut matrix: PermissionMatrix = [
        ("events", ActionFlags::NONE),
        ("users", ActionFlags::with(&[Action::View])),
        ("orders", ActionFlags::NONE),
    ]
    .into_iter()
    .collect();

    let removed = matrix.prune();

    assert_eq!(removed, 2);
    assert_eq!(matrix.resources().collect::<Vec<_>>(), vec!["users"]);
}

#[test]
fn test_is_granted_reads_absent_as_false() {
    let matrix = PermissionMatrix::new();

    assert!(!matrix.is_granted("products", Action::Create));
}

#[test]
fn test_serializes_as_plain_map() {
    let matrix: PermissionMatrix = [("users", ActionFlags::with(&[Action::View]))]
        .into_iter()
        .collect();

    let json = serde_json::to_value(&matrix).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "users": {"create": false, "view": true, "update": false, "delete": false}
        })
    );
}
