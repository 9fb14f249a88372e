use crate::{Action, ActionFlags};

#[test]
fn test_toggle_returns_new_value() {
    let mut flags = ActionFlags::NONE;

    assert!(flags.toggle(Action::Update));
    assert!(flags.update);
    assert!(!flags.toggle(Action::Update));
    assert!(!flags.update);
}

#[test]
fn test_any_and_granted() {
    let flags = ActionFlags::with(&[Action::Delete, Action::Create]);

    assert!(flags.any());
    assert_eq!(flags.granted(), vec![Action::Create, Action::Delete]);
    assert!(!ActionFlags::NONE.any());
    assert!(ActionFlags::NONE.granted().is_empty());
}

#[test]
fn test_missing_flags_deserialize_as_false() {
    let flags: ActionFlags = serde_json::from_str(r#"{"view": true}"#).unwrap();

    assert_eq!(flags, ActionFlags::with(&[Action::View]));
}

#[test]
fn test_masked_clears_actions_outside_enabled() {
    let flags = ActionFlags::with(&[Action::Create, Action::View, Action::Delete]);

    let masked = flags.masked(&[Action::View, Action::Update]);

    assert_eq!(masked, ActionFlags::with(&[Action::View]));
    assert_eq!(ActionFlags::ALL.masked(&Action::ALL), ActionFlags::ALL);
}
