use crate::{Action, CoreError};

use std::str::FromStr;

#[test]
fn test_action_round_trips_through_str() {
    for action in Action::ALL {
        assert_eq!(Action::from_str(action.as_str()).unwrap(), action);
    }
}

#[test]
fn test_action_from_str_ignores_case() {
    assert_eq!(Action::from_str("Delete").unwrap(), Action::Delete);
    assert_eq!(Action::from_str(" VIEW ").unwrap(), Action::View);
}

#[test]
fn test_action_from_str_unknown() {
    let err = Action::from_str("publish").unwrap_err();
    assert!(matches!(err, CoreError::UnknownAction { ref value, .. } if value == "publish"));
}

#[test]
fn test_action_column_order() {
    assert_eq!(
        Action::ALL,
        [Action::Create, Action::View, Action::Update, Action::Delete]
    );
}
