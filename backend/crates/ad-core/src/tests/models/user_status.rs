use crate::UserStatus;

use std::str::FromStr;

#[test]
fn test_user_status_as_str() {
    assert_eq!(UserStatus::Active.as_str(), "Active");
    assert_eq!(UserStatus::Inactive.as_str(), "Inactive");
}

#[test]
fn test_user_status_from_str_any_case() {
    assert_eq!(UserStatus::from_str("Active").unwrap(), UserStatus::Active);
    assert_eq!(UserStatus::from_str("active").unwrap(), UserStatus::Active);
    assert_eq!(
        UserStatus::from_str("INACTIVE").unwrap(),
        UserStatus::Inactive
    );
    assert!(UserStatus::from_str("suspended").is_err());
}

#[test]
fn test_user_status_default() {
    assert_eq!(UserStatus::default(), UserStatus::Active);
}

#[test]
fn test_user_status_serializes_as_display_name() {
    let json = serde_json::to_string(&UserStatus::Inactive).unwrap();
    assert_eq!(json, "\"Inactive\"");
}
