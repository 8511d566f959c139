use hashistack_demo_lib::optional::{
    display_name, first_valid_email, length, process_value_or_default, safe_find,
    user_age_if_adult, user_display_name, user_email, validate_required,
};
use hashistack_demo_lib::{Error, Profile, User};

fn user_with_email(email: &str, age: u32) -> User {
    User::new("Ada", age, Some(Profile::new(Some(email.to_string()))))
}

#[test]
fn display_name_falls_back_for_absent_and_blank_parts() {
    assert_eq!(display_name(Some(""), Some("")), "Unknown User");
    assert_eq!(display_name(None, None), "Unknown User");
    assert_eq!(display_name(Some("   "), Some("   ")), "Unknown User");
}

#[test]
fn display_name_keeps_present_parts() {
    assert_eq!(display_name(Some("Ada"), None), "Ada User");
    assert_eq!(display_name(None, Some("Lovelace")), "Unknown Lovelace");
    assert_eq!(display_name(Some("Ada"), Some("Lovelace")), "Ada Lovelace");
}

#[test]
fn safe_find_only_finds_valid() {
    assert_eq!(safe_find(Some("valid")).as_deref(), Some("found: valid"));
    assert_eq!(safe_find(Some("Valid")), None);
    assert_eq!(safe_find(Some("ada@x")), None);
    assert_eq!(safe_find(Some("")), None);
    assert_eq!(safe_find(None), None);
}

#[test]
fn length_counts_characters() {
    assert_eq!(length(None), 0);
    assert_eq!(length(Some("")), 0);
    assert_eq!(length(Some("ada@x")), 5);
    assert_eq!(length(Some("   ")), 3);
    assert_eq!(length(Some("héllo")), 5);
    assert_eq!(length(Some("日本")), 2);
}

#[test]
fn validate_required_accepts_both_values() {
    assert!(validate_required(Some("user-1"), Some("ada@x")).is_ok());
}

#[test]
fn validate_required_reports_missing_user_id_first() {
    let err = validate_required(None, None).unwrap_err();
    assert!(matches!(err, Error::MissingRequiredField { field: "userId" }));

    let err = validate_required(None, Some("ada@x")).unwrap_err();
    assert!(matches!(err, Error::MissingRequiredField { field: "userId" }));
}

#[test]
fn validate_required_reports_missing_email() {
    let err = validate_required(Some("user-1"), None).unwrap_err();
    assert!(matches!(err, Error::MissingRequiredField { field: "email" }));
}

#[test]
fn user_email_walks_the_whole_chain() {
    assert_eq!(user_email(None), None);
    assert_eq!(
        user_email(Some(&user_with_email("ada@example.com", 36))).as_deref(),
        Some("ada@example.com")
    );
    assert_eq!(user_email(Some(&user_with_email("not-an-email", 36))), None);
}

#[test]
fn user_age_if_adult_applies_threshold() {
    assert_eq!(user_age_if_adult(None), None);
    assert_eq!(user_age_if_adult(Some(&user_with_email("a@b", 17))), None);
    assert_eq!(user_age_if_adult(Some(&user_with_email("a@b", 18))), Some(18));
    assert_eq!(user_age_if_adult(Some(&user_with_email("a@b", 42))), Some(42));
}

#[test]
fn first_valid_email_picks_first_match() {
    let emails = vec![
        "nobody".to_string(),
        "first@example.com".to_string(),
        "second@example.com".to_string(),
    ];
    assert_eq!(
        first_valid_email(Some(emails.as_slice())).as_deref(),
        Some("first@example.com")
    );
    assert_eq!(first_valid_email(Some(&["a", "b"][..])), None);
    assert_eq!(first_valid_email::<String>(Some(&[][..])), None);
    assert_eq!(first_valid_email::<&str>(None), None);
}

#[test]
fn user_display_name_defaults_to_anonymous() {
    assert_eq!(user_display_name(None), "Anonymous");
    assert_eq!(user_display_name(Some(&User::new("Grace", 30, None))), "Grace");
}

#[test]
fn process_value_or_default_skips_blank_values() {
    assert_eq!(process_value_or_default(Some("value"), "fallback"), "value");
    assert_eq!(process_value_or_default(Some("  "), "fallback"), "fallback");
    assert_eq!(process_value_or_default(Some(""), "fallback"), "fallback");
    assert_eq!(process_value_or_default(None, "fallback"), "fallback");
}
