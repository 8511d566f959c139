//! Helpers illustrating how optional and blank inputs collapse to fallbacks.
//!
//! Every function here is pure apart from the log lines emitted by
//! [`validate_required`] and [`process_value_or_default`]. A *blank* string is
//! empty or made only of whitespace and is treated exactly like an absent one
//! wherever a function filters blanks.

use tracing::info;

use crate::error::{Error, Result};
use crate::user::User;

const UNKNOWN_FIRST_NAME: &str = "Unknown";
const UNKNOWN_LAST_NAME: &str = "User";
const ANONYMOUS: &str = "Anonymous";
const VALID_KEY: &str = "valid";
const ADULT_AGE: u32 = 18;

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Upper-case a value the caller guarantees is present.
pub fn process_string(input: &str) -> String {
    input.to_uppercase()
}

/// Join first and last name, substituting `"Unknown"` and `"User"` for
/// absent or blank parts.
pub fn display_name(first: Option<&str>, last: Option<&str>) -> String {
    let first = non_blank(first).unwrap_or(UNKNOWN_FIRST_NAME);
    let last = non_blank(last).unwrap_or(UNKNOWN_LAST_NAME);
    format!("{first} {last}")
}

/// Look up `key`; only the literal `"valid"` is found.
pub fn safe_find(key: Option<&str>) -> Option<String> {
    key.filter(|k| *k == VALID_KEY)
        .map(|k| format!("found: {k}"))
}

/// Number of characters in `value`, or 0 when absent.
pub fn length(value: Option<&str>) -> usize {
    value.map_or(0, |v| v.chars().count())
}

/// Require both identifiers, then hand them to the processing sink.
///
/// `user_id` is checked before `email`, so a call missing both reports
/// `userId`.
pub fn validate_required(user_id: Option<&str>, email: Option<&str>) -> Result<()> {
    let user_id = user_id.ok_or_else(|| Error::missing("userId"))?;
    let email = email.ok_or_else(|| Error::missing("email"))?;
    process_user_data(user_id, email);
    Ok(())
}

fn process_user_data(user_id: &str, email: &str) {
    info!(user_id = %user_id, email = %email, "processing user");
}

/// Email from the user's profile, if every link exists and it contains `@`.
pub fn user_email(user: Option<&User>) -> Option<String> {
    user.and_then(User::profile)
        .and_then(|profile| profile.email())
        .filter(|email| email.contains('@'))
        .map(String::from)
}

/// The user's age when they are at least 18.
pub fn user_age_if_adult(user: Option<&User>) -> Option<u32> {
    user.map(User::age).filter(|age| *age >= ADULT_AGE)
}

/// First entry that contains `@`.
pub fn first_valid_email<S: AsRef<str>>(emails: Option<&[S]>) -> Option<String> {
    emails?
        .iter()
        .map(AsRef::<str>::as_ref)
        .find(|email| email.contains('@'))
        .map(String::from)
}

pub fn user_display_name(user: Option<&User>) -> String {
    user.map_or_else(|| ANONYMOUS.to_string(), |u| u.name().to_string())
}

/// Return `value` when present and not blank, otherwise `default`, logging
/// which branch was taken.
pub fn process_value_or_default(value: Option<&str>, default: &str) -> String {
    match non_blank(value) {
        Some(value) => {
            info!(value = %value, "processing value");
            value.to_string()
        }
        None => {
            info!(default = %default, "using default");
            default.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::Profile;

    #[test]
    fn test_non_blank_filters_whitespace() {
        assert_eq!(non_blank(Some("  \t\n")), None);
        assert_eq!(non_blank(Some("")), None);
        assert_eq!(non_blank(Some(" a ")), Some(" a "));
        assert_eq!(non_blank(None), None);
    }

    #[test]
    fn test_process_string() {
        assert_eq!(process_string("hashi"), "HASHI");
        assert_eq!(process_string(""), "");
    }

    #[test]
    fn test_user_email_requires_profile() {
        let user = User::new("Ada", 36, None);
        assert_eq!(user_email(Some(&user)), None);
    }

    #[test]
    fn test_user_email_requires_profile_email() {
        let user = User::new("Ada", 36, Some(Profile::default()));
        assert_eq!(user_email(Some(&user)), None);
    }
}
