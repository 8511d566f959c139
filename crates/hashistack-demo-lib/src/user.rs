//! User records used by the optional-value helpers.

use crate::error::{Error, Result};

/// Contact string reported when neither email nor phone is known.
pub const NO_CONTACT_INFO: &str = "No contact info";

/// Immutable identity record with optional contact details.
///
/// `id` and `name` are mandatory; [`UserInfo::new`] refuses to build a record
/// without them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    id: String,
    name: String,
    email: Option<String>,
    phone: Option<String>,
}

impl UserInfo {
    /// Build a record, failing with [`Error::MissingRequiredField`] when `id`
    /// or `name` is absent (`id` is checked first).
    pub fn new(
        id: Option<String>,
        name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
    ) -> Result<Self> {
        let id = id.ok_or_else(|| Error::missing("id"))?;
        let name = name.ok_or_else(|| Error::missing("name"))?;
        Ok(Self {
            id,
            name,
            email,
            phone,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Email if present, otherwise phone, otherwise [`NO_CONTACT_INFO`].
    ///
    /// Presence is what counts here: an empty email still wins over a phone.
    pub fn contact_info(&self) -> &str {
        self.email
            .as_deref()
            .or(self.phone.as_deref())
            .unwrap_or(NO_CONTACT_INFO)
    }
}

/// Optional profile attached to a [`User`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    email: Option<String>,
}

impl Profile {
    pub fn new(email: Option<String>) -> Self {
        Self { email }
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

/// A named user with an age and an optional profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: String,
    age: u32,
    profile: Option<Profile>,
}

impl User {
    pub fn new(name: impl Into<String>, age: u32, profile: Option<Profile>) -> Self {
        Self {
            name: name.into(),
            age,
            profile,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(email: Option<&str>, phone: Option<&str>) -> UserInfo {
        UserInfo::new(
            Some("user-1".to_string()),
            Some("Ada Lovelace".to_string()),
            email.map(String::from),
            phone.map(String::from),
        )
        .expect("id and name are present")
    }

    #[test]
    fn test_user_info_requires_id() {
        let err = UserInfo::new(None, Some("Ada".to_string()), None, None).unwrap_err();
        assert!(matches!(err, Error::MissingRequiredField { field: "id" }));
    }

    #[test]
    fn test_user_info_requires_name() {
        let err = UserInfo::new(Some("user-1".to_string()), None, None, None).unwrap_err();
        assert!(matches!(err, Error::MissingRequiredField { field: "name" }));
    }

    #[test]
    fn test_user_info_reports_id_before_name() {
        let err = UserInfo::new(None, None, None, None).unwrap_err();
        assert!(matches!(err, Error::MissingRequiredField { field: "id" }));
    }

    #[test]
    fn test_user_info_accessors() {
        let user = info(Some("ada@example.com"), Some("555-0100"));
        assert_eq!(user.id(), "user-1");
        assert_eq!(user.name(), "Ada Lovelace");
        assert_eq!(user.email(), Some("ada@example.com"));
        assert_eq!(user.phone(), Some("555-0100"));
    }

    #[test]
    fn test_contact_info_precedence() {
        assert_eq!(info(None, None).contact_info(), NO_CONTACT_INFO);
        assert_eq!(info(None, Some("555-0100")).contact_info(), "555-0100");
        assert_eq!(info(Some("a@b"), Some("555-0100")).contact_info(), "a@b");
        assert_eq!(info(Some("a@b"), None).contact_info(), "a@b");
    }

    #[test]
    fn test_contact_info_empty_email_still_present() {
        assert_eq!(info(Some(""), Some("555-0100")).contact_info(), "");
    }

    #[test]
    fn test_user_without_profile() {
        let user = User::new("Grace", 30, None);
        assert_eq!(user.name(), "Grace");
        assert_eq!(user.age(), 30);
        assert!(user.profile().is_none());
    }
}
