//! The user record shown in each table row.

use serde::Deserialize;

/// A user entry as served by the members endpoint.
///
/// `id` is the only field used for equality of identity; `name` is the only
/// field the dashboard ever changes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    /// Stable unique identifier.
    pub id: String,
    /// Display name, editable inline.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Role label such as `"admin"` or `"member"`.
    pub role: String,
}

impl User {
    /// Creates a user record.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    /// Case-insensitive substring match against name, email or role.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
            || self.role.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_members_payload() {
        let json = r#"[
            {"id":"1","name":"Aaron Miles","email":"aaron@mailinator.com","role":"member"},
            {"id":"2","name":"Aishwarya Naik","email":"aishwarya@mailinator.com","role":"admin"}
        ]"#;
        let users: Vec<User> = serde_json::from_str(json).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[1], User::new("2", "Aishwarya Naik", "aishwarya@mailinator.com", "admin"));
    }

    #[test]
    fn test_matches_any_field() {
        let u = User::new("7", "Jane Doe", "jane@example.com", "Admin");
        assert!(u.matches("jane"));
        assert!(u.matches("example.com"));
        assert!(u.matches("admin"));
        assert!(u.matches(""));
        assert!(!u.matches("owner"));
    }
}
