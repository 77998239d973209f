//! User profile stored alongside the inventory.

use serde::{Deserialize, Serialize};

use crate::ports::CoreError;

/// The locally stored user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

impl UserProfile {
    /// Trim fields and check the email has a local part and a domain.
    pub fn validated(self) -> Result<Self, CoreError> {
        let name = self.name.trim().to_string();
        let email = self.email.trim().to_string();

        if name.is_empty() {
            return Err(CoreError::Validation("Name cannot be empty".to_string()));
        }

        let valid_email = email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
        if !valid_email {
            return Err(CoreError::Validation(format!(
                "Invalid email address: {email}"
            )));
        }

        Ok(Self { name, email })
    }
}

/// What the profile screen shows, with guest placeholders when nobody is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub name: String,
    pub email: String,
    pub logged_in: bool,
}

impl ProfileView {
    pub const GUEST_NAME: &'static str = "Guest User";
    pub const GUEST_EMAIL: &'static str = "Not Logged In";
}

impl From<Option<UserProfile>> for ProfileView {
    fn from(profile: Option<UserProfile>) -> Self {
        match profile {
            Some(user) => Self {
                name: user.name,
                email: user.email,
                logged_in: true,
            },
            None => Self {
                name: Self::GUEST_NAME.to_string(),
                email: Self::GUEST_EMAIL.to_string(),
                logged_in: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guest_view() {
        let view = ProfileView::from(None);
        assert_eq!(view.name, "Guest User");
        assert_eq!(view.email, "Not Logged In");
        assert!(!view.logged_in);
    }

    #[test]
    fn test_validated_profile() {
        let profile = UserProfile {
            name: " Asha ".to_string(),
            email: "asha@example.com".to_string(),
        }
        .validated()
        .unwrap();
        assert_eq!(profile.name, "Asha");
    }

    #[test]
    fn test_invalid_email_rejected() {
        for email in ["asha", "@example.com", "asha@localhost"] {
            let result = UserProfile {
                name: "Asha".to_string(),
                email: email.to_string(),
            }
            .validated();
            assert!(result.is_err(), "{email} should be rejected");
        }
    }
}
