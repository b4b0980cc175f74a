//! Local credential validation.
//!
//! These checks run before any network contact. When they fail, the auth
//! flow surfaces the messages and stops: no request status transition, no
//! request. Server-side validation (HTTP 400) is a separate path handled
//! through failure classification.

use crate::error::FieldError;
use crate::state::{SigninCredentials, SignupCredentials};

/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Validate signup form values.
///
/// Returns every violation in field order; an empty vector means the
/// credentials may be submitted.
#[must_use]
pub fn validate_signup(credentials: &SignupCredentials) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if credentials.first_name.trim().is_empty() {
        errors.push(FieldError::new("firstName", "First name is required"));
    }

    if credentials.last_name.trim().is_empty() {
        errors.push(FieldError::new("lastName", "Last name is required"));
    }

    if credentials.email.trim().is_empty() {
        errors.push(FieldError::new("email", "Email is required"));
    } else if !looks_like_email(credentials.email.trim()) {
        errors.push(FieldError::new("email", "Email is invalid"));
    }

    if credentials.phone.trim().is_empty() {
        errors.push(FieldError::new("phone", "Phone number is required"));
    }

    if credentials.password.is_empty() {
        errors.push(FieldError::new("password", "Password is required"));
    } else if credentials.password.len() < MIN_PASSWORD_LENGTH {
        errors.push(FieldError::new(
            "password",
            "Password must be at least 6 characters",
        ));
    }

    if credentials.confirm_password != credentials.password {
        errors.push(FieldError::new(
            "confirmPassword",
            "Passwords do not match",
        ));
    }

    errors
}

/// Validate sign-in form values.
///
/// Returns every violation in field order; an empty vector means the
/// credentials may be submitted.
#[must_use]
pub fn validate_signin(credentials: &SigninCredentials) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if credentials.email.trim().is_empty() {
        errors.push(FieldError::new("email", "Email is required"));
    }

    if credentials.password.is_empty() {
        errors.push(FieldError::new("password", "Password is required"));
    }

    errors
}

/// Minimal email shape check; the server revalidates.
fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup_fixture() -> SignupCredentials {
        SignupCredentials {
            first_name: "Ada".to_string(),
            last_name: "Balogun".to_string(),
            email: "ada@example.com".to_string(),
            phone: "08030000000".to_string(),
            password: "secret-pass".to_string(),
            confirm_password: "secret-pass".to_string(),
        }
    }

    #[test]
    fn accepts_complete_signup() {
        assert!(validate_signup(&signup_fixture()).is_empty());
    }

    #[test]
    fn rejects_missing_required_fields() {
        let credentials = SignupCredentials {
            first_name: "  ".to_string(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            password: String::new(),
            confirm_password: String::new(),
        };

        let errors = validate_signup(&credentials);
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            ["firstName", "lastName", "email", "phone", "password"]
        );
    }

    #[test]
    fn rejects_malformed_email() {
        let mut credentials = signup_fixture();
        credentials.email = "not-an-email".to_string();

        let errors = validate_signup(&credentials);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
        assert_eq!(errors[0].message, "Email is invalid");
    }

    #[test]
    fn rejects_short_password() {
        let mut credentials = signup_fixture();
        credentials.password = "abc".to_string();
        credentials.confirm_password = "abc".to_string();

        let errors = validate_signup(&credentials);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "password");
    }

    #[test]
    fn rejects_mismatched_confirmation() {
        let mut credentials = signup_fixture();
        credentials.confirm_password = "different".to_string();

        let errors = validate_signup(&credentials);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "confirmPassword");
    }

    #[test]
    fn signin_requires_both_fields() {
        let errors = validate_signin(&SigninCredentials {
            email: String::new(),
            password: String::new(),
        });
        assert_eq!(errors.len(), 2);

        let errors = validate_signin(&SigninCredentials {
            email: "ada@example.com".to_string(),
            password: "secret-pass".to_string(),
        });
        assert!(errors.is_empty());
    }
}
