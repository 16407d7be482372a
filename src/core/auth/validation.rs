//! Form checks run before anything is sent to the provider

use super::provider::{Credentials, SignUpRequest};
use crate::core::session::Role;

/// Minimum password length asked for at sign-up
pub const MIN_PASSWORD_LEN: usize = 6;

/// Per-field messages for the auth forms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm: Option<&'static str>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none() && self.confirm.is_none()
    }
}

pub fn check_email(value: &str) -> Result<(), &'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Err("Email is required");
    }
    let Some((local, domain)) = value.split_once('@') else {
        return Err("Please enter a valid email");
    };
    let domain_ok = domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains('@');
    if local.is_empty() || !domain_ok || value.contains(char::is_whitespace) {
        return Err("Please enter a valid email");
    }
    Ok(())
}

pub fn check_password(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        Err("Password is required")
    } else {
        Ok(())
    }
}

pub fn check_new_password(value: &str) -> Result<(), &'static str> {
    check_password(value)?;
    if value.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be 6 characters or more");
    }
    Ok(())
}

pub fn check_confirmation(password: &str, confirm: &str) -> Result<(), &'static str> {
    if confirm.is_empty() {
        Err("Please confirm your password")
    } else if password != confirm {
        Err("Passwords do not match")
    } else {
        Ok(())
    }
}

/// Validate the sign-in form
pub fn sign_in_form(email: &str, password: &str) -> Result<Credentials, FormErrors> {
    let errors = FormErrors {
        email: check_email(email).err(),
        password: check_password(password).err(),
        confirm: None,
    };
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(Credentials {
        email: email.trim().to_string(),
        password: password.to_string(),
    })
}

/// Validate the sign-up form
pub fn sign_up_form(
    email: &str,
    password: &str,
    confirm: &str,
    name: &str,
    role: Role,
) -> Result<SignUpRequest, FormErrors> {
    let errors = FormErrors {
        email: check_email(email).err(),
        password: check_new_password(password).err(),
        confirm: check_confirmation(password, confirm).err(),
    };
    if !errors.is_empty() {
        return Err(errors);
    }
    let name = name.trim();
    Ok(SignUpRequest {
        credentials: Credentials {
            email: email.trim().to_string(),
            password: password.to_string(),
        },
        name: (!name.is_empty()).then(|| name.to_string()),
        role,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_rules() {
        assert!(check_email("student@college.ac.in").is_ok());
        assert!(check_email("  student@college.ac.in ").is_ok());
        assert_eq!(check_email(""), Err("Email is required"));
        assert_eq!(check_email("student"), Err("Please enter a valid email"));
        assert_eq!(check_email("@college.in"), Err("Please enter a valid email"));
        assert_eq!(check_email("a@college"), Err("Please enter a valid email"));
        assert_eq!(check_email("a@.in"), Err("Please enter a valid email"));
        assert_eq!(check_email("a b@c.in"), Err("Please enter a valid email"));
    }

    #[test]
    fn test_sign_in_form_collects_all_errors() {
        let errors = sign_in_form("", "").unwrap_err();
        assert_eq!(errors.email, Some("Email is required"));
        assert_eq!(errors.password, Some("Password is required"));

        let creds = sign_in_form(" me@x.io ", "hunter2").unwrap();
        assert_eq!(creds.email, "me@x.io");
        assert_eq!(creds.password, "hunter2");
    }

    #[test]
    fn test_sign_up_password_rules() {
        let errors = sign_up_form("me@x.io", "five5", "five5", "", Role::Student).unwrap_err();
        assert_eq!(errors.password, Some("Password must be 6 characters or more"));
        assert!(errors.confirm.is_none());

        assert!(sign_up_form("me@x.io", "sixsix", "sixsix", "", Role::Student).is_ok());

        let errors =
            sign_up_form("me@x.io", "long enough", "different", "", Role::Student).unwrap_err();
        assert_eq!(errors.confirm, Some("Passwords do not match"));
    }

    #[test]
    fn test_sign_up_form_builds_request() {
        let request =
            sign_up_form("me@x.io", "long enough", "long enough", "  Irfan ", Role::Faculty)
                .unwrap();
        assert_eq!(request.name.as_deref(), Some("Irfan"));
        assert_eq!(request.role, Role::Faculty);

        let request =
            sign_up_form("me@x.io", "long enough", "long enough", "   ", Role::Student).unwrap();
        assert_eq!(request.name, None);
    }
}
