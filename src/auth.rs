//! Login form state and client-side field validation.
//!
//! Only the shape of the input is checked; credentials are never verified.

use tracing::debug;

/// Minimum password length accepted by the form.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Where a valid submission navigates to.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// A single field validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    InvalidEmail,
    PasswordTooShort { min: usize },
}

impl std::fmt::Display for LoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginError::InvalidEmail => write!(f, "Please enter a valid email address"),
            LoginError::PasswordTooShort { min } => {
                write!(f, "Password must be at least {} characters", min)
            }
        }
    }
}

impl std::error::Error for LoginError {}

impl LoginError {
    /// Name of the form field the error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            LoginError::InvalidEmail => "email",
            LoginError::PasswordTooShort { .. } => "password",
        }
    }
}

/// Login form contents.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub show_password: bool,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            show_password: false,
        }
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Password as it should be displayed in the input.
    pub fn password_display(&self) -> String {
        if self.show_password {
            self.password.clone()
        } else {
            "•".repeat(self.password.chars().count())
        }
    }

    /// Validates every field and reports all failures at once.
    pub fn validate(&self) -> Result<(), Vec<LoginError>> {
        let mut errors = Vec::new();
        if !is_valid_email(&self.email) {
            errors.push(LoginError::InvalidEmail);
        }
        // Length in UTF-16 code units, as browsers count it.
        if self.password.encode_utf16().count() < MIN_PASSWORD_LEN {
            errors.push(LoginError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validates and returns the redirect target.
    pub fn submit(&self) -> Result<&'static str, Vec<LoginError>> {
        self.validate()?;
        debug!(email = %self.email, "login form accepted");
        Ok(DASHBOARD_PATH)
    }
}

/// Syntactic email check: `local@label.label...tld` with a 2+ letter TLD.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if domain.contains('@') {
        return false;
    }

    let local_ok = !local.is_empty()
        && !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..")
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._'+-".contains(c))
        && local
            .chars()
            .next_back()
            .is_some_and(|c| c.is_ascii_alphanumeric() || "_+-".contains(c));
    if !local_ok {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });
    let tld_ok = labels
        .last()
        .is_some_and(|tld| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()));

    labels_ok && tld_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        for email in [
            "admin@example.com",
            "your.email@example.com",
            "first+tag@mail.example.org",
            "o'neil@sub-domain.io",
        ] {
            assert!(is_valid_email(email), "{email}");
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "",
            "plain",
            "@example.com",
            "user@",
            "user@localhost",
            "user@@example.com",
            "a@b@example.com",
            ".user@example.com",
            "us..er@example.com",
            "user@-example.com",
            "user@example.c",
            "user@example.c0m",
            "user name@example.com",
            "abc'@example.com",
            "abc.@example.com",
        ] {
            assert!(!is_valid_email(email), "{email}");
        }
    }

    #[test]
    fn test_validate_reports_all_fields() {
        let form = LoginForm::new("nope", "123");
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                LoginError::InvalidEmail,
                LoginError::PasswordTooShort { min: 6 }
            ]
        );
        assert_eq!(errors[0].to_string(), "Please enter a valid email address");
        assert_eq!(
            errors[1].to_string(),
            "Password must be at least 6 characters"
        );
        assert_eq!(errors[1].field(), "password");
    }

    #[test]
    fn test_password_length_counts_utf16_units() {
        // Five characters, six UTF-16 code units.
        let form = LoginForm::new("admin@example.com", "pass\u{1F600}");
        assert_eq!(form.password.chars().count(), 5);
        assert!(form.validate().is_ok());

        let form = LoginForm::new("admin@example.com", "p\u{e4}ss!");
        assert_eq!(
            form.validate(),
            Err(vec![LoginError::PasswordTooShort { min: 6 }])
        );
    }

    #[test]
    fn test_submit_redirects() {
        let form = LoginForm::new("admin@example.com", "secret");
        assert_eq!(form.submit(), Ok("/dashboard"));

        let form = LoginForm::new("admin@example.com", "short");
        assert_eq!(
            form.submit(),
            Err(vec![LoginError::PasswordTooShort { min: 6 }])
        );
    }

    #[test]
    fn test_password_visibility() {
        let mut form = LoginForm::new("a@b.co", "hunter2");
        assert_eq!(form.password_display(), "•••••••");
        form.toggle_password_visibility();
        assert_eq!(form.password_display(), "hunter2");
    }
}
