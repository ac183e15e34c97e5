use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("username is required")]
    MissingUsername,
    #[error("password is required")]
    MissingPassword,
}

/// Username/password fields of the login screen.
///
/// Only gates the login button; no credential is checked anywhere.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn can_submit(&self) -> bool {
        self.submit().is_ok()
    }

    pub fn submit(&self) -> Result<(), LoginError> {
        if self.username.is_empty() {
            return Err(LoginError::MissingUsername);
        }
        if self.password.is_empty() {
            return Err(LoginError::MissingPassword);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_fields_required() {
        let mut form = LoginForm::default();
        assert_eq!(form.submit(), Err(LoginError::MissingUsername));
        form.username = "teacher".into();
        assert_eq!(form.submit(), Err(LoginError::MissingPassword));
        assert!(!form.can_submit());
        form.password = "x".into();
        assert!(form.can_submit());
    }

    #[test]
    fn whitespace_counts_as_input() {
        let form = LoginForm {
            username: " ".into(),
            password: " ".into(),
        };
        assert!(form.can_submit());
    }
}
