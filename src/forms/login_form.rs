use crate::forms::validation::{required, FormErrors};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    /// Both fields are required; the username is trimmed, the password is sent as typed
    pub fn validate(&self) -> Result<(String, String), FormErrors> {
        let mut errors = FormErrors::new();
        errors.check("username", required(&self.username));
        if self.password.is_empty() {
            errors.check("password", required(""));
        }
        if errors.is_empty() {
            Ok((self.username.trim().to_string(), self.password.clone()))
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_fields_required() {
        let errors = LoginForm::default().validate().unwrap_err();
        assert!(errors.get("username").is_some());
        assert!(errors.get("password").is_some());
    }

    #[test]
    fn password_keeps_spaces() {
        let form = LoginForm {
            username: " dr.mona ".to_string(),
            password: " pass ".to_string(),
        };
        assert_eq!(form.validate().unwrap(), ("dr.mona".to_string(), " pass ".to_string()));
    }
}
