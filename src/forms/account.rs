//! Login and signup forms

use super::{email, required, FormError};
use crate::model::{AdminSignupRequest, LoginRequest, SignupRequest};
use crate::session::Role;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl LoginForm {
    pub fn new(role: Role) -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            role,
        }
    }

    pub fn validate(&self) -> Result<LoginRequest, FormError> {
        let email = required(&self.email, "Email")?;
        if self.password.is_empty() {
            return Err(FormError::Required("Password"));
        }
        Ok(LoginRequest {
            email,
            password: self.password.clone(),
            user_type: self.role,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub voter_id: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<SignupRequest, FormError> {
        let voter_id = required(&self.voter_id, "Voter ID")?;
        if !voter_id.chars().all(|c| c.is_ascii_digit()) {
            return Err(FormError::InvalidVoterId);
        }
        let email = email(&self.email)?;
        let password = passwords(&self.password, &self.confirm_password)?;
        Ok(SignupRequest {
            voter_id,
            email,
            password,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminSignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl AdminSignupForm {
    pub fn validate(&self) -> Result<AdminSignupRequest, FormError> {
        let name = required(&self.name, "Name")?;
        let email = email(&self.email)?;
        let password = passwords(&self.password, &self.confirm_password)?;
        Ok(AdminSignupRequest {
            name,
            email,
            password,
        })
    }
}

fn passwords(password: &str, confirm: &str) -> Result<String, FormError> {
    if password.is_empty() {
        return Err(FormError::Required("Password"));
    }
    if password != confirm {
        return Err(FormError::PasswordMismatch);
    }
    Ok(password.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_both_fields() {
        let mut form = LoginForm::new(Role::Admin);
        assert_eq!(form.validate(), Err(FormError::Required("Email")));

        form.email = " admin@club.org ".to_string();
        assert_eq!(form.validate(), Err(FormError::Required("Password")));

        form.password = "secret".to_string();
        let request = form.validate().unwrap();
        assert_eq!(request.email, "admin@club.org");
        assert_eq!(request.user_type, Role::Admin);
    }

    #[test]
    fn test_signup_checks() {
        let mut form = SignupForm {
            voter_id: "10a".to_string(),
            email: "v@club.org".to_string(),
            password: "pw".to_string(),
            confirm_password: "pw2".to_string(),
        };
        assert_eq!(form.validate(), Err(FormError::InvalidVoterId));

        form.voter_id = "1021".to_string();
        assert_eq!(form.validate(), Err(FormError::PasswordMismatch));

        form.confirm_password = "pw".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_admin_signup_requires_name() {
        let form = AdminSignupForm {
            email: "a@club.org".to_string(),
            password: "pw".to_string(),
            confirm_password: "pw".to_string(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(FormError::Required("Name")));
    }
}
