use super::models::{User, UserPayload};
use crate::auth::Role;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Values bound to the add/edit dialog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl UserForm {
    /// Prefill from an existing account. The password is never prefilled;
    /// the role is kept as is, including names this console does not know.
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            password: String::new(),
            role: user.role.clone(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn validate(&self, mode: FormMode) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::MissingField("Name"));
        }
        if self.email.trim().is_empty() {
            return Err(Error::MissingField("Email"));
        }
        if mode == FormMode::Create && self.password.is_empty() {
            return Err(Error::MissingField("Password"));
        }
        Ok(())
    }

    /// Build the request body. On edit a blank password keeps the current one.
    pub fn to_payload(&self, mode: FormMode) -> UserPayload {
        let password = match mode {
            FormMode::Edit if self.password.is_empty() => None,
            _ => Some(self.password.clone()),
        };
        UserPayload {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password,
            role: self.role.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> UserForm {
        UserForm {
            name: " Ada Lovelace ".to_string(),
            email: "ada@lab.test ".to_string(),
            password: "s3cret!".to_string(),
            role: Role::Engineer,
        }
    }

    #[test]
    fn test_empty_form_defaults_to_researcher() {
        let form = UserForm::default();
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.password.is_empty());
        assert_eq!(form.role, Role::Researcher);
    }

    #[test]
    fn test_from_user_leaves_password_blank() {
        let user = User {
            id: "u1".to_string(),
            name: "Grace".to_string(),
            email: "grace@lab.test".to_string(),
            role: Role::LabTechnician,
            created_at: None,
        };
        let form = UserForm::from_user(&user);
        assert_eq!(form.name, "Grace");
        assert_eq!(form.email, "grace@lab.test");
        assert_eq!(form.password, "");
        assert_eq!(form.role, Role::LabTechnician);
    }

    #[test]
    fn test_edit_keeps_unrecognised_role() {
        let user: User = serde_json::from_value(serde_json::json!({
            "_id": "u2",
            "name": "Aud",
            "email": "aud@lab.test",
            "role": "Auditor"
        }))
        .unwrap();

        let mut form = UserForm::from_user(&user);
        form.name = "Aud Fixed".to_string();
        assert_eq!(
            serde_json::to_value(form.to_payload(FormMode::Edit)).unwrap(),
            serde_json::json!({"name": "Aud Fixed", "email": "aud@lab.test", "role": "Auditor"})
        );

        form.role = Role::Engineer;
        assert_eq!(form.to_payload(FormMode::Edit).role, Role::Engineer);
    }

    #[test]
    fn test_validate_required_fields() {
        let mut form = filled();
        assert!(form.validate(FormMode::Create).is_ok());

        form.password.clear();
        assert_eq!(
            form.validate(FormMode::Create),
            Err(Error::MissingField("Password"))
        );
        assert!(form.validate(FormMode::Edit).is_ok());

        form.email = "   ".to_string();
        assert_eq!(
            form.validate(FormMode::Edit),
            Err(Error::MissingField("Email"))
        );

        form.name.clear();
        assert_eq!(
            form.validate(FormMode::Edit),
            Err(Error::MissingField("Name"))
        );
    }

    #[test]
    fn test_payload_trims_and_keeps_password_on_create() {
        let payload = filled().to_payload(FormMode::Create);
        assert_eq!(payload.name, "Ada Lovelace");
        assert_eq!(payload.email, "ada@lab.test");
        assert_eq!(payload.password.as_deref(), Some("s3cret!"));
        assert_eq!(payload.role, Role::Engineer);
    }

    #[test]
    fn test_payload_omits_blank_password_on_edit() {
        let mut form = filled();
        assert_eq!(
            form.to_payload(FormMode::Edit).password.as_deref(),
            Some("s3cret!")
        );
        form.password.clear();
        assert_eq!(form.to_payload(FormMode::Edit).password, None);
    }

    #[test]
    fn test_reset() {
        let mut form = filled();
        form.reset();
        assert_eq!(form, UserForm::default());
    }
}
