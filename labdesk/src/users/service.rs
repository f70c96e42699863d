use super::form::{FormMode, UserForm};
use super::models::User;
use crate::auth::Session;
use crate::ports::UserApi;
use crate::{Error, Result};
use tracing::{info, warn};

/// Admin user operations on behalf of one session.
/// Each call issues at most one request.
#[derive(Clone)]
pub struct UserAdmin<A> {
    api: A,
    session: Session,
}

impl<A: UserApi> UserAdmin<A> {
    pub fn new(api: A, session: Session) -> Self {
        Self { api, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Whether results fetched by this admin still belong to `current`.
    /// False once the signed-in session has changed.
    pub fn serves(&self, current: Option<&Session>) -> bool {
        current == Some(&self.session)
    }

    fn ensure_admin(&self) -> Result<()> {
        if self.session.is_admin() {
            Ok(())
        } else {
            warn!(
                "Rejected user management call from non-admin {}",
                self.session.user.email
            );
            Err(Error::Forbidden)
        }
    }

    /// GET the full user list
    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.ensure_admin()?;
        let result = self.api.list_users(&self.session.token).await;
        if let Err(e) = &result {
            warn!("Failed to fetch users: {}", e);
        }
        result
    }

    /// POST a new account
    pub async fn create_user(&self, form: &UserForm) -> Result<()> {
        self.ensure_admin()?;
        form.validate(FormMode::Create)?;

        info!(
            "CREATE_USER: email={}, role={}, requested_by={}",
            form.email, form.role, self.session.user.email
        );
        let payload = form.to_payload(FormMode::Create);
        let result = self.api.create_user(&self.session.token, &payload).await;
        if let Err(e) = &result {
            warn!("Failed to create user {}: {}", form.email, e);
        }
        result
    }

    /// PUT the edited values of an existing account
    pub async fn update_user(&self, user: &User, form: &UserForm) -> Result<()> {
        self.ensure_admin()?;
        form.validate(FormMode::Edit)?;

        info!(
            "UPDATE_USER: id={}, role={}, requested_by={}",
            user.id, form.role, self.session.user.email
        );
        let payload = form.to_payload(FormMode::Edit);
        let result = self
            .api
            .update_user(&self.session.token, &user.id, &payload)
            .await;
        if let Err(e) = &result {
            warn!("Failed to update user {}: {}", user.id, e);
        }
        result
    }

    /// DELETE an account
    pub async fn delete_user(&self, user: &User) -> Result<()> {
        self.ensure_admin()?;

        info!(
            "DELETE_USER: id={}, email={}, requested_by={}",
            user.id, user.email, self.session.user.email
        );
        let result = self.api.delete_user(&self.session.token, &user.id).await;
        if let Err(e) = &result {
            warn!("Failed to delete user {}: {}", user.id, e);
        }
        result
    }
}
