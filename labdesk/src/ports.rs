use crate::Result;
use crate::users::models::{User, UserPayload};
use async_trait::async_trait;

// Ports are the pluggable extension points for the admin backend

/// Port for the admin user endpoints.
/// Every call carries the bearer token of the signed-in admin.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait UserApi {
    async fn list_users(&self, token: &str) -> Result<Vec<User>>;
    async fn create_user(&self, token: &str, payload: &UserPayload) -> Result<()>;
    async fn update_user(&self, token: &str, id: &str, payload: &UserPayload) -> Result<()>;
    async fn delete_user(&self, token: &str, id: &str) -> Result<()>;
}
