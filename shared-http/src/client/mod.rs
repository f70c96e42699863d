use crate::api::{ErrorResponse, HealthResponse, LoginRequest, LoginResponse};
use crate::endpoints::Endpoints;
use async_trait::async_trait;
use labdesk::auth::Session;
use labdesk::ports::UserApi;
use labdesk::users::{User, UserPayload};
use labdesk::{Error, Result};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    endpoints: Endpoints,
}

impl ApiClient {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoints: Endpoints::new(api_base_url),
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

impl ApiClient {
    pub async fn check_health(&self) -> Result<String> {
        let url = self.endpoints.health();
        debug!("Checking health at URL: {}", url);
        let response = self.send(self.client.get(&url)).await?;
        let body: HealthResponse = decode(response).await?;
        Ok(body.message.unwrap_or_else(|| "OK".to_string()))
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        let url = self.endpoints.login();
        let payload = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self
            .send(self.client.post(&url).json(&payload))
            .await
            .inspect_err(|_| warn!("Login failed for user: {}", email))?;
        let body: LoginResponse = decode(response).await?;
        info!("Logged in as {} ({})", body.user.email, body.user.role);
        Ok(body.into())
    }

    /// Sends the request; any non-2xx status becomes `Error::Status` carrying
    /// the server's `message` when the body has one.
    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await.map_err(|e| {
            warn!("Request failed: {}", e);
            Error::Request(e.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.json::<ErrorResponse>().await.unwrap_or_default();
        warn!(
            "Request rejected with status {}: {}",
            status,
            body.message.as_deref().unwrap_or("<no message>")
        );
        Err(Error::Status {
            status: status.as_u16(),
            message: body.message,
        })
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| Error::Decode(e.to_string()))
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl UserApi for ApiClient {
    async fn list_users(&self, token: &str) -> Result<Vec<User>> {
        let url = self.endpoints.admin_users();
        debug!("GET {}", url);
        let response = self.send(self.client.get(&url).bearer_auth(token)).await?;
        decode(response).await
    }

    async fn create_user(&self, token: &str, payload: &UserPayload) -> Result<()> {
        let url = self.endpoints.admin_users();
        debug!("POST {}", url);
        self.send(self.client.post(&url).bearer_auth(token).json(payload))
            .await?;
        Ok(())
    }

    async fn update_user(&self, token: &str, id: &str, payload: &UserPayload) -> Result<()> {
        let url = self.endpoints.admin_user_by_id(id);
        debug!("PUT {}", url);
        self.send(self.client.put(&url).bearer_auth(token).json(payload))
            .await?;
        Ok(())
    }

    async fn delete_user(&self, token: &str, id: &str) -> Result<()> {
        let url = self.endpoints.admin_user_by_id(id);
        debug!("DELETE {}", url);
        self.send(self.client.delete(&url).bearer_auth(token)).await?;
        Ok(())
    }
}
