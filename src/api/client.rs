//! HTTP client for the collaboration server.
//!
//! One method per remote operation. All failures are normalized into
//! [`ApiError`] before they reach the store layer; see `error.rs` for
//! the status-code mapping.

use std::time::Duration;

use parking_lot::RwLock;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ErrorKind};
use crate::api::types::{AuthPayload, Conversation, Message, UserPatch, UserRecord};
use crate::config::ServerConfig;

/// Client for the collaboration server's REST API.
///
/// Holds the bearer token for the current session; the session store
/// updates it on login/logout via [`ApiClient::set_token`].
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl ApiClient {
    /// Build a client from server configuration.
    pub fn new(server: &ServerConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(u64::from(server.timeout_seconds)))
            .connect_timeout(Duration::from_secs(u64::from(
                server.connect_timeout_seconds,
            )))
            .build()
            .map_err(|err| {
                ApiError::new(
                    ErrorKind::Network,
                    format!("failed to build HTTP client: {err}"),
                )
            })?;

        Ok(Self {
            http,
            base_url: server.base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(None),
        })
    }

    /// Install or clear the bearer token used for authenticated calls.
    pub fn set_token(&self, token: Option<String>) {
        *self.token.write() = token;
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.token.read().as_deref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request and normalize any non-success response.
    async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = self.authorized(builder).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        Err(decode_error(status, response).await)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.http.get(self.url(path))).await?;
        Ok(response.json().await?)
    }

    // -- session ------------------------------------------------------------

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthPayload, ApiError> {
        let body = LoginRequest { email, password };
        let response = self
            .send(self.http.post(self.url("/api/login")).json(&body))
            .await?;
        Ok(response.json().await?)
    }

    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthPayload, ApiError> {
        let body = RegisterRequest {
            name,
            email,
            password,
        };
        let response = self
            .send(self.http.post(self.url("/api/register")).json(&body))
            .await?;
        Ok(response.json().await?)
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.send(self.http.post(self.url("/api/logout"))).await?;
        Ok(())
    }

    pub async fn current_user(&self) -> Result<UserRecord, ApiError> {
        self.get_json("/api/user").await
    }

    // -- users --------------------------------------------------------------

    pub async fn list_users(&self) -> Result<Vec<UserRecord>, ApiError> {
        self.get_json("/api/users").await
    }

    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<UserRecord, ApiError> {
        let body = RegisterRequest {
            name,
            email,
            password,
        };
        let response = self
            .send(self.http.post(self.url("/api/users")).json(&body))
            .await?;
        Ok(response.json().await?)
    }

    pub async fn update_user(&self, id: i64, patch: &UserPatch) -> Result<UserRecord, ApiError> {
        let response = self
            .send(
                self.http
                    .put(self.url(&format!("/api/users/{id}")))
                    .json(patch),
            )
            .await?;
        Ok(response.json().await?)
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        self.send(self.http.delete(self.url(&format!("/api/users/{id}"))))
            .await?;
        Ok(())
    }

    // -- chat ---------------------------------------------------------------

    pub async fn conversation(&self, id: i64) -> Result<Conversation, ApiError> {
        self.get_json(&format!("/api/conversations/{id}")).await
    }

    pub async fn messages(&self, conversation_id: i64) -> Result<Vec<Message>, ApiError> {
        self.get_json(&format!("/api/conversations/{conversation_id}/messages"))
            .await
    }
}

/// Extract a human-readable message from an error response body.
///
/// Servers answer with either `{"error": {"message": ...}}` or a flat
/// `{"message": ...}`; anything else yields a bare error so the store
/// layer substitutes its action-specific fallback.
async fn decode_error(status: StatusCode, response: Response) -> ApiError {
    let kind = ErrorKind::from_status(status.as_u16());
    let body = match response.text().await {
        Ok(body) => body,
        Err(_) => return ApiError::bare(kind),
    };
    match extract_message(&body) {
        Some(message) => ApiError::new(kind, message),
        None => ApiError::bare(kind),
    }
}

fn extract_message(body: &str) -> Option<String> {
    let payload: ErrorBody = serde_json::from_str(body).ok()?;
    let message = match payload {
        ErrorBody {
            error: Some(inner), ..
        } => inner.message,
        ErrorBody { message, .. } => message,
    }?;
    if message.is_empty() {
        None
    } else {
        Some(message)
    }
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<ErrorDetail>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: Option<String>,
}
