//! Alias service HTTP client.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header};
use tracing::{debug, warn};

use super::dto::{AccountRecord, AliasRecord, ErrorResponse, LoginBody, LoginResponse};
use crate::domain::entities::{Account, Alias, SessionToken};
use crate::domain::errors::{AuthError, FetchError};
use crate::domain::ports::{AliasDataPort, AuthPort, Credentials};

/// Default backend base URL, matching the service's development port.
pub const DEFAULT_API_BASE: &str = "http://localhost:5267";

const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// Derives the display message for a failed response, preferring the
/// backend's structured error body over the bare status line.
fn failure_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .map_or_else(|_| format!("HTTP {status}"), |error| error.message)
}

/// Maps a transport-level error to a display message.
fn transport_message(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "request timed out".to_string()
    } else if e.is_connect() {
        "failed to connect to the alias service".to_string()
    } else {
        e.to_string()
    }
}

/// HTTP adapter for the alias service API.
///
/// Implements both [`AuthPort`] and [`AliasDataPort`]; protected requests
/// carry `Authorization: Bearer <token>`.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client against the default base URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new() -> Result<Self, AuthError> {
        Self::with_base_url(DEFAULT_API_BASE)
    }

    /// Creates a client against a custom base URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, AuthError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AuthError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        token: &SessionToken,
    ) -> Result<T, FetchError> {
        let url = format!("{}{path}", self.base_url);

        debug!(path, "Fetching from alias service");

        let response = self
            .client
            .get(&url)
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", token.as_str()),
            )
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, path, "Request failed");
                FetchError::new(transport_message(&e))
            })?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::new(failure_message(status, &body)));
        }

        response.json().await.map_err(|e| {
            warn!(error = %e, path, "Failed to parse response");
            FetchError::new(format!("failed to parse response: {e}"))
        })
    }
}

#[async_trait]
impl AuthPort for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<SessionToken, AuthError> {
        let url = format!("{}/api/auth/login", self.base_url);

        debug!("Submitting credentials to alias service");

        let response = self
            .client
            .post(&url)
            .json(&LoginBody {
                email: &credentials.email,
                password: &credentials.password,
            })
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Login request failed");
                AuthError::network(transport_message(&e))
            })?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::rejected(failure_message(status, &body)));
        }

        let login: LoginResponse = response
            .json()
            .await
            .map_err(|_| AuthError::MalformedResponse)?;

        let token = login.token.ok_or(AuthError::MalformedResponse)?;

        debug!("Login accepted by alias service");

        SessionToken::new(token).ok_or(AuthError::MalformedResponse)
    }
}

#[async_trait]
impl AliasDataPort for ApiClient {
    async fn fetch_aliases(&self, token: &SessionToken) -> Result<Vec<Alias>, FetchError> {
        let records: Vec<AliasRecord> = self.get_json("/api/aliases", token).await?;

        debug!(count = records.len(), "Aliases fetched");

        Ok(records.into_iter().map(Into::into).collect())
    }

    async fn fetch_account(&self, token: &SessionToken) -> Result<Account, FetchError> {
        let record: AccountRecord = self.get_json("/api/account", token).await?;

        Ok(record.into())
    }
}
