//! Starfish service client with transparent token lifecycle
//!
//! Every resource operation resolves a usable bearer token first
//! (refreshing through the token endpoint when the cached one is absent
//! or expired), then performs exactly one HTTP request. A failed token
//! step short-circuits the call; the resource request is never issued.

use log::{debug, info};
use reqwest::Method;
use serde_json::Value;
use tokio::sync::RwLock;

use super::auth::{self, AuthMethod, TokenResponse};
use super::config::{ServiceConfig, ServiceOptions};
use super::constants::{self, headers};
use super::query::{append_query, PagedResult};
use crate::error::{Error, Result};

/// Client for the Starfish Data Platform API.
///
/// Methods take `&self`; concurrent calls on one instance are allowed
/// but not synchronized around the token cache. Two in-flight calls
/// that both observe an expired token will each fetch a new one, and
/// whichever response lands last wins the cache. That matches the
/// platform's reference client and is a documented limitation, not a
/// guarantee to build on.
pub struct StarfishService {
    pub(crate) config: ServiceConfig,
    http: reqwest::Client,
    token: RwLock<Option<String>>,
}

impl StarfishService {
    /// Create a service from a validated configuration
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_custom_client(config, reqwest::Client::new())
    }

    /// Create a service with a custom HTTP client configuration
    pub fn with_custom_client(config: ServiceConfig, http: reqwest::Client) -> Self {
        // Static-token mode pre-seeds the cache; it is never refreshed.
        let token = match &config.auth {
            AuthMethod::Token(token) => Some(token.clone()),
            AuthMethod::Credentials(_) => None,
        };
        Self {
            config,
            http,
            token: RwLock::new(token),
        }
    }

    /// Validate options and create a service
    pub fn from_options(options: ServiceOptions) -> Result<Self> {
        Ok(Self::new(options.build()?))
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Decide whether the cached token must be replaced before a call.
    ///
    /// Static-token mode never refreshes. In credentials mode a missing
    /// token means refresh; a present token is checked for expiry, and a
    /// decode failure propagates as a token error instead of forcing a
    /// refresh.
    async fn should_refresh(&self) -> Result<bool> {
        match &self.config.auth {
            AuthMethod::Token(_) => Ok(false),
            AuthMethod::Credentials(_) => match self.token.read().await.as_deref() {
                None => Ok(true),
                Some(token) => auth::token_has_expired(token),
            },
        }
    }

    /// Resolve a usable bearer token, refreshing on demand.
    ///
    /// The write lock is held only for the store, not across the fetch,
    /// so concurrent refreshes race (see the type-level docs).
    async fn access_token(&self) -> Result<String> {
        if self.should_refresh().await? {
            let token = self.fetch_token().await?;
            *self.token.write().await = Some(token.clone());
            return Ok(token);
        }
        self.token
            .read()
            .await
            .clone()
            .ok_or_else(|| Error::Token("no token available".into()))
    }

    /// Exchange client credentials for a fresh bearer token
    async fn fetch_token(&self) -> Result<String> {
        let credentials = match &self.config.auth {
            AuthMethod::Credentials(credentials) => credentials,
            AuthMethod::Token(_) => {
                return Err(Error::Token("no credentials to refresh with".into()));
            }
        };

        let url = constants::tokens_endpoint(&self.config.endpoint);
        info!("Fetching access token from {}", url);

        let response = self
            .http
            .post(&url)
            .header("Accept", headers::CONTENT_TYPE_JSON)
            .json(credentials)
            .send()
            .await?;

        debug!("Token request status: {}", response.status());

        let body: TokenResponse = response.error_for_status()?.json().await?;
        body.access_token
            .ok_or_else(|| Error::Token("No access token in response".into()))
    }

    /// Perform one authenticated request and return the raw response.
    ///
    /// The pipeline does not branch on status codes; resource operations
    /// judge the parsed body shape.
    async fn request(
        &self,
        method: Method,
        uri: &str,
        query: &[(&str, &str)],
        body: Option<&Value>,
    ) -> Result<reqwest::Response> {
        let token = self.access_token().await?;
        let url = append_query(uri, query);
        debug!("{} {}", method, url);

        let mut request = self
            .http
            .request(method, &url)
            // Raw token, no "Bearer " prefix; the platform expects it verbatim.
            .header("Authorization", token.as_str())
            .header("Content-Type", headers::CONTENT_TYPE_JSON);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        debug!("Response status: {}", response.status());
        Ok(response)
    }

    /// Simple response mode: resolve with the parsed JSON body only
    pub(crate) async fn send_json(
        &self,
        method: Method,
        uri: &str,
        query: &[(&str, &str)],
        body: Option<&Value>,
    ) -> Result<Value> {
        let response = self.request(method, uri, query, body).await?;
        Ok(response.json().await?)
    }

    /// Full response mode: resolve with the parsed body plus the
    /// `next_page` response header, for paginated endpoints
    pub(crate) async fn send_paged(
        &self,
        method: Method,
        uri: &str,
        query: &[(&str, &str)],
    ) -> Result<PagedResult> {
        let response = self.request(method, uri, query, None).await?;
        let next_page = PagedResult::next_page_header(&response);
        let data: Value = response.json().await?;
        Ok(PagedResult::from_response_parts(data, next_page))
    }
}
