//! Service configuration and construction-time validation

use super::auth::{AuthMethod, Credentials};
use super::constants::{DEFAULT_ENDPOINT, DEFAULT_SOLUTION};
use crate::error::{Error, Result};

/// Options-object construction form. Unset `endpoint`/`solution` fall
/// back to the platform defaults; exactly one of `token`/`credentials`
/// must be given.
#[derive(Debug, Clone, Default)]
pub struct ServiceOptions {
    pub endpoint: Option<String>,
    pub solution: Option<String>,
    pub token: Option<String>,
    pub credentials: Option<Credentials>,
}

impl ServiceOptions {
    /// Validate and resolve into a [`ServiceConfig`]
    pub fn build(self) -> Result<ServiceConfig> {
        let auth = match (self.credentials, self.token) {
            (Some(_), Some(_)) => {
                return Err(Error::Config(
                    "Specify either credentials or token, not both".into(),
                ));
            }
            (None, None) => {
                return Err(Error::Config("Specify either credentials or token".into()));
            }
            (Some(credentials), None) => {
                if credentials.client_id.is_empty() || credentials.client_secret.is_empty() {
                    return Err(Error::Config(
                        "Credentials requires clientId and clientSecret".into(),
                    ));
                }
                AuthMethod::Credentials(credentials)
            }
            (None, Some(token)) => AuthMethod::Token(token),
        };

        Ok(ServiceConfig {
            endpoint: self.endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            solution: self.solution.unwrap_or_else(|| DEFAULT_SOLUTION.to_string()),
            auth,
        })
    }
}

/// Validated, immutable service configuration
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub endpoint: String,
    pub solution: String,
    pub auth: AuthMethod,
}

impl ServiceConfig {
    /// Flat positional form, static-token mode
    pub fn with_token(
        endpoint: impl Into<String>,
        solution: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self> {
        ServiceOptions {
            endpoint: Some(endpoint.into()),
            solution: Some(solution.into()),
            token: Some(token.into()),
            credentials: None,
        }
        .build()
    }

    /// Flat positional form, credentials mode
    pub fn with_credentials(
        endpoint: impl Into<String>,
        solution: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self> {
        ServiceOptions {
            endpoint: Some(endpoint.into()),
            solution: Some(solution.into()),
            token: None,
            credentials: Some(Credentials::new(client_id, client_secret)),
        }
        .build()
    }
}
