//! Store endpoint configuration and credential resolution.

use std::env;

use crate::error::{StoreError, StoreResult};

/// Environment variable naming the SPARQL query endpoint URL.
pub const QUERY_URL_VAR: &str = "GRAPH_QUERY_URL";
/// Environment variable naming the Basic auth username.
pub const USERNAME_VAR: &str = "GRAPH_USERNAME";
/// Environment variable naming the Basic auth password.
pub const PASSWORD_VAR: &str = "GRAPH_PASSWORD";

/// Where the Basic auth credential pair comes from.
///
/// [`CredentialSource::Env`] re-reads both variables on every resolution, so
/// rotating a credential between two calls changes the Authorization header
/// of the second call without rebuilding the client. An absent variable
/// resolves to an empty string; the store's own authentication failure is the
/// signal, not a local check.
#[derive(Debug, Clone)]
pub enum CredentialSource {
    Env {
        username_var: String,
        password_var: String,
    },
    Static {
        username: String,
        password: String,
    },
}

impl CredentialSource {
    pub fn resolve(&self) -> (String, String) {
        match self {
            CredentialSource::Env {
                username_var,
                password_var,
            } => (
                env::var(username_var).unwrap_or_default(),
                env::var(password_var).unwrap_or_default(),
            ),
            CredentialSource::Static { username, password } => {
                (username.clone(), password.clone())
            }
        }
    }
}

/// Read-only endpoint configuration handed to [`crate::StoreClient`] at
/// construction time.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// SPARQL query endpoint, e.g. `http://localhost:5820/db/query`.
    pub query_url: String,
    /// Fixed headers attached to every request.
    pub headers: Vec<(String, String)>,
    pub credentials: CredentialSource,
}

impl StoreConfig {
    /// The header set Stardog-style endpoints expect for raw SPARQL bodies.
    pub fn default_headers() -> Vec<(String, String)> {
        vec![
            (
                "Content-Type".to_string(),
                "application/sparql-query".to_string(),
            ),
            (
                "Accept".to_string(),
                "application/sparql-results+json".to_string(),
            ),
        ]
    }

    /// Build a configuration from the process environment.
    ///
    /// Fails early with an informative message when the endpoint URL or
    /// either credential variable is missing, so a misconfigured deployment
    /// surfaces at startup rather than as a 401 on the first query.
    pub fn from_env() -> StoreResult<Self> {
        let query_url = env::var(QUERY_URL_VAR).map_err(|_| {
            StoreError::Config(format!(
                "could not read the {} environment variable",
                QUERY_URL_VAR
            ))
        })?;
        if env::var(USERNAME_VAR).is_err() || env::var(PASSWORD_VAR).is_err() {
            return Err(StoreError::Config(format!(
                "could not read the {} and / or {} environment variables",
                USERNAME_VAR, PASSWORD_VAR
            )));
        }
        Ok(Self {
            query_url,
            headers: Self::default_headers(),
            credentials: CredentialSource::Env {
                username_var: USERNAME_VAR.to_string(),
                password_var: PASSWORD_VAR.to_string(),
            },
        })
    }

    /// Configuration with an inline credential pair, for tests and callers
    /// that manage secrets themselves.
    pub fn with_static_credentials(
        query_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            query_url: query_url.into(),
            headers: Self::default_headers(),
            credentials: CredentialSource::Static {
                username: username.into(),
                password: password.into(),
            },
        }
    }
}
