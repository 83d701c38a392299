//! HTTP client for the console's REST backend
//!
//! Thin wrapper over a shared `reqwest::Client`: base URL joining, bearer
//! token attachment and JSON decoding. One instance is built at bootstrap and
//! shared; per-request clients would defeat connection pooling.

use arc_swap::ArcSwapOption;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::auth::roles::{RoleCatalogSource, RoleRecord};
use crate::config::ApiConfig;
use crate::utils::error::{ConsoleError, Result};

/// Path of the role catalog endpoint, relative to the API base URL.
const ROLES_PATH: &str = "roles/";

/// Token-attaching, base-URL-configured client for the backend API.
pub struct ApiClient {
    base_url: Url,
    http: reqwest::Client,
    /// Bearer token of the authenticated session, absent until login
    token: ArcSwapOption<String>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ConsoleError::config(format!("Invalid API base URL: {}", e)))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("poa-console/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ConsoleError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url,
            http,
            token: ArcSwapOption::empty(),
        })
    }

    /// Install the session token attached to subsequent requests.
    pub fn set_token<S: Into<String>>(&self, token: S) {
        self.token.store(Some(Arc::new(token.into())));
    }

    /// Drop the session token (logout).
    pub fn clear_token(&self) {
        self.token.store(None);
    }

    /// `GET` a JSON resource relative to the base URL.
    ///
    /// Non-2xx responses become `ConsoleError::Api`; transport and decode
    /// failures map through the `reqwest` conversion.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path)?;
        debug!("GET {}", url);

        let mut request = self.http.get(url);
        if let Some(token) = self.token.load_full() {
            request = request.bearer_auth(token.as_ref());
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ConsoleError::api(format!(
                "GET {} returned {}",
                path, status
            )));
        }

        Ok(response.json::<T>().await?)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ConsoleError::config(format!("Invalid endpoint path {}: {}", path, e)))
    }
}

#[async_trait]
impl RoleCatalogSource for ApiClient {
    async fn fetch_roles(&self) -> Result<Vec<RoleRecord>> {
        self.get_json::<Vec<RoleRecord>>(ROLES_PATH)
            .await
            .map_err(|e| ConsoleError::role_catalog(format!("failed to fetch role catalog: {}", e)))
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("has_token", &self.token.load().is_some())
            .finish()
    }
}
