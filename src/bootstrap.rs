//! Application bootstrap
//!
//! Explicit composition root: builds the HTTP client, the role resolver and
//! the login limiter from validated configuration and wires them together.
//! Dependencies are injected; nothing here is a hidden singleton.

use std::collections::HashMap;
use std::sync::Arc;
use tracing::{error, info};

use crate::auth::guard::RouteGuard;
use crate::auth::rate_limiter::LoginRateLimiter;
use crate::auth::roles::{RoleId, RoleResolver};
use crate::client::ApiClient;
use crate::config::ConsoleConfig;
use crate::utils::error::Result;

/// Owns the console core's long-lived components.
#[derive(Debug)]
pub struct AppContext {
    config: ConsoleConfig,
    client: Arc<ApiClient>,
    roles: Arc<RoleResolver>,
    login_limiter: Arc<LoginRateLimiter>,
}

impl AppContext {
    /// Build the application context from validated configuration.
    pub fn new(config: ConsoleConfig) -> Result<Self> {
        config.validate()?;

        let client = Arc::new(ApiClient::new(&config.api)?);
        let roles = Arc::new(RoleResolver::new(client.clone()));
        let login_limiter = Arc::new(LoginRateLimiter::new(&config.login));

        Ok(Self {
            config,
            client,
            roles,
            login_limiter,
        })
    }

    /// Run the initial role catalog load.
    ///
    /// Must complete before anything role-gated renders. On failure the error
    /// propagates to the caller, which blocks the UI behind a retry screen;
    /// calling this again is the retry.
    pub async fn initialize_roles(&self) -> Result<()> {
        info!("Initializing role catalog");
        self.roles.load().await.map_err(|e| {
            error!("Role catalog initialization failed: {}", e);
            e
        })
    }

    /// Whether the role catalog has been loaded.
    pub fn roles_loaded(&self) -> bool {
        self.roles.is_loaded()
    }

    /// Snapshot of every known role by original display name.
    pub fn all_roles(&self) -> HashMap<String, RoleId> {
        self.roles.all_by_original_name()
    }

    /// Identifier for a role by its exact display name.
    pub fn role_id_by_original_name(&self, name: &str) -> Option<RoleId> {
        self.roles.resolve_id_by_original_name(name)
    }

    /// A guard bound to this context's resolver.
    pub fn route_guard(&self) -> RouteGuard {
        RouteGuard::new(self.roles.clone())
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    pub fn client(&self) -> &Arc<ApiClient> {
        &self.client
    }

    pub fn roles(&self) -> &Arc<RoleResolver> {
        &self.roles
    }

    pub fn login_limiter(&self) -> &Arc<LoginRateLimiter> {
        &self.login_limiter
    }
}
