//! Role catalog wire types and the fetch seam

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::error::Result;

/// Opaque, server-assigned role identifier.
///
/// Stable within a deployment but different across databases, which is why
/// the client resolves identifiers at runtime instead of hardcoding them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleId(String);

impl RoleId {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoleId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// One entry of the role catalog as returned by `GET /roles/`.
///
/// Field names follow the backend contract exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleRecord {
    /// Opaque identifier the backend and user sessions compare against
    pub id_rol: RoleId,
    /// Human-readable display name fed to normalization
    pub nombre_rol: String,
    /// Free-text description, unused by the resolver
    #[serde(default)]
    pub descripcion: String,
}

/// Source of the full role catalog.
///
/// The production implementation is [`crate::client::ApiClient`]; tests supply
/// in-memory sources. The full catalog is expected in one response, no
/// pagination.
#[async_trait]
pub trait RoleCatalogSource: Send + Sync {
    async fn fetch_roles(&self) -> Result<Vec<RoleRecord>>;
}
