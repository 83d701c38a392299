//! Shared test fixtures

use async_trait::async_trait;
use chrono::{Duration, Utc};
use poa_console::{Result, RoleCatalogSource, RoleId, RoleRecord, Session};
use uuid::Uuid;

/// Catalog source serving a fixed in-memory catalog.
pub struct StaticCatalog(pub Vec<RoleRecord>);

#[async_trait]
impl RoleCatalogSource for StaticCatalog {
    async fn fetch_roles(&self) -> Result<Vec<RoleRecord>> {
        Ok(self.0.clone())
    }
}

pub fn record(id: &str, name: &str) -> RoleRecord {
    RoleRecord {
        id_rol: RoleId::from(id),
        nombre_rol: name.to_string(),
        descripcion: String::new(),
    }
}

/// The catalog a typical deployment ships with.
pub fn poa_catalog() -> Vec<RoleRecord> {
    vec![
        record("u-admin", "Administrador"),
        record("u-dir", "Director de Investigación"),
        record("u-doc", "Docente Investigador"),
    ]
}

pub fn session_with_role(role_id: Option<RoleId>) -> Session {
    Session::new(
        Uuid::new_v4(),
        "mgarcia".to_string(),
        role_id,
        Utc::now() + Duration::hours(8),
    )
}

pub fn expired_session(role_id: Option<RoleId>) -> Session {
    Session::new(
        Uuid::new_v4(),
        "mgarcia".to_string(),
        role_id,
        Utc::now() - Duration::minutes(1),
    )
}
