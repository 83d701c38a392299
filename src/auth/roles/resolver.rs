//! Dynamic role resolution
//!
//! The backend assigns role identifiers per deployment, so the client never
//! hardcodes them. Instead the resolver fetches the full role catalog once at
//! startup, indexes it by normalized and by original display name, and answers
//! identifier lookups for route guards and role-conditional rendering.

use arc_swap::ArcSwap;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, warn};

use crate::utils::error::Result;

use super::catalog::{RoleCatalogSource, RoleId, RoleRecord};
use super::keys::RoleKey;
use super::normalize::normalize_role_name;

/// Immutable snapshot of both name indexes.
///
/// Replaced wholesale on every load so readers always observe the mappings of
/// exactly one catalog fetch, never a mix of two.
#[derive(Debug, Default)]
struct RoleMappings {
    by_normalized: HashMap<String, RoleId>,
    by_original: HashMap<String, RoleId>,
}

/// Resolves role display names to backend identifiers.
///
/// Constructed explicitly by the application bootstrap and shared via `Arc`;
/// there is no hidden global instance. Lookups are synchronous, lock-free and
/// infallible: before the first successful [`load`](Self::load) and for any
/// unknown name they return `None`, which callers must treat as deny.
pub struct RoleResolver {
    source: Arc<dyn RoleCatalogSource>,
    mappings: ArcSwap<RoleMappings>,
    loaded: AtomicBool,
}

impl RoleResolver {
    pub fn new(source: Arc<dyn RoleCatalogSource>) -> Self {
        Self {
            source,
            mappings: ArcSwap::from_pointee(RoleMappings::default()),
            loaded: AtomicBool::new(false),
        }
    }

    /// Fetch the role catalog and rebuild both indexes.
    ///
    /// Idempotent while loaded: returns immediately without refetching. On
    /// failure the previous mappings are left untouched and the error is
    /// propagated; the bootstrap owns the retry affordance, this method never
    /// retries on its own.
    ///
    /// Two concurrent first-time calls may both fetch; each installs its
    /// catalog in a single atomic swap, so the last writer wins with a
    /// complete, coherent mapping either way.
    pub async fn load(&self) -> Result<()> {
        if self.loaded.load(Ordering::Acquire) {
            debug!("Role catalog already loaded, skipping fetch");
            return Ok(());
        }

        let records = self.source.fetch_roles().await?;
        let count = records.len();
        self.install(records);

        info!("Role catalog loaded: {} roles", count);
        Ok(())
    }

    /// Force a refetch even if already loaded.
    ///
    /// Used when the role catalog changed server-side during a session. The
    /// old mappings keep serving lookups until the new fetch completes and
    /// replaces them; a role removed server-side stops resolving after that
    /// point.
    pub async fn reload(&self) -> Result<()> {
        info!("Reloading role catalog");
        self.loaded.store(false, Ordering::Release);
        self.load().await
    }

    /// Look up an identifier by display name, applying normalization first.
    ///
    /// Accepts either the raw display name (`"Director de Investigación"`) or
    /// an already-normalized key (`"DIRECTOR_DE_INVESTIGACION"`); both hit the
    /// same entry because normalization is idempotent. Returns `None` for
    /// unknown names and before the first successful load. Never fails.
    pub fn resolve_id_by_name(&self, name: &str) -> Option<RoleId> {
        self.mappings
            .load()
            .by_normalized
            .get(&normalize_role_name(name))
            .cloned()
    }

    /// Exact-match lookup by the display name as the backend sent it.
    pub fn resolve_id_by_original_name(&self, exact_name: &str) -> Option<RoleId> {
        self.mappings.load().by_original.get(exact_name).cloned()
    }

    /// Look up the identifier for one of the console's known role constants.
    pub fn id_for(&self, key: RoleKey) -> Option<RoleId> {
        self.mappings.load().by_normalized.get(key.as_key()).cloned()
    }

    /// Whether a load has completed successfully (and no reload is pending).
    pub fn is_loaded(&self) -> bool {
        self.loaded.load(Ordering::Acquire)
    }

    /// Snapshot of the normalized-name index, for diagnostics.
    pub fn all_by_normalized_name(&self) -> HashMap<String, RoleId> {
        self.mappings.load().by_normalized.clone()
    }

    /// Snapshot of the original-name index, for diagnostics.
    pub fn all_by_original_name(&self) -> HashMap<String, RoleId> {
        self.mappings.load().by_original.clone()
    }

    /// Replace both indexes in one atomic swap and mark the resolver loaded.
    fn install(&self, records: Vec<RoleRecord>) {
        let mut by_normalized = HashMap::with_capacity(records.len());
        let mut by_original = HashMap::with_capacity(records.len());

        for record in records {
            let RoleRecord {
                id_rol, nombre_rol, ..
            } = record;
            let key = normalize_role_name(&nombre_rol);

            // Collision policy: last record processed wins in both indexes.
            if let Some(previous) = by_normalized.insert(key.clone(), id_rol.clone()) {
                warn!(
                    "Role name collision on key {}: id {} replaces {}",
                    key, id_rol, previous
                );
            }
            by_original.insert(nombre_rol, id_rol);
        }

        self.mappings
            .store(Arc::new(RoleMappings { by_normalized, by_original }));
        self.loaded.store(true, Ordering::Release);
    }
}

impl std::fmt::Debug for RoleResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoleResolver")
            .field("loaded", &self.is_loaded())
            .field("roles", &self.mappings.load().by_normalized.len())
            .finish()
    }
}
