//! Role-gated access decisions
//!
//! Route guards and conditional rendering both funnel through this type, so
//! the answer to "may this session see this?" is computed in exactly one
//! place. All decisions fail closed: a role name that does not resolve can
//! never grant access, because `None` never equals a real identifier.

use std::sync::Arc;
use tracing::debug;

use super::roles::{RoleKey, RoleResolver};
use super::session::Session;

/// Decides whether a session may access a route or UI section.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    resolver: Arc<RoleResolver>,
}

impl RouteGuard {
    pub fn new(resolver: Arc<RoleResolver>) -> Self {
        Self { resolver }
    }

    /// Whether `session` satisfies the route's role requirement.
    ///
    /// Policy for an empty `required` slice: ALLOW. A route that names no
    /// role requires only an authenticated session; role-free routes (home,
    /// profile) would otherwise need a fake catch-all role. Expired sessions
    /// are rejected before any role check.
    ///
    /// Keys that do not resolve (catalog not loaded, role absent from this
    /// deployment) contribute nothing to the allowed set, so a requirement
    /// made only of unresolvable keys denies everyone.
    pub fn allows(&self, session: &Session, required: &[RoleKey]) -> bool {
        if session.is_expired() {
            debug!("Access denied for {}: session expired", session.username);
            return false;
        }

        if required.is_empty() {
            return true;
        }

        let allowed_ids: Vec<_> = required
            .iter()
            .filter_map(|key| self.resolver.id_for(*key))
            .collect();

        let granted = session.has_any_role(&allowed_ids);
        if !granted {
            debug!(
                "Access denied for {}: requires one of {:?}",
                session.username, required
            );
        }
        granted
    }
}
