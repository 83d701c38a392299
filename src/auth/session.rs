//! Authenticated session state
//!
//! The backend authenticates users and returns the session payload verbatim;
//! this type only holds it and answers role-membership questions with the
//! identifiers the resolver produced. Per-user data is never fetched here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::roles::RoleId;

/// The authenticated user's session as held by the console.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Backend user identifier
    pub user_id: Uuid,
    /// Login name, for display and logging
    pub username: String,
    /// The user's role identifier, when one is assigned
    pub role_id: Option<RoleId>,
    /// When the session was established
    pub issued_at: DateTime<Utc>,
    /// When the session stops being valid
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn new(
        user_id: Uuid,
        username: String,
        role_id: Option<RoleId>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            username,
            role_id,
            issued_at: Utc::now(),
            expires_at,
        }
    }

    /// Whether the session holds exactly this role.
    ///
    /// A user without an assigned role holds no role at all.
    pub fn has_role(&self, role_id: &RoleId) -> bool {
        self.role_id.as_ref() == Some(role_id)
    }

    /// Whether the session holds any of the given roles.
    ///
    /// An empty slice yields `false`: there is nothing the user could hold.
    /// Route-level "no role required" policy lives in the guard, not here.
    pub fn has_any_role(&self, role_ids: &[RoleId]) -> bool {
        role_ids.iter().any(|id| self.has_role(id))
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}
