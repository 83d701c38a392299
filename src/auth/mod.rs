//! Authentication and authorization for the console
//!
//! Role resolution, session predicates, route guarding and login brute-force
//! protection. Everything here fails closed: an unresolved role denies.

pub mod guard;
pub mod rate_limiter;
pub mod roles;
pub mod session;

// Re-export commonly used types
pub use guard::RouteGuard;
pub use rate_limiter::LoginRateLimiter;
pub use roles::{RoleCatalogSource, RoleId, RoleKey, RoleRecord, RoleResolver};
pub use session::Session;
