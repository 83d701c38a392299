//! # POA Console
//!
//! Client-side authorization core for the administrative console that manages
//! research-project annual operating plans (POAs).
//!
//! The console is glue over a REST backend; this crate implements the one part
//! of it with real state and correctness constraints: translating between the
//! human-readable role names referenced in UI code and the opaque identifiers
//! the backend assigns per deployment, and answering the role-gated access
//! questions route guards ask.
//!
//! ## Features
//!
//! - **Dynamic role resolution**: the role catalog is fetched once at startup;
//!   no role identifier is ever hardcoded in the client
//! - **Name normalization**: display names become stable ASCII keys
//!   (`"Director de Investigación"` → `"DIRECTOR_DE_INVESTIGACION"`)
//! - **Fail-closed lookups**: unknown or not-yet-loaded roles resolve to
//!   `None` and guards treat that as deny, never allow
//! - **Session predicates**: `has_role` / `has_any_role` over the
//!   authenticated user's role identifier
//! - **Login brute-force protection**: per-client attempt windows with lockout
//! - **Input sanitization**: plain-text cleanup for free-text form fields
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use poa_console::{AppContext, ConsoleConfig, RoleKey};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConsoleConfig::from_env()?;
//!     let app = AppContext::new(config)?;
//!
//!     // Blocks role-gated rendering until the catalog is available.
//!     app.initialize_roles().await?;
//!
//!     let admin_id = app.roles().id_for(RoleKey::Administrador);
//!     println!("administrator role id: {:?}", admin_id);
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

// Public module exports
pub mod auth;
pub mod bootstrap;
pub mod client;
pub mod config;
pub mod utils;

// Re-export main types
pub use auth::guard::RouteGuard;
pub use auth::rate_limiter::LoginRateLimiter;
pub use auth::roles::{
    RoleCatalogSource, RoleId, RoleKey, RoleRecord, RoleResolver, normalize_role_name,
};
pub use auth::session::Session;
pub use bootstrap::AppContext;
pub use client::ApiClient;
pub use config::ConsoleConfig;
pub use utils::error::{ConsoleError, Result};
