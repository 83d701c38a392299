//! Dynamic role authorization
//!
//! Name→identifier resolution over the backend's role catalog, with the
//! normalization scheme the console's role constants are written against.

mod catalog;
mod keys;
mod normalize;
mod resolver;

// Re-export public types
pub use catalog::{RoleCatalogSource, RoleId, RoleRecord};
pub use keys::RoleKey;
pub use normalize::normalize_role_name;
pub use resolver::RoleResolver;
