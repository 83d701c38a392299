//! Route guard decisions against a populated resolver
//!
//! Pins the guard's access policy, including the two edge cases with security
//! consequence: the empty requirement list and unresolvable role keys.

use std::sync::Arc;

use poa_console::{RoleId, RoleKey, RoleResolver, RouteGuard};

use crate::common::{expired_session, poa_catalog, session_with_role, StaticCatalog};

async fn loaded_guard() -> (RouteGuard, Arc<RoleResolver>) {
    let resolver = Arc::new(RoleResolver::new(Arc::new(StaticCatalog(poa_catalog()))));
    resolver.load().await.unwrap();
    (RouteGuard::new(resolver.clone()), resolver)
}

#[tokio::test]
async fn test_matching_role_is_allowed() {
    let (guard, _) = loaded_guard().await;
    let session = session_with_role(Some(RoleId::from("u-dir")));

    assert!(guard.allows(&session, &[RoleKey::DirectorDeInvestigacion]));
    assert!(guard.allows(
        &session,
        &[RoleKey::Administrador, RoleKey::DirectorDeInvestigacion]
    ));
}

#[tokio::test]
async fn test_non_matching_role_is_denied() {
    let (guard, _) = loaded_guard().await;
    let session = session_with_role(Some(RoleId::from("u-doc")));

    assert!(!guard.allows(&session, &[RoleKey::Administrador]));
    assert!(!guard.allows(
        &session,
        &[RoleKey::Administrador, RoleKey::DirectorDeInvestigacion]
    ));
}

#[tokio::test]
async fn test_empty_requirement_allows_any_authenticated_session() {
    // Pinned policy: a route that names no role only requires a session.
    let (guard, _) = loaded_guard().await;

    assert!(guard.allows(&session_with_role(Some(RoleId::from("u-doc"))), &[]));
    assert!(guard.allows(&session_with_role(None), &[]));
}

#[tokio::test]
async fn test_unresolvable_role_key_denies() {
    // Evaluador is not in this deployment's catalog, so a requirement made
    // only of it can never be satisfied: fail closed, not allow-by-default.
    let (guard, resolver) = loaded_guard().await;
    assert_eq!(resolver.id_for(RoleKey::Evaluador), None);

    let session = session_with_role(Some(RoleId::from("u-admin")));
    assert!(!guard.allows(&session, &[RoleKey::Evaluador]));
}

#[tokio::test]
async fn test_unloaded_resolver_denies_everything_role_gated() {
    let resolver = Arc::new(RoleResolver::new(Arc::new(StaticCatalog(poa_catalog()))));
    let guard = RouteGuard::new(resolver);
    let session = session_with_role(Some(RoleId::from("u-admin")));

    assert!(!guard.allows(&session, &[RoleKey::Administrador]));
    // Role-free routes stay reachable while the catalog loads.
    assert!(guard.allows(&session, &[]));
}

#[tokio::test]
async fn test_expired_session_is_denied_even_with_matching_role() {
    let (guard, _) = loaded_guard().await;
    let session = expired_session(Some(RoleId::from("u-admin")));

    assert!(!guard.allows(&session, &[RoleKey::Administrador]));
    assert!(!guard.allows(&session, &[]));
}

#[tokio::test]
async fn test_session_without_role_is_denied_on_gated_routes() {
    let (guard, _) = loaded_guard().await;
    let session = session_with_role(None);

    assert!(!guard.allows(&session, &[RoleKey::Administrador]));
}
