//! Role catalog loading over HTTP
//!
//! Exercises the `GET /roles/` path end to end: ApiClient against a mock
//! server, through the resolver, up to the bootstrap surface.

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use poa_console::{
    ApiClient, AppContext, ConsoleConfig, ConsoleError, RoleCatalogSource, RoleId, RoleKey,
};

use crate::common::poa_catalog;

fn config_for(server: &MockServer) -> ConsoleConfig {
    let mut config = ConsoleConfig::default();
    config.api.base_url = format!("{}/api/v1/", server.uri());
    config
}

fn catalog_body() -> serde_json::Value {
    json!([
        { "id_rol": "u-admin", "nombre_rol": "Administrador", "descripcion": "Acceso total" },
        { "id_rol": "u-dir", "nombre_rol": "Director de Investigación", "descripcion": "" }
    ])
}

#[tokio::test]
async fn test_initialize_roles_populates_resolver() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/roles/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(catalog_body()))
        .expect(1)
        .mount(&server)
        .await;

    let app = AppContext::new(config_for(&server)).unwrap();
    assert!(!app.roles_loaded());

    app.initialize_roles().await.unwrap();

    assert!(app.roles_loaded());
    assert_eq!(
        app.roles().id_for(RoleKey::Administrador),
        Some(RoleId::from("u-admin"))
    );
    assert_eq!(
        app.role_id_by_original_name("Director de Investigación"),
        Some(RoleId::from("u-dir"))
    );
    assert_eq!(app.all_roles().len(), 2);

    // A second initialization is a no-op (mock expects exactly one call).
    app.initialize_roles().await.unwrap();
}

#[tokio::test]
async fn test_non_2xx_response_is_a_catalog_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/roles/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let app = AppContext::new(config_for(&server)).unwrap();
    let err = app.initialize_roles().await.unwrap_err();

    assert!(matches!(err, ConsoleError::RoleCatalog(_)));
    assert!(err.is_retryable());
    assert!(!app.roles_loaded());
    assert_eq!(app.roles().resolve_id_by_name("ADMINISTRADOR"), None);
}

#[tokio::test]
async fn test_malformed_body_is_a_catalog_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/roles/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let app = AppContext::new(config_for(&server)).unwrap();
    let err = app.initialize_roles().await.unwrap_err();

    assert!(matches!(err, ConsoleError::RoleCatalog(_)));
    assert!(!app.roles_loaded());
}

#[tokio::test]
async fn test_bearer_token_is_attached_when_set() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/roles/"))
        .and(header("Authorization", "Bearer session-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(catalog_body()))
        .expect(1)
        .mount(&server)
        .await;

    let app = AppContext::new(config_for(&server)).unwrap();
    app.client().set_token("session-token");

    app.initialize_roles().await.unwrap();
    assert!(app.roles_loaded());
}

#[tokio::test]
async fn test_fetch_roles_decodes_wire_records() {
    let server = MockServer::start().await;
    let expected = poa_catalog();
    let body: Vec<serde_json::Value> = expected
        .iter()
        .map(|r| {
            json!({
                "id_rol": r.id_rol.as_str(),
                "nombre_rol": r.nombre_rol,
                "descripcion": r.descripcion,
            })
        })
        .collect();

    Mock::given(method("GET"))
        .and(path("/api/v1/roles/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let client = ApiClient::new(&config.api).unwrap();
    let records = client.fetch_roles().await.unwrap();

    assert_eq!(records.len(), expected.len());
    assert_eq!(records[0].id_rol, expected[0].id_rol);
    assert_eq!(records[1].nombre_rol, "Director de Investigación");
}
