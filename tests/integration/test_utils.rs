//! Shared test utilities for integration tests
//!
//! GraphQL response builders and wiremock mounting helpers. Every request goes
//! to `POST /graphql`; mocks are told apart by `operationName` and, for later
//! pages, by the cursor variable.

use ghproj::projects::ProjectsApi;
use ghproj::transport::{HttpTransport, HttpTransportConfig};
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Project node as the API returns it.
pub fn project_json(owner: &str, number: u32, title: &str) -> Value {
    json!({
        "id": format!("PVT_{}_{}", owner, number),
        "title": title,
        "number": number,
        "closed": false,
        "closedAt": null,
        "public": true,
        "shortDescription": null,
        "resourcePath": format!("/orgs/{}/projects/{}", owner, number),
        "url": format!("https://github.com/orgs/{}/projects/{}", owner, number),
    })
}

/// Nest `leaf` under `root` and wrap it in a GraphQL `data` envelope.
pub fn envelope(root: &[&str], leaf: Value) -> Value {
    let data = root.iter().rev().fold(leaf, |inner, field| {
        let mut object = serde_json::Map::new();
        object.insert((*field).to_string(), inner);
        Value::Object(object)
    });
    json!({ "data": data })
}

pub fn connection(root: &[&str], nodes: Vec<Value>, next: Option<&str>) -> Value {
    envelope(
        root,
        json!({
            "nodes": nodes,
            "pageInfo": {"hasNextPage": next.is_some(), "endCursor": next},
        }),
    )
}

/// Mount a listing page answered when the cursor variable equals `cursor`
/// (`None` for the first page).
pub async fn mount_page(
    server: &MockServer,
    operation: &str,
    cursor: Option<&str>,
    response: Value,
) {
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({
            "operationName": operation,
            "variables": {"endCursor": cursor},
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(server)
        .await;
}

/// Mount a response for every request naming `operation`.
pub async fn mount_operation(server: &MockServer, operation: &str, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({ "operationName": operation })))
        .respond_with(response)
        .mount(server)
        .await;
}

pub fn transport_config(server: &MockServer) -> HttpTransportConfig {
    HttpTransportConfig {
        token: Some("test-token".to_string()),
        api_url: Some(format!("{}/graphql", server.uri())),
        ..Default::default()
    }
}

pub fn api_for(server: &MockServer) -> ProjectsApi {
    let transport = HttpTransport::new(transport_config(server)).unwrap();
    ProjectsApi::new(Arc::new(transport))
}
