//! End-to-end listing and lookup over HTTP

use super::test_utils::{api_for, connection, envelope, mount_operation, mount_page, project_json};
use ghproj::error::TransportError;
use ghproj::repo::RepoRef;
use ghproj::scope::{Scope, ORGANIZATION_LIST, REPOSITORY_LIST, REPOSITORY_VIEW, USER_LIST, USER_VIEW};
use ghproj::types::ProjectState;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn repo() -> RepoRef {
    RepoRef::new("octo", "widgets")
}

fn numbers(projects: &[ghproj::types::Project]) -> Vec<u32> {
    projects.iter().map(|p| p.number).collect()
}

#[tokio::test]
async fn test_list_all_walks_pages_in_scope_order() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "UserProjectV2List",
        None,
        connection(
            USER_LIST.root,
            vec![project_json("octo", 1, "A"), project_json("octo", 2, "B")],
            Some("c1"),
        ),
    )
    .await;
    mount_page(
        &server,
        "UserProjectV2List",
        Some("c1"),
        connection(USER_LIST.root, vec![project_json("octo", 3, "C")], None),
    )
    .await;
    mount_page(
        &server,
        "OrganizationProjectV2List",
        None,
        connection(ORGANIZATION_LIST.root, vec![project_json("acme", 10, "Org")], None),
    )
    .await;
    mount_page(
        &server,
        "RepositoryProjectV2List",
        None,
        connection(REPOSITORY_LIST.root, vec![project_json("octo", 1, "Repo")], None),
    )
    .await;

    let projects = api_for(&server)
        .list_all(&repo(), Some("acme"))
        .await
        .unwrap();

    // Same number from two scopes is kept twice.
    assert_eq!(numbers(&projects), vec![1, 2, 3, 10, 1]);
    assert_eq!(projects[4].title, "Repo");
}

#[tokio::test]
async fn test_list_all_returns_partial_results_on_failure() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "UserProjectV2List",
        None,
        connection(USER_LIST.root, vec![project_json("octo", 1, "Mine")], None),
    )
    .await;
    mount_operation(
        &server,
        "RepositoryProjectV2List",
        ResponseTemplate::new(500).set_body_string("boom"),
    )
    .await;

    let err = api_for(&server).list_all(&repo(), None).await.unwrap_err();

    assert_eq!(err.scope, Scope::Repository);
    assert_eq!(numbers(&err.partial), vec![1]);
    assert!(matches!(err.source, TransportError::Status { status: 500, .. }));
}

#[tokio::test]
async fn test_list_for_scope_targets_user_without_org() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "operationName": "UserProjectV2List",
            "variables": {"query": null, "first": 100},
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(connection(
            USER_LIST.root,
            vec![project_json("octo", 2, "Mine")],
            None,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let projects = api_for(&server)
        .list_for_scope(&repo(), None, ProjectState::All)
        .await
        .unwrap();
    assert_eq!(numbers(&projects), vec![2]);
}

#[tokio::test]
async fn test_list_for_scope_sends_state_filter_for_organization() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "operationName": "OrganizationProjectV2List",
            "variables": {"owner": "acme", "query": "is:closed", "first": 25},
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(connection(
            ORGANIZATION_LIST.root,
            vec![project_json("acme", 6, "Old")],
            None,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let projects = api_for(&server)
        .with_page_size(25)
        .list_for_scope(&repo(), Some("acme"), ProjectState::Closed)
        .await
        .unwrap();
    assert_eq!(numbers(&projects), vec![6]);
}

#[tokio::test]
async fn test_locate_falls_back_to_repository() {
    let server = MockServer::start().await;
    mount_operation(
        &server,
        "UserProjectV2View",
        ResponseTemplate::new(200).set_body_json(envelope(USER_VIEW.root, json!(null))),
    )
    .await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "operationName": "RepoProjectV2View",
            "variables": {"owner": "octo", "name": "widgets", "number": 5},
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(REPOSITORY_VIEW.root, project_json("octo", 5, "Repo"))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let project = api_for(&server)
        .locate(&repo(), Some("acme"), 5)
        .await
        .unwrap();

    assert_eq!(project.title, "Repo");
}

#[tokio::test]
async fn test_locate_reports_every_failed_scope() {
    let server = MockServer::start().await;
    mount_operation(
        &server,
        "UserProjectV2View",
        ResponseTemplate::new(401).set_body_string("Bad credentials"),
    )
    .await;
    mount_operation(
        &server,
        "RepoProjectV2View",
        ResponseTemplate::new(200).set_body_json(envelope(REPOSITORY_VIEW.root, json!(null))),
    )
    .await;
    mount_operation(
        &server,
        "OrganizationProjectV2View",
        ResponseTemplate::new(200).set_body_json(json!({
            "data": {"organization": null},
            "errors": [{"message": "Could not resolve to an Organization"}],
        })),
    )
    .await;

    let err = api_for(&server)
        .locate(&repo(), Some("acme"), 8)
        .await
        .unwrap_err();

    assert_eq!(err.number, 8);
    let scopes: Vec<_> = err.failures.iter().map(|f| f.scope.clone()).collect();
    assert_eq!(
        scopes,
        vec![Scope::CurrentUser, Scope::Organization("acme".to_string())]
    );
    assert!(matches!(
        err.failures[0].source,
        TransportError::Unauthorized { .. }
    ));
    assert!(matches!(err.failures[1].source, TransportError::Query { .. }));

    let message = err.to_string();
    assert!(message.starts_with("project not found; user: "));
    assert!(message.contains("organization acme: "));
}
