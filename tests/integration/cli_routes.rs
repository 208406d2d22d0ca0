//! RunContext command routing against a mock GraphQL endpoint

use super::test_utils::{api_for, connection, envelope, mount_operation, mount_page, project_json};
use clap::Parser;
use ghproj::cli::{map_error, Browser, Cli, Commands, ProjectPicker, RunContext};
use ghproj::error::ApiError;
use ghproj::repo::RepoRef;
use ghproj::scope::{REPOSITORY_LIST, REPOSITORY_VIEW, USER_LIST, USER_VIEW};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use wiremock::{MockServer, ResponseTemplate};

/// Mock server on its own runtime so commands can block on theirs.
struct Harness {
    server: MockServer,
    runtime: tokio::runtime::Runtime,
}

impl Harness {
    fn new() -> Self {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let server = runtime.block_on(MockServer::start());
        Self { server, runtime }
    }

    fn page(&self, operation: &str, cursor: Option<&str>, response: Value) {
        self.runtime
            .block_on(mount_page(&self.server, operation, cursor, response));
    }

    fn respond(&self, operation: &str, response: ResponseTemplate) {
        self.runtime
            .block_on(mount_operation(&self.server, operation, response));
    }

    fn context(&self, picker: Box<dyn ProjectPicker>, browser: Box<dyn Browser>) -> RunContext {
        RunContext::from_parts(
            api_for(&self.server),
            RepoRef::new("octo", "widgets"),
            picker,
            browser,
        )
        .unwrap()
    }
}

#[derive(Default, Clone)]
struct PickIndex {
    index: usize,
    offered: Arc<Mutex<Vec<String>>>,
}

impl ProjectPicker for PickIndex {
    fn select(&self, _prompt: &str, items: &[String]) -> Result<usize, ApiError> {
        self.offered.lock().unwrap().extend(items.iter().cloned());
        Ok(self.index)
    }
}

#[derive(Default, Clone)]
struct RecordingBrowser {
    opened: Arc<Mutex<Vec<String>>>,
}

impl Browser for RecordingBrowser {
    fn browse(&self, url: &str) -> Result<(), ApiError> {
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

fn command(args: &[&str]) -> Commands {
    let mut argv = vec!["ghproj"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap().command
}

#[test]
fn test_list_json_output() {
    let harness = Harness::new();
    harness.page(
        "OrganizationProjectV2List",
        None,
        connection(
            &["organization", "projectsV2"],
            vec![project_json("acme", 1, "One"), project_json("acme", 2, "Two")],
            None,
        ),
    );

    let context = harness.context(Box::new(PickIndex::default()), Box::new(RecordingBrowser::default()));
    let output = context
        .execute(&command(&["list", "--org", "acme", "--format", "json"]))
        .unwrap();

    let value: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["total"], 2);
    assert_eq!(value["projects"][1]["title"], "Two");
}

#[test]
fn test_list_uses_default_org() {
    let harness = Harness::new();
    harness.page(
        "OrganizationProjectV2List",
        None,
        connection(
            &["organization", "projectsV2"],
            vec![project_json("acme", 4, "Board")],
            None,
        ),
    );

    let context = harness
        .context(Box::new(PickIndex::default()), Box::new(RecordingBrowser::default()))
        .with_default_org(Some("acme".to_string()));
    let output = context.execute(&command(&["list"])).unwrap();

    assert!(output.contains("Board"));
    assert!(output.contains("Open"));
}

#[test]
fn test_view_by_number_text_output() {
    let harness = Harness::new();
    harness.respond(
        "UserProjectV2View",
        ResponseTemplate::new(200).set_body_json(envelope(
            USER_VIEW.root,
            project_json("octo", 3, "Roadmap"),
        )),
    );

    let context = harness.context(Box::new(PickIndex::default()), Box::new(RecordingBrowser::default()));
    let output = context.execute(&command(&["view", "3"])).unwrap();

    assert!(output.contains("Roadmap"));
    assert!(output.contains("https://github.com/orgs/octo/projects/3"));
}

#[test]
fn test_view_without_number_requires_terminal() {
    let harness = Harness::new();
    let context = harness.context(Box::new(PickIndex::default()), Box::new(RecordingBrowser::default()));

    let err = context.execute(&command(&["view"])).unwrap_err();

    assert!(matches!(err, ApiError::InvalidArgument(_)));
    assert!(err
        .to_string()
        .contains("must provide `project-number` when not running interactively"));
}

#[test]
fn test_view_prompts_across_scopes_then_opens_browser() {
    let harness = Harness::new();
    harness.page(
        "UserProjectV2List",
        None,
        connection(USER_LIST.root, vec![project_json("octo", 1, "Mine")], None),
    );
    harness.page(
        "RepositoryProjectV2List",
        None,
        connection(REPOSITORY_LIST.root, vec![project_json("octo", 9, "Repo board")], None),
    );
    harness.respond(
        "UserProjectV2View",
        ResponseTemplate::new(200).set_body_json(envelope(USER_VIEW.root, json!(null))),
    );
    harness.respond(
        "RepoProjectV2View",
        ResponseTemplate::new(200).set_body_json(envelope(
            REPOSITORY_VIEW.root,
            project_json("octo", 9, "Repo board"),
        )),
    );

    let picker = PickIndex {
        index: 1,
        ..Default::default()
    };
    let browser = RecordingBrowser::default();
    let context = harness
        .context(Box::new(picker.clone()), Box::new(browser.clone()))
        .with_interactive(true)
        .with_stdout_terminal(true);

    let output = context.execute(&command(&["view", "--web"])).unwrap();

    assert_eq!(
        *picker.offered.lock().unwrap(),
        vec!["Mine (Open)".to_string(), "Repo board (Open)".to_string()]
    );
    assert_eq!(
        *browser.opened.lock().unwrap(),
        vec!["https://github.com/orgs/octo/projects/9".to_string()]
    );
    assert_eq!(
        output,
        "Opening github.com/orgs/octo/projects/9 in your browser."
    );
}

fn mount_user_project(harness: &Harness, number: u32) {
    harness.respond(
        "UserProjectV2View",
        ResponseTemplate::new(200).set_body_json(envelope(
            USER_VIEW.root,
            project_json("octo", number, "Roadmap"),
        )),
    );
}

#[test]
fn test_view_web_announces_when_only_stdout_is_terminal() {
    let harness = Harness::new();
    mount_user_project(&harness, 1);

    let browser = RecordingBrowser::default();
    let context = harness
        .context(Box::new(PickIndex::default()), Box::new(browser.clone()))
        .with_interactive(false)
        .with_stdout_terminal(true);

    let output = context.execute(&command(&["view", "1", "--web"])).unwrap();

    assert_eq!(output, "Opening github.com/orgs/octo/projects/1 in your browser.");
    assert_eq!(browser.opened.lock().unwrap().len(), 1);
}

#[test]
fn test_view_web_is_silent_when_stdout_is_piped() {
    let harness = Harness::new();
    mount_user_project(&harness, 1);

    let browser = RecordingBrowser::default();
    let context = harness.context(Box::new(PickIndex::default()), Box::new(browser.clone()));

    let output = context.execute(&command(&["view", "1", "--web"])).unwrap();

    assert!(output.is_empty());
    assert_eq!(
        *browser.opened.lock().unwrap(),
        vec!["https://github.com/orgs/octo/projects/1".to_string()]
    );
}

#[test]
fn test_view_prompt_with_nothing_to_pick() {
    let harness = Harness::new();
    harness.page(
        "UserProjectV2List",
        None,
        connection(USER_LIST.root, vec![], None),
    );
    harness.page(
        "RepositoryProjectV2List",
        None,
        connection(REPOSITORY_LIST.root, vec![], None),
    );

    let context = harness
        .context(Box::new(PickIndex::default()), Box::new(RecordingBrowser::default()))
        .with_interactive(true);
    let err = context.execute(&command(&["view"])).unwrap_err();

    assert!(matches!(err, ApiError::NoProjects));
}

#[test]
fn test_view_not_found_error_carries_auth_hint() {
    let harness = Harness::new();
    harness.respond(
        "UserProjectV2View",
        ResponseTemplate::new(401).set_body_string("Bad credentials"),
    );
    harness.respond(
        "RepoProjectV2View",
        ResponseTemplate::new(200).set_body_json(envelope(REPOSITORY_VIEW.root, json!(null))),
    );

    let context = harness.context(Box::new(PickIndex::default()), Box::new(RecordingBrowser::default()));
    let err = context.execute(&command(&["view", "12"])).unwrap_err();

    let message = map_error(&err);
    assert!(message.starts_with("failed to get project: project not found; user: "));
    assert!(message.contains("hint: set GH_TOKEN"));
}

#[test]
fn test_invalid_format_is_rejected_before_any_request() {
    let harness = Harness::new();
    let context = harness.context(Box::new(PickIndex::default()), Box::new(RecordingBrowser::default()));

    let err = context
        .execute(&command(&["view", "1", "--format", "yaml"]))
        .unwrap_err();

    assert!(matches!(err, ApiError::InvalidArgument(_)));
}
