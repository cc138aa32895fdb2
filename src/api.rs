//! HTTP client for the task-board API.
//!
//! One method per remote operation, all blocking, no retries and no caching:
//! the server is the single source of truth and the board re-fetches the
//! full list after every mutation instead of patching locally.

use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fields::Priority;
use crate::task::{null_as_empty, Task};

/// Where the backend lives unless `--api` says otherwise.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// The failure modes the client tells apart: the transport broke, the server
/// answered with a non-success status, or the body did not decode.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Carries the response body verbatim when there is one, so the message
    /// the server wrote is the message the user sees.
    #[error("{0}")]
    Status(String),
    #[error("malformed response: {0}")]
    Body(#[from] serde_json::Error),
}

/// Proof that a mutation went through and the local snapshot is now stale.
///
/// Every mutating call returns one of these instead of triggering the reload
/// itself; redeem it with [`Refresh::apply`] (or drop it deliberately in a
/// context that reloads another way).
#[must_use = "a mutation leaves the local snapshot stale until the board is reloaded"]
#[derive(Debug)]
pub struct Refresh(());

impl Refresh {
    /// Re-fetch the full task list into `board`.
    pub fn apply(
        self,
        board: &mut crate::board::Board,
        api: &ApiClient,
    ) -> Result<(), ApiError> {
        board.reload(api)
    }
}

/// Body of `POST /tasks`.
#[derive(Debug, Clone, Serialize)]
pub struct TaskDraft {
    pub title: String,
    pub notes: String,
    pub priority: Priority,
}

/// Structured suggestion returned by `POST /ai/parse-task`. Never becomes a
/// task on its own; the user reviews it in the create form first.
#[derive(Debug, Clone, Deserialize)]
pub struct ParsedTask {
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub notes: String,
    #[serde(default)]
    pub priority: Priority,
}

/// Blocking client over the remote task-board service.
pub struct ApiClient {
    http: Client,
    base: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        ApiClient {
            http: Client::new(),
            base: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// `GET /tasks` — the full snapshot, in whatever order the server chose.
    pub fn list(&self) -> Result<Vec<Task>, ApiError> {
        let resp = self.http.get(self.url("/tasks")).send()?;
        decode(resp)
    }

    /// `POST /tasks`. The created task in the response body is ignored; the
    /// caller reloads the full list instead.
    pub fn create(&self, draft: &TaskDraft) -> Result<Refresh, ApiError> {
        let resp = self.http.post(self.url("/tasks")).json(draft).send()?;
        ensure_success(resp)?;
        Ok(Refresh(()))
    }

    /// `PATCH /tasks/{id}/done`.
    pub fn mark_done(&self, id: u64) -> Result<Refresh, ApiError> {
        let resp = self
            .http
            .patch(self.url(&format!("/tasks/{id}/done")))
            .send()?;
        ensure_success(resp)?;
        Ok(Refresh(()))
    }

    /// `DELETE /tasks/{id}`.
    pub fn delete(&self, id: u64) -> Result<Refresh, ApiError> {
        let resp = self.http.delete(self.url(&format!("/tasks/{id}"))).send()?;
        ensure_success(resp)?;
        Ok(Refresh(()))
    }

    /// `POST /ai/parse-task` — free text in, field suggestions out. A non-2xx
    /// response surfaces its body as the error message.
    pub fn parse_task(&self, text: &str) -> Result<ParsedTask, ApiError> {
        let resp = self
            .http
            .post(self.url("/ai/parse-task"))
            .json(&serde_json::json!({ "text": text }))
            .send()?;
        decode(resp)
    }
}

fn ensure_success(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().unwrap_or_default();
    if body.trim().is_empty() {
        Err(ApiError::Status(format!("request failed with status {status}")))
    } else {
        Err(ApiError::Status(body))
    }
}

fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let resp = ensure_success(resp)?;
    let body = resp.text()?;
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // The client is blocking, so the mock server runs on its own runtime and
    // the requests themselves stay on the test thread.
    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Runtime::new().unwrap()
    }

    #[test]
    fn test_list_keeps_server_order() {
        let rt = runtime();
        let server = rt.block_on(MockServer::start());
        rt.block_on(
            Mock::given(method("GET"))
                .and(path("/tasks"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                    {"id": 2, "title": "Second", "notes": null, "priority": 9, "done": true},
                    {"id": 1, "title": "Buy milk", "notes": "", "priority": 2, "done": false},
                ])))
                .mount(&server),
        );

        let api = ApiClient::new(&server.uri());
        let tasks = api.list().unwrap();
        let ids: Vec<u64> = tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(tasks[0].priority, Priority::Medium); // 9 is out of range
        assert_eq!(tasks[0].notes, "");
    }

    #[test]
    fn test_create_posts_draft_as_json() {
        let rt = runtime();
        let server = rt.block_on(MockServer::start());
        rt.block_on(
            Mock::given(method("POST"))
                .and(path("/tasks"))
                .and(body_json(json!({
                    "title": "Buy milk",
                    "notes": "",
                    "priority": 2,
                })))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "id": 1, "title": "Buy milk", "notes": "", "priority": 2, "done": false,
                })))
                .expect(1)
                .mount(&server),
        );

        let api = ApiClient::new(&server.uri());
        let draft = TaskDraft {
            title: "Buy milk".to_string(),
            notes: String::new(),
            priority: Priority::Medium,
        };
        let refresh = api.create(&draft).unwrap();
        drop(refresh); // reload covered by board tests
        rt.block_on(server.verify());
    }

    #[test]
    fn test_parse_task_success() {
        let rt = runtime();
        let server = rt.block_on(MockServer::start());
        rt.block_on(
            Mock::given(method("POST"))
                .and(path("/ai/parse-task"))
                .and(body_json(json!({"text": "call mum friday, low prio"})))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "title": "Call mum",
                    "notes": "On Friday",
                    "priority": 3,
                })))
                .mount(&server),
        );

        let api = ApiClient::new(&server.uri());
        let parsed = api.parse_task("call mum friday, low prio").unwrap();
        assert_eq!(parsed.title, "Call mum");
        assert_eq!(parsed.notes, "On Friday");
        assert_eq!(parsed.priority, Priority::Low);
    }

    #[test]
    fn test_parse_task_defaults_absent_priority() {
        let rt = runtime();
        let server = rt.block_on(MockServer::start());
        rt.block_on(
            Mock::given(method("POST"))
                .and(path("/ai/parse-task"))
                .respond_with(
                    ResponseTemplate::new(200).set_body_json(json!({"title": "Call mum"})),
                )
                .mount(&server),
        );

        let api = ApiClient::new(&server.uri());
        let parsed = api.parse_task("call mum").unwrap();
        assert_eq!(parsed.priority, Priority::Medium);
        assert_eq!(parsed.notes, "");
    }

    #[test]
    fn test_non_success_surfaces_body_text() {
        let rt = runtime();
        let server = rt.block_on(MockServer::start());
        rt.block_on(
            Mock::given(method("POST"))
                .and(path("/ai/parse-task"))
                .respond_with(
                    ResponseTemplate::new(500).set_body_string("model backend unavailable"),
                )
                .mount(&server),
        );

        let api = ApiClient::new(&server.uri());
        let err = api.parse_task("anything").unwrap_err();
        match err {
            ApiError::Status(msg) => assert_eq!(msg, "model backend unavailable"),
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_success_without_body_gets_generic_message() {
        let rt = runtime();
        let server = rt.block_on(MockServer::start());
        rt.block_on(
            Mock::given(method("DELETE"))
                .and(path("/tasks/42"))
                .respond_with(ResponseTemplate::new(404))
                .mount(&server),
        );

        let api = ApiClient::new(&server.uri());
        let err = api.delete(42).unwrap_err();
        match err {
            ApiError::Status(msg) => assert!(msg.contains("404"), "message was: {msg}"),
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_body_is_a_decode_error() {
        let rt = runtime();
        let server = rt.block_on(MockServer::start());
        rt.block_on(
            Mock::given(method("GET"))
                .and(path("/tasks"))
                .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
                .mount(&server),
        );

        let api = ApiClient::new(&server.uri());
        let err = api.list().unwrap_err();
        assert!(matches!(err, ApiError::Body(_)));
    }
}
