//! HTTP-level tests for the admin mentors client and the sync built on it.
//!
//! Each test spins up a wiremock server standing in for the admin backend.

#![cfg(not(target_arch = "wasm32"))]

use mentorship_business::{
    BusinessConfig, HttpMentorsBackend, LoadOutcome, LoadState, MentorApplicationsSync,
    MentorStatus, MentorsApiError, MentorsBackend, Session, UpdateOutcome,
};
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

fn mentor_json(uuid: &str, first: &str, last: &str, state: &str, category: &str) -> Value {
    json!({
        "uuid": uuid,
        "application": {
            "firstName": first,
            "lastName": last,
            "position": "Engineer"
        },
        "category": { "category": category },
        "state": state
    })
}

fn sample_list() -> Value {
    json!({
        "mentors": [
            mentor_json("1", "Ada", "Lovelace", "pending", "Eng"),
            mentor_json("2", "Grace", "Hopper", "approved", "Eng"),
            mentor_json("3", "Dieter", "Rams", "rejected", "Design"),
        ]
    })
}

fn backend_for(server: &MockServer) -> HttpMentorsBackend {
    let config = BusinessConfig::new(server.uri()).with_session(Session::cookie("abc"));
    HttpMentorsBackend::new(&config)
}

async fn mock_list(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path("/admin/mentors"))
        .and(header("cookie", "session=abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_list_mentors_sends_session_and_parses_body() {
    let server = MockServer::start().await;
    mock_list(&server, sample_list()).await;

    let mentors = backend_for(&server)
        .list_mentors()
        .await
        .expect("list should succeed");

    let names: Vec<String> = mentors.iter().map(|m| m.full_name()).collect();
    assert_eq!(names, ["Ada Lovelace", "Grace Hopper", "Dieter Rams"]);
    assert_eq!(mentors[2].state, MentorStatus::Rejected);
}

#[tokio::test]
async fn test_list_mentors_with_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/mentors"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "mentors": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let config = BusinessConfig::new(server.uri()).with_session(Session::bearer("tok"));
    let mentors = HttpMentorsBackend::new(&config)
        .list_mentors()
        .await
        .expect("list should succeed");

    assert!(mentors.is_empty());
}

#[tokio::test]
async fn test_list_mentors_non_success_is_fetch_failed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/mentors"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = backend_for(&server).list_mentors().await.unwrap_err();
    assert_eq!(
        err,
        MentorsApiError::FetchFailed("API returned status: 401".to_owned())
    );
}

#[tokio::test]
async fn test_list_mentors_undecodable_body_is_fetch_failed() {
    let server = MockServer::start().await;
    mock_list(&server, json!({ "items": [] })).await;

    let err = backend_for(&server).list_mentors().await.unwrap_err();
    assert!(matches!(err, MentorsApiError::FetchFailed(msg) if msg.contains("ListMentorsResponse")));
}

#[tokio::test]
async fn test_update_status_puts_typed_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/admin/mentors/2/status"))
        .and(header("cookie", "session=abc"))
        .and(body_json(json!({ "status": "rejected" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    backend_for(&server)
        .update_status("2", MentorStatus::Rejected)
        .await
        .expect("update should succeed");
}

#[tokio::test]
async fn test_update_status_requires_exactly_200() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/admin/mentors/2/status"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let err = backend_for(&server)
        .update_status("2", MentorStatus::Approved)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        MentorsApiError::UpdateFailed {
            id: "2".to_owned(),
            reason: "API returned status: 204".to_owned(),
        }
    );
}

#[tokio::test]
async fn test_sync_update_200_triggers_resync() {
    let server = MockServer::start().await;

    // First fetch (mount) sees the first list, the resync sees the change.
    Mock::given(method("GET"))
        .and(path("/admin/mentors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_list()))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/admin/mentors/2/status"))
        .and(body_json(json!({ "status": "rejected" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/mentors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "mentors": [
                mentor_json("1", "Ada", "Lovelace", "pending", "Eng"),
                mentor_json("2", "Grace", "Hopper", "rejected", "Eng"),
                mentor_json("3", "Dieter", "Rams", "rejected", "Design"),
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut sync = MentorApplicationsSync::new(backend_for(&server));
    assert_eq!(sync.mount().await, LoadOutcome::Loaded(3));

    let outcome = sync.update_status("2", MentorStatus::Rejected).await;

    assert_eq!(
        outcome,
        UpdateOutcome::Applied {
            resync: LoadOutcome::Loaded(3)
        }
    );
    assert_eq!(sync.state().status_counts().rejected, 2);
}

#[tokio::test]
async fn test_sync_update_403_leaves_list_and_loading_alone() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/mentors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_list()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/admin/mentors/2/status"))
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&server)
        .await;

    let mut sync = MentorApplicationsSync::new(backend_for(&server));
    sync.mount().await;
    let before = sync.state().mentors().to_vec();

    let outcome = sync.update_status("2", MentorStatus::Rejected).await;

    assert!(!outcome.is_applied());
    assert_eq!(sync.state().mentors(), before.as_slice());
    assert_eq!(sync.state().load_state(), LoadState::Idle);
}

#[tokio::test]
async fn test_sync_mount_network_error_settles_idle_and_empty() {
    // Nothing listens on port 1.
    let config = BusinessConfig::new("http://127.0.0.1:1");
    let mut sync = MentorApplicationsSync::new(HttpMentorsBackend::new(&config));

    let outcome = sync.mount().await;

    assert!(matches!(
        outcome,
        LoadOutcome::Failed(MentorsApiError::FetchFailed(_))
    ));
    assert_eq!(sync.state().load_state(), LoadState::Idle);
    assert!(sync.state().mentors().is_empty());
}
