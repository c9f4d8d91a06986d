//! Fixtures shared by the CLI unit tests: a wiremock admin backend and
//! helpers to read captured output.

#![cfg(test)]

use std::sync::{Arc, Mutex};

use mentorship_business::{BusinessConfig, Session};
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

pub fn mentor_json(uuid: &str, first: &str, last: &str, state: &str, category: &str) -> Value {
    json!({
        "uuid": uuid,
        "application": { "firstName": first, "lastName": last, "position": "Engineer" },
        "category": { "category": category },
        "state": state
    })
}

/// `[1 pending Eng, 2 approved Eng, 3 rejected Design]`.
pub fn roster() -> Value {
    json!([
        mentor_json("1", "Ada", "Lovelace", "pending", "Eng"),
        mentor_json("2", "Grace", "Hopper", "approved", "Eng"),
        mentor_json("3", "Dieter", "Rams", "rejected", "Design"),
    ])
}

pub fn config_for(server: &MockServer) -> BusinessConfig {
    BusinessConfig::new(server.uri()).with_session(Session::from_cookie_str("sid=admin"))
}

/// Answer the next `times` list requests with `mentors`.
pub async fn mock_list(server: &MockServer, mentors: Value, times: u64) {
    Mock::given(method("GET"))
        .and(path("/admin/mentors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "mentors": mentors })))
        .up_to_n_times(times)
        .mount(server)
        .await;
}

/// Answer list requests with `status` once earlier list mocks are used up.
pub async fn mock_list_failure(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .and(path("/admin/mentors"))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

pub async fn mock_update(server: &MockServer, id: &str, status: u16) {
    Mock::given(method("PUT"))
        .and(path(format!("/admin/mentors/{id}/status")))
        .respond_with(ResponseTemplate::new(status))
        .expect(1)
        .mount(server)
        .await;
}

pub fn text(buffer: &Arc<Mutex<String>>) -> String {
    buffer.lock().expect("buffer lock poisoned").clone()
}
