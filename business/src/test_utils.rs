//! Fixtures shared by the business-layer unit tests.
//!
//! Provides mentor builders and [`FakeBackend`], a scripted in-memory
//! [`MentorsBackend`] that records every call it receives.

#![cfg(test)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::{ApiResult, MentorsApiError, MentorsBackend};
use crate::mentor::{Mentor, MentorApplication, MentorCategory, MentorStatus};

/// Build a mentor with the given identity, status and category.
pub fn mentor(uuid: &str, first: &str, last: &str, state: MentorStatus, category: &str) -> Mentor {
    Mentor {
        uuid: uuid.to_owned(),
        application: MentorApplication {
            first_name: first.to_owned(),
            last_name: last.to_owned(),
            position: "Engineer".to_owned(),
        },
        category: MentorCategory {
            category: category.to_owned(),
        },
        state,
    }
}

/// `[1 pending Eng, 2 approved Eng, 3 rejected Design]`.
pub fn sample_mentors() -> Vec<Mentor> {
    vec![
        mentor("1", "Ada", "Lovelace", MentorStatus::Pending, "Eng"),
        mentor("2", "Grace", "Hopper", MentorStatus::Approved, "Eng"),
        mentor("3", "Dieter", "Rams", MentorStatus::Rejected, "Design"),
    ]
}

pub fn ids<'a>(rows: impl IntoIterator<Item = &'a Mentor>) -> Vec<String> {
    rows.into_iter().map(|m| m.uuid.clone()).collect()
}

/// A call observed by [`FakeBackend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    List,
    Update(String, MentorStatus),
}

/// Scripted backend. List responses are consumed in order; once the script
/// runs dry every list call fails.
#[derive(Debug, Default)]
pub struct FakeBackend {
    lists: Mutex<VecDeque<ApiResult<Vec<Mentor>>>>,
    updates: Mutex<VecDeque<ApiResult<()>>>,
    calls: Mutex<Vec<BackendCall>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_list(self, result: ApiResult<Vec<Mentor>>) -> Self {
        self.lists
            .lock()
            .expect("lists lock poisoned")
            .push_back(result);
        self
    }

    pub fn push_update(self, result: ApiResult<()>) -> Self {
        self.updates
            .lock()
            .expect("updates lock poisoned")
            .push_back(result);
        self
    }

    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }
}

#[async_trait]
impl MentorsBackend for FakeBackend {
    async fn list_mentors(&self) -> ApiResult<Vec<Mentor>> {
        self.calls
            .lock()
            .expect("calls lock poisoned")
            .push(BackendCall::List);
        self.lists
            .lock()
            .expect("lists lock poisoned")
            .pop_front()
            .unwrap_or_else(|| Err(MentorsApiError::FetchFailed("script exhausted".to_owned())))
    }

    async fn update_status(&self, id: &str, status: MentorStatus) -> ApiResult<()> {
        self.calls
            .lock()
            .expect("calls lock poisoned")
            .push(BackendCall::Update(id.to_owned(), status));
        self.updates
            .lock()
            .expect("updates lock poisoned")
            .pop_front()
            .unwrap_or_else(|| {
                Err(MentorsApiError::UpdateFailed {
                    id: id.to_owned(),
                    reason: "script exhausted".to_owned(),
                })
            })
    }
}
