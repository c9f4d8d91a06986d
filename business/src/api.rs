//! Admin mentors API client.
//!
//! Two calls against the admin backend:
//! - `GET {admin}/mentors` lists every applicant.
//! - `PUT {admin}/mentors/{id}/status` changes one applicant's status.
//!
//! The [`MentorsBackend`] trait is the seam the sync layer talks to, so tests
//! can swap the HTTP client for an in-memory fake.

use async_trait::async_trait;

use crate::config::BusinessConfig;
use crate::http::Client;
use crate::mentor::{ListMentorsResponse, Mentor, MentorStatus, UpdateStatusRequest};
use crate::session::Session;

/// The only two ways the admin API can fail, from this client's point of view.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MentorsApiError {
    /// Listing failed: transport error, non-2xx status, or undecodable body.
    #[error("failed to fetch mentors: {0}")]
    FetchFailed(String),

    /// The status change was not acknowledged with HTTP 200.
    #[error("failed to update status of mentor {id}: {reason}")]
    UpdateFailed { id: String, reason: String },
}

pub type ApiResult<T> = Result<T, MentorsApiError>;

fn http_status_reason(status: u16) -> String {
    format!("API returned status: {status}")
}

/// The external collaborator that owns mentor records.
#[async_trait]
pub trait MentorsBackend: Send + Sync {
    /// Fetch every applicant.
    async fn list_mentors(&self) -> ApiResult<Vec<Mentor>>;

    /// Ask the server to move one applicant to `status`.
    async fn update_status(&self, id: &str, status: MentorStatus) -> ApiResult<()>;
}

/// [`MentorsBackend`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpMentorsBackend {
    client: Client,
    admin_url: String,
    session: Session,
}

impl HttpMentorsBackend {
    pub fn new(config: &BusinessConfig) -> Self {
        Self {
            client: Client::new(),
            admin_url: config.admin_url(),
            session: config.session.clone(),
        }
    }

    pub fn admin_url(&self) -> &str {
        &self.admin_url
    }
}

#[async_trait]
impl MentorsBackend for HttpMentorsBackend {
    async fn list_mentors(&self) -> ApiResult<Vec<Mentor>> {
        let url = format!("{}/mentors", self.admin_url);

        let response = self
            .client
            .get(url)
            .optional_header(self.session.header())
            .send()
            .await
            .map_err(|e| MentorsApiError::FetchFailed(e.to_string()))?;

        if !response.is_success() {
            log::debug!(
                "List mentors returned {}: {}",
                response.status,
                response.text_lossy()
            );
            return Err(MentorsApiError::FetchFailed(http_status_reason(
                response.status,
            )));
        }

        let list: ListMentorsResponse = response.json().map_err(|e| {
            MentorsApiError::FetchFailed(format!("Failed to parse ListMentorsResponse: {e}"))
        })?;

        Ok(list.mentors)
    }

    async fn update_status(&self, id: &str, status: MentorStatus) -> ApiResult<()> {
        let url = format!("{}/mentors/{id}/status", self.admin_url);
        let update_failed = |reason: String| MentorsApiError::UpdateFailed {
            id: id.to_owned(),
            reason,
        };

        let request = self
            .client
            .put(url)
            .optional_header(self.session.header())
            .json(&UpdateStatusRequest { status })
            .map_err(|e| update_failed(format!("Failed to serialize request: {e}")))?;

        let response = request
            .send()
            .await
            .map_err(|e| update_failed(e.to_string()))?;

        // Only an explicit 200 counts; 201/204 are not acknowledgements here.
        if response.status != 200 {
            return Err(update_failed(http_status_reason(response.status)));
        }

        Ok(())
    }
}
