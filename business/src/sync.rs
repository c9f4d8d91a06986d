//! Remote sync for the mentor applications screen.
//!
//! Owns the view state and is its only writer. Two operations:
//! - `mount` / `refresh` pull the whole list and replace the held copy.
//! - `update_status` asks the server for a change and, only on an explicit
//!   acknowledgement, pulls the whole list again. There is no optimistic
//!   local edit.
//!
//! Failures are logged and reported back as outcome values; nothing here
//! returns an `Err`. Calls are not serialized per applicant, so two updates
//! issued back to back by different owners can interleave with a refresh.

use chrono::Utc;

use crate::api::{MentorsApiError, MentorsBackend};
use crate::mentor::MentorStatus;
use crate::state::MentorApplicationsState;

/// What a list fetch did to the held state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The list was replaced with this many applicants.
    Loaded(usize),

    /// Nothing changed; the previous list is still held.
    Failed(MentorsApiError),
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

/// What a status update did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The server acknowledged the change and a resync ran.
    Applied { resync: LoadOutcome },

    /// The server did not acknowledge; the held list is untouched.
    Failed(MentorsApiError),
}

impl UpdateOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

pub struct MentorApplicationsSync<B> {
    backend: B,
    state: MentorApplicationsState,
}

impl<B: MentorsBackend> MentorApplicationsSync<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: MentorApplicationsState::new(),
        }
    }

    pub fn state(&self) -> &MentorApplicationsState {
        &self.state
    }

    /// Filter inputs are edited through here; the list itself is only
    /// replaced by fetches.
    pub fn state_mut(&mut self) -> &mut MentorApplicationsState {
        &mut self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Initial load: raises the loading flag for the duration of the fetch.
    pub async fn mount(&mut self) -> LoadOutcome {
        self.state.set_loading();
        let outcome = self.fetch().await;
        self.state.finish_loading();
        outcome
    }

    /// Resync without touching the loading flag.
    pub async fn refresh(&mut self) -> LoadOutcome {
        self.fetch().await
    }

    /// Request a status change. The row keeps showing the old server value
    /// until the follow-up resync lands.
    pub async fn update_status(&mut self, id: &str, status: MentorStatus) -> UpdateOutcome {
        log::debug!("Updating mentor {id} to {status}");

        match self.backend.update_status(id, status).await {
            Ok(()) => {
                log::info!("Mentor {id} moved to {status}, resyncing");
                let resync = self.refresh().await;
                UpdateOutcome::Applied { resync }
            }
            Err(err) => {
                log::error!("Error updating mentor status: {err}");
                UpdateOutcome::Failed(err)
            }
        }
    }

    async fn fetch(&mut self) -> LoadOutcome {
        match self.backend.list_mentors().await {
            Ok(mentors) => {
                let count = mentors.len();
                self.state.replace_mentors(mentors, Utc::now());
                log::debug!("Fetched {count} mentors");
                LoadOutcome::Loaded(count)
            }
            Err(err) => {
                log::error!("Error fetching mentors: {err}");
                LoadOutcome::Failed(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::LoadState;
    use crate::test_utils::{BackendCall, FakeBackend, ids, mentor, sample_mentors};

    fn fetch_failed() -> MentorsApiError {
        MentorsApiError::FetchFailed("connection refused".to_owned())
    }

    fn forbidden(id: &str) -> MentorsApiError {
        MentorsApiError::UpdateFailed {
            id: id.to_owned(),
            reason: "API returned status: 403".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_mount_loads_list_and_clears_loading() {
        let backend = FakeBackend::new().push_list(Ok(sample_mentors()));
        let mut sync = MentorApplicationsSync::new(backend);

        let outcome = sync.mount().await;

        assert_eq!(outcome, LoadOutcome::Loaded(3));
        assert_eq!(sync.state().load_state(), LoadState::Idle);
        assert_eq!(ids(sync.state().mentors()), ["1", "2", "3"]);
        assert_eq!(sync.state().categories(), ["Eng", "Design"]);
        assert!(sync.state().last_synced().is_some());
    }

    #[tokio::test]
    async fn test_mount_failure_keeps_empty_list_and_clears_loading() {
        let backend = FakeBackend::new().push_list(Err(fetch_failed()));
        let mut sync = MentorApplicationsSync::new(backend);

        let outcome = sync.mount().await;

        assert_eq!(outcome, LoadOutcome::Failed(fetch_failed()));
        assert!(!sync.state().is_loading());
        assert!(sync.state().mentors().is_empty());
        assert!(sync.state().last_synced().is_none());
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_list() {
        let backend = FakeBackend::new()
            .push_list(Ok(sample_mentors()))
            .push_list(Err(fetch_failed()));
        let mut sync = MentorApplicationsSync::new(backend);

        sync.mount().await;
        let outcome = sync.refresh().await;

        assert!(!outcome.is_loaded());
        assert_eq!(ids(sync.state().mentors()), ["1", "2", "3"]);
    }

    #[tokio::test]
    async fn test_successful_update_triggers_resync() {
        let mut resynced = sample_mentors();
        resynced[1].state = MentorStatus::Rejected;

        let backend = FakeBackend::new()
            .push_list(Ok(sample_mentors()))
            .push_update(Ok(()))
            .push_list(Ok(resynced));
        let mut sync = MentorApplicationsSync::new(backend);
        sync.mount().await;

        let outcome = sync.update_status("2", MentorStatus::Rejected).await;

        assert_eq!(
            outcome,
            UpdateOutcome::Applied {
                resync: LoadOutcome::Loaded(3)
            }
        );
        assert_eq!(
            sync.state().mentor("2").map(|m| m.state),
            Some(MentorStatus::Rejected)
        );
        assert_eq!(
            sync.backend().calls(),
            [
                BackendCall::List,
                BackendCall::Update("2".to_owned(), MentorStatus::Rejected),
                BackendCall::List,
            ]
        );
    }

    #[tokio::test]
    async fn test_rejected_update_leaves_state_alone() {
        let backend = FakeBackend::new()
            .push_list(Ok(sample_mentors()))
            .push_update(Err(forbidden("2")));
        let mut sync = MentorApplicationsSync::new(backend);
        sync.mount().await;
        let synced_at = sync.state().last_synced();

        let outcome = sync.update_status("2", MentorStatus::Rejected).await;

        assert_eq!(outcome, UpdateOutcome::Failed(forbidden("2")));
        assert_eq!(sync.state().load_state(), LoadState::Idle);
        assert_eq!(sync.state().last_synced(), synced_at);
        assert_eq!(
            sync.state().mentor("2").map(|m| m.state),
            Some(MentorStatus::Approved)
        );
        // No resync after a failed update.
        assert_eq!(sync.backend().calls().len(), 2);
    }

    #[tokio::test]
    async fn test_update_resync_does_not_raise_loading() {
        let backend = FakeBackend::new()
            .push_list(Ok(sample_mentors()))
            .push_update(Ok(()))
            .push_list(Err(fetch_failed()));
        let mut sync = MentorApplicationsSync::new(backend);
        sync.mount().await;

        let outcome = sync.update_status("1", MentorStatus::Approved).await;

        assert_eq!(
            outcome,
            UpdateOutcome::Applied {
                resync: LoadOutcome::Failed(fetch_failed())
            }
        );
        assert!(!sync.state().is_loading());
        // Resync failed, so the server change is not reflected yet.
        assert_eq!(
            sync.state().mentor("1").map(|m| m.state),
            Some(MentorStatus::Pending)
        );
    }

    #[tokio::test]
    async fn test_resync_replaces_list_wholesale() {
        let backend = FakeBackend::new()
            .push_list(Ok(sample_mentors()))
            .push_update(Ok(()))
            .push_list(Ok(vec![mentor(
                "7",
                "Alan",
                "Kay",
                MentorStatus::Approved,
                "Research",
            )]));
        let mut sync = MentorApplicationsSync::new(backend);
        sync.mount().await;
        sync.state_mut().set_category_filter("Eng");

        sync.update_status("1", MentorStatus::Approved).await;

        assert_eq!(ids(sync.state().mentors()), ["7"]);
        assert_eq!(sync.state().categories(), ["Research"]);
        // Filter inputs survive a resync.
        assert_eq!(sync.state().filter().category, "Eng");
        assert!(sync.state().visible().is_empty());
    }
}
