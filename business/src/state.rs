//! View state for the mentor applications screen.
//!
//! Holds the raw applicant list, the operator's filter inputs and the loading
//! flag. Rendering code reads from here and recomputes rows every frame; only
//! [`crate::sync::MentorApplicationsSync`] replaces the list.

use chrono::{DateTime, Utc};

use crate::filter::{
    FilterButton, MentorFilter, StatusCounts, category_options, filter_buttons, status_counts,
    visible_mentors,
};
use crate::mentor::{Mentor, MentorStatus};

/// Loading flag. `Idle -> Loading` on mount, back to `Idle` when that fetch
/// finishes either way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
}

#[derive(Debug, Clone, Default)]
pub struct MentorApplicationsState {
    mentors: Vec<Mentor>,

    /// Derived from `mentors`; rebuilt whenever the list is replaced.
    categories: Vec<String>,

    filter: MentorFilter,

    load_state: LoadState,

    /// When the list was last replaced from the server.
    last_synced: Option<DateTime<Utc>>,
}

impl MentorApplicationsState {
    pub fn new() -> Self {
        Self::default()
    }

    // =====================
    // List lifecycle
    // =====================

    pub fn set_loading(&mut self) {
        self.load_state = LoadState::Loading;
    }

    pub fn finish_loading(&mut self) {
        self.load_state = LoadState::Idle;
    }

    /// Replace the list wholesale with a fresh server copy.
    ///
    /// Takes `now` as a parameter so tests control the sync timestamp.
    pub fn replace_mentors(&mut self, mentors: Vec<Mentor>, now: DateTime<Utc>) {
        self.categories = category_options(&mentors);
        self.mentors = mentors;
        self.last_synced = Some(now);
    }

    pub fn mentors(&self) -> &[Mentor] {
        &self.mentors
    }

    pub fn mentor(&self, id: &str) -> Option<&Mentor> {
        self.mentors.iter().find(|m| m.uuid == id)
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    pub fn last_synced(&self) -> Option<DateTime<Utc>> {
        self.last_synced
    }

    // =====================
    // Filter inputs
    // =====================

    pub fn filter(&self) -> &MentorFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: MentorFilter) {
        self.filter = filter;
    }

    /// `None` selects the `All` button.
    pub fn set_status_filter(&mut self, status: Option<MentorStatus>) {
        self.filter.status = status;
    }

    /// An empty string selects `All Categories`.
    pub fn set_category_filter(&mut self, category: impl Into<String>) {
        self.filter.category = category.into();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
    }

    // =====================
    // Derived view
    // =====================

    pub fn visible(&self) -> Vec<&Mentor> {
        visible_mentors(&self.mentors, &self.filter)
    }

    pub fn status_counts(&self) -> StatusCounts {
        status_counts(&self.mentors)
    }

    pub fn filter_buttons(&self) -> Vec<FilterButton> {
        filter_buttons(&self.mentors, self.filter.status)
    }
}
