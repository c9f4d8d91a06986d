//! Business layer for the mentor applications admin screen.
//!
//! UI code stays "dumb": it reads [`MentorApplicationsState`] through
//! [`MentorApplicationsSync`], renders the derived rows, and calls back into the
//! sync for fetches and status changes.

pub mod api;
pub mod config;
pub mod filter;
pub mod http;
pub mod mentor;
pub mod session;
pub mod state;
pub mod sync;

mod test_utils;

pub use api::{ApiResult, HttpMentorsBackend, MentorsApiError, MentorsBackend};
pub use config::{BusinessConfig, ConfigError};
pub use filter::{
    FilterButton, MentorFilter, StatusCounts, category_options, filter_buttons, status_counts,
    visible_mentors,
};
pub use mentor::{
    ListMentorsResponse, Mentor, MentorApplication, MentorCategory, MentorStatus,
    ParseMentorStatusError, UpdateStatusRequest,
};
pub use session::Session;
pub use state::{LoadState, MentorApplicationsState};
pub use sync::{LoadOutcome, MentorApplicationsSync, UpdateOutcome};
