//! Command implementations for the `mentors` CLI.
//!
//! Each subcommand is implemented in its own module. They share the loading
//! and printing helpers below.

pub mod categories;
pub mod completions;
pub mod list;
pub mod review;
pub mod set_status;

pub use categories::run_categories;
pub use completions::generate_completions;
pub use list::run_list;
pub use review::run_review;
pub use set_status::run_set_status;

use mentorship_business::{
    BusinessConfig, HttpMentorsBackend, LoadOutcome, MentorApplicationsState,
    MentorApplicationsSync,
};
use tracing::instrument;

use crate::output::Output;
use crate::render::{ALL_CATEGORIES, category_menu, mentor_table};

pub type MentorsSync = MentorApplicationsSync<HttpMentorsBackend>;

/// Build the sync for `config` without fetching anything yet.
pub fn connect(config: &BusinessConfig) -> MentorsSync {
    MentorApplicationsSync::new(HttpMentorsBackend::new(config))
}

/// Initial load. A failed fetch leaves the list empty and is reported as a
/// warning.
#[instrument(skip_all, name = "mount")]
pub async fn mount(out: &Output, sync: &mut MentorsSync) {
    out.dim("Loading...");
    if let LoadOutcome::Failed(err) = sync.mount().await {
        out.warning(err);
    }
}

/// Print the filter bar, the active filters, the table, and the totals.
pub fn print_view(out: &Output, state: &MentorApplicationsState) {
    if state.is_loading() {
        out.dim("Loading...");
        return;
    }

    out.newline();
    out.filter_bar(
        state
            .filter_buttons()
            .iter()
            .map(|button| (button.caption(), button.selected)),
    );

    let filter = state.filter();
    let category = if filter.category.is_empty() {
        ALL_CATEGORIES
    } else {
        filter.category.as_str()
    };
    out.labeled("Categories", category_menu(state.categories()).join(" | "));
    out.labeled("Category", category);
    if !filter.search.is_empty() {
        out.labeled("Search", &filter.search);
    }

    let visible = state.visible();
    if visible.is_empty() {
        out.dim("No applications match the current filters.");
    } else {
        out.print(mentor_table(visible.iter().copied()));
    }
    out.total(visible.len(), state.mentors().len());

    if let Some(synced) = state.last_synced() {
        out.dim(format!("Last synced {}", synced.format("%Y-%m-%d %H:%M:%S UTC")));
    }
}
