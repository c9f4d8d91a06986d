//! Interactive review loop.
//!
//! Shows the filtered table and lets the operator change filters or pick an
//! applicant and a new status. Each status change is sent to the server and
//! the table only reflects it after the follow-up resync.

use std::fmt;

use anyhow::{Context as _, Result};
use inquire::{Select, Text};
use mentorship_business::{BusinessConfig, LoadOutcome, MentorApplicationsState};
use tracing::instrument;

use crate::cli::FilterArgs;
use crate::commands::set_status::apply_status;
use crate::commands::{MentorsSync, connect, mount, print_view};
use crate::output::Output;
use crate::render::{
    ApplicantChoice, StatusFilterChoice, category_filter_value, category_menu, status_dropdown,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReviewAction {
    ChangeStatus,
    FilterByStatus,
    FilterByCategory,
    Search,
    Refresh,
    Quit,
}

impl ReviewAction {
    const ALL: [Self; 6] = [
        Self::ChangeStatus,
        Self::FilterByStatus,
        Self::FilterByCategory,
        Self::Search,
        Self::Refresh,
        Self::Quit,
    ];
}

impl fmt::Display for ReviewAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ChangeStatus => "Change status",
            Self::FilterByStatus => "Filter by status",
            Self::FilterByCategory => "Filter by category",
            Self::Search => "Search by name",
            Self::Refresh => "Refresh",
            Self::Quit => "Quit",
        })
    }
}

#[instrument(skip_all, name = "review")]
pub async fn run_review(config: &BusinessConfig, filter: FilterArgs) -> Result<()> {
    let out = Output::new();
    let mut sync = connect(config);
    mount(&out, &mut sync).await;
    sync.state_mut().set_filter(filter.into_filter());

    loop {
        print_view(&out, sync.state());
        out.newline();

        let action = Select::new("What next?", ReviewAction::ALL.to_vec())
            .with_help_message("Use arrow keys to navigate, Enter to select, Esc to quit")
            .prompt_skippable()
            .context("Failed to read action")?;

        match action.unwrap_or(ReviewAction::Quit) {
            ReviewAction::ChangeStatus => change_status(&out, &mut sync).await?,
            ReviewAction::FilterByStatus => pick_status_filter(sync.state_mut())?,
            ReviewAction::FilterByCategory => pick_category(sync.state_mut())?,
            ReviewAction::Search => edit_search(sync.state_mut())?,
            ReviewAction::Refresh => {
                if let LoadOutcome::Failed(err) = sync.refresh().await {
                    out.warning(format!("Could not refresh the list: {err}"));
                }
            }
            ReviewAction::Quit => break,
        }
    }

    Ok(())
}

async fn change_status(out: &Output, sync: &mut MentorsSync) -> Result<()> {
    let applicants: Vec<ApplicantChoice> = sync
        .state()
        .visible()
        .into_iter()
        .map(ApplicantChoice::from_mentor)
        .collect();

    if applicants.is_empty() {
        out.dim("No applications to change.");
        return Ok(());
    }

    let Some(applicant) = Select::new("Select application:", applicants)
        .with_help_message("Type to search, Enter to select")
        .prompt_skippable()
        .context("Failed to select application")?
    else {
        return Ok(());
    };

    let (options, cursor) = status_dropdown(applicant.status);
    let Some(choice) = Select::new(&format!("Status for {}:", applicant.name), options)
        .with_starting_cursor(cursor)
        .prompt_skippable()
        .context("Failed to select status")?
    else {
        return Ok(());
    };

    // The dropdown still sends a request when the value is unchanged.
    apply_status(out, sync, &applicant.id, choice.0).await;
    Ok(())
}

fn pick_status_filter(state: &mut MentorApplicationsState) -> Result<()> {
    let buttons = state.filter_buttons();
    let cursor = buttons.iter().position(|b| b.selected).unwrap_or(0);
    let options: Vec<StatusFilterChoice> = buttons
        .iter()
        .map(|button| StatusFilterChoice {
            caption: button.caption(),
            status: button.status,
        })
        .collect();

    if let Some(choice) = Select::new("Show:", options)
        .with_starting_cursor(cursor)
        .prompt_skippable()
        .context("Failed to select status filter")?
    {
        state.set_status_filter(choice.status);
    }
    Ok(())
}

fn pick_category(state: &mut MentorApplicationsState) -> Result<()> {
    let menu = category_menu(state.categories());
    let cursor = menu
        .iter()
        .position(|entry| category_filter_value(entry) == state.filter().category)
        .unwrap_or(0);

    if let Some(choice) = Select::new("Category:", menu)
        .with_starting_cursor(cursor)
        .prompt_skippable()
        .context("Failed to select category")?
    {
        state.set_category_filter(category_filter_value(&choice));
    }
    Ok(())
}

fn edit_search(state: &mut MentorApplicationsState) -> Result<()> {
    if let Some(search) = Text::new("Search by name:")
        .with_initial_value(&state.filter().search)
        .with_help_message("Leave empty to show everyone")
        .prompt_skippable()
        .context("Failed to read search")?
    {
        state.set_search(search);
    }
    Ok(())
}
