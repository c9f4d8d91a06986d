//! Change one application's status.

use anyhow::Result;
use mentorship_business::{BusinessConfig, LoadOutcome, MentorStatus, UpdateOutcome};
use tracing::instrument;

use crate::commands::{MentorsSync, connect, print_view};
use crate::output::Output;

#[instrument(skip_all, name = "set_status", fields(id = %id, status = %status))]
pub async fn run_set_status(config: &BusinessConfig, id: &str, status: MentorStatus) -> Result<()> {
    set_status(&Output::new(), config, id, status).await;
    Ok(())
}

/// Send the update; the resynced view is printed only once the server has
/// acknowledged it.
async fn set_status(out: &Output, config: &BusinessConfig, id: &str, status: MentorStatus) {
    let mut sync = connect(config);

    if apply_status(out, &mut sync, id, status).await {
        print_view(out, sync.state());
    }
}

/// Send one update and report the outcome. Returns whether the server
/// acknowledged it.
pub async fn apply_status(out: &Output, sync: &mut MentorsSync, id: &str, status: MentorStatus) -> bool {
    match sync.update_status(id, status).await {
        UpdateOutcome::Applied { resync } => {
            out.success(format!("Application {id} is now {}", status.label()));
            if let LoadOutcome::Failed(err) = resync {
                out.warning(format!("Could not refresh the list: {err}"));
            }
            true
        }
        UpdateOutcome::Failed(err) => {
            out.warning(err);
            false
        }
    }
}
