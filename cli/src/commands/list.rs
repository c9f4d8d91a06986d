//! List mentor applications command.

use anyhow::Result;
use mentorship_business::BusinessConfig;
use tracing::instrument;

use crate::cli::FilterArgs;
use crate::commands::{connect, mount, print_view};
use crate::output::Output;

#[instrument(skip_all, name = "list", fields(status = ?filter.status, category = %filter.category))]
pub async fn run_list(config: &BusinessConfig, filter: FilterArgs) -> Result<()> {
    list(&Output::new(), config, filter).await;
    Ok(())
}

/// Load once and print the view. An empty or failed load still shows the
/// filter bar with zero counts.
async fn list(out: &Output, config: &BusinessConfig, filter: FilterArgs) {
    let mut sync = connect(config);
    mount(out, &mut sync).await;

    sync.state_mut().set_filter(filter.into_filter());
    print_view(out, sync.state());
}
