//! List categories command.

use anyhow::Result;
use mentorship_business::BusinessConfig;
use tracing::instrument;

use crate::commands::{connect, mount};
use crate::output::Output;
use crate::render::category_menu;

#[instrument(skip_all, name = "categories")]
pub async fn run_categories(config: &BusinessConfig) -> Result<()> {
    let out = Output::new();
    let mut sync = connect(config);
    mount(&out, &mut sync).await;

    out.header("Categories");
    for entry in category_menu(sync.state().categories()) {
        out.print(entry);
    }

    Ok(())
}
