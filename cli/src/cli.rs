use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use mentorship_business::{MentorFilter, MentorStatus};

#[derive(Parser)]
#[command(name = "mentors")]
#[command(about = "Review and approve mentor applications", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API root (the admin endpoints live under `<url>/admin`)
    #[arg(long, global = true, env = "MENTORS_API_URL")]
    pub api_url: Option<String>,

    /// Admin session cookie, either `name=value` or a bare value
    #[arg(long, global = true, env = "MENTORS_SESSION_COOKIE", hide_env_values = true)]
    pub session_cookie: Option<String>,

    /// Admin bearer token (takes precedence over the session cookie)
    #[arg(long, global = true, env = "MENTORS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Show timing/latency information
    #[arg(long, global = true)]
    pub timing: bool,

    /// Enable verbose debug output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Filter inputs shared by `list` and `review`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only show applications in this status: pending, approved, rejected
    #[arg(long, short = 's')]
    pub status: Option<MentorStatus>,

    /// Only show applications in this category (exact label)
    #[arg(long, short = 'c', default_value = "")]
    pub category: String,

    /// Case-insensitive search over "first last" name
    #[arg(long, short = 'q', default_value = "")]
    pub search: String,
}

impl FilterArgs {
    pub fn into_filter(self) -> MentorFilter {
        MentorFilter::default()
            .with_status(self.status)
            .with_category(self.category)
            .with_search(self.search)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List mentor applications with status counts
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// List the categories present in the current applications
    Categories,
    /// Change one application's status
    SetStatus {
        /// Application ID
        id: String,

        /// New status: pending, approved, rejected
        status: MentorStatus,
    },
    /// Interactively pick applications and change their status
    Review {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
