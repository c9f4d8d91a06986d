//! Plain-text rendering of the mentor applications view.
//!
//! These helpers turn business state into strings and menu items; printing
//! and prompting happen in the commands.

use std::fmt;

use mentorship_business::{Mentor, MentorStatus};
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Leading entry of the category selector; maps to the empty selection.
pub const ALL_CATEGORIES: &str = "All Categories";

const MAX_CELL_CHARS: usize = 32;

#[derive(Tabled)]
struct MentorRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Profession")]
    profession: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Status")]
    status: &'static str,
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{truncated}...")
    } else {
        s.to_owned()
    }
}

/// The applicant table: Name, Profession, Category, Status (plus ID so rows
/// can be addressed with `set-status`).
pub fn mentor_table<'a>(rows: impl IntoIterator<Item = &'a Mentor>) -> String {
    let rows: Vec<MentorRow> = rows
        .into_iter()
        .map(|mentor| MentorRow {
            id: mentor.uuid.clone(),
            name: truncate_str(&mentor.full_name(), MAX_CELL_CHARS),
            profession: truncate_str(mentor.position(), MAX_CELL_CHARS),
            category: truncate_str(mentor.category_label(), MAX_CELL_CHARS),
            status: mentor.state.label(),
        })
        .collect();

    let mut table = Table::new(&rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Entries for the category selector, `All Categories` first.
pub fn category_menu(categories: &[String]) -> Vec<String> {
    std::iter::once(ALL_CATEGORIES.to_owned())
        .chain(categories.iter().cloned())
        .collect()
}

/// Map a category selector entry back to a filter value.
pub fn category_filter_value(choice: &str) -> &str {
    if choice == ALL_CATEGORIES { "" } else { choice }
}

/// An applicant as offered in the interactive picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicantChoice {
    pub id: String,
    pub name: String,
    pub category: String,
    pub status: MentorStatus,
}

impl ApplicantChoice {
    pub fn from_mentor(mentor: &Mentor) -> Self {
        Self {
            id: mentor.uuid.clone(),
            name: mentor.full_name(),
            category: mentor.category_label().to_owned(),
            status: mentor.state,
        }
    }
}

impl fmt::Display for ApplicantChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) [{}]",
            self.name,
            self.category,
            self.status.label()
        )
    }
}

/// A status as offered in the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChoice(pub MentorStatus);

impl fmt::Display for StatusChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.label())
    }
}

/// Dropdown options in their fixed order, and the index of `current`.
pub fn status_dropdown(current: MentorStatus) -> (Vec<StatusChoice>, usize) {
    let options: Vec<StatusChoice> = MentorStatus::DROPDOWN_ORDER
        .into_iter()
        .map(StatusChoice)
        .collect();
    let cursor = options
        .iter()
        .position(|choice| choice.0 == current)
        .unwrap_or(0);
    (options, cursor)
}

/// A status filter button as offered in the interactive picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusFilterChoice {
    pub caption: String,
    pub status: Option<MentorStatus>,
}

impl fmt::Display for StatusFilterChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.caption)
    }
}
