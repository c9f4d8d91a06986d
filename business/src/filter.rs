//! Derivation pipeline for the mentor applications table.
//!
//! Everything here is a pure function of the held list and the operator's
//! filter inputs. Nothing mutates the list; callers recompute on every render.

use crate::mentor::{Mentor, MentorStatus};

/// The three operator-controlled filter inputs.
///
/// Empty inputs are no-ops: `status: None`, an empty `category`, and an empty
/// `search` each let every applicant through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MentorFilter {
    pub status: Option<MentorStatus>,
    pub category: String,
    pub search: String,
}

impl MentorFilter {
    pub fn with_status(mut self, status: Option<MentorStatus>) -> Self {
        self.status = status;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// True when the applicant passes all three filters.
    pub fn matches(&self, mentor: &Mentor) -> bool {
        self.matches_status(mentor) && self.matches_category(mentor) && self.matches_name(mentor)
    }

    fn matches_status(&self, mentor: &Mentor) -> bool {
        self.status.is_none_or(|status| mentor.state == status)
    }

    fn matches_category(&self, mentor: &Mentor) -> bool {
        self.category.is_empty() || mentor.category_label() == self.category
    }

    fn matches_name(&self, mentor: &Mentor) -> bool {
        self.search.is_empty()
            || mentor
                .full_name()
                .to_lowercase()
                .contains(&self.search.to_lowercase())
    }
}

/// Rows to display, in server order.
pub fn visible_mentors<'a>(mentors: &'a [Mentor], filter: &MentorFilter) -> Vec<&'a Mentor> {
    mentors.iter().filter(|m| filter.matches(m)).collect()
}

/// Distinct category labels in first-seen order.
///
/// Independent of the active filters; the empty selection is the only "all".
pub fn category_options(mentors: &[Mentor]) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();
    for mentor in mentors {
        let label = mentor.category_label();
        if !options.iter().any(|seen| seen == label) {
            options.push(label.to_owned());
        }
    }
    options
}

/// Per-status distribution over the unfiltered list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub all: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl StatusCounts {
    /// Count for one filter button; `None` is the `All` button.
    pub fn get(&self, status: Option<MentorStatus>) -> usize {
        match status {
            None => self.all,
            Some(MentorStatus::Pending) => self.pending,
            Some(MentorStatus::Approved) => self.approved,
            Some(MentorStatus::Rejected) => self.rejected,
        }
    }
}

/// Status distribution of the whole list. Category and search never narrow it.
pub fn status_counts(mentors: &[Mentor]) -> StatusCounts {
    mentors.iter().fold(
        StatusCounts {
            all: mentors.len(),
            ..StatusCounts::default()
        },
        |mut counts, mentor| {
            match mentor.state {
                MentorStatus::Pending => counts.pending += 1,
                MentorStatus::Approved => counts.approved += 1,
                MentorStatus::Rejected => counts.rejected += 1,
            }
            counts
        },
    )
}

/// One entry of the status filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterButton {
    pub label: &'static str,
    pub status: Option<MentorStatus>,
    pub count: usize,
    pub selected: bool,
}

impl FilterButton {
    /// `"Approved (3)"`.
    pub fn caption(&self) -> String {
        format!("{} ({})", self.label, self.count)
    }
}

/// The filter bar: `All`, then each status in display order.
pub fn filter_buttons(mentors: &[Mentor], active: Option<MentorStatus>) -> Vec<FilterButton> {
    let counts = status_counts(mentors);
    std::iter::once(None)
        .chain(MentorStatus::FILTER_ORDER.into_iter().map(Some))
        .map(|status| FilterButton {
            label: status.map_or("All", MentorStatus::label),
            status,
            count: counts.get(status),
            selected: status == active,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{mentor, sample_mentors as sample};

    fn ids(rows: &[&Mentor]) -> Vec<String> {
        crate::test_utils::ids(rows.iter().copied())
    }

    #[test]
    fn test_empty_filter_shows_everything_in_order() {
        let list = sample();
        let rows = visible_mentors(&list, &MentorFilter::default());
        assert_eq!(ids(&rows), ["1", "2", "3"]);
    }

    #[test]
    fn test_category_filter_only() {
        let list = sample();
        let filter = MentorFilter::default().with_category("Eng");
        assert_eq!(ids(&visible_mentors(&list, &filter)), ["1", "2"]);
    }

    #[test]
    fn test_status_filter_only() {
        let list = sample();
        let filter = MentorFilter::default().with_status(Some(MentorStatus::Rejected));
        assert_eq!(ids(&visible_mentors(&list, &filter)), ["3"]);
    }

    #[test]
    fn test_filters_are_a_conjunction() {
        let list = sample();
        let filter = MentorFilter::default()
            .with_status(Some(MentorStatus::Approved))
            .with_category("Design");
        assert!(visible_mentors(&list, &filter).is_empty());

        let filter = MentorFilter::default()
            .with_status(Some(MentorStatus::Approved))
            .with_category("Eng")
            .with_search("grace");
        assert_eq!(ids(&visible_mentors(&list, &filter)), ["2"]);
    }

    #[test]
    fn test_name_search_is_case_insensitive_over_full_name() {
        let list = sample();
        let filter = MentorFilter::default().with_search("ADA LOVE");
        assert_eq!(ids(&visible_mentors(&list, &filter)), ["1"]);

        let filter = MentorFilter::default().with_search("bard");
        assert!(visible_mentors(&list, &filter).is_empty());
    }

    #[test]
    fn test_name_search_spans_first_and_last_name() {
        let list = sample();
        let filter = MentorFilter::default().with_search("e h");
        assert_eq!(ids(&visible_mentors(&list, &filter)), ["2"]);
    }

    #[test]
    fn test_category_match_is_exact() {
        let list = sample();
        let filter = MentorFilter::default().with_category("eng");
        assert!(visible_mentors(&list, &filter).is_empty());
    }

    #[test]
    fn test_filtering_does_not_touch_the_list() {
        let list = sample();
        let before = list.clone();
        let filter = MentorFilter::default()
            .with_status(Some(MentorStatus::Pending))
            .with_search("x");
        let _rows = visible_mentors(&list, &filter);
        assert_eq!(list, before);
    }

    #[test]
    fn test_category_options_first_seen_order() {
        let mut list = sample();
        list.push(mentor("4", "Alan", "Kay", MentorStatus::Pending, "Eng"));
        list.push(mentor("5", "Edward", "Tufte", MentorStatus::Pending, "Data"));

        assert_eq!(category_options(&list), ["Eng", "Design", "Data"]);
        assert!(category_options(&[]).is_empty());
    }

    #[test]
    fn test_status_counts_partition_list() {
        let list = sample();
        let counts = status_counts(&list);

        assert_eq!(counts.all, 3);
        assert_eq!(counts.pending, 1);
        assert_eq!(counts.approved, 1);
        assert_eq!(counts.rejected, 1);
        assert_eq!(counts.pending + counts.approved + counts.rejected, counts.all);
    }

    #[test]
    fn test_filter_buttons_order_and_selection() {
        let list = sample();
        let buttons = filter_buttons(&list, Some(MentorStatus::Pending));

        let captions: Vec<String> = buttons.iter().map(FilterButton::caption).collect();
        assert_eq!(
            captions,
            ["All (3)", "Approved (1)", "Pending (1)", "Rejected (1)"]
        );

        let selected: Vec<&str> = buttons
            .iter()
            .filter(|b| b.selected)
            .map(|b| b.label)
            .collect();
        assert_eq!(selected, ["Pending"]);
    }

    #[test]
    fn test_filter_buttons_all_selected_by_default() {
        let buttons = filter_buttons(&[], None);
        assert_eq!(buttons.len(), 4);
        assert!(buttons[0].selected);
        assert!(buttons.iter().all(|b| b.count == 0));
    }
}
