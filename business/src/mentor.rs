//! Mentor application records as served by the admin API.
//!
//! The backend owns these records; the admin view only reads them and asks the
//! server to change `state`. Keys arrive in camelCase.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ============================================================================
// Status
// ============================================================================

/// Approval state of a mentor application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MentorStatus {
    Pending,
    Approved,
    Rejected,
}

impl MentorStatus {
    /// Every status, in the order the filter bar shows them.
    pub const FILTER_ORDER: [Self; 3] = [Self::Approved, Self::Pending, Self::Rejected];

    /// Every status, in the order the status dropdown offers them.
    pub const DROPDOWN_ORDER: [Self; 3] = [Self::Pending, Self::Rejected, Self::Approved];

    /// Wire value (`pending`, `approved`, `rejected`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Human-facing label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for MentorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the three known statuses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mentor status `{0}` (expected pending, approved or rejected)")]
pub struct ParseMentorStatusError(pub String);

impl FromStr for MentorStatus {
    type Err = ParseMentorStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(ParseMentorStatusError(s.to_owned())),
        }
    }
}

// ============================================================================
// Records
// ============================================================================

/// The application form a mentor submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorApplication {
    pub first_name: String,
    pub last_name: String,
    /// Profession shown in the table.
    #[serde(default)]
    pub position: String,
}

/// Category a mentor applied under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentorCategory {
    pub category: String,
}

/// A mentor applicant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mentor {
    /// Opaque server identifier.
    pub uuid: String,
    pub application: MentorApplication,
    pub category: MentorCategory,
    pub state: MentorStatus,
}

impl Mentor {
    /// `"first last"`, the string the name search runs against.
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.application.first_name, self.application.last_name
        )
    }

    pub fn category_label(&self) -> &str {
        &self.category.category
    }

    pub fn position(&self) -> &str {
        &self.application.position
    }
}

/// Response body of `GET /admin/mentors`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListMentorsResponse {
    pub mentors: Vec<Mentor>,
}

/// Request body of `PUT /admin/mentors/{id}/status`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: MentorStatus,
}
