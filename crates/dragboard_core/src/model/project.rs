//! Project domain model.
//!
//! # Responsibility
//! - Define the record rendered by project views and cards.
//! - Provide the status enumeration that partitions the board.
//!
//! # Invariants
//! - `id` is generated once and never reused for another project.
//! - `status` is always one of the two board columns.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier for one project.
pub type ProjectId = Uuid;

/// Board column a project currently belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Work in progress. Every project starts here.
    Active,
    /// Completed work.
    Finished,
}

impl ProjectStatus {
    /// Both statuses in board order.
    pub const ALL: [ProjectStatus; 2] = [ProjectStatus::Active, ProjectStatus::Finished];

    /// Lowercase identifier used in element ids and command input.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown status name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl Display for UnknownStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown project status `{}`; expected active|finished",
            self.0
        )
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for ProjectStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "finished" => Ok(Self::Finished),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// One work item on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Validated to `1..=5` by the form before the store sees it.
    pub people_count: u32,
    pub status: ProjectStatus,
}

impl Project {
    /// Creates an active project with a freshly generated id.
    pub fn new(title: impl Into<String>, description: impl Into<String>, people_count: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            people_count,
            status: ProjectStatus::Active,
        }
    }

    /// Display label for the assigned people count.
    pub fn people_label(&self) -> String {
        people_label(self.people_count)
    }
}

/// Formats a people count with singular/plural agreement.
///
/// `1` renders as "1 person"; every other value as "`n` people".
pub fn people_label(count: u32) -> String {
    if count == 1 {
        "1 person".to_string()
    } else {
        format!("{count} people")
    }
}
