//! Student identity as printed on a marksheet.

use serde::{Deserialize, Serialize};

/// Identifying details of the student a marksheet belongs to.
///
/// Every field defaults to empty so partially extracted details still parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentDetails {
    /// The student's name.
    #[serde(default)]
    pub name: String,
    /// University Seat Number.
    #[serde(default)]
    pub usn: String,
    /// Branch of study (e.g., "Computer Science").
    #[serde(default)]
    pub branch: String,
    /// The semester the marksheet covers, as printed.
    #[serde(default)]
    pub semester: String,
}
