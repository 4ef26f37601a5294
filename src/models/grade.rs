//! Grade outcome types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The grade letter and grade points earned for a mark.
///
/// # Example
///
/// ```
/// use gpa_engine::models::GradeOutcome;
///
/// let outcome = GradeOutcome::new("A+", 9);
/// assert_eq!(outcome.grade, "A+");
/// assert_eq!(outcome.grade_points, 9);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GradeOutcome {
    /// The letter grade (e.g., "O", "A+", "F").
    pub grade: String,
    /// Grade points on the 0-10 scale.
    pub grade_points: u32,
}

impl GradeOutcome {
    /// Creates a new grade outcome.
    pub fn new(grade: impl Into<String>, grade_points: u32) -> Self {
        Self {
            grade: grade.into(),
            grade_points,
        }
    }
}

/// Descriptive standing for an SGPA, as printed on the semester report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SgpaClassification {
    /// 9.5 and above.
    Outstanding,
    /// 8.5 to below 9.5.
    Excellent,
    /// 7.5 to below 8.5.
    VeryGood,
    /// 6.5 to below 7.5.
    Good,
    /// 5.5 to below 6.5.
    AboveAverage,
    /// 4.5 to below 5.5.
    Average,
    /// 4.0 to below 4.5.
    Pass,
    /// Below 4.0.
    Fail,
}

impl SgpaClassification {
    /// Returns the label shown to students.
    pub fn label(self) -> &'static str {
        match self {
            SgpaClassification::Outstanding => "Outstanding",
            SgpaClassification::Excellent => "Excellent",
            SgpaClassification::VeryGood => "Very Good",
            SgpaClassification::Good => "Good",
            SgpaClassification::AboveAverage => "Above Average",
            SgpaClassification::Average => "Average",
            SgpaClassification::Pass => "Pass",
            SgpaClassification::Fail => "Fail",
        }
    }
}

impl fmt::Display for SgpaClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
