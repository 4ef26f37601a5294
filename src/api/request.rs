//! Request types for the GPA engine API.
//!
//! This module defines the JSON request structures for every endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::PercentageInput;
use crate::models::{SemesterEntry, StudentDetails, SubjectRecord};

/// Request body for the `/grade` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeRequest {
    /// The subject total to grade.
    pub total_marks: Decimal,
}

/// Request body for the `/sgpa` endpoint.
///
/// Contains one semester's subjects, each with its credits, and optionally
/// the student the marksheet belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemesterRequest {
    /// Student details echoed into the report.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student: Option<StudentDetails>,
    /// The semester's subjects.
    pub subjects: Vec<SubjectRecord>,
}

/// Request body for the `/percentage` endpoint.
///
/// Exactly one of `marks` and `sgpa` must be given; it selects the
/// conversion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PercentageRequest {
    /// Subject totals, each out of 100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marks: Option<Vec<Decimal>>,
    /// A semester SGPA.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sgpa: Option<Decimal>,
}

impl PercentageRequest {
    /// Returns the converter input, or a message naming what is wrong.
    pub fn input(&self) -> Result<PercentageInput<'_>, &'static str> {
        match (&self.marks, self.sgpa) {
            (Some(marks), None) => Ok(PercentageInput::Marks(marks)),
            (None, Some(sgpa)) => Ok(PercentageInput::Sgpa(sgpa)),
            (Some(_), Some(_)) => Err("provide either marks or sgpa, not both"),
            (None, None) => Err("missing field `marks` or `sgpa`"),
        }
    }
}

/// Request body for the `/cgpa` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CgpaRequest {
    /// Semester SGPAs in chronological order.
    pub semesters: Vec<SemesterEntry>,
    /// Whether the student joined in the third semester.
    #[serde(default)]
    pub is_lateral_entry: bool,
}

/// Request body for the `/credits` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditsRequest {
    /// The subject codes to resolve.
    pub subject_codes: Vec<String>,
}
