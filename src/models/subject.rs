//! Subject model and related types.
//!
//! A [`SubjectRecord`] is one row of a marksheet, either typed in by the
//! student or produced by the extraction service. The engine trusts
//! `total_marks` as given and never re-derives it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One subject on a marksheet together with its credit weight.
///
/// Only `total_marks` and `credits` take part in grading; the remaining
/// fields are carried through for display and default to empty/zero so that
/// `{ "total_marks": 72, "credits": 4 }` is a complete record.
///
/// # Examples
///
/// ```
/// use gpa_engine::models::SubjectRecord;
/// use rust_decimal::Decimal;
///
/// let subject = SubjectRecord::new(Decimal::from(72), 4);
/// assert!(subject.counts_toward_average());
/// assert_eq!(subject.subject_code, "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectRecord {
    /// The subject title as printed on the marksheet.
    #[serde(default)]
    pub subject_name: String,
    /// The university subject code (e.g., "BCS401").
    #[serde(default)]
    pub subject_code: String,
    /// Continuous internal evaluation marks.
    #[serde(default)]
    pub internal_marks: Decimal,
    /// Semester end examination marks.
    #[serde(default)]
    pub external_marks: Decimal,
    /// The total used for grading.
    pub total_marks: Decimal,
    /// Credit weight; zero or negative excludes the subject from averages.
    pub credits: i32,
}

impl SubjectRecord {
    /// Creates a record carrying only the fields that affect grading.
    pub fn new(total_marks: Decimal, credits: i32) -> Self {
        Self {
            subject_name: String::new(),
            subject_code: String::new(),
            internal_marks: Decimal::ZERO,
            external_marks: Decimal::ZERO,
            total_marks,
            credits,
        }
    }

    /// Returns true if the subject carries a positive credit weight.
    pub fn counts_toward_average(&self) -> bool {
        self.credits > 0
    }

    /// Returns true if internal and external marks were supplied and do not
    /// add up to `total_marks`.
    ///
    /// Records without a component breakdown are never reported. Components
    /// too large to add up are a mismatch.
    pub fn has_mismatched_total(&self) -> bool {
        let has_components = !self.internal_marks.is_zero() || !self.external_marks.is_zero();
        has_components
            && self.internal_marks.checked_add(self.external_marks) != Some(self.total_marks)
    }
}

/// A subject annotated with the grade it earned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradedSubject {
    /// The original subject record, unchanged.
    #[serde(flatten)]
    pub subject: SubjectRecord,
    /// The letter grade for `total_marks`.
    pub grade: String,
    /// The grade points for `total_marks`.
    pub grade_points: u32,
}
