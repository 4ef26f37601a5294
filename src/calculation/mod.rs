//! Calculation logic for the GPA engine.
//!
//! This module contains the grading table lookup, the credit-weighted SGPA
//! average, the percentage conversions, and the cumulative CGPA average.
//! Every function here is pure: inputs are borrowed and never modified, and
//! the same input always yields the same output.

mod cgpa;
mod grading;
mod percentage;
mod rounding;
mod semester;
mod sgpa;

pub use cgpa::{CgpaCalculation, LATERAL_ENTRY_SKIPPED_SEMESTERS, calculate_cgpa, compute_cgpa};
pub use grading::{
    GradingPolicy, MAX_GRADE_POINTS, SubjectGradingResult, classify_sgpa, grade_of, grade_subject,
};
pub use percentage::{
    MAX_MARKS_PER_SUBJECT, PercentageInput, PercentageResult, PercentageStrategy,
    SGPA_PERCENTAGE_MULTIPLIER, SGPA_PERCENTAGE_OFFSET, calculate_percentage, compute_percentage,
};
pub use rounding::{REPORTED_DECIMAL_PLACES, round_reported};
pub use semester::{SemesterCalculation, calculate_semester};
pub use sgpa::{SgpaCalculation, calculate_sgpa, compute_sgpa, compute_sgpa_with};
