//! Percentage conversion.
//!
//! Two conventions are in use and they disagree, so each is a named
//! [`PercentageStrategy`] and a deployment picks one in `scheme.yaml`:
//!
//! - `mark_based`: average of the subject totals, each out of 100.
//! - `sgpa_based`: the linear approximation `(sgpa - 0.75) * 10`.
//!
//! Sums saturate at the `Decimal` range instead of panicking.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, SubjectRecord};

use super::rounding::round_reported;

/// Offset subtracted from SGPA in the SGPA-based conversion.
pub const SGPA_PERCENTAGE_OFFSET: Decimal = Decimal::from_parts(75, 0, 0, false, 2);

/// Multiplier applied after the offset in the SGPA-based conversion.
pub const SGPA_PERCENTAGE_MULTIPLIER: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Maximum marks per subject assumed by the mark-based conversion.
pub const MAX_MARKS_PER_SUBJECT: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// The percentage convention a deployment reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PercentageStrategy {
    /// Sum of totals over 100 marks per subject.
    MarkBased,
    /// `(sgpa - 0.75) * 10`.
    SgpaBased,
}

impl PercentageStrategy {
    /// Builds the converter input this strategy needs.
    pub fn input_for<'a>(self, subjects: &'a [SubjectRecord], sgpa: Decimal) -> PercentageInput<'a> {
        match self {
            PercentageStrategy::MarkBased => PercentageInput::Subjects(subjects),
            PercentageStrategy::SgpaBased => PercentageInput::Sgpa(sgpa),
        }
    }
}

/// What a percentage is derived from.
///
/// The variant selects the convention, so one result never mixes the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PercentageInput<'a> {
    /// Subject records graded out of 100 each.
    Subjects(&'a [SubjectRecord]),
    /// Raw subject totals, each out of 100.
    Marks(&'a [Decimal]),
    /// A precomputed SGPA.
    Sgpa(Decimal),
}

impl PercentageInput<'_> {
    /// Returns the convention this input is converted with.
    pub fn strategy(&self) -> PercentageStrategy {
        match self {
            PercentageInput::Subjects(_) | PercentageInput::Marks(_) => {
                PercentageStrategy::MarkBased
            }
            PercentageInput::Sgpa(_) => PercentageStrategy::SgpaBased,
        }
    }
}

/// Converts marks or an SGPA into a percentage rounded to 2 decimal places.
///
/// # Examples
///
/// ```
/// use gpa_engine::calculation::{compute_percentage, PercentageInput};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let marks = [Decimal::from(80), Decimal::from(71)];
/// assert_eq!(
///     compute_percentage(PercentageInput::Marks(&marks)),
///     Decimal::from_str("75.5").unwrap()
/// );
///
/// let sgpa = Decimal::from_str("8.5").unwrap();
/// assert_eq!(
///     compute_percentage(PercentageInput::Sgpa(sgpa)),
///     Decimal::from_str("77.5").unwrap()
/// );
/// ```
pub fn compute_percentage(input: PercentageInput<'_>) -> Decimal {
    match input {
        PercentageInput::Subjects(subjects) => {
            mark_based_percentage(subjects.iter().map(|s| s.total_marks), subjects.len())
        }
        PercentageInput::Marks(marks) => {
            mark_based_percentage(marks.iter().copied(), marks.len())
        }
        PercentageInput::Sgpa(sgpa) => sgpa_based_percentage(sgpa),
    }
}

fn total_marks(marks: impl Iterator<Item = Decimal>) -> Decimal {
    marks.fold(Decimal::ZERO, Decimal::saturating_add)
}

fn mark_based_percentage(marks: impl Iterator<Item = Decimal>, count: usize) -> Decimal {
    if count == 0 {
        return Decimal::ZERO;
    }
    let obtained = total_marks(marks);
    let maximum = MAX_MARKS_PER_SUBJECT * Decimal::from(count);
    round_reported((obtained / maximum).saturating_mul(Decimal::ONE_HUNDRED))
}

/// SGPA-based conversion.
///
/// An SGPA of zero (or below) means "no result" and reports `0`. A positive
/// SGPA under the offset yields a negative percentage.
fn sgpa_based_percentage(sgpa: Decimal) -> Decimal {
    if sgpa <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    round_reported(
        sgpa.saturating_sub(SGPA_PERCENTAGE_OFFSET)
            .saturating_mul(SGPA_PERCENTAGE_MULTIPLIER),
    )
}

/// The result of a percentage conversion, including the audit step.
#[derive(Debug, Clone)]
pub struct PercentageResult {
    /// The rounded percentage.
    pub percentage: Decimal,
    /// The convention used.
    pub strategy: PercentageStrategy,
    /// The audit step recording this conversion.
    pub audit_step: AuditStep,
}

/// Converts to a percentage and records the conversion.
pub fn calculate_percentage(input: PercentageInput<'_>, step_number: u32) -> PercentageResult {
    let strategy = input.strategy();
    let percentage = compute_percentage(input);

    let (input_json, reasoning) = match input {
        PercentageInput::Sgpa(sgpa) => explain_sgpa(sgpa, percentage),
        PercentageInput::Subjects(subjects) => {
            let marks: Vec<Decimal> = subjects.iter().map(|s| s.total_marks).collect();
            explain_marks(&marks, percentage)
        }
        PercentageInput::Marks(marks) => explain_marks(marks, percentage),
    };

    let rule_id = match strategy {
        PercentageStrategy::MarkBased => "percentage_mark_based",
        PercentageStrategy::SgpaBased => "percentage_sgpa_based",
    };

    PercentageResult {
        percentage,
        strategy,
        audit_step: AuditStep {
            step_number,
            rule_id: rule_id.to_string(),
            rule_name: "Percentage Conversion".to_string(),
            policy_ref: "percentage".to_string(),
            input: input_json,
            output: serde_json::json!({
                "percentage": percentage.normalize().to_string(),
                "strategy": strategy
            }),
            reasoning,
        },
    }
}

fn explain_sgpa(sgpa: Decimal, percentage: Decimal) -> (serde_json::Value, String) {
    let reasoning = if sgpa <= Decimal::ZERO {
        format!("SGPA {} has no result; percentage is 0", sgpa.normalize())
    } else {
        format!(
            "({} - {}) x {} = {}",
            sgpa.normalize(),
            SGPA_PERCENTAGE_OFFSET,
            SGPA_PERCENTAGE_MULTIPLIER,
            percentage.normalize()
        )
    };
    (
        serde_json::json!({ "sgpa": sgpa.normalize().to_string() }),
        reasoning,
    )
}

fn explain_marks(marks: &[Decimal], percentage: Decimal) -> (serde_json::Value, String) {
    let obtained = total_marks(marks.iter().copied());
    let reasoning = if marks.is_empty() {
        "No subjects; percentage is 0".to_string()
    } else {
        format!(
            "{} marks obtained out of {} = {}%",
            obtained.normalize(),
            MAX_MARKS_PER_SUBJECT * Decimal::from(marks.len()),
            percentage.normalize()
        )
    };
    (
        serde_json::json!({
            "subjects": marks.len(),
            "marks_obtained": obtained.normalize().to_string()
        }),
        reasoning,
    )
}
