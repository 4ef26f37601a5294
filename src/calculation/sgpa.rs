//! SGPA calculation functionality.
//!
//! This module reduces one semester's subjects into a credit-weighted grade
//! point average. Subjects with zero or negative credits are left out of the
//! weighting entirely, so they neither raise nor lower the average.

use rust_decimal::Decimal;

use crate::models::{AuditStep, AuditWarning, GradedSubject, SubjectRecord};

use super::grading::{GradingPolicy, canonical_policy, grade_subject};
use super::rounding::round_reported;

/// Running totals over the subjects that carry credit.
#[derive(Debug, Clone, Copy, Default)]
struct CreditTally {
    total_credits: u64,
    weighted_points: Decimal,
}

impl CreditTally {
    /// Adds one subject. The credit sum widens to `u64` so that any number of
    /// `i32` credits fits.
    fn add(&mut self, credits: i32, points: u32) {
        let credits = u64::from(credits.unsigned_abs());
        self.total_credits = self.total_credits.saturating_add(credits);
        self.weighted_points = self
            .weighted_points
            .saturating_add(Decimal::from(credits) * Decimal::from(points));
    }

    fn average(&self) -> Decimal {
        if self.total_credits == 0 {
            return Decimal::ZERO;
        }
        round_reported(self.weighted_points / Decimal::from(self.total_credits))
    }
}

/// Computes the SGPA of a semester with the canonical grading table.
///
/// Returns zero when no subject carries positive credits.
///
/// # Examples
///
/// ```
/// use gpa_engine::calculation::compute_sgpa;
/// use gpa_engine::models::SubjectRecord;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let subjects = vec![
///     SubjectRecord::new(Decimal::from(90), 4),
///     SubjectRecord::new(Decimal::from(80), 3),
/// ];
/// // (10 * 4 + 9 * 3) / 7 = 9.571...
/// assert_eq!(compute_sgpa(&subjects), Decimal::from_str("9.57").unwrap());
/// assert_eq!(compute_sgpa(&[]), Decimal::ZERO);
/// ```
pub fn compute_sgpa(subjects: &[SubjectRecord]) -> Decimal {
    compute_sgpa_with(subjects, canonical_policy())
}

/// Computes the SGPA of a semester with the given grading table.
pub fn compute_sgpa_with(subjects: &[SubjectRecord], policy: &GradingPolicy) -> Decimal {
    let mut tally = CreditTally::default();
    for subject in subjects.iter().filter(|s| s.counts_toward_average()) {
        tally.add(subject.credits, policy.points_for(subject.total_marks));
    }
    tally.average()
}

/// The result of an SGPA calculation, including the audit trail.
#[derive(Debug, Clone)]
pub struct SgpaCalculation {
    /// The rounded SGPA.
    pub sgpa: Decimal,
    /// Sum of the positive credits that entered the average.
    pub total_credits: u64,
    /// Every input subject with its grade, in input order.
    pub graded_subjects: Vec<GradedSubject>,
    /// One grade lookup step per subject, then the averaging step.
    pub audit_steps: Vec<AuditStep>,
    /// Excluded subjects and inconsistent totals.
    pub warnings: Vec<AuditWarning>,
}

/// Grades every subject and computes the SGPA, recording each decision.
///
/// The SGPA equals [`compute_sgpa_with`] for the same input.
///
/// # Arguments
///
/// * `subjects` - The semester's subjects; never modified
/// * `policy` - The grading table to apply
/// * `step_number` - The step number of the first audit step
pub fn calculate_sgpa(
    subjects: &[SubjectRecord],
    policy: &GradingPolicy,
    step_number: u32,
) -> SgpaCalculation {
    let mut tally = CreditTally::default();
    let mut graded_subjects = Vec::with_capacity(subjects.len());
    let mut audit_steps = Vec::with_capacity(subjects.len() + 1);
    let mut warnings = Vec::new();
    let mut next_step = step_number;
    let mut excluded = 0usize;

    for subject in subjects {
        let grading = grade_subject(subject, policy, next_step);
        next_step += 1;

        if subject.counts_toward_average() {
            tally.add(subject.credits, grading.graded.grade_points);
        } else {
            excluded += 1;
            warnings.push(AuditWarning::low(
                "SUBJECT_WITHOUT_CREDITS",
                format!(
                    "Subject '{}' has {} credits and was left out of the SGPA",
                    display_name(subject),
                    subject.credits
                ),
            ));
        }

        if subject.has_mismatched_total() {
            warnings.push(AuditWarning::medium(
                "TOTAL_MARKS_MISMATCH",
                format!(
                    "Subject '{}' total {} differs from internal {} + external {}; the total was used",
                    display_name(subject),
                    subject.total_marks.normalize(),
                    subject.internal_marks.normalize(),
                    subject.external_marks.normalize()
                ),
            ));
        }

        graded_subjects.push(grading.graded);
        audit_steps.push(grading.audit_step);
    }

    let sgpa = tally.average();
    let reasoning = if tally.total_credits == 0 {
        "No subject carries credits; SGPA is 0".to_string()
    } else {
        format!(
            "{} weighted points / {} credits = {}",
            tally.weighted_points.normalize(),
            tally.total_credits,
            sgpa.normalize()
        )
    };

    audit_steps.push(AuditStep {
        step_number: next_step,
        rule_id: "sgpa_weighted_average".to_string(),
        rule_name: "SGPA Weighted Average".to_string(),
        policy_ref: "sgpa".to_string(),
        input: serde_json::json!({
            "subjects": subjects.len(),
            "excluded_subjects": excluded
        }),
        output: serde_json::json!({
            "sgpa": sgpa.normalize().to_string(),
            "total_credits": tally.total_credits,
            "weighted_points": tally.weighted_points.normalize().to_string()
        }),
        reasoning,
    });

    SgpaCalculation {
        sgpa,
        total_credits: tally.total_credits,
        graded_subjects,
        audit_steps,
        warnings,
    }
}

fn display_name(subject: &SubjectRecord) -> &str {
    if !subject.subject_code.is_empty() {
        &subject.subject_code
    } else if !subject.subject_name.is_empty() {
        &subject.subject_name
    } else {
        "unnamed"
    }
}
