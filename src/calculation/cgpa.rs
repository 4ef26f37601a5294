//! CGPA calculation functionality.
//!
//! This module combines per-semester SGPAs into a cumulative average. A
//! semester with SGPA zero has no result yet and is ignored. Lateral-entry
//! students join in the third semester, so their first two entries are
//! dropped before anything else is considered, including the choice
//! between the plain and the credit-weighted mean.
//!
//! Sums saturate at the `Decimal` range instead of panicking.

use rust_decimal::Decimal;

use crate::models::{AuditStep, CgpaMode, CgpaResult, SemesterEntry};

use super::rounding::round_reported;

/// Number of leading semesters a lateral-entry student skips.
pub const LATERAL_ENTRY_SKIPPED_SEMESTERS: usize = 2;

/// Returns the entries that remain after the lateral-entry exclusion.
fn considered_entries(entries: &[SemesterEntry], is_lateral_entry: bool) -> &[SemesterEntry] {
    if is_lateral_entry {
        entries
            .get(LATERAL_ENTRY_SKIPPED_SEMESTERS..)
            .unwrap_or_default()
    } else {
        entries
    }
}

/// Returns true if the entry takes part in the average under `mode`.
fn is_eligible(entry: &SemesterEntry, mode: CgpaMode) -> bool {
    match mode {
        CgpaMode::Unweighted => entry.sgpa > Decimal::ZERO,
        CgpaMode::CreditWeighted => {
            entry.sgpa > Decimal::ZERO && entry.credits.is_some_and(|c| c > 0)
        }
    }
}

/// Sum of contributions and weights over the eligible entries.
fn accumulate(entries: &[SemesterEntry], mode: CgpaMode) -> (Decimal, Decimal, usize) {
    entries
        .iter()
        .filter(|e| is_eligible(e, mode))
        .fold((Decimal::ZERO, Decimal::ZERO, 0), |(sum, weight, count), e| {
            let w = match mode {
                CgpaMode::Unweighted => Decimal::ONE,
                CgpaMode::CreditWeighted => Decimal::from(e.credits.unwrap_or_default()),
            };
            (
                sum.saturating_add(e.sgpa.saturating_mul(w)),
                weight.saturating_add(w),
                count + 1,
            )
        })
}

fn evaluate(entries: &[SemesterEntry], is_lateral_entry: bool) -> (CgpaResult, Decimal, Decimal) {
    let considered = considered_entries(entries, is_lateral_entry);
    let mode = CgpaMode::detect(considered);
    let (sum, weight, count) = accumulate(considered, mode);

    let cgpa = if weight.is_zero() {
        Decimal::ZERO
    } else {
        round_reported(sum / weight)
    };

    (
        CgpaResult {
            cgpa,
            mode,
            semesters_counted: count,
        },
        sum,
        weight,
    )
}

/// Computes the CGPA of a list of semesters.
///
/// When every entry left after the lateral-entry exclusion carries credits,
/// the average is credit-weighted (see [`CgpaMode::detect`]); otherwise the
/// eligible SGPAs are averaged plainly.
/// Returns zero when no semester is eligible.
///
/// # Examples
///
/// ```
/// use gpa_engine::calculation::compute_cgpa;
/// use gpa_engine::models::SemesterEntry;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let semesters: Vec<SemesterEntry> = [0, 0, 8, 9]
///     .into_iter()
///     .map(|sgpa| SemesterEntry::new(Decimal::from(sgpa)))
///     .collect();
///
/// assert_eq!(compute_cgpa(&semesters, true), Decimal::from_str("8.5").unwrap());
/// assert_eq!(compute_cgpa(&[], false), Decimal::ZERO);
/// ```
pub fn compute_cgpa(entries: &[SemesterEntry], is_lateral_entry: bool) -> Decimal {
    evaluate(entries, is_lateral_entry).0.cgpa
}

/// The result of a CGPA calculation, including the audit steps.
#[derive(Debug, Clone)]
pub struct CgpaCalculation {
    /// The cumulative result.
    pub result: CgpaResult,
    /// Lateral-entry exclusion (when applicable), then the averaging step.
    pub audit_steps: Vec<AuditStep>,
}

/// Computes the CGPA and records each decision.
///
/// The CGPA equals [`compute_cgpa`] for the same input.
pub fn calculate_cgpa(
    entries: &[SemesterEntry],
    is_lateral_entry: bool,
    step_number: u32,
) -> CgpaCalculation {
    let (result, sum, weight) = evaluate(entries, is_lateral_entry);
    let mut audit_steps = Vec::with_capacity(2);
    let mut next_step = step_number;

    if is_lateral_entry {
        let skipped = entries.len().min(LATERAL_ENTRY_SKIPPED_SEMESTERS);
        audit_steps.push(AuditStep {
            step_number: next_step,
            rule_id: "lateral_entry_exclusion".to_string(),
            rule_name: "Lateral Entry Exclusion".to_string(),
            policy_ref: "cgpa.lateral_entry".to_string(),
            input: serde_json::json!({
                "semesters": entries.len(),
                "is_lateral_entry": true
            }),
            output: serde_json::json!({
                "skipped_semesters": skipped,
                "remaining_semesters": entries.len() - skipped
            }),
            reasoning: format!(
                "Lateral entry begins in semester {}; first {} of {} semesters excluded",
                LATERAL_ENTRY_SKIPPED_SEMESTERS + 1,
                skipped,
                entries.len()
            ),
        });
        next_step += 1;
    }

    let (rule_id, rule_name) = match result.mode {
        CgpaMode::Unweighted => ("cgpa_mean", "CGPA Mean"),
        CgpaMode::CreditWeighted => ("cgpa_credit_weighted", "CGPA Credit-Weighted Mean"),
    };

    let reasoning = if result.semesters_counted == 0 {
        "No semester has a result; CGPA is 0".to_string()
    } else {
        match result.mode {
            CgpaMode::Unweighted => format!(
                "{} total SGPA / {} semesters = {}",
                sum.normalize(),
                result.semesters_counted,
                result.cgpa.normalize()
            ),
            CgpaMode::CreditWeighted => format!(
                "{} credit-weighted SGPA / {} credits = {}",
                sum.normalize(),
                weight.normalize(),
                result.cgpa.normalize()
            ),
        }
    };

    audit_steps.push(AuditStep {
        step_number: next_step,
        rule_id: rule_id.to_string(),
        rule_name: rule_name.to_string(),
        policy_ref: "cgpa".to_string(),
        input: serde_json::json!({
            "semesters": considered_entries(entries, is_lateral_entry).len(),
            "mode": result.mode
        }),
        output: serde_json::json!({
            "cgpa": result.cgpa.normalize().to_string(),
            "semesters_counted": result.semesters_counted
        }),
        reasoning,
    });

    CgpaCalculation {
        result,
        audit_steps,
    }
}
