//! Semester result assembly.
//!
//! Grades every subject, averages the grade points, converts to a percentage
//! under the scheme's strategy and classifies the SGPA.

use crate::models::{AuditStep, AuditWarning, SemesterResult, SubjectRecord};

use super::grading::{GradingPolicy, classify_sgpa};
use super::percentage::{PercentageStrategy, calculate_percentage};
use super::sgpa::calculate_sgpa;

/// A semester result together with its audit steps and warnings.
#[derive(Debug, Clone)]
pub struct SemesterCalculation {
    /// The semester result.
    pub result: SemesterResult,
    /// Grade lookups, the SGPA average, then the percentage conversion.
    pub audit_steps: Vec<AuditStep>,
    /// Warnings raised while grading.
    pub warnings: Vec<AuditWarning>,
}

/// Calculates a full semester result.
///
/// # Examples
///
/// ```
/// use gpa_engine::calculation::{calculate_semester, GradingPolicy, PercentageStrategy};
/// use gpa_engine::models::{SgpaClassification, SubjectRecord};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let subjects = vec![
///     SubjectRecord::new(Decimal::from(90), 4),
///     SubjectRecord::new(Decimal::from(80), 3),
/// ];
/// let calc = calculate_semester(
///     &subjects,
///     &GradingPolicy::canonical(),
///     PercentageStrategy::SgpaBased,
///     1,
/// );
///
/// assert_eq!(calc.result.sgpa, Decimal::from_str("9.57").unwrap());
/// assert_eq!(calc.result.percentage, Decimal::from_str("88.2").unwrap());
/// assert_eq!(calc.result.classification, SgpaClassification::Outstanding);
/// ```
pub fn calculate_semester(
    subjects: &[SubjectRecord],
    policy: &GradingPolicy,
    strategy: PercentageStrategy,
    step_number: u32,
) -> SemesterCalculation {
    let sgpa = calculate_sgpa(subjects, policy, step_number);
    let next_step = step_number + sgpa.audit_steps.len() as u32;

    let percentage = calculate_percentage(strategy.input_for(subjects, sgpa.sgpa), next_step);

    let mut audit_steps = sgpa.audit_steps;
    audit_steps.push(percentage.audit_step);

    SemesterCalculation {
        result: SemesterResult {
            sgpa: sgpa.sgpa,
            total_credits_earned: sgpa.total_credits,
            percentage: percentage.percentage,
            percentage_strategy: percentage.strategy,
            classification: classify_sgpa(sgpa.sgpa),
            subjects: sgpa.graded_subjects,
        },
        audit_steps,
        warnings: sgpa.warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SgpaClassification;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn subjects() -> Vec<SubjectRecord> {
        vec![
            SubjectRecord::new(dec("84"), 4),
            SubjectRecord::new(dec("76"), 4),
            SubjectRecord::new(dec("92"), 3),
            SubjectRecord::new(dec("63"), 3),
        ]
    }

    #[test]
    fn test_mark_based_semester() {
        let calc = calculate_semester(
            &subjects(),
            &GradingPolicy::canonical(),
            PercentageStrategy::MarkBased,
            1,
        );

        // 36 + 32 + 30 + 21 = 119 / 14 = 8.5
        assert_eq!(calc.result.sgpa, dec("8.5"));
        assert_eq!(calc.result.total_credits_earned, 14);
        // 315 / 400
        assert_eq!(calc.result.percentage, dec("78.75"));
        assert_eq!(calc.result.percentage_strategy, PercentageStrategy::MarkBased);
        assert_eq!(calc.result.classification, SgpaClassification::Excellent);
        assert_eq!(calc.result.subjects.len(), 4);
    }

    #[test]
    fn test_sgpa_based_semester() {
        let calc = calculate_semester(
            &subjects(),
            &GradingPolicy::canonical(),
            PercentageStrategy::SgpaBased,
            1,
        );

        assert_eq!(calc.result.percentage, dec("77.5"));
        assert_eq!(calc.result.percentage_strategy, PercentageStrategy::SgpaBased);
    }

    #[test]
    fn test_audit_steps_are_numbered_through_percentage() {
        let calc = calculate_semester(
            &subjects(),
            &GradingPolicy::canonical(),
            PercentageStrategy::SgpaBased,
            1,
        );

        let numbers: Vec<u32> = calc.audit_steps.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(calc.audit_steps[4].rule_id, "sgpa_weighted_average");
        assert_eq!(calc.audit_steps[5].rule_id, "percentage_sgpa_based");
    }

    #[test]
    fn test_empty_semester() {
        let calc = calculate_semester(
            &[],
            &GradingPolicy::canonical(),
            PercentageStrategy::SgpaBased,
            1,
        );

        assert_eq!(calc.result.sgpa, Decimal::ZERO);
        assert_eq!(calc.result.percentage, Decimal::ZERO);
        assert_eq!(calc.result.classification, SgpaClassification::Fail);
        assert!(calc.warnings.is_empty());
    }
}
