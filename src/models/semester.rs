//! Semester-level input and result types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::PercentageStrategy;

use super::{GradedSubject, SgpaClassification};

/// The outcome of grading one semester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemesterResult {
    /// Credit-weighted grade point average, rounded to 2 decimal places.
    pub sgpa: Decimal,
    /// Sum of the positive credits that entered the average.
    pub total_credits_earned: u64,
    /// Equivalent percentage under `percentage_strategy`.
    pub percentage: Decimal,
    /// Which percentage convention produced `percentage`.
    pub percentage_strategy: PercentageStrategy,
    /// Descriptive standing for `sgpa`.
    pub classification: SgpaClassification,
    /// Every input subject with its grade, in input order.
    pub subjects: Vec<GradedSubject>,
}

/// One semester's SGPA as input to the CGPA engine.
///
/// # Examples
///
/// ```
/// use gpa_engine::models::SemesterEntry;
/// use rust_decimal::Decimal;
///
/// let plain = SemesterEntry::new(Decimal::new(85, 1));
/// assert_eq!(plain.credits, None);
///
/// let weighted = SemesterEntry::with_credits(Decimal::new(85, 1), 20);
/// assert_eq!(weighted.credits, Some(20));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemesterEntry {
    /// The semester's SGPA; zero marks a semester with no result yet.
    pub sgpa: Decimal,
    /// Credits registered in the semester, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits: Option<i32>,
}

impl SemesterEntry {
    /// Creates an entry without a credit weight.
    pub fn new(sgpa: Decimal) -> Self {
        Self { sgpa, credits: None }
    }

    /// Creates an entry weighted by `credits`.
    pub fn with_credits(sgpa: Decimal, credits: i32) -> Self {
        Self {
            sgpa,
            credits: Some(credits),
        }
    }
}

/// How semester SGPAs are combined into a CGPA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CgpaMode {
    /// Arithmetic mean of the eligible SGPAs.
    Unweighted,
    /// Mean of the eligible SGPAs weighted by semester credits.
    CreditWeighted,
}

impl CgpaMode {
    /// Chooses the mode for a list of entries.
    ///
    /// Credit weighting applies only when the list is non-empty and every
    /// entry carries credits; a single entry without credits makes the whole
    /// list unweighted, since a partial weighting has no meaningful average.
    pub fn detect(entries: &[SemesterEntry]) -> Self {
        if !entries.is_empty() && entries.iter().all(|e| e.credits.is_some()) {
            CgpaMode::CreditWeighted
        } else {
            CgpaMode::Unweighted
        }
    }
}

/// The outcome of a CGPA calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CgpaResult {
    /// Cumulative grade point average, rounded to 2 decimal places.
    pub cgpa: Decimal,
    /// The weighting mode that was applied.
    pub mode: CgpaMode,
    /// Number of semesters that entered the average.
    pub semesters_counted: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_entry_without_credits_deserializes() {
        let entry: SemesterEntry = serde_json::from_str(r#"{"sgpa": "8.25"}"#).unwrap();
        assert_eq!(entry.sgpa, dec("8.25"));
        assert_eq!(entry.credits, None);
    }

    #[test]
    fn test_entry_without_credits_omits_field_when_serialized() {
        let json = serde_json::to_string(&SemesterEntry::new(dec("8.25"))).unwrap();
        assert!(!json.contains("credits"));
    }

    #[test]
    fn test_detect_unweighted_when_credits_absent() {
        let entries = vec![SemesterEntry::new(dec("8")), SemesterEntry::new(dec("9"))];
        assert_eq!(CgpaMode::detect(&entries), CgpaMode::Unweighted);
    }

    #[test]
    fn test_detect_weighted_when_all_entries_carry_credits() {
        let entries = vec![
            SemesterEntry::with_credits(dec("8"), 20),
            SemesterEntry::with_credits(dec("9"), 22),
        ];
        assert_eq!(CgpaMode::detect(&entries), CgpaMode::CreditWeighted);
    }

    #[test]
    fn test_detect_unweighted_when_credits_partially_present() {
        let entries = vec![
            SemesterEntry::with_credits(dec("8"), 20),
            SemesterEntry::new(dec("9")),
        ];
        assert_eq!(CgpaMode::detect(&entries), CgpaMode::Unweighted);
    }

    #[test]
    fn test_detect_unweighted_for_empty_list() {
        assert_eq!(CgpaMode::detect(&[]), CgpaMode::Unweighted);
    }
}
