//! Grading policy: marks to letter grades and grade points.
//!
//! The canonical table is evaluated highest band first and the first band
//! whose lower bound the mark reaches wins. Marks above 100 therefore earn
//! the top band, and marks below the lowest bound (negative input) earn the
//! lowest band, so every mark maps to exactly one grade.

use std::collections::HashSet;
use std::sync::LazyLock;

use rust_decimal::Decimal;

use crate::config::GradeBand;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, GradeOutcome, GradedSubject, SgpaClassification, SubjectRecord};

/// Highest grade point value a band may award.
pub const MAX_GRADE_POINTS: u32 = 10;

static CANONICAL: LazyLock<GradingPolicy> = LazyLock::new(GradingPolicy::canonical);

/// A validated grading table.
///
/// # Examples
///
/// ```
/// use gpa_engine::calculation::GradingPolicy;
/// use rust_decimal::Decimal;
///
/// let policy = GradingPolicy::canonical();
/// let outcome = policy.grade_of(Decimal::from(57));
/// assert_eq!(outcome.grade, "B");
/// assert_eq!(outcome.grade_points, 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradingPolicy {
    /// Every band except the lowest, highest `min_marks` first.
    upper: Vec<GradeBand>,
    /// Catches every mark no upper band matched.
    lowest: GradeBand,
}

impl GradingPolicy {
    /// Returns the canonical grading table.
    ///
    /// | Marks      | Grade | Points |
    /// |------------|-------|--------|
    /// | 90 and up  | O     | 10     |
    /// | 80-89      | A+    | 9      |
    /// | 70-79      | A     | 8      |
    /// | 60-69      | B+    | 7      |
    /// | 55-59      | B     | 6      |
    /// | 50-54      | C     | 5      |
    /// | 40-49      | P     | 4      |
    /// | below 40   | F     | 0      |
    pub fn canonical() -> Self {
        let band = |grade: &str, min_marks: i64, points: u32| GradeBand {
            grade: grade.to_string(),
            min_marks: Decimal::from(min_marks),
            points,
        };

        Self {
            upper: vec![
                band("O", 90, 10),
                band("A+", 80, 9),
                band("A", 70, 8),
                band("B+", 60, 7),
                band("B", 55, 6),
                band("C", 50, 5),
                band("P", 40, 4),
            ],
            lowest: band("F", 0, 0),
        }
    }

    /// Builds a policy from bands in any order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidGradingPolicy` if the list is empty, a grade letter is
    /// blank, two bands share a lower bound, or a band awards more than
    /// [`MAX_GRADE_POINTS`].
    pub fn from_bands(mut bands: Vec<GradeBand>) -> EngineResult<Self> {
        if bands.is_empty() {
            return Err(EngineError::InvalidGradingPolicy {
                message: "no grade bands defined".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for band in &bands {
            if band.grade.trim().is_empty() {
                return Err(EngineError::InvalidGradingPolicy {
                    message: format!("band starting at {} has an empty grade", band.min_marks),
                });
            }
            if band.points > MAX_GRADE_POINTS {
                return Err(EngineError::InvalidGradingPolicy {
                    message: format!(
                        "grade '{}' awards {} points, above the maximum of {}",
                        band.grade, band.points, MAX_GRADE_POINTS
                    ),
                });
            }
            if !seen.insert(band.min_marks.normalize()) {
                return Err(EngineError::InvalidGradingPolicy {
                    message: format!("more than one band starts at {} marks", band.min_marks),
                });
            }
        }

        bands.sort_by(|a, b| b.min_marks.cmp(&a.min_marks));
        let Some(lowest) = bands.pop() else {
            return Err(EngineError::InvalidGradingPolicy {
                message: "no grade bands defined".to_string(),
            });
        };

        Ok(Self {
            upper: bands,
            lowest,
        })
    }

    /// Returns all bands, highest first.
    pub fn bands(&self) -> impl Iterator<Item = &GradeBand> {
        self.upper.iter().chain(std::iter::once(&self.lowest))
    }

    /// Returns the band a mark falls into.
    pub fn band_for(&self, total_marks: Decimal) -> &GradeBand {
        self.upper
            .iter()
            .find(|band| total_marks >= band.min_marks)
            .unwrap_or(&self.lowest)
    }

    /// Returns the grade and grade points for a mark.
    pub fn grade_of(&self, total_marks: Decimal) -> GradeOutcome {
        let band = self.band_for(total_marks);
        GradeOutcome::new(band.grade.clone(), band.points)
    }

    /// Returns the grade points for a mark.
    pub fn points_for(&self, total_marks: Decimal) -> u32 {
        self.band_for(total_marks).points
    }
}

impl Default for GradingPolicy {
    fn default() -> Self {
        Self::canonical()
    }
}

/// Grades a mark with the canonical table.
///
/// # Examples
///
/// ```
/// use gpa_engine::calculation::grade_of;
/// use rust_decimal::Decimal;
///
/// assert_eq!(grade_of(Decimal::from(89)).grade, "A+");
/// assert_eq!(grade_of(Decimal::from(90)).grade_points, 10);
/// assert_eq!(grade_of(Decimal::from(-5)).grade, "F");
/// ```
pub fn grade_of(total_marks: Decimal) -> GradeOutcome {
    CANONICAL.grade_of(total_marks)
}

/// Returns a shared instance of the canonical table.
pub(crate) fn canonical_policy() -> &'static GradingPolicy {
    &CANONICAL
}

/// Returns the descriptive standing for an SGPA.
///
/// # Examples
///
/// ```
/// use gpa_engine::calculation::classify_sgpa;
/// use gpa_engine::models::SgpaClassification;
/// use rust_decimal::Decimal;
///
/// assert_eq!(classify_sgpa(Decimal::new(95, 1)), SgpaClassification::Outstanding);
/// assert_eq!(classify_sgpa(Decimal::new(394, 2)), SgpaClassification::Fail);
/// ```
pub fn classify_sgpa(sgpa: Decimal) -> SgpaClassification {
    let thresholds = [
        (Decimal::new(95, 1), SgpaClassification::Outstanding),
        (Decimal::new(85, 1), SgpaClassification::Excellent),
        (Decimal::new(75, 1), SgpaClassification::VeryGood),
        (Decimal::new(65, 1), SgpaClassification::Good),
        (Decimal::new(55, 1), SgpaClassification::AboveAverage),
        (Decimal::new(45, 1), SgpaClassification::Average),
        (Decimal::new(40, 1), SgpaClassification::Pass),
    ];

    thresholds
        .into_iter()
        .find(|(min, _)| sgpa >= *min)
        .map_or(SgpaClassification::Fail, |(_, class)| class)
}

/// The result of grading one subject, including the audit step.
#[derive(Debug, Clone)]
pub struct SubjectGradingResult {
    /// The subject with its grade attached.
    pub graded: GradedSubject,
    /// The audit step recording this lookup.
    pub audit_step: AuditStep,
}

/// Grades a subject and records the band lookup.
pub fn grade_subject(
    subject: &SubjectRecord,
    policy: &GradingPolicy,
    step_number: u32,
) -> SubjectGradingResult {
    let band = policy.band_for(subject.total_marks);
    let marks = subject.total_marks.normalize();

    let reasoning = if subject.total_marks >= band.min_marks {
        format!(
            "{} marks reaches the {} band (from {}): {} points",
            marks,
            band.grade,
            band.min_marks.normalize(),
            band.points
        )
    } else {
        format!(
            "{} marks is below every band; lowest band {} applies: {} points",
            marks, band.grade, band.points
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "grade_lookup".to_string(),
        rule_name: "Grade Lookup".to_string(),
        policy_ref: "grading".to_string(),
        input: serde_json::json!({
            "subject_code": subject.subject_code,
            "total_marks": marks.to_string()
        }),
        output: serde_json::json!({
            "grade": band.grade,
            "grade_points": band.points
        }),
        reasoning,
    };

    SubjectGradingResult {
        graded: GradedSubject {
            subject: subject.clone(),
            grade: band.grade.clone(),
            grade_points: band.points,
        },
        audit_step,
    }
}
