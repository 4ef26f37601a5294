//! Turns a marksheet document into gradable subject records.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::error::EngineResult;
use crate::models::{StudentDetails, SubjectRecord};

use super::credit_fallback::CreditHeuristic;
use super::traits::{CreditLookup, MarksheetExtractor};
use super::types::{ExtractedSubject, MarksheetDocument};

/// A marksheet with credits attached, ready for grading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedSemester {
    /// Student identification read from the marksheet.
    pub student: StudentDetails,
    /// Subjects in marksheet order, each with a credit value.
    pub subjects: Vec<SubjectRecord>,
    /// Codes whose credits came from the heuristic rather than the lookup.
    pub heuristic_codes: Vec<String>,
}

/// Attaches credits to extracted subjects.
///
/// Credits come from `looked_up` where the code is present; negative values
/// clamp to zero. Every other subject gets the heuristic default.
///
/// # Examples
///
/// ```
/// use gpa_engine::external::{assign_credits, CreditHeuristic, ExtractedSubject};
/// use std::collections::HashMap;
///
/// let subjects = vec![
///     ExtractedSubject { subject_code: "BCS401".into(), ..Default::default() },
///     ExtractedSubject { subject_code: "BCSL404".into(), ..Default::default() },
/// ];
/// let looked_up = HashMap::from([("BCS401".to_string(), 4)]);
///
/// let records = assign_credits(&subjects, &looked_up, &CreditHeuristic::default());
/// assert_eq!(records[0].credits, 4);
/// assert_eq!(records[1].credits, 1);
/// ```
pub fn assign_credits(
    subjects: &[ExtractedSubject],
    looked_up: &HashMap<String, i32>,
    heuristic: &CreditHeuristic,
) -> Vec<SubjectRecord> {
    subjects
        .iter()
        .map(|subject| {
            let credits = match looked_up.get(&subject.subject_code) {
                Some(&credits) => credits.max(0),
                None => heuristic.credits_for(&subject.subject_code),
            };
            SubjectRecord {
                subject_name: subject.subject_name.clone(),
                subject_code: subject.subject_code.clone(),
                internal_marks: subject.internal_marks,
                external_marks: subject.external_marks,
                total_marks: subject.total_marks,
                credits,
            }
        })
        .collect()
}

/// Distinct non-empty subject codes, in first-seen order.
fn lookup_codes(subjects: &[ExtractedSubject]) -> Vec<String> {
    let mut codes: Vec<String> = Vec::with_capacity(subjects.len());
    for subject in subjects {
        let code = &subject.subject_code;
        if !code.is_empty() && !codes.contains(code) {
            codes.push(code.clone());
        }
    }
    codes
}

/// Extracts a marksheet and attaches credits to every subject.
///
/// An extraction failure is returned as is. A credit lookup failure is not
/// fatal: it is logged and every subject falls back to the heuristic.
pub async fn prepare_semester(
    extractor: &dyn MarksheetExtractor,
    lookup: &dyn CreditLookup,
    heuristic: &CreditHeuristic,
    document: &MarksheetDocument,
) -> EngineResult<PreparedSemester> {
    let marksheet = extractor.extract(document).await?;
    info!(
        usn = %marksheet.student_details.usn,
        subjects = marksheet.subject_details.len(),
        "Marksheet extracted"
    );

    let codes = lookup_codes(&marksheet.subject_details);
    let looked_up = if codes.is_empty() {
        debug!("No subject codes to look up; using credit heuristic");
        HashMap::new()
    } else {
        match lookup.lookup(&codes).await {
            Ok(credits) => credits,
            Err(e) => {
                warn!(error = %e, "Credit lookup failed; using credit heuristic");
                HashMap::new()
            }
        }
    };

    let heuristic_codes: Vec<String> = marksheet
        .subject_details
        .iter()
        .filter(|s| !looked_up.contains_key(&s.subject_code))
        .map(|s| s.subject_code.clone())
        .collect();
    if !heuristic_codes.is_empty() {
        debug!(codes = ?heuristic_codes, "Credits assigned by heuristic");
    }

    let subjects = assign_credits(&marksheet.subject_details, &looked_up, heuristic);

    Ok(PreparedSemester {
        student: marksheet.student_details,
        subjects,
        heuristic_codes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::external::{ExtractedMarksheet, HeuristicCreditLookup};
    use async_trait::async_trait;
    use rust_decimal::Decimal;

    struct FixedExtractor(ExtractedMarksheet);

    #[async_trait]
    impl MarksheetExtractor for FixedExtractor {
        async fn extract(&self, _document: &MarksheetDocument) -> EngineResult<ExtractedMarksheet> {
            Ok(self.0.clone())
        }
    }

    struct FailingExtractor;

    #[async_trait]
    impl MarksheetExtractor for FailingExtractor {
        async fn extract(&self, _document: &MarksheetDocument) -> EngineResult<ExtractedMarksheet> {
            Err(EngineError::ExtractionFailed {
                message: "image too blurry".to_string(),
            })
        }
    }

    struct FixedLookup(HashMap<String, i32>);

    #[async_trait]
    impl CreditLookup for FixedLookup {
        async fn lookup(&self, codes: &[String]) -> EngineResult<HashMap<String, i32>> {
            Ok(self
                .0
                .iter()
                .filter(|(code, _)| codes.contains(*code))
                .map(|(code, credits)| (code.clone(), *credits))
                .collect())
        }
    }

    struct FailingLookup;

    #[async_trait]
    impl CreditLookup for FailingLookup {
        async fn lookup(&self, _codes: &[String]) -> EngineResult<HashMap<String, i32>> {
            Err(EngineError::CreditLookupFailed {
                message: "service unavailable".to_string(),
            })
        }
    }

    fn subject(code: &str, total: i64) -> ExtractedSubject {
        ExtractedSubject {
            subject_code: code.to_string(),
            total_marks: Decimal::from(total),
            ..Default::default()
        }
    }

    fn marksheet() -> ExtractedMarksheet {
        ExtractedMarksheet {
            student_details: StudentDetails {
                name: "Asha K".to_string(),
                usn: "1RV21CS001".to_string(),
                branch: "CS".to_string(),
                semester: "4".to_string(),
            },
            subject_details: vec![
                subject("BCS401", 84),
                subject("BCSL404", 92),
                subject("", 70),
            ],
        }
    }

    fn document() -> MarksheetDocument {
        MarksheetDocument::new("image/png", "iVBORw0KGgo=")
    }

    #[test]
    fn test_assign_credits_clamps_negative_lookup_values() {
        let looked_up = HashMap::from([("BCS401".to_string(), -2)]);
        let records = assign_credits(&[subject("BCS401", 80)], &looked_up, &CreditHeuristic::default());
        assert_eq!(records[0].credits, 0);
    }

    #[test]
    fn test_assign_credits_preserves_marks_and_order() {
        let records = assign_credits(
            &marksheet().subject_details,
            &HashMap::new(),
            &CreditHeuristic::default(),
        );

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].subject_code, "BCS401");
        assert_eq!(records[0].total_marks, Decimal::from(84));
        assert_eq!(records[2].credits, 3);
    }

    #[test]
    fn test_lookup_codes_skips_empty_and_duplicates() {
        let subjects = vec![subject("BCS401", 1), subject("", 1), subject("BCS401", 1)];
        assert_eq!(lookup_codes(&subjects), vec!["BCS401".to_string()]);
    }

    #[tokio::test]
    async fn test_prepare_semester_uses_lookup_then_heuristic() {
        let extractor = FixedExtractor(marksheet());
        let lookup = FixedLookup(HashMap::from([("BCS401".to_string(), 4)]));

        let prepared = prepare_semester(&extractor, &lookup, &CreditHeuristic::default(), &document())
            .await
            .unwrap();

        assert_eq!(prepared.student.usn, "1RV21CS001");
        assert_eq!(prepared.subjects[0].credits, 4);
        assert_eq!(prepared.subjects[1].credits, 1);
        assert_eq!(prepared.subjects[2].credits, 3);
        assert_eq!(prepared.heuristic_codes, vec!["BCSL404".to_string(), String::new()]);
    }

    #[tokio::test]
    async fn test_prepare_semester_recovers_from_lookup_failure() {
        let extractor = FixedExtractor(marksheet());

        let prepared = prepare_semester(
            &extractor,
            &FailingLookup,
            &CreditHeuristic::default(),
            &document(),
        )
        .await
        .unwrap();

        let credits: Vec<i32> = prepared.subjects.iter().map(|s| s.credits).collect();
        assert_eq!(credits, vec![3, 1, 3]);
        assert_eq!(prepared.heuristic_codes.len(), 3);
    }

    #[tokio::test]
    async fn test_prepare_semester_propagates_extraction_failure() {
        let result = prepare_semester(
            &FailingExtractor,
            &HeuristicCreditLookup::default(),
            &CreditHeuristic::default(),
            &document(),
        )
        .await;

        match result {
            Err(EngineError::ExtractionFailed { message }) => {
                assert_eq!(message, "image too blurry");
            }
            other => panic!("Expected ExtractionFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_prepare_semester_with_empty_marksheet() {
        let extractor = FixedExtractor(ExtractedMarksheet::default());

        let prepared = prepare_semester(
            &extractor,
            &FailingLookup,
            &CreditHeuristic::default(),
            &document(),
        )
        .await
        .unwrap();

        assert!(prepared.subjects.is_empty());
        assert!(prepared.heuristic_codes.is_empty());
    }
}
