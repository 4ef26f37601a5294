//! Pattern-based credit defaults for subjects the lookup cannot resolve.
//!
//! VTU subject codes encode the course type loosely: laboratory courses
//! carry an `L` or end in 4, 6, 7 or 8, project work says so, and
//! mathematics courses contain `MAT`. The rules are checked in that order.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::config::CreditDefaults;
use crate::error::EngineResult;

use super::traits::CreditLookup;

const LAB_CODE_ENDINGS: [char; 4] = ['4', '6', '7', '8'];

/// The kind of course a subject code suggests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CourseKind {
    /// Laboratory course.
    Lab,
    /// Project work or internship.
    Project,
    /// Mathematics course.
    Mathematics,
    /// Any other theory course.
    Theory,
}

impl CourseKind {
    /// Classifies a subject code. An empty code is a theory course.
    ///
    /// # Examples
    ///
    /// ```
    /// use gpa_engine::external::CourseKind;
    ///
    /// assert_eq!(CourseKind::from_code("BCSL305"), CourseKind::Lab);
    /// assert_eq!(CourseKind::from_code("BCS306"), CourseKind::Lab);
    /// assert_eq!(CourseKind::from_code("21PROJECT81"), CourseKind::Project);
    /// assert_eq!(CourseKind::from_code("BMATS101"), CourseKind::Mathematics);
    /// assert_eq!(CourseKind::from_code("BCS401"), CourseKind::Theory);
    /// ```
    pub fn from_code(code: &str) -> Self {
        let code = code.trim().to_uppercase();
        if code.is_empty() {
            return CourseKind::Theory;
        }

        if code.contains('L') || code.ends_with(LAB_CODE_ENDINGS) {
            CourseKind::Lab
        } else if code.contains("PROJECT") {
            CourseKind::Project
        } else if code.contains("MAT") {
            CourseKind::Mathematics
        } else {
            CourseKind::Theory
        }
    }
}

/// Assigns default credits from a subject code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CreditHeuristic {
    defaults: CreditDefaults,
}

impl CreditHeuristic {
    /// Creates a heuristic with the given per-kind defaults.
    pub fn new(defaults: CreditDefaults) -> Self {
        Self { defaults }
    }

    /// Returns the per-kind defaults.
    pub fn defaults(&self) -> CreditDefaults {
        self.defaults
    }

    /// Returns the default credits for a subject code.
    pub fn credits_for(&self, code: &str) -> i32 {
        match CourseKind::from_code(code) {
            CourseKind::Lab => self.defaults.lab,
            CourseKind::Project => self.defaults.project,
            CourseKind::Mathematics => self.defaults.mathematics,
            CourseKind::Theory => self.defaults.theory,
        }
    }
}

/// A [`CreditLookup`] answered entirely by a [`CreditHeuristic`].
///
/// Used when no credit service is configured, and by the `/credits` route.
#[derive(Debug, Clone, Default)]
pub struct HeuristicCreditLookup {
    heuristic: CreditHeuristic,
}

impl HeuristicCreditLookup {
    /// Creates a lookup backed by `heuristic`.
    pub fn new(heuristic: CreditHeuristic) -> Self {
        Self { heuristic }
    }
}

#[async_trait]
impl CreditLookup for HeuristicCreditLookup {
    async fn lookup(&self, codes: &[String]) -> EngineResult<HashMap<String, i32>> {
        Ok(codes
            .iter()
            .map(|code| (code.clone(), self.heuristic.credits_for(code)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heuristic() -> CreditHeuristic {
        CreditHeuristic::new(CreditDefaults::default())
    }

    #[test]
    fn test_lab_codes() {
        let h = heuristic();
        assert_eq!(h.credits_for("BCSL305"), 1);
        assert_eq!(h.credits_for("bcsl305"), 1);
        assert_eq!(h.credits_for("21CSLAB"), 1);
    }

    #[test]
    fn test_lab_code_endings() {
        let h = heuristic();
        assert_eq!(h.credits_for("BCS304"), 1);
        assert_eq!(h.credits_for("BCS306"), 1);
        assert_eq!(h.credits_for("BCS307"), 1);
        assert_eq!(h.credits_for("BCS308"), 1);
    }

    #[test]
    fn test_project_codes() {
        assert_eq!(heuristic().credits_for("21CSPROJECT"), 6);
    }

    #[test]
    fn test_lab_rule_takes_precedence_over_project() {
        // Ends in 8, so it reads as a lab before the project rule is checked.
        assert_eq!(heuristic().credits_for("PROJECT8"), 1);
    }

    #[test]
    fn test_mathematics_codes() {
        let h = heuristic();
        assert_eq!(h.credits_for("BMATS101"), 4);
        assert_eq!(h.credits_for("21MAT31"), 4);
    }

    #[test]
    fn test_lowercase_codes_are_upper_cased_first() {
        let h = heuristic();
        assert_eq!(h.credits_for("21mat31"), 4);
        assert_eq!(h.credits_for("bcsl303"), 1);
        assert_eq!(h.credits_for("bcs401"), 3);
    }

    #[test]
    fn test_theory_codes() {
        let h = heuristic();
        assert_eq!(h.credits_for("BCS401"), 3);
        assert_eq!(h.credits_for("BCS303"), 3);
        assert_eq!(h.credits_for("BCS405"), 3);
    }

    #[test]
    fn test_empty_code_is_theory() {
        assert_eq!(heuristic().credits_for(""), 3);
        assert_eq!(heuristic().credits_for("   "), 3);
    }

    #[test]
    fn test_custom_defaults_are_used() {
        let h = CreditHeuristic::new(CreditDefaults {
            lab: 2,
            project: 10,
            mathematics: 3,
            theory: 4,
        });
        assert_eq!(h.credits_for("BCSL305"), 2);
        assert_eq!(h.credits_for("21CSPROJECT"), 10);
        assert_eq!(h.credits_for("BMATS101"), 3);
        assert_eq!(h.credits_for("BCS401"), 4);
    }

    #[tokio::test]
    async fn test_heuristic_lookup_answers_every_code() {
        let lookup = HeuristicCreditLookup::new(heuristic());
        let codes = vec!["BCS401".to_string(), "BCSL404".to_string()];

        let credits = lookup.lookup(&codes).await.unwrap();

        assert_eq!(credits.len(), 2);
        assert_eq!(credits["BCS401"], 3);
        assert_eq!(credits["BCSL404"], 1);
    }
}
