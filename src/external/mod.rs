//! Collaborators that feed the engine: marksheet extraction and credit lookup.
//!
//! The engine grades [`SubjectRecord`](crate::models::SubjectRecord)s. Getting
//! there from a photographed marksheet takes two remote services, modelled as
//! the [`MarksheetExtractor`] and [`CreditLookup`] traits, plus a
//! [`CreditHeuristic`] for codes the lookup cannot answer.
//!
//! # Example
//!
//! ```
//! use gpa_engine::external::{CreditHeuristic, CreditLookup, HeuristicCreditLookup};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let lookup = HeuristicCreditLookup::new(CreditHeuristic::default());
//! let credits = lookup.lookup(&["BCSL404".to_string()]).await.unwrap();
//! assert_eq!(credits["BCSL404"], 1);
//! # }
//! ```

mod credit_fallback;
mod pipeline;
mod traits;
mod types;

pub use credit_fallback::{CourseKind, CreditHeuristic, HeuristicCreditLookup};
pub use pipeline::{PreparedSemester, assign_credits, prepare_semester};
pub use traits::{CreditLookup, MarksheetExtractor};
pub use types::{ExtractedMarksheet, ExtractedSubject, MarksheetDocument};
