//! Seams to the services that read marksheets and look up credits.
//!
//! Both services are remote and slow, so the traits are async. The engine
//! itself never calls them; [`prepare_semester`](super::prepare_semester)
//! does, before any grading happens.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::EngineResult;

use super::types::{ExtractedMarksheet, MarksheetDocument};

/// Reads student details and subject marks from a marksheet document.
#[async_trait]
pub trait MarksheetExtractor: Send + Sync {
    /// Extracts the marksheet contents.
    ///
    /// Fails with [`EngineError::ExtractionFailed`](crate::error::EngineError::ExtractionFailed)
    /// when the document cannot be read.
    async fn extract(&self, document: &MarksheetDocument) -> EngineResult<ExtractedMarksheet>;
}

/// Maps subject codes to their official credit values.
#[async_trait]
pub trait CreditLookup: Send + Sync {
    /// Looks up credits for the given codes.
    ///
    /// Codes the service does not know are simply absent from the map.
    async fn lookup(&self, codes: &[String]) -> EngineResult<HashMap<String, i32>>;
}
