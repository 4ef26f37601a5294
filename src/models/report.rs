//! Report models returned to the surrounding application.
//!
//! A report wraps a pure semester or cumulative result with the metadata a
//! document renderer needs: an identifier, a timestamp, the engine version,
//! the grading scheme, and the audit trace.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AuditTrace, CgpaResult, SemesterResult, StudentDetails};

/// The complete result of a semester (SGPA) calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemesterReport {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The grading scheme code the calculation used.
    pub scheme_code: String,
    /// The student the marksheet belongs to, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student: Option<StudentDetails>,
    /// The semester result.
    pub result: SemesterResult,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

/// The complete result of a cumulative (CGPA) calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CgpaReport {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// Whether the first two semesters were excluded as lateral entry.
    pub is_lateral_entry: bool,
    /// The cumulative result.
    pub result: CgpaResult,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
