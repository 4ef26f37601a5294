//! Core data models for the GPA engine.
//!
//! This module contains all the value types passed into and returned from
//! the grading, SGPA and CGPA calculations.

mod audit;
mod grade;
mod report;
mod semester;
mod student;
mod subject;

pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use grade::{GradeOutcome, SgpaClassification};
pub use report::{CgpaReport, SemesterReport};
pub use semester::{CgpaMode, CgpaResult, SemesterEntry, SemesterResult};
pub use student::StudentDetails;
pub use subject::{GradedSubject, SubjectRecord};
