//! HTTP API module for the GPA engine.
//!
//! This module provides the REST endpoints for grading a mark, computing a
//! semester report, converting to a percentage, computing a CGPA, and
//! resolving subject credits.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CgpaRequest, CreditsRequest, GradeRequest, PercentageRequest, SemesterRequest};
pub use response::{ApiError, ApiErrorResponse, CreditsResponse, PercentageResponse};
pub use state::AppState;
