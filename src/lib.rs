//! Grade, SGPA and CGPA engine for university marksheets
//!
//! This crate maps subject marks to letter grades and grade points, computes
//! credit-weighted semester averages (SGPA), converts them to percentages,
//! and aggregates semesters into a cumulative average (CGPA). The grading
//! scheme is loaded from YAML, and an HTTP API exposes each calculation with
//! a full audit trace.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod external;
pub mod models;
pub mod telemetry;
