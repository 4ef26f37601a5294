//! Configuration loading and management for the GPA engine.
//!
//! This module loads a grading scheme from a directory of YAML files: the
//! scheme metadata with its percentage convention, the grade bands, and the
//! credit defaults used when a subject's credits cannot be looked up.
//!
//! # Example
//!
//! ```no_run
//! use gpa_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/vtu").unwrap();
//! println!("Loaded scheme: {}", config.scheme().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CreditDefaults, GradeBand, GradingConfig, SchemeConfig, SchemeMetadata};
