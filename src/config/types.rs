//! Configuration types for grading schemes.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{GradingPolicy, PercentageStrategy};
use crate::external::CreditHeuristic;

/// Metadata about the grading scheme, from `scheme.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemeMetadata {
    /// Short scheme code (e.g., "VTU").
    pub code: String,
    /// The human-readable name of the scheme.
    pub name: String,
    /// The version or regulation year of the scheme.
    pub version: String,
    /// URL to the official regulation document.
    pub source_url: String,
    /// The percentage convention reported alongside SGPA.
    pub percentage_strategy: PercentageStrategy,
}

/// One row of the grading table.
///
/// A mark earns this band when it is at least `min_marks` and no higher
/// band matched first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeBand {
    /// The letter grade awarded.
    pub grade: String,
    /// Inclusive lower bound in marks.
    pub min_marks: Decimal,
    /// Grade points awarded, 0-10.
    pub points: u32,
}

/// Grading table file structure, from `grading.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct GradingConfig {
    /// The grade bands in any order.
    pub bands: Vec<GradeBand>,
}

/// Default credit weights used when the credit lookup has no answer,
/// from `credits.yaml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditDefaults {
    /// Laboratory subjects.
    pub lab: i32,
    /// Project work and internships.
    pub project: i32,
    /// Mathematics subjects.
    pub mathematics: i32,
    /// Every other (theory) subject.
    pub theory: i32,
}

impl Default for CreditDefaults {
    fn default() -> Self {
        Self {
            lab: 1,
            project: 6,
            mathematics: 4,
            theory: 3,
        }
    }
}

/// The complete grading scheme loaded from YAML files.
#[derive(Debug, Clone)]
pub struct SchemeConfig {
    /// Scheme metadata.
    metadata: SchemeMetadata,
    /// The validated grading table.
    grading: GradingPolicy,
    /// Credit fallback policy.
    credit_heuristic: CreditHeuristic,
}

impl SchemeConfig {
    /// Creates a new SchemeConfig from its component parts.
    pub fn new(
        metadata: SchemeMetadata,
        grading: GradingPolicy,
        credit_defaults: CreditDefaults,
    ) -> Self {
        Self {
            metadata,
            grading,
            credit_heuristic: CreditHeuristic::new(credit_defaults),
        }
    }

    /// Returns the scheme metadata.
    pub fn scheme(&self) -> &SchemeMetadata {
        &self.metadata
    }

    /// Returns the grading policy.
    pub fn grading(&self) -> &GradingPolicy {
        &self.grading
    }

    /// Returns the configured percentage strategy.
    pub fn percentage_strategy(&self) -> PercentageStrategy {
        self.metadata.percentage_strategy
    }

    /// Returns the credit fallback policy.
    pub fn credit_heuristic(&self) -> &CreditHeuristic {
        &self.credit_heuristic
    }
}
