//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading grading
//! schemes from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::calculation::{GradingPolicy, PercentageStrategy};
use crate::error::{EngineError, EngineResult};
use crate::external::CreditHeuristic;

use super::types::{CreditDefaults, GradingConfig, SchemeConfig, SchemeMetadata};

/// Loads and provides access to a grading scheme.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/vtu/
/// ├── scheme.yaml    # Scheme metadata and percentage strategy
/// ├── grading.yaml   # Grade bands
/// └── credits.yaml   # Credit defaults for the fallback heuristic
/// ```
///
/// # Example
///
/// ```no_run
/// use gpa_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/vtu")?;
/// let outcome = loader.grading().grade_of(Decimal::from(84));
/// println!("{}: {} points", outcome.grade, outcome.grade_points);
/// # Ok::<(), gpa_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: SchemeConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The grade bands do not form a valid grading table
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<SchemeMetadata>(&path.join("scheme.yaml"))?;
        let grading = Self::load_yaml::<GradingConfig>(&path.join("grading.yaml"))?;
        let credits = Self::load_yaml::<CreditDefaults>(&path.join("credits.yaml"))?;

        let band_count = grading.bands.len();
        let policy = GradingPolicy::from_bands(grading.bands)?;

        info!(
            scheme = %metadata.code,
            version = %metadata.version,
            bands = band_count,
            percentage_strategy = ?metadata.percentage_strategy,
            "Grading scheme loaded"
        );

        Ok(Self {
            config: SchemeConfig::new(metadata, policy, credits),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying scheme configuration.
    pub fn config(&self) -> &SchemeConfig {
        &self.config
    }

    /// Returns the scheme metadata.
    pub fn scheme(&self) -> &SchemeMetadata {
        self.config.scheme()
    }

    /// Returns the validated grading table.
    pub fn grading(&self) -> &GradingPolicy {
        self.config.grading()
    }

    /// Returns the percentage convention the scheme reports.
    pub fn percentage_strategy(&self) -> PercentageStrategy {
        self.config.percentage_strategy()
    }

    /// Returns the credit fallback heuristic.
    pub fn credit_heuristic(&self) -> &CreditHeuristic {
        self.config.credit_heuristic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config/vtu"
    }

    /// A scratch scheme directory under the system temp dir.
    struct ScratchScheme {
        dir: PathBuf,
    }

    impl ScratchScheme {
        fn new(name: &str) -> Self {
            let dir = std::env::temp_dir().join(format!(
                "gpa-engine-{}-{}",
                name,
                uuid::Uuid::new_v4()
            ));
            fs::create_dir_all(&dir).unwrap();
            for file in ["scheme.yaml", "grading.yaml", "credits.yaml"] {
                fs::copy(Path::new(config_path()).join(file), dir.join(file)).unwrap();
            }
            Self { dir }
        }

        fn write(&self, file: &str, content: &str) {
            fs::write(self.dir.join(file), content).unwrap();
        }
    }

    impl Drop for ScratchScheme {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.dir);
        }
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.scheme().code, "VTU");
        assert_eq!(loader.percentage_strategy(), PercentageStrategy::MarkBased);
    }

    #[test]
    fn test_loaded_grading_matches_canonical_table() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.grading(), &GradingPolicy::canonical());
    }

    #[test]
    fn test_loaded_credit_defaults() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        assert_eq!(loader.credit_heuristic().defaults(), CreditDefaults::default());
        assert_eq!(loader.credit_heuristic().credits_for("BCSL404"), 1);
        assert_eq!(loader.credit_heuristic().credits_for("BCS401"), 3);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("scheme.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_malformed_yaml_returns_parse_error() {
        let scratch = ScratchScheme::new("malformed");
        scratch.write("credits.yaml", "lab: [unterminated");

        match ConfigLoader::load(&scratch.dir) {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("credits.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_percentage_strategy_returns_parse_error() {
        let scratch = ScratchScheme::new("strategy");
        scratch.write(
            "scheme.yaml",
            "code: X\nname: X\nversion: '1'\nsource_url: ''\npercentage_strategy: cgpa_based\n",
        );

        assert!(matches!(
            ConfigLoader::load(&scratch.dir),
            Err(EngineError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_duplicate_band_returns_invalid_policy() {
        let scratch = ScratchScheme::new("duplicate");
        scratch.write(
            "grading.yaml",
            "bands:\n  - { grade: A, min_marks: 50, points: 8 }\n  - { grade: B, min_marks: 50, points: 6 }\n",
        );

        assert!(matches!(
            ConfigLoader::load(&scratch.dir),
            Err(EngineError::InvalidGradingPolicy { .. })
        ));
    }

    #[test]
    fn test_sgpa_based_scheme_loads() {
        let scratch = ScratchScheme::new("sgpa");
        scratch.write(
            "scheme.yaml",
            "code: VTU-SGPA\nname: VTU\nversion: '2022'\nsource_url: ''\npercentage_strategy: sgpa_based\n",
        );

        let loader = ConfigLoader::load(&scratch.dir).unwrap();
        assert_eq!(loader.percentage_strategy(), PercentageStrategy::SgpaBased);
        assert_eq!(loader.scheme().code, "VTU-SGPA");
    }
}
