pub mod checks;
pub mod config;
pub mod error;
pub mod feature;
pub mod flags;
pub mod policy;
pub mod report;
pub mod selector;

pub use checks::catalog::{CheckId, Section};
pub use checks::{Checks, Partitions, ScanResult};
pub use config::{CheckConfiguration, HssdVersion, Profile, SurveyArea};
pub use error::ConfigError;
pub use feature::Feature;
pub use flags::{FlagSink, Severity};
pub use policy::VersionPolicy;
pub use report::{RuleReport, TextReport};

/// Runs every check over `features` with an in-memory text report.
pub fn scan(
    config: CheckConfiguration,
    features: &[Feature],
) -> Result<ScanResult<TextReport>, ConfigError> {
    Ok(Checks::new(config)?.run(features))
}
