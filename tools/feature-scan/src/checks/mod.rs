pub mod catalog;
pub mod combinations;
pub mod depth;
pub mod geometry;
pub mod images;
pub mod primitives;
pub mod source;

mod assigned;
mod consistency;
mod new_features;
mod objects;
mod office;
mod summary;

use crate::config::CheckConfiguration;
use crate::error::ConfigError;
use crate::feature::Feature;
use crate::flags::{FlagSink, Finding, Severity};
use crate::policy::VersionPolicy;
use crate::report::{RuleReport, TextReport, OK};
use crate::selector;
use catalog::{CheckId, Section};
use chrono::{Local, NaiveDate};

/// Carto-note object types, never subject to the new/updated rules.
pub const CARTO_TYPES: &[&str] = &["$AREAS", "$LINES", "$CSYMB", "$COMPS", "$TEXTS"];

/// Result of one check call: the findings and the report lines describing
/// them, kept apart so either can be inspected on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub findings: Vec<Finding>,
    pub lines: Vec<String>,
}

impl Outcome {
    /// Builds the report lines from the findings. `described` completes
    /// "Found N feature(s) ...".
    pub fn new(findings: Vec<Finding>, described: &str) -> Self {
        let errors = findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .count();
        let warnings = findings.len() - errors;

        let mut lines = Vec::new();
        if findings.is_empty() {
            lines.push(OK.to_string());
        }
        if errors > 0 {
            lines.push(format!("Found {} feature(s) {}", errors, described));
        }
        if warnings > 0 {
            lines.push(format!("Warning: found {} feature(s) {}", warnings, described));
        }
        Self { findings, lines }
    }

    pub fn is_ok(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Working views of the feature set, derived once after redundancy removal.
#[derive(Debug, Clone)]
pub struct Partitions<'a> {
    pub all: Vec<&'a Feature>,
    pub no_carto: Vec<&'a Feature>,
    pub new_or_updated: Vec<&'a Feature>,
    pub assigned: Vec<&'a Feature>,
    pub new_or_deleted: Vec<&'a Feature>,
}

impl<'a> Partitions<'a> {
    pub fn derive(all: Vec<&'a Feature>) -> Self {
        let no_carto = selector::excluding_object_type(&all, CARTO_TYPES);
        let new_or_updated = selector::with_attribute_value_in(&no_carto, "descrp", &["1", "2"]);
        let new_or_deleted = selector::with_attribute_value_in(&no_carto, "descrp", &["1", "3"]);
        let assigned = selector::with_attribute_value_in(&all, "asgnmt", &["2"]);
        Self {
            all,
            no_carto,
            new_or_updated,
            assigned,
            new_or_deleted,
        }
    }
}

/// What a completed run hands back to the caller.
#[derive(Debug)]
pub struct ScanResult<R> {
    pub flags: FlagSink,
    pub report: R,
    /// Features left after redundancy removal.
    pub retained: usize,
    /// Checks that wrote a `[CHECK]` block, in report order.
    pub executed: Vec<CheckId>,
}

/// The rule engine. One instance serves exactly one run.
pub struct Checks<R: RuleReport = TextReport> {
    config: CheckConfiguration,
    policy: VersionPolicy,
    report: R,
    flags: FlagSink,
    today: NaiveDate,
    executed: Vec<CheckId>,
}

impl Checks<TextReport> {
    pub fn new(config: CheckConfiguration) -> Result<Self, ConfigError> {
        Self::with_report(config, TextReport::new())
    }
}

impl<R: RuleReport> Checks<R> {
    pub fn with_report(config: CheckConfiguration, report: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let policy = VersionPolicy::for_version(config.version);
        Ok(Self {
            config,
            policy,
            report,
            flags: FlagSink::new(),
            today: Local::now().date_naive(),
            executed: Vec::new(),
        })
    }

    /// Pins the date SORDAT values are compared against.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn config(&self) -> &CheckConfiguration {
        &self.config
    }

    pub fn policy(&self) -> &VersionPolicy {
        &self.policy
    }

    pub fn flags(&self) -> &FlagSink {
        &self.flags
    }

    pub fn report(&self) -> &R {
        &self.report
    }

    /// Runs every category in the fixed order and closes with the summary.
    pub fn run(mut self, features: &[Feature]) -> ScanResult<R> {
        tracing::info!(
            version = %self.config.version,
            area = %self.config.survey_area,
            profile = %self.config.profile,
            features = features.len(),
            "starting feature scan"
        );

        let input: Vec<&Feature> = features.iter().collect();
        let all = self.file_consistency(&input);
        let parts = Partitions::derive(all);

        self.assigned_features(&parts);
        self.new_or_updated_features(&parts);
        self.new_or_deleted_features(&parts);
        self.images(&parts);
        self.soundings(&parts);
        self.dtons(&parts);
        self.wrecks(&parts);
        self.rocks(&parts);
        self.obstructions(&parts);
        self.platforms(&parts);
        self.seabed_areas(&parts);
        self.moorings(&parts);
        self.coastlines(&parts);
        self.lands(&parts);
        self.coverages(&parts);
        self.office_only(&parts);
        self.summary();

        tracing::info!(
            flagged_positions = self.flags.flagged().len(),
            retained = parts.all.len(),
            "feature scan complete"
        );

        ScanResult {
            retained: parts.all.len(),
            flags: self.flags,
            report: self.report,
            executed: self.executed,
        }
    }

    fn applies(&self, id: CheckId) -> bool {
        id.applies(&self.config, &self.policy)
    }

    fn open_section(&mut self, section: Section) {
        tracing::debug!(section = section.title(), "running section");
        self.report.section(section.title());
    }

    /// Evaluates `check` when `id` applies to this run and files its outcome.
    fn run_check<F>(&mut self, id: CheckId, check: F)
    where
        F: FnOnce(&Self) -> Outcome,
    {
        if !self.applies(id) {
            return;
        }
        let outcome = check(self);
        self.record(id, outcome);
    }

    fn record(&mut self, id: CheckId, outcome: Outcome) {
        self.report.check(id.title());
        for line in &outcome.lines {
            self.report.message(line);
        }
        for finding in &outcome.findings {
            self.flags.flag(id, finding);
        }
        self.executed.push(id);
    }
}
