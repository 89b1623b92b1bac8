use super::catalog::{CheckId, Section};
use super::geometry::dedupe_by_geometry;
use super::Checks;
use crate::feature::Feature;
use crate::report::RuleReport;

impl<R: RuleReport> Checks<R> {
    /// Removes redundant and geometry-less features. The returned set is the
    /// input of every later category.
    pub fn file_consistency<'a>(&mut self, features: &[&'a Feature]) -> Vec<&'a Feature> {
        self.open_section(Section::FileConsistency);
        let (kept, outcome) = dedupe_by_geometry(features);
        self.record(CheckId::Redundancy, outcome);
        kept
    }
}
