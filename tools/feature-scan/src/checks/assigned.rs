use super::catalog::{CheckId, Section};
use super::primitives::{flag_attribute_value, require_attribute};
use super::{Checks, Partitions};
use crate::flags::Severity;
use crate::report::RuleReport;

impl<R: RuleReport> Checks<R> {
    /// Features assigned to the field unit (`asgnmt = 2`).
    pub fn assigned_features(&mut self, parts: &Partitions<'_>) {
        self.open_section(Section::Assigned);
        self.run_check(CheckId::AssignedDescription, |_| {
            flag_attribute_value(&parts.assigned, "descrp", &[""], true, Severity::Error)
        });
        self.run_check(CheckId::AssignedRemarks, |_| {
            require_attribute(&parts.assigned, "remrks", Severity::Error)
        });
    }
}
