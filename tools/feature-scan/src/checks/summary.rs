use super::catalog::{CheckId, Section};
use super::Checks;
use crate::report::RuleReport;

impl<R: RuleReport> Checks<R> {
    /// One line per applicable check, numbered in catalogue order, with the
    /// number of features its bucket holds.
    pub fn summary(&mut self) {
        self.open_section(Section::Summary);
        let applicable: Vec<CheckId> = CheckId::ALL
            .iter()
            .copied()
            .filter(|id| self.applies(*id))
            .collect();
        for (n, id) in applicable.into_iter().enumerate() {
            let line = format!("Check {} - {}: {}", n + 1, id.title(), self.flags.count(id));
            self.report.message(&line);
        }
    }
}
