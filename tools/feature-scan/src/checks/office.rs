use super::catalog::{CheckId, Section};
use super::primitives::{flag_missing_keywords, require_attribute};
use super::{Checks, Outcome, Partitions};
use crate::flags::{Finding, Severity};
use crate::report::RuleReport;
use crate::selector;

/// Object types the office does not accept in a survey submission.
pub const PROHIBITED_TYPES: &[&str] = &[
    "DRGARE", "LOGPON", "PIPARE", "PIPOHD", "PIPSOL", "DMPGRD", "LIGHTS", "BOYLAT", "BOYSAW",
    "BOYSPP", "DAYMAR", "FOGSIG", "CBLSUB", "CBLARE", "FAIRWY", "RTPBCN", "BOYISD", "BOYINB",
    "BOYCAR", "CBLOHD", "BCNSPP", "BCNLAT", "BRIDGE",
];

/// Charting actions a blue note must name.
pub const BLUE_NOTE_KEYWORDS: &[&str] = &["Add", "Delete", "Modify", "Retain"];

impl<R: RuleReport> Checks<R> {
    pub fn office_only(&mut self, parts: &Partitions<'_>) {
        if !self.config.is_office() {
            return;
        }
        self.open_section(Section::Office);

        self.run_check(CheckId::OfficeProhibited, |_| {
            let findings = selector::by_object_type(&parts.all, PROHIBITED_TYPES)
                .into_iter()
                .map(|f| Finding::error(f, format!("prohibited feature {}", f.acronym())))
                .collect();
            Outcome::new(findings, "of a prohibited object type")
        });

        let blue_notes = selector::by_object_type(&parts.all, &["$CSYMB"]);
        self.run_check(CheckId::OfficeBlueNotesNinfom, |_| {
            require_attribute(&blue_notes, "NINFOM", Severity::Error)
        });
        self.run_check(CheckId::OfficeBlueNotesKeyword, |_| {
            flag_missing_keywords(&blue_notes, "NINFOM", BLUE_NOTE_KEYWORDS, Severity::Error)
        });

        let quality = selector::by_object_type(&parts.all, &["M_QUAL"]);
        for (id, attribute) in [
            (CheckId::OfficeMqualCatzoc, "CATZOC"),
            (CheckId::OfficeMqualSursta, "SURSTA"),
            (CheckId::OfficeMqualSurend, "SUREND"),
            (CheckId::OfficeMqualTecsou, "TECSOU"),
        ] {
            self.run_check(id, |_| require_attribute(&quality, attribute, Severity::Error));
        }
    }
}
