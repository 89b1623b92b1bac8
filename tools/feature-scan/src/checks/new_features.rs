use super::catalog::{CheckId, Section};
use super::images::{check_image_names, check_image_paths};
use super::primitives::{flag_text_over_limit, require_attribute};
use super::source::{check_sordat, check_sorind};
use super::{Checks, Partitions};
use crate::flags::Severity;
use crate::report::RuleReport;
use crate::selector;

/// Free-text attributes subject to the character limit.
pub const TEXT_ATTRIBUTES: &[&str] = &[
    "INFORM", "NINFOM", "OBJNAM", "NOBJNM", "remrks", "recomd", "onotes",
];

impl<R: RuleReport> Checks<R> {
    pub fn new_or_updated_features(&mut self, parts: &Partitions<'_>) {
        self.open_section(Section::NewOrUpdated);
        let features = &parts.new_or_updated;

        self.run_check(CheckId::NewUpdatedSorind, |_| {
            require_attribute(features, "SORIND", Severity::Error)
        });
        self.run_check(CheckId::NewUpdatedSorindInvalid, |checks| {
            check_sorind(
                features,
                checks.config.sorind.as_deref(),
                checks.policy.sorind_forbids_spaces,
            )
        });
        self.run_check(CheckId::NewUpdatedSordat, |_| {
            require_attribute(features, "SORDAT", Severity::Error)
        });
        self.run_check(CheckId::NewUpdatedSordatInvalid, |checks| {
            check_sordat(features, checks.config.sordat.as_deref(), checks.today)
        });
        self.run_check(CheckId::NewUpdatedRemarks, |_| {
            require_attribute(features, "remrks", Severity::Error)
        });
        self.run_check(CheckId::NewUpdatedRecommendations, |_| {
            require_attribute(features, "recomd", Severity::Error)
        });
        self.run_check(CheckId::NewUpdatedTextLength, |checks| {
            flag_text_over_limit(features, TEXT_ATTRIBUTES, checks.config.character_limit)
        });
    }

    /// Soundings are exempt: they are never photographed.
    pub fn new_or_deleted_features(&mut self, parts: &Partitions<'_>) {
        self.open_section(Section::NewOrDeleted);
        let features = selector::excluding_object_type(&parts.new_or_deleted, &["SOUNDG"]);
        self.run_check(CheckId::NewDeletedImages, |checks| {
            require_attribute(&features, "images", checks.policy.new_deleted_images_severity)
        });
    }

    pub fn images(&mut self, parts: &Partitions<'_>) {
        self.open_section(Section::Images);
        let with_images = selector::with_attribute(&parts.all, "images");
        let sbdare = selector::by_object_type(&with_images, &["SBDARE"]);
        let others = selector::excluding_object_type(&with_images, &["SBDARE"]);

        self.run_check(CheckId::ImagePaths, |checks| {
            check_image_paths(&with_images, checks.config.multimedia_folder.as_deref())
        });
        self.run_check(CheckId::ImageNamesSbdare, |checks| {
            check_image_names(&sbdare, true, checks.policy.sbdare_timestamp_lengths)
        });
        self.run_check(CheckId::ImageNamesOther, |checks| {
            check_image_names(&others, false, checks.policy.sbdare_timestamp_lengths)
        });
    }
}
