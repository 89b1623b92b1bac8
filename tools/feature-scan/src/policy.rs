//! Per-year rule deltas.
//!
//! One engine serves every supported HSSD revision; the checks consult the
//! row for the configured year instead of branching on the year directly.

use crate::config::HssdVersion;
use crate::flags::Severity;

#[derive(Debug, Clone, PartialEq)]
pub struct VersionPolicy {
    /// Tolerance around the zero-depth line used by WATLEV and ELEVAT checks.
    pub depth_epsilon: f64,
    /// Whether band upper bounds compare with `<=` (true) or `<` (false).
    pub inclusive_depth_bands: bool,
    /// Accepted lengths of the timestamp token in SBDARE image names.
    pub sbdare_timestamp_lengths: &'static [usize],
    pub image_name_checks: bool,
    /// SORIND must not carry a space after its commas.
    pub sorind_forbids_spaces: bool,
    /// Empty VALSOU requires the "unknown" WATLEV, TECSOU and QUASOU codes.
    pub unknown_valsou_codes: bool,
    /// NATSUR/NATQUA pair table and the NATQUA/COLOUR count balance.
    pub seabed_combinations: bool,
    pub character_limit_check: bool,
    pub new_deleted_images_severity: Severity,
}

impl VersionPolicy {
    pub fn for_version(version: HssdVersion) -> Self {
        match version {
            HssdVersion::Hssd2018 => Self {
                depth_epsilon: 0.1,
                inclusive_depth_bands: false,
                sbdare_timestamp_lengths: &[15],
                image_name_checks: false,
                sorind_forbids_spaces: false,
                unknown_valsou_codes: false,
                seabed_combinations: false,
                character_limit_check: false,
                new_deleted_images_severity: Severity::Warning,
            },
            HssdVersion::Hssd2019 => Self {
                depth_epsilon: 0.1,
                inclusive_depth_bands: false,
                sbdare_timestamp_lengths: &[14],
                image_name_checks: true,
                sorind_forbids_spaces: false,
                unknown_valsou_codes: false,
                seabed_combinations: false,
                character_limit_check: false,
                new_deleted_images_severity: Severity::Warning,
            },
            HssdVersion::Hssd2020 => Self {
                depth_epsilon: 0.1,
                inclusive_depth_bands: true,
                sbdare_timestamp_lengths: &[14, 15],
                image_name_checks: true,
                sorind_forbids_spaces: true,
                unknown_valsou_codes: false,
                seabed_combinations: true,
                character_limit_check: false,
                new_deleted_images_severity: Severity::Warning,
            },
            HssdVersion::Hssd2021 | HssdVersion::Hssd2022 => Self {
                depth_epsilon: 0.1,
                inclusive_depth_bands: true,
                sbdare_timestamp_lengths: &[15],
                image_name_checks: true,
                sorind_forbids_spaces: true,
                unknown_valsou_codes: true,
                seabed_combinations: true,
                character_limit_check: true,
                new_deleted_images_severity: Severity::Error,
            },
        }
    }
}
