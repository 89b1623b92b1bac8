//! Per-object-type rules over the new or updated features.

use super::catalog::{CheckId, DepthCheckIds, Section, OBSTRN_DEPTH, ROCKS_DEPTH, WRECKS_DEPTH};
use super::combinations::{check_natsur_natqua, check_tecsou_quasou, check_value_balance};
use super::depth::{check_elevat, check_watlev, elevat_threshold, DepthBands};
use super::primitives::{flag_attribute_value, forbid_attribute, require_attribute};
use super::{Checks, Partitions};
use crate::feature::Feature;
use crate::flags::Severity;
use crate::report::RuleReport;
use crate::selector;

/// Codes that contradict an unknown depth: WATLEV and TECSOU must stay empty
/// and QUASOU must read 2 ("depth unknown").
const UNKNOWN_WATLEV_PROHIBITED: &[&str] = &["1", "2", "3", "4", "5", "6", "7"];
const UNKNOWN_TECSOU_PROHIBITED: &[&str] = &[
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14",
];
const UNKNOWN_QUASOU_PROHIBITED: &[&str] =
    &["", "1", "3", "4", "5", "6", "7", "8", "9", "10", "11"];

const FOUL_CATOBS: &str = "6";

impl<R: RuleReport> Checks<R> {
    pub fn soundings(&mut self, parts: &Partitions<'_>) {
        self.open_section(Section::Soundings);
        let soundings = selector::by_object_type(&parts.new_or_updated, &["SOUNDG"]);
        self.run_check(CheckId::SoundingsTecsou, |_| {
            require_attribute(&soundings, "TECSOU", Severity::Error)
        });
        self.run_check(CheckId::SoundingsQuasou, |_| {
            require_attribute(&soundings, "QUASOU", Severity::Error)
        });
    }

    /// Dangers to navigation other than wrecks and obstructions, which carry
    /// their own image rules.
    pub fn dtons(&mut self, parts: &Partitions<'_>) {
        self.open_section(Section::Dtons);
        let special = selector::with_attribute_value_in(&parts.new_or_updated, "sftype", &["3"]);
        let dtons = selector::excluding_object_type(&special, &["WRECKS", "OBSTRN"]);
        self.run_check(CheckId::DtonImages, |_| {
            require_attribute(&dtons, "images", Severity::Error)
        });
    }

    pub fn wrecks(&mut self, parts: &Partitions<'_>) {
        self.open_section(Section::Wrecks);
        let wrecks = selector::by_object_type(&parts.new_or_updated, &["WRECKS"]);
        self.run_check(CheckId::WrecksImages, |_| {
            require_attribute(&wrecks, "images", Severity::Error)
        });
        self.run_check(CheckId::WrecksCatwrk, |_| {
            require_attribute(&wrecks, "CATWRK", Severity::Error)
        });
        self.run_check(CheckId::WrecksWatlev, |_| {
            require_attribute(&wrecks, "WATLEV", Severity::Error)
        });
        self.run_check(CheckId::WrecksValsou, |_| {
            require_attribute(&wrecks, "VALSOU", Severity::Error)
        });
        self.depth_rules(&wrecks, WRECKS_DEPTH);
    }

    pub fn rocks(&mut self, parts: &Partitions<'_>) {
        self.open_section(Section::Rocks);
        let rocks = selector::by_object_type(&parts.new_or_updated, &["UWTROC"]);
        self.run_check(CheckId::RocksValsou, |_| {
            require_attribute(&rocks, "VALSOU", Severity::Error)
        });
        self.run_check(CheckId::RocksWatlev, |_| {
            require_attribute(&rocks, "WATLEV", Severity::Error)
        });
        self.depth_rules(&rocks, ROCKS_DEPTH);
    }

    /// Foul areas and lines (`CATOBS = 6`) have no single depth; the point
    /// rules apply to every other obstruction.
    pub fn obstructions(&mut self, parts: &Partitions<'_>) {
        self.open_section(Section::Obstructions);
        let obstructions = selector::by_object_type(&parts.new_or_updated, &["OBSTRN"]);
        let foul = selector::lines_and_areas_only(&selector::with_attribute_value_in(
            &obstructions,
            "CATOBS",
            &[FOUL_CATOBS],
        ));
        let points = selector::points_only(&selector::excluding_by_geometry_match(
            &obstructions,
            &foul,
        ));

        self.run_check(CheckId::ObstrnImages, |_| {
            require_attribute(&points, "images", Severity::Error)
        });
        self.run_check(CheckId::ObstrnValsou, |_| {
            require_attribute(&points, "VALSOU", Severity::Error)
        });
        self.run_check(CheckId::ObstrnWatlev, |_| {
            require_attribute(&points, "WATLEV", Severity::Error)
        });
        self.depth_rules(&obstructions, OBSTRN_DEPTH);
        self.run_check(CheckId::ObstrnFoulValsou, |_| {
            forbid_attribute(&foul, "VALSOU", Severity::Error)
        });
    }

    pub fn platforms(&mut self, parts: &Partitions<'_>) {
        self.open_section(Section::Platforms);
        let platforms = selector::by_object_type(&parts.new_or_updated, &["OFSPLF"]);
        self.run_check(CheckId::PlatformsImages, |_| {
            require_attribute(&platforms, "images", Severity::Error)
        });
    }

    pub fn seabed_areas(&mut self, parts: &Partitions<'_>) {
        self.open_section(Section::SeabedAreas);
        let seabed = selector::by_object_type(&parts.new_or_updated, &["SBDARE"]);
        let points = selector::points_only(&seabed);
        let extents = selector::lines_and_areas_only(&seabed);

        self.run_check(CheckId::SbdareNatsur, |_| {
            require_attribute(&points, "NATSUR", Severity::Error)
        });
        self.run_check(CheckId::SbdareNatsurNatqua, |_| check_natsur_natqua(&points));
        self.run_check(CheckId::SbdareNatquaBalance, |_| {
            check_value_balance(&points, "NATSUR", "NATQUA")
        });
        self.run_check(CheckId::SbdareColourBalance, |_| {
            check_value_balance(&points, "NATSUR", "COLOUR")
        });
        self.run_check(CheckId::SbdareImages, |_| {
            require_attribute(&points, "images", Severity::Error)
        });
        self.run_check(CheckId::SbdareLinesNatsur, |_| {
            require_attribute(&extents, "NATSUR", Severity::Error)
        });
    }

    pub fn moorings(&mut self, parts: &Partitions<'_>) {
        self.open_section(Section::Moorings);
        let moorings = selector::by_object_type(&parts.new_or_updated, &["MORFAC"]);
        self.run_check(CheckId::MooringsCatmor, |_| {
            require_attribute(&moorings, "CATMOR", Severity::Error)
        });
    }

    pub fn coastlines(&mut self, parts: &Partitions<'_>) {
        self.open_section(Section::Coastlines);
        let coastlines = selector::by_object_type(&parts.new_or_updated, &["COALNE"]);
        let constructions = selector::by_object_type(&parts.new_or_updated, &["SLCONS"]);
        self.run_check(CheckId::CoalneCatcoa, |_| {
            require_attribute(&coastlines, "CATCOA", Severity::Error)
        });
        self.run_check(CheckId::SlconsCatslc, |_| {
            require_attribute(&constructions, "CATSLC", Severity::Error)
        });
    }

    pub fn lands(&mut self, parts: &Partitions<'_>) {
        self.open_section(Section::Lands);
        let lands = selector::by_object_type(&parts.new_or_updated, &["LNDARE"]);
        let points = selector::points_only(&lands);

        self.run_check(CheckId::LandsElevat, |_| {
            require_attribute(&points, "ELEVAT", Severity::Warning)
        });
        self.run_check(CheckId::LandsElevatInvalid, |checks| {
            check_elevat(&lands, elevat_threshold(&checks.config, &checks.policy))
        });
        self.run_check(CheckId::LandsValsou, |_| {
            forbid_attribute(&lands, "VALSOU", Severity::Error)
        });
        self.run_check(CheckId::LandsWatlev, |_| {
            forbid_attribute(&lands, "WATLEV", Severity::Error)
        });
    }

    /// Coverage metadata is checked whatever its `descrp`.
    pub fn coverages(&mut self, parts: &Partitions<'_>) {
        self.open_section(Section::Coverages);
        let coverages = selector::by_object_type(&parts.all, &["M_COVR"]);
        self.run_check(CheckId::CoverageCatcov, |_| {
            require_attribute(&coverages, "CATCOV", Severity::Error)
        });
        self.run_check(CheckId::CoverageInform, |_| {
            require_attribute(&coverages, "INFORM", Severity::Error)
        });
    }

    /// TECSOU/QUASOU presence, unknown-depth codes, WATLEV zone and
    /// TECSOU/QUASOU pairing, shared by wrecks, rocks and obstructions.
    fn depth_rules(&mut self, features: &[&Feature], ids: DepthCheckIds) {
        let with_valsou = selector::with_attribute(features, "VALSOU");
        let unknown_depth = selector::with_attribute_value_in(features, "VALSOU", &[""]);

        self.run_check(ids.tecsou, |_| {
            require_attribute(&with_valsou, "TECSOU", Severity::Error)
        });
        self.run_check(ids.quasou, |_| {
            require_attribute(&with_valsou, "QUASOU", Severity::Error)
        });
        self.run_check(ids.unknown_watlev, |_| {
            flag_attribute_value(
                &unknown_depth,
                "WATLEV",
                UNKNOWN_WATLEV_PROHIBITED,
                true,
                Severity::Error,
            )
        });
        self.run_check(ids.unknown_tecsou, |_| {
            flag_attribute_value(
                &unknown_depth,
                "TECSOU",
                UNKNOWN_TECSOU_PROHIBITED,
                true,
                Severity::Error,
            )
        });
        self.run_check(ids.unknown_quasou, |_| {
            flag_attribute_value(
                &unknown_depth,
                "QUASOU",
                UNKNOWN_QUASOU_PROHIBITED,
                true,
                Severity::Error,
            )
        });
        self.run_check(ids.watlev_depth, |checks| {
            check_watlev(features, &DepthBands::new(&checks.config, &checks.policy))
        });
        self.run_check(ids.pairs, |_| check_tecsou_quasou(features));
    }
}
