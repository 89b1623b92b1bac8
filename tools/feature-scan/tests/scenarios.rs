use std::fs;

use chrono::NaiveDate;
use feature_scan::{
    CheckConfiguration, CheckId, Checks, Feature, HssdVersion, Profile, ScanResult, SurveyArea,
    TextReport,
};

fn run(config: CheckConfiguration, features: &[Feature]) -> ScanResult<TextReport> {
    Checks::new(config)
        .unwrap()
        .with_today(NaiveDate::from_ymd_opt(2022, 6, 15).unwrap())
        .run(features)
}

fn pacific_2022() -> CheckConfiguration {
    CheckConfiguration::new(HssdVersion::Hssd2022, SurveyArea::PacificCoast).with_mhw(1.0)
}

fn wreck(valsou: &str, watlev: &str) -> Feature {
    Feature::point("WRECKS", -122.5, 37.8)
        .with_attribute("descrp", "1")
        .with_attribute("VALSOU", valsou)
        .with_attribute("WATLEV", watlev)
        .with_attribute("TECSOU", "3")
        .with_attribute("QUASOU", "6")
}

#[test]
fn sounding_without_tecsou_and_quasou() {
    let features = vec![Feature::point("SOUNDG", -70.5, 42.1).with_attribute("descrp", "1")];
    let result = run(pacific_2022(), &features);

    assert_eq!(result.flags.count(CheckId::SoundingsTecsou), 1);
    assert_eq!(result.flags.count(CheckId::SoundingsQuasou), 1);
    let entry = &result.flags.flagged()[0];
    assert_eq!((entry.x, entry.y), (-70.5, 42.1));
    assert!(entry.note.contains("missing TECSOU"));
    assert!(entry.note.contains("missing QUASOU"));

    let failed = result.report.failed_checks_in("Soundings");
    assert_eq!(failed.len(), 2);
    assert_eq!(failed[0].messages, vec!["Found 1 feature(s) missing TECSOU"]);
}

#[test]
fn identical_obstructions_are_deduplicated() {
    let features = vec![
        Feature::point("OBSTRN", -70.12345671, 42.0),
        Feature::point("OBSTRN", -70.12345674, 42.0),
    ];
    let result = run(pacific_2022(), &features);

    assert_eq!(result.retained, 1);
    assert_eq!(result.flags.count(CheckId::Redundancy), 1);
    let bucket = result.flags.bucket(CheckId::Redundancy);
    assert_eq!(bucket[0].x, -70.12345674);
}

#[test]
fn awash_wreck_matches_its_band() {
    let features = vec![wreck("-0.05", "5")];
    let result = run(pacific_2022(), &features);
    assert_eq!(result.flags.count(CheckId::WrecksWatlevDepth), 0);
}

#[test]
fn drying_wreck_is_reported_as_islet() {
    let features = vec![wreck("-2.0", "5")];
    let result = run(pacific_2022(), &features);

    assert_eq!(result.flags.count(CheckId::WrecksWatlevDepth), 1);
    let note = &result.flags.flagged()[0].note;
    assert!(note.contains("invalid VALSOU (islet ?)"));
    assert!(!note.contains("invalid WATLEV"));
}

#[test]
fn sbdare_timestamp_length_depends_on_year() {
    let folder = tempfile::tempdir().unwrap();
    let name = "123456_SBDARE_20200101120000.jpg";
    fs::write(folder.path().join(name), b"jpg").unwrap();
    let features = vec![Feature::point("SBDARE", -70.0, 41.0).with_attribute("images", name)];

    let config_2020 = CheckConfiguration::new(HssdVersion::Hssd2020, SurveyArea::AtlanticCoast)
        .with_multimedia_folder(folder.path());
    let result = run(config_2020, &features);
    assert_eq!(result.flags.count(CheckId::ImagePaths), 0);
    assert_eq!(result.flags.count(CheckId::ImageNamesSbdare), 0);

    let config_2021 = CheckConfiguration::new(HssdVersion::Hssd2021, SurveyArea::AtlanticCoast)
        .with_multimedia_folder(folder.path());
    let result = run(config_2021, &features);
    assert_eq!(result.flags.count(CheckId::ImageNamesSbdare), 1);
    assert_eq!(result.flags.flagged()[0].note, "invalid timestamp in filename");
}

#[test]
fn summary_lists_exactly_the_executed_checks() {
    let features = vec![
        wreck("", "3"),
        Feature::point("$CSYMB", 1.0, 1.0).with_attribute("NINFOM", "Delete rock"),
    ];
    for version in HssdVersion::ALL {
        for profile in [Profile::Field, Profile::Office] {
            let config = CheckConfiguration::new(version, SurveyArea::GreatLakes)
                .with_profile(profile);
            let checks = Checks::new(config).unwrap();
            let policy = checks.policy().clone();
            let config = checks.config().clone();
            let result = checks.run(&features);

            let summary = result.report.section_messages("Summary");
            let expected: Vec<CheckId> = CheckId::ALL
                .iter()
                .copied()
                .filter(|id| id.applies(&config, &policy))
                .collect();
            assert_eq!(summary.len(), expected.len());
            let checked: Vec<&str> = result
                .report
                .check_blocks()
                .iter()
                .map(|b| b.title)
                .collect();
            for (line, id) in summary.iter().zip(&expected) {
                assert!(line.contains(id.title()));
                assert!(checked.contains(&id.title()));
            }
            assert_eq!(checked.len(), expected.len());
            assert_eq!(result.executed, expected);
        }
    }
}

#[test]
fn clean_coverage_leaves_no_failed_block_before_the_summary() {
    let features = vec![Feature::polyline("M_COVR", &[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)])
        .with_attribute("CATCOV", "1")
        .with_attribute("INFORM", "survey limits")];
    let config = CheckConfiguration::new(HssdVersion::Hssd2022, SurveyArea::GreatLakes);
    let result = run(config, &features);

    assert!(result.report.failed_checks_in("Meta coverages").is_empty());
    let blocks = result.report.check_blocks();
    let last = blocks.last().unwrap();
    assert_eq!(last.section, "Meta coverages");
    assert_eq!(last.messages, vec!["OK"]);
    assert!(blocks.iter().all(|b| b.is_ok()));
}

#[test]
fn office_checks_only_run_for_office_profile() {
    let features = vec![Feature::point("LIGHTS", -70.0, 41.0)];

    let field = run(pacific_2022(), &features);
    assert_eq!(field.flags.count(CheckId::OfficeProhibited), 0);
    assert!(!field.report.render().contains("Office checks [SECTION]"));

    let office = run(pacific_2022().with_profile(Profile::Office), &features);
    assert_eq!(office.flags.count(CheckId::OfficeProhibited), 1);
    assert!(office.report.render().contains("Office checks [SECTION]"));
}

#[test]
fn unknown_depth_codes_apply_from_2021() {
    let features = vec![Feature::point("UWTROC", -70.0, 41.0)
        .with_attribute("descrp", "2")
        .with_attribute("VALSOU", "")
        .with_attribute("WATLEV", "3")
        .with_attribute("TECSOU", "")
        .with_attribute("QUASOU", "2")];

    let config = CheckConfiguration::new(HssdVersion::Hssd2021, SurveyArea::AtlanticCoast);
    let result = run(config, &features);
    assert_eq!(result.flags.count(CheckId::RocksUnknownWatlev), 1);
    assert_eq!(result.flags.count(CheckId::RocksUnknownTecsou), 0);
    assert_eq!(result.flags.count(CheckId::RocksUnknownQuasou), 0);

    let config = CheckConfiguration::new(HssdVersion::Hssd2020, SurveyArea::AtlanticCoast);
    let result = run(config, &features);
    assert_eq!(result.flags.count(CheckId::RocksUnknownWatlev), 0);
    assert!(!result
        .report
        .render()
        .contains(CheckId::RocksUnknownWatlev.title()));
}

#[test]
fn foul_obstruction_areas_skip_point_rules() {
    let features = vec![
        Feature::polyline("OBSTRN", &[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)])
            .with_attribute("descrp", "1")
            .with_attribute("CATOBS", "6")
            .with_attribute("VALSOU", "4.2"),
        Feature::point("OBSTRN", 5.0, 5.0).with_attribute("descrp", "1"),
    ];
    let result = run(pacific_2022(), &features);

    assert_eq!(result.flags.count(CheckId::ObstrnFoulValsou), 1);
    assert_eq!(result.flags.count(CheckId::ObstrnImages), 1);
    assert_eq!(result.flags.bucket(CheckId::ObstrnImages)[0].x, 5.0);
    assert_eq!(result.flags.count(CheckId::ObstrnValsou), 1);
}

#[test]
fn new_or_deleted_images_severity_follows_year() {
    let features = vec![Feature::point("UWTROC", -70.0, 41.0).with_attribute("descrp", "3")];

    let config = CheckConfiguration::new(HssdVersion::Hssd2019, SurveyArea::AtlanticCoast);
    let result = run(config, &features);
    assert_eq!(result.flags.flagged()[0].note, "warning: missing images");

    let config = CheckConfiguration::new(HssdVersion::Hssd2022, SurveyArea::AtlanticCoast);
    let result = run(config, &features);
    assert_eq!(result.flags.flagged()[0].note, "missing images");
}
