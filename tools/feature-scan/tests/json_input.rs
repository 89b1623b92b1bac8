use std::fs;

use feature_scan::{scan, CheckConfiguration, CheckId, ConfigError, Feature, Profile};

const FEATURES: &str = r#"[
  {
    "acronym": "WRECKS",
    "centroid": {"x": -70.25, "y": 41.5},
    "geo2s": [{"x": -70.25, "y": 41.5}],
    "attributes": [
      {"acronym": "descrp", "value": "1"},
      {"acronym": "SORIND", "value": "US,US,graph,H13385"},
      {"acronym": "SORDAT", "value": "20200314"},
      {"acronym": "remrks", "value": "found during MBES"},
      {"acronym": "recomd", "value": "chart as wreck"},
      {"acronym": "images", "value": "H13385_000000000000001.jpg"},
      {"acronym": "CATWRK", "value": "2"},
      {"acronym": "VALSOU", "value": "12.3"},
      {"acronym": "WATLEV", "value": "3"},
      {"acronym": "TECSOU", "value": "3"},
      {"acronym": "QUASOU", "value": "6"}
    ]
  },
  {
    "acronym": "M_QUAL",
    "centroid": {"x": -70.0, "y": 41.0},
    "geo2s": [{"x": -70.0, "y": 41.0}, {"x": -70.5, "y": 41.0}, {"x": -70.5, "y": 41.5}],
    "attributes": [{"acronym": "CATZOC", "value": "2"}]
  }
]"#;

#[test]
fn clean_wreck_from_json_is_not_flagged() {
    let folder = tempfile::tempdir().unwrap();
    fs::write(folder.path().join("H13385_000000000000001.jpg"), b"jpg").unwrap();

    let config_text = format!(
        r#"{{"version": 2022, "survey_area": "Atlantic Coast", "profile": "office",
            "use_mhw": true, "mhw_value": 1.2, "multimedia_folder": {}}}"#,
        serde_json::to_string(folder.path()).unwrap()
    );
    let config = CheckConfiguration::from_json(&config_text).unwrap();
    assert_eq!(config.profile, Profile::Office);

    let features: Vec<Feature> = serde_json::from_str(FEATURES).unwrap();
    let result = scan(config, &features).unwrap();

    assert_eq!(result.retained, 2);
    for id in [
        CheckId::WrecksImages,
        CheckId::WrecksWatlevDepth,
        CheckId::WrecksTecsouQuasou,
        CheckId::ImagePaths,
        CheckId::ImageNamesOther,
        CheckId::NewUpdatedSorindInvalid,
        CheckId::NewUpdatedSordatInvalid,
    ] {
        assert_eq!(result.flags.count(id), 0, "{:?}", id);
    }
    assert_eq!(result.flags.count(CheckId::OfficeMqualSursta), 1);
    assert_eq!(result.flags.count(CheckId::OfficeMqualCatzoc), 0);

    let json = result.flags.to_json().unwrap();
    assert!(json.contains("missing SURSTA"));
}

#[test]
fn bad_configuration_is_rejected_before_scanning() {
    let err = CheckConfiguration::from_json(r#"{"version": "2017", "survey_area": "Great Lakes"}"#)
        .unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedVersion(_)));

    let err = CheckConfiguration::from_json(
        r#"{"version": "2022", "survey_area": "Great Lakes", "use_mhw": true, "mhw_value": -1.0}"#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidMhw(_)));
}
