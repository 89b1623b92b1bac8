//! Depth-zone classification of WATLEV against VALSOU, and ELEVAT validity.

use super::Outcome;
use crate::config::CheckConfiguration;
use crate::feature::Feature;
use crate::flags::Finding;
use crate::policy::VersionPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthZone {
    /// Shoaler than the lower boundary: the feature is land, not a hazard.
    Islet,
    CoversAndUncovers,
    Awash,
    AlwaysUnderwater,
}

impl DepthZone {
    /// WATLEV code expected for the zone; islets have none.
    pub fn watlev(self) -> Option<u8> {
        match self {
            DepthZone::Islet => None,
            DepthZone::CoversAndUncovers => Some(4),
            DepthZone::Awash => Some(5),
            DepthZone::AlwaysUnderwater => Some(3),
        }
    }

    fn label(self) -> &'static str {
        match self {
            DepthZone::Islet => "islet",
            DepthZone::CoversAndUncovers => "covers and uncovers",
            DepthZone::Awash => "awash",
            DepthZone::AlwaysUnderwater => "always underwater",
        }
    }
}

/// Band boundaries for one run.
///
/// Great Lakes have no tidal range, so the covers-and-uncovers band does not
/// exist there and the lower boundary sits at `-epsilon`. Coastal surveys put
/// it at `-(MHW) - epsilon`; without an MHW value the islet test is skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthBands {
    lower: Option<f64>,
    epsilon: f64,
    inclusive: bool,
    tidal: bool,
}

impl DepthBands {
    pub fn new(config: &CheckConfiguration, policy: &VersionPolicy) -> Self {
        let epsilon = policy.depth_epsilon;
        let tidal = !config.survey_area.is_great_lakes();
        let lower = if !tidal {
            Some(-epsilon)
        } else if config.use_mhw {
            Some(-config.mhw_value - epsilon)
        } else {
            None
        };
        Self {
            lower,
            epsilon,
            inclusive: policy.inclusive_depth_bands,
            tidal,
        }
    }

    pub fn classify(&self, valsou: f64) -> DepthZone {
        if let Some(lower) = self.lower {
            if valsou < lower {
                return DepthZone::Islet;
            }
        }
        let within = |bound: f64| {
            if self.inclusive {
                valsou <= bound
            } else {
                valsou < bound
            }
        };
        if self.tidal && within(-self.epsilon) {
            DepthZone::CoversAndUncovers
        } else if within(self.epsilon) {
            DepthZone::Awash
        } else {
            DepthZone::AlwaysUnderwater
        }
    }
}

/// Minimum ELEVAT (exclusive) for the survey area.
pub fn elevat_threshold(config: &CheckConfiguration, policy: &VersionPolicy) -> f64 {
    if config.survey_area.is_great_lakes() {
        0.0
    } else {
        policy.depth_epsilon
    }
}

/// Flags features whose WATLEV does not match the zone of their VALSOU.
/// Features missing either attribute, or holding an empty or unparsable
/// value, are skipped.
pub fn check_watlev(features: &[&Feature], bands: &DepthBands) -> Outcome {
    let mut findings = Vec::new();
    for feature in features {
        let Some(valsou) = numeric(feature, "VALSOU") else {
            continue;
        };
        let Some(watlev) = integer(feature, "WATLEV") else {
            continue;
        };

        let zone = bands.classify(valsou);
        match zone.watlev() {
            None => findings.push(Finding::error(feature, "invalid VALSOU (islet ?)")),
            Some(expected) if expected != watlev => findings.push(Finding::error(
                feature,
                format!(
                    "invalid WATLEV {} for VALSOU {} ({} expected)",
                    watlev,
                    valsou,
                    zone.label()
                ),
            )),
            Some(_) => {}
        }
    }
    Outcome::new(findings, "with WATLEV inconsistent with VALSOU")
}

/// Flags land elevations that do not clear `threshold`.
pub fn check_elevat(features: &[&Feature], threshold: f64) -> Outcome {
    let findings = features
        .iter()
        .filter_map(|f| numeric(f, "ELEVAT").map(|elevat| (f, elevat)))
        .filter(|(_, elevat)| *elevat <= threshold)
        .map(|(f, elevat)| Finding::error(f, format!("invalid ELEVAT {}", elevat)))
        .collect();
    Outcome::new(findings, &format!("with ELEVAT not above {}", threshold))
}

fn numeric(feature: &Feature, name: &str) -> Option<f64> {
    match feature.parse_attribute::<f64>(name)? {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            let raw = feature.attribute(name).unwrap_or_default();
            if !raw.trim().is_empty() {
                tracing::warn!(
                    acronym = feature.acronym(),
                    attribute = name,
                    value = raw,
                    "skipping unparsable numeric attribute"
                );
            }
            None
        }
    }
}

fn integer(feature: &Feature, name: &str) -> Option<u8> {
    match feature.parse_attribute::<u8>(name)? {
        Ok(value) => Some(value),
        Err(_) => {
            let raw = feature.attribute(name).unwrap_or_default();
            if !raw.trim().is_empty() {
                tracing::warn!(
                    acronym = feature.acronym(),
                    attribute = name,
                    value = raw,
                    "skipping unparsable code attribute"
                );
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HssdVersion, SurveyArea};

    fn bands(area: SurveyArea, version: HssdVersion, mhw: Option<f64>) -> DepthBands {
        let mut config = CheckConfiguration::new(version, area);
        if let Some(mhw) = mhw {
            config = config.with_mhw(mhw);
        }
        DepthBands::new(&config, &VersionPolicy::for_version(version))
    }

    #[test]
    fn coastal_bands_follow_canonical_thresholds() {
        let b = bands(SurveyArea::PacificCoast, HssdVersion::Hssd2022, Some(1.0));
        assert_eq!(b.classify(-2.0), DepthZone::Islet);
        assert_eq!(b.classify(-1.05), DepthZone::CoversAndUncovers);
        assert_eq!(b.classify(-0.1), DepthZone::CoversAndUncovers);
        assert_eq!(b.classify(-0.05), DepthZone::Awash);
        assert_eq!(b.classify(0.1), DepthZone::Awash);
        assert_eq!(b.classify(0.11), DepthZone::AlwaysUnderwater);
    }

    #[test]
    fn older_revisions_use_exclusive_bounds() {
        let b = bands(SurveyArea::AtlanticCoast, HssdVersion::Hssd2019, Some(1.0));
        assert_eq!(b.classify(-0.1), DepthZone::Awash);
        assert_eq!(b.classify(0.1), DepthZone::AlwaysUnderwater);
    }

    #[test]
    fn great_lakes_have_no_intertidal_band() {
        let b = bands(SurveyArea::GreatLakes, HssdVersion::Hssd2022, None);
        assert_eq!(b.classify(-0.2), DepthZone::Islet);
        assert_eq!(b.classify(-0.1), DepthZone::Awash);
        assert_eq!(b.classify(0.5), DepthZone::AlwaysUnderwater);
    }

    #[test]
    fn coastal_without_mhw_never_reports_islets() {
        let b = bands(SurveyArea::PacificCoast, HssdVersion::Hssd2022, None);
        assert_eq!(b.classify(-25.0), DepthZone::CoversAndUncovers);
    }

    #[test]
    fn check_watlev_separates_islets_from_mismatches() {
        let b = bands(SurveyArea::PacificCoast, HssdVersion::Hssd2022, Some(1.0));
        let owned = vec![
            Feature::point("WRECKS", 0.0, 0.0)
                .with_attribute("VALSOU", "-2.0")
                .with_attribute("WATLEV", "4"),
            Feature::point("WRECKS", 1.0, 0.0)
                .with_attribute("VALSOU", "5.0")
                .with_attribute("WATLEV", "5"),
            Feature::point("WRECKS", 2.0, 0.0)
                .with_attribute("VALSOU", "")
                .with_attribute("WATLEV", "5"),
            Feature::point("WRECKS", 3.0, 0.0)
                .with_attribute("VALSOU", "deep")
                .with_attribute("WATLEV", "3"),
        ];
        let refs: Vec<&Feature> = owned.iter().collect();
        let outcome = check_watlev(&refs, &b);
        assert_eq!(outcome.findings.len(), 2);
        assert_eq!(outcome.findings[0].note, "invalid VALSOU (islet ?)");
        assert!(outcome.findings[1].note.starts_with("invalid WATLEV 5"));
    }

    #[test]
    fn elevat_must_clear_area_threshold() {
        let owned = vec![
            Feature::point("LNDARE", 0.0, 0.0).with_attribute("ELEVAT", "0.05"),
            Feature::point("LNDARE", 1.0, 0.0).with_attribute("ELEVAT", "2"),
        ];
        let refs: Vec<&Feature> = owned.iter().collect();
        assert_eq!(check_elevat(&refs, 0.1).findings.len(), 1);
        assert!(check_elevat(&refs, 0.0).is_ok());
    }
}
