use super::Outcome;
use crate::feature::Feature;
use crate::flags::{Finding, Severity};
use std::collections::HashSet;

/// Duplicated lights are common in source charts and only warrant a warning.
const WARNING_ONLY_TYPES: &[&str] = &["LIGHTS"];

/// Canonical geometry key: acronym plus the vertex longitudes and the vertex
/// latitudes, each list sorted on its own and printed with 7 decimals.
pub fn geometry_key(feature: &Feature) -> (String, String, String) {
    let vertices = feature.vertices();
    let mut xs: Vec<f64> = vertices.iter().map(|p| p.x).collect();
    let mut ys: Vec<f64> = vertices.iter().map(|p| p.y).collect();
    xs.sort_by(f64::total_cmp);
    ys.sort_by(f64::total_cmp);
    (feature.acronym().to_string(), joined(&xs), joined(&ys))
}

fn joined(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format!("{:.7}", v))
        .collect::<Vec<_>>()
        .join(",")
}

/// Drops features without vertices and every repeat of an already-seen
/// geometry key. Returns the surviving features and one finding per repeat.
pub fn dedupe_by_geometry<'a>(features: &[&'a Feature]) -> (Vec<&'a Feature>, Outcome) {
    let mut seen: HashSet<(String, String, String)> = HashSet::new();
    let mut kept = Vec::with_capacity(features.len());
    let mut findings = Vec::new();

    for feature in features {
        if !feature.has_geometry() {
            tracing::debug!(acronym = feature.acronym(), "dropping feature without geometry");
            continue;
        }
        if seen.insert(geometry_key(feature)) {
            kept.push(*feature);
            continue;
        }
        let severity = if WARNING_ONLY_TYPES.contains(&feature.acronym()) {
            Severity::Warning
        } else {
            Severity::Error
        };
        findings.push(Finding::at(
            feature,
            format!("redundant {}", feature.acronym()),
            severity,
        ));
    }

    (kept, Outcome::new(findings, "redundant with an earlier feature"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_order_does_not_matter() {
        let a = Feature::polyline("COALNE", &[(1.0, 2.0), (0.0, 5.0)]);
        let b = Feature::polyline("COALNE", &[(0.0, 5.0), (1.0, 2.0)]);
        assert_eq!(geometry_key(&a), geometry_key(&b));
    }

    #[test]
    fn coordinates_are_sorted_per_axis() {
        let crossing = Feature::polyline("DEPARE", &[(0.0, 1.0), (1.0, 0.0)]);
        let diagonal = Feature::polyline("DEPARE", &[(0.0, 0.0), (1.0, 1.0)]);
        assert_eq!(geometry_key(&crossing), geometry_key(&diagonal));

        let owned = vec![crossing, diagonal];
        let refs: Vec<&Feature> = owned.iter().collect();
        let (kept, outcome) = dedupe_by_geometry(&refs);
        assert_eq!(kept.len(), 1);
        assert_eq!(outcome.findings.len(), 1);
        assert_eq!(outcome.findings[0].note, "redundant DEPARE");
    }

    #[test]
    fn keys_round_to_seven_decimals() {
        let a = Feature::point("OBSTRN", -70.123456701, 42.0);
        let b = Feature::point("OBSTRN", -70.123456704, 42.0);
        assert_eq!(geometry_key(&a), geometry_key(&b));
        let c = Feature::point("OBSTRN", -70.1234568, 42.0);
        assert_ne!(geometry_key(&a), geometry_key(&c));
    }

    #[test]
    fn same_geometry_different_type_is_not_redundant() {
        let owned = vec![
            Feature::point("OBSTRN", 1.0, 1.0),
            Feature::point("WRECKS", 1.0, 1.0),
        ];
        let refs: Vec<&Feature> = owned.iter().collect();
        let (kept, outcome) = dedupe_by_geometry(&refs);
        assert_eq!(kept.len(), 2);
        assert!(outcome.is_ok());
    }

    #[test]
    fn lights_duplicates_are_warnings() {
        let owned = vec![
            Feature::point("LIGHTS", 1.0, 1.0),
            Feature::point("LIGHTS", 1.0, 1.0),
        ];
        let refs: Vec<&Feature> = owned.iter().collect();
        let (kept, outcome) = dedupe_by_geometry(&refs);
        assert_eq!(kept.len(), 1);
        assert_eq!(outcome.findings[0].severity, Severity::Warning);
        assert_eq!(outcome.findings[0].flag_note(), "warning: redundant LIGHTS");
    }

    #[test]
    fn geometry_less_features_vanish_silently() {
        let owned = vec![
            Feature::without_geometry("M_QUAL", 0.0, 0.0),
            Feature::without_geometry("M_QUAL", 0.0, 0.0),
        ];
        let refs: Vec<&Feature> = owned.iter().collect();
        let (kept, outcome) = dedupe_by_geometry(&refs);
        assert!(kept.is_empty());
        assert!(outcome.is_ok());
    }
}
