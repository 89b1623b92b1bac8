//! Positional pair tables over comma-joined multi-valued attributes.

use super::Outcome;
use crate::feature::Feature;
use crate::flags::Finding;

pub const TECSOU_QUASOU_PAIRS: &[(&str, &str)] = &[
    ("1", "6"),
    ("2", "6"),
    ("3", "6"),
    ("4", "6"),
    ("5", "6"),
    ("6", "7"),
    ("7", "6"),
    ("", "2"),
];

/// Allowed `(NATSUR, NATQUA)` pairs. An empty or `"0"` NATQUA means no
/// qualifier was given.
pub const NATSUR_NATQUA_PAIRS: &[(&str, &str)] = &[
    // mud, clay, silt
    ("1", ""), ("1", "0"), ("1", "5"), ("1", "6"), ("1", "7"),
    ("2", ""), ("2", "0"), ("2", "5"), ("2", "6"), ("2", "7"),
    ("3", ""), ("3", "0"), ("3", "5"), ("3", "6"), ("3", "7"),
    // sand
    ("4", ""), ("4", "0"), ("4", "1"), ("4", "2"), ("4", "3"), ("4", "9"),
    // stone
    ("5", ""), ("5", "0"), ("5", "4"), ("5", "8"), ("5", "10"),
    // gravel
    ("6", ""), ("6", "0"), ("6", "1"), ("6", "2"), ("6", "3"),
    // pebbles, cobbles
    ("7", ""), ("7", "0"), ("7", "4"), ("7", "10"),
    ("8", ""), ("8", "0"), ("8", "4"), ("8", "10"),
    // rock
    ("9", ""), ("9", "0"), ("9", "8"), ("9", "10"),
    // lava
    ("11", ""), ("11", "0"), ("11", "8"),
    // coral
    ("14", ""), ("14", "0"), ("14", "4"), ("14", "9"),
    // shells
    ("17", ""), ("17", "0"), ("17", "4"),
    // boulder
    ("18", ""), ("18", "0"), ("18", "10"),
];

/// Lists of different lengths get a warning and no pair check. Otherwise the
/// first disallowed pair flags the feature and ends its evaluation.
pub fn check_tecsou_quasou(features: &[&Feature]) -> Outcome {
    let mut findings = Vec::new();
    for feature in features {
        let (Some(tecsou), Some(quasou)) =
            (feature.list_values("TECSOU"), feature.list_values("QUASOU"))
        else {
            continue;
        };

        if tecsou.len() != quasou.len() {
            findings.push(Finding::warning(
                feature,
                "TECSOU and QUASOU have a different number of values",
            ));
            continue;
        }

        let invalid = tecsou
            .iter()
            .zip(quasou.iter())
            .find(|(t, q)| !TECSOU_QUASOU_PAIRS.contains(&(**t, **q)));
        if let Some((t, q)) = invalid {
            findings.push(Finding::error(
                feature,
                format!("invalid TECSOU {} and QUASOU {} combination", t, q),
            ));
        }
    }
    Outcome::new(findings, "with invalid TECSOU and QUASOU combination")
}

/// Checks every positional `(NATSUR, NATQUA)` pair; a NATQUA list shorter than
/// NATSUR leaves the remaining surfaces unqualified.
pub fn check_natsur_natqua(features: &[&Feature]) -> Outcome {
    let mut findings = Vec::new();
    for feature in features {
        let Some(natsur) = feature.list_values("NATSUR") else {
            continue;
        };
        let natqua = feature.list_values("NATQUA").unwrap_or_default();

        let invalid = natsur.iter().enumerate().find_map(|(i, surface)| {
            let quality = natqua.get(i).copied().unwrap_or("");
            if NATSUR_NATQUA_PAIRS.contains(&(*surface, quality)) {
                None
            } else {
                Some((*surface, quality))
            }
        });
        if let Some((surface, quality)) = invalid {
            findings.push(Finding::error(
                feature,
                format!("invalid NATSUR {} and NATQUA {} combination", surface, quality),
            ));
        }
    }
    Outcome::new(findings, "with invalid NATSUR and NATQUA combination")
}

pub fn check_value_balance(features: &[&Feature], limiting: &str, dependent: &str) -> Outcome {
    let mut findings = Vec::new();
    for feature in features {
        let Some(dependent_values) = feature.list_values(dependent) else {
            continue;
        };
        let limit = feature.list_values(limiting).map_or(0, |v| v.len());
        if dependent_values.len() > limit {
            findings.push(Finding::error(
                feature,
                format!(
                    "{} and {} imbalance ({} > {})",
                    dependent,
                    limiting,
                    dependent_values.len(),
                    limit
                ),
            ));
        }
    }
    Outcome::new(findings, &format!("with more {} than {} values", dependent, limiting))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::Severity;

    #[test]
    fn pairs_are_checked_positionally() {
        let owned = vec![
            Feature::point("WRECKS", 0.0, 0.0)
                .with_attribute("TECSOU", "3,6")
                .with_attribute("QUASOU", "6,7"),
            Feature::point("WRECKS", 1.0, 0.0)
                .with_attribute("TECSOU", "3,6")
                .with_attribute("QUASOU", "7,6"),
        ];
        let refs: Vec<&Feature> = owned.iter().collect();
        let outcome = check_tecsou_quasou(&refs);
        assert_eq!(outcome.findings.len(), 1);
        assert_eq!(outcome.findings[0].note, "invalid TECSOU 3 and QUASOU 7 combination");
    }

    #[test]
    fn unknown_depth_pair_is_allowed() {
        let owned = vec![Feature::point("UWTROC", 0.0, 0.0)
            .with_attribute("TECSOU", "")
            .with_attribute("QUASOU", "2")];
        let refs: Vec<&Feature> = owned.iter().collect();
        assert!(check_tecsou_quasou(&refs).is_ok());
    }

    #[test]
    fn length_mismatch_is_a_warning() {
        let owned = vec![Feature::point("OBSTRN", 0.0, 0.0)
            .with_attribute("TECSOU", "3,4")
            .with_attribute("QUASOU", "6")];
        let refs: Vec<&Feature> = owned.iter().collect();
        let outcome = check_tecsou_quasou(&refs);
        assert_eq!(outcome.findings.len(), 1);
        assert_eq!(outcome.findings[0].severity, Severity::Warning);
    }

    #[test]
    fn seabed_table_accepts_wildcards_and_rejects_odd_pairs() {
        let owned = vec![
            Feature::point("SBDARE", 0.0, 0.0)
                .with_attribute("NATSUR", "4,1")
                .with_attribute("NATQUA", "1"),
            Feature::point("SBDARE", 1.0, 0.0)
                .with_attribute("NATSUR", "9")
                .with_attribute("NATQUA", "0"),
            Feature::point("SBDARE", 2.0, 0.0)
                .with_attribute("NATSUR", "1")
                .with_attribute("NATQUA", "3"),
        ];
        let refs: Vec<&Feature> = owned.iter().collect();
        let outcome = check_natsur_natqua(&refs);
        assert_eq!(outcome.findings.len(), 1);
        assert_eq!(outcome.findings[0].x, 2.0);
    }

    #[test]
    fn balance_flags_extra_dependent_values() {
        let owned = vec![
            Feature::point("SBDARE", 0.0, 0.0)
                .with_attribute("NATSUR", "4")
                .with_attribute("COLOUR", "1,2"),
            Feature::point("SBDARE", 1.0, 0.0)
                .with_attribute("NATSUR", "4,9")
                .with_attribute("COLOUR", "1,2"),
            Feature::point("SBDARE", 2.0, 0.0).with_attribute("NATQUA", "1"),
        ];
        let refs: Vec<&Feature> = owned.iter().collect();
        let colour = check_value_balance(&refs, "NATSUR", "COLOUR");
        assert_eq!(colour.findings.len(), 1);
        assert_eq!(colour.findings[0].note, "COLOUR and NATSUR imbalance (2 > 1)");
        let natqua = check_value_balance(&refs, "NATSUR", "NATQUA");
        assert_eq!(natqua.findings.len(), 1);
        assert_eq!(natqua.findings[0].x, 2.0);
    }
}
