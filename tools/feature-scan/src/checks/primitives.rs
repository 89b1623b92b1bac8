use super::Outcome;
use crate::feature::Feature;
use crate::flags::{Finding, Severity};

pub fn require_attribute(features: &[&Feature], name: &str, severity: Severity) -> Outcome {
    let note = format!("missing {}", name);
    let findings = features
        .iter()
        .filter(|f| !f.has_attribute(name))
        .map(|f| Finding::at(f, note.as_str(), severity))
        .collect();
    Outcome::new(findings, &note)
}

pub fn forbid_attribute(features: &[&Feature], name: &str, severity: Severity) -> Outcome {
    let note = format!("prohibited {}", name);
    let findings = features
        .iter()
        .filter(|f| f.has_attribute(name))
        .map(|f| Finding::at(f, note.as_str(), severity))
        .collect();
    Outcome::new(findings, &format!("with {}", note))
}

/// Flags features whose `name` holds one of `prohibited`. With
/// `require_existence`, a missing attribute is flagged too, under its own note.
pub fn flag_attribute_value(
    features: &[&Feature],
    name: &str,
    prohibited: &[&str],
    require_existence: bool,
    severity: Severity,
) -> Outcome {
    let mut findings = Vec::new();
    for feature in features {
        let values = feature.attribute_values(name);
        if values.is_empty() {
            if require_existence {
                findings.push(Finding::at(feature, format!("missing {}", name), severity));
            }
            continue;
        }
        if let Some(bad) = values.iter().find(|v| prohibited.contains(&v.as_str())) {
            let note = if bad.is_empty() {
                format!("empty {}", name)
            } else {
                format!("invalid {} value {}", name, bad)
            };
            findings.push(Finding::at(feature, note, severity));
        }
    }
    let described = if require_existence {
        format!("with missing or invalid {}", name)
    } else {
        format!("with invalid {}", name)
    };
    Outcome::new(findings, &described)
}

pub fn flag_text_over_limit(features: &[&Feature], attributes: &[&str], limit: usize) -> Outcome {
    let mut findings = Vec::new();
    for feature in features {
        for name in attributes {
            for value in feature.attribute_values(name) {
                let length = value.chars().count();
                if length > limit {
                    findings.push(Finding::error(
                        feature,
                        format!("{} exceeds {} characters ({})", name, limit, length),
                    ));
                }
            }
        }
    }
    Outcome::new(findings, &format!("with text over {} characters", limit))
}

/// Flags features whose `name` mentions none of `keywords` (case-insensitive).
/// Features without the attribute are left to [`require_attribute`].
pub fn flag_missing_keywords(
    features: &[&Feature],
    name: &str,
    keywords: &[&str],
    severity: Severity,
) -> Outcome {
    let lowered: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
    let findings = features
        .iter()
        .filter(|f| match f.attribute(name) {
            Some(value) => {
                let value = value.to_lowercase();
                !lowered.iter().any(|k| value.contains(k.as_str()))
            }
            None => false,
        })
        .map(|f| Finding::at(f, format!("{} without keyword", name), severity))
        .collect();
    Outcome::new(
        findings,
        &format!("with {} lacking any of: {}", name, keywords.join(", ")),
    )
}
