//! SORIND and SORDAT validation.

use super::Outcome;
use crate::feature::Feature;
use crate::flags::Finding;
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

static SORDAT_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{8}$").unwrap());

const SORIND_AGENCY: &str = "US";
const SORIND_SOURCE: &str = "graph";
const SORIND_SURVEY_LEN: usize = 6;

/// True iff `value` is `US,US,graph,<6 chars>` exactly.
pub fn validate_sorind(value: &str) -> bool {
    let tokens: Vec<&str> = value.split(',').collect();
    sorind_token_problems(&tokens).is_empty()
}

/// Every format problem in `value`. When `forbid_spaces` is off, a space
/// after a comma is tolerated and trimmed before the token comparisons.
pub fn sorind_problems(value: &str, forbid_spaces: bool) -> Vec<&'static str> {
    let mut problems = Vec::new();
    if forbid_spaces && value.contains(", ") {
        problems.push("space after comma in SORIND");
    }
    let tokens: Vec<&str> = value
        .split(',')
        .map(|t| if forbid_spaces { t } else { t.trim_start() })
        .collect();
    problems.extend(sorind_token_problems(&tokens));
    problems
}

fn sorind_token_problems(tokens: &[&str]) -> Vec<&'static str> {
    if tokens.len() != 4 {
        return vec!["invalid amount of SORIND tokens"];
    }
    let mut problems = Vec::new();
    if tokens[0] != SORIND_AGENCY {
        problems.push("invalid first token in SORIND");
    }
    if tokens[1] != SORIND_AGENCY {
        problems.push("invalid second token in SORIND");
    }
    if tokens[2] != SORIND_SOURCE {
        problems.push("invalid third token in SORIND");
    }
    if tokens[3].chars().count() != SORIND_SURVEY_LEN {
        problems.push("invalid survey in SORIND");
    }
    problems
}

/// `None` for a valid SORDAT: eight digits forming a real date no later than
/// the month of `today`.
pub fn sordat_problem(value: &str, today: NaiveDate) -> Option<&'static str> {
    if !SORDAT_PATTERN.is_match(value) {
        return Some("invalid SORDAT format");
    }
    let (Ok(year), Ok(month), Ok(day)) = (
        value[0..4].parse::<i32>(),
        value[4..6].parse::<u32>(),
        value[6..8].parse::<u32>(),
    ) else {
        return Some("invalid SORDAT format");
    };
    let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
        return Some("invalid SORDAT date");
    };
    if (date.year(), date.month()) > (today.year(), today.month()) {
        return Some("future SORDAT");
    }
    None
}

pub fn validate_sordat(value: &str, today: NaiveDate) -> bool {
    sordat_problem(value, today).is_none()
}

/// Format-validates SORIND, or compares it with `expected` when one is configured.
pub fn check_sorind(features: &[&Feature], expected: Option<&str>, forbid_spaces: bool) -> Outcome {
    let mut findings = Vec::new();
    for feature in features {
        let Some(value) = feature.attribute("SORIND") else {
            continue;
        };
        match expected {
            Some(expected) if value != expected => findings.push(Finding::error(
                feature,
                format!("SORIND {} does not match {}", value, expected),
            )),
            Some(_) => {}
            None => {
                let problems = sorind_problems(value, forbid_spaces);
                if !problems.is_empty() {
                    findings.push(Finding::error(feature, problems.join(", ")));
                }
            }
        }
    }
    Outcome::new(findings, "with invalid SORIND")
}

/// Format-validates SORDAT, or compares it with `expected` when one is configured.
pub fn check_sordat(features: &[&Feature], expected: Option<&str>, today: NaiveDate) -> Outcome {
    let mut findings = Vec::new();
    for feature in features {
        let Some(value) = feature.attribute("SORDAT") else {
            continue;
        };
        match expected {
            Some(expected) if value != expected => findings.push(Finding::error(
                feature,
                format!("SORDAT {} does not match {}", value, expected),
            )),
            Some(_) => {}
            None => {
                if let Some(problem) = sordat_problem(value, today) {
                    findings.push(Finding::error(feature, problem));
                }
            }
        }
    }
    Outcome::new(findings, "with invalid SORDAT")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 6, 15).unwrap()
    }

    #[test]
    fn sorind_format() {
        assert!(validate_sorind("US,US,graph,H13385"));
        assert!(!validate_sorind("US,US,graph,H1338"));
        assert!(!validate_sorind("US,US,graph"));
        assert!(!validate_sorind("US,CA,graph,H13385"));
        assert!(!validate_sorind("US,US,chart,H13385"));
    }

    #[test]
    fn sorind_spacing_depends_on_mode() {
        assert!(sorind_problems("US, US, graph, H13385", false).is_empty());
        let strict = sorind_problems("US, US, graph, H13385", true);
        assert!(strict.contains(&"space after comma in SORIND"));
        assert!(strict.contains(&"invalid second token in SORIND"));
    }

    #[test]
    fn sordat_format_and_calendar() {
        assert!(validate_sordat("20220101", today()));
        assert!(validate_sordat("20220630", today()));
        assert!(!validate_sordat("20220701", today()));
        assert!(!validate_sordat("20220230", today()));
        assert!(!validate_sordat("2022011", today()));
        assert!(!validate_sordat("2022-1-1", today()));
        assert_eq!(sordat_problem("20221301", today()), Some("invalid SORDAT date"));
    }

    #[test]
    fn configured_values_switch_to_exact_match() {
        let owned = vec![
            Feature::point("WRECKS", 0.0, 0.0)
                .with_attribute("SORIND", "US,US,graph,H13385")
                .with_attribute("SORDAT", "20220101"),
            Feature::point("WRECKS", 1.0, 0.0)
                .with_attribute("SORIND", "US,US,graph,H99999")
                .with_attribute("SORDAT", "20211231"),
        ];
        let refs: Vec<&Feature> = owned.iter().collect();
        assert!(check_sorind(&refs, None, true).is_ok());
        assert_eq!(check_sorind(&refs, Some("US,US,graph,H13385"), true).findings.len(), 1);
        assert!(check_sordat(&refs, None, today()).is_ok());
        let exact = check_sordat(&refs, Some("20220101"), today());
        assert_eq!(exact.findings.len(), 1);
        assert_eq!(exact.findings[0].x, 1.0);
    }
}
