//! Image attribute checks: path resolution and filename grammar.

use super::Outcome;
use crate::feature::Feature;
use crate::flags::Finding;
use std::collections::HashSet;
use std::path::Path;

/// Separator between filenames in the `images` attribute.
pub const IMAGE_SEPARATOR: char = ';';

const SURVEY_TOKEN_LEN: usize = 6;
const FEATURE_ID_TOKEN_LEN: usize = 15;

pub fn image_names(feature: &Feature) -> Vec<&str> {
    feature
        .attribute("images")
        .map(|value| {
            value
                .split(IMAGE_SEPARATOR)
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

/// Flags commas in filenames, repeated filenames, an unset or absent
/// multimedia folder and filenames that do not exist in it. One finding per
/// feature.
pub fn check_image_paths(features: &[&Feature], folder: Option<&Path>) -> Outcome {
    let folder = folder.filter(|dir| {
        let exists = dir.is_dir();
        if !exists {
            tracing::warn!(folder = %dir.display(), "multimedia folder not found");
        }
        exists
    });
    let mut findings = Vec::new();
    for feature in features {
        let names = image_names(feature);
        let mut notes: Vec<String> = Vec::new();

        let mut seen = HashSet::new();
        for name in &names {
            if !seen.insert(name.to_lowercase()) {
                push_unique(&mut notes, format!("duplicated image filename {}", name));
            }
        }

        for name in &names {
            if name.contains(',') {
                push_unique(&mut notes, format!("comma in image filename {}", name));
            }
            match folder {
                None => push_unique(&mut notes, "missing images folder".to_string()),
                Some(dir) => {
                    if !dir.join(name).exists() {
                        push_unique(&mut notes, format!("invalid image path {}", name));
                    }
                }
            }
        }

        if !notes.is_empty() {
            findings.push(Finding::error(feature, notes.join(", ")));
        }
    }
    Outcome::new(findings, "with invalid image paths")
}

/// Problems with a seabed-sample image name: `<survey>_SBDARE_<timestamp>`.
pub fn sbdare_name_problems(name: &str, timestamp_lengths: &[usize]) -> Vec<&'static str> {
    let tokens: Vec<&str> = file_stem(name).split('_').collect();
    if tokens.len() != 3 {
        return vec!["invalid filenaming"];
    }
    let mut problems = Vec::new();
    if tokens[0].chars().count() != SURVEY_TOKEN_LEN {
        problems.push("invalid survey in filename");
    }
    if tokens[1] != "SBDARE" {
        problems.push("'SBDARE' not stated in filename");
    }
    if !timestamp_lengths.contains(&tokens[2].chars().count()) {
        problems.push("invalid timestamp in filename");
    }
    problems
}

/// Problems with any other image name: `<survey>_<FIDN+FIDS>[_<suffix>]`.
pub fn other_name_problems(name: &str) -> Vec<&'static str> {
    let tokens: Vec<&str> = file_stem(name).split('_').collect();
    if tokens.len() != 2 && tokens.len() != 3 {
        return vec!["invalid filenaming"];
    }
    let mut problems = Vec::new();
    if tokens[0].chars().count() != SURVEY_TOKEN_LEN {
        problems.push("invalid survey in filename");
    }
    if tokens[1].chars().count() != FEATURE_ID_TOKEN_LEN {
        problems.push("invalid FIDN+FIDS in filename");
    }
    problems
}

/// Applies the SBDARE grammar (`sbdare = true`) or the general one to every
/// image of every feature.
pub fn check_image_names(
    features: &[&Feature],
    sbdare: bool,
    timestamp_lengths: &[usize],
) -> Outcome {
    let mut findings = Vec::new();
    for feature in features {
        let mut notes: Vec<String> = Vec::new();
        for name in image_names(feature) {
            let problems = if sbdare {
                sbdare_name_problems(name, timestamp_lengths)
            } else {
                other_name_problems(name)
            };
            for problem in problems {
                push_unique(&mut notes, problem.to_string());
            }
        }
        if !notes.is_empty() {
            findings.push(Finding::error(feature, notes.join(", ")));
        }
    }
    Outcome::new(findings, "with invalid image names")
}

fn file_stem(name: &str) -> &str {
    Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(name)
}

fn push_unique(notes: &mut Vec<String>, note: String) {
    if !notes.contains(&note) {
        notes.push(note);
    }
}
