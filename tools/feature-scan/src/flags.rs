use crate::checks::catalog::CheckId;
use crate::feature::Feature;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    Error,
    Warning,
}

/// One rule violation produced by a primitive, before it reaches the sink.
#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    pub acronym: String,
    pub x: f64,
    pub y: f64,
    pub note: String,
    pub severity: Severity,
}

impl Finding {
    pub fn at(feature: &Feature, note: impl Into<String>, severity: Severity) -> Self {
        let centroid = feature.centroid();
        Self {
            acronym: feature.acronym().to_string(),
            x: centroid.x,
            y: centroid.y,
            note: note.into(),
            severity,
        }
    }

    pub fn error(feature: &Feature, note: impl Into<String>) -> Self {
        Self::at(feature, note, Severity::Error)
    }

    pub fn warning(feature: &Feature, note: impl Into<String>) -> Self {
        Self::at(feature, note, Severity::Warning)
    }

    /// Note as it appears on the merged position list.
    pub fn flag_note(&self) -> String {
        match self.severity {
            Severity::Error => self.note.clone(),
            Severity::Warning => format!("warning: {}", self.note),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlaggedEntry {
    pub x: f64,
    pub y: f64,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketEntry {
    pub acronym: String,
    pub x: f64,
    pub y: f64,
}

/// Append-only collector of flagged positions and per-check buckets.
#[derive(Debug, Default)]
pub struct FlagSink {
    flagged: Vec<FlaggedEntry>,
    buckets: HashMap<CheckId, Vec<BucketEntry>>,
}

impl FlagSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `note` at `(x, y)`. A position already on the list, compared with
    /// exact float equality, gets the note appended as `", note"`.
    pub fn record(&mut self, x: f64, y: f64, note: &str) {
        for entry in self.flagged.iter_mut() {
            if entry.x == x && entry.y == y {
                entry.note.push_str(", ");
                entry.note.push_str(note);
                return;
            }
        }
        self.flagged.push(FlaggedEntry {
            x,
            y,
            note: note.to_string(),
        });
    }

    /// Files a finding under `bucket` and on the merged position list.
    pub fn flag(&mut self, bucket: CheckId, finding: &Finding) {
        self.record(finding.x, finding.y, &finding.flag_note());
        self.buckets.entry(bucket).or_default().push(BucketEntry {
            acronym: finding.acronym.clone(),
            x: finding.x,
            y: finding.y,
        });
    }

    pub fn flagged(&self) -> &[FlaggedEntry] {
        &self.flagged
    }

    pub fn bucket(&self, bucket: CheckId) -> &[BucketEntry] {
        self.buckets.get(&bucket).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count(&self, bucket: CheckId) -> usize {
        self.bucket(bucket).len()
    }

    pub fn total(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Merged position list as JSON, for map renderers.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.flagged)
    }
}
