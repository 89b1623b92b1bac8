use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Vertex carrying a depth, as produced for sounding records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub acronym: String,
    pub value: String,
}

#[derive(Deserialize)]
struct RawFeature {
    acronym: String,
    centroid: Point,
    #[serde(default)]
    geo2s: Vec<Point>,
    #[serde(default)]
    geo3s: Vec<Point3>,
    #[serde(default)]
    attributes: Vec<Attribute>,
}

impl From<RawFeature> for Feature {
    fn from(raw: RawFeature) -> Self {
        Feature::new(raw.acronym, raw.centroid, raw.geo2s, raw.geo3s, raw.attributes)
    }
}

/// One S-57 feature record as handed over by the reader.
///
/// The attribute bag is indexed by name when the feature is built, so every
/// lookup the checks perform is a map access rather than a scan. Repeated
/// attributes keep their order of appearance.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawFeature")]
pub struct Feature {
    acronym: String,
    centroid: Point,
    geo2s: Vec<Point>,
    geo3s: Vec<Point3>,
    attributes: Vec<Attribute>,
    index: BTreeMap<String, Vec<String>>,
}

impl Feature {
    pub fn new(
        acronym: impl Into<String>,
        centroid: Point,
        geo2s: Vec<Point>,
        geo3s: Vec<Point3>,
        attributes: Vec<Attribute>,
    ) -> Self {
        let mut index: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for attr in &attributes {
            index
                .entry(attr.acronym.clone())
                .or_default()
                .push(attr.value.clone());
        }
        Self {
            acronym: acronym.into(),
            centroid,
            geo2s,
            geo3s,
            attributes,
            index,
        }
    }

    /// Single-vertex feature located at `(x, y)`.
    pub fn point(acronym: impl Into<String>, x: f64, y: f64) -> Self {
        let at = Point::new(x, y);
        Self::new(acronym, at, vec![at], Vec::new(), Vec::new())
    }

    /// Multi-vertex feature; the centroid is the vertex mean.
    pub fn polyline(acronym: impl Into<String>, vertices: &[(f64, f64)]) -> Self {
        let geo2s: Vec<Point> = vertices.iter().map(|&(x, y)| Point::new(x, y)).collect();
        let n = geo2s.len().max(1) as f64;
        let centroid = Point::new(
            geo2s.iter().map(|p| p.x).sum::<f64>() / n,
            geo2s.iter().map(|p| p.y).sum::<f64>() / n,
        );
        Self::new(acronym, centroid, geo2s, Vec::new(), Vec::new())
    }

    /// Feature without any vertex, as the reader emits for some meta records.
    pub fn without_geometry(acronym: impl Into<String>, x: f64, y: f64) -> Self {
        Self::new(acronym, Point::new(x, y), Vec::new(), Vec::new(), Vec::new())
    }

    pub fn with_attribute(mut self, acronym: &str, value: &str) -> Self {
        self.attributes.push(Attribute {
            acronym: acronym.to_string(),
            value: value.to_string(),
        });
        self.index
            .entry(acronym.to_string())
            .or_default()
            .push(value.to_string());
        self
    }

    pub fn acronym(&self) -> &str {
        &self.acronym
    }

    pub fn centroid(&self) -> Point {
        self.centroid
    }

    pub fn geo2s(&self) -> &[Point] {
        &self.geo2s
    }

    pub fn geo3s(&self) -> &[Point3] {
        &self.geo3s
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Planar vertices, taken from `geo2s` when present and from `geo3s` otherwise.
    pub fn vertices(&self) -> Vec<Point> {
        if !self.geo2s.is_empty() {
            self.geo2s.clone()
        } else {
            self.geo3s.iter().map(|p| Point::new(p.x, p.y)).collect()
        }
    }

    pub fn has_geometry(&self) -> bool {
        !self.geo2s.is_empty() || !self.geo3s.is_empty()
    }

    pub fn is_point(&self) -> bool {
        self.geo2s.len() == 1 || self.geo3s.len() == 1
    }

    pub fn is_line_or_area(&self) -> bool {
        self.geo2s.len() > 1 || self.geo3s.len() > 1
    }

    pub fn has_attribute(&self, acronym: &str) -> bool {
        self.index.contains_key(acronym)
    }

    /// First value recorded for `acronym`.
    pub fn attribute(&self, acronym: &str) -> Option<&str> {
        self.index
            .get(acronym)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Every value recorded for `acronym`, one per repetition.
    pub fn attribute_values(&self, acronym: &str) -> &[String] {
        self.index.get(acronym).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Comma-separated list stored in the first value of `acronym`.
    pub fn list_values(&self, acronym: &str) -> Option<Vec<&str>> {
        self.attribute(acronym)
            .map(|value| value.split(',').map(str::trim).collect())
    }

    /// `None` when the attribute is absent, otherwise the parse outcome.
    pub fn parse_attribute<T: FromStr>(&self, acronym: &str) -> Option<Result<T, T::Err>> {
        self.attribute(acronym).map(|value| value.trim().parse::<T>())
    }
}
