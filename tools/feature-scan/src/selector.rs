use crate::feature::Feature;

pub fn by_object_type<'a>(features: &[&'a Feature], types: &[&str]) -> Vec<&'a Feature> {
    features
        .iter()
        .copied()
        .filter(|f| types.contains(&f.acronym()))
        .collect()
}

pub fn excluding_object_type<'a>(features: &[&'a Feature], types: &[&str]) -> Vec<&'a Feature> {
    features
        .iter()
        .copied()
        .filter(|f| !types.contains(&f.acronym()))
        .collect()
}

pub fn with_attribute<'a>(features: &[&'a Feature], name: &str) -> Vec<&'a Feature> {
    features
        .iter()
        .copied()
        .filter(|f| f.has_attribute(name))
        .collect()
}

pub fn without_attribute<'a>(features: &[&'a Feature], name: &str) -> Vec<&'a Feature> {
    features
        .iter()
        .copied()
        .filter(|f| !f.has_attribute(name))
        .collect()
}

pub fn with_attribute_value_in<'a>(
    features: &[&'a Feature],
    name: &str,
    values: &[&str],
) -> Vec<&'a Feature> {
    features
        .iter()
        .copied()
        .filter(|f| has_value_in(f, name, values))
        .collect()
}

/// Complement of [`with_attribute_value_in`]; features lacking `name` always match.
pub fn without_attribute_value_in<'a>(
    features: &[&'a Feature],
    name: &str,
    values: &[&str],
) -> Vec<&'a Feature> {
    features
        .iter()
        .copied()
        .filter(|f| !has_value_in(f, name, values))
        .collect()
}

/// Features whose `name` parses as a float inside `[min, max]`.
/// Values that do not parse are left out without further notice.
pub fn with_attribute_as_float_in<'a>(
    features: &[&'a Feature],
    name: &str,
    min: f64,
    max: f64,
) -> Vec<&'a Feature> {
    features
        .iter()
        .copied()
        .filter(|f| match f.parse_attribute::<f64>(name) {
            Some(Ok(v)) => v >= min && v <= max,
            _ => false,
        })
        .collect()
}

pub fn points_only<'a>(features: &[&'a Feature]) -> Vec<&'a Feature> {
    features.iter().copied().filter(|f| f.is_point()).collect()
}

pub fn lines_and_areas_only<'a>(features: &[&'a Feature]) -> Vec<&'a Feature> {
    features
        .iter()
        .copied()
        .filter(|f| f.is_line_or_area())
        .collect()
}

pub fn excluding_by_geometry_match<'a>(
    superset: &[&'a Feature],
    subset: &[&Feature],
) -> Vec<&'a Feature> {
    superset
        .iter()
        .copied()
        .filter(|f| !subset.iter().any(|s| std::ptr::eq(*s, *f) || *s == *f))
        .collect()
}

fn has_value_in(feature: &Feature, name: &str, values: &[&str]) -> bool {
    feature
        .attribute_values(name)
        .iter()
        .any(|v| values.contains(&v.as_str()))
}
