//! Registries of color schemes, keyed by identifier.

use std::{collections::BTreeMap, io::Read};
use lazy_static::lazy_static;
use serde::{de, Deserialize, Deserializer, Serialize};
use crate::{error::Result, palettes, scheme::ColorScheme};

lazy_static! {
    static ref CATEGORICAL: SchemeRegistry =
        palettes::CATEGORICAL.iter().map(ColorScheme::from_data).collect();
    static ref SEQUENTIAL: SchemeRegistry =
        palettes::SEQUENTIAL.iter().map(ColorScheme::from_data).collect();
}

/// Mapping from scheme identifiers to [`ColorScheme`]s.
///
/// In JSON, a registry is an object whose keys are the identifiers:
/// `{"d3Category10": {"id": "d3Category10", "label": …, "colors": […]}}`.
/// A key differing from the identifier of its scheme is an error.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct SchemeRegistry {
    schemes: BTreeMap<String, ColorScheme>,
}

impl SchemeRegistry {
    pub fn new() -> Self { Self::default() }

    /// The built-in categorical schemes.
    pub fn categorical() -> Self { CATEGORICAL.clone() }

    /// The built-in sequential and diverging schemes.
    pub fn sequential() -> Self { SEQUENTIAL.clone() }

    /// Read a registry from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read a registry from JSON.
    pub fn from_reader(rdr: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(rdr)?)
    }

    /// Register `scheme` under its identifier, returning the scheme it
    /// replaces, if any.
    pub fn insert(&mut self, scheme: ColorScheme) -> Option<ColorScheme> {
        self.schemes.insert(scheme.id.clone(), scheme)
    }

    pub fn get(&self, id: &str) -> Option<&ColorScheme> {
        self.schemes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool { self.schemes.contains_key(id) }

    pub fn len(&self) -> usize { self.schemes.len() }

    pub fn is_empty(&self) -> bool { self.schemes.is_empty() }

    /// Iterate over the schemes, ordered by identifier.
    pub fn iter(&self) -> impl Iterator<Item = &ColorScheme> {
        self.schemes.values()
    }
}

impl<'de> Deserialize<'de> for SchemeRegistry {
    fn deserialize<D>(d: D) -> std::result::Result<Self, D::Error>
    where D: Deserializer<'de> {
        let schemes = BTreeMap::<String, ColorScheme>::deserialize(d)?;
        if let Some((key, s)) = schemes.iter().find(|(k, s)| **k != s.id) {
            return Err(de::Error::custom(format!(
                "scheme {:?} registered under the key {:?}", s.id, key)))
        }
        Ok(SchemeRegistry { schemes })
    }
}

impl FromIterator<ColorScheme> for SchemeRegistry {
    fn from_iter<I: IntoIterator<Item = ColorScheme>>(iter: I) -> Self {
        let mut r = SchemeRegistry::new();
        r.extend(iter);
        r
    }
}

impl Extend<ColorScheme> for SchemeRegistry {
    fn extend<I: IntoIterator<Item = ColorScheme>>(&mut self, iter: I) {
        for s in iter { self.insert(s); }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::Error, palettes::ty::SchemeKind};

    #[test]
    fn builtins() {
        let cat = SchemeRegistry::categorical();
        let d3 = cat.get("d3Category10").unwrap();
        assert_eq!(d3.colors.len(), 10);
        assert_eq!(d3.colors[0], "#1f77b4");
        let seq = SchemeRegistry::sequential();
        assert_eq!(seq.get("fire").unwrap().kind, SchemeKind::Sequential);
        assert_eq!(seq.get("rdbu").unwrap().kind, SchemeKind::Diverging);
        assert!(!cat.contains("fire"));
    }

    #[test]
    fn insert_replaces() {
        let mut r = SchemeRegistry::new();
        assert!(r.insert(ColorScheme::new("a", "A", ["red"])).is_none());
        let old = r.insert(ColorScheme::new("a", "A2", ["blue"])).unwrap();
        assert_eq!(old.label, "A");
        assert_eq!(r.len(), 1);
        assert_eq!(r.get("a").unwrap().label, "A2");
    }

    #[test]
    fn from_json() {
        let r = SchemeRegistry::from_json_str(r##"{
            "d3Category10": {"id": "d3Category10", "label": "Category 10",
                             "colors": ["#1f77b4", "#ff7f0e"]},
            "fire": {"id": "fire", "label": "fire", "kind": "sequential",
                     "colors": ["white", "yellow", "red", "black"]}
        }"##).unwrap();
        assert_eq!(r.len(), 2);
        assert_eq!(r.get("fire").unwrap().kind, SchemeKind::Sequential);
        let ids: Vec<_> = r.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["d3Category10", "fire"]);
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(SchemeRegistry::from_json_str("{\"a\": 1}"),
                         Err(Error::Json(_))));
    }

    #[test]
    fn key_must_match_identifier() {
        let r = SchemeRegistry::from_json_str(r##"{
            "foo": {"id": "bar", "label": "Bar", "colors": ["#000", "#fff"]}
        }"##);
        assert!(matches!(r, Err(Error::Json(_))));
        let r = SchemeRegistry::from_reader(
            &br##"{"bar": {"id": "bar", "label": "Bar", "colors": ["#000"]}}"##[..])
            .unwrap();
        assert!(r.contains("bar"));
    }
}
