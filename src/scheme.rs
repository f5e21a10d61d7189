//! Color schemes.

use std::{fmt, sync::Arc};
use rgb::RGB8;
use serde::{Deserialize, Serialize};
use tracing::warn;
use crate::{color,
            gradient::{ColorRange, MultiGradient},
            palettes::ty::{SchemeData, SchemeKind}};

/// A function returning `n` interpolated colors.
#[derive(Clone)]
pub struct Generator(Arc<dyn Fn(usize) -> Vec<String> + Send + Sync>);

impl Generator {
    pub fn new<F>(f: F) -> Self
    where F: Fn(usize) -> Vec<String> + Send + Sync + 'static {
        Generator(Arc::new(f))
    }

    /// Return the `n` colors produced by the generator.
    pub fn colors(&self, n: usize) -> Vec<String> { (self.0)(n) }
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Generator(..)")
    }
}

/// A named, ordered list of colors, usable categorically (colors as
/// listed) or linearly (colors sampled from a continuous range).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ColorScheme {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub kind: SchemeKind,
    pub colors: Vec<String>,
    #[serde(skip)]
    generator: Option<Generator>,
}

impl ColorScheme {
    /// Create a categorical scheme.
    pub fn new<S>(id: impl Into<String>, label: impl Into<String>,
                  colors: impl IntoIterator<Item = S>) -> Self
    where S: Into<String> {
        ColorScheme { id: id.into(), label: label.into(),
                      kind: SchemeKind::Categorical,
                      colors: colors.into_iter().map(Into::into).collect(),
                      generator: None }
    }

    /// Set the kind of the scheme.
    pub fn with_kind(mut self, kind: SchemeKind) -> Self {
        self.kind = kind;
        self
    }

    /// Use `generator` to produce interpolated colors instead of the
    /// default gradient through [`ColorScheme::colors`].
    pub fn with_generator(mut self, generator: Generator) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Whether a custom generator was set.
    pub fn has_generator(&self) -> bool { self.generator.is_some() }

    /// Returns `n` colors sampled from the scheme.
    ///
    /// Without a custom generator, the colors are evenly spaced along
    /// a L\*C\*h gradient through the scheme colors, the first and last
    /// samples being the first and last scheme colors.  If a scheme
    /// color cannot be parsed, no color is returned.
    pub fn get_colors(&self, n: usize) -> Vec<String> {
        if let Some(g) = &self.generator {
            return g.colors(n);
        }
        let parsed: Result<Vec<RGB8>, _> = self.colors.iter()
            .map(|c| color::parse(c).map(|c| RGB8::new(c.r, c.g, c.b)))
            .collect();
        match parsed {
            Ok(stops) => match MultiGradient::new(&stops) {
                Some(g) => g.sample(n).into_iter().map(color::to_hex).collect(),
                None => vec![],
            },
            Err(e) => {
                warn!(scheme = %self.id, error = %e,
                      "cannot interpolate color scheme");
                vec![]
            }
        }
    }

    pub(crate) fn from_data(d: &SchemeData) -> Self {
        ColorScheme::new(d.id, d.label, d.colors.iter().copied())
            .with_kind(d.kind)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_through_colors() {
        let s = ColorScheme::new("bw", "black/white", ["black", "white"])
            .with_kind(SchemeKind::Sequential);
        let c = s.get_colors(10);
        assert_eq!(c.len(), 10);
        assert_eq!(c[0], "#000000");
        assert_eq!(c[9], "#ffffff");
    }

    #[test]
    fn generator_takes_precedence() {
        let s = ColorScheme::new("g", "g", ["#000000"])
            .with_generator(Generator::new(|n| vec!["red".to_string(); n]));
        assert!(s.has_generator());
        assert_eq!(s.get_colors(3), vec!["red", "red", "red"]);
    }

    #[test]
    fn unparseable_colors_give_nothing() {
        let s = ColorScheme::new("bad", "bad", ["#1f77b4", "chartreuse-ish"]);
        assert!(s.get_colors(10).is_empty());
        let empty = ColorScheme::new("empty", "empty", Vec::<String>::new());
        assert!(empty.get_colors(10).is_empty());
    }

    #[test]
    fn deserialize_defaults_to_categorical() {
        let s: ColorScheme = serde_json::from_str(
            r##"{"id": "d3Category10", "label": "Category 10",
                 "colors": ["#1f77b4", "#ff7f0e"]}"##).unwrap();
        assert_eq!(s.kind, SchemeKind::Categorical);
        assert_eq!(s.colors, vec!["#1f77b4", "#ff7f0e"]);
        assert!(!s.has_generator());
    }
}
