//! Swatch previews of color schemes.

use serde::Serialize;
use tracing::debug;
use crate::{registry::SchemeRegistry, scheme::ColorScheme};

/// Number of colors shown for a scheme rendered linearly.
pub const LINEAR_SWATCH_COUNT: usize = 10;

/// One colored square of a preview.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Swatch {
    pub fill: String,
    /// Color of the 1px border: the fill itself, except that a `white`
    /// fill gets a `black` border to stay visible on white backgrounds.
    pub border: String,
}

impl Swatch {
    pub fn new(fill: impl Into<String>) -> Self {
        let fill = fill.into();
        let border = if fill == "white" { "black".to_string() }
                     else { fill.clone() };
        Swatch { fill, border }
    }
}

/// The colors to preview for `scheme`: exactly
/// [`LINEAR_SWATCH_COUNT`] interpolated colors when `linear`, the
/// scheme colors verbatim otherwise, nothing for a missing scheme.
pub fn preview_colors(scheme: Option<&ColorScheme>, linear: bool)
                      -> Vec<String> {
    match scheme {
        Some(s) if linear => s.get_colors(LINEAR_SWATCH_COUNT),
        Some(s) => s.colors.clone(),
        None => vec![],
    }
}

/// The preview of one scheme, as shown in an option of the control.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SwatchStrip {
    /// The requested identifier.
    pub id: String,
    /// Scheme label, `None` if the identifier did not resolve.
    pub label: Option<String>,
    pub swatches: Vec<Swatch>,
}

impl SwatchStrip {
    /// Preview scheme `id` of `registry`.  An unknown identifier gives
    /// a strip without swatches.
    pub fn new(registry: &SchemeRegistry, id: &str, linear: bool) -> Self {
        let scheme = registry.get(id);
        if scheme.is_none() {
            debug!(scheme = id, "no such color scheme, empty preview");
        }
        let swatches = preview_colors(scheme, linear).into_iter()
            .map(Swatch::new).collect();
        SwatchStrip { id: id.to_string(),
                      label: scheme.map(|s| s.label.clone()),
                      swatches }
    }

    /// Identifier of the tooltip wrapping the strip.
    pub fn tooltip_id(&self) -> String { format!("{}-tooltip", self.id) }

    /// Key of the `i`th swatch.
    pub fn key(&self, i: usize) -> String { format!("{}-{}", self.id, i) }

    pub fn fills(&self) -> impl Iterator<Item = &str> {
        self.swatches.iter().map(|s| s.fill.as_str())
    }
}
