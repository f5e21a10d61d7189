use serde::{Deserialize, Serialize};

/// A built-in color scheme, as stored in the static tables.
pub(crate) struct SchemeData {
    pub(crate) id: &'static str,
    pub(crate) label: &'static str,
    pub(crate) kind: SchemeKind,
    pub(crate) colors: Vec<&'static str>, // Invariant: non-empty
}

/// Kind of color scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash,
         Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemeKind {
    /// Categorical color scheme.  Colors do not imply magnitude
    /// differences between classes; hues create the primary visual
    /// differences.  Best suited to nominal data, where the listed
    /// colors are shown as they are.
    #[default]
    Categorical,
    /// Sequential color scheme, suited to ordered data that progress
    /// from low to high.  Lightness steps dominate the look of these
    /// schemes.  Usually interpolated rather than shown verbatim.
    Sequential,
    /// Divergent color scheme.  They put equal emphasis on mid-range
    /// critical values and extremes at both ends of the data range.
    Diverging,
}

impl SchemeKind {
    /// Whether the scheme is meant to be sampled continuously.
    pub fn is_linear(self) -> bool {
        !matches!(self, SchemeKind::Categorical)
    }
}
