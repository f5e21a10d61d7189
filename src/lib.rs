//! Color scheme selection with swatch previews.
//!
//! - [`ColorScheme`]s are kept in a [`SchemeRegistry`].
//! - A [`ColorSchemeControl`] offers a [`ChoiceList`] of scheme
//!   identifiers and previews each one as a [`SwatchStrip`]: the
//!   scheme colors as listed, or [`LINEAR_SWATCH_COUNT`] colors sampled
//!   from a [gradient](gradient::MultiGradient) through them.
//! - Selections from either select widget reach the parent through
//!   one [`OnChange`] callback.
//!
//! Built-in schemes: [`SchemeRegistry::categorical`] (d3, Google,
//! Airbnb, Superset palettes) and [`SchemeRegistry::sequential`]
//! (including the sequential and diverging
//! [schemes by Cynthia Brewer](https://colorbrewer2.org/)).
//!
//! # Example
//!
//! ```
//! use color_scheme_control::*;
//! let schemes: SchemeRegistry = [
//!     ColorScheme::new("d3Category10", "Category 10",
//!                      ["#1f77b4", "#ff7f0e"])].into_iter().collect();
//! let choices: ChoiceList =
//!     [("d3Category10", "Category 10")].into_iter().collect();
//! let r = ColorSchemeControl::new("Color Scheme", "color_scheme")
//!     .choices(choices)
//!     .schemes(schemes)
//!     .render();
//! let fills: Vec<_> = r.options[0].preview.fills().collect();
//! assert_eq!(fills, ["#1f77b4", "#ff7f0e"]);
//! ```

pub mod color;
pub mod gradient;
mod palettes;
mod scheme;
mod registry;
mod source;
mod choice;
mod swatch;
mod select;
mod control;
pub mod render;
mod config;
mod error;

pub use palettes::ty::SchemeKind;
pub use scheme::{ColorScheme, Generator};
pub use registry::SchemeRegistry;
pub use source::Source;
pub use choice::{Choice, ChoiceList};
pub use swatch::{LINEAR_SWATCH_COUNT, Swatch, SwatchStrip, preview_colors};
pub use select::{Binding, Current, Dispatcher, Legacy, OnChange, SchemeOption};
pub use control::{ColorSchemeControl, ControlHeader, RenderedControl};
pub use config::ControlConfig;
pub use error::{Error, Result};
