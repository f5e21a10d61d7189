//! The color scheme selector.
//!
//! A [`ColorSchemeControl`] holds the properties given by its parent:
//! the offered identifiers, the schemes, the current value and the
//! `onChange` callback.  It keeps no state of its own; the selected
//! identifier lives in the parent and comes back through
//! [`ColorSchemeControl::value`].
//!
//! [`ColorSchemeControl::render`] resolves the choices and schemes
//! once and computes the option list shared by both select widgets.

use serde::Serialize;
use tracing::{debug, warn};
use crate::{choice::ChoiceList,
            registry::SchemeRegistry,
            select::{Current, Dispatcher, Legacy, OnChange, SchemeOption},
            source::Source,
            swatch::SwatchStrip};

/// A labeled selector of color schemes.
///
/// # Example
///
/// ```
/// use color_scheme_control::{ChoiceList, ColorSchemeControl, SchemeRegistry};
/// let choices: ChoiceList =
///     [("d3Category10", "D3 Category 10")].into_iter().collect();
/// let ctl = ColorSchemeControl::new("Color Scheme", "color_scheme")
///     .schemes(SchemeRegistry::categorical())
///     .choices(choices)
///     .value("d3Category10");
/// let r = ctl.render();
/// assert_eq!(r.placeholder, "Select (1)");
/// assert_eq!(r.options[0].preview.swatches.len(), 10);
/// ```
#[derive(Clone, Debug)]
pub struct ColorSchemeControl {
    label: String,
    name: String,
    description: Option<String>,
    value: Option<String>,
    default_value: Option<String>,
    choices: Source<ChoiceList>,
    schemes: Source<SchemeRegistry>,
    is_linear: bool,
    clearable: bool,
    label_margin: u32,
    on_change: OnChange,
}

impl ColorSchemeControl {
    /// A control with no choice, no scheme, not clearable and ignoring
    /// changes.
    pub fn new(label: impl Into<String>, name: impl Into<String>) -> Self {
        ColorSchemeControl {
            label: label.into(),
            name: name.into(),
            description: None,
            value: None,
            default_value: None,
            choices: Source::default(),
            schemes: Source::default(),
            is_linear: false,
            clearable: false,
            label_margin: 0,
            on_change: OnChange::default(),
        }
    }

    pub fn description(mut self, d: impl Into<String>) -> Self {
        self.description = Some(d.into());
        self
    }

    /// Set the selected identifier.  An empty string means no
    /// selection.
    pub fn value(mut self, v: impl Into<String>) -> Self {
        let v = v.into();
        self.value = if v.is_empty() { None } else { Some(v) };
        self
    }

    /// Identifier the legacy select falls back to.
    pub fn default_value(mut self, v: impl Into<String>) -> Self {
        self.default_value = Some(v.into());
        self
    }

    pub fn choices(mut self, c: impl Into<Source<ChoiceList>>) -> Self {
        self.choices = c.into();
        self
    }

    pub fn schemes(mut self, s: impl Into<Source<SchemeRegistry>>) -> Self {
        self.schemes = s.into();
        self
    }

    /// Preview schemes with interpolated colors instead of their
    /// listed colors.
    pub fn linear(mut self, is_linear: bool) -> Self {
        self.is_linear = is_linear;
        self
    }

    pub fn clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    /// Top margin of the legacy select, in pixels.
    pub fn label_margin(mut self, px: u32) -> Self {
        self.label_margin = px;
        self
    }

    pub fn on_change(mut self, f: OnChange) -> Self {
        self.on_change = f;
        self
    }

    pub fn label_text(&self) -> &str { &self.label }

    pub fn name(&self) -> &str { &self.name }

    pub fn selected(&self) -> Option<&str> { self.value.as_deref() }

    pub fn is_linear(&self) -> bool { self.is_linear }

    pub fn is_clearable(&self) -> bool { self.clearable }

    fn dispatcher(&self) -> Dispatcher {
        Dispatcher::new(self.clearable, self.on_change.clone())
    }

    /// Handle a selection from the current select.
    pub fn select(&self, value: Option<String>) -> bool {
        self.dispatcher().dispatch::<Current>(value)
    }

    /// Handle a selection from the legacy select.
    pub fn select_legacy(&self, option: Option<SchemeOption>) -> bool {
        self.dispatcher().dispatch::<Legacy>(option)
    }

    /// Resolve choices and schemes and compute what to display.
    pub fn render(&self) -> RenderedControl {
        let schemes = self.schemes.resolve();
        let choices = self.choices.resolve();
        debug!(name = %self.name, choices = choices.len(),
               schemes = schemes.len(), "rendering color scheme control");
        let options: Vec<SchemeOption> = choices.iter()
            .map(|c| {
                if !schemes.contains(&c.value) {
                    warn!(scheme = %c.value, control = %self.name,
                          "choice does not match any color scheme");
                }
                let preview = SwatchStrip::new(&schemes, &c.value,
                                               self.is_linear);
                let label = preview.label.clone()
                    .filter(|l| !l.is_empty())
                    .unwrap_or_else(|| c.label.clone());
                SchemeOption { value: c.value.clone(), label, preview }
            })
            .collect();
        let value_preview = self.value.as_deref()
            .map(|v| SwatchStrip::new(&schemes, v, self.is_linear));
        RenderedControl {
            header: ControlHeader { label: self.label.clone(),
                                    description: self.description.clone() },
            name: format!("select-{}", self.name),
            placeholder: format!("Select ({})", options.len()),
            value: self.value.clone(),
            default_value: self.default_value.clone(),
            clearable: self.clearable,
            label_margin: self.label_margin,
            options,
            value_preview,
        }
    }
}

/// Label and description shown above the selects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ControlHeader {
    pub label: String,
    pub description: Option<String>,
}

/// The outcome of one render pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RenderedControl {
    pub header: ControlHeader,
    /// `select-<name>`, shared by both selects.
    pub name: String,
    /// `Select (<number of options>)`.
    pub placeholder: String,
    pub value: Option<String>,
    pub default_value: Option<String>,
    pub clearable: bool,
    pub label_margin: u32,
    pub options: Vec<SchemeOption>,
    /// Preview of the selected scheme, if any.
    pub value_preview: Option<SwatchStrip>,
}

impl RenderedControl {
    /// The option of identifier `value`, if offered.
    pub fn option(&self, value: &str) -> Option<&SchemeOption> {
        self.options.iter().find(|o| o.value == value)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex, atomic::{AtomicUsize, Ordering}};
    use crate::scheme::ColorScheme;

    fn example_registry() -> SchemeRegistry {
        [ColorScheme::new("d3Category10", "Category 10",
                          ["#1f77b4", "#ff7f0e"])].into_iter().collect()
    }

    fn example_choices() -> ChoiceList {
        [("d3Category10", "Category 10")].into_iter().collect()
    }

    #[test]
    fn categorical_example() {
        let r = ColorSchemeControl::new("Color Scheme", "color_scheme")
            .choices(example_choices())
            .schemes(example_registry())
            .render();
        let fills: Vec<_> = r.options[0].preview.fills().collect();
        assert_eq!(fills, ["#1f77b4", "#ff7f0e"]);
        assert_eq!(r.name, "select-color_scheme");
        assert_eq!(r.placeholder, "Select (1)");
        assert_eq!(r.value, None);
        assert_eq!(r.value_preview, None);
    }

    #[test]
    fn labels_prefer_scheme_label() {
        let choices: ChoiceList = [("d3Category10", "fallback"),
                                   ("missing", "Missing scheme")]
            .into_iter().collect();
        let r = ColorSchemeControl::new("l", "n")
            .choices(choices)
            .schemes(example_registry())
            .linear(true)
            .render();
        assert_eq!(r.option("d3Category10").unwrap().label, "Category 10");
        let missing = r.option("missing").unwrap();
        assert_eq!(missing.label, "Missing scheme");
        assert!(missing.preview.swatches.is_empty());
        assert_eq!(r.option("d3Category10").unwrap().preview.swatches.len(), 10);
    }

    #[test]
    fn providers_are_resolved_on_every_render() {
        let calls = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&calls);
        let ctl = ColorSchemeControl::new("l", "n")
            .choices(Source::provider(example_choices))
            .schemes(Source::provider(move || {
                c.fetch_add(1, Ordering::SeqCst);
                example_registry()
            }));
        ctl.render();
        ctl.render();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn value_preview_and_empty_value() {
        let ctl = ColorSchemeControl::new("l", "n")
            .schemes(example_registry())
            .value("d3Category10");
        let r = ctl.render();
        assert_eq!(r.value_preview.unwrap().swatches.len(), 2);
        assert_eq!(ColorSchemeControl::new("l", "n").value("").selected(), None);
    }

    #[test]
    fn selection_goes_to_on_change() {
        let calls = Arc::new(Mutex::new(vec![]));
        let c = Arc::clone(&calls);
        let ctl = ColorSchemeControl::new("l", "n")
            .choices(example_choices())
            .schemes(example_registry())
            .clearable(true)
            .on_change(OnChange::new(move |v| c.lock().unwrap().push(v)));
        let opt = ctl.render().options[0].clone();
        assert!(ctl.select_legacy(Some(opt)));
        assert!(ctl.select(None));
        assert_eq!(*calls.lock().unwrap(),
                   [Some("d3Category10".to_string()), None]);
    }

    #[test]
    fn defaults() {
        let ctl = ColorSchemeControl::new("Label", "name");
        let r = ctl.render();
        assert!(r.options.is_empty());
        assert_eq!(r.placeholder, "Select (0)");
        assert!(!r.clearable);
        assert!(!ctl.is_linear());
        assert!(!ctl.select(None));
        assert!(ctl.select(Some("x".to_string())));
    }
}
