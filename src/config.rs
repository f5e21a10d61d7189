//! JSON configuration of a control.
//!
//! ```json
//! {
//!   "label": "Color Scheme",
//!   "name": "color_scheme",
//!   "value": "d3Category10",
//!   "isLinear": false,
//!   "clearable": true,
//!   "choices": [["d3Category10", "Category 10"]],
//!   "schemes": {
//!     "d3Category10": {"id": "d3Category10", "label": "Category 10",
//!                      "colors": ["#1f77b4", "#ff7f0e"]}
//!   }
//! }
//! ```
//!
//! Missing keys take the control defaults (no choice, no scheme, not
//! clearable, categorical previews).

use std::io::Read;
use serde::{Deserialize, Serialize};
use crate::{choice::ChoiceList,
            control::ColorSchemeControl,
            error::Result,
            registry::SchemeRegistry,
            select::OnChange};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlConfig {
    pub label: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, rename = "default", skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default)]
    pub clearable: bool,
    #[serde(default)]
    pub is_linear: bool,
    #[serde(default)]
    pub label_margin: u32,
    #[serde(default)]
    pub choices: ChoiceList,
    #[serde(default)]
    pub schemes: SchemeRegistry,
}

impl ControlConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_reader(rdr: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(rdr)?)
    }

    /// Build the control, reporting selections to `on_change`.
    pub fn into_control(self, on_change: OnChange) -> ColorSchemeControl {
        let mut ctl = ColorSchemeControl::new(self.label, self.name)
            .choices(self.choices)
            .schemes(self.schemes)
            .linear(self.is_linear)
            .clearable(self.clearable)
            .label_margin(self.label_margin)
            .on_change(on_change);
        if let Some(d) = self.description { ctl = ctl.description(d) }
        if let Some(v) = self.value { ctl = ctl.value(v) }
        if let Some(d) = self.default_value { ctl = ctl.default_value(d) }
        ctl
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn full_config() {
        let cfg = ControlConfig::from_json_str(r##"{
            "label": "Color Scheme", "name": "color_scheme",
            "value": "d3Category10", "default": "d3Category10",
            "isLinear": true, "clearable": true, "labelMargin": 8,
            "choices": [["d3Category10", "Category 10"]],
            "schemes": {"d3Category10": {"id": "d3Category10",
                                         "label": "Category 10",
                                         "colors": ["#1f77b4", "#ff7f0e"]}}
        }"##).unwrap();
        assert!(cfg.is_linear);
        assert_eq!(cfg.label_margin, 8);
        let ctl = cfg.into_control(OnChange::default());
        assert!(ctl.is_clearable());
        let r = ctl.render();
        assert_eq!(r.default_value.as_deref(), Some("d3Category10"));
        assert_eq!(r.options[0].preview.swatches.len(), 10);
    }

    #[test]
    fn minimal_config_uses_defaults() {
        let cfg = ControlConfig::from_json_str(
            r#"{"label": "Scheme", "name": "scheme"}"#).unwrap();
        assert!(!cfg.clearable);
        assert!(cfg.choices.is_empty());
        assert!(cfg.schemes.is_empty());
        let r = cfg.into_control(OnChange::default()).render();
        assert_eq!(r.placeholder, "Select (0)");
    }

    #[test]
    fn label_and_name_are_required() {
        assert!(matches!(ControlConfig::from_json_str(r#"{"label": "x"}"#),
                         Err(Error::Json(_))));
    }
}
