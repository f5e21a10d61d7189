//! Property tests of the swatch previews and of the selection
//! callbacks.

use std::sync::{Arc, Mutex};
use proptest::prelude::*;
use color_scheme_control::{ChoiceList, ColorScheme, ColorSchemeControl,
                           LINEAR_SWATCH_COUNT, OnChange, SchemeOption,
                           SchemeRegistry, Swatch, SwatchStrip};

fn hex_color() -> impl Strategy<Value = String> {
    "#[0-9a-f]{6}"
}

fn css_color() -> impl Strategy<Value = String> {
    prop_oneof![
        hex_color(),
        prop::sample::select(vec!["steelblue", "darkred", "transparent",
                                  "rebeccapurple", "LightGoldenRodYellow"])
            .prop_map(str::to_string),
        (0u16..360, 0u8..=100, 0u8..=100)
            .prop_map(|(h, s, l)| format!("hsl({h}, {s}%, {l}%)")),
    ]
}

fn scheme() -> impl Strategy<Value = ColorScheme> {
    ("[a-zA-Z][a-zA-Z0-9_]{0,12}", ".{0,20}",
     prop::collection::vec(css_color(), 1..24))
        .prop_map(|(id, label, colors)| {
            ColorScheme::new(id, label, colors)
        })
}

fn recorder() -> (Arc<Mutex<Vec<Option<String>>>>, OnChange) {
    let calls = Arc::new(Mutex::new(vec![]));
    let c = Arc::clone(&calls);
    (calls, OnChange::new(move |v| c.lock().unwrap().push(v)))
}

proptest! {
    #[test]
    fn categorical_swatches_are_the_scheme_colors(s in scheme()) {
        let r: SchemeRegistry = std::iter::once(s.clone()).collect();
        let strip = SwatchStrip::new(&r, &s.id, false);
        let fills: Vec<_> = strip.fills().map(str::to_string).collect();
        prop_assert_eq!(fills, s.colors);
    }

    #[test]
    fn linear_swatches_are_ten(s in scheme()) {
        let r: SchemeRegistry = std::iter::once(s.clone()).collect();
        let strip = SwatchStrip::new(&r, &s.id, true);
        prop_assert_eq!(strip.swatches.len(), LINEAR_SWATCH_COUNT);
    }

    #[test]
    fn only_white_gets_a_black_border(fill in prop_oneof![
        Just("white".to_string()), hex_color(), ".{0,12}"]) {
        let s = Swatch::new(fill.clone());
        if fill == "white" {
            prop_assert_eq!(s.border, "black");
        } else {
            prop_assert_eq!(s.border, fill);
        }
    }

    #[test]
    fn unknown_identifiers_give_no_swatch(s in scheme(),
                                          other in "[a-z]{1,8}-missing",
                                          linear in any::<bool>()) {
        let r: SchemeRegistry = std::iter::once(s).collect();
        let strip = SwatchStrip::new(&r, &other, linear);
        prop_assert!(strip.swatches.is_empty());
    }

    #[test]
    fn selection_calls_on_change_once(s in scheme(), legacy in any::<bool>()) {
        let (calls, f) = recorder();
        let choices: ChoiceList =
            [(s.id.clone(), s.label.clone())].into_iter().collect();
        let r: SchemeRegistry = std::iter::once(s.clone()).collect();
        let ctl = ColorSchemeControl::new("Color Scheme", "scheme")
            .choices(choices)
            .schemes(r)
            .on_change(f);
        let fired = if legacy {
            let opt: SchemeOption = ctl.render().options[0].clone();
            ctl.select_legacy(Some(opt))
        } else {
            ctl.select(Some(s.id.clone()))
        };
        prop_assert!(fired);
        prop_assert_eq!(calls.lock().unwrap().clone(), vec![Some(s.id)]);
    }

    #[test]
    fn clearing_requires_clearable(clearable in any::<bool>(),
                                   legacy in any::<bool>()) {
        let (calls, f) = recorder();
        let ctl = ColorSchemeControl::new("Color Scheme", "scheme")
            .clearable(clearable)
            .on_change(f);
        let fired = if legacy { ctl.select_legacy(None) }
                    else { ctl.select(None) };
        prop_assert_eq!(fired, clearable);
        let expected = if clearable { vec![None] } else { vec![] };
        prop_assert_eq!(calls.lock().unwrap().clone(), expected);
    }
}

#[test]
fn builtin_example() {
    let r = SchemeRegistry::categorical();
    let strip = SwatchStrip::new(&r, "d3Category10", false);
    assert_eq!(strip.swatches.len(), 10);
    let strip = SwatchStrip::new(&SchemeRegistry::sequential(), "fire", true);
    assert_eq!(strip.swatches.len(), 10);
    assert_eq!(strip.swatches[0], Swatch::new("#ffffff"));
    assert_eq!(strip.swatches[9], Swatch::new("#000000"));
}
