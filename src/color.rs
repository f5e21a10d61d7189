//! CSS color strings.
//!
//! Schemes carry their colors as the strings a style sheet would
//! accept.  Interpolation needs actual components, so the strings are
//! parsed into [`rgb`] pixels here and formatted back as `#rrggbb`.

use rgb::{RGB8, RGBA8};
use crate::error::{Error, Result};

/// Parse a CSS color: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`,
/// `rgb()`, `rgba()`, `hsl()`, `hsla()`, one of the CSS named colors
/// or `transparent`.
///
/// # Example
///
/// ```
/// use color_scheme_control::color;
/// let c = color::parse("#1f77b4").unwrap();
/// assert_eq!((c.r, c.g, c.b, c.a), (0x1f, 0x77, 0xb4, 255));
/// let c = color::parse("steelblue").unwrap();
/// assert_eq!((c.r, c.g, c.b), (0x46, 0x82, 0xb4));
/// ```
pub fn parse(s: &str) -> Result<RGBA8> {
    let invalid = || Error::InvalidColor(s.to_string());
    let t = s.trim();
    if let Some(hex) = t.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(invalid);
    }
    let lower = t.to_ascii_lowercase();
    if let Some(args) = lower.strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb(")) {
        let args = args.strip_suffix(')').ok_or_else(invalid)?;
        return parse_rgb(&split_args(args)).ok_or_else(invalid);
    }
    if let Some(args) = lower.strip_prefix("hsla(")
        .or_else(|| lower.strip_prefix("hsl(")) {
        let args = args.strip_suffix(')').ok_or_else(invalid)?;
        return parse_hsl(&split_args(args)).ok_or_else(invalid);
    }
    if lower == "transparent" {
        return Ok(RGBA8::new(0, 0, 0, 0));
    }
    named(&lower).map(|c| RGBA8::new(c.r, c.g, c.b, 255))
        .ok_or_else(invalid)
}

/// Format a color as `#rrggbb` (lowercase).
pub fn to_hex(c: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

fn parse_hex(hex: &str) -> Option<RGBA8> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) { return None }
    let digit = |i: usize| u8::from_str_radix(&hex[i ..= i], 16).ok();
    let byte = |i: usize| u8::from_str_radix(&hex[i .. i + 2], 16).ok();
    match hex.len() {
        3 | 4 => {
            let a = if hex.len() == 4 { digit(3)? * 17 } else { 255 };
            Some(RGBA8::new(digit(0)? * 17, digit(1)? * 17, digit(2)? * 17, a))
        }
        6 | 8 => {
            let a = if hex.len() == 8 { byte(6)? } else { 255 };
            Some(RGBA8::new(byte(0)?, byte(2)?, byte(4)?, a))
        }
        _ => None,
    }
}

/// Arguments are separated by commas, or by spaces with an optional
/// `/` before alpha.
fn split_args(args: &str) -> Vec<&str> {
    args.split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect()
}

fn number(p: &str) -> Option<f64> {
    let v = p.parse::<f64>().ok()?;
    if v.is_finite() { Some(v) } else { None }
}

/// A percentage or a plain number, divided by `scale`, in \[0, 1\].
fn fraction(p: &str, scale: f64) -> Option<f64> {
    let v = match p.strip_suffix('%') {
        Some(pct) => number(pct)? / 100.,
        None => number(p)? / scale,
    };
    Some(v.clamp(0., 1.))
}

fn alpha(parts: &[&str]) -> Option<u8> {
    match parts.get(3) {
        Some(p) => Some((fraction(p, 1.)? * 255.).round() as u8),
        None => Some(255),
    }
}

/// Components are integers in 0..=255 or percentages; alpha is in
/// \[0, 1\] or a percentage.  Out of range values are clamped.
fn parse_rgb(parts: &[&str]) -> Option<RGBA8> {
    if parts.len() != 3 && parts.len() != 4 { return None }
    let component = |p: &str| {
        fraction(p, 255.).map(|v| (v * 255.).round() as u8)
    };
    Some(RGBA8::new(component(parts[0])?, component(parts[1])?,
                    component(parts[2])?, alpha(parts)?))
}

/// Hue in degrees (optionally suffixed by `deg`), saturation and
/// lightness as percentages.
fn parse_hsl(parts: &[&str]) -> Option<RGBA8> {
    if parts.len() != 3 && parts.len() != 4 { return None }
    let h = number(parts[0].strip_suffix("deg").unwrap_or(parts[0]))?;
    let h = h.rem_euclid(360.) / 360.;
    let s = fraction(parts[1], 100.)?;
    let l = fraction(parts[2], 100.)?;
    let q = if l < 0.5 { l * (1. + s) } else { l + s - l * s };
    let p = 2. * l - q;
    let channel = |t: f64| {
        let t = t.rem_euclid(1.);
        let v = if t < 1. / 6. { p + (q - p) * 6. * t }
                else if t < 0.5 { q }
                else if t < 2. / 3. { p + (q - p) * (2. / 3. - t) * 6. }
                else { p };
        (v * 255.).round() as u8
    };
    Some(RGBA8::new(channel(h + 1. / 3.), channel(h), channel(h - 1. / 3.),
                    alpha(parts)?))
}

/// The CSS named colors, sorted by name.
const NAMED: &[(&str, u32)] = &[
    ("aliceblue", 0xf0f8ff), ("antiquewhite", 0xfaebd7), ("aqua", 0x00ffff),
    ("aquamarine", 0x7fffd4), ("azure", 0xf0ffff), ("beige", 0xf5f5dc),
    ("bisque", 0xffe4c4), ("black", 0x000000), ("blanchedalmond", 0xffebcd),
    ("blue", 0x0000ff), ("blueviolet", 0x8a2be2), ("brown", 0xa52a2a),
    ("burlywood", 0xdeb887), ("cadetblue", 0x5f9ea0),
    ("chartreuse", 0x7fff00), ("chocolate", 0xd2691e), ("coral", 0xff7f50),
    ("cornflowerblue", 0x6495ed), ("cornsilk", 0xfff8dc),
    ("crimson", 0xdc143c), ("cyan", 0x00ffff), ("darkblue", 0x00008b),
    ("darkcyan", 0x008b8b), ("darkgoldenrod", 0xb8860b),
    ("darkgray", 0xa9a9a9), ("darkgreen", 0x006400), ("darkgrey", 0xa9a9a9),
    ("darkkhaki", 0xbdb76b), ("darkmagenta", 0x8b008b),
    ("darkolivegreen", 0x556b2f), ("darkorange", 0xff8c00),
    ("darkorchid", 0x9932cc), ("darkred", 0x8b0000), ("darksalmon", 0xe9967a),
    ("darkseagreen", 0x8fbc8f), ("darkslateblue", 0x483d8b),
    ("darkslategray", 0x2f4f4f), ("darkslategrey", 0x2f4f4f),
    ("darkturquoise", 0x00ced1), ("darkviolet", 0x9400d3),
    ("deeppink", 0xff1493), ("deepskyblue", 0x00bfff), ("dimgray", 0x696969),
    ("dimgrey", 0x696969), ("dodgerblue", 0x1e90ff), ("firebrick", 0xb22222),
    ("floralwhite", 0xfffaf0), ("forestgreen", 0x228b22),
    ("fuchsia", 0xff00ff), ("gainsboro", 0xdcdcdc), ("ghostwhite", 0xf8f8ff),
    ("gold", 0xffd700), ("goldenrod", 0xdaa520), ("gray", 0x808080),
    ("green", 0x008000), ("greenyellow", 0xadff2f), ("grey", 0x808080),
    ("honeydew", 0xf0fff0), ("hotpink", 0xff69b4), ("indianred", 0xcd5c5c),
    ("indigo", 0x4b0082), ("ivory", 0xfffff0), ("khaki", 0xf0e68c),
    ("lavender", 0xe6e6fa), ("lavenderblush", 0xfff0f5),
    ("lawngreen", 0x7cfc00), ("lemonchiffon", 0xfffacd),
    ("lightblue", 0xadd8e6), ("lightcoral", 0xf08080),
    ("lightcyan", 0xe0ffff), ("lightgoldenrodyellow", 0xfafad2),
    ("lightgray", 0xd3d3d3), ("lightgreen", 0x90ee90),
    ("lightgrey", 0xd3d3d3), ("lightpink", 0xffb6c1),
    ("lightsalmon", 0xffa07a), ("lightseagreen", 0x20b2aa),
    ("lightskyblue", 0x87cefa), ("lightslategray", 0x778899),
    ("lightslategrey", 0x778899), ("lightsteelblue", 0xb0c4de),
    ("lightyellow", 0xffffe0), ("lime", 0x00ff00), ("limegreen", 0x32cd32),
    ("linen", 0xfaf0e6), ("magenta", 0xff00ff), ("maroon", 0x800000),
    ("mediumaquamarine", 0x66cdaa), ("mediumblue", 0x0000cd),
    ("mediumorchid", 0xba55d3), ("mediumpurple", 0x9370db),
    ("mediumseagreen", 0x3cb371), ("mediumslateblue", 0x7b68ee),
    ("mediumspringgreen", 0x00fa9a), ("mediumturquoise", 0x48d1cc),
    ("mediumvioletred", 0xc71585), ("midnightblue", 0x191970),
    ("mintcream", 0xf5fffa), ("mistyrose", 0xffe4e1), ("moccasin", 0xffe4b5),
    ("navajowhite", 0xffdead), ("navy", 0x000080), ("oldlace", 0xfdf5e6),
    ("olive", 0x808000), ("olivedrab", 0x6b8e23), ("orange", 0xffa500),
    ("orangered", 0xff4500), ("orchid", 0xda70d6),
    ("palegoldenrod", 0xeee8aa), ("palegreen", 0x98fb98),
    ("paleturquoise", 0xafeeee), ("palevioletred", 0xdb7093),
    ("papayawhip", 0xffefd5), ("peachpuff", 0xffdab9), ("peru", 0xcd853f),
    ("pink", 0xffc0cb), ("plum", 0xdda0dd), ("powderblue", 0xb0e0e6),
    ("purple", 0x800080), ("rebeccapurple", 0x663399), ("red", 0xff0000),
    ("rosybrown", 0xbc8f8f), ("royalblue", 0x4169e1),
    ("saddlebrown", 0x8b4513), ("salmon", 0xfa8072), ("sandybrown", 0xf4a460),
    ("seagreen", 0x2e8b57), ("seashell", 0xfff5ee), ("sienna", 0xa0522d),
    ("silver", 0xc0c0c0), ("skyblue", 0x87ceeb), ("slateblue", 0x6a5acd),
    ("slategray", 0x708090), ("slategrey", 0x708090), ("snow", 0xfffafa),
    ("springgreen", 0x00ff7f), ("steelblue", 0x4682b4), ("tan", 0xd2b48c),
    ("teal", 0x008080), ("thistle", 0xd8bfd8), ("tomato", 0xff6347),
    ("turquoise", 0x40e0d0), ("violet", 0xee82ee), ("wheat", 0xf5deb3),
    ("white", 0xffffff), ("whitesmoke", 0xf5f5f5), ("yellow", 0xffff00),
    ("yellowgreen", 0x9acd32),
];

fn named(name: &str) -> Option<RGB8> {
    let i = NAMED.binary_search_by_key(&name, |&(n, _)| n).ok()?;
    let c = NAMED[i].1;
    Some(RGB8::new((c >> 16) as u8, (c >> 8) as u8, c as u8))
}
