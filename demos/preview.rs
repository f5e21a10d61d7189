//! Write `schemes.html` showing the built-in schemes as the control
//! previews them, followed by the markup of a control.
//!
//! Set `RUST_LOG=debug` to see the render passes.

use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use rgb::RGB8;
use tracing_subscriber::EnvFilter;
use color_scheme_control::{color, ChoiceList, ColorSchemeControl, OnChange,
                           SchemeRegistry, SwatchStrip, Source};

type Err = Box<dyn Error>;

fn gray(c: &str) -> Option<String> {
    let c = color::parse(c).ok()?;
    let x = (0.299 * c.r as f64 + 0.587 * c.g as f64 + 0.114 * c.b as f64)
        .round() as u8;
    Some(color::to_hex(RGB8::new(x, x, x)))
}

fn table_of_strip(fh: &mut impl Write, strip: &SwatchStrip,
                  width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for s in &strip.swatches {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {}; border: 1px solid {}\"></td>",
                 s.fill, s.border)?;
    }
    writeln!(fh, "<td rowspan=\"2\" style=\"padding-left: 7px\">\
                  {comment}</td></tr><tr>")?;
    for s in &strip.swatches {
        let g = gray(&s.fill).unwrap_or_default();
        writeln!(fh, "  <td style=\"width: {width}px; height: 12px; \
                      background-color: {g}\"></td>")?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

/// Sequential and diverging schemes are previewed interpolated.
fn registry(fh: &mut impl Write, r: &SchemeRegistry) -> Result<(), Err> {
    for s in r.iter() {
        let strip = SwatchStrip::new(r, &s.id, s.kind.is_linear());
        let c = format!("{} ({} colors)", s.label, strip.swatches.len());
        table_of_strip(fh, &strip, 40, &c)?;
    }
    Ok(())
}

fn main() -> Result<(), Err> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut fh = BufWriter::new(File::create("schemes.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>Color schemes: {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;

    writeln!(fh, "<h3>Categorical schemes</h3>")?;
    registry(&mut fh, &SchemeRegistry::categorical())?;
    writeln!(fh, "<h3>Sequential and diverging schemes</h3>")?;
    registry(&mut fh, &SchemeRegistry::sequential())?;

    writeln!(fh, "<h3>Control</h3>")?;
    let ctl = ColorSchemeControl::new("Linear Color Scheme", "linear_color_scheme")
        .description("Scheme used for continuous values")
        .schemes(Source::provider(SchemeRegistry::sequential))
        .choices(Source::provider(|| {
            ChoiceList::from_registry(&SchemeRegistry::sequential())
        }))
        .linear(true)
        .clearable(true)
        .value("blue_white_yellow")
        .on_change(OnChange::new(|v| println!("selected {v:?}")));
    let rendered = ctl.render();
    writeln!(fh, "{}", rendered.to_html())?;
    ctl.select(Some("fire".to_string()));
    ctl.select(None);

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
