use std::io;

use termcolor::{Color as TermColor, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::color::Color;
use crate::colorizer::LegendEntry;
use crate::palettes::Palette;

fn spec_for(color: Color) -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(TermColor::Rgb(color.r, color.g, color.b)));
    spec
}

/// Write a strip of `██` blocks, one per color.
pub fn write_strip<W: WriteColor>(out: &mut W, colors: &[Color]) -> io::Result<()> {
    for &color in colors {
        out.set_color(&spec_for(color))?;
        write!(out, "██")?;
    }
    out.reset()?;
    writeln!(out)
}

/// One line per palette: name, kind, capacity, then a 32-block preview.
pub fn write_palette_row<W: WriteColor>(out: &mut W, palette: &Palette) -> io::Result<()> {
    write!(
        out,
        "{:<12} {:<12} {:>3}  ",
        palette.name(),
        palette.kind().to_string(),
        palette.capacity()
    )?;
    let preview = palette.take(palette.capacity().min(32)).map_err(io::Error::from)?;
    write_strip(out, preview.colors())
}

/// One line per entry: swatch, hex value, label.
pub fn write_legend<W: WriteColor>(out: &mut W, legend: &[LegendEntry]) -> io::Result<()> {
    for entry in legend {
        out.set_color(&spec_for(entry.color))?;
        write!(out, "████")?;
        out.reset()?;
        writeln!(out, " {}  {}", entry.color, entry.label)?;
    }
    Ok(())
}

pub fn stdout() -> StandardStream {
    StandardStream::stdout(ColorChoice::Auto)
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::Buffer;

    #[test]
    fn test_legend_lines() {
        let legend = vec![
            LegendEntry {
                label: "a".into(),
                color: Color::new(0x44, 0x01, 0x54),
            },
            LegendEntry {
                label: "0–249".into(),
                color: Color::new(0xfd, 0xe7, 0x25),
            },
        ];
        let mut buf = Buffer::no_color();
        write_legend(&mut buf, &legend).unwrap();
        let text = String::from_utf8(buf.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["████ #440154  a", "████ #fde725  0–249"]);
    }

    #[test]
    fn test_strip_block_count() {
        let mut buf = Buffer::no_color();
        write_strip(&mut buf, &[Color::new(0, 0, 0); 3]).unwrap();
        let text = String::from_utf8(buf.into_inner()).unwrap();
        assert_eq!(text.trim_end(), "██████");
    }
}
