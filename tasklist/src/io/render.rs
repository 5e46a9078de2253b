//! Rendering surfaces for projections.
//!
//! [`TextRenderer`] draws the list for a human (24-bit ANSI colors from the
//! active palette, or plain text). [`JsonRenderer`] emits one JSON object per
//! frame for other programs.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::projector::{Projection, TitleStyle};
use crate::core::theme::{Palette, ThemeMode, ThemeSelector};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const STRIKE: &str = "\x1b[9m";
const MENU_GLYPH: char = '≡';
const RULE_WIDTH: usize = 32;

/// A list rendering surface.
pub trait Renderer {
    /// Draw the full list for the current state.
    fn frame(&mut self, projection: &Projection, theme: &ThemeSelector) -> Result<()>;
    /// Short status line (e.g. "Deleted.").
    fn notice(&mut self, message: &str) -> Result<()>;
    /// Ask for the next line of input.
    fn prompt(&mut self) -> Result<()>;
}

pub struct TextRenderer<W> {
    out: W,
    color: bool,
    empty_placeholder: String,
    input_placeholder: String,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(
        out: W,
        color: bool,
        empty_placeholder: impl Into<String>,
        input_placeholder: impl Into<String>,
    ) -> Self {
        Self {
            out,
            color,
            empty_placeholder: empty_placeholder.into(),
            input_placeholder: input_placeholder.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, hex: &str, text: &str) -> String {
        match (self.color, fg(hex)) {
            (true, Some(code)) => format!("{}{}{}", code, text, RESET),
            _ => text.to_string(),
        }
    }

    fn rule(&self, palette: &Palette) -> String {
        self.paint(palette.border, &"─".repeat(RULE_WIDTH))
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn frame(&mut self, projection: &Projection, theme: &ThemeSelector) -> Result<()> {
        let palette = theme.palette();
        let total = projection.rows.len();
        let heading = format!("{} Tasks", MENU_GLYPH);
        let heading = if self.color {
            format!("{}{}", BOLD, self.paint(palette.text, &heading))
        } else {
            heading
        };
        let counts = self.paint(
            palette.secondary_text,
            &format!("{} open / {} total ({})", projection.open_count(), total, theme.mode()),
        );
        let rule = self.rule(palette);
        writeln!(self.out, "{}  {}", heading, counts).context("write header")?;
        writeln!(self.out, "{}", rule).context("write header")?;

        if projection.is_empty {
            let placeholder = self.paint(palette.placeholder, &self.empty_placeholder);
            writeln!(self.out, "  {}", placeholder).context("write placeholder")?;
        }

        let width = total.to_string().len();
        for (index, row) in projection.rows.iter().enumerate() {
            let glyph = self.paint(row.checkbox_color, &row.checkbox_glyph.symbol().to_string());
            let title = match (row.title_style, self.color) {
                (TitleStyle::Strikethrough, true) => {
                    format!("{}{}", STRIKE, self.paint(palette.secondary_text, &row.title))
                }
                _ => self.paint(palette.text, &row.title),
            };
            writeln!(
                self.out,
                "  {:>width$}. {} {}",
                index + 1,
                glyph,
                title,
                width = width
            )
            .with_context(|| format!("write row {}", row.key))?;
        }

        writeln!(self.out, "{}", rule).context("write footer")?;
        self.out.flush().context("flush frame")
    }

    fn notice(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{}", message).context("write notice")
    }

    fn prompt(&mut self) -> Result<()> {
        write!(self.out, "{} › ", self.input_placeholder).context("write prompt")?;
        self.out.flush().context("flush prompt")
    }
}

/// JSON-lines surface: one object per frame or notice, nothing on prompt.
pub struct JsonRenderer<W> {
    out: W,
}

#[derive(Serialize)]
struct Frame<'a> {
    theme: ThemeMode,
    palette: &'a Palette,
    #[serde(flatten)]
    projection: &'a Projection,
}

#[derive(Serialize)]
struct Notice<'a> {
    notice: &'a str,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let line = serde_json::to_string(value).context("serialize frame json")?;
        writeln!(self.out, "{}", line).context("write frame json")?;
        self.out.flush().context("flush frame json")
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn frame(&mut self, projection: &Projection, theme: &ThemeSelector) -> Result<()> {
        self.emit(&Frame {
            theme: theme.mode(),
            palette: theme.palette(),
            projection,
        })
    }

    fn notice(&mut self, message: &str) -> Result<()> {
        self.emit(&Notice { notice: message })
    }

    fn prompt(&mut self) -> Result<()> {
        Ok(())
    }
}

/// 24-bit foreground escape for a `#rrggbb` color.
fn fg(hex: &str) -> Option<String> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(digits.get(range)?, 16).ok();
    let (r, g, b) = (channel(0..2)?, channel(2..4)?, channel(4..6)?);
    Some(format!("\x1b[38;2;{};{};{}m", r, g, b))
}
