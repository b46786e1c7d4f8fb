//! RGBA colors and CSS color parsing.
//!
//! The color input and the retro tint both arrive as CSS strings, so this
//! module accepts the hex forms (`#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`)
//! and the functional `rgb()` / `rgba()` forms.

use serde::{Deserialize, Serialize};
use winnow::ascii::{float, space0};
use winnow::combinator::{alt, delimited, opt, preceded};
use winnow::prelude::*;
use winnow::token::take_while;

/// RGBA color. Stored as 4 × f32 [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build from 8-bit channels and a unit alpha, as CSS `rgba()` does.
    pub fn from_rgb8(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self::rgba(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            a.clamp(0.0, 1.0),
        )
    }

    /// Parse a hex color string. The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        // Expand the short forms so every case reads two digits per channel.
        let expanded: String = match hex.len() {
            3 | 4 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 | 8 => hex.to_string(),
            _ => return None,
        };

        let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
        let r = channel(0)?;
        let g = channel(2)?;
        let b = channel(4)?;
        let a = if expanded.len() == 8 { channel(6)? } else { 255 };
        Some(Self::from_rgb8(r, g, b, f32::from(a) / 255.0))
    }

    /// Parse any supported CSS color string.
    pub fn parse(input: &str) -> Result<Self, String> {
        let mut rest = input.trim();
        let color = alt((parse_hex_color, parse_rgb_function))
            .parse_next(&mut rest)
            .map_err(|_| format!("unrecognized color: {input:?}"))?;
        if !rest.trim().is_empty() {
            return Err(format!("trailing input after color: {rest:?}"));
        }
        Ok(color)
    }

    /// Quantize to 8-bit channels for the raster.
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            unit_to_u8(self.r),
            unit_to_u8(self.g),
            unit_to_u8(self.b),
            unit_to_u8(self.a),
        ]
    }

    /// Emit as shortest valid hex string (alpha omitted when opaque).
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }

    /// Same color with its alpha scaled by `factor`.
    pub fn with_alpha_scaled(self, factor: f32) -> Self {
        Self {
            a: (self.a * factor).clamp(0.0, 1.0),
            ..self
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

fn unit_to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn parse_hex_color(input: &mut &str) -> ModalResult<Color> {
    preceded('#', take_while(3..=8, |c: char| c.is_ascii_hexdigit()))
        .verify_map(Color::from_hex)
        .parse_next(input)
}

fn parse_rgb_function(input: &mut &str) -> ModalResult<Color> {
    preceded(
        alt(("rgba", "rgb")),
        delimited(
            (space0, '(', space0),
            (
                parse_channel,
                preceded(comma, parse_channel),
                preceded(comma, parse_channel),
                opt(preceded(comma, parse_unit)),
            ),
            (space0, ')'),
        ),
    )
    .map(|(r, g, b, a)| Color::from_rgb8(r, g, b, a.unwrap_or(1.0)))
    .parse_next(input)
}

fn comma(input: &mut &str) -> ModalResult<()> {
    (space0, ',', space0).void().parse_next(input)
}

/// A 0–255 channel; out-of-range values clamp like browsers do.
fn parse_channel(input: &mut &str) -> ModalResult<u8> {
    float
        .map(|v: f32| v.clamp(0.0, 255.0).round() as u8)
        .parse_next(input)
}

fn parse_unit(input: &mut &str) -> ModalResult<f32> {
    float.map(|v: f32| v.clamp(0.0, 1.0)).parse_next(input)
}
