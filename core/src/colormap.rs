//! Colors and sequential colormaps used to map edge weights to colors.

use std::fmt;
use std::str::FromStr;

use image::Rgb;

use crate::errors::{InteraxError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    const fn from_hex(hex: u32) -> Color {
        Color {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }
}

impl FromStr for Color {
    type Err = InteraxError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(InteraxError::InvalidColor(s.to_string()));
        }
        let hex =
            u32::from_str_radix(digits, 16).map_err(|_| InteraxError::InvalidColor(s.to_string()))?;
        Ok(Color::from_hex(hex))
    }
}

impl TryFrom<String> for Color {
    type Error = InteraxError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Color> for Rgb<u8> {
    fn from(c: Color) -> Self {
        Rgb([c.r, c.g, c.b])
    }
}

/// Sequential single-hue colormaps, from light (low weights) to dark (high weights).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Colormap {
    #[default]
    Blues,
    Greens,
    Greys,
    Oranges,
    Purples,
    Reds,
}

const BLUES: [Color; 9] = [
    Color::from_hex(0xf7fbff),
    Color::from_hex(0xdeebf7),
    Color::from_hex(0xc6dbef),
    Color::from_hex(0x9ecae1),
    Color::from_hex(0x6baed6),
    Color::from_hex(0x4292c6),
    Color::from_hex(0x2171b5),
    Color::from_hex(0x08519c),
    Color::from_hex(0x08306b),
];

const GREENS: [Color; 9] = [
    Color::from_hex(0xf7fcf5),
    Color::from_hex(0xe5f5e0),
    Color::from_hex(0xc7e9c0),
    Color::from_hex(0xa1d99b),
    Color::from_hex(0x74c476),
    Color::from_hex(0x41ab5d),
    Color::from_hex(0x238b45),
    Color::from_hex(0x006d2c),
    Color::from_hex(0x00441b),
];

const GREYS: [Color; 9] = [
    Color::from_hex(0xffffff),
    Color::from_hex(0xf0f0f0),
    Color::from_hex(0xd9d9d9),
    Color::from_hex(0xbdbdbd),
    Color::from_hex(0x969696),
    Color::from_hex(0x737373),
    Color::from_hex(0x525252),
    Color::from_hex(0x252525),
    Color::from_hex(0x000000),
];

const ORANGES: [Color; 9] = [
    Color::from_hex(0xfff5eb),
    Color::from_hex(0xfee6ce),
    Color::from_hex(0xfdd0a2),
    Color::from_hex(0xfdae6b),
    Color::from_hex(0xfd8d3c),
    Color::from_hex(0xf16913),
    Color::from_hex(0xd94801),
    Color::from_hex(0xa63603),
    Color::from_hex(0x7f2704),
];

const PURPLES: [Color; 9] = [
    Color::from_hex(0xfcfbfd),
    Color::from_hex(0xefedf5),
    Color::from_hex(0xdadaeb),
    Color::from_hex(0xbcbddc),
    Color::from_hex(0x9e9ac8),
    Color::from_hex(0x807dba),
    Color::from_hex(0x6a51a3),
    Color::from_hex(0x54278f),
    Color::from_hex(0x3f007d),
];

const REDS: [Color; 9] = [
    Color::from_hex(0xfff5f0),
    Color::from_hex(0xfee0d2),
    Color::from_hex(0xfcbba1),
    Color::from_hex(0xfc9272),
    Color::from_hex(0xfb6a4a),
    Color::from_hex(0xef3b2c),
    Color::from_hex(0xcb181d),
    Color::from_hex(0xa50f15),
    Color::from_hex(0x67000d),
];

impl Colormap {
    fn stops(&self) -> &'static [Color; 9] {
        match self {
            Colormap::Blues => &BLUES,
            Colormap::Greens => &GREENS,
            Colormap::Greys => &GREYS,
            Colormap::Oranges => &ORANGES,
            Colormap::Purples => &PURPLES,
            Colormap::Reds => &REDS,
        }
    }

    /// Get the color for a normalized value.
    ///
    /// Values outside of `[0, 1]` are clamped, NaN maps to the lowest color.
    pub fn map(&self, t: f64) -> Color {
        let stops = self.stops();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        let scaled = t * (stops.len() - 1) as f64;
        let lower = (scaled.floor() as usize).min(stops.len() - 2);
        let frac = scaled - lower as f64;

        let a = stops[lower];
        let b = stops[lower + 1];
        let lerp = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * frac).round() as u8;
        Color::new(lerp(a.r, b.r), lerp(a.g, b.g), lerp(a.b, b.b))
    }
}

/// Map `value` from `[min, max]` to `[0, 1]`.
///
/// If all values are equal (`min == max`), everything maps to `0`.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    let range = max - min;
    if range <= 0.0 || !range.is_finite() {
        0.0
    } else {
        ((value - min) / range).clamp(0.0, 1.0)
    }
}
