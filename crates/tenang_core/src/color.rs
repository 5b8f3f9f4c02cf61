//! Color primitives
//!
//! [`Color`] is a straight RGBA color with `f32` channels in `0.0..=1.0`.
//! [`Hsl`] is its hue/saturation/lightness decomposition, which is the space
//! tonal scales are derived in.
//!
//! Colors parse from the CSS notations a design token file uses:
//!
//! ```rust
//! use tenang_core::Color;
//!
//! let brand = Color::parse("#6b8e7f").unwrap();
//! let tint = Color::parse("hsla(150, 40%, 50%, 0.2)").unwrap();
//! assert_eq!(brand, Color::from_hex(0x6B8E7F));
//! assert!((tint.a - 0.2).abs() < f32::EPSILON);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ColorError;

/// RGBA color, channels in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Build from 8-bit channels
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha.clamp(0.0, 1.0);
        self
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Channels quantized to 8 bits
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
            channel_to_u8(self.a),
        ]
    }

    /// Linear interpolation between two colors
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }

    /// Decompose into hue, saturation and lightness
    pub fn to_hsl(&self) -> Hsl {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let l = (max + min) / 2.0;
        let delta = max - min;

        if delta <= f32::EPSILON {
            return Hsl::new(0.0, 0.0, l, self.a);
        }

        let s = if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let h = if max == self.r {
            (self.g - self.b) / delta + if self.g < self.b { 6.0 } else { 0.0 }
        } else if max == self.g {
            (self.b - self.r) / delta + 2.0
        } else {
            (self.r - self.g) / delta + 4.0
        };

        Hsl::new(h * 60.0, s, l, self.a)
    }

    pub fn from_hsl(hsl: Hsl) -> Self {
        let Hsl { h, s, l, a } = hsl.normalized();
        if s <= 0.0 {
            return Self::rgba(l, l, l, a);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        let h = h / 360.0;

        Self::rgba(
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
            a,
        )
    }

    /// `#rrggbb`, or `#rrggbbaa` for translucent colors
    pub fn to_hex_string(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    /// CSS notation: hex when opaque, `rgba()` otherwise
    pub fn to_css(&self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        if self.a >= 1.0 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            let a = (self.a * 1000.0).round() / 1000.0;
            format!("rgba({r}, {g}, {b}, {a})")
        }
    }

    /// Parse a CSS color string
    ///
    /// Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb()`, `rgba()`,
    /// `hsl()`, `hsla()` and the keywords `white`, `black` and `transparent`.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let trimmed = input.trim();
        let invalid = || ColorError::InvalidColorFormat(input.to_string());

        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(invalid);
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "white" => return Ok(Self::WHITE),
            "black" => return Ok(Self::BLACK),
            "transparent" => return Ok(Self::TRANSPARENT),
            _ => {}
        }

        let (name, args) = split_function(trimmed).ok_or_else(invalid)?;
        match name.as_str() {
            "rgb" | "rgba" => parse_rgb_args(&args).ok_or_else(invalid),
            "hsl" | "hsla" => parse_hsl_args(&args).ok_or_else(invalid),
            _ => Err(invalid()),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Color::parse(&raw).map_err(de::Error::custom)
    }
}

/// Hue (degrees), saturation and lightness (both `0.0..=1.0`), plus alpha
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
    pub a: f32,
}

impl Hsl {
    pub const fn new(h: f32, s: f32, l: f32, a: f32) -> Self {
        Self { h, s, l, a }
    }

    /// Wrap hue into `[0, 360)` and clamp the other components
    pub fn normalized(self) -> Self {
        Self {
            h: self.h.rem_euclid(360.0),
            s: self.s.clamp(0.0, 1.0),
            l: self.l.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }

    pub fn with_saturation(mut self, s: f32) -> Self {
        self.s = s;
        self
    }

    pub fn with_lightness(mut self, l: f32) -> Self {
        self.l = l;
        self
    }

    pub fn to_color(self) -> Color {
        Color::from_hsl(self)
    }
}

impl From<Color> for Hsl {
    fn from(color: Color) -> Self {
        color.to_hsl()
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        Color::from_hsl(hsl)
    }
}

fn channel_to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn hue_to_channel(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 0.5 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 => Some(Color::from_rgba8(nibble(0)?, nibble(1)?, nibble(2)?, 255)),
        4 => Some(Color::from_rgba8(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
        6 => Some(Color::from_rgba8(byte(0)?, byte(2)?, byte(4)?, 255)),
        8 => Some(Color::from_rgba8(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

/// Split `name(a, b, c)` into the lowercase name and its arguments
fn split_function(input: &str) -> Option<(String, Vec<&str>)> {
    let open = input.find('(')?;
    let body = input[open + 1..].strip_suffix(')')?;
    let name = input[..open].trim().to_ascii_lowercase();

    let args: Vec<&str> = body
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    Some((name, args))
}

/// Parse a number, returning it with a flag telling whether it was a percentage
fn parse_number(arg: &str) -> Option<(f32, bool)> {
    if let Some(pct) = arg.strip_suffix('%') {
        return pct.parse::<f32>().ok().filter(|v| v.is_finite()).map(|v| (v, true));
    }
    let arg = arg.strip_suffix("deg").unwrap_or(arg);
    arg.parse::<f32>().ok().filter(|v| v.is_finite()).map(|v| (v, false))
}

fn parse_alpha(arg: Option<&&str>) -> Option<f32> {
    match arg {
        None => Some(1.0),
        Some(raw) => {
            let (value, pct) = parse_number(raw)?;
            let alpha = if pct { value / 100.0 } else { value };
            Some(alpha.clamp(0.0, 1.0))
        }
    }
}

fn parse_rgb_args(args: &[&str]) -> Option<Color> {
    if args.len() != 3 && args.len() != 4 {
        return None;
    }

    let mut channels = [0.0f32; 3];
    for (slot, raw) in channels.iter_mut().zip(args) {
        let (value, pct) = parse_number(raw)?;
        *slot = if pct { value / 100.0 } else { value / 255.0 }.clamp(0.0, 1.0);
    }

    let a = parse_alpha(args.get(3))?;
    Some(Color::rgba(channels[0], channels[1], channels[2], a))
}

fn parse_hsl_args(args: &[&str]) -> Option<Color> {
    if args.len() != 3 && args.len() != 4 {
        return None;
    }

    let (h, _) = parse_number(args[0])?;
    let (s, s_pct) = parse_number(args[1])?;
    let (l, l_pct) = parse_number(args[2])?;
    let s = if s_pct { s / 100.0 } else { s };
    let l = if l_pct { l / 100.0 } else { l };
    let a = parse_alpha(args.get(3))?;

    Some(Color::from_hsl(Hsl::new(h, s, l, a)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-4, "{a} != {b}");
    }

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(Color::parse("#fff").unwrap(), Color::WHITE);
        assert_eq!(Color::parse("#000000").unwrap(), Color::BLACK);
        assert_eq!(Color::parse("#6B8E7F").unwrap(), Color::from_hex(0x6B8E7F));
        assert_eq!(
            Color::parse("#6b8e7f80").unwrap(),
            Color::from_rgba8(0x6b, 0x8e, 0x7f, 0x80)
        );
        assert_eq!(Color::parse("#0f08").unwrap(), Color::from_rgba8(0, 255, 0, 136));
    }

    #[test]
    fn test_parse_functions() {
        let rgb = Color::parse("rgb(255, 0, 0)").unwrap();
        assert_eq!(rgb, Color::rgb(1.0, 0.0, 0.0));

        let rgba = Color::parse("rgba(0 0 255 / 50%)").unwrap();
        assert_close(rgba.b, 1.0);
        assert_close(rgba.a, 0.5);

        let hsl = Color::parse("hsl(120deg, 100%, 50%)").unwrap();
        assert_close(hsl.r, 0.0);
        assert_close(hsl.g, 1.0);
        assert_close(hsl.b, 0.0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "#12", "#ggg", "rgb(1, 2)", "cmyk(0, 0, 0, 0)", "blue-ish", "hsl(a, b, c)"] {
            assert!(
                matches!(Color::parse(input), Err(ColorError::InvalidColorFormat(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_hsl_decomposition() {
        let hsl = Color::rgb(1.0, 0.0, 0.0).to_hsl();
        assert_close(hsl.h, 0.0);
        assert_close(hsl.s, 1.0);
        assert_close(hsl.l, 0.5);

        let gray = Color::rgb(0.5, 0.5, 0.5).to_hsl();
        assert_close(gray.s, 0.0);
        assert_close(gray.l, 0.5);
    }

    #[test]
    fn test_hsl_roundtrip_brand_color() {
        let original = Color::from_hex(0x6B8E7F);
        let back = Color::from_hsl(original.to_hsl());
        assert_eq!(original.to_rgba8(), back.to_rgba8());
    }

    #[test]
    fn test_css_output() {
        assert_eq!(Color::from_hex(0x6B8E7F).to_css(), "#6b8e7f");
        assert_eq!(Color::WHITE.with_alpha(0.5).to_css(), "rgba(255, 255, 255, 0.5)");
        assert_eq!(Color::BLACK.with_alpha(0.5).to_hex_string(), "#00000080");
    }

    #[test]
    fn test_serde_uses_css_strings() {
        let json = serde_json::to_string(&Color::from_hex(0xC9A227)).unwrap();
        assert_eq!(json, "\"#c9a227\"");

        let parsed: Color = serde_json::from_str("\"#c9a227\"").unwrap();
        assert_eq!(parsed, Color::from_hex(0xC9A227));
        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }
}
