use crate::foundation::error::{ChalklineError, ChalklineResult};
use serde::{Deserialize, Serialize};

pub use kurbo::{Affine, BezPath, Point, Rect, Size, Vec2};

/// Smallest duration, in seconds, any timed unit may have.
///
/// Zero, negative and non-finite durations are clamped up to this value wherever they enter the
/// pipeline so progress computations never divide by zero.
pub const MIN_DURATION_SECS: f64 = 0.05;

/// Clamp a duration to be finite and at least `min`.
pub fn sanitize_duration(secs: f64, min: f64) -> f64 {
    let min = if min.is_finite() && min > 0.0 {
        min
    } else {
        MIN_DURATION_SECS
    };
    if secs.is_finite() && secs >= min {
        secs
    } else {
        min
    }
}

/// Clamp a value to `[0, 1]`, mapping NaN to `0`.
pub fn unit_clamp(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// Board dimensions in scene units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Canvas {
    /// Width in scene units.
    pub width: u32,
    /// Height in scene units.
    pub height: u32,
}

impl Canvas {
    /// Create a canvas, rejecting zero-sized boards.
    pub fn new(width: u32, height: u32) -> ChalklineResult<Self> {
        if width == 0 || height == 0 {
            return Err(ChalklineError::validation("canvas width/height must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Size as floating-point scene units.
    pub fn size(self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    /// Board centre.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    /// Whole-board rectangle anchored at the origin.
    pub fn rect(self) -> Rect {
        Rect::from_origin_size(Point::ORIGIN, self.size())
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

/// Straight-alpha RGBA8 ink color.
///
/// Serializes as `#rrggbb` (or `#rrggbbaa` when translucent). Deserializes from a hex string or an
/// `[r, g, b]` / `[r, g, b, a]` byte array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InkColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel; `255` is opaque.
    pub a: u8,
}

impl InkColor {
    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color with explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// `#rrggbb`, or `#rrggbbaa` when not opaque.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Parse `#rrggbb` or `#rrggbbaa`; the leading `#` is optional.
    pub fn parse_hex(s: &str) -> ChalklineResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        fn hex_byte(pair: &str) -> ChalklineResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| ChalklineError::validation(format!("invalid hex byte \"{pair}\"")))
        }

        if !s.is_ascii() {
            return Err(ChalklineError::validation(
                "hex color must be #RRGGBB or #RRGGBBAA",
            ));
        }
        match s.len() {
            6 => Ok(Self::rgb(
                hex_byte(&s[0..2])?,
                hex_byte(&s[2..4])?,
                hex_byte(&s[4..6])?,
            )),
            8 => Ok(Self::rgba(
                hex_byte(&s[0..2])?,
                hex_byte(&s[2..4])?,
                hex_byte(&s[4..6])?,
                hex_byte(&s[6..8])?,
            )),
            _ => Err(ChalklineError::validation(
                "hex color must be #RRGGBB or #RRGGBBAA",
            )),
        }
    }
}

impl Serialize for InkColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for InkColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Arr(Vec<u8>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => Self::parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Self::rgb(*r, *g, *b)),
                [r, g, b, a] => Ok(Self::rgba(*r, *g, *b, *a)),
                _ => Err(serde::de::Error::custom(
                    "color array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
