//! Color types — [`Rgba`] is the public color exchanged with the host,
//! [`Hsva`] is the picker's working representation.

use std::fmt;
use std::str::FromStr;

use crate::math;

/// Errors returned when parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseHexError {
    /// The string (without `#`) is not 3, 6, or 8 characters long.
    #[error("hex color must have 3, 6, or 8 digits, got {0}")]
    InvalidLength(usize),
    /// The string contains a character that is not a hex digit.
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}

/// RGBA color with components in the 0.0–1.0 range.
///
/// Equality is value equality on all four channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    /// Create from f64 RGBA. Each component is clamped to 0.0–1.0.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: math::saturate(r, 0.0, 1.0),
            g: math::saturate(g, 0.0, 1.0),
            b: math::saturate(b, 0.0, 1.0),
            a: math::saturate(a, 0.0, 1.0),
        }
    }

    /// Create from 0–255 RGB values with full opacity.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Create from 0–255 RGBA values.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        }
    }

    /// Red component (0.0–1.0).
    pub fn r(&self) -> f64 {
        self.r
    }
    /// Green component (0.0–1.0).
    pub fn g(&self) -> f64 {
        self.g
    }
    /// Blue component (0.0–1.0).
    pub fn b(&self) -> f64 {
        self.b
    }
    /// Alpha component (0.0–1.0).
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Convert to a 0–255 RGB tuple, rounding to nearest.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        (math::to_u8(self.r), math::to_u8(self.g), math::to_u8(self.b))
    }

    /// Convert to a 0–255 RGBA tuple, rounding to nearest.
    pub fn to_rgba8(&self) -> (u8, u8, u8, u8) {
        let (r, g, b) = self.to_rgb8();
        (r, g, b, math::to_u8(self.a))
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: math::saturate(a, 0.0, 1.0),
            ..self
        }
    }

    /// Parse a hex string (with or without `#`, 3, 6, or 8 digits).
    ///
    /// 8-digit hex is interpreted as RRGGBBAA. 3 and 6-digit hex are opaque.
    pub fn from_hex(hex: &str) -> Result<Self, ParseHexError> {
        let stripped = hex.trim_start_matches('#');
        if let Some(c) = stripped.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseHexError::InvalidDigit(c));
        }
        // All digits are ASCII from here on, so byte slicing is safe.
        let byte = |i: usize| u8::from_str_radix(&stripped[i..i + 2], 16).unwrap_or(0);
        match stripped.len() {
            3 => {
                let nibble = |i: usize| {
                    u8::from_str_radix(&stripped[i..i + 1], 16).unwrap_or(0) * 17
                };
                Ok(Self::from_rgb8(nibble(0), nibble(1), nibble(2)))
            }
            6 => Ok(Self::from_rgb8(byte(0), byte(2), byte(4))),
            8 => Ok(Self::from_rgba8(byte(0), byte(2), byte(4), byte(6))),
            len => Err(ParseHexError::InvalidLength(len)),
        }
    }

    /// Format as uppercase hex (no `#` prefix).
    ///
    /// Returns 6 digits when fully opaque, 8 (RRGGBBAA) otherwise.
    pub fn to_hex(&self) -> String {
        let (r, g, b, a) = self.to_rgba8();
        if a == 255 {
            format!("{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self {
            r: 0.5,
            g: 0.5,
            b: 0.5,
            a: 1.0,
        }
    }
}

impl FromStr for Rgba {
    type Err = ParseHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s.trim())
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl From<Rgba> for floem::peniko::Color {
    fn from(c: Rgba) -> Self {
        floem::peniko::Color::rgba(c.r, c.g, c.b, c.a)
    }
}

/// Hue/saturation/value/alpha color.
///
/// `hue` is in degrees (0.0–360.0; 360 renders the same as 0), the other
/// channels are in 0.0–1.0. Constructors clamp, so a value of this type is
/// always in range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsva {
    hue: f64,
    saturation: f64,
    value: f64,
    alpha: f64,
}

impl Hsva {
    pub const MAX_HUE: f64 = 360.0;

    pub fn new(hue: f64, saturation: f64, value: f64, alpha: f64) -> Self {
        Self {
            hue: math::saturate(hue, 0.0, Self::MAX_HUE),
            saturation: math::saturate(saturation, 0.0, 1.0),
            value: math::saturate(value, 0.0, 1.0),
            alpha: math::saturate(alpha, 0.0, 1.0),
        }
    }

    /// Decompose an RGBA color.
    ///
    /// RGB is quantized to 8 bits first, so colors that display identically
    /// decompose identically. Alpha is kept as is.
    pub fn from_rgba(color: Rgba) -> Self {
        let (r, g, b) = color.to_rgb8();
        let (h, s, v) = math::rgb_to_hsv(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0);
        Self::new(h, s, v, color.a())
    }

    /// Recompose into RGBA. Pure; the same channels always give the same color.
    pub fn to_rgba(&self) -> Rgba {
        let (r, g, b) = math::hsv_to_rgb(self.hue, self.saturation, self.value);
        Rgba::new(r, g, b, self.alpha)
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }
    pub fn saturation(&self) -> f64 {
        self.saturation
    }
    pub fn value(&self) -> f64 {
        self.value
    }
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn with_hue(self, hue: f64) -> Self {
        Self::new(hue, self.saturation, self.value, self.alpha)
    }
    pub fn with_saturation(self, saturation: f64) -> Self {
        Self::new(self.hue, saturation, self.value, self.alpha)
    }
    pub fn with_value(self, value: f64) -> Self {
        Self::new(self.hue, self.saturation, value, self.alpha)
    }
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self::new(self.hue, self.saturation, self.value, alpha)
    }
}

impl Default for Hsva {
    fn default() -> Self {
        Self::from_rgba(Rgba::default())
    }
}

impl From<Rgba> for Hsva {
    fn from(c: Rgba) -> Self {
        Self::from_rgba(c)
    }
}

impl From<Hsva> for Rgba {
    fn from(c: Hsva) -> Self {
        c.to_rgba()
    }
}
