//! RGBA colors and parsing of the color strings accepted in configuration files.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Simple RGBA color independent of any drawing backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl Rgba {
    pub const BLACK: Rgba = Rgba(0, 0, 0, 255);
    pub const WHITE: Rgba = Rgba(255, 255, 255, 255);
    pub const TRANSPARENT: Rgba = Rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b, 255)
    }

    /// Color with a CSS-style fractional alpha (`rgba(80, 188, 255, 0.3)`).
    pub fn with_alpha(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self(r, g, b, (alpha.clamp(0.0, 1.0) * 255.0).round() as u8)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.3 == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.0, self.1, self.2, self.3)
        }
    }
}

/// Parse `#rgb`, `#rrggbb`, `#rrggbbaa` or a named color.
pub fn parse_color(val: &str) -> Option<Rgba> {
    let val = val.trim();
    if let Some(hex) = val.strip_prefix('#') {
        let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        return match hex.len() {
            3 => {
                let mut it = hex.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
                Some(Rgba::rgb(it.next()??, it.next()??, it.next()??))
            }
            6 => Some(Rgba::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        };
    }
    let named = match val.to_ascii_lowercase().as_str() {
        "white" => Rgba::WHITE,
        "black" => Rgba::BLACK,
        "red" => Rgba::rgb(255, 0, 0),
        "green" => Rgba::rgb(0, 128, 0),
        "blue" => Rgba::rgb(0, 0, 255),
        "yellow" => Rgba::rgb(255, 255, 0),
        "orange" => Rgba::rgb(255, 165, 0),
        "lightblue" => Rgba::rgb(173, 216, 230),
        "gray" | "grey" => Rgba::rgb(128, 128, 128),
        "lightgray" | "lightgrey" => Rgba::rgb(211, 211, 211),
        "transparent" => Rgba::TRANSPARENT,
        _ => return None,
    };
    Some(named)
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_color(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid color `{s}`")))
    }
}
