//! Picked colors and their text formats

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

pub const MAX_COLOR_HISTORY: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Text representation offered for copying
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "lowercase")]
pub enum ColorFormat {
    Hex,
    Rgb,
    Rgba { alpha: f64 },
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn rgb(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    pub fn rgba(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }

    pub fn format(&self, format: ColorFormat) -> String {
        match format {
            ColorFormat::Hex => self.hex(),
            ColorFormat::Rgb => self.rgb(),
            ColorFormat::Rgba { alpha } => self.rgba(alpha),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl FromStr for Color {
    type Err = CoreError;

    /// Parses `#rrggbb` and the `#rgb` shorthand
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidColor(s.to_string());

        let digits = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |hex: &str| u8::from_str_radix(hex, 16).map_err(|_| invalid());

        match digits.len() {
            6 => Ok(Self::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                let expand = |i: usize| channel(digits[i..=i].repeat(2).as_str());
                Ok(Self::new(expand(0)?, expand(1)?, expand(2)?))
            }
            _ => Err(invalid()),
        }
    }
}

impl Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Recently picked colors, newest first
#[derive(Debug, Clone, Default)]
pub struct ColorHistory {
    colors: Vec<Color>,
}

impl ColorHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a color. A color already in the history keeps its position.
    pub fn push(&mut self, color: Color) -> bool {
        if self.colors.contains(&color) {
            return false;
        }

        self.colors.insert(0, color);
        self.colors.truncate(MAX_COLOR_HISTORY);
        true
    }

    pub fn remove(&mut self, color: &Color) -> bool {
        let before = self.colors.len();
        self.colors.retain(|c| c != color);
        self.colors.len() != before
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format() {
        let color: Color = "#FF8000".parse().unwrap();
        assert_eq!(color, Color::new(255, 128, 0));
        assert_eq!(color.hex(), "#ff8000");
        assert_eq!(color.rgb(), "rgb(255, 128, 0)");
        assert_eq!(color.rgba(1.0), "rgba(255, 128, 0, 1)");
        assert_eq!(color.rgba(0.5), "rgba(255, 128, 0, 0.5)");
    }

    #[test]
    fn test_parse_shorthand() {
        let color: Color = "#fa0".parse().unwrap();
        assert_eq!(color, Color::new(0xff, 0xaa, 0x00));
    }

    #[test]
    fn test_parse_invalid() {
        for input in ["ff8000", "#ff80", "#gg8000", "", "#", "#ff80001"] {
            assert!(input.parse::<Color>().is_err(), "{input}");
        }
    }

    #[test]
    fn test_history_keeps_newest_ten() {
        let mut history = ColorHistory::new();
        for i in 0..11u8 {
            history.push(Color::new(i, 0, 0));
        }

        assert_eq!(history.len(), MAX_COLOR_HISTORY);
        assert_eq!(history.colors()[0], Color::new(10, 0, 0));
        assert!(!history.colors().contains(&Color::new(0, 0, 0)));
    }

    #[test]
    fn test_history_no_duplicates() {
        let mut history = ColorHistory::new();
        let red = Color::new(255, 0, 0);
        let blue = Color::new(0, 0, 255);

        assert!(history.push(red));
        assert!(history.push(blue));
        assert!(!history.push(red));
        assert_eq!(history.colors(), &[blue, red]);

        assert!(history.remove(&red));
        assert!(!history.remove(&red));
        assert_eq!(history.colors(), &[blue]);
    }

    #[test]
    fn test_color_serde() {
        let color = Color::new(1, 2, 3);
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"#010203\"");
        let format: ColorFormat = serde_json::from_str(r#"{"format":"rgba","alpha":0.5}"#).unwrap();
        assert_eq!(format, ColorFormat::Rgba { alpha: 0.5 });
    }
}
