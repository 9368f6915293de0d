//! Color conversion between CSS strings and the editor's RGBA color

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static CSS_RGB: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"rgba?\(([^)]+)\)").unwrap());

/// Color as the host editor stores it: 0..255 channels and a 0..1 alpha
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorRgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f64,
}

pub const TRANSPARENT_RGBA: ColorRgba = ColorRgba {
    r: 0,
    g: 0,
    b: 0,
    alpha: 0.0,
};

pub const WHITE_RGBA: ColorRgba = ColorRgba {
    r: 255,
    g: 255,
    b: 255,
    alpha: 1.0,
};

/// Loose RGB components, either 0..255 or normalized 0..1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// The color shapes a panel may hand over
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorInput {
    /// `#rgb`, `#rrggbb` or a CSS `rgb()`/`rgba()` string
    Css(String),
    /// Already in editor form
    Rgba(ColorRgba),
    /// Components without alpha
    Rgb(Rgb),
    /// Anything else; normalizes to white
    Unknown(serde_json::Value),
}

impl ColorInput {
    /// Normalize to the editor's color shape
    pub fn normalize(&self) -> ColorRgba {
        match self {
            ColorInput::Css(text) => to_eda_color(text),
            ColorInput::Rgba(color) => *color,
            ColorInput::Rgb(rgb) => hex_to_color(&rgb_to_hex(*rgb)),
            ColorInput::Unknown(_) => WHITE_RGBA,
        }
    }
}

/// Parse `#rgb` or `#rrggbb` into an opaque color
///
/// Leading hex digits are used as far as they go; text without any yields
/// black.
pub fn hex_to_color(hex: &str) -> ColorRgba {
    let h = hex.strip_prefix('#').unwrap_or(hex);
    let full = if h.chars().count() == 3 {
        h.chars().flat_map(|c| [c, c]).collect::<String>()
    } else {
        h.to_string()
    };

    let digits: String = full.chars().take_while(char::is_ascii_hexdigit).collect();
    let value = u64::from_str_radix(&digits, 16).unwrap_or(0) as u32;

    ColorRgba {
        r: ((value >> 16) & 0xff) as u8,
        g: ((value >> 8) & 0xff) as u8,
        b: (value & 0xff) as u8,
        alpha: 1.0,
    }
}

/// Scale one component to 0..255
///
/// Values up to 1.01 are taken as normalized and scaled by 255.
fn clamp_component(v: f64) -> u8 {
    if !v.is_finite() {
        return 0;
    }
    let scaled = if v <= 1.01 { v * 255.0 } else { v };
    scaled.round().clamp(0.0, 255.0) as u8
}

/// Format components as lowercase `#rrggbb`
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!(
        "#{:02x}{:02x}{:02x}",
        clamp_component(rgb.r),
        clamp_component(rgb.g),
        clamp_component(rgb.b)
    )
}

/// Format as a CSS `rgba(r, g, b, a)` string
pub fn color_to_css_rgba(color: &ColorRgba) -> String {
    format!("rgba({}, {}, {}, {})", color.r, color.g, color.b, color.alpha)
}

/// Coerce any color string to lowercase `#rrggbb`, defaulting to white
///
/// Examples:
/// - "#ABC" → "#aabbcc"
/// - "rgb(255, 0, 0)" → "#ff0000"
/// - "nonsense" → "#ffffff"
pub fn ensure_hex(input: &str) -> String {
    let text = input.trim();
    if text.is_empty() {
        return "#ffffff".to_string();
    }

    if text.starts_with("rgb") {
        if let Some(caps) = CSS_RGB.captures(text) {
            let parts: Vec<f64> = caps[1]
                .split(',')
                .map(|s| s.trim().parse::<f64>().unwrap_or(0.0))
                .collect();
            let part = |i: usize| parts.get(i).copied().unwrap_or(0.0);
            return rgb_to_hex(Rgb {
                r: part(0),
                g: part(1),
                b: part(2),
            });
        }
    }

    let h = text.strip_prefix('#').unwrap_or(text);
    let full = if h.chars().count() == 3 {
        h.chars().flat_map(|c| [c, c]).collect::<String>()
    } else {
        h.to_string()
    };

    if full.len() == 6 && full.chars().all(|c| c.is_ascii_hexdigit()) {
        format!("#{}", full.to_lowercase())
    } else {
        "#ffffff".to_string()
    }
}

/// Any color string to the editor's color shape
pub fn to_eda_color(input: &str) -> ColorRgba {
    hex_to_color(&ensure_hex(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_color() {
        assert_eq!(hex_to_color("#ff8000"), ColorRgba { r: 255, g: 128, b: 0, alpha: 1.0 });
        assert_eq!(hex_to_color("0f0"), ColorRgba { r: 0, g: 255, b: 0, alpha: 1.0 });
        assert_eq!(hex_to_color("#zzz"), ColorRgba { r: 0, g: 0, b: 0, alpha: 1.0 });
    }

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(rgb_to_hex(Rgb { r: 255.0, g: 128.0, b: 0.0 }), "#ff8000");
        assert_eq!(rgb_to_hex(Rgb { r: 1.0, g: 0.5, b: 0.0 }), "#ff8000");
        assert_eq!(rgb_to_hex(Rgb { r: 300.0, g: f64::NAN, b: -4.0 }), "#ff0000");
    }

    #[test]
    fn test_css_rgba() {
        let c = ColorRgba { r: 10, g: 20, b: 30, alpha: 0.5 };
        assert_eq!(color_to_css_rgba(&c), "rgba(10, 20, 30, 0.5)");
        assert_eq!(color_to_css_rgba(&WHITE_RGBA), "rgba(255, 255, 255, 1)");
    }

    #[test]
    fn test_ensure_hex() {
        assert_eq!(ensure_hex(""), "#ffffff");
        assert_eq!(ensure_hex("#ABC"), "#aabbcc");
        assert_eq!(ensure_hex(" 12ab34 "), "#12ab34");
        assert_eq!(ensure_hex("rgb(255, 0, 0)"), "#ff0000");
        assert_eq!(ensure_hex("rgba(0, 128, 255, 0.3)"), "#0080ff");
        assert_eq!(ensure_hex("rgb(x, 64)"), "#004000");
        assert_eq!(ensure_hex("#12345"), "#ffffff");
        assert_eq!(ensure_hex("blue"), "#ffffff");
    }

    #[test]
    fn test_color_input_shapes() {
        let inputs: Vec<ColorInput> = serde_json::from_str(
            r##"["#f00", {"r": 1, "g": 2, "b": 3, "alpha": 0.5}, {"r": 0, "g": 0, "b": 255}, 42]"##,
        )
        .unwrap();

        assert_eq!(inputs[0].normalize(), ColorRgba { r: 255, g: 0, b: 0, alpha: 1.0 });
        assert_eq!(inputs[1].normalize(), ColorRgba { r: 1, g: 2, b: 3, alpha: 0.5 });
        assert_eq!(inputs[2].normalize(), ColorRgba { r: 0, g: 0, b: 255, alpha: 1.0 });
        assert_eq!(inputs[3], ColorInput::Unknown(serde_json::json!(42)));
        assert_eq!(inputs[3].normalize(), WHITE_RGBA);
    }

    #[test]
    fn test_transparent() {
        assert_eq!(color_to_css_rgba(&TRANSPARENT_RGBA), "rgba(0, 0, 0, 0)");
    }
}
