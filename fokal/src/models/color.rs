//! Colour values as they appear in queries and photo metadata.

use serde::{Deserialize, Serialize};

/// One of a photo's dominant colours and the share of pixels it covers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DominantColor {
    /// Six hex digits, no leading `#`
    pub hex: String,

    /// Fraction of the image's pixels in this colour, 0.0 - 1.0
    pub pixel_fraction: f64,
}

/// An sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse six hex digits (`"ff8800"`). Returns `None` for anything else,
    /// including a leading `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Euclidean distance in RGB space, 0.0 to ~441.7.
    pub fn distance(&self, other: &Rgb) -> f64 {
        let dr = f64::from(self.r) - f64::from(other.r);
        let dg = f64::from(self.g) - f64::from(other.g);
        let db = f64::from(self.b) - f64::from(other.b);
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(
            Rgb::from_hex("ff8800"),
            Some(Rgb {
                r: 255,
                g: 136,
                b: 0
            })
        );
        assert_eq!(Rgb::from_hex("FFFFFF"), Some(Rgb { r: 255, g: 255, b: 255 }));
        assert_eq!(Rgb::from_hex("#ff880"), None);
        assert_eq!(Rgb::from_hex("ff00"), None);
        assert_eq!(Rgb::from_hex("gg0000"), None);
        assert_eq!(Rgb::from_hex("ééé"), None);
    }

    #[test]
    fn test_distance() {
        let black = Rgb { r: 0, g: 0, b: 0 };
        let white = Rgb { r: 255, g: 255, b: 255 };
        assert_eq!(black.distance(&black), 0.0);
        assert!((black.distance(&white) - 441.672).abs() < 0.001);
    }
}
