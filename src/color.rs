//! Canvas fill color for pad-to-fit, with hex and named-color parsing.

use core::str::FromStr;

use crate::error::LayoutError;

/// Background for the margins of a padded image.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CanvasColor {
    /// Transparent black `[0, 0, 0, 0]`.
    #[default]
    Transparent,
    /// sRGB color with alpha (8-bit per channel).
    Srgb { r: u8, g: u8, b: u8, a: u8 },
}

impl CanvasColor {
    /// White, fully opaque.
    pub const fn white() -> Self {
        Self::opaque(255, 255, 255)
    }

    /// Black, fully opaque.
    pub const fn black() -> Self {
        Self::opaque(0, 0, 0)
    }

    /// Fully opaque sRGB color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::Srgb { r, g, b, a: 255 }
    }

    /// Channels as `[r, g, b, a]`.
    pub const fn to_rgba(self) -> [u8; 4] {
        match self {
            Self::Transparent => [0, 0, 0, 0],
            Self::Srgb { r, g, b, a } => [r, g, b, a],
        }
    }

    /// Whether the color has zero alpha.
    pub const fn is_transparent(self) -> bool {
        self.to_rgba()[3] == 0
    }
}

impl FromStr for CanvasColor {
    type Err = LayoutError;

    /// Accepts `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` (the `#` is optional)
    /// and the basic color names, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);
        parse_hex(hex)
            .or_else(|| lookup_named(s))
            .ok_or(LayoutError::MalformedColor)
    }
}

fn parse_hex(hex: &str) -> Option<CanvasColor> {
    let b = hex.as_bytes();
    if !b.iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    let [r, g, bl, a] = match b.len() {
        3 | 4 => {
            let nibble = |i: usize| b.get(i).map_or(Some(0xFF), |&c| expand(c));
            [nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?]
        }
        6 | 8 => {
            let byte = |i: usize| match b.get(2 * i..2 * i + 2) {
                Some(&[hi, lo]) => Some(hex_val(hi)? << 4 | hex_val(lo)?),
                _ => Some(0xFF),
            };
            [byte(0)?, byte(1)?, byte(2)?, byte(3)?]
        }
        _ => return None,
    };
    Some(CanvasColor::Srgb { r, g, b: bl, a })
}

/// `'a'` → `0xAA`.
fn expand(c: u8) -> Option<u8> {
    let n = hex_val(c)?;
    Some(n << 4 | n)
}

fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

fn lookup_named(name: &str) -> Option<CanvasColor> {
    NAMED
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, [r, g, b, a])| CanvasColor::Srgb { r, g, b, a })
}

/// The sixteen HTML 4 colors plus `transparent`.
const NAMED: &[(&str, [u8; 4])] = &[
    ("aqua", [0, 255, 255, 255]),
    ("black", [0, 0, 0, 255]),
    ("blue", [0, 0, 255, 255]),
    ("fuchsia", [255, 0, 255, 255]),
    ("gray", [128, 128, 128, 255]),
    ("green", [0, 128, 0, 255]),
    ("lime", [0, 255, 0, 255]),
    ("maroon", [128, 0, 0, 255]),
    ("navy", [0, 0, 128, 255]),
    ("olive", [128, 128, 0, 255]),
    ("purple", [128, 0, 128, 255]),
    ("red", [255, 0, 0, 255]),
    ("silver", [192, 192, 192, 255]),
    ("teal", [0, 128, 128, 255]),
    ("transparent", [0, 0, 0, 0]),
    ("white", [255, 255, 255, 255]),
    ("yellow", [255, 255, 0, 255]),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba(r: u8, g: u8, b: u8, a: u8) -> CanvasColor {
        CanvasColor::Srgb { r, g, b, a }
    }

    #[test]
    fn hex_forms() {
        assert_eq!("f00".parse(), Ok(rgba(255, 0, 0, 255)));
        assert_eq!("#0af".parse(), Ok(rgba(0, 170, 255, 255)));
        assert_eq!("f008".parse(), Ok(rgba(255, 0, 0, 136)));
        assert_eq!("#FF8000".parse(), Ok(rgba(255, 128, 0, 255)));
        assert_eq!("ff000080".parse(), Ok(rgba(255, 0, 0, 128)));
    }

    #[test]
    fn named_case_insensitive() {
        assert_eq!("Navy".parse(), Ok(rgba(0, 0, 128, 255)));
        assert_eq!(" WHITE ".parse(), Ok(CanvasColor::white()));
    }

    #[test]
    fn named_transparent_has_zero_alpha() {
        let c: CanvasColor = "transparent".parse().unwrap();
        assert!(c.is_transparent());
        assert!(CanvasColor::default().is_transparent());
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "#", "zzz", "#12345", "notacolor", "#ff00ff0"] {
            assert_eq!(
                bad.parse::<CanvasColor>(),
                Err(LayoutError::MalformedColor),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn to_rgba() {
        assert_eq!(CanvasColor::black().to_rgba(), [0, 0, 0, 255]);
        assert_eq!(CanvasColor::Transparent.to_rgba(), [0, 0, 0, 0]);
    }
}
