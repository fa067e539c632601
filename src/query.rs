//! Query-string configuration for fits.
//!
//! Parses strings like `?w=800&h=600&mode=pad&bgcolor=fff` into
//! [`Instructions`], then into a [`Fit`].
//!
//! # Example
//!
//! ```
//! use zenfit::{CanvasColor, FitMode, query};
//!
//! let result = query::parse("w=800&h=600&mode=pad&bgcolor=white");
//! assert!(result.warnings.is_empty());
//!
//! let fit = result.instructions.to_fit().unwrap();
//! assert_eq!(fit.mode, FitMode::Pad);
//! assert_eq!(fit.fill, CanvasColor::white());
//! ```
//!
//! Unknown keys and unparseable values never fail the parse; they show up
//! in [`ParseResult::warnings`].

use alloc::string::String;
use alloc::vec::Vec;

use crate::color::CanvasColor;
use crate::error::LayoutError;
use crate::fit::{Fit, FitMode, Resample};

/// Parsed fit parameters. Absent keys stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct Instructions {
    /// Target width (`w`, `width`).
    pub w: Option<u32>,
    /// Target height (`h`, `height`).
    pub h: Option<u32>,
    /// Fit policy (`mode`).
    pub mode: Option<FitMode>,
    /// Pad fill (`bgcolor`).
    pub bgcolor: Option<CanvasColor>,
    /// Resampling filter (`filter`).
    pub filter: Option<Resample>,
}

impl Instructions {
    /// Build a [`Fit`]. Mode defaults to crop, fill to transparent, filter
    /// to antialias. Both dimensions are required.
    pub fn to_fit(&self) -> Result<Fit, LayoutError> {
        let (Some(w), Some(h)) = (self.w, self.h) else {
            return Err(LayoutError::InvalidDimension {
                width: self.w.unwrap_or(0),
                height: self.h.unwrap_or(0),
            });
        };
        Ok(Fit::new(self.mode.unwrap_or_default(), w, h)
            .fill(self.bgcolor.unwrap_or_default())
            .resample(self.filter.unwrap_or_default()))
    }
}

/// Result of parsing a query string.
#[derive(Debug, Clone)]
pub struct ParseResult {
    pub instructions: Instructions,
    /// Non-fatal parse warnings.
    pub warnings: Vec<ParseWarning>,
}

/// Non-fatal warning from query string parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A key appeared more than once (last value wins).
    DuplicateKey { key: String, value: String },
    /// A key this parser does not know.
    KeyNotRecognized { key: String, value: String },
    /// A known key with a value that could not be parsed. The key is dropped.
    ValueInvalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Parse a query string (with or without leading `?`).
pub fn parse(query: &str) -> ParseResult {
    let mut instructions = Instructions::default();
    let mut warnings = Vec::new();

    let query = query.strip_prefix('?').unwrap_or(query);
    for pair in query.split('&').filter(|s| !s.is_empty()) {
        let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = percent_decode(raw_key).to_ascii_lowercase();
        let value = percent_decode(raw_value);
        dispatch_key(&key, &value, &mut instructions, &mut warnings);
    }

    if !warnings.is_empty() {
        tracing::debug!(count = warnings.len(), "query parsed with warnings");
    }
    ParseResult {
        instructions,
        warnings,
    }
}

fn dispatch_key(key: &str, value: &str, inst: &mut Instructions, warnings: &mut Vec<ParseWarning>) {
    match key {
        "w" | "width" => {
            let parsed = parse_dimension(value);
            set_or_warn(&mut inst.w, parsed, "w", key, value, "expected a positive integer", warnings);
        }
        "h" | "height" => {
            let parsed = parse_dimension(value);
            set_or_warn(&mut inst.h, parsed, "h", key, value, "expected a positive integer", warnings);
        }
        "mode" => {
            let parsed = parse_mode(value);
            set_or_warn(&mut inst.mode, parsed, "mode", key, value, "expected crop|pad", warnings);
        }
        "bgcolor" => {
            let parsed = value.parse().ok();
            set_or_warn(
                &mut inst.bgcolor,
                parsed,
                "bgcolor",
                key,
                value,
                "expected hex color or color name",
                warnings,
            );
        }
        "filter" => {
            let parsed = parse_filter(value);
            set_or_warn(
                &mut inst.filter,
                parsed,
                "filter",
                key,
                value,
                "expected nearest|antialias",
                warnings,
            );
        }
        _ => warnings.push(ParseWarning::KeyNotRecognized {
            key: String::from(key),
            value: String::from(value),
        }),
    }
}

/// Store `parsed`, warning on a duplicate key or an unparseable value.
fn set_or_warn<T>(
    field: &mut Option<T>,
    parsed: Option<T>,
    canonical: &'static str,
    key: &str,
    value: &str,
    reason: &'static str,
    warnings: &mut Vec<ParseWarning>,
) {
    let Some(v) = parsed else {
        warnings.push(ParseWarning::ValueInvalid {
            key: canonical,
            value: String::from(value),
            reason,
        });
        return;
    };
    if field.is_some() {
        warnings.push(ParseWarning::DuplicateKey {
            key: String::from(key),
            value: String::from(value),
        });
    }
    *field = Some(v);
}

fn parse_dimension(s: &str) -> Option<u32> {
    s.trim().parse::<u32>().ok().filter(|&v| v > 0)
}

fn parse_mode(s: &str) -> Option<FitMode> {
    match s.trim().to_ascii_lowercase().as_str() {
        "crop" | "fill" | "cover" => Some(FitMode::Crop),
        "pad" | "fit" | "contain" => Some(FitMode::Pad),
        _ => None,
    }
}

fn parse_filter(s: &str) -> Option<Resample> {
    match s.trim().to_ascii_lowercase().as_str() {
        "nearest" | "point" => Some(Resample::Nearest),
        "antialias" | "lanczos" | "lanczos3" => Some(Resample::Antialias),
        _ => None,
    }
}

/// Percent-decode a URL component. Also handles '+' as space.
fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                match (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi << 4 | lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crop_defaults() {
        let r = parse("w=800&h=600");
        assert!(r.warnings.is_empty());
        let fit = r.instructions.to_fit().unwrap();
        assert_eq!(fit, Fit::crop(800, 600));
    }

    #[test]
    fn leading_question_mark_and_long_keys() {
        let r = parse("?width=10&height=20&mode=PAD");
        assert!(r.warnings.is_empty());
        assert_eq!(r.instructions.w, Some(10));
        assert_eq!(r.instructions.h, Some(20));
        assert_eq!(r.instructions.mode, Some(FitMode::Pad));
    }

    #[test]
    fn mode_aliases() {
        assert_eq!(parse("mode=cover").instructions.mode, Some(FitMode::Crop));
        assert_eq!(parse("mode=contain").instructions.mode, Some(FitMode::Pad));
    }

    #[test]
    fn percent_encoded_color() {
        let r = parse("w=1&h=1&mode=pad&bgcolor=%23ff0000");
        assert!(r.warnings.is_empty());
        assert_eq!(r.instructions.bgcolor, Some(CanvasColor::opaque(255, 0, 0)));
    }

    #[test]
    fn filter_values() {
        assert_eq!(parse("filter=nearest").instructions.filter, Some(Resample::Nearest));
        assert_eq!(parse("filter=lanczos").instructions.filter, Some(Resample::Antialias));
    }

    #[test]
    fn invalid_value_warns_and_is_dropped() {
        let r = parse("w=abc&h=0&mode=stretch");
        assert_eq!(r.instructions.w, None);
        assert_eq!(r.instructions.h, None);
        assert_eq!(r.instructions.mode, None);
        assert_eq!(r.warnings.len(), 3);
        assert!(matches!(
            r.warnings[0],
            ParseWarning::ValueInvalid { key: "w", .. }
        ));
    }

    #[test]
    fn duplicate_key_last_wins() {
        let r = parse("w=100&width=200");
        assert_eq!(r.instructions.w, Some(200));
        assert_eq!(
            r.warnings,
            vec![ParseWarning::DuplicateKey {
                key: "width".into(),
                value: "200".into()
            }]
        );
    }

    #[test]
    fn unknown_key_warns() {
        let r = parse("w=1&quality=90");
        assert_eq!(
            r.warnings,
            vec![ParseWarning::KeyNotRecognized {
                key: "quality".into(),
                value: "90".into()
            }]
        );
    }

    #[test]
    fn missing_dimension_is_an_error() {
        assert_eq!(
            parse("w=100").instructions.to_fit(),
            Err(LayoutError::InvalidDimension {
                width: 100,
                height: 0
            })
        );
    }

    #[test]
    fn percent_decode_edge_cases() {
        assert_eq!(percent_decode("a+b"), "a b");
        assert_eq!(percent_decode("%41%42"), "AB");
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz"), "%zz");
        assert_eq!(percent_decode("%4"), "%4");
    }
}
