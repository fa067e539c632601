//! Aspect ratio labels: `1920×1080` ⇄ `"16:9"` ⇄ `1.777…`.

use core::fmt;
use core::str::FromStr;

use num_traits::Float;

use crate::error::LayoutError;
use crate::geometry::Size;

/// Aspect ratio in lowest terms. Both terms are at least 1.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ratio {
    width: u32,
    height: u32,
}

impl Ratio {
    /// Reduce `width:height` by their greatest common divisor.
    ///
    /// Zero in either term is rejected: `gcd(0, 0)` is undefined and
    /// `gcd(0, n)` would yield the meaningless `0:1`.
    pub fn reduce(width: u32, height: u32) -> Result<Self, LayoutError> {
        if width == 0 || height == 0 {
            return Err(LayoutError::DegenerateRatio { width, height });
        }
        let g = gcd(width, height);
        Ok(Self {
            width: width / g,
            height: height / g,
        })
    }

    /// Aspect ratio of a pixel size.
    pub fn of(size: Size) -> Result<Self, LayoutError> {
        Self::reduce(size.width, size.height)
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Width divided by height.
    pub fn as_f64(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Closest ratio to `value` whose height does not exceed `max_denominator`.
    ///
    /// Walks the continued-fraction convergents of `value` and checks the
    /// last admissible semiconvergent, so exact labels come back for values
    /// produced by [`as_f64`](Self::as_f64):
    ///
    /// ```
    /// use zenfit::Ratio;
    ///
    /// let r = Ratio::approximate(16.0 / 9.0, 100).unwrap();
    /// assert_eq!((r.width(), r.height()), (16, 9));
    /// ```
    ///
    /// Values smaller than `1 / max_denominator` clamp to `1:max_denominator`.
    pub fn approximate(value: f64, max_denominator: u32) -> Result<Self, LayoutError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(LayoutError::MalformedRatio {
                reason: "value must be positive and finite",
            });
        }
        if max_denominator == 0 {
            return Err(LayoutError::DegenerateRatio {
                width: 1,
                height: 0,
            });
        }

        let max_den = max_denominator as u64;
        let max_num = u32::MAX as u64;
        // (h0, k0) and (h1, k1) are the two most recent convergents.
        let (mut h0, mut h1) = (0u64, 1u64);
        let (mut k0, mut k1) = (1u64, 0u64);
        let mut x = value;
        let mut limited = false;
        loop {
            let a = Float::floor(x);
            if a > max_num as f64 {
                limited = true;
                break;
            }
            let a = a as u64;
            let h2 = a * h1 + h0;
            let k2 = a * k1 + k0;
            if k2 > max_den || h2 > max_num {
                limited = true;
                break;
            }
            (h0, h1) = (h1, h2);
            (k0, k1) = (k1, k2);

            let frac = x - a as f64;
            if Float::abs(frac) < 1e-9 {
                break;
            }
            x = 1.0 / frac;
        }

        // The largest semiconvergent that still fits can beat the last
        // convergent (π under 100 is 311:99, not 22:7).
        if limited && k1 > 0 {
            let mut t = (max_den - k0) / k1;
            if h1 > 0 {
                t = t.min((max_num - h0) / h1);
            }
            if t > 0 {
                let (hs, ks) = (t * h1 + h0, t * k1 + k0);
                let err = |h: u64, k: u64| Float::abs(h as f64 / k as f64 - value);
                if err(hs, ks) < err(h1, k1) {
                    (h1, k1) = (hs, ks);
                }
            }
        }

        match (h1, k1) {
            (_, 0) => Err(LayoutError::MalformedRatio {
                reason: "value out of range",
            }),
            (0, _) => Self::reduce(1, max_denominator),
            (h, k) => Self::reduce(h as u32, k as u32),
        }
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

impl FromStr for Ratio {
    type Err = LayoutError;

    /// Parse an integer `"W:H"` label and reduce it. `"32:18"` yields `16:9`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = split_ratio(s)?;
        let w = w.parse::<u32>().map_err(|_| LayoutError::MalformedRatio {
            reason: "width is not an unsigned integer",
        })?;
        let h = h.parse::<u32>().map_err(|_| LayoutError::MalformedRatio {
            reason: "height is not an unsigned integer",
        })?;
        Self::reduce(w, h)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Ratio {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Ratio {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct Visitor;

        impl serde::de::Visitor<'_> for Visitor {
            type Value = Ratio;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an aspect ratio like \"16:9\"")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Ratio, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}

/// Greatest common divisor (Euclid). `gcd(n, 0) == n`.
pub fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Simplified `"W:H"` label for a pixel size.
///
/// ```
/// assert_eq!(zenfit::guess_ratio(1920, 1080).unwrap(), "16:9");
/// ```
#[cfg(feature = "alloc")]
pub fn guess_ratio(width: u32, height: u32) -> Result<alloc::string::String, LayoutError> {
    use alloc::string::ToString;

    Ok(Ratio::reduce(width, height)?.to_string())
}

/// Parse `"W:H"` into `W / H`.
///
/// Terms may be fractional (`"2.39:1"`). Exactly one `:` is allowed, and
/// both terms must be positive, finite numbers.
pub fn ratio2float(ratio: &str) -> Result<f64, LayoutError> {
    let (w, h) = split_ratio(ratio)?;
    let w = parse_term(w)?;
    let h = parse_term(h)?;
    Ok(w / h)
}

fn split_ratio(s: &str) -> Result<(&str, &str), LayoutError> {
    let (w, h) = s.split_once(':').ok_or(LayoutError::MalformedRatio {
        reason: "missing ':' delimiter",
    })?;
    if h.contains(':') {
        return Err(LayoutError::MalformedRatio {
            reason: "more than one ':' delimiter",
        });
    }
    Ok((w.trim(), h.trim()))
}

fn parse_term(s: &str) -> Result<f64, LayoutError> {
    let v = s.parse::<f64>().map_err(|_| LayoutError::MalformedRatio {
        reason: "term is not a number",
    })?;
    if v == 0.0 {
        return Err(LayoutError::MalformedRatio {
            reason: "term is zero",
        });
    }
    if !v.is_finite() || v < 0.0 {
        return Err(LayoutError::MalformedRatio {
            reason: "term must be positive and finite",
        });
    }
    Ok(v)
}
