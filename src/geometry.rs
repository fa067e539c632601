//! Fit geometry: binding dimension, center crop, and pad bounds.
//!
//! Everything here is integer arithmetic on `u64` intermediates. Aspect
//! comparisons use cross-multiplication so that equal ratios compare equal
//! exactly and the binding axis is never chosen by a floating-point accident.
//!
//! # Example
//!
//! ```
//! use zenfit::{Rect, Size, center_crop, resize_for};
//!
//! // 300×250 into a 125×125 square: height binds, width overflows.
//! let resized = resize_for(300, 250, 125, 125).unwrap();
//! assert_eq!(resized, Size::new(150, 125));
//!
//! // Then cut the overflow symmetrically.
//! let crop = center_crop(resized.width, resized.height, 125, 125).unwrap();
//! assert_eq!(crop, Rect::new(12, 0, 137, 125));
//! ```

use core::cmp::Ordering;
use core::fmt;

use crate::error::LayoutError;

/// Width × height dimensions in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Error unless both sides are positive.
    pub fn validate(self) -> Result<Self, LayoutError> {
        if self.width == 0 || self.height == 0 {
            return Err(LayoutError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Axis-aligned rectangle given by its top-left and bottom-right corners.
///
/// `x1` and `y1` are exclusive, so `x1 - x0` is the width. Constructors and
/// deserialization keep `x1 >= x0` and `y1 >= y0`. A rect built by hand with
/// swapped corners has zero extent and never [fits](Self::fits_within).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "RectCorners")
)]
pub struct Rect {
    /// Left edge, inclusive.
    pub x0: u32,
    /// Top edge, inclusive.
    pub y0: u32,
    /// Right edge, exclusive.
    pub x1: u32,
    /// Bottom edge, exclusive.
    pub y1: u32,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RectCorners {
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
}

#[cfg(feature = "serde")]
impl From<RectCorners> for Rect {
    fn from(c: RectCorners) -> Self {
        Self::new(c.x0, c.y0, c.x1, c.y1)
    }
}

impl Rect {
    /// Create a rect from corner coordinates. Swapped corners are reordered.
    pub const fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        let (x0, x1) = if x1 < x0 { (x1, x0) } else { (x0, x1) };
        let (y0, y1) = if y1 < y0 { (y1, y0) } else { (y0, y1) };
        Self { x0, y0, x1, y1 }
    }

    /// Rect at `(x, y)` spanning `size`.
    pub const fn at(x: u32, y: u32, size: Size) -> Self {
        Self {
            x0: x,
            y0: y,
            x1: x.saturating_add(size.width),
            y1: y.saturating_add(size.height),
        }
    }

    /// Rect covering all of `size`, anchored at the origin.
    pub const fn full(size: Size) -> Self {
        Self::at(0, 0, size)
    }

    /// Horizontal extent, zero if the corners are swapped.
    pub const fn width(&self) -> u32 {
        self.x1.saturating_sub(self.x0)
    }

    /// Vertical extent, zero if the corners are swapped.
    pub const fn height(&self) -> u32 {
        self.y1.saturating_sub(self.y0)
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Top-left corner.
    pub const fn origin(&self) -> (u32, u32) {
        (self.x0, self.y0)
    }

    /// Corners as `(x0, y0, x1, y1)`, the box order image libraries expect.
    pub const fn corners(&self) -> (u32, u32, u32, u32) {
        (self.x0, self.y0, self.x1, self.y1)
    }

    /// Whether the rect is ordered and lies inside
    /// `(0, 0, bounds.width, bounds.height)`.
    pub const fn fits_within(&self, bounds: Size) -> bool {
        self.x0 <= self.x1
            && self.y0 <= self.y1
            && self.x1 <= bounds.width
            && self.y1 <= bounds.height
    }

    /// Whether this rect covers the whole of `bounds` (no actual crop).
    pub const fn is_full(&self, bounds: Size) -> bool {
        self.x0 == 0 && self.y0 == 0 && self.x1 == bounds.width && self.y1 == bounds.height
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x0, self.y0, self.x1, self.y1)
    }
}

/// Size to scale the source to before center-cropping to `dest`.
///
/// Preserves the source aspect ratio. One side equals the destination side
/// exactly and the other is at least as large, so a following
/// [`center_crop`] never needs padding.
///
/// The free side is truncated toward zero. Since the binding axis is picked
/// with exact cross-multiplication, the unrounded free side is strictly
/// larger than the destination side whenever it is not equal, and the
/// truncated value still covers it.
pub fn resize_for(src_w: u32, src_h: u32, dest_w: u32, dest_h: u32) -> Result<Size, LayoutError> {
    Size::new(src_w, src_h).validate()?;
    Size::new(dest_w, dest_h).validate()?;

    let (sw, sh, dw, dh) = (src_w as u64, src_h as u64, dest_w as u64, dest_h as u64);
    match (sw * dh).cmp(&(sh * dw)) {
        // Source is wider than the destination: height binds.
        Ordering::Greater => {
            let w = narrow(dh * sw / sh)?;
            Ok(Size::new(w, dest_h))
        }
        // Source is taller: width binds.
        Ordering::Less => {
            let h = narrow(dw * sh / sw)?;
            Ok(Size::new(dest_w, h))
        }
        Ordering::Equal => Ok(Size::new(dest_w, dest_h)),
    }
}

/// Crop box that extracts `dest` from the middle of a `src`-sized image.
///
/// Expects output from [`resize_for`]: one axis already matches, the other
/// is at least the destination size. The odd pixel of an uneven overflow is
/// left on the far side (bottom or right).
pub fn center_crop(src_w: u32, src_h: u32, dest_w: u32, dest_h: u32) -> Result<Rect, LayoutError> {
    let src = Size::new(src_w, src_h).validate()?;
    let dest = Size::new(dest_w, dest_h).validate()?;

    if src_w == dest_w && src_h >= dest_h {
        let dy = (src_h - dest_h) / 2;
        Ok(Rect::new(0, dy, dest_w, dy + dest_h))
    } else if src_h == dest_h && src_w >= dest_w {
        let dx = (src_w - dest_w) / 2;
        Ok(Rect::new(dx, 0, dx + dest_w, dest_h))
    } else {
        Err(LayoutError::AspectMismatch {
            resized: src,
            target: dest,
        })
    }
}

/// Largest `ratio_w:ratio_h` rect that fits inside a `dest_w × dest_h` box,
/// centered, as absolute corners.
///
/// This is where pad-to-fit places the scaled content; the area outside the
/// rect is margin. The derived side and the margins are rounded half up, so
/// an odd margin puts its extra pixel before the content (left or top).
pub fn max_bounds(dest_w: u32, dest_h: u32, ratio_w: u32, ratio_h: u32) -> Result<Rect, LayoutError> {
    Size::new(dest_w, dest_h).validate()?;
    if ratio_w == 0 || ratio_h == 0 {
        return Err(LayoutError::DegenerateRatio {
            width: ratio_w,
            height: ratio_h,
        });
    }

    let (dw, dh, rw, rh) = (dest_w as u64, dest_h as u64, ratio_w as u64, ratio_h as u64);
    let (target_w, target_h) = if dw * rh > rw * dh {
        // Destination is wider than the content: height binds.
        (div_round(dh * rw, rh).max(1), dh)
    } else {
        (dw, div_round(dw * rh, rw).max(1))
    };

    // target_* <= dest_* holds: the bound side's exact value is at most the
    // destination side, and rounding an integer bound never crosses it.
    let dx = div_round(dw - target_w, 2);
    let dy = div_round(dh - target_h, 2);
    Ok(Rect::new(
        narrow(dx)?,
        narrow(dy)?,
        narrow(dx + target_w)?,
        narrow(dy + target_h)?,
    ))
}

/// `n / d` rounded half up.
fn div_round(n: u64, d: u64) -> u64 {
    let q = n / d;
    if (n % d) * 2 >= d { q + 1 } else { q }
}

fn narrow(v: u64) -> Result<u32, LayoutError> {
    u32::try_from(v).map_err(|_| LayoutError::DimensionOverflow)
}
