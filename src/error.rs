//! Error type shared by every layout operation.

use crate::geometry::{Rect, Size};

/// Layout computation error.
///
/// All core operations fail fast with one of these and perform no partial
/// work. Collaborator errors never end up here; see
/// [`FitImage::Error`](crate::FitImage::Error).
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// A width or height input was zero.
    #[error("invalid dimensions {width}x{height}: both sides must be positive")]
    InvalidDimension { width: u32, height: u32 },

    /// [`center_crop`](crate::center_crop) was called with sizes where
    /// neither axis matches. Use [`resize_for`](crate::resize_for) first.
    #[error("cannot center-crop {resized} to {target}: either width or height must match")]
    AspectMismatch { resized: Size, target: Size },

    /// A `"W:H"` string could not be parsed.
    #[error("malformed ratio: {reason}")]
    MalformedRatio { reason: &'static str },

    /// A ratio term was zero, so the greatest common divisor is meaningless.
    #[error("degenerate ratio {width}:{height}: both terms must be positive")]
    DegenerateRatio { width: u32, height: u32 },

    /// A derived dimension does not fit in `u32`.
    #[error("derived dimension exceeds u32::MAX")]
    DimensionOverflow,

    /// A [`FitPlan`](crate::FitPlan) was applied to an image of a different size.
    #[error("plan computed for a {expected} source, image is {actual}")]
    SourceMismatch { expected: Size, actual: Size },

    /// A rectangle reaches past the image it addresses.
    #[error("rect {rect} exceeds bounds {bounds}")]
    RectOutOfBounds { rect: Rect, bounds: Size },

    /// A color string was neither hex nor a known color name.
    #[error("malformed color")]
    MalformedColor,
}
