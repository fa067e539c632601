//! Crop-fit and pad-fit: turning the geometry into a resize/crop/paste plan.
//!
//! [`Fit`] describes the target box and policy. [`Fit::plan`] is pure and
//! returns a [`FitPlan`]. [`FitPlan::apply`] hands the plan to an image
//! collaborator implementing [`FitImage`], which owns all pixel work.
//!
//! # Example
//!
//! ```
//! use zenfit::{CanvasColor, Fit, Rect, Size};
//!
//! let plan = Fit::pad(400, 300)
//!     .fill(CanvasColor::white())
//!     .plan(1000, 500)
//!     .unwrap();
//!
//! // 2:1 content letterboxed into 4:3
//! assert_eq!(plan.resize_to, Size::new(400, 200));
//! assert_eq!(plan.placement, (0, 50));
//! assert!(plan.needs_padding());
//! ```

use crate::color::CanvasColor;
use crate::error::LayoutError;
use crate::geometry::{Rect, Size, center_crop, max_bounds, resize_for};

/// How to fit a source image into the target box.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FitMode {
    /// Scale to fill the target, crop the overflow. Loses edge content.
    #[default]
    Crop,
    /// Scale to fit inside the target, pad the margins. Keeps all content.
    Pad,
}

/// Resampling quality requested from the collaborator.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Resample {
    /// Nearest neighbor. Fast, blocky.
    Nearest,
    /// High-quality antialiasing filter (Lanczos or equivalent).
    #[default]
    Antialias,
}

/// What to fit into: target box, policy, and pad fill.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fit {
    pub mode: FitMode,
    pub width: u32,
    pub height: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub fill: CanvasColor,
    #[cfg_attr(feature = "serde", serde(default))]
    pub resample: Resample,
}

impl Fit {
    pub fn new(mode: FitMode, width: u32, height: u32) -> Self {
        Self {
            mode,
            width,
            height,
            fill: CanvasColor::Transparent,
            resample: Resample::Antialias,
        }
    }

    /// Crop-to-fill into `width × height`.
    pub fn crop(width: u32, height: u32) -> Self {
        Self::new(FitMode::Crop, width, height)
    }

    /// Pad-to-fit into `width × height` with a transparent canvas.
    pub fn pad(width: u32, height: u32) -> Self {
        Self::new(FitMode::Pad, width, height)
    }

    /// Set the margin color (pad mode only).
    pub fn fill(mut self, color: CanvasColor) -> Self {
        self.fill = color;
        self
    }

    pub fn resample(mut self, resample: Resample) -> Self {
        self.resample = resample;
        self
    }

    pub fn target(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Compute the plan for a source image of the given dimensions.
    pub fn plan(&self, source_w: u32, source_h: u32) -> Result<FitPlan, LayoutError> {
        let source = Size::new(source_w, source_h).validate()?;
        let target = self.target().validate()?;

        let plan = match self.mode {
            FitMode::Crop => {
                let resize_to = resize_for(source_w, source_h, target.width, target.height)?;
                let rect = center_crop(resize_to.width, resize_to.height, target.width, target.height)?;
                FitPlan {
                    mode: self.mode,
                    source,
                    resize_to,
                    crop: (!rect.is_full(resize_to)).then_some(rect),
                    canvas: target,
                    placement: (0, 0),
                    fill: self.fill,
                    resample: self.resample,
                }
            }
            FitMode::Pad => {
                let bounds = max_bounds(target.width, target.height, source_w, source_h)?;
                FitPlan {
                    mode: self.mode,
                    source,
                    resize_to: bounds.size(),
                    crop: None,
                    canvas: target,
                    placement: bounds.origin(),
                    fill: self.fill,
                    resample: self.resample,
                }
            }
        };

        tracing::debug!(
            mode = ?plan.mode,
            source = %plan.source,
            resize_to = %plan.resize_to,
            canvas = %plan.canvas,
            "computed fit plan"
        );
        Ok(plan)
    }
}

/// Everything needed to execute a fit:
/// - the size to resample the source to
/// - for crop-fit, which region of the resampled image to keep
/// - for pad-fit, the canvas and where the resampled image sits on it
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FitPlan {
    pub mode: FitMode,
    /// Source dimensions the plan was computed for.
    pub source: Size,
    /// Dimensions to resample the source to.
    pub resize_to: Size,
    /// Region of the resampled image to keep. `None` = all of it.
    pub crop: Option<Rect>,
    /// Final output dimensions, always the target box.
    pub canvas: Size,
    /// Top-left offset of the resampled image on the canvas.
    pub placement: (u32, u32),
    pub fill: CanvasColor,
    pub resample: Resample,
}

impl FitPlan {
    /// Whether resampling changes the dimensions.
    pub fn needs_resize(&self) -> bool {
        self.resize_to != self.source
    }

    /// Whether any overflow is cropped away.
    pub fn needs_crop(&self) -> bool {
        self.crop.is_some()
    }

    /// Whether the canvas has margins to fill.
    pub fn needs_padding(&self) -> bool {
        self.mode == FitMode::Pad && self.canvas != self.resize_to
    }

    /// Run the plan against `image`.
    ///
    /// Crop-fit: resize, then crop. Pad-fit: resize, then paste onto a new
    /// canvas filled with [`fill`](Self::fill); the canvas step is skipped
    /// when there are no margins. The collaborator is always asked to
    /// resize, even when [`needs_resize`](Self::needs_resize) is false.
    ///
    /// Collaborator errors are returned as-is.
    pub fn apply<I: FitImage>(&self, image: &I) -> Result<I, I::Error> {
        let actual = image.dimensions();
        if actual != self.source {
            return Err(LayoutError::SourceMismatch {
                expected: self.source,
                actual,
            }
            .into());
        }

        tracing::debug!(
            mode = ?self.mode,
            source = %self.source,
            canvas = %self.canvas,
            "applying fit plan"
        );

        tracing::trace!(size = %self.resize_to, resample = ?self.resample, "resize");
        let resized = image.resize(self.resize_to, self.resample)?;

        match self.mode {
            FitMode::Crop => match self.crop {
                Some(rect) => {
                    tracing::trace!(%rect, "crop");
                    resized.crop(rect)
                }
                None => Ok(resized),
            },
            FitMode::Pad if !self.needs_padding() => Ok(resized),
            FitMode::Pad => {
                tracing::trace!(size = %self.canvas, fill = ?self.fill, "canvas");
                let mut canvas = I::canvas(self.canvas, self.fill)?;
                let (x, y) = self.placement;
                tracing::trace!(x, y, "paste");
                canvas.paste(&resized, x, y)?;
                Ok(canvas)
            }
        }
    }
}

/// Image collaborator: the pixel operations a fit needs.
///
/// Implemented for `image::DynamicImage` with the `image` feature. Any other
/// raster type can opt in; the plan only speaks [`Size`] and [`Rect`].
pub trait FitImage: Sized {
    /// Collaborator error. Must absorb [`LayoutError`] so a plan/image
    /// mismatch can be reported through the same channel.
    type Error: From<LayoutError>;

    fn dimensions(&self) -> Size;

    /// Resample to exactly `size`, ignoring aspect ratio.
    fn resize(&self, size: Size, resample: Resample) -> Result<Self, Self::Error>;

    /// Extract `rect`. The rect lies within [`dimensions`](Self::dimensions).
    fn crop(&self, rect: Rect) -> Result<Self, Self::Error>;

    /// New image of `size` filled with `color`.
    fn canvas(size: Size, color: CanvasColor) -> Result<Self, Self::Error>;

    /// Copy `image` onto `self` with its top-left corner at `(x, y)`,
    /// replacing the pixels underneath.
    fn paste(&mut self, image: &Self, x: u32, y: u32) -> Result<(), Self::Error>;
}

/// Resize and center-crop `image` to exactly `width × height`.
pub fn autofit<I: FitImage>(image: &I, width: u32, height: u32) -> Result<I, I::Error> {
    let source = image.dimensions();
    Fit::crop(width, height)
        .plan(source.width, source.height)?
        .apply(image)
}

/// Resize `image` to fit inside `width × height` and center it on a canvas
/// of exactly that size filled with `fill`.
pub fn autopad<I: FitImage>(
    image: &I,
    width: u32,
    height: u32,
    fill: CanvasColor,
) -> Result<I, I::Error> {
    let source = image.dimensions();
    Fit::pad(width, height)
        .fill(fill)
        .plan(source.width, source.height)?
        .apply(image)
}
