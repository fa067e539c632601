//! Crop-to-fill and pad-to-fit geometry for image thumbnails.
//!
//! Pure geometry: no pixel operations. Pixel work is delegated to a
//! [`FitImage`] collaborator (implemented for `image::DynamicImage` with the
//! `image` feature).
//!
//! # Modules
//!
//! - [`geometry`] — `resize_for`, `center_crop`, `max_bounds` and the `Size`/`Rect` types
//! - [`ratio`] — `"W:H"` aspect ratio labels and their float value
//! - [`fit`] — crop-fit and pad-fit plans and the collaborator trait
//! - [`color`] — pad fill color
//! - [`query`] — `w=..&h=..&mode=..` configuration strings (`alloc`)
//!
//! # Example
//!
//! ```
//! use zenfit::{Fit, Rect, Size};
//!
//! let plan = Fit::crop(125, 125).plan(300, 250).unwrap();
//! assert_eq!(plan.resize_to, Size::new(150, 125));
//! assert_eq!(plan.crop, Some(Rect::new(12, 0, 137, 125)));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod color;
pub mod error;
pub mod fit;
pub mod geometry;
#[cfg(feature = "alloc")]
pub mod query;
pub mod ratio;
#[cfg(feature = "image")]
mod raster;

pub use color::CanvasColor;
pub use error::LayoutError;
pub use fit::{Fit, FitImage, FitMode, FitPlan, Resample, autofit, autopad};
pub use geometry::{Rect, Size, center_crop, max_bounds, resize_for};
#[cfg(feature = "alloc")]
pub use ratio::guess_ratio;
pub use ratio::{Ratio, gcd, ratio2float};
