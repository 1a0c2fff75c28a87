//! Laplacian focus measure for still images.
//!
//! The pipeline is a pure function of `(pixels, threshold)`:
//! 1. Cap the working width (default 480 px) with bilinear resampling.
//! 2. Convert to luminance with `0.299 R + 0.587 G + 0.114 B`.
//! 3. Convolve the interior with the 3x3 Laplacian `[0 1 0; 1 -4 1; 0 1 0]`.
//! 4. Take the population standard deviation of the interior responses.
//! 5. Report `is_blurry = score < threshold`.
//!
//! This crate does not decode image files and holds no state between calls.
//! Any default threshold belongs to the caller.
//!
//! ## Quickstart
//!
//! ```
//! use blury_core::{compute_focus_measure, PixelBufferView, PixelLayout};
//!
//! # fn main() -> Result<(), blury_core::FocusError> {
//! let (w, h) = (5, 5);
//! let mut rgba = vec![0u8; w * h * 4];
//! rgba[(2 * w + 2) * 4..(2 * w + 2) * 4 + 3].copy_from_slice(&[255, 255, 255]);
//!
//! let view = PixelBufferView::new(w, h, PixelLayout::Rgba, &rgba)?;
//! let result = compute_focus_measure(view, 0.5)?;
//! assert!(!result.is_blurry);
//! # Ok(())
//! # }
//! ```

mod downscale;
mod error;
mod focus;
mod format;
mod gray;
mod laplacian;
mod logger;
mod pixels;
mod stats;

pub use downscale::{
    downscale, resample_bilinear, working_dimensions, WorkingImage, DEFAULT_MAX_WIDTH,
};
pub use error::FocusError;
pub use focus::{
    classify, compute_focus_measure, compute_focus_measure_with, focus_score, FocusMeasurement,
    FocusParams, FocusResult,
};
pub use format::{
    format_score, format_threshold, threshold_label, verdict_label, SCORE_PLACEHOLDER,
    UNAVAILABLE_LABEL,
};
pub use gray::{luma, GrayField, LUMA_WEIGHTS};
pub use laplacian::{LaplacianField, LAPLACIAN_KERNEL};
pub use pixels::{sample_bilinear_channel, PixelBuffer, PixelBufferView, PixelLayout};
pub use stats::{dispersion, score_from_laplacian, Dispersion};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
