//! End-to-end helpers from decoded `image` buffers or files on disk.

use crate::core::{self, FocusError, PixelBufferView, PixelLayout};
use crate::policy::{PolicyError, ScoringPolicy};
use crate::report::ScoredImage;
use ::image::{DynamicImage, ImageError, ImageReader, RgbImage, RgbaImage};
use std::path::Path;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Errors produced by the high-level facade helpers.
#[derive(thiserror::Error, Debug)]
pub enum DetectError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("unsupported media type: {reason}")]
    UnsupportedMediaType { reason: String },

    #[error("failed to decode image: {0}")]
    Decode(#[source] ImageError),

    #[error("invalid image dimensions (width={width}, height={height})")]
    InvalidDimensions { width: u32, height: u32 },

    #[error(transparent)]
    Policy(#[from] PolicyError),

    #[error(transparent)]
    Focus(#[from] FocusError),
}

impl From<ImageError> for DetectError {
    fn from(err: ImageError) -> Self {
        match err {
            ImageError::Unsupported(e) => DetectError::UnsupportedMediaType {
                reason: e.to_string(),
            },
            ImageError::IoError(e) => DetectError::Io(e),
            other => DetectError::Decode(other),
        }
    }
}

/// Borrow an `image::RgbaImage` as a core pixel view.
pub fn pixel_view_rgba(img: &RgbaImage) -> PixelBufferView<'_> {
    PixelBufferView {
        width: img.width() as usize,
        height: img.height() as usize,
        layout: PixelLayout::Rgba,
        data: img.as_raw(),
    }
}

/// Borrow an `image::RgbImage` as a core pixel view.
pub fn pixel_view_rgb(img: &RgbImage) -> PixelBufferView<'_> {
    PixelBufferView {
        width: img.width() as usize,
        height: img.height() as usize,
        layout: PixelLayout::Rgb,
        data: img.as_raw(),
    }
}

/// Score a pixel view under `policy`.
pub fn score_pixels(
    pixels: PixelBufferView<'_>,
    policy: &ScoringPolicy,
) -> Result<ScoredImage, DetectError> {
    policy.validate()?;
    let measurement = core::focus_score(pixels, &policy.focus_params())?;
    log::debug!(
        "scored {}x{} at working size {}x{}: {:.4}",
        pixels.width,
        pixels.height,
        measurement.working_width,
        measurement.working_height,
        measurement.score
    );
    Ok(ScoredImage {
        width: pixels.width,
        height: pixels.height,
        measurement,
        result: core::FocusResult::new(measurement.score, policy.threshold),
    })
}

/// Score a decoded image. 8-bit RGB and RGBA buffers are borrowed; every
/// other pixel format is converted to RGBA8 first.
#[cfg_attr(
    feature = "tracing",
    instrument(
        level = "info",
        skip(img, policy),
        fields(width = img.width(), height = img.height())
    )
)]
pub fn score_image(img: &DynamicImage, policy: &ScoringPolicy) -> Result<ScoredImage, DetectError> {
    match img {
        DynamicImage::ImageRgba8(rgba) => score_pixels(pixel_view_rgba(rgba), policy),
        DynamicImage::ImageRgb8(rgb) => score_pixels(pixel_view_rgb(rgb), policy),
        other => {
            let rgba = other.to_rgba8();
            score_pixels(pixel_view_rgba(&rgba), policy)
        }
    }
}

/// Decode an image file (format sniffed from its contents) and score it.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))
)]
pub fn score_path(
    path: impl AsRef<Path>,
    policy: &ScoringPolicy,
) -> Result<ScoredImage, DetectError> {
    let path = path.as_ref();
    let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    score_image(&img, policy)
}

/// Score a raw interleaved RGBA buffer.
pub fn score_rgba_from_slice(
    width: u32,
    height: u32,
    pixels: &[u8],
    policy: &ScoringPolicy,
) -> Result<ScoredImage, DetectError> {
    let w = usize::try_from(width).ok();
    let h = usize::try_from(height).ok();
    let Some((w, h)) = w.zip(h) else {
        return Err(DetectError::InvalidDimensions { width, height });
    };
    let view = PixelBufferView::new(w, h, PixelLayout::Rgba, pixels)?;
    score_pixels(view, policy)
}
