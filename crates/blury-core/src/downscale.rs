//! Working-resolution policy.
//!
//! Laplacian variance depends on pixel count and on resampling, so scores are
//! only comparable between callers that apply the same width cap. The score is
//! always defined relative to the working resolution produced here.

use crate::{sample_bilinear_channel, FocusError, PixelBuffer, PixelBufferView};

/// Width cap used by the reference front end.
///
/// This is an orchestration-layer policy value, not part of the algorithm:
/// callers that want a different cost/sensitivity trade-off pass their own cap
/// through [`crate::FocusParams`].
pub const DEFAULT_MAX_WIDTH: usize = 480;

/// Compute the working resolution for an image of `width x height`.
///
/// Images wider than `max_width` are scaled uniformly by `max_width / width`,
/// with both sides rounded to the nearest integer. `max_width == 0` disables
/// the cap.
pub fn working_dimensions(
    width: usize,
    height: usize,
    max_width: usize,
) -> Result<(usize, usize), FocusError> {
    if width == 0 || height == 0 {
        return Err(FocusError::InvalidImage { width, height });
    }
    if max_width == 0 || width <= max_width {
        return Ok((width, height));
    }

    let scale = max_width as f64 / width as f64;
    let w = (width as f64 * scale).round() as usize;
    // A very wide strip may round to zero rows; keep one so the interior
    // check downstream reports it as insufficient data.
    let h = ((height as f64 * scale).round() as usize).max(1);
    Ok((w.max(1), h))
}

/// The image the rest of the pipeline runs on: either the caller's buffer
/// (no scaling needed) or a resampled copy.
#[derive(Debug)]
pub enum WorkingImage<'a> {
    Borrowed(PixelBufferView<'a>),
    Resampled(PixelBuffer),
}

impl WorkingImage<'_> {
    pub fn view(&self) -> PixelBufferView<'_> {
        match self {
            WorkingImage::Borrowed(view) => *view,
            WorkingImage::Resampled(buf) => buf.view(),
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        let view = self.view();
        (view.width, view.height)
    }

    pub fn is_resampled(&self) -> bool {
        matches!(self, WorkingImage::Resampled(_))
    }
}

/// Apply the width cap, resampling with bilinear interpolation when needed.
pub fn downscale<'a>(
    src: PixelBufferView<'a>,
    max_width: usize,
) -> Result<WorkingImage<'a>, FocusError> {
    src.validate()?;
    let (w, h) = working_dimensions(src.width, src.height, max_width)?;
    if (w, h) == (src.width, src.height) {
        return Ok(WorkingImage::Borrowed(src));
    }
    Ok(WorkingImage::Resampled(resample_bilinear(&src, w, h)))
}

/// Resample to `dst_w x dst_h` with pixel-centre aligned bilinear sampling.
pub fn resample_bilinear(src: &PixelBufferView<'_>, dst_w: usize, dst_h: usize) -> PixelBuffer {
    let channels = src.layout.channels();
    let sx = src.width as f32 / dst_w as f32;
    let sy = src.height as f32 / dst_h as f32;

    let mut data = vec![0u8; dst_w * dst_h * channels];
    for y in 0..dst_h {
        let fy = (y as f32 + 0.5) * sy - 0.5;
        for x in 0..dst_w {
            let fx = (x as f32 + 0.5) * sx - 0.5;
            let base = (y * dst_w + x) * channels;
            for c in 0..channels {
                let v = sample_bilinear_channel(src, fx, fy, c);
                data[base + c] = v.round().clamp(0.0, 255.0) as u8;
            }
        }
    }

    PixelBuffer {
        width: dst_w,
        height: dst_h,
        layout: src.layout,
        data,
    }
}
