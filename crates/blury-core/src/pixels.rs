use serde::{Deserialize, Serialize};

use crate::FocusError;

/// Interleaved channel layout of a decoded pixel buffer.
///
/// Channel order is always red, green, blue and (for `Rgba`) alpha. Alpha is
/// carried along but never contributes to the focus measure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixelLayout {
    Rgb,
    Rgba,
}

impl PixelLayout {
    #[inline]
    pub fn channels(self) -> usize {
        match self {
            PixelLayout::Rgb => 3,
            PixelLayout::Rgba => 4,
        }
    }
}

/// Borrowed view over a decoded image, row-major, `len = width * height * channels`.
#[derive(Clone, Copy, Debug)]
pub struct PixelBufferView<'a> {
    pub width: usize,
    pub height: usize,
    pub layout: PixelLayout,
    pub data: &'a [u8],
}

impl<'a> PixelBufferView<'a> {
    /// Validate dimensions and buffer length and build a view.
    pub fn new(
        width: usize,
        height: usize,
        layout: PixelLayout,
        data: &'a [u8],
    ) -> Result<Self, FocusError> {
        let view = Self {
            width,
            height,
            layout,
            data,
        };
        view.validate()?;
        Ok(view)
    }

    /// Check that the view describes a non-empty image backed by exactly
    /// enough bytes.
    ///
    /// Views built with a struct literal skip [`PixelBufferView::new`], so the
    /// pipeline calls this again before touching any pixel.
    pub fn validate(&self) -> Result<(), FocusError> {
        if self.width == 0 || self.height == 0 {
            return Err(FocusError::InvalidImage {
                width: self.width,
                height: self.height,
            });
        }
        let expected = self
            .width
            .checked_mul(self.height)
            .and_then(|n| n.checked_mul(self.layout.channels()))
            .ok_or(FocusError::InvalidImage {
                width: self.width,
                height: self.height,
            })?;
        if self.data.len() != expected {
            return Err(FocusError::BufferLength {
                expected,
                got: self.data.len(),
            });
        }
        Ok(())
    }

    /// Red, green and blue intensities at `(x, y)`.
    #[inline]
    pub fn rgb_at(&self, x: usize, y: usize) -> [u8; 3] {
        let idx = (y * self.width + x) * self.layout.channels();
        [self.data[idx], self.data[idx + 1], self.data[idx + 2]]
    }
}

/// Owned pixel buffer, used for the resampled working image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    pub width: usize,
    pub height: usize,
    pub layout: PixelLayout,
    pub data: Vec<u8>,
}

impl PixelBuffer {
    pub fn view(&self) -> PixelBufferView<'_> {
        PixelBufferView {
            width: self.width,
            height: self.height,
            layout: self.layout,
            data: &self.data,
        }
    }
}

#[inline]
fn channel_at(src: &PixelBufferView<'_>, x: usize, y: usize, c: usize) -> f32 {
    src.data[(y * src.width + x) * src.layout.channels() + c] as f32
}

/// Bilinearly sample channel `c` at a continuous position, clamping to the
/// image edge.
#[inline]
pub fn sample_bilinear_channel(src: &PixelBufferView<'_>, x: f32, y: f32, c: usize) -> f32 {
    let max_x = (src.width - 1) as f32;
    let max_y = (src.height - 1) as f32;
    let x = x.clamp(0.0, max_x);
    let y = y.clamp(0.0, max_y);

    let x0 = x.floor() as usize;
    let y0 = y.floor() as usize;
    let x1 = (x0 + 1).min(src.width - 1);
    let y1 = (y0 + 1).min(src.height - 1);
    let fx = x - x0 as f32;
    let fy = y - y0 as f32;

    let p00 = channel_at(src, x0, y0, c);
    let p10 = channel_at(src, x1, y0, c);
    let p01 = channel_at(src, x0, y1, c);
    let p11 = channel_at(src, x1, y1, c);

    let a = p00 + fx * (p10 - p00);
    let b = p01 + fx * (p11 - p01);
    a + fy * (b - a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_dimensions() {
        let err = PixelBufferView::new(0, 4, PixelLayout::Rgba, &[]).unwrap_err();
        assert_eq!(
            err,
            FocusError::InvalidImage {
                width: 0,
                height: 4
            }
        );
        let err = PixelBufferView::new(4, 0, PixelLayout::Rgb, &[]).unwrap_err();
        assert!(matches!(err, FocusError::InvalidImage { .. }));
    }

    #[test]
    fn rejects_short_buffer() {
        let data = vec![0u8; 2 * 2 * 3];
        let err = PixelBufferView::new(2, 2, PixelLayout::Rgba, &data).unwrap_err();
        assert_eq!(
            err,
            FocusError::BufferLength {
                expected: 16,
                got: 12
            }
        );
    }

    #[test]
    fn reads_rgb_ignoring_alpha() {
        let data = [1, 2, 3, 255, 4, 5, 6, 0];
        let view = PixelBufferView::new(2, 1, PixelLayout::Rgba, &data).expect("view");
        assert_eq!(view.rgb_at(0, 0), [1, 2, 3]);
        assert_eq!(view.rgb_at(1, 0), [4, 5, 6]);
    }

    #[test]
    fn bilinear_interpolates_between_pixels_and_clamps() {
        let data = [0, 0, 0, 100, 100, 100];
        let view = PixelBufferView::new(2, 1, PixelLayout::Rgb, &data).expect("view");
        assert!((sample_bilinear_channel(&view, 0.5, 0.0, 0) - 50.0).abs() < 1e-6);
        assert_eq!(sample_bilinear_channel(&view, -3.0, 0.0, 1), 0.0);
        assert_eq!(sample_bilinear_channel(&view, 7.0, 2.0, 2), 100.0);
    }
}
