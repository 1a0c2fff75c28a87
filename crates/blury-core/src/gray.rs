use crate::PixelBufferView;

/// Luma weights for red, green and blue.
pub const LUMA_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

/// Dense single-precision luminance samples, row-major, `len = width * height`.
#[derive(Clone, Debug, PartialEq)]
pub struct GrayField {
    pub width: usize,
    pub height: usize,
    pub data: Vec<f32>,
}

impl GrayField {
    /// Convert every pixel with `0.299 R + 0.587 G + 0.114 B`.
    pub fn from_pixels(src: &PixelBufferView<'_>) -> Self {
        let mut data = Vec::with_capacity(src.width * src.height);
        for y in 0..src.height {
            for x in 0..src.width {
                data.push(luma(src.rgb_at(x, y)));
            }
        }
        Self {
            width: src.width,
            height: src.height,
            data,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.width + x]
    }
}

#[inline]
pub fn luma([r, g, b]: [u8; 3]) -> f32 {
    (LUMA_WEIGHTS[0] * r as f64 + LUMA_WEIGHTS[1] * g as f64 + LUMA_WEIGHTS[2] * b as f64) as f32
}
