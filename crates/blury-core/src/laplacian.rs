use crate::GrayField;

/// 3x3 second-derivative kernel, row-major.
pub const LAPLACIAN_KERNEL: [f32; 9] = [
    0.0, 1.0, 0.0, //
    1.0, -4.0, 1.0, //
    0.0, 1.0, 0.0,
];

/// Convolution responses with the same dimensions as the source field.
///
/// Only interior cells are computed. The outermost one-pixel ring holds
/// `NaN`, which marks it as absent for every statistic.
#[derive(Clone, Debug)]
pub struct LaplacianField {
    pub width: usize,
    pub height: usize,
    pub data: Vec<f32>,
}

impl LaplacianField {
    pub fn from_gray(gray: &GrayField) -> Self {
        let (w, h) = (gray.width, gray.height);
        let mut data = vec![f32::NAN; w * h];

        for y in 1..h.saturating_sub(1) {
            for x in 1..w.saturating_sub(1) {
                let mut sum = 0.0f64;
                let mut k = 0;
                for py in y - 1..=y + 1 {
                    for px in x - 1..=x + 1 {
                        sum += gray.get(px, py) as f64 * LAPLACIAN_KERNEL[k] as f64;
                        k += 1;
                    }
                }
                data[y * w + x] = sum as f32;
            }
        }

        Self {
            width: w,
            height: h,
            data,
        }
    }

    /// Number of cells the kernel was evaluated at.
    pub fn interior_len(&self) -> usize {
        self.width.saturating_sub(2) * self.height.saturating_sub(2)
    }

    /// Finite responses, row-major. Border cells never appear here.
    pub fn responses(&self) -> impl Iterator<Item = f32> + '_ {
        self.data.iter().copied().filter(|v| v.is_finite())
    }
}
