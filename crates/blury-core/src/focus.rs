//! End-to-end focus measure: downscale, grayscale, Laplacian, dispersion,
//! classification.

use serde::{Deserialize, Serialize};

use crate::{
    downscale, score_from_laplacian, FocusError, GrayField, LaplacianField, PixelBufferView,
    DEFAULT_MAX_WIDTH,
};

/// Tunables for the pixel pipeline. The blur threshold is deliberately not
/// part of this struct; it is passed per call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusParams {
    /// Images wider than this are resampled before scoring. `0` disables the cap.
    #[serde(default = "default_max_width")]
    pub max_width: usize,
}

fn default_max_width() -> usize {
    DEFAULT_MAX_WIDTH
}

impl Default for FocusParams {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
        }
    }
}

/// Score of one image together with the resolution it was computed at.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FocusMeasurement {
    /// Standard deviation of the interior Laplacian responses.
    pub score: f64,
    pub working_width: usize,
    pub working_height: usize,
}

/// Score and verdict for one image at one threshold.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FocusResult {
    pub score: f64,
    pub is_blurry: bool,
}

impl FocusResult {
    pub fn new(score: f64, threshold: f64) -> Self {
        Self {
            score,
            is_blurry: classify(score, threshold),
        }
    }

    /// Re-derive the verdict for a new threshold without touching pixels.
    pub fn reclassify(&self, threshold: f64) -> Self {
        Self::new(self.score, threshold)
    }
}

/// `true` when `score` is strictly below `threshold`.
#[inline]
pub fn classify(score: f64, threshold: f64) -> bool {
    score < threshold
}

/// Run the pixel pipeline and return the score at the working resolution.
pub fn focus_score(
    pixels: PixelBufferView<'_>,
    params: &FocusParams,
) -> Result<FocusMeasurement, FocusError> {
    let working = downscale(pixels, params.max_width)?;
    let view = working.view();
    if view.width < 3 || view.height < 3 {
        return Err(FocusError::InsufficientData {
            width: view.width,
            height: view.height,
        });
    }

    let gray = GrayField::from_pixels(&view);
    let lap = LaplacianField::from_gray(&gray);
    let score = score_from_laplacian(&lap)?;

    Ok(FocusMeasurement {
        score,
        working_width: view.width,
        working_height: view.height,
    })
}

/// Classify `pixels` against `threshold` using the default width cap.
pub fn compute_focus_measure(
    pixels: PixelBufferView<'_>,
    threshold: f64,
) -> Result<FocusResult, FocusError> {
    compute_focus_measure_with(pixels, threshold, &FocusParams::default())
}

/// Classify `pixels` against `threshold` with explicit pipeline parameters.
pub fn compute_focus_measure_with(
    pixels: PixelBufferView<'_>,
    threshold: f64,
    params: &FocusParams,
) -> Result<FocusResult, FocusError> {
    let m = focus_score(pixels, params)?;
    Ok(FocusResult::new(m.score, threshold))
}
