//! Dispersion of the Laplacian response.

use crate::{FocusError, LaplacianField};

/// Population statistics over a set of samples.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dispersion {
    pub count: usize,
    pub mean: f64,
    pub variance: f64,
}

impl Dispersion {
    #[inline]
    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }
}

/// Two-pass population mean and variance. Non-finite samples are skipped.
///
/// Returns `None` when no finite sample is present.
pub fn dispersion<I>(samples: I) -> Option<Dispersion>
where
    I: Iterator<Item = f32> + Clone,
{
    let mut count = 0usize;
    let mut sum = 0.0f64;
    for v in samples.clone().filter(|v| v.is_finite()) {
        count += 1;
        sum += v as f64;
    }
    if count == 0 {
        return None;
    }
    let mean = sum / count as f64;

    let mut acc = 0.0f64;
    for v in samples.filter(|v| v.is_finite()) {
        let d = v as f64 - mean;
        acc += d * d;
    }

    Some(Dispersion {
        count,
        mean,
        variance: acc / count as f64,
    })
}

/// Standard deviation of the interior Laplacian responses.
pub fn score_from_laplacian(lap: &LaplacianField) -> Result<f64, FocusError> {
    dispersion(lap.data.iter().copied())
        .map(|d| d.std_dev())
        .ok_or(FocusError::InsufficientData {
            width: lap.width,
            height: lap.height,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_variance_divides_by_count() {
        let d = dispersion([2.0f32, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0].into_iter()).expect("stats");
        assert_eq!(d.count, 8);
        assert_eq!(d.mean, 5.0);
        assert_eq!(d.variance, 4.0);
        assert_eq!(d.std_dev(), 2.0);
    }

    #[test]
    fn skips_non_finite_samples() {
        let d = dispersion([f32::NAN, 1.0, f32::INFINITY, 3.0, f32::NEG_INFINITY].into_iter())
            .expect("stats");
        assert_eq!(d.count, 2);
        assert_eq!(d.mean, 2.0);
        assert_eq!(d.variance, 1.0);
    }

    #[test]
    fn empty_or_all_invalid_is_none() {
        assert!(dispersion(std::iter::empty::<f32>()).is_none());
        assert!(dispersion([f32::NAN, f32::NAN].into_iter()).is_none());
    }

    #[test]
    fn no_interior_is_insufficient_data() {
        let lap = LaplacianField {
            width: 2,
            height: 2,
            data: vec![f32::NAN; 4],
        };
        assert_eq!(
            score_from_laplacian(&lap),
            Err(FocusError::InsufficientData {
                width: 2,
                height: 2
            })
        );
    }
}
