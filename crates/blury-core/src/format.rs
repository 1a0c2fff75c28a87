//! Text rendering of scores, thresholds and verdicts.

/// Rendered in place of a score that has not been computed yet.
pub const SCORE_PLACEHOLDER: &str = "–";

/// Rendered instead of a score and verdict when computing the score failed.
pub const UNAVAILABLE_LABEL: &str = "unavailable";

/// Render a score with precision that depends on its magnitude.
///
/// `None` and non-finite values render as [`SCORE_PLACEHOLDER`], exactly zero
/// as `"0.0"`, values below 10 with two decimals and the rest with one. The
/// `< 10` test uses the raw value, so `9.995` stays in the two-decimal branch.
pub fn format_score(score: Option<f64>) -> String {
    match score {
        Some(s) if s.is_finite() => {
            if s == 0.0 {
                "0.0".to_string()
            } else if s < 10.0 {
                format!("{s:.2}")
            } else {
                format!("{s:.1}")
            }
        }
        _ => SCORE_PLACEHOLDER.to_string(),
    }
}

/// Threshold as shown next to the score.
pub fn format_threshold(threshold: f64) -> String {
    format!("{threshold:.1}")
}

/// Threshold as shown on a coarse integer control.
pub fn threshold_label(threshold: f64) -> String {
    format!("{}", threshold.round() as i64)
}

pub fn verdict_label(is_blurry: bool) -> &'static str {
    if is_blurry {
        "Blurry"
    } else {
        "Not blurry"
    }
}
