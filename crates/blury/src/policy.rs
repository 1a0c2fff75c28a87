//! Caller-side policy: the blur threshold and the working-width cap.
//!
//! Neither value is part of the focus-measure algorithm. They live here so a
//! front end can load them from JSON, expose them as flags, and change the
//! threshold without rescoring pixels.

use blury_core::{FocusParams, FocusResult, DEFAULT_MAX_WIDTH};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Default blur threshold used by the reference front end.
///
/// This is a UI policy choice with no derivation behind it; override it via
/// config or `--threshold` for your image source.
pub const DEFAULT_THRESHOLD: f64 = 40.0;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PolicyError {
    #[error("threshold must be a finite, non-negative number (got {threshold})")]
    InvalidThreshold { threshold: f64 },
}

#[derive(thiserror::Error, Debug)]
pub enum PolicyIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] PolicyError),
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_max_width() -> usize {
    DEFAULT_MAX_WIDTH
}

/// Scoring configuration owned by the calling layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    /// Scores strictly below this are reported as blurry.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Images wider than this are resampled before scoring. `0` disables the cap.
    #[serde(default = "default_max_width")]
    pub max_width: usize,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            max_width: DEFAULT_MAX_WIDTH,
        }
    }
}

impl ScoringPolicy {
    pub fn validate(&self) -> Result<(), PolicyError> {
        validate_threshold(self.threshold)
    }

    pub fn focus_params(&self) -> FocusParams {
        FocusParams {
            max_width: self.max_width,
        }
    }

    /// Load and validate a JSON policy from disk. Missing fields take defaults.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, PolicyIoError> {
        let raw = fs::read_to_string(path)?;
        let policy: Self = serde_json::from_str(&raw)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Write this policy to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), PolicyIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

pub fn validate_threshold(threshold: f64) -> Result<(), PolicyError> {
    if threshold.is_finite() && threshold >= 0.0 {
        Ok(())
    } else {
        Err(PolicyError::InvalidThreshold { threshold })
    }
}

/// Current threshold plus the last computed score.
///
/// Moving the threshold re-derives the verdict from the cached score; the
/// pixels are not touched again.
#[derive(Clone, Debug, PartialEq)]
pub struct ThresholdState {
    threshold: f64,
    last_score: Option<f64>,
}

impl ThresholdState {
    pub fn new(threshold: f64) -> Result<Self, PolicyError> {
        validate_threshold(threshold)?;
        Ok(Self {
            threshold,
            last_score: None,
        })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn last_score(&self) -> Option<f64> {
        self.last_score
    }

    /// Cache a freshly computed score and classify it.
    pub fn record(&mut self, score: f64) -> FocusResult {
        self.last_score = Some(score);
        FocusResult::new(score, self.threshold)
    }

    /// The verdict for the cached score at the current threshold, if any.
    pub fn current(&self) -> Option<FocusResult> {
        self.last_score.map(|score| FocusResult::new(score, self.threshold))
    }

    /// Change the threshold and re-classify the cached score.
    ///
    /// An invalid threshold leaves the state untouched.
    pub fn set_threshold(&mut self, threshold: f64) -> Result<Option<FocusResult>, PolicyError> {
        validate_threshold(threshold)?;
        self.threshold = threshold;
        Ok(self.current())
    }
}

impl Default for ThresholdState {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            last_score: None,
        }
    }
}
