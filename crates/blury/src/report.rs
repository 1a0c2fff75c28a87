//! Per-image report shared by the CLI and JSON output.

use blury_core::{format_score, verdict_label, FocusMeasurement, FocusResult, UNAVAILABLE_LABEL};
use serde::{Deserialize, Serialize};

/// A successfully scored image.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredImage {
    /// Source dimensions before the width cap.
    pub width: usize,
    pub height: usize,
    pub measurement: FocusMeasurement,
    pub result: FocusResult,
}

/// What happened to one image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReportOutcome {
    Scored {
        width: usize,
        height: usize,
        working_width: usize,
        working_height: usize,
        score: f64,
        is_blurry: bool,
    },
    /// No score could be computed. Never rendered as a verdict.
    Unavailable { reason: String },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FocusReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub threshold: f64,
    #[serde(flatten)]
    pub outcome: ReportOutcome,
}

impl FocusReport {
    pub fn scored(source: Option<String>, threshold: f64, scored: &ScoredImage) -> Self {
        Self {
            source,
            threshold,
            outcome: ReportOutcome::Scored {
                width: scored.width,
                height: scored.height,
                working_width: scored.measurement.working_width,
                working_height: scored.measurement.working_height,
                score: scored.result.score,
                is_blurry: scored.result.is_blurry,
            },
        }
    }

    pub fn unavailable(source: Option<String>, threshold: f64, reason: impl ToString) -> Self {
        Self {
            source,
            threshold,
            outcome: ReportOutcome::Unavailable {
                reason: reason.to_string(),
            },
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self.outcome, ReportOutcome::Scored { .. })
    }

    pub fn result(&self) -> Option<FocusResult> {
        match self.outcome {
            ReportOutcome::Scored {
                score, is_blurry, ..
            } => Some(FocusResult { score, is_blurry }),
            ReportOutcome::Unavailable { .. } => None,
        }
    }

    /// `"Blurry (12.3)"`, `"Not blurry (4.57)"` or `"unavailable (<reason>)"`.
    pub fn render_line(&self) -> String {
        match &self.outcome {
            ReportOutcome::Scored {
                score, is_blurry, ..
            } => format!("{} ({})", verdict_label(*is_blurry), format_score(Some(*score))),
            ReportOutcome::Unavailable { reason } => format!("{UNAVAILABLE_LABEL} ({reason})"),
        }
    }
}
