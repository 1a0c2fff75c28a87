//! High-level facade for the `blury-*` workspace.
//!
//! This crate provides:
//! - a re-export of the pure focus-measure core (`blury::core`)
//! - the caller-side scoring policy (threshold, width cap) and its JSON I/O
//! - per-image reports with the score/verdict text used by front ends
//! - (feature-gated) helpers that decode files with `image` and score them
//!
//! ## Quickstart
//!
//! ```no_run
//! use blury::detect;
//! use blury::policy::ScoringPolicy;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let policy = ScoringPolicy::default();
//! let scored = detect::score_path("photo.jpg", &policy)?;
//! println!("score {:.2}, blurry: {}", scored.result.score, scored.result.is_blurry);
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `blury::core`: pixel views, the Laplacian pipeline, score formatting.
//! - `blury::policy`: `ScoringPolicy` and `ThresholdState`.
//! - `blury::report`: `FocusReport` for text and JSON output.
//! - `blury::detect` (feature `image`): end-to-end helpers from `image::DynamicImage` or paths.

pub use blury_core as core;

pub use blury_core::{
    compute_focus_measure, format_score, FocusError, FocusResult, PixelBufferView, PixelLayout,
};

pub mod policy;
pub mod report;

#[cfg(feature = "image")]
pub mod detect;

pub use policy::{ScoringPolicy, ThresholdState, DEFAULT_THRESHOLD};
pub use report::{FocusReport, ReportOutcome, ScoredImage};
