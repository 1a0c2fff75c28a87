use blury::core::{format_score, format_threshold, verdict_label};
use blury::detect;
use blury::policy::ScoringPolicy;

#[cfg(feature = "tracing")]
use blury::core::init_tracing;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing")]
    init_tracing(false);

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("Usage: score_image <image_path> [threshold]");
        return Ok(());
    };

    let mut policy = ScoringPolicy::default();
    if let Some(t) = std::env::args().nth(2) {
        policy.threshold = t.parse()?;
    }

    let scored = detect::score_path(&path, &policy)?;
    println!(
        "{path}: {} (score {}, threshold {}, working size {}x{})",
        verdict_label(scored.result.is_blurry),
        format_score(Some(scored.result.score)),
        format_threshold(policy.threshold),
        scored.measurement.working_width,
        scored.measurement.working_height,
    );

    Ok(())
}
