#![cfg(feature = "cli")]

use assert_cmd::Command;
use image::{Rgba, RgbaImage};
use predicates::prelude::*;
use std::path::{Path, PathBuf};

fn write_checkerboard(dir: &Path, name: &str, cell: u32) -> PathBuf {
    let img = RgbaImage::from_fn(96, 64, |x, y| {
        if ((x / cell) + (y / cell)) % 2 == 0 {
            Rgba([10, 10, 10, 255])
        } else {
            Rgba([245, 245, 245, 255])
        }
    });
    let path = dir.join(name);
    img.save(&path).expect("save png");
    path
}

fn write_flat(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::from_pixel(32, 32, Rgba([128, 128, 128, 255]))
        .save(&path)
        .expect("save png");
    path
}

fn blury() -> Command {
    Command::cargo_bin("blury").expect("binary")
}

#[test]
fn scores_sharp_and_flat_images() {
    let dir = tempfile::tempdir().expect("tempdir");
    let sharp = write_checkerboard(dir.path(), "sharp.png", 4);
    let flat = write_flat(dir.path(), "flat.png");

    blury()
        .arg("score")
        .arg(&sharp)
        .arg(&flat)
        .assert()
        .success()
        .stdout(predicate::str::contains("sharp.png: Not blurry ("))
        .stdout(predicate::str::contains("flat.png: Blurry (0.0)"));
}

#[test]
fn threshold_flag_flips_verdict() {
    let dir = tempfile::tempdir().expect("tempdir");
    let sharp = write_checkerboard(dir.path(), "sharp.png", 4);

    blury()
        .args(["score", "--threshold", "100000"])
        .arg(&sharp)
        .assert()
        .success()
        .stdout(predicate::str::contains("sharp.png: Blurry ("));
}

#[test]
fn json_output_carries_working_resolution() {
    let dir = tempfile::tempdir().expect("tempdir");
    let sharp = write_checkerboard(dir.path(), "sharp.png", 4);

    let out = blury()
        .args(["score", "--json", "--max-width", "48"])
        .arg(&sharp)
        .output()
        .expect("run");
    assert!(out.status.success());

    let reports: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json");
    let report = &reports[0];
    assert_eq!(report["status"], "scored");
    assert_eq!(report["width"], 96);
    assert_eq!(report["working_width"], 48);
    assert_eq!(report["working_height"], 32);
    assert_eq!(report["threshold"], 40.0);
}

#[test]
fn undecodable_input_is_unavailable() {
    let dir = tempfile::tempdir().expect("tempdir");
    let bogus = dir.path().join("bogus.png");
    std::fs::write(&bogus, b"not a png").expect("write");
    let flat = write_flat(dir.path(), "flat.png");

    blury()
        .arg("score")
        .arg(&bogus)
        .arg(&flat)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("bogus.png: unavailable ("))
        .stdout(predicate::str::contains("flat.png: Blurry (0.0)"));
}

#[test]
fn too_small_image_is_unavailable_not_zero() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("strip.png");
    RgbaImage::from_pixel(2, 50, Rgba([0, 0, 0, 255]))
        .save(&path)
        .expect("save png");

    blury()
        .arg("score")
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("unavailable (image too small"))
        .stdout(predicate::str::contains("0.0").not());
}

#[test]
fn negative_threshold_is_a_usage_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let flat = write_flat(dir.path(), "flat.png");

    blury()
        .args(["score", "--threshold=-1"])
        .arg(&flat)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("threshold must be"));
}

#[test]
fn config_file_sets_threshold_and_flag_overrides_it() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("policy.json");
    let sharp = write_checkerboard(dir.path(), "sharp.png", 4);

    blury()
        .arg("init-config")
        .arg(&config)
        .assert()
        .success();
    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&config).expect("read")).expect("json");
    assert_eq!(written["threshold"], 40.0);
    assert_eq!(written["max_width"], 480);

    std::fs::write(&config, r#"{"threshold": 1000000}"#).expect("write");
    blury()
        .args(["score", "--config"])
        .arg(&config)
        .arg(&sharp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Blurry ("));

    blury()
        .args(["score", "--threshold", "1", "--config"])
        .arg(&config)
        .arg(&sharp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Not blurry ("));
}

#[test]
fn init_config_refuses_to_overwrite() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("policy.json");
    std::fs::write(&config, "{}").expect("write");

    blury()
        .arg("init-config")
        .arg(&config)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    blury()
        .args(["init-config", "--force"])
        .arg(&config)
        .assert()
        .success();
}
