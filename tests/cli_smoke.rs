use std::{path::PathBuf, process::Command};

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_spriteprep")
}

fn fixture_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn cli_tile_writes_png() {
    let dir = fixture_dir("cli_smoke_tile");
    let out = dir.join("ground.png");

    let status = Command::new(bin())
        .args(["tile", "--out"])
        .arg(&out)
        .status()
        .unwrap();
    assert!(status.success());

    let img = image::open(&out).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (64, 64));
}

#[test]
fn cli_robot_writes_named_frame() {
    let dir = fixture_dir("cli_smoke_robot");

    let status = Command::new(bin())
        .args(["robot", "--mode", "walking", "--frame", "3", "--out-dir"])
        .arg(&dir)
        .status()
        .unwrap();
    assert!(status.success());
    assert!(dir.join("robot_walking_03.png").is_file());
}

#[test]
fn cli_robot_rejects_unknown_mode() {
    let dir = fixture_dir("cli_smoke_robot_bad");

    let status = Command::new(bin())
        .args(["robot", "--mode", "moonwalking", "--frame", "0", "--out-dir"])
        .arg(&dir)
        .status()
        .unwrap();
    assert!(!status.success());
}

#[test]
fn cli_loop_find_best_reports_json_and_writes_gif() {
    let dir = fixture_dir("cli_smoke_loop");

    // Stage a walking cycle with the generator, then search it end to end.
    for frame in 0..8 {
        let img = spriteprep::robot_frame(spriteprep::RobotMode::Walking, frame);
        img.save(dir.join(spriteprep::output_name(spriteprep::RobotMode::Walking, frame)))
            .unwrap();
    }

    let gif = dir.join("walk.gif");
    let output = Command::new(bin())
        .args(["loop", "--dir"])
        .arg(&dir)
        .args([
            "--pattern",
            "robot_walking_%02d.png",
            "--find-best",
            "--search-start",
            "0",
            "--search-end",
            "8",
            "--min-len",
            "4",
            "--max-len",
            "6",
            "--json",
            "--gif",
        ])
        .arg(&gif)
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(report["range"]["start"].is_number());
    assert!(report["score"].as_f64().unwrap() >= 0.0);
    assert!(gif.is_file());
}

#[test]
fn cli_loop_missing_frames_exits_nonzero_with_message() {
    let dir = fixture_dir("cli_smoke_loop_missing");

    let output = Command::new(bin())
        .args(["loop", "--dir"])
        .arg(&dir)
        .args(["--pattern", "f_%02d.png", "--start", "0", "--end", "3"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing frame"), "stderr was: {stderr}");
}
