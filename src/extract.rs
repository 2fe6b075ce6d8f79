use std::{
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use anyhow::Context as _;

use crate::foundation::error::{SpriteError, SpriteResult};

/// Filename pattern the extractor writes and the frame loader consumes.
pub const EXTRACT_PATTERN: &str = "frame_%05d.png";

#[derive(Clone, Debug)]
pub struct ExtractConfig {
    pub movie_path: PathBuf,
    pub out_dir: PathBuf,
    /// Resample to this rate; `None` keeps the source rate (every frame).
    pub fps: Option<f64>,
}

impl ExtractConfig {
    pub fn validate(&self) -> SpriteResult<()> {
        if !self.movie_path.exists() {
            return Err(SpriteError::validation(format!(
                "input file does not exist: {}",
                self.movie_path.display()
            )));
        }
        if let Some(fps) = self.fps
            && fps <= 0.0
        {
            return Err(SpriteError::validation("extract fps must be > 0"));
        }
        Ok(())
    }
}

pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Decode a video into `out_dir` as a numbered PNG sequence
/// (`frame_00001.png`, `frame_00002.png`, ...) via the system `ffmpeg`.
///
/// We intentionally shell out to the `ffmpeg` binary rather than linking
/// FFmpeg, which would drag in native dev headers for a one-shot decode.
pub fn extract_frames(cfg: &ExtractConfig) -> SpriteResult<()> {
    cfg.validate()?;

    if !is_ffmpeg_on_path() {
        return Err(SpriteError::external(
            "ffmpeg is required for frame extraction, but was not found on PATH",
        ));
    }

    std::fs::create_dir_all(&cfg.out_dir)
        .with_context(|| format!("create output directory '{}'", cfg.out_dir.display()))?;

    let mut cmd = Command::new("ffmpeg");
    cmd.stdout(Stdio::null()).stderr(Stdio::piped());
    cmd.args(["-hide_banner", "-loglevel", "error", "-i"])
        .arg(&cfg.movie_path);
    if let Some(fps) = cfg.fps {
        cmd.args(["-vf", &format!("fps={fps}")]);
    }
    cmd.arg(cfg.out_dir.join(EXTRACT_PATTERN));

    let output = cmd.output().map_err(|e| {
        SpriteError::external(format!(
            "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
        ))
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(SpriteError::external(format!(
            "ffmpeg exited with status {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_is_a_validation_error() {
        let cfg = ExtractConfig {
            movie_path: PathBuf::from("target/definitely-not-here.mov"),
            out_dir: PathBuf::from("target/extract_test"),
            fps: None,
        };
        assert!(matches!(
            cfg.validate().unwrap_err(),
            SpriteError::Validation(_)
        ));
    }

    #[test]
    fn non_positive_fps_is_rejected() {
        let cfg = ExtractConfig {
            movie_path: PathBuf::from("Cargo.toml"), // any existing file
            out_dir: PathBuf::from("target/extract_test"),
            fps: Some(0.0),
        };
        assert!(cfg.validate().is_err());
    }
}
