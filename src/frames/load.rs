use std::path::{Path, PathBuf};

use anyhow::Context as _;
use image::RgbaImage;

use crate::foundation::{
    core::{FrameIndex, FrameRange},
    error::{SpriteError, SpriteResult},
};

/// Substitute `index` into a filename pattern holding exactly one printf-style
/// integer placeholder (`%d` or zero-padded `%0Nd`, e.g. `frame_%05d.png`).
pub fn format_pattern(pattern: &str, index: FrameIndex) -> SpriteResult<String> {
    let Some(pos) = pattern.find('%') else {
        return Err(SpriteError::validation(format!(
            "pattern '{pattern}' has no '%d' placeholder"
        )));
    };

    let rest = &pattern[pos + 1..];
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    let after = &rest[digits.len()..];
    if !after.starts_with('d') {
        return Err(SpriteError::validation(format!(
            "pattern '{pattern}' has no '%d' placeholder"
        )));
    }

    let width: usize = if digits.is_empty() {
        0
    } else {
        digits.parse().map_err(|_| {
            SpriteError::validation(format!("pattern '{pattern}' has an invalid pad width"))
        })?
    };

    let mut out = String::with_capacity(pattern.len() + 8);
    out.push_str(&pattern[..pos]);
    out.push_str(&format!("{:0width$}", index.0));
    out.push_str(&after[1..]);
    Ok(out)
}

pub fn frame_path(dir: &Path, pattern: &str, index: FrameIndex) -> SpriteResult<PathBuf> {
    Ok(dir.join(format_pattern(pattern, index)?))
}

/// Load the frames of `range` from `dir`, ascending, each decoded to RGBA8.
///
/// Fails with [`SpriteError::MissingFrame`] naming the first absent file, and
/// with [`SpriteError::EmptySequence`] when the range holds no frames.
pub fn load_frames(dir: &Path, pattern: &str, range: FrameRange) -> SpriteResult<Vec<RgbaImage>> {
    let mut frames = Vec::with_capacity(range.len_frames() as usize);
    for index in range.indices() {
        let path = frame_path(dir, pattern, index)?;
        if !path.exists() {
            return Err(SpriteError::MissingFrame(path));
        }
        let img = image::open(&path)
            .with_context(|| format!("decode frame '{}'", path.display()))?;
        frames.push(img.to_rgba8());
    }
    if frames.is_empty() {
        return Err(SpriteError::EmptySequence);
    }
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_pattern_zero_padded() {
        assert_eq!(
            format_pattern("frame_%05d.png", FrameIndex(3)).unwrap(),
            "frame_00003.png"
        );
        assert_eq!(
            format_pattern("robot_walking_%02d.png", FrameIndex(7)).unwrap(),
            "robot_walking_07.png"
        );
    }

    #[test]
    fn format_pattern_unpadded() {
        assert_eq!(format_pattern("f%d.png", FrameIndex(12)).unwrap(), "f12.png");
    }

    #[test]
    fn format_pattern_rejects_missing_placeholder() {
        assert!(format_pattern("frame.png", FrameIndex(0)).is_err());
        assert!(format_pattern("frame_%02x.png", FrameIndex(0)).is_err());
    }

    #[test]
    fn load_frames_empty_range_is_an_error() {
        let range = FrameRange::new(FrameIndex(4), FrameIndex(4)).unwrap();
        let err = load_frames(Path::new("does-not-matter"), "f_%02d.png", range).unwrap_err();
        assert!(matches!(err, SpriteError::EmptySequence));
    }
}
