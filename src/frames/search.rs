use std::path::Path;

use crate::{
    foundation::{
        core::{FrameIndex, FrameRange},
        error::{SpriteError, SpriteResult},
    },
    frames::{load::load_frames, score::seam_score},
};

/// The winning loop candidate: the range whose first and last frame differ the
/// least over jointly-opaque pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BestLoop {
    pub range: FrameRange,
    pub score: f64,
}

/// Candidate ranges inside `window` with length in `[min_len, max_len]`,
/// start-major then length-minor, both ascending. Candidates whose end would
/// exceed the window are skipped. This enumeration order is a contract: the
/// search breaks score ties in favor of the earliest candidate.
pub fn candidate_ranges(
    window: FrameRange,
    min_len: u32,
    max_len: u32,
) -> impl Iterator<Item = FrameRange> {
    (window.start.0..window.end.0).flat_map(move |s| {
        (min_len..=max_len).filter_map(move |ln| {
            let e = s.checked_add(ln)?;
            if e > window.end.0 {
                return None;
            }
            Some(FrameRange {
                start: FrameIndex(s),
                end: FrameIndex(e),
            })
        })
    })
}

/// Exhaustively score every candidate range and return the minimum.
///
/// Each candidate costs a full frame load plus one scoring pass; that is
/// deliberate, the expected inputs are a few dozen frames. Fails with
/// [`SpriteError::NoCandidates`] when the window and bounds admit nothing.
#[tracing::instrument(skip(dir), fields(dir = %dir.display()))]
pub fn find_best_loop(
    dir: &Path,
    pattern: &str,
    window: FrameRange,
    min_len: u32,
    max_len: u32,
) -> SpriteResult<BestLoop> {
    if min_len == 0 {
        return Err(SpriteError::validation("min_len must be >= 1"));
    }
    if min_len > max_len {
        return Err(SpriteError::validation("min_len must be <= max_len"));
    }

    let mut best: Option<BestLoop> = None;

    for range in candidate_ranges(window, min_len, max_len) {
        let frames = load_frames(dir, pattern, range)?;
        let score = seam_score(&frames[0], frames.last().unwrap_or(&frames[0]));
        tracing::debug!(
            start = range.start.0,
            end = range.end.0,
            score,
            "scored candidate"
        );
        if best.is_none_or(|b| score < b.score) {
            best = Some(BestLoop { range, score });
        }
    }

    best.ok_or(SpriteError::NoCandidates)
}
