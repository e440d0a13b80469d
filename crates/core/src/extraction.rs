//! Transcript-to-win extraction: shared types and the deterministic
//! keyword path.
//!
//! Two extraction paths exist with deliberately different shapes. The
//! model-backed path (in `momentum-voice`) returns zero or more wins; the
//! keyword path here returns exactly one win for any non-empty transcript.
//! Clients observe that difference, so it is kept rather than unified.

use serde::{Deserialize, Serialize};

use crate::goal_area::GoalAreaId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Titles longer than this are truncated.
pub const MAX_TITLE_CHARS: usize = 50;
/// Characters kept before the ellipsis when truncating.
const TRUNCATED_TITLE_CHARS: usize = 47;

/// Confidence assigned when a keyword matched.
pub const KEYWORD_MATCH_CONFIDENCE: f64 = 0.7;
/// Confidence assigned when nothing matched and the default area is used.
pub const DEFAULT_MATCH_CONFIDENCE: f64 = 0.5;

/// Area a transcript falls into when no keyword matches.
pub const FALLBACK_AREA: GoalAreaId = GoalAreaId::WorkStrategic;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A candidate win, not yet confirmed or persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedWin {
    pub title: String,
    pub goal_area_id: GoalAreaId,
    pub goal_area_name: String,
    pub confidence: f64,
}

// ---------------------------------------------------------------------------
// Keyword path
// ---------------------------------------------------------------------------

/// Deterministic keyword extraction.
///
/// Scans areas in registry order and each area's keywords in order; the
/// first case-insensitive substring match wins. A transcript matching
/// nothing still produces one candidate, filed under [`FALLBACK_AREA`].
pub fn fallback_extract(transcript: &str) -> Vec<ExtractedWin> {
    let lowered = transcript.to_lowercase();

    for area in GoalAreaId::ALL {
        for keyword in area.keywords() {
            if lowered.contains(keyword) {
                return vec![candidate(transcript, area, KEYWORD_MATCH_CONFIDENCE)];
            }
        }
    }

    vec![candidate(transcript, FALLBACK_AREA, DEFAULT_MATCH_CONFIDENCE)]
}

fn candidate(transcript: &str, area: GoalAreaId, confidence: f64) -> ExtractedWin {
    ExtractedWin {
        title: capture_title(transcript),
        goal_area_id: area,
        goal_area_name: area.canonical_name().to_string(),
        confidence,
    }
}

/// Turn a transcript into a win title: kept verbatim up to 50 characters,
/// otherwise cut to 47 plus an ellipsis.
pub fn capture_title(transcript: &str) -> String {
    if transcript.chars().count() > MAX_TITLE_CHARS {
        let head: String = transcript.chars().take(TRUNCATED_TITLE_CHARS).collect();
        format!("{head}...")
    } else {
        transcript.to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
