//! Momentum scoring: weekly completion ratio plus a capped streak bonus.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Scores are clamped to 0..=100.
pub const MAX_SCORE: u32 = 100;
/// Bonus points per consecutive qualifying week.
pub const STREAK_BONUS_PER_WEEK: u32 = 5;
/// The streak bonus saturates at 20 points.
pub const MAX_STREAK_BONUS: u32 = 20;

// ---------------------------------------------------------------------------
// Levels
// ---------------------------------------------------------------------------

/// A momentum tier. Pure lookup data, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MomentumLevel {
    pub label: &'static str,
    pub emoji: &'static str,
    pub min_score: u32,
    pub color: &'static str,
}

/// The four tiers, highest threshold first.
pub const MOMENTUM_LEVELS: [MomentumLevel; 4] = [
    MomentumLevel {
        label: "Rising",
        emoji: "🚀",
        min_score: 80,
        color: "#10B981",
    },
    MomentumLevel {
        label: "Steady",
        emoji: "✨",
        min_score: 60,
        color: "#6366F1",
    },
    MomentumLevel {
        label: "Building",
        emoji: "🌱",
        min_score: 40,
        color: "#F59E0B",
    },
    MomentumLevel {
        label: "Starting",
        emoji: "🌅",
        min_score: 0,
        color: "#8B5CF6",
    },
];

/// First tier whose threshold the score meets.
pub fn level_for_score(score: u32) -> &'static MomentumLevel {
    MOMENTUM_LEVELS
        .iter()
        .find(|level| score >= level.min_score)
        .unwrap_or(&MOMENTUM_LEVELS[3])
}

// ---------------------------------------------------------------------------
// Trend
// ---------------------------------------------------------------------------

/// Display-only weekly trend. Not an input to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Stable,
    Building,
}

/// `Up` at or past the target, `Stable` at or past half of it.
pub fn classify_trend(current_week_wins: u32, weekly_target: u32) -> Trend {
    if current_week_wins >= weekly_target {
        Trend::Up
    } else if 2 * current_week_wins >= weekly_target {
        Trend::Stable
    } else {
        Trend::Building
    }
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Momentum score for one goal area.
///
/// ```text
/// completion  = min(wins / max(target, 1), 1) * 100
/// streakBonus = min(streak * 5, 20)
/// score       = min(round(completion + streakBonus), 100)
/// ```
///
/// All inputs are clamped or defaulted; there are no error conditions. A
/// target of zero counts any win as full completion.
pub fn momentum_score(current_week_wins: u32, weekly_target: u32, streak: u32) -> u32 {
    let completion =
        (current_week_wins as f64 / weekly_target.max(1) as f64).min(1.0) * MAX_SCORE as f64;
    let streak_bonus = (streak * STREAK_BONUS_PER_WEEK).min(MAX_STREAK_BONUS);
    let score = (completion + streak_bonus as f64).round() as u32;
    score.min(MAX_SCORE)
}

/// Rounded arithmetic mean of per-area scores; 0 when there are no areas.
pub fn overall_score(scores: &[u32]) -> u32 {
    if scores.is_empty() {
        return 0;
    }
    let sum: u32 = scores.iter().sum();
    (sum as f64 / scores.len() as f64).round() as u32
}

/// Consecutive qualifying weeks for a goal area.
///
/// Streak tracking has no agreed semantics yet; every caller receives 0
/// until that is settled. Do not bake week-counting logic in downstream.
pub fn streak_weeks() -> u32 {
    0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- momentum_score --

    #[test]
    fn full_target_scores_100() {
        assert_eq!(momentum_score(4, 4, 0), 100);
    }

    #[test]
    fn half_target_scores_50() {
        assert_eq!(momentum_score(2, 4, 0), 50);
    }

    #[test]
    fn no_wins_scores_0() {
        assert_eq!(momentum_score(0, 3, 0), 0);
    }

    #[test]
    fn completion_rounds_to_nearest() {
        // 1/3 -> 33.33 -> 33, 2/3 -> 66.67 -> 67.
        assert_eq!(momentum_score(1, 3, 0), 33);
        assert_eq!(momentum_score(2, 3, 0), 67);
    }

    #[test]
    fn zero_target_treated_as_one() {
        assert_eq!(momentum_score(0, 0, 0), 0);
        assert_eq!(momentum_score(2, 0, 0), 100);
    }

    #[test]
    fn overshoot_is_capped_at_100() {
        assert_eq!(momentum_score(12, 4, 0), 100);
    }

    #[test]
    fn streak_bonus_adds_five_per_week() {
        // 75 completion + 2 weeks * 5.
        assert_eq!(momentum_score(3, 4, 2), 85);
    }

    #[test]
    fn streak_bonus_saturates_at_20() {
        assert_eq!(momentum_score(0, 4, 10), 20);
    }

    #[test]
    fn score_with_bonus_is_capped_at_100() {
        assert_eq!(momentum_score(4, 4, 1), 100);
    }

    #[test]
    fn identical_inputs_yield_identical_scores() {
        assert_eq!(momentum_score(2, 4, 0), momentum_score(2, 4, 0));
    }

    // -- levels --

    #[test]
    fn level_thresholds() {
        assert_eq!(level_for_score(100).label, "Rising");
        assert_eq!(level_for_score(80).label, "Rising");
        assert_eq!(level_for_score(79).label, "Steady");
        assert_eq!(level_for_score(60).label, "Steady");
        assert_eq!(level_for_score(50).label, "Building");
        assert_eq!(level_for_score(40).label, "Building");
        assert_eq!(level_for_score(39).label, "Starting");
        assert_eq!(level_for_score(0).label, "Starting");
    }

    // -- overall_score --

    #[test]
    fn overall_is_rounded_mean() {
        assert_eq!(overall_score(&[100, 50, 0]), 50);
    }

    #[test]
    fn overall_rounds_up_at_half() {
        // (100 + 50) / 7 = 21.43 -> 21.
        assert_eq!(overall_score(&[100, 50, 0, 0, 0, 0, 0]), 21);
        // (1 + 0) / 2 = 0.5 -> 1.
        assert_eq!(overall_score(&[1, 0]), 1);
    }

    #[test]
    fn overall_with_no_areas_is_zero() {
        assert_eq!(overall_score(&[]), 0);
    }

    // -- trend --

    #[test]
    fn trend_up_at_target() {
        assert_eq!(classify_trend(4, 4), Trend::Up);
        assert_eq!(classify_trend(5, 4), Trend::Up);
    }

    #[test]
    fn trend_stable_at_half_target() {
        assert_eq!(classify_trend(2, 4), Trend::Stable);
        // 3 wins against 5: 6 >= 5.
        assert_eq!(classify_trend(3, 5), Trend::Stable);
    }

    #[test]
    fn trend_building_below_half() {
        assert_eq!(classify_trend(1, 4), Trend::Building);
        assert_eq!(classify_trend(0, 3), Trend::Building);
    }

    #[test]
    fn trend_up_for_zero_target() {
        assert_eq!(classify_trend(0, 0), Trend::Up);
    }

    // -- streak stub --

    #[test]
    fn streak_is_stubbed_to_zero() {
        assert_eq!(streak_weeks(), 0);
    }
}
