//! Goal area registry: the seven fixed life areas a win can belong to.
//!
//! The set is closed on purpose. Category-specific data (keyword lists,
//! extraction names, seed defaults) lives here so a missing match arm is a
//! compile error rather than a runtime surprise.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The seven fixed goal areas.
///
/// Serialized snake_case on the wire and stored as the `goal_area_id`
/// Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "goal_area_id", rename_all = "snake_case")]
pub enum GoalAreaId {
    PhysicalHealth,
    MentalHealth,
    FamilyIan,
    FamilyWife,
    WorkStrategic,
    WorkLeadership,
    ContentNewsletter,
}

/// Registry defaults used to provision a user's goal area rows.
#[derive(Debug, Clone, Copy)]
pub struct GoalAreaDefaults {
    pub display_name: &'static str,
    pub emoji: &'static str,
    pub color: &'static str,
    pub weekly_min_wins: i32,
    pub intention_text: &'static str,
    pub sort_order: i32,
}

impl GoalAreaId {
    /// All areas, in registry order. Extraction scans in this order.
    pub const ALL: [GoalAreaId; 7] = [
        GoalAreaId::PhysicalHealth,
        GoalAreaId::MentalHealth,
        GoalAreaId::FamilyIan,
        GoalAreaId::FamilyWife,
        GoalAreaId::WorkStrategic,
        GoalAreaId::WorkLeadership,
        GoalAreaId::ContentNewsletter,
    ];

    /// Wire/database identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            GoalAreaId::PhysicalHealth => "physical_health",
            GoalAreaId::MentalHealth => "mental_health",
            GoalAreaId::FamilyIan => "family_ian",
            GoalAreaId::FamilyWife => "family_wife",
            GoalAreaId::WorkStrategic => "work_strategic",
            GoalAreaId::WorkLeadership => "work_leadership",
            GoalAreaId::ContentNewsletter => "content_newsletter",
        }
    }

    /// Canonical category name reported on extracted wins.
    ///
    /// Distinct from the user-editable `display_name` on the goal area row.
    pub fn canonical_name(self) -> &'static str {
        match self {
            GoalAreaId::PhysicalHealth => "Physical Health",
            GoalAreaId::MentalHealth => "Mental Health",
            GoalAreaId::FamilyIan => "Family: Ian",
            GoalAreaId::FamilyWife => "Family: Wife",
            GoalAreaId::WorkStrategic => "Work: Strategic",
            GoalAreaId::WorkLeadership => "Work: Leadership",
            GoalAreaId::ContentNewsletter => "Content: Newsletter",
        }
    }

    /// Ordered keyword list for the fallback extractor.
    ///
    /// Entries are lowercase; some are deliberate stems ("meditat" matches
    /// "meditated" and "meditation").
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            GoalAreaId::PhysicalHealth => &[
                "exercise", "workout", "gym", "run", "peloton", "yoga", "walk", "swim", "bike",
                "strength", "cardio", "stretch",
            ],
            GoalAreaId::MentalHealth => &[
                "meditat", "journal", "therapy", "mindful", "breathing", "gratitude", "read",
                "relax", "sleep", "self-care",
            ],
            GoalAreaId::FamilyIan => &[
                "ian", "son", "kid", "child", "play", "homework", "school", "teach", "bedtime",
                "breakfast",
            ],
            GoalAreaId::FamilyWife => &[
                "wife", "spouse", "partner", "date", "dinner together", "connect", "talk",
                "listen", "support", "love",
            ],
            GoalAreaId::WorkStrategic => &[
                "strategy", "okr", "vision", "presentation", "roadmap", "planning", "decision",
                "meeting", "project", "initiative",
            ],
            GoalAreaId::WorkLeadership => &[
                "1:1", "one on one", "team", "mentor", "feedback", "coaching", "hire", "review",
                "delegate", "empower",
            ],
            GoalAreaId::ContentNewsletter => &[
                "newsletter", "wrote", "article", "content", "blog", "post", "draft", "publish",
                "write", "edit",
            ],
        }
    }

    /// Seed values for a freshly provisioned goal area row.
    pub fn seed_defaults(self) -> GoalAreaDefaults {
        match self {
            GoalAreaId::PhysicalHealth => GoalAreaDefaults {
                display_name: "Physical Health",
                emoji: "💪",
                color: "#10B981",
                weekly_min_wins: 4,
                intention_text: "Move my body, feel strong, have energy for what matters",
                sort_order: 0,
            },
            GoalAreaId::MentalHealth => GoalAreaDefaults {
                display_name: "Mental Health",
                emoji: "🧠",
                color: "#8B5CF6",
                weekly_min_wins: 3,
                intention_text: "Stay calm, process feelings, maintain clarity",
                sort_order: 1,
            },
            GoalAreaId::FamilyIan => GoalAreaDefaults {
                display_name: "Time with Ian",
                emoji: "👦",
                color: "#F59E0B",
                weekly_min_wins: 5,
                intention_text: "Be present, play together, create memories",
                sort_order: 2,
            },
            GoalAreaId::FamilyWife => GoalAreaDefaults {
                display_name: "Time with Wife",
                emoji: "❤️",
                color: "#EC4899",
                weekly_min_wins: 3,
                intention_text: "Connect deeply, support each other, enjoy time together",
                sort_order: 3,
            },
            GoalAreaId::WorkStrategic => GoalAreaDefaults {
                display_name: "Strategic Work",
                emoji: "🎯",
                color: "#3B82F6",
                weekly_min_wins: 3,
                intention_text: "Focus on high-impact work that moves the needle",
                sort_order: 4,
            },
            GoalAreaId::WorkLeadership => GoalAreaDefaults {
                display_name: "Leadership",
                emoji: "👥",
                color: "#6366F1",
                weekly_min_wins: 2,
                intention_text: "Develop the team, have meaningful 1:1s, unblock others",
                sort_order: 5,
            },
            GoalAreaId::ContentNewsletter => GoalAreaDefaults {
                display_name: "Newsletter",
                emoji: "✍️",
                color: "#F97316",
                weekly_min_wins: 1,
                intention_text: "Write consistently, share insights, build audience",
                sort_order: 6,
            },
        }
    }
}

impl std::str::FromStr for GoalAreaId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GoalAreaId::ALL
            .into_iter()
            .find(|area| area.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Unknown goal area: {s}")))
    }
}

impl std::fmt::Display for GoalAreaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_covers_seven_areas() {
        assert_eq!(GoalAreaId::ALL.len(), 7);
    }

    #[test]
    fn id_round_trips_through_str() {
        for area in GoalAreaId::ALL {
            assert_eq!(area.as_str().parse::<GoalAreaId>().unwrap(), area);
        }
    }

    #[test]
    fn unknown_id_is_rejected() {
        assert!("side_quests".parse::<GoalAreaId>().is_err());
    }

    #[test]
    fn every_area_has_keywords() {
        for area in GoalAreaId::ALL {
            assert!(!area.keywords().is_empty(), "{area} has no keywords");
        }
    }

    #[test]
    fn seed_sort_orders_are_distinct_and_sequential() {
        let orders: Vec<i32> = GoalAreaId::ALL
            .iter()
            .map(|a| a.seed_defaults().sort_order)
            .collect();
        assert_eq!(orders, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn seed_targets_are_nonnegative() {
        for area in GoalAreaId::ALL {
            assert!(area.seed_defaults().weekly_min_wins >= 0);
        }
    }
}
