//! Wellness Plan Content
//!
//! Static guidance shown with every assessment. The plan itself does not
//! vary with risk; only the specialist referral does.

use crate::RiskLevel;
use serde::Serialize;

/// Referral message shown for Medium and High risk
pub const SPECIALIST_MESSAGE: &str =
    "Consider consulting a gynecologist or endocrinologist for further evaluation";

/// One bullet of advice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdviceItem {
    pub heading: &'static str,
    pub detail: &'static str,
}

/// A titled group of advice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdviceSection {
    pub title: &'static str,
    pub items: &'static [AdviceItem],
}

pub const DIETARY: AdviceSection = AdviceSection {
    title: "Dietary Recommendations",
    items: &[
        AdviceItem {
            heading: "Low Glycemic Index Foods",
            detail: "Whole grains, legumes, non-starchy vegetables",
        },
        AdviceItem {
            heading: "Anti-inflammatory Foods",
            detail: "Fatty fish, berries, turmeric, green tea",
        },
        AdviceItem {
            heading: "Avoid",
            detail: "Processed foods, sugary drinks, refined carbs",
        },
        AdviceItem {
            heading: "Meal Timing",
            detail: "Eat every 3-4 hours to regulate blood sugar",
        },
    ],
};

pub const FITNESS: AdviceSection = AdviceSection {
    title: "Fitness Plan",
    items: &[
        AdviceItem {
            heading: "Cardio",
            detail: "30-45 mins daily (brisk walking, cycling)",
        },
        AdviceItem {
            heading: "Strength Training",
            detail: "2-3x/week (bodyweight exercises)",
        },
        AdviceItem {
            heading: "Yoga",
            detail: "Poses like butterfly, cobra, and cat-cow",
        },
        AdviceItem {
            heading: "Consistency",
            detail: "Aim for 150 mins/week minimum",
        },
    ],
};

pub const MENTAL_WELLNESS: AdviceSection = AdviceSection {
    title: "Mental Wellness",
    items: &[
        AdviceItem {
            heading: "Meditation",
            detail: "10 mins daily (try guided apps)",
        },
        AdviceItem {
            heading: "Sleep Hygiene",
            detail: "7-9 hours, consistent schedule",
        },
        AdviceItem {
            heading: "Stress Management",
            detail: "Journaling, deep breathing",
        },
        AdviceItem {
            heading: "Community Support",
            detail: "Join PCOS support groups",
        },
    ],
};

/// The full plan, in display order
pub fn wellness_plan() -> [AdviceSection; 3] {
    [DIETARY, FITNESS, MENTAL_WELLNESS]
}

/// Specialist referral, if the level calls for one
pub fn specialist_referral(level: RiskLevel) -> Option<&'static str> {
    level.requires_specialist().then_some(SPECIALIST_MESSAGE)
}

/// Greeting line; blank or missing names fall back to "there"
pub fn greeting(name: Option<&str>) -> String {
    let name = name.map(str::trim).filter(|n| !n.is_empty()).unwrap_or("there");
    format!("Hello {}! Your assessment is ready.", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_sections() {
        let plan = wellness_plan();
        let titles: Vec<_> = plan.iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["Dietary Recommendations", "Fitness Plan", "Mental Wellness"]);
        assert!(plan.iter().all(|s| s.items.len() == 4));
    }

    #[test]
    fn test_referral_only_from_medium() {
        assert_eq!(specialist_referral(RiskLevel::Low), None);
        assert_eq!(specialist_referral(RiskLevel::Medium), Some(SPECIALIST_MESSAGE));
        assert_eq!(specialist_referral(RiskLevel::High), Some(SPECIALIST_MESSAGE));
    }

    #[test]
    fn test_greeting() {
        assert_eq!(greeting(Some("Maya")), "Hello Maya! Your assessment is ready.");
        assert_eq!(greeting(Some("  ")), "Hello there! Your assessment is ready.");
        assert_eq!(greeting(None), "Hello there! Your assessment is ready.");
    }
}
