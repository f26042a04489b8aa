use crate::engine::constants::*;
use crate::models::{DailyAssessment, Goal, NutrientKind, UserProfile};

/// Next-day tip for a nutrient that ran high or low.
fn nutrient_tip(kind: NutrientKind, high: bool) -> &'static str {
    match (kind, high) {
        (NutrientKind::Protein, false) => {
            "Start tomorrow with protein at breakfast, such as eggs, Greek yogurt or tofu."
        }
        (NutrientKind::Protein, true) => {
            "Tomorrow, spread protein across meals and let vegetables take some of the plate."
        }
        (NutrientKind::Carbs, true) => {
            "Cut back on sugary drinks and sweets tomorrow, and take a 15-minute walk after meals."
        }
        (NutrientKind::Carbs, false) => {
            "Add a portion of whole grains or fruit tomorrow to keep your energy up."
        }
        (NutrientKind::Fat, true) => {
            "Grill, steam or bake tomorrow's meals instead of frying them."
        }
        (NutrientKind::Fat, false) => {
            "Include a small serving of healthy fats tomorrow, like nuts, avocado or olive oil."
        }
        (NutrientKind::Calories, true) => {
            "Avoid late-evening sweets tomorrow and fit in a 30-minute walk."
        }
        (NutrientKind::Calories, false) => {
            "Plan a mid-day protein snack tomorrow so you don't fall short on energy."
        }
    }
}

fn goal_tip(goal: Goal) -> String {
    match goal {
        Goal::Increase => {
            "Schedule a resistance training session tomorrow to turn extra food into muscle."
                .to_string()
        }
        Goal::Decrease => format!(
            "Aim for at least {} steps tomorrow to support your weight-loss goal.",
            STEP_TARGET
        ),
        Goal::Healthy => {
            "Keep moving: about 150 minutes of activity across the week keeps you on track."
                .to_string()
        }
    }
}

const GENERIC_TIP: &str =
    "Drink a glass of water before each meal and keep meals about 3-4 hours apart.";

const ON_TRACK_TIP: &str = "Today was close to target across the board: repeat the same pattern tomorrow.";

/// Prioritized adjustments for the next day, at most `MAX_TOMORROW_TIPS`.
pub fn tomorrow_tips(assessments: &DailyAssessment, profile: &UserProfile) -> Vec<String> {
    let mut ranked: Vec<(NutrientKind, f64, bool)> = assessments
        .iter()
        .filter(|(_, a)| a.is_assessed())
        .map(|(kind, a)| (kind, a.deviation(), a.percentage > 100.0))
        .collect();

    // Stable sort keeps fixed nutrient order on ties
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let mut tips = Vec::new();

    match ranked.first() {
        Some(&(kind, deviation, high)) if deviation > TOMORROW_FOCUS_DEVIATION => {
            tips.push(nutrient_tip(kind, high).to_string());
        }
        _ => tips.push(ON_TRACK_TIP.to_string()),
    }

    if let Some(&(kind, deviation, high)) = ranked.get(1) {
        if deviation > TOMORROW_SECONDARY_DEVIATION {
            tips.push(nutrient_tip(kind, high).to_string());
        }
    }

    tips.push(goal_tip(profile.goal));
    tips.push(GENERIC_TIP.to_string());

    tips.truncate(MAX_TOMORROW_TIPS);
    tips
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assessment::assess_daily;
    use crate::models::NutritionIntake;

    fn target() -> NutritionIntake {
        NutritionIntake::new(1800.0, 90.0, 225.0, 60.0)
    }

    fn tips_for(actual: NutritionIntake, goal: Goal) -> Vec<String> {
        let daily = assess_daily(&actual, &target());
        tomorrow_tips(&daily, &UserProfile::new(goal, 70.0, 28, "moderate"))
    }

    #[test]
    fn test_low_protein_leads() {
        let tips = tips_for(NutritionIntake::new(1750.0, 50.0, 225.0, 60.0), Goal::Decrease);
        assert!(tips[0].contains("protein at breakfast"));
        assert!(tips[1].contains("8000 steps"));
        assert_eq!(tips[2], GENERIC_TIP);
        assert_eq!(tips.len(), 3);
    }

    #[test]
    fn test_two_deviations_fill_four_slots() {
        // fat 150%, carbs 130%
        let tips = tips_for(NutritionIntake::new(1800.0, 90.0, 292.5, 90.0), Goal::Increase);
        assert_eq!(tips.len(), MAX_TOMORROW_TIPS);
        assert!(tips[0].contains("instead of frying"));
        assert!(tips[1].contains("sugary drinks"));
        assert!(tips[2].contains("resistance training"));
    }

    #[test]
    fn test_on_track_day() {
        let tips = tips_for(target(), Goal::Healthy);
        assert_eq!(tips[0], ON_TRACK_TIP);
        assert!(tips[1].contains("150 minutes"));
    }

    #[test]
    fn test_high_calories_tip() {
        let tips = tips_for(NutritionIntake::new(2300.0, 95.0, 240.0, 62.0), Goal::Decrease);
        assert!(tips[0].contains("late-evening sweets"));
    }

    #[test]
    fn test_unassessed_nutrients_ignored() {
        let daily = assess_daily(
            &NutritionIntake::new(1800.0, 10.0, 225.0, 60.0),
            &NutritionIntake::new(1800.0, 0.0, 225.0, 60.0),
        );
        let tips = tomorrow_tips(&daily, &UserProfile::new(Goal::Healthy, 70.0, 28, ""));
        assert_eq!(tips[0], ON_TRACK_TIP);
    }
}
