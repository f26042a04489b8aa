use chrono::{Local, NaiveDate, Timelike};
use tracing::debug;

use crate::engine::advice::{
    activity_advice, hydration_advice, nutrition_advice, timing_advice, tomorrow_tips,
};
use crate::engine::assessment::assess_daily;
use crate::engine::constants::MAX_NUTRIENT_SCORE;
use crate::engine::scoring::aggregate;
use crate::error::{AdvisorError, Result};
use crate::models::{
    DailyAssessment, DailyRecommendation, Grade, NutrientKind, NutritionIntake, UserProfile,
};

/// The "now" a report is computed for.
///
/// Passed in explicitly so report generation stays a pure function of its
/// inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdviceClock {
    pub date: NaiveDate,
    /// Wall-clock hour, 0–23.
    pub hour: u32,
}

impl AdviceClock {
    pub fn new(date: NaiveDate, hour: u32) -> Self {
        Self { date, hour }
    }

    /// Local system time.
    pub fn now() -> Self {
        let now = Local::now();
        Self {
            date: now.date_naive(),
            hour: now.hour(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.hour > 23 {
            return Err(AdvisorError::InvalidArgument(format!(
                "hour must be between 0 and 23, got {}",
                self.hour
            )));
        }
        Ok(())
    }
}

/// One-line summary naming the score, grade and main takeaway.
fn summary_line(total_score: f64, grade: Grade, assessments: &DailyAssessment) -> String {
    // Only a nutrient with room to improve is worth naming
    let weakest = assessments
        .iter()
        .filter(|(_, a)| a.is_assessed() && a.score < MAX_NUTRIENT_SCORE)
        .min_by(|a, b| {
            a.1.score
                .partial_cmp(&b.1.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(kind, _)| kind);
    let missing: Vec<NutrientKind> = assessments
        .iter()
        .filter(|(_, a)| !a.is_assessed())
        .map(|(kind, _)| kind)
        .collect();

    let headline = match (grade, weakest, missing.as_slice()) {
        (Grade::Excellent | Grade::VeryGood, _, _) => {
            "Great consistency, keep it going.".to_string()
        }
        (_, Some(kind), _) => format!("Focus on {} first.", display_name(kind)),
        (_, None, [kind]) => format!(
            "Set a {} target to get a full assessment.",
            display_name(*kind)
        ),
        (_, None, _) => "Set your nutrient targets to get a full assessment.".to_string(),
    };

    format!("Daily score {:.1}/100 ({}). {}", total_score, grade, headline)
}

fn display_name(kind: NutrientKind) -> &'static str {
    match kind {
        NutrientKind::Calories => "calories",
        NutrientKind::Protein => "protein",
        NutrientKind::Carbs => "carbohydrates",
        NutrientKind::Fat => "fat",
    }
}

/// Build the full daily report.
///
/// Inputs are validated up front; once they pass, every step is infallible.
pub fn generate_recommendation(
    actual: &NutritionIntake,
    target: &NutritionIntake,
    profile: &UserProfile,
    clock: &AdviceClock,
) -> Result<DailyRecommendation> {
    actual.validate("actual")?;
    target.validate("target")?;
    profile.validate()?;
    clock.validate()?;

    let assessments = assess_daily(actual, target);
    let score = aggregate(&assessments, profile.goal);

    let nutrition = nutrition_advice(&assessments, actual, target, profile, clock.hour);
    let calorie_percentage = assessments
        .calories
        .is_assessed()
        .then_some(assessments.calories.percentage);
    let activity = activity_advice(calorie_percentage, profile.goal);
    let hydration = hydration_advice(profile.weight);
    let timing = timing_advice(clock.hour);
    let tomorrow = tomorrow_tips(&assessments, profile);

    let summary = summary_line(score.total_score, score.grade, &assessments);
    debug!(date = %clock.date, hour = clock.hour, %summary, "generated recommendation");

    Ok(DailyRecommendation {
        date: clock.date,
        total_score: score.total_score,
        grade: score.grade,
        assessments,
        nutrition_advice: nutrition,
        activity_advice: activity,
        hydration_advice: hydration,
        timing_advice: timing,
        tomorrow_tips: tomorrow,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Goal;

    fn clock() -> AdviceClock {
        AdviceClock::new(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(), 13)
    }

    fn profile() -> UserProfile {
        UserProfile::new(Goal::Decrease, 70.0, 28, "moderate")
    }

    #[test]
    fn test_rejects_invalid_inputs() {
        let target = NutritionIntake::new(1800.0, 90.0, 225.0, 60.0);
        let bad = NutritionIntake::new(-5.0, 90.0, 225.0, 60.0);
        let err = generate_recommendation(&bad, &target, &profile(), &clock()).unwrap_err();
        assert!(matches!(err, AdvisorError::InvalidArgument(_)));

        let late = AdviceClock { hour: 24, ..clock() };
        assert!(generate_recommendation(&target, &target, &profile(), &late).is_err());

        let weightless = UserProfile::new(Goal::Decrease, -70.0, 28, "");
        assert!(generate_recommendation(&target, &target, &weightless, &clock()).is_err());
    }

    #[test]
    fn test_summary_mentions_score_and_grade() {
        let target = NutritionIntake::new(1800.0, 90.0, 225.0, 60.0);
        let report = generate_recommendation(&target, &target, &profile(), &clock()).unwrap();
        assert_eq!(
            report.summary,
            "Daily score 100.0/100 (excellent). Great consistency, keep it going."
        );
        assert_eq!(report.date, clock().date);
    }

    #[test]
    fn test_summary_names_weakest_nutrient() {
        let target = NutritionIntake::new(1800.0, 90.0, 225.0, 60.0);
        let actual = NutritionIntake::new(1500.0, 40.0, 200.0, 58.0);
        let report = generate_recommendation(&actual, &target, &profile(), &clock()).unwrap();
        assert!(report.total_score < 80.0);
        assert!(report.summary.ends_with("Focus on protein first."));
    }

    #[test]
    fn test_summary_names_missing_target_when_rest_is_perfect() {
        let target = NutritionIntake::new(1800.0, 0.0, 225.0, 60.0);
        let actual = NutritionIntake::new(1800.0, 85.0, 225.0, 60.0);
        let report = generate_recommendation(&actual, &target, &profile(), &clock()).unwrap();
        assert_eq!(report.total_score, 70.0);
        assert_eq!(report.grade, Grade::Good);
        assert!(report.summary.ends_with("Set a protein target to get a full assessment."));
        assert!(!report.summary.contains("Focus on calories"));
    }

    #[test]
    fn test_missing_calorie_target_keeps_activity_generic() {
        let target = NutritionIntake::new(0.0, 90.0, 225.0, 60.0);
        let actual = NutritionIntake::new(1700.0, 90.0, 225.0, 60.0);
        let report = generate_recommendation(&actual, &target, &profile(), &clock()).unwrap();
        assert!(!report.assessments.calories.is_assessed());
        assert_eq!(report.activity_advice.len(), 1);
        assert!(report.activity_advice[0].contains("30 minutes of moderate cardio"));
        assert!(!report.activity_advice[0].contains("low side"));
    }

    #[test]
    fn test_summary_without_any_target() {
        let zero = NutritionIntake::default();
        let actual = NutritionIntake::new(1800.0, 90.0, 225.0, 60.0);
        let report = generate_recommendation(&actual, &zero, &profile(), &clock()).unwrap();
        assert_eq!(report.total_score, 0.0);
        assert!(report.summary.contains("Set your nutrient targets"));
    }
}
