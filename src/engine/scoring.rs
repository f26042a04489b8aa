use tracing::debug;

use crate::engine::assessment::round2;
use crate::engine::constants::*;
use crate::models::{DailyAssessment, Goal, Grade};

/// Weighted total score (0–100) and its grade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreSummary {
    pub total_score: f64,
    pub grade: Grade,
}

/// Map a total score to its grade.
pub fn grade_for(total_score: f64) -> Grade {
    if total_score >= GRADE_EXCELLENT_MIN {
        Grade::Excellent
    } else if total_score >= GRADE_VERY_GOOD_MIN {
        Grade::VeryGood
    } else if total_score >= GRADE_GOOD_MIN {
        Grade::Good
    } else if total_score >= GRADE_FAIR_MIN {
        Grade::Fair
    } else {
        Grade::NeedsImprovement
    }
}

/// Combine the four nutrient scores using goal-dependent weights.
///
/// Each score is normalized to [0, 1] by `MAX_NUTRIENT_SCORE`. Unassessed
/// nutrients contribute zero; weights are not renormalized.
pub fn aggregate(assessments: &DailyAssessment, goal: Goal) -> ScoreSummary {
    let weights = weights_for(goal);
    let ratio = |score: f64| (score / MAX_NUTRIENT_SCORE).clamp(0.0, 1.0);

    let weighted = weights.calories * ratio(assessments.calories.score)
        + weights.protein * ratio(assessments.protein.score)
        + weights.carbs * ratio(assessments.carbs.score)
        + weights.fat * ratio(assessments.fat.score);

    let total_score = round2(weighted * 100.0);
    let grade = grade_for(total_score);

    debug!(goal = goal.name(), total_score, grade = grade.label(), "aggregated score");

    ScoreSummary { total_score, grade }
}
