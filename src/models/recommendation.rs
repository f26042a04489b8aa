use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{DailyAssessment, NutritionIntake, UserProfile};

/// Qualitative band for the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "excellent")]
    Excellent,
    #[serde(rename = "very good")]
    VeryGood,
    #[serde(rename = "good")]
    Good,
    #[serde(rename = "fair")]
    Fair,
    #[serde(rename = "needs improvement")]
    NeedsImprovement,
}

impl Grade {
    pub fn label(self) -> &'static str {
        match self {
            Grade::Excellent => "excellent",
            Grade::VeryGood => "very good",
            Grade::Good => "good",
            Grade::Fair => "fair",
            Grade::NeedsImprovement => "needs improvement",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Input document: one day of intake, the targets and who it is for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceRequest {
    pub actual: NutritionIntake,
    pub target: NutritionIntake,
    pub profile: UserProfile,
}

/// The full daily report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecommendation {
    pub date: NaiveDate,
    pub total_score: f64,
    pub grade: Grade,
    pub assessments: DailyAssessment,
    pub nutrition_advice: Vec<String>,
    pub activity_advice: Vec<String>,
    pub hydration_advice: Vec<String>,
    pub timing_advice: Vec<String>,
    pub tomorrow_tips: Vec<String>,
    pub summary: String,
}
