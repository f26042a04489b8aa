use std::fmt;

use serde::{Deserialize, Serialize};

/// The four tracked nutrients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutrientKind {
    Calories,
    Protein,
    Carbs,
    Fat,
}

impl NutrientKind {
    /// Fixed evaluation order.
    pub const ALL: [NutrientKind; 4] = [
        NutrientKind::Calories,
        NutrientKind::Protein,
        NutrientKind::Carbs,
        NutrientKind::Fat,
    ];

    pub fn name(self) -> &'static str {
        match self {
            NutrientKind::Calories => "calories",
            NutrientKind::Protein => "protein",
            NutrientKind::Carbs => "carbs",
            NutrientKind::Fat => "fat",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            NutrientKind::Calories => "kcal",
            _ => "g",
        }
    }
}

impl fmt::Display for NutrientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Qualitative classification of a nutrient against its target.
///
/// Which variants a nutrient can produce depends on its kind; calories only
/// ever use `Excellent`, `Good` and `NeedsAdjustment`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutrientStatus {
    Excellent,
    Good,
    NeedMore,
    Insufficient,
    Excessive,
    NeedsAdjustment,
}

impl NutrientStatus {
    pub fn label(self) -> &'static str {
        match self {
            NutrientStatus::Excellent => "excellent",
            NutrientStatus::Good => "good",
            NutrientStatus::NeedMore => "need more",
            NutrientStatus::Insufficient => "insufficient",
            NutrientStatus::Excessive => "excessive",
            NutrientStatus::NeedsAdjustment => "needs adjustment",
        }
    }
}

/// Result of scoring one nutrient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientAssessment {
    pub status: NutrientStatus,

    /// Continuous score in [0, 25]; 0 only when the target was unusable.
    pub score: f64,

    /// Actual intake as a percentage of target.
    pub percentage: f64,
}

impl NutrientAssessment {
    /// Sentinel for a target of zero or less: nothing to compare against.
    pub fn unassessed() -> Self {
        Self {
            status: NutrientStatus::NeedsAdjustment,
            score: 0.0,
            percentage: 0.0,
        }
    }

    /// False for the zero-target sentinel.
    ///
    /// Real assessments never score below the formula floor, so a zero score
    /// is enough to tell them apart.
    #[inline]
    pub fn is_assessed(&self) -> bool {
        self.score > 0.0
    }

    /// Absolute distance from 100%.
    #[inline]
    pub fn deviation(&self) -> f64 {
        (self.percentage - 100.0).abs()
    }
}

/// Assessments for all four nutrients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyAssessment {
    pub calories: NutrientAssessment,
    pub protein: NutrientAssessment,
    pub carbs: NutrientAssessment,
    pub fat: NutrientAssessment,
}

impl DailyAssessment {
    #[inline]
    pub fn get(&self, kind: NutrientKind) -> &NutrientAssessment {
        match kind {
            NutrientKind::Calories => &self.calories,
            NutrientKind::Protein => &self.protein,
            NutrientKind::Carbs => &self.carbs,
            NutrientKind::Fat => &self.fat,
        }
    }

    /// (kind, assessment) pairs in fixed order.
    pub fn iter(&self) -> impl Iterator<Item = (NutrientKind, &NutrientAssessment)> {
        NutrientKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unassessed_sentinel() {
        let sentinel = NutrientAssessment::unassessed();
        assert!(!sentinel.is_assessed());
        assert_eq!(sentinel.percentage, 0.0);
        assert_eq!(sentinel.status, NutrientStatus::NeedsAdjustment);
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&NutrientStatus::NeedMore).unwrap();
        assert_eq!(json, "\"need_more\"");
    }

    #[test]
    fn test_daily_assessment_iter_order() {
        let a = NutrientAssessment {
            status: NutrientStatus::Excellent,
            score: 25.0,
            percentage: 100.0,
        };
        let daily = DailyAssessment {
            calories: a,
            protein: a,
            carbs: a,
            fat: a,
        };
        let kinds: Vec<NutrientKind> = daily.iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, NutrientKind::ALL.to_vec());
    }
}
