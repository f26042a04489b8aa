use tracing::debug;

use crate::engine::constants::*;
use crate::models::{
    DailyAssessment, NutrientAssessment, NutrientKind, NutrientStatus, NutritionIntake,
};

/// Round to 2 decimal places.
#[inline]
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[inline]
fn within(value: f64, band: (f64, f64)) -> bool {
    value >= band.0 && value <= band.1
}

impl NutrientKind {
    /// Classify an intake percentage using this nutrient's bands.
    pub fn classify(self, percentage: f64) -> NutrientStatus {
        match self {
            NutrientKind::Calories => {
                if within(percentage, CALORIES_EXCELLENT_BAND) {
                    NutrientStatus::Excellent
                } else if within(percentage, CALORIES_GOOD_BAND) {
                    NutrientStatus::Good
                } else {
                    NutrientStatus::NeedsAdjustment
                }
            }
            NutrientKind::Protein => classify_bands(
                percentage,
                PROTEIN_EXCELLENT_BAND,
                PROTEIN_INSUFFICIENT_BELOW,
            ),
            NutrientKind::Carbs | NutrientKind::Fat => {
                classify_bands(percentage, MACRO_EXCELLENT_BAND, MACRO_INSUFFICIENT_BELOW)
            }
        }
    }
}

/// Excellent inside the band, excessive above, need-more or insufficient below.
fn classify_bands(percentage: f64, excellent: (f64, f64), insufficient_below: f64) -> NutrientStatus {
    if within(percentage, excellent) {
        NutrientStatus::Excellent
    } else if percentage > excellent.1 {
        NutrientStatus::Excessive
    } else if percentage >= insufficient_below {
        NutrientStatus::NeedMore
    } else {
        NutrientStatus::Insufficient
    }
}

/// Score a deviation from 100%.
///
/// Piecewise linear: 25 → 22 over the first 10 points, 22 → 18 over the next
/// 10, then half a point per point down to the floor of 10.
pub fn deviation_score(deviation: f64) -> f64 {
    let raw = if deviation <= CLOSE_DEVIATION {
        MAX_NUTRIENT_SCORE - CLOSE_SLOPE * deviation
    } else if deviation <= MODERATE_DEVIATION {
        let at_close = MAX_NUTRIENT_SCORE - CLOSE_SLOPE * CLOSE_DEVIATION;
        at_close - MODERATE_SLOPE * (deviation - CLOSE_DEVIATION)
    } else {
        let at_moderate = MAX_NUTRIENT_SCORE
            - CLOSE_SLOPE * CLOSE_DEVIATION
            - MODERATE_SLOPE * (MODERATE_DEVIATION - CLOSE_DEVIATION);
        at_moderate - FAR_SLOPE * (deviation - MODERATE_DEVIATION)
    };
    round2(raw.clamp(MIN_NUTRIENT_SCORE, MAX_NUTRIENT_SCORE))
}

/// Assess one nutrient against its target.
///
/// A target of zero or less cannot be evaluated and yields the
/// `NutrientAssessment::unassessed` sentinel.
pub fn assess_nutrient(actual: f64, target: f64, kind: NutrientKind) -> NutrientAssessment {
    if target <= 0.0 {
        return NutrientAssessment::unassessed();
    }

    let percentage = actual / target * 100.0;
    let deviation = (percentage - 100.0).abs();

    NutrientAssessment {
        status: kind.classify(percentage),
        score: deviation_score(deviation),
        percentage: round2(percentage),
    }
}

/// Assess all four nutrients.
pub fn assess_daily(actual: &NutritionIntake, target: &NutritionIntake) -> DailyAssessment {
    let assess = |kind| assess_nutrient(actual.get(kind), target.get(kind), kind);

    let daily = DailyAssessment {
        calories: assess(NutrientKind::Calories),
        protein: assess(NutrientKind::Protein),
        carbs: assess(NutrientKind::Carbs),
        fat: assess(NutrientKind::Fat),
    };

    for (kind, a) in daily.iter() {
        debug!(
            nutrient = kind.name(),
            status = a.status.label(),
            score = a.score,
            percentage = a.percentage,
            "assessed nutrient"
        );
    }

    daily
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::*;

    #[test]
    fn test_deviation_score_breakpoints() {
        assert_float_absolute_eq!(deviation_score(0.0), 25.0, 1e-9);
        assert_float_absolute_eq!(deviation_score(10.0), 22.0, 1e-9);
        assert_float_absolute_eq!(deviation_score(20.0), 18.0, 1e-9);
        assert_float_absolute_eq!(deviation_score(30.0), 13.0, 1e-9);
        assert_float_absolute_eq!(deviation_score(36.0), 10.0, 1e-9);
        assert_float_absolute_eq!(deviation_score(500.0), 10.0, 1e-9);
    }

    #[test]
    fn test_deviation_score_rounds_to_two_decimals() {
        // 25 - 0.3 * 2.6111 = 24.21667
        assert_float_absolute_eq!(deviation_score(2.6111), 24.22, 1e-9);
    }

    #[test]
    fn test_zero_target_is_unassessed() {
        let a = assess_nutrient(85.0, 0.0, NutrientKind::Protein);
        assert_eq!(a.score, 0.0);
        assert_eq!(a.percentage, 0.0);
        assert_eq!(a.status, NutrientStatus::NeedsAdjustment);
        assert!(!a.is_assessed());
    }

    #[test]
    fn test_calorie_status_bands() {
        let k = NutrientKind::Calories;
        assert_eq!(k.classify(100.0), NutrientStatus::Excellent);
        assert_eq!(k.classify(95.0), NutrientStatus::Excellent);
        assert_eq!(k.classify(90.0), NutrientStatus::Good);
        assert_eq!(k.classify(115.0), NutrientStatus::Good);
        assert_eq!(k.classify(80.0), NutrientStatus::NeedsAdjustment);
        assert_eq!(k.classify(130.0), NutrientStatus::NeedsAdjustment);
    }

    #[test]
    fn test_protein_status_bands() {
        let k = NutrientKind::Protein;
        assert_eq!(k.classify(100.0), NutrientStatus::Excellent);
        assert_eq!(k.classify(80.0), NutrientStatus::NeedMore);
        assert_eq!(k.classify(69.9), NutrientStatus::Insufficient);
        assert_eq!(k.classify(111.0), NutrientStatus::Excessive);
    }

    #[test]
    fn test_macro_status_bands() {
        for k in [NutrientKind::Carbs, NutrientKind::Fat] {
            assert_eq!(k.classify(80.0), NutrientStatus::Excellent);
            assert_eq!(k.classify(120.0), NutrientStatus::Excellent);
            assert_eq!(k.classify(70.0), NutrientStatus::NeedMore);
            assert_eq!(k.classify(50.0), NutrientStatus::Insufficient);
            assert_eq!(k.classify(121.0), NutrientStatus::Excessive);
        }
    }

    #[test]
    fn test_status_does_not_change_score() {
        // Same deviation, different kinds and statuses
        let cal = assess_nutrient(88.0, 100.0, NutrientKind::Calories);
        let pro = assess_nutrient(88.0, 100.0, NutrientKind::Protein);
        assert_ne!(cal.status, pro.status);
        assert_eq!(cal.score, pro.score);
    }

    #[test]
    fn test_assess_daily_uses_matching_fields() {
        let actual = NutritionIntake::new(1800.0, 45.0, 225.0, 90.0);
        let target = NutritionIntake::new(1800.0, 90.0, 225.0, 60.0);
        let daily = assess_daily(&actual, &target);
        assert_float_absolute_eq!(daily.calories.percentage, 100.0, 1e-9);
        assert_float_absolute_eq!(daily.protein.percentage, 50.0, 1e-9);
        assert_float_absolute_eq!(daily.fat.percentage, 150.0, 1e-9);
        assert_eq!(daily.protein.status, NutrientStatus::Insufficient);
        assert_eq!(daily.fat.status, NutrientStatus::Excessive);
    }
}
