use assert_float_eq::*;

use nutri_advisor_rs::engine::{
    aggregate, assess_daily, assess_nutrient, weights_for, MAX_NUTRIENT_SCORE, MIN_NUTRIENT_SCORE,
};
use nutri_advisor_rs::models::{Goal, NutrientKind, NutritionIntake};

#[test]
fn test_zero_target_always_unassessed() {
    for kind in NutrientKind::ALL {
        for actual in [0.0, 50.0, 5000.0] {
            for target in [0.0, -10.0] {
                let a = assess_nutrient(actual, target, kind);
                assert_eq!(a.percentage, 0.0);
                assert_eq!(a.score, 0.0);
            }
        }
    }
}

#[test]
fn test_score_symmetric_in_deviation() {
    for kind in NutrientKind::ALL {
        for d in [0.0, 3.0, 10.0, 15.0, 20.0, 27.5, 60.0, 90.0] {
            let over = assess_nutrient(100.0 + d, 100.0, kind);
            let under = assess_nutrient(100.0 - d, 100.0, kind);
            assert_float_absolute_eq!(over.score, under.score, 1e-9);
        }
    }
}

#[test]
fn test_score_monotonic_and_bounded() {
    let mut previous = MAX_NUTRIENT_SCORE;
    for step in 0..=300 {
        let actual = 100.0 + step as f64 * 0.5;
        let score = assess_nutrient(actual, 100.0, NutrientKind::Carbs).score;
        assert!(score <= previous, "score rose at {}", actual);
        assert!((MIN_NUTRIENT_SCORE..=MAX_NUTRIENT_SCORE).contains(&score));
        previous = score;
    }
}

#[test]
fn test_total_score_bounded_for_all_goals() {
    let target = NutritionIntake::new(1800.0, 90.0, 225.0, 60.0);
    let samples = [
        NutritionIntake::new(0.0, 0.0, 0.0, 0.0),
        NutritionIntake::new(1800.0, 90.0, 225.0, 60.0),
        NutritionIntake::new(4000.0, 300.0, 600.0, 200.0),
        NutritionIntake::new(900.0, 120.0, 100.0, 30.0),
    ];
    for goal in Goal::ALL {
        assert_float_absolute_eq!(weights_for(goal).sum(), 1.0, 1e-9);
        for actual in &samples {
            let total = aggregate(&assess_daily(actual, &target), goal).total_score;
            assert!((0.0..=100.0).contains(&total), "{} for {:?}", total, actual);
        }
    }
}

#[test]
fn test_degenerate_protein_target() {
    let actual = NutritionIntake::new(1800.0, 85.0, 225.0, 60.0);
    let target = NutritionIntake::new(1800.0, 0.0, 225.0, 60.0);
    let daily = assess_daily(&actual, &target);

    assert_eq!(daily.protein.score, 0.0);
    assert_eq!(daily.protein.percentage, 0.0);

    // Remaining weights for "decrease": 0.35 + 0.20 + 0.15, all at full score
    let summary = aggregate(&daily, Goal::Decrease);
    assert_float_absolute_eq!(summary.total_score, 70.0, 1e-9);
}
