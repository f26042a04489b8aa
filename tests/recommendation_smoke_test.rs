use chrono::NaiveDate;

use nutri_advisor_rs::engine::advice::{hydration_advice, minimum_water_ml, water_glasses};
use nutri_advisor_rs::engine::{generate_recommendation, AdviceClock};
use nutri_advisor_rs::models::{Goal, Grade, NutrientStatus, NutritionIntake, UserProfile};
use nutri_advisor_rs::AdvisorError;

fn target() -> NutritionIntake {
    NutritionIntake::new(1800.0, 90.0, 225.0, 60.0)
}

fn profile() -> UserProfile {
    UserProfile::new(Goal::Decrease, 70.0, 28, "moderate")
}

fn clock(hour: u32) -> AdviceClock {
    AdviceClock::new(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(), hour)
}

#[test]
fn test_scenario_a_close_to_target() {
    let actual = NutritionIntake::new(1847.0, 85.0, 234.0, 62.0);
    let report = generate_recommendation(&actual, &target(), &profile(), &clock(19)).unwrap();

    assert!(report.total_score >= 80.0, "got {}", report.total_score);
    assert!(matches!(report.grade, Grade::Excellent | Grade::VeryGood));
    assert_eq!(report.assessments.calories.status, NutrientStatus::Excellent);
    assert!(report.summary.contains(&format!("{:.1}", report.total_score)));
    assert!(report.summary.contains(report.grade.label()));
}

#[test]
fn test_scenario_b_under_eating() {
    let actual_a = NutritionIntake::new(1847.0, 85.0, 234.0, 62.0);
    let actual_b = NutritionIntake::new(1450.0, 65.0, 180.0, 45.0);
    let a = generate_recommendation(&actual_a, &target(), &profile(), &clock(15)).unwrap();
    let b = generate_recommendation(&actual_b, &target(), &profile(), &clock(15)).unwrap();

    assert!((b.assessments.calories.percentage - 80.56).abs() < 0.01);
    assert!((b.assessments.protein.percentage - 72.22).abs() < 0.01);
    assert_eq!(b.assessments.protein.status, NutrientStatus::NeedMore);
    assert_eq!(b.assessments.fat.status, NutrientStatus::NeedMore);
    assert!(b.total_score < a.total_score);
    assert!(b.nutrition_advice.iter().any(|s| s.contains("protein-rich snack")));
}

#[test]
fn test_scenario_c_zero_protein_target() {
    let actual = NutritionIntake::new(1847.0, 85.0, 234.0, 62.0);
    let target = NutritionIntake::new(1800.0, 0.0, 225.0, 60.0);
    let report = generate_recommendation(&actual, &target, &profile(), &clock(12)).unwrap();

    assert_eq!(report.assessments.protein.score, 0.0);
    assert_eq!(report.assessments.protein.percentage, 0.0);
    assert!(report.total_score.is_finite());
    assert!(report.total_score > 0.0 && report.total_score <= 70.0);
}

#[test]
fn test_advice_caps() {
    let days = [
        NutritionIntake::new(0.0, 0.0, 0.0, 0.0),
        NutritionIntake::new(600.0, 20.0, 60.0, 15.0),
        NutritionIntake::new(2600.0, 50.0, 400.0, 120.0),
        NutritionIntake::new(2000.0, 250.0, 150.0, 40.0),
    ];
    for actual in &days {
        for hour in [0, 7, 12, 18, 22] {
            let report = generate_recommendation(actual, &target(), &profile(), &clock(hour)).unwrap();
            assert!(!report.nutrition_advice.is_empty());
            assert!(report.nutrition_advice.len() <= 4);
            assert!(report.tomorrow_tips.len() <= 4);
            assert_eq!(report.activity_advice.len(), 1);
            assert!((1..=2).contains(&report.timing_advice.len()));
        }
    }
}

#[test]
fn test_deterministic_with_injected_clock() {
    let actual = NutritionIntake::new(2100.0, 70.0, 280.0, 75.0);
    let first = generate_recommendation(&actual, &target(), &profile(), &clock(20)).unwrap();
    let second = generate_recommendation(&actual, &target(), &profile(), &clock(20)).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_hydration_seventy_kg() {
    assert!(minimum_water_ml(70.0) >= 2450);
    assert_eq!(water_glasses(2450), 10);

    let report = generate_recommendation(&target(), &target(), &profile(), &clock(9)).unwrap();
    assert_eq!(report.hydration_advice, hydration_advice(70.0));
    assert!((3..=4).contains(&report.hydration_advice.len()));
}

#[test]
fn test_invalid_input_fails_before_assessment() {
    let nan = NutritionIntake::new(f64::NAN, 90.0, 225.0, 60.0);
    let result = generate_recommendation(&nan, &target(), &profile(), &clock(9));
    assert!(matches!(result, Err(AdvisorError::InvalidArgument(_))));

    let negative_target = NutritionIntake::new(1800.0, 90.0, -1.0, 60.0);
    let result = generate_recommendation(&target(), &negative_target, &profile(), &clock(9));
    assert!(matches!(result, Err(AdvisorError::InvalidArgument(_))));
}
