use crate::engine::constants::{CALORIES_HIGH_ABOVE, CALORIES_LOW_BELOW};
use crate::models::Goal;

/// Calorie band relative to target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CalorieBand {
    Under,
    OnTrack,
    Over,
}

impl CalorieBand {
    fn of(percentage: f64) -> Self {
        if percentage > CALORIES_HIGH_ABOVE {
            CalorieBand::Over
        } else if percentage < CALORIES_LOW_BELOW {
            CalorieBand::Under
        } else {
            CalorieBand::OnTrack
        }
    }
}

/// (goal, band) → message. `None` band matches any calorie level.
const ACTIVITY_TABLE: &[(Goal, Option<CalorieBand>, &str)] = &[
    (
        Goal::Decrease,
        Some(CalorieBand::Over),
        "You went over today's calories: add 30-40 minutes of light cardio such as brisk walking or cycling.",
    ),
    (
        Goal::Decrease,
        Some(CalorieBand::Under),
        "Intake is on the low side, so keep activity gentle today: an easy walk or some stretching is enough.",
    ),
    (
        Goal::Decrease,
        None,
        "Aim for 30 minutes of moderate cardio today and two strength sessions across the week.",
    ),
    (
        Goal::Increase,
        Some(CalorieBand::Under),
        "Do a resistance training session and eat a bit more: muscle needs both the stimulus and the fuel.",
    ),
    (
        Goal::Increase,
        Some(CalorieBand::Over),
        "Put the extra energy to work with a full resistance training session focused on compound lifts.",
    ),
    (
        Goal::Increase,
        None,
        "Keep up resistance training 3-4 times a week with gradually heavier loads.",
    ),
    (
        Goal::Healthy,
        Some(CalorieBand::Over),
        "Add an extra 20-30 minutes of brisk walking to balance today's intake.",
    ),
    (
        Goal::Healthy,
        None,
        "Get at least 30 minutes of exercise you enjoy today, such as walking, cycling or swimming.",
    ),
];

/// One activity suggestion from the goal and calorie percentage.
///
/// Without a calorie percentage (no calorie target) only the goal's generic line applies.
pub fn activity_advice(calorie_percentage: Option<f64>, goal: Goal) -> Vec<String> {
    let band = calorie_percentage.map(CalorieBand::of);
    ACTIVITY_TABLE
        .iter()
        .find(|(g, b, _)| *g == goal && (b.is_none() || *b == band))
        .map(|(_, _, message)| vec![message.to_string()])
        .unwrap_or_default()
}
