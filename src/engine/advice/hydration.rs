use crate::engine::constants::{EXTRA_WATER_ML_PER_HOUR, GLASS_ML, WATER_ML_PER_KG};

/// Minimum daily water in ml for a body weight.
pub fn minimum_water_ml(weight_kg: f64) -> u32 {
    (WATER_ML_PER_KG * weight_kg).round() as u32
}

/// Glasses needed to reach `volume_ml`, rounded up.
pub fn water_glasses(volume_ml: u32) -> u32 {
    (volume_ml as f64 / GLASS_ML).ceil() as u32
}

/// Water volume and glass count plus general reminders.
pub fn hydration_advice(weight_kg: f64) -> Vec<String> {
    let volume = minimum_water_ml(weight_kg);
    let glasses = water_glasses(volume);

    vec![
        format!(
            "Drink at least {} ml of water today, about {} glasses of {:.0} ml.",
            volume, glasses, GLASS_ML
        ),
        "Check your urine color: pale yellow means you are well hydrated.".to_string(),
        format!(
            "Add about {} ml for every hour of exercise or time spent in hot weather.",
            EXTRA_WATER_ML_PER_HOUR
        ),
        "Set a reminder to drink a glass every 1-2 hours instead of waiting until you feel thirsty."
            .to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seventy_kg() {
        assert_eq!(minimum_water_ml(70.0), 2450);
        assert_eq!(water_glasses(2450), 10);

        let advice = hydration_advice(70.0);
        assert_eq!(advice.len(), 4);
        assert!(advice[0].contains("2450 ml"));
        assert!(advice[0].contains("10 glasses"));
    }

    #[test]
    fn test_glasses_round_up() {
        assert_eq!(water_glasses(2500), 10);
        assert_eq!(water_glasses(2501), 11);
        assert_eq!(water_glasses(100), 1);
    }
}
