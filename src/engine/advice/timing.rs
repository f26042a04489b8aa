/// Part of the day an hour falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPart {
    Morning,
    Midday,
    Evening,
    LateNight,
}

impl DayPart {
    pub fn of(hour: u32) -> Self {
        match hour {
            5..=10 => DayPart::Morning,
            11..=14 => DayPart::Midday,
            15..=20 => DayPart::Evening,
            _ => DayPart::LateNight,
        }
    }

    fn tips(self) -> &'static [&'static str] {
        match self {
            DayPart::Morning => &[
                "Have breakfast within an hour or two of waking, with some protein to stay full until lunch.",
                "If you train in the morning, a small carb snack beforehand helps performance.",
            ],
            DayPart::Midday => &[
                "Make lunch your balanced main meal: half vegetables, a quarter protein, a quarter whole grains.",
            ],
            DayPart::Evening => &[
                "Finish dinner 2-3 hours before bed to give digestion time.",
                "Keep dinner lighter than lunch, built around vegetables and lean protein.",
            ],
            DayPart::LateNight => &[
                "It's late: if you're hungry, choose something light like warm milk or a small yogurt.",
                "Avoid heavy or sugary food now so it doesn't disturb your sleep.",
            ],
        }
    }
}

/// Meal-timing tips for the given wall-clock hour (0–23).
pub fn timing_advice(hour: u32) -> Vec<String> {
    DayPart::of(hour)
        .tips()
        .iter()
        .map(|tip| tip.to_string())
        .collect()
}
