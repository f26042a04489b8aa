use crate::models::Goal;

// ─────────────────────────────────────────────────────────────────────────────
// Nutrient scoring
// ─────────────────────────────────────────────────────────────────────────────

/// Best possible score for one nutrient.
pub const MAX_NUTRIENT_SCORE: f64 = 25.0;

/// Lowest score an assessable nutrient can receive.
pub const MIN_NUTRIENT_SCORE: f64 = 10.0;

/// Deviation (percentage points) covered by the first, gentlest slope.
pub const CLOSE_DEVIATION: f64 = 10.0;

/// Deviation where the steepest slope begins.
pub const MODERATE_DEVIATION: f64 = 20.0;

/// Score lost per point of deviation inside `CLOSE_DEVIATION`.
pub const CLOSE_SLOPE: f64 = 0.3;

/// Score lost per point between `CLOSE_DEVIATION` and `MODERATE_DEVIATION`.
pub const MODERATE_SLOPE: f64 = 0.4;

/// Score lost per point beyond `MODERATE_DEVIATION`.
pub const FAR_SLOPE: f64 = 0.5;

// ─────────────────────────────────────────────────────────────────────────────
// Status bands (percent of target, inclusive)
// ─────────────────────────────────────────────────────────────────────────────

pub const CALORIES_EXCELLENT_BAND: (f64, f64) = (95.0, 105.0);
pub const CALORIES_GOOD_BAND: (f64, f64) = (85.0, 115.0);

pub const PROTEIN_EXCELLENT_BAND: (f64, f64) = (90.0, 110.0);
/// Protein below this is insufficient rather than need-more.
pub const PROTEIN_INSUFFICIENT_BELOW: f64 = 70.0;

pub const MACRO_EXCELLENT_BAND: (f64, f64) = (80.0, 120.0);
/// Carbs/fat below this are insufficient rather than need-more.
pub const MACRO_INSUFFICIENT_BELOW: f64 = 60.0;

// ─────────────────────────────────────────────────────────────────────────────
// Aggregation
// ─────────────────────────────────────────────────────────────────────────────

/// Per-nutrient weights for the total score; always sums to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl ScoreWeights {
    pub fn sum(&self) -> f64 {
        self.calories + self.protein + self.carbs + self.fat
    }
}

pub const DECREASE_WEIGHTS: ScoreWeights = ScoreWeights {
    calories: 0.35,
    protein: 0.30,
    carbs: 0.20,
    fat: 0.15,
};

pub const INCREASE_WEIGHTS: ScoreWeights = ScoreWeights {
    calories: 0.30,
    protein: 0.35,
    carbs: 0.20,
    fat: 0.15,
};

pub const HEALTHY_WEIGHTS: ScoreWeights = ScoreWeights {
    calories: 0.30,
    protein: 0.30,
    carbs: 0.20,
    fat: 0.20,
};

/// Weight tuple for a goal.
pub fn weights_for(goal: Goal) -> ScoreWeights {
    match goal {
        Goal::Decrease => DECREASE_WEIGHTS,
        Goal::Increase => INCREASE_WEIGHTS,
        Goal::Healthy => HEALTHY_WEIGHTS,
    }
}

/// Minimum total score for each grade, best first.
pub const GRADE_EXCELLENT_MIN: f64 = 90.0;
pub const GRADE_VERY_GOOD_MIN: f64 = 80.0;
pub const GRADE_GOOD_MIN: f64 = 70.0;
pub const GRADE_FAIR_MIN: f64 = 60.0;

// ─────────────────────────────────────────────────────────────────────────────
// Day progress and tone
// ─────────────────────────────────────────────────────────────────────────────

/// Hour the eating day is assumed to start.
pub const DAY_START_HOUR: u32 = 6;

/// Hour the eating day is assumed to end.
pub const DAY_END_HOUR: u32 = 21;

/// Weight of the clock-based progress estimate.
pub const CLOCK_PROGRESS_WEIGHT: f64 = 0.6;

/// Weight of the calorie-based progress estimate.
pub const CALORIE_PROGRESS_WEIGHT: f64 = 0.9;

/// Day progress above which the tone turns strong.
pub const STRONG_TONE_PROGRESS: f64 = 0.8;

/// Day progress below which a light-eating day keeps a mild tone.
pub const MILD_TONE_PROGRESS: f64 = 0.5;

/// Calorie percentage below which an early day keeps a mild tone.
pub const MILD_TONE_CALORIES: f64 = 60.0;

/// Gross deviations that force a strong tone (percent of target).
pub const GROSS_CALORIES_ABOVE: f64 = 120.0;
pub const GROSS_PROTEIN_BELOW: f64 = 70.0;
pub const GROSS_MACRO_ABOVE: f64 = 140.0;

// ─────────────────────────────────────────────────────────────────────────────
// Nutrition advice thresholds
// ─────────────────────────────────────────────────────────────────────────────

/// Protein percentage below which a protein top-up is suggested.
pub const PROTEIN_TOPUP_BELOW: f64 = 95.0;

/// Calorie percentage above which protein is added by swapping instead.
pub const CALORIES_SWAP_ABOVE: f64 = 105.0;

/// Secondary swap rule: calories above / protein below these.
pub const SECONDARY_SWAP_CALORIES_ABOVE: f64 = 110.0;
pub const SECONDARY_SWAP_PROTEIN_BELOW: f64 = 90.0;

/// Snack rule: calories below / protein below these.
pub const SNACK_CALORIES_BELOW: f64 = 85.0;
pub const SNACK_PROTEIN_BELOW: f64 = 90.0;

/// Protein ceiling in g per kg of body weight.
pub const PROTEIN_CEILING_PER_KG: f64 = 2.0;
pub const PROTEIN_CEILING_PER_KG_GAIN: f64 = 2.2;

/// Protein is excessive above this multiple of target...
pub const PROTEIN_EXCESS_TARGET_RATIO: f64 = 1.1;
/// ...or above this percentage.
pub const PROTEIN_EXCESS_PERCENT: f64 = 120.0;

/// Carbs/fat percentage above which a reduction is suggested.
pub const MACRO_REDUCE_ABOVE: f64 = 110.0;

/// Calorie bands used to phrase the protein-excess warning.
pub const CALORIES_HIGH_ABOVE: f64 = 110.0;
pub const CALORIES_LOW_BELOW: f64 = 90.0;

// ─────────────────────────────────────────────────────────────────────────────
// Energy density and portion conversions
// ─────────────────────────────────────────────────────────────────────────────

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Protein in one egg (g).
pub const PROTEIN_PER_EGG: f64 = 6.0;

/// Protein per 100 g cooked chicken breast (g).
pub const PROTEIN_PER_100G_CHICKEN: f64 = 30.0;

/// Protein per 150 g firm tofu (g).
pub const PROTEIN_PER_150G_TOFU: f64 = 18.0;

/// Carbs in half a scoop of cooked rice (g).
pub const CARBS_PER_HALF_RICE_SCOOP: f64 = 20.0;

/// Almonds (g) carrying 10 g of fat.
pub const ALMONDS_PER_10G_FAT: f64 = 15.0;

/// Smallest gram amount ever suggested.
pub const MIN_SUGGESTED_GRAMS: f64 = 10.0;

/// Smallest fat gram amount ever suggested.
pub const MIN_SUGGESTED_FAT_GRAMS: f64 = 5.0;

// ─────────────────────────────────────────────────────────────────────────────
// Hydration
// ─────────────────────────────────────────────────────────────────────────────

/// Minimum water per kg of body weight (ml).
pub const WATER_ML_PER_KG: f64 = 35.0;

/// Glass size (ml).
pub const GLASS_ML: f64 = 250.0;

/// Extra water per hour of exercise or heat (ml).
pub const EXTRA_WATER_ML_PER_HOUR: u32 = 500;

// ─────────────────────────────────────────────────────────────────────────────
// Tomorrow tips
// ─────────────────────────────────────────────────────────────────────────────

/// Maximum number of tomorrow tips.
pub const MAX_TOMORROW_TIPS: usize = 4;

/// Deviation above which the worst nutrient gets a specific tip.
pub const TOMORROW_FOCUS_DEVIATION: f64 = 10.0;

/// Deviation above which a second nutrient also gets a tip.
pub const TOMORROW_SECONDARY_DEVIATION: f64 = 20.0;

/// Daily step target suggested for weight loss.
pub const STEP_TARGET: u32 = 8000;
