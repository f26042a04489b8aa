use serde::{Deserialize, Serialize};

use crate::error::{AdvisorError, Result};
use crate::models::NutrientKind;

/// Daily macronutrient quantities.
///
/// Used both for what was actually eaten and for the recommended target;
/// the two are told apart only by position. Calories in kcal, the rest in grams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionIntake {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl NutritionIntake {
    pub fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    /// Quantity for one nutrient.
    #[inline]
    pub fn get(&self, kind: NutrientKind) -> f64 {
        match kind {
            NutrientKind::Calories => self.calories,
            NutrientKind::Protein => self.protein,
            NutrientKind::Carbs => self.carbs,
            NutrientKind::Fat => self.fat,
        }
    }

    /// Reject negative, NaN or infinite values.
    ///
    /// `label` names the record in the error message ("actual", "target").
    pub fn validate(&self, label: &str) -> Result<()> {
        for kind in NutrientKind::ALL {
            let value = self.get(kind);
            if !value.is_finite() || value < 0.0 {
                return Err(AdvisorError::InvalidArgument(format!(
                    "{} {} must be a non-negative finite number, got {}",
                    label,
                    kind.name(),
                    value
                )));
            }
        }
        Ok(())
    }
}
