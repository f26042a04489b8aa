//! Gram amounts to everyday portions. Every result is a whole number and
//! never below the suggested minimum.

use crate::engine::constants::*;

/// Round a gram amount, flooring at `min`.
#[inline]
pub fn whole_grams(grams: f64, min: f64) -> u32 {
    grams.round().max(min) as u32
}

/// Eggs carrying roughly `protein_g` of protein, at least one.
pub fn eggs_for_protein(protein_g: f64) -> u32 {
    (protein_g / PROTEIN_PER_EGG).round().max(1.0) as u32
}

/// Grams of cooked chicken breast carrying `protein_g` of protein.
pub fn chicken_grams_for_protein(protein_g: f64) -> u32 {
    whole_grams(protein_g / PROTEIN_PER_100G_CHICKEN * 100.0, MIN_SUGGESTED_GRAMS)
}

/// Grams of firm tofu carrying `protein_g` of protein.
pub fn tofu_grams_for_protein(protein_g: f64) -> u32 {
    whole_grams(protein_g / PROTEIN_PER_150G_TOFU * 150.0, MIN_SUGGESTED_GRAMS)
}

/// Half rice scoops holding `carbs_g` of carbs, at least one.
pub fn half_rice_scoops_for_carbs(carbs_g: f64) -> u32 {
    (carbs_g / CARBS_PER_HALF_RICE_SCOOP).round().max(1.0) as u32
}

/// Grams of almonds holding `fat_g` of fat.
pub fn almond_grams_for_fat(fat_g: f64) -> u32 {
    whole_grams(fat_g / 10.0 * ALMONDS_PER_10G_FAT, MIN_SUGGESTED_GRAMS)
}
