pub mod activity;
pub mod hydration;
pub mod nutrition;
pub mod portions;
pub mod timing;
pub mod tomorrow;

pub use activity::activity_advice;
pub use hydration::{hydration_advice, minimum_water_ml, water_glasses};
pub use nutrition::{day_progress, nutrition_advice, select_tone, Tone};
pub use timing::timing_advice;
pub use tomorrow::tomorrow_tips;

use crate::models::NutrientKind;

/// A message produced by a rule, plus the nutrients it already speaks for.
#[derive(Debug, Clone, PartialEq)]
pub struct AdviceItem {
    pub message: String,
    pub covers: Vec<NutrientKind>,
}

impl AdviceItem {
    pub fn new(message: String, covers: &[NutrientKind]) -> Self {
        Self {
            message,
            covers: covers.to_vec(),
        }
    }
}

/// One row of an ordered advice table.
pub struct AdviceRule<C> {
    pub name: &'static str,
    pub apply: fn(&C) -> Option<AdviceItem>,
}

/// Evaluate rules top to bottom, keeping every item that fires.
///
/// Callers apply their own item cap so that coverage from later rules is
/// still known when the list gets truncated.
pub fn run_rules<C>(rules: &[AdviceRule<C>], ctx: &C) -> Vec<AdviceItem> {
    rules
        .iter()
        .filter_map(|rule| {
            let item = (rule.apply)(ctx);
            if item.is_some() {
                tracing::debug!(rule = rule.name, "advice rule fired");
            }
            item
        })
        .collect()
}

/// "1 egg" / "3 eggs".
pub(crate) fn plural(count: u32, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// Capitalize the first letter.
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
