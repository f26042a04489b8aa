use tracing::debug;

use crate::engine::advice::portions::*;
use crate::engine::advice::{capitalize, plural, run_rules, AdviceItem, AdviceRule};
use crate::engine::constants::*;
use crate::models::{
    DailyAssessment, Goal, NutrientKind, NutrientStatus, NutritionIntake, UserProfile,
};

/// How urgent and how long the nutrition advice should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Early, light day: few gentle items.
    Mild,
    Standard,
    /// Late day or something grossly off.
    Strong,
}

impl Tone {
    pub fn max_items(self) -> usize {
        match self {
            Tone::Mild => 2,
            Tone::Standard => 3,
            Tone::Strong => 4,
        }
    }

    /// Share of the protein gap to close right now.
    pub fn protein_fraction(self) -> f64 {
        match self {
            Tone::Mild => 0.4,
            Tone::Standard => 0.5,
            Tone::Strong => 0.7,
        }
    }

    /// Suggested snack as (kcal, grams of protein).
    pub fn snack(self) -> (u32, u32) {
        match self {
            Tone::Mild => (150, 10),
            Tone::Standard => (200, 15),
            Tone::Strong => (250, 20),
        }
    }

    fn lead(self) -> &'static str {
        match self {
            Tone::Mild => "Early in the day: ",
            Tone::Standard => "",
            Tone::Strong => "Priority: ",
        }
    }
}

/// Estimate how far through the eating day the user is, in [0, 1].
///
/// Blends clock time inside the active window with the share of the calorie
/// target already eaten, taking whichever weighted estimate is further along.
pub fn day_progress(hour: u32, actual_calories: f64, target_calories: f64) -> f64 {
    let window = (DAY_END_HOUR - DAY_START_HOUR) as f64;
    let clock = ((hour as f64 - DAY_START_HOUR as f64) / window).clamp(0.0, 1.0);
    let eaten = if target_calories > 0.0 {
        actual_calories / target_calories
    } else {
        0.0
    };

    (CLOCK_PROGRESS_WEIGHT * clock)
        .max(CALORIE_PROGRESS_WEIGHT * eaten)
        .clamp(0.0, 1.0)
}

/// Pick the tone from day progress and how far off the nutrients are.
pub fn select_tone(progress: f64, assessments: &DailyAssessment) -> Tone {
    let pct = |kind| percentage_of(assessments, kind);

    let grossly_off = pct(NutrientKind::Calories).is_some_and(|p| p > GROSS_CALORIES_ABOVE)
        || pct(NutrientKind::Protein).is_some_and(|p| p < GROSS_PROTEIN_BELOW)
        || pct(NutrientKind::Carbs).is_some_and(|p| p > GROSS_MACRO_ABOVE)
        || pct(NutrientKind::Fat).is_some_and(|p| p > GROSS_MACRO_ABOVE);

    if progress > STRONG_TONE_PROGRESS || grossly_off {
        Tone::Strong
    } else if progress < MILD_TONE_PROGRESS
        && pct(NutrientKind::Calories).is_none_or(|p| p < MILD_TONE_CALORIES)
    {
        Tone::Mild
    } else {
        Tone::Standard
    }
}

/// Percentage of target, or None when the nutrient had no usable target.
fn percentage_of(assessments: &DailyAssessment, kind: NutrientKind) -> Option<f64> {
    let a = assessments.get(kind);
    a.is_assessed().then_some(a.percentage)
}

/// Everything the nutrition rules look at.
pub struct NutritionContext<'a> {
    pub assessments: &'a DailyAssessment,
    pub actual: &'a NutritionIntake,
    pub target: &'a NutritionIntake,
    pub profile: &'a UserProfile,
    pub tone: Tone,
}

impl NutritionContext<'_> {
    fn pct(&self, kind: NutrientKind) -> Option<f64> {
        percentage_of(self.assessments, kind)
    }

    /// Grams (or kcal) above target, never negative.
    fn surplus(&self, kind: NutrientKind) -> f64 {
        (self.actual.get(kind) - self.target.get(kind)).max(0.0)
    }
}

fn kcal_per_gram(kind: NutrientKind) -> f64 {
    match kind {
        NutrientKind::Fat => KCAL_PER_G_FAT,
        NutrientKind::Carbs => KCAL_PER_G_CARBS,
        _ => KCAL_PER_G_PROTEIN,
    }
}

fn min_grams(kind: NutrientKind) -> f64 {
    match kind {
        NutrientKind::Fat => MIN_SUGGESTED_FAT_GRAMS,
        _ => MIN_SUGGESTED_GRAMS,
    }
}

/// Whichever of carbs and fat sits further above its target.
///
/// Only macros with a usable target are candidates; None when neither has one.
fn more_over_target(ctx: &NutritionContext) -> Option<NutrientKind> {
    match (ctx.pct(NutrientKind::Carbs), ctx.pct(NutrientKind::Fat)) {
        (Some(carbs), Some(fat)) if fat > carbs => Some(NutrientKind::Fat),
        (Some(_), _) => Some(NutrientKind::Carbs),
        (None, Some(_)) => Some(NutrientKind::Fat),
        (None, None) => None,
    }
}

/// Close part of the protein gap, by adding food or by a same-calorie swap.
fn protein_topup(ctx: &NutritionContext) -> Option<AdviceItem> {
    let protein_pct = ctx.pct(NutrientKind::Protein)?;
    if protein_pct >= PROTEIN_TOPUP_BELOW {
        return None;
    }

    let gap = ctx.target.protein - ctx.actual.protein;
    let add = whole_grams(gap * ctx.tone.protein_fraction(), MIN_SUGGESTED_GRAMS);
    let add_g = add as f64;
    let calories_pct = ctx.pct(NutrientKind::Calories).unwrap_or(0.0);
    let swap_from = if calories_pct > CALORIES_SWAP_ABOVE {
        more_over_target(ctx)
    } else {
        None
    };

    let Some(reduce_kind) = swap_from else {
        let mut foods = vec![
            plural(eggs_for_protein(add_g), "egg", "eggs"),
            format!("{} g of cooked chicken breast", chicken_grams_for_protein(add_g)),
        ];
        if ctx.tone == Tone::Strong {
            foods.push(format!("{} g of firm tofu", tofu_grams_for_protein(add_g)));
        }
        let message = format!(
            "{}Protein is {:.0} g short of target. Add about {} g at your next meal, e.g. {}.",
            ctx.tone.lead(),
            gap.round(),
            add,
            foods.join(" or ")
        );
        return Some(AdviceItem::new(message, &[NutrientKind::Protein]));
    };

    let swap_kcal = add_g * KCAL_PER_G_PROTEIN;
    let reduce = whole_grams(swap_kcal / kcal_per_gram(reduce_kind), min_grams(reduce_kind));
    let message = format!(
        "{}Calories are already at {:.0}% of target, so swap rather than add: cut about {} g of {} \
         ({:.0} kcal) and add {} g of protein instead, e.g. {} g of cooked chicken breast.",
        ctx.tone.lead(),
        calories_pct,
        reduce,
        reduce_kind.name(),
        swap_kcal,
        add,
        chicken_grams_for_protein(add_g)
    );
    Some(AdviceItem::new(
        message,
        &[NutrientKind::Protein, NutrientKind::Calories, reduce_kind],
    ))
}

/// Calories clearly over with protein still short: trade carbs or fat for protein.
fn high_calorie_swap(ctx: &NutritionContext) -> Option<AdviceItem> {
    let calories_pct = ctx.pct(NutrientKind::Calories)?;
    let protein_pct = ctx.pct(NutrientKind::Protein)?;
    if calories_pct <= SECONDARY_SWAP_CALORIES_ABOVE || protein_pct >= SECONDARY_SWAP_PROTEIN_BELOW
    {
        return None;
    }

    let deficit = ctx.target.protein - ctx.actual.protein;
    let surplus_kcal = |kind| ctx.pct(kind).map(|_| ctx.surplus(kind) * kcal_per_gram(kind));

    // Macros without a target cannot be traded away
    let (reduce_kind, surplus_kcal) = match (
        surplus_kcal(NutrientKind::Carbs),
        surplus_kcal(NutrientKind::Fat),
    ) {
        (Some(carbs), Some(fat)) if fat > carbs => (NutrientKind::Fat, fat),
        (Some(carbs), _) => (NutrientKind::Carbs, carbs),
        (None, Some(fat)) => (NutrientKind::Fat, fat),
        (None, None) => return None,
    };

    let mut swap_kcal = deficit * KCAL_PER_G_PROTEIN;
    if surplus_kcal > 0.0 {
        swap_kcal = swap_kcal.min(surplus_kcal);
    }

    let reduce = whole_grams(swap_kcal / kcal_per_gram(reduce_kind), min_grams(reduce_kind));
    let add = whole_grams(swap_kcal / KCAL_PER_G_PROTEIN, MIN_SUGGESTED_GRAMS);
    let message = format!(
        "Same-calorie swap: replace about {} g of {} with {} g of protein (around {:.0} kcal either \
         way) to fix the protein gap without adding energy.",
        reduce,
        reduce_kind.name(),
        add,
        swap_kcal
    );
    Some(AdviceItem::new(
        message,
        &[NutrientKind::Calories, NutrientKind::Protein, reduce_kind],
    ))
}

/// Low calories and low protein: one protein-dense snack.
fn protein_snack(ctx: &NutritionContext) -> Option<AdviceItem> {
    let calories_pct = ctx.pct(NutrientKind::Calories)?;
    let protein_pct = ctx.pct(NutrientKind::Protein)?;
    if calories_pct >= SNACK_CALORIES_BELOW || protein_pct >= SNACK_PROTEIN_BELOW {
        return None;
    }

    let (kcal, protein) = ctx.tone.snack();
    let message = format!(
        "{}Add a protein-rich snack of about {} kcal (~{} g protein), such as Greek yogurt with a \
         few nuts or a boiled egg with whole-grain toast.",
        ctx.tone.lead(),
        kcal,
        protein
    );
    Some(AdviceItem::new(
        message,
        &[NutrientKind::Calories, NutrientKind::Protein],
    ))
}

/// Warn about protein far above need; otherwise a distribution tip.
fn protein_ceiling(ctx: &NutritionContext) -> Option<AdviceItem> {
    let protein_pct = ctx.pct(NutrientKind::Protein)?;

    let per_kg = if ctx.profile.goal == Goal::Increase {
        PROTEIN_CEILING_PER_KG_GAIN
    } else {
        PROTEIN_CEILING_PER_KG
    };
    let ceiling = per_kg * ctx.profile.weight;
    let limit = (PROTEIN_EXCESS_TARGET_RATIO * ctx.target.protein).max(ceiling);
    let actual = ctx.actual.protein;

    if actual <= limit && protein_pct <= PROTEIN_EXCESS_PERCENT {
        let per_meal = whole_grams(ctx.target.protein / 3.0, MIN_SUGGESTED_GRAMS);
        let message = format!(
            "Spread protein evenly across meals, about {} g each over three meals, rather than \
             saving it for dinner.",
            per_meal
        );
        return Some(AdviceItem::new(message, &[NutrientKind::Protein]));
    }

    let calories_pct = ctx.pct(NutrientKind::Calories);
    let message = match calories_pct {
        Some(p) if p > CALORIES_HIGH_ABOVE => format!(
            "Protein is {:.0} g, above the {:.0} g ceiling for your weight, and calories are high \
             too: trim protein-heavy portions first.",
            actual, ceiling
        ),
        Some(p) if p < CALORIES_LOW_BELOW => format!(
            "Protein is {:.0} g, above the {:.0} g ceiling for your weight, while calories are \
             low: shift some of it to whole grains or healthy fats.",
            actual, ceiling
        ),
        _ => format!(
            "Protein is {:.0} g, above the {:.0} g ceiling for your weight: swap part of the \
             meat for vegetables to keep calories balanced.",
            actual, ceiling
        ),
    };
    Some(AdviceItem::new(message, &[NutrientKind::Protein]))
}

/// Carbs over target: fewer rice scoops, more vegetables.
fn carb_reduction(ctx: &NutritionContext) -> Option<AdviceItem> {
    let carbs_pct = ctx.pct(NutrientKind::Carbs)?;
    if carbs_pct <= MACRO_REDUCE_ABOVE {
        return None;
    }

    let over = ctx.surplus(NutrientKind::Carbs);
    let scoops = half_rice_scoops_for_carbs(over);
    let message = format!(
        "{}Carbs are {:.0} g over target: skip about {} of rice at the next meal and fill the \
         space with vegetables.",
        ctx.tone.lead(),
        over.round(),
        plural(scoops, "half-scoop", "half-scoops")
    );
    Some(AdviceItem::new(message, &[NutrientKind::Carbs]))
}

/// Fat over target: smaller fatty portions, lighter cooking.
fn fat_reduction(ctx: &NutritionContext) -> Option<AdviceItem> {
    let fat_pct = ctx.pct(NutrientKind::Fat)?;
    if fat_pct <= MACRO_REDUCE_ABOVE {
        return None;
    }

    let over = ctx.surplus(NutrientKind::Fat);
    let message = format!(
        "{}Fat is {:.0} g over target (about {} g of almonds' worth): grill or steam instead of \
         frying and go easy on dressings.",
        ctx.tone.lead(),
        over.round(),
        almond_grams_for_fat(over)
    );
    Some(AdviceItem::new(message, &[NutrientKind::Fat]))
}

/// Quantity rules, highest priority first.
fn nutrition_rules<'a>() -> [AdviceRule<NutritionContext<'a>>; 6] {
    [
        AdviceRule {
            name: "protein_topup",
            apply: protein_topup,
        },
        AdviceRule {
            name: "high_calorie_swap",
            apply: high_calorie_swap,
        },
        AdviceRule {
            name: "protein_snack",
            apply: protein_snack,
        },
        AdviceRule {
            name: "protein_ceiling",
            apply: protein_ceiling,
        },
        AdviceRule {
            name: "carb_reduction",
            apply: carb_reduction,
        },
        AdviceRule {
            name: "fat_reduction",
            apply: fat_reduction,
        },
    ]
}

fn increase_examples(kind: NutrientKind) -> &'static str {
    match kind {
        NutrientKind::Calories => "a balanced meal",
        NutrientKind::Protein => "lean protein",
        NutrientKind::Carbs => "whole grains or fruit",
        NutrientKind::Fat => "healthy fats like nuts or olive oil",
    }
}

fn decrease_examples(kind: NutrientKind) -> &'static str {
    match kind {
        NutrientKind::Calories => "snacks",
        NutrientKind::Protein => "protein-heavy portions",
        NutrientKind::Carbs => "sweets and refined starches",
        NutrientKind::Fat => "fried and fatty foods",
    }
}

/// Status-based one-liner for a nutrient no quantity rule spoke for.
fn status_line(kind: NutrientKind, daily: &DailyAssessment) -> String {
    let a = daily.get(kind);
    let name = capitalize(kind.name());
    let verb = match kind {
        NutrientKind::Calories | NutrientKind::Carbs => "are",
        _ => "is",
    };

    if !a.is_assessed() {
        return format!("No {} target is set, so it could not be assessed.", kind);
    }

    match a.status {
        NutrientStatus::Excellent => format!(
            "{} {} right on target ({:.0}%). Keep it up.",
            name, verb, a.percentage
        ),
        NutrientStatus::Good => format!("{} {} close to target ({:.0}%).", name, verb, a.percentage),
        NutrientStatus::NeedMore | NutrientStatus::Insufficient => format!(
            "{} {} low at {:.0}% of target; include a bit more {} in your next meal.",
            name,
            verb,
            a.percentage,
            increase_examples(kind)
        ),
        NutrientStatus::Excessive => format!(
            "{} {} high at {:.0}% of target; cut back on {} for the rest of the day.",
            name,
            verb,
            a.percentage,
            decrease_examples(kind)
        ),
        NutrientStatus::NeedsAdjustment if a.percentage > 100.0 => format!(
            "{} {} at {:.0}% of target; keep the remaining meals light.",
            name, verb, a.percentage
        ),
        NutrientStatus::NeedsAdjustment => format!(
            "{} {} at {:.0}% of target; make sure to eat regular, balanced meals.",
            name, verb, a.percentage
        ),
    }
}

/// Quantity-aware nutrition advice.
///
/// Rules run in fixed priority order, then every nutrient none of them
/// covered gets a status line; the list is cut at the tone's item cap.
pub fn nutrition_advice(
    assessments: &DailyAssessment,
    actual: &NutritionIntake,
    target: &NutritionIntake,
    profile: &UserProfile,
    hour: u32,
) -> Vec<String> {
    let progress = day_progress(hour, actual.calories, target.calories);
    let tone = select_tone(progress, assessments);
    debug!(progress, ?tone, "nutrition advice tone");

    let ctx = NutritionContext {
        assessments,
        actual,
        target,
        profile,
        tone,
    };

    let items = run_rules(&nutrition_rules(), &ctx);
    let covered: Vec<NutrientKind> = items.iter().flat_map(|i| i.covers.clone()).collect();

    let mut advice: Vec<String> = items.into_iter().map(|i| i.message).collect();
    advice.extend(
        NutrientKind::ALL
            .into_iter()
            .filter(|kind| !covered.contains(kind))
            .map(|kind| status_line(kind, assessments)),
    );

    advice.truncate(tone.max_items());
    advice
}
