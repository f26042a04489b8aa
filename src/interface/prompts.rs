use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{AdvisorError, Result};
use crate::models::{AdviceRequest, Goal, NutrientKind, NutritionIntake, UserProfile};

/// Minimum Jaro-Winkler similarity for a fuzzy goal match.
const GOAL_MATCH_THRESHOLD: f64 = 0.8;

/// Best fuzzy match for free-text goal input, if any alias is close enough.
pub fn match_goal(input: &str) -> Option<Goal> {
    if let Ok(goal) = input.parse::<Goal>() {
        return Some(goal);
    }

    let needle = input.trim().to_lowercase();
    let needle = needle.as_str();
    let mut candidates: Vec<(Goal, f64)> = Goal::ALL
        .into_iter()
        .flat_map(|goal| {
            goal.aliases()
                .iter()
                .map(move |alias| (goal, jaro_winkler(alias, needle)))
        })
        .filter(|(_, score)| *score > GOAL_MATCH_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates.first().map(|(goal, _)| *goal)
}

/// Prompt for a non-negative number.
fn prompt_number(prompt: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(format!("{}", default))
        .interact_text()?;

    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| AdvisorError::InvalidArgument(format!("Invalid number: {}", input)))?;

    if !value.is_finite() || value < 0.0 {
        return Err(AdvisorError::InvalidArgument(format!(
            "{} must be a non-negative number",
            prompt
        )));
    }

    Ok(value)
}

/// Prompt for all four nutrients of an intake record.
pub fn prompt_intake(label: &str, defaults: NutritionIntake) -> Result<NutritionIntake> {
    let mut values = [0.0; 4];
    for (slot, kind) in values.iter_mut().zip(NutrientKind::ALL) {
        *slot = prompt_number(
            &format!("{} {} ({})", label, kind, kind.unit()),
            defaults.get(kind),
        )?;
    }
    Ok(NutritionIntake::new(values[0], values[1], values[2], values[3]))
}

/// Prompt for the goal, accepting loose wording.
pub fn prompt_goal() -> Result<Goal> {
    loop {
        let input: String = Input::new()
            .with_prompt("What is your goal? (decrease / increase / healthy)")
            .default("healthy".to_string())
            .interact_text()?;

        match match_goal(&input) {
            Some(goal) if goal.name() == input.trim().to_lowercase() => return Ok(goal),
            Some(goal) => {
                let confirm = Confirm::new()
                    .with_prompt(format!("Did you mean '{}'?", goal))
                    .default(true)
                    .interact()?;
                if confirm {
                    return Ok(goal);
                }
            }
            None => {
                let names: Vec<&str> = Goal::ALL.iter().map(|g| g.name()).collect();
                let selection = Select::new()
                    .with_prompt(format!("No goal matches '{}'. Pick one", input.trim()))
                    .items(&names)
                    .default(2)
                    .interact()?;
                return Ok(Goal::ALL[selection]);
            }
        }
    }
}

/// Prompt for the user profile.
pub fn prompt_profile() -> Result<UserProfile> {
    let goal = prompt_goal()?;
    let weight = prompt_number("Body weight (kg)", 70.0)?;

    let age: u32 = Input::new()
        .with_prompt("Age (years)")
        .default(30)
        .interact_text()?;

    let activity_level: String = Input::new()
        .with_prompt("Activity level (e.g. sedentary, moderate, active)")
        .default("moderate".to_string())
        .interact_text()?;

    let profile = UserProfile::new(goal, weight, age, activity_level);
    profile.validate()?;
    Ok(profile)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect a full advice request interactively.
pub fn collect_request() -> Result<AdviceRequest> {
    println!("Enter today's actual intake.");
    let actual = prompt_intake("Eaten", NutritionIntake::default())?;

    println!();
    println!("Enter your daily targets.");
    let target = prompt_intake("Target", NutritionIntake::new(2000.0, 100.0, 250.0, 65.0))?;

    println!();
    let profile = prompt_profile()?;

    Ok(AdviceRequest {
        actual,
        target,
        profile,
    })
}
