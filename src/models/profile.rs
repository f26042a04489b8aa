use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AdvisorError, Result};

/// What the user is trying to do with their body weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Lose weight.
    Decrease,
    /// Gain weight / muscle.
    Increase,
    /// Maintain a healthy weight.
    Healthy,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::Decrease, Goal::Increase, Goal::Healthy];

    /// Canonical lowercase name, as used in JSON.
    pub fn name(self) -> &'static str {
        match self {
            Goal::Decrease => "decrease",
            Goal::Increase => "increase",
            Goal::Healthy => "healthy",
        }
    }

    /// Everyday words users type for each goal.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Goal::Decrease => &["decrease", "lose", "cut", "weight loss", "diet"],
            Goal::Increase => &["increase", "gain", "bulk", "muscle gain"],
            Goal::Healthy => &["healthy", "maintain", "maintenance", "balanced"],
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Goal {
    type Err = AdvisorError;

    /// Case-insensitive match against names and aliases.
    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_lowercase();
        Goal::ALL
            .into_iter()
            .find(|goal| goal.aliases().contains(&needle.as_str()))
            .ok_or_else(|| AdvisorError::InvalidArgument(format!("Unknown goal: {}", s)))
    }
}

/// Coarse user profile.
///
/// Only the goal and weight feed the numbers; age is validated and carried,
/// activity level is free text supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub goal: Goal,

    /// Body weight in kg.
    pub weight: f64,

    /// Age in years.
    pub age: u32,

    #[serde(default)]
    pub activity_level: String,
}

impl UserProfile {
    pub fn new(goal: Goal, weight: f64, age: u32, activity_level: impl Into<String>) -> Self {
        Self {
            goal,
            weight,
            age,
            activity_level: activity_level.into(),
        }
    }

    /// Weight must be positive and finite, age positive.
    pub fn validate(&self) -> Result<()> {
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(AdvisorError::InvalidArgument(format!(
                "profile weight must be a positive number, got {}",
                self.weight
            )));
        }
        if self.age == 0 {
            return Err(AdvisorError::InvalidArgument(
                "profile age must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
