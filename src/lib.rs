pub mod cli;
pub mod engine;
pub mod error;
pub mod interface;
pub mod models;
pub mod storage;

pub use engine::{generate_recommendation, AdviceClock};
pub use error::{AdvisorError, Result};
pub use models::{DailyRecommendation, Goal, NutritionIntake, UserProfile};
