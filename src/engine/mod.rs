pub mod advice;
pub mod assessment;
pub mod constants;
pub mod orchestrator;
pub mod scoring;

pub use assessment::{assess_daily, assess_nutrient, deviation_score};
pub use constants::*;
pub use orchestrator::{generate_recommendation, AdviceClock};
pub use scoring::{aggregate, grade_for, ScoreSummary};
