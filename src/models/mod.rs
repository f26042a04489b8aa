pub mod assessment;
pub mod intake;
pub mod profile;
pub mod recommendation;

pub use assessment::{DailyAssessment, NutrientAssessment, NutrientKind, NutrientStatus};
pub use intake::NutritionIntake;
pub use profile::{Goal, UserProfile};
pub use recommendation::{AdviceRequest, DailyRecommendation, Grade};
