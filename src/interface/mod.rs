pub mod prompts;
pub mod render;

pub use prompts::{
    collect_request, match_goal, prompt_goal, prompt_intake, prompt_profile, prompt_yes_no,
};
pub use render::{display_advice_list, display_recommendation};
