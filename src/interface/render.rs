use crate::models::DailyRecommendation;

/// Print a numbered advice section; empty sections are skipped.
fn display_section(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }

    println!("--- {} ---", title);
    for (i, item) in items.iter().enumerate() {
        println!("{:>3}. {}", i + 1, item);
    }
    println!();
}

/// Display a daily recommendation: score, nutrient table and advice.
pub fn display_recommendation(report: &DailyRecommendation) {
    println!();
    println!("=== Daily Nutrition Report ({}) ===", report.date);
    println!();
    println!("Total score: {:.1}/100 ({})", report.total_score, report.grade);
    println!();

    let max_name_len = report
        .assessments
        .iter()
        .map(|(kind, _)| kind.name().len())
        .max()
        .unwrap_or(8);

    for (kind, a) in report.assessments.iter() {
        if a.is_assessed() {
            println!(
                "  {:<width$}  {:>6.1}%  score {:>5.2}/25  {}",
                kind.name(),
                a.percentage,
                a.score,
                a.status.label(),
                width = max_name_len
            );
        } else {
            println!(
                "  {:<width$}  (no target set)",
                kind.name(),
                width = max_name_len
            );
        }
    }
    println!();

    display_section("Nutrition", &report.nutrition_advice);
    display_section("Activity", &report.activity_advice);
    display_section("Hydration", &report.hydration_advice);
    display_section("Meal timing", &report.timing_advice);
    display_section("Tomorrow", &report.tomorrow_tips);

    println!("{}", report.summary);
    println!();
}

/// Display a bare list of advice lines under a title.
pub fn display_advice_list(title: &str, items: &[String]) {
    println!();
    display_section(title, items);
}
