use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{AdviceRequest, DailyRecommendation};

/// Load an advice request (actual, target, profile) from a JSON file.
pub fn load_request<P: AsRef<Path>>(path: P) -> Result<AdviceRequest> {
    let content = fs::read_to_string(path)?;
    let request: AdviceRequest = serde_json::from_str(&content)?;
    Ok(request)
}

/// Save a report as pretty-printed JSON.
pub fn save_report<P: AsRef<Path>>(path: P, report: &DailyRecommendation) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    Ok(())
}

/// Write the four nutrient assessments as CSV rows.
pub fn write_assessments_csv<P: AsRef<Path>>(path: P, report: &DailyRecommendation) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["nutrient", "status", "score", "percentage"])?;

    for (kind, a) in report.assessments.iter() {
        wtr.write_record([
            kind.name().to_string(),
            a.status.label().to_string(),
            format!("{:.2}", a.score),
            format!("{:.2}", a.percentage),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
