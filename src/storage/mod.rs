mod persistence;

pub use persistence::{load_request, save_report, write_assessments_csv};
