use crate::domain::{AttendanceRecord, AttendanceStatus, ClassSection, Student};

pub const MISSING_KEY_MESSAGE: &str =
    "API Key is missing. Please configure the environment to use AI insights.";
pub const UNAVAILABLE_MESSAGE: &str =
    "Unable to generate AI insights at this time. Please try again later.";
pub const EMPTY_RESPONSE_MESSAGE: &str = "No analysis could be generated.";
pub const IN_PROGRESS_MESSAGE: &str = "An analysis is already being generated.";

/// The opaque text-generation service behind the insights page. The real
/// client (and its API key handling) lives with the shell; this daemon only
/// knows the seam.
pub trait AdvisoryModel {
    fn generate(&self, prompt: &str) -> anyhow::Result<String>;
}

/// Outcome of a generation request. `pending` is true only for the
/// coalesced duplicate-trigger reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightOutcome {
    pub text: String,
    pub pending: bool,
}

/// Wraps the advisory model with the portal's degradation rules: a missing
/// model yields the fixed configuration message, a model failure yields the
/// generic retry message (detail goes to stderr only), and a duplicate
/// trigger while a generation is outstanding is coalesced. No path
/// surfaces a raw fault.
pub struct InsightsEngine {
    model: Option<Box<dyn AdvisoryModel>>,
    pending: bool,
}

impl InsightsEngine {
    pub fn new(model: Option<Box<dyn AdvisoryModel>>) -> InsightsEngine {
        InsightsEngine {
            model,
            pending: false,
        }
    }

    pub fn generate(&mut self, prompt: &str) -> InsightOutcome {
        let Some(model) = self.model.as_ref() else {
            return InsightOutcome {
                text: MISSING_KEY_MESSAGE.to_string(),
                pending: false,
            };
        };
        if self.pending {
            return InsightOutcome {
                text: IN_PROGRESS_MESSAGE.to_string(),
                pending: true,
            };
        }
        self.pending = true;
        let text = match model.generate(prompt) {
            Ok(text) if text.trim().is_empty() => EMPTY_RESPONSE_MESSAGE.to_string(),
            Ok(text) => text,
            Err(e) => {
                eprintln!("attendanced: advisory model error: {e:?}");
                UNAVAILABLE_MESSAGE.to_string()
            }
        };
        self.pending = false;
        InsightOutcome {
            text,
            pending: false,
        }
    }
}

/// The plain-text summary handed to the model, built from the full ledger
/// plus roster counts.
pub fn build_analysis_prompt(
    records: &[AttendanceRecord],
    students: &[Student],
    classes: &[ClassSection],
) -> String {
    let total = records.len();
    let present = count_status(records, AttendanceStatus::Present);
    let absent = count_status(records, AttendanceStatus::Absent);
    let late = count_status(records, AttendanceStatus::Late);
    let rate = if total > 0 {
        format!("{:.1}", (present as f64 / total as f64) * 100.0)
    } else {
        "0".to_string()
    };

    format!(
        "You are an AI assistant for the Government Commerce College Charsadda attendance system.\n\
         Analyze the following attendance data summary and provide brief, actionable insights for the administration.\n\
         \n\
         Data Summary:\n\
         - Total Attendance Records: {total}\n\
         - Overall Attendance Rate: {rate}%\n\
         - Present: {present}\n\
         - Absent: {absent}\n\
         - Late: {late}\n\
         - Total Classes Tracked: {classes}\n\
         - Total Students Tracked: {students}\n\
         \n\
         Please provide:\n\
         1. A quick sentiment analysis of the attendance.\n\
         2. Two key recommendations to improve student punctuality or attendance based on general educational best practices.\n\
         \n\
         Keep the response concise (under 150 words) and professional.",
        classes = classes.len(),
        students = students.len(),
    )
}

fn count_status(records: &[AttendanceRecord], status: AttendanceStatus) -> usize {
    records.iter().filter(|r| r.status == status).count()
}
