use serde::{Deserialize, Serialize};

pub const DEFAULT_GREETING: &str = "Dear Hiring Manager,";
pub const DEFAULT_CLOSING: &str = "I look forward to discussing this opportunity further.";
pub const DEFAULT_SIGN_OFF: &str = "Sincerely";
pub const DEFAULT_TONE: &str = "formal";

/// Maximum number of body paragraphs kept from generated text.
pub const MAX_BODY_PARAGRAPHS: usize = 4;

/// A cover letter recovered from free-form generated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverLetterDocument {
    pub greeting: String,
    pub body: Vec<String>,
    pub closing: String,
    pub sign_off: String,
    pub candidate_name: String,
}

impl Default for CoverLetterDocument {
    fn default() -> Self {
        Self {
            greeting: DEFAULT_GREETING.to_string(),
            body: Vec::new(),
            closing: DEFAULT_CLOSING.to_string(),
            sign_off: DEFAULT_SIGN_OFF.to_string(),
            candidate_name: String::new(),
        }
    }
}

/// The job a letter is being written for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobInfo {
    pub company_name: String,
    pub job_title: String,
    #[serde(default = "default_tone")]
    pub tone: String,
    #[serde(default)]
    pub job_description: String,
}

fn default_tone() -> String {
    DEFAULT_TONE.to_string()
}
