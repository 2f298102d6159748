use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;

pub const RESUME_PARSE_SYSTEM: &str = "You are an expert resume parser. \
    Return only valid JSON structured according to the provided keys.";

/// Top-level keys the model is asked to use when they apply.
pub const RESUME_KEYS: [&str; 4] = ["Education", "Experience", "Skills", "Certifications"];

/// Builds the user prompt for a résumé extraction call.
pub fn build_resume_prompt(resume_text: &str) -> String {
    let keys = RESUME_KEYS
        .iter()
        .map(|k| format!("\"{k}\""))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Please extract and structure the following resume text into JSON.\n\
         Use these keys if applicable: {keys}.\n\
         {JSON_ONLY_INSTRUCTION} Resume text: {resume_text}"
    )
}
