//! Resume Analysis — matches a resume against a job description for a
//! target role: overall analysis, suggestions, matched and missing skills.

pub mod handlers;
pub mod prompts;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::{LlmClient, Schema, PRO_MODEL};
use crate::resume::prompts::RESUME_ANALYSIS_PROMPT_TEMPLATE;

/// Structured output of a resume-vs-JD analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    pub analysis: String,
    pub suggestions: Vec<String>,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

fn analysis_schema() -> Schema {
    Schema::object(vec![
        (
            "analysis",
            Schema::string().describe("Overall analysis of the resume against the job description."),
        ),
        (
            "suggestions",
            Schema::array(Schema::string())
                .describe("Specific suggestions for improving the resume."),
        ),
        (
            "matchedSkills",
            Schema::array(Schema::string())
                .describe("Skills from the resume that match the job description."),
        ),
        (
            "missingSkills",
            Schema::array(Schema::string())
                .describe("Key skills from the job description missing from the resume."),
        ),
    ])
}

pub fn build_analysis_prompt(resume_text: &str, job_description: &str, focus_role: &str) -> String {
    RESUME_ANALYSIS_PROMPT_TEMPLATE
        .replace("{focus_role}", focus_role)
        .replace("{resume_text}", resume_text)
        .replace("{job_description}", job_description)
}

/// Analyzes `resume_text` against `job_description` for a `focus_role` using
/// the pro model.
pub async fn analyze_resume(
    llm: &LlmClient,
    resume_text: &str,
    job_description: &str,
    focus_role: &str,
) -> Result<ResumeAnalysis, AppError> {
    let prompt = build_analysis_prompt(resume_text, job_description, focus_role);
    llm.generate_json::<ResumeAnalysis>(PRO_MODEL, &prompt, &analysis_schema())
        .await
        .map_err(|e| AppError::Llm(format!("Resume analysis failed: {e}")))
}
