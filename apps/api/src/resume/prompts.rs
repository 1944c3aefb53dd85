// LLM prompt constants for the Resume module.

/// Resume analysis prompt template.
/// Replace `{focus_role}`, `{resume_text}`, and `{job_description}` before sending.
pub const RESUME_ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze the following resume for a "{focus_role}" role based on the provided job description.

Resume:
{resume_text}

Job Description:
{job_description}

Provide an overall analysis, specific suggestions for improvement, a list of skills matched, and a list of skills missing from the resume based on the job description."#;
