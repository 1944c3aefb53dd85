// LLM prompt constants for the Course module.

/// Course outline prompt template.
/// Replace `{duration_weeks}`, `{subject}`, and `{learning_outcomes}` before sending.
pub const COURSE_OUTLINE_PROMPT_TEMPLATE: &str = r#"Generate a detailed course outline for a {duration_weeks}-week course on "{subject}".
The course should aim to achieve the following learning outcomes: {learning_outcomes}.
Organize the outline into modules, with each module having a title, a description, and a list of topics.
Each topic should have a title and a list of specific learning objectives."#;
