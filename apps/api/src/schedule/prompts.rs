// LLM prompt constants for the Schedule module.

/// Document-based schedule prompt template.
/// Replace `{duration_weeks}`, `{start_date}`, and `{document_text}` before sending.
pub const FROM_DOCUMENT_PROMPT_TEMPLATE: &str = r#"Based on the following document content, generate a detailed {duration_weeks}-week study schedule starting from {start_date}.
For each day, provide a topic and specific activities. Focus on key concepts and learning objectives from the document.

Document Content:
{document_text}"#;

/// Topic-based schedule prompt template.
/// Replace `{duration_weeks}`, `{difficulty_level}`, `{learning_topic}`, and `{start_date}`.
pub const BY_TOPIC_PROMPT_TEMPLATE: &str = r#"Generate a detailed {duration_weeks}-week study schedule for a {difficulty_level} level learner on the topic of "{learning_topic}".
The schedule should start from {start_date} and include a topic and specific activities for each day."#;
