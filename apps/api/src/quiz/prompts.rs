// LLM prompt constants for the Quiz module.

/// Quiz generation prompt template.
/// Replace `{num_questions}` and `{topic}` before sending.
pub const QUIZ_PROMPT_TEMPLATE: &str = "Generate {num_questions} multiple-choice quiz questions \
    about \"{topic}\". For each question, provide the question text, exactly 4 options, \
    and the single correct answer.";
