//! Quiz Generation — multiple-choice quizzes on a caller-supplied topic,
//! plus local scoring of submitted answers.

pub mod handlers;
pub mod prompts;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::{LlmClient, Schema, FLASH_MODEL};
use crate::quiz::prompts::QUIZ_PROMPT_TEMPLATE;

pub const OPTIONS_PER_QUESTION: usize = 4;

/// One multiple-choice question as declared to the model:
/// four options, one of which is the correct answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

fn quiz_schema() -> Schema {
    Schema::array(Schema::object(vec![
        ("question", Schema::string().describe("The quiz question.")),
        (
            "options",
            Schema::array(Schema::string())
                .describe("An array of exactly 4 possible answer options."),
        ),
        (
            "correctAnswer",
            Schema::string().describe("The correct answer, must be one of the options."),
        ),
    ]))
}

pub fn build_quiz_prompt(topic: &str, num_questions: u32) -> String {
    QUIZ_PROMPT_TEMPLATE
        .replace("{num_questions}", &num_questions.to_string())
        .replace("{topic}", topic)
}

/// Generates `num_questions` questions about `topic` with the flash model.
pub async fn generate_quiz(
    llm: &LlmClient,
    topic: &str,
    num_questions: u32,
) -> Result<Vec<QuizQuestion>, AppError> {
    let prompt = build_quiz_prompt(topic, num_questions);
    let questions: Vec<QuizQuestion> = llm
        .generate_json(FLASH_MODEL, &prompt, &quiz_schema())
        .await
        .map_err(|e| AppError::Llm(format!("Quiz generation failed: {e}")))?;

    validate_quiz(&questions)?;
    Ok(questions)
}

/// Checks the declared invariants the model is asked to uphold: exactly 4
/// options per question and `correct_answer` among them. Violations are
/// generation failures, same as an unparseable response.
fn validate_quiz(questions: &[QuizQuestion]) -> Result<(), AppError> {
    for (index, question) in questions.iter().enumerate() {
        if question.options.len() != OPTIONS_PER_QUESTION {
            return Err(AppError::Llm(format!(
                "Quiz generation failed: question {} has {} options (expected {})",
                index + 1,
                question.options.len(),
                OPTIONS_PER_QUESTION
            )));
        }
        if !question.options.contains(&question.correct_answer) {
            return Err(AppError::Llm(format!(
                "Quiz generation failed: question {} has a correct answer that is not among its options",
                index + 1
            )));
        }
    }
    Ok(())
}

/// Counts the positions where the submitted answer string equals the
/// question's declared correct answer. Unanswered positions never count.
pub fn score_quiz(questions: &[QuizQuestion], answers: &HashMap<usize, String>) -> u32 {
    questions
        .iter()
        .enumerate()
        .filter(|(index, question)| {
            answers
                .get(index)
                .is_some_and(|answer| *answer == question.correct_answer)
        })
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(text: &str, correct: &str) -> QuizQuestion {
        QuizQuestion {
            question: text.to_string(),
            options: vec![
                correct.to_string(),
                "B".to_string(),
                "C".to_string(),
                "D".to_string(),
            ],
            correct_answer: correct.to_string(),
        }
    }

    #[test]
    fn test_prompt_embeds_topic_and_count_verbatim() {
        let prompt = build_quiz_prompt("Photosynthesis", 5);
        assert!(prompt.contains("Photosynthesis"));
        assert!(prompt.contains('5'));
        assert!(prompt.contains("exactly 4 options"));
    }

    #[test]
    fn test_quiz_question_wire_names_are_camel_case() {
        let json = r#"{
            "question": "What do plants absorb?",
            "options": ["CO2", "Gold", "Plastic", "Iron"],
            "correctAnswer": "CO2"
        }"#;
        let parsed: QuizQuestion = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.correct_answer, "CO2");

        let round_trip = serde_json::to_value(&parsed).unwrap();
        assert!(round_trip.get("correctAnswer").is_some());
        assert!(round_trip.get("correct_answer").is_none());
    }

    #[test]
    fn test_validate_rejects_answer_outside_options() {
        let mut bad = question("Q1", "A");
        bad.correct_answer = "E".to_string();
        let result = validate_quiz(&[bad]);
        assert!(matches!(result, Err(AppError::Llm(_))));
    }

    #[test]
    fn test_validate_rejects_wrong_option_count() {
        let mut bad = question("Q1", "A");
        bad.options.pop();
        let result = validate_quiz(&[bad]);
        assert!(matches!(result, Err(AppError::Llm(_))));
    }

    #[test]
    fn test_score_counts_exact_matches() {
        let questions = vec![
            question("Q1", "A"),
            question("Q2", "B-right"),
            question("Q3", "C-right"),
            question("Q4", "D-right"),
            question("Q5", "E-right"),
        ];
        let mut answers = HashMap::new();
        answers.insert(0, "A".to_string());
        answers.insert(1, "B-right".to_string());
        answers.insert(2, "nope".to_string());
        answers.insert(3, "D-right".to_string());
        answers.insert(4, "wrong".to_string());

        assert_eq!(score_quiz(&questions, &answers), 3);
    }

    #[test]
    fn test_score_ignores_unanswered_positions() {
        let questions = vec![question("Q1", "A"), question("Q2", "B")];
        let mut answers = HashMap::new();
        answers.insert(0, "A".to_string());

        assert_eq!(score_quiz(&questions, &answers), 1);
    }

    #[test]
    fn test_score_empty_answer_map_is_zero() {
        let questions = vec![question("Q1", "A")];
        assert_eq!(score_quiz(&questions, &HashMap::new()), 0);
    }
}
