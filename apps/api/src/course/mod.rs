//! Course Outlines — three-level module/topic/objective trees generated
//! from a subject, desired learning outcomes, and a course duration.

pub mod handlers;
pub mod prompts;

use serde::{Deserialize, Serialize};

use crate::course::prompts::COURSE_OUTLINE_PROMPT_TEMPLATE;
use crate::errors::AppError;
use crate::llm_client::{LlmClient, Schema, PRO_MODEL};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseObjective {
    pub objective: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseTopic {
    pub title: String,
    pub objectives: Vec<CourseObjective>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseModule {
    pub title: String,
    pub description: String,
    pub topics: Vec<CourseTopic>,
}

/// An ordered list of modules is the whole outline.
pub type CourseOutline = Vec<CourseModule>;

fn outline_schema() -> Schema {
    Schema::array(Schema::object(vec![
        (
            "title",
            Schema::string().describe("The title of the course module."),
        ),
        (
            "description",
            Schema::string().describe("A brief description of the module content."),
        ),
        (
            "topics",
            Schema::array(Schema::object(vec![
                (
                    "title",
                    Schema::string().describe("The title of the topic within the module."),
                ),
                (
                    "objectives",
                    Schema::array(Schema::object(vec![(
                        "objective",
                        Schema::string().describe("A specific learning objective for the topic."),
                    )]))
                    .describe("A list of learning objectives for the topic."),
                ),
            ]))
            .describe("A list of topics covered in the module."),
        ),
    ]))
}

pub fn build_outline_prompt(
    subject: &str,
    learning_outcomes: &str,
    duration_weeks: u32,
) -> String {
    COURSE_OUTLINE_PROMPT_TEMPLATE
        .replace("{duration_weeks}", &duration_weeks.to_string())
        .replace("{subject}", subject)
        .replace("{learning_outcomes}", learning_outcomes)
}

/// Generates a full outline with the pro model.
pub async fn generate_course_outline(
    llm: &LlmClient,
    subject: &str,
    learning_outcomes: &str,
    duration_weeks: u32,
) -> Result<CourseOutline, AppError> {
    let prompt = build_outline_prompt(subject, learning_outcomes, duration_weeks);
    llm.generate_json::<CourseOutline>(PRO_MODEL, &prompt, &outline_schema())
        .await
        .map_err(|e| AppError::Llm(format!("Course outline generation failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_parameters_verbatim() {
        let prompt = build_outline_prompt(
            "Distributed Systems",
            "Understand consensus and replication",
            8,
        );
        assert!(prompt.contains("\"Distributed Systems\""));
        assert!(prompt.contains("Understand consensus and replication"));
        assert!(prompt.contains("8-week course"));
    }

    #[test]
    fn test_three_level_outline_deserializes() {
        let json = r#"[
            {
                "title": "Foundations",
                "description": "Core distributed-systems vocabulary.",
                "topics": [
                    {
                        "title": "Time and Ordering",
                        "objectives": [
                            {"objective": "Explain logical clocks"},
                            {"objective": "Compare vector and Lamport clocks"}
                        ]
                    }
                ]
            }
        ]"#;
        let outline: CourseOutline = serde_json::from_str(json).unwrap();
        assert_eq!(outline.len(), 1);
        assert_eq!(outline[0].topics[0].objectives.len(), 2);
        assert_eq!(
            outline[0].topics[0].objectives[1].objective,
            "Compare vector and Lamport clocks"
        );
    }

    #[test]
    fn test_outline_schema_nests_three_levels() {
        let value = serde_json::to_value(outline_schema()).unwrap();
        let module = &value["items"];
        assert_eq!(
            module["propertyOrdering"],
            serde_json::json!(["title", "description", "topics"])
        );
        let topic = &module["properties"]["topics"]["items"];
        assert_eq!(
            topic["propertyOrdering"],
            serde_json::json!(["title", "objectives"])
        );
        let objective = &topic["properties"]["objectives"]["items"];
        assert_eq!(objective["propertyOrdering"], serde_json::json!(["objective"]));
    }
}
