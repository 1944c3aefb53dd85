//! Study Schedules — generated from a document or a topic/difficulty pair,
//! or assembled from manual entries. Every response is sorted ascending by
//! date regardless of generation or insertion order.

pub mod handlers;
pub mod prompts;

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::{LlmClient, Schema, PRO_MODEL};
use crate::schedule::prompts::{BY_TOPIC_PROMPT_TEMPLATE, FROM_DOCUMENT_PROMPT_TEMPLATE};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One scheduled study day. `date` is a string on the wire; events whose
/// dates fail to parse still sort deterministically (before real dates,
/// then lexicographically).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledEvent {
    pub date: String,
    pub topic: String,
    pub activities: Vec<String>,
}

/// Learner level embedded in the by-topic prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DifficultyLevel::Beginner => "Beginner",
            DifficultyLevel::Intermediate => "Intermediate",
            DifficultyLevel::Advanced => "Advanced",
        };
        f.write_str(name)
    }
}

/// A manually entered schedule row: one activity per entry, grouped into an
/// event on assembly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManualEntry {
    pub date: String,
    pub topic: String,
    pub activity: String,
}

fn schedule_schema() -> Schema {
    Schema::array(Schema::object(vec![
        (
            "date",
            Schema::string().describe("The date of the scheduled event in YYYY-MM-DD format."),
        ),
        (
            "topic",
            Schema::string().describe("The main topic for the day."),
        ),
        (
            "activities",
            Schema::array(Schema::string())
                .describe("A list of specific learning activities for the day."),
        ),
    ]))
}

pub fn build_from_document_prompt(
    document_text: &str,
    start_date: &str,
    duration_weeks: u32,
) -> String {
    FROM_DOCUMENT_PROMPT_TEMPLATE
        .replace("{duration_weeks}", &duration_weeks.to_string())
        .replace("{start_date}", start_date)
        .replace("{document_text}", document_text)
}

pub fn build_by_topic_prompt(
    learning_topic: &str,
    difficulty: DifficultyLevel,
    start_date: &str,
    duration_weeks: u32,
) -> String {
    BY_TOPIC_PROMPT_TEMPLATE
        .replace("{duration_weeks}", &duration_weeks.to_string())
        .replace("{difficulty_level}", &difficulty.to_string())
        .replace("{learning_topic}", learning_topic)
        .replace("{start_date}", start_date)
}

/// Generates a schedule from extracted document content with the pro model.
pub async fn generate_from_document(
    llm: &LlmClient,
    document_text: &str,
    start_date: &str,
    duration_weeks: u32,
) -> Result<Vec<ScheduledEvent>, AppError> {
    let prompt = build_from_document_prompt(document_text, start_date, duration_weeks);
    let mut events: Vec<ScheduledEvent> = llm
        .generate_json(PRO_MODEL, &prompt, &schedule_schema())
        .await
        .map_err(|e| AppError::Llm(format!("Schedule generation failed: {e}")))?;

    sort_events_by_date(&mut events);
    Ok(events)
}

/// Generates a schedule for a topic and learner level with the pro model.
pub async fn generate_by_topic(
    llm: &LlmClient,
    learning_topic: &str,
    difficulty: DifficultyLevel,
    start_date: &str,
    duration_weeks: u32,
) -> Result<Vec<ScheduledEvent>, AppError> {
    let prompt = build_by_topic_prompt(learning_topic, difficulty, start_date, duration_weeks);
    let mut events: Vec<ScheduledEvent> = llm
        .generate_json(PRO_MODEL, &prompt, &schedule_schema())
        .await
        .map_err(|e| AppError::Llm(format!("Schedule generation failed: {e}")))?;

    sort_events_by_date(&mut events);
    Ok(events)
}

/// Turns manual entries into events, one activity each, sorted by date.
/// No LLM call.
pub fn assemble_manual(entries: Vec<ManualEntry>) -> Vec<ScheduledEvent> {
    let mut events: Vec<ScheduledEvent> = entries
        .into_iter()
        .map(|entry| ScheduledEvent {
            date: entry.date,
            topic: entry.topic,
            activities: vec![entry.activity],
        })
        .collect();

    sort_events_by_date(&mut events);
    events
}

/// Ascending by calendar date; unparseable dates sort first, then raw
/// strings break ties.
pub fn sort_events_by_date(events: &mut [ScheduledEvent]) {
    events.sort_by_key(|event| {
        (
            NaiveDate::parse_from_str(&event.date, DATE_FORMAT).ok(),
            event.date.clone(),
        )
    });
}
