//! Video Segments — extracts key segments from a timestamped transcription
//! and decorates each with a downloadable plain-text summary artifact.
//! No media is processed; the transcript is the only input.

pub mod handlers;
pub mod prompts;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::{LlmClient, Schema, PRO_MODEL};
use crate::video::prompts::{SEGMENTS_PROMPT_TEMPLATE, TOPIC_PRIORITY_TEMPLATE};

/// One extracted segment. Times are in seconds. `mock_download_url` is
/// derived locally after generation, never requested from the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSegment {
    pub segment_name: String,
    pub start_time: f64,
    pub end_time: f64,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mock_download_url: Option<String>,
}

impl VideoSegment {
    /// `01:05–02:10` style display range.
    pub fn time_range(&self) -> String {
        format!(
            "{}–{}",
            format_timestamp(self.start_time),
            format_timestamp(self.end_time)
        )
    }
}

fn segments_schema() -> Schema {
    Schema::array(Schema::object(vec![
        (
            "segmentName",
            Schema::string().describe("A descriptive name for the video segment."),
        ),
        (
            "startTime",
            Schema::number().describe("The start time of the segment in seconds."),
        ),
        (
            "endTime",
            Schema::number().describe("The end time of the segment in seconds."),
        ),
        (
            "description",
            Schema::string().describe("A brief summary of the segment content."),
        ),
    ]))
}

pub fn build_segments_prompt(
    transcript: &str,
    num_segments: u32,
    specific_topic: Option<&str>,
) -> String {
    let mut prompt = SEGMENTS_PROMPT_TEMPLATE
        .replace("{num_segments}", &num_segments.to_string())
        .replace("{transcript}", transcript);

    if let Some(topic) = specific_topic {
        prompt.push('\n');
        prompt.push_str(&TOPIC_PRIORITY_TEMPLATE.replace("{specific_topic}", topic));
    }

    prompt
}

/// Extracts `num_segments` segments from the transcription with the pro
/// model, optionally prioritizing `specific_topic`.
pub async fn extract_segments(
    llm: &LlmClient,
    transcript: &str,
    num_segments: u32,
    specific_topic: Option<&str>,
) -> Result<Vec<VideoSegment>, AppError> {
    let prompt = build_segments_prompt(transcript, num_segments, specific_topic);
    let mut segments: Vec<VideoSegment> = llm
        .generate_json(PRO_MODEL, &prompt, &segments_schema())
        .await
        .map_err(|e| AppError::Llm(format!("Video segment extraction failed: {e}")))?;

    validate_segments(&segments)?;

    for segment in &mut segments {
        segment.mock_download_url = Some(download_artifact(segment));
    }

    Ok(segments)
}

/// Each segment must run forward in time. Violations are generation
/// failures, same as an unparseable response.
fn validate_segments(segments: &[VideoSegment]) -> Result<(), AppError> {
    for segment in segments {
        if segment.start_time >= segment.end_time {
            return Err(AppError::Llm(format!(
                "Video segment extraction failed: segment \"{}\" has start time {}s at or after end time {}s",
                segment.segment_name, segment.start_time, segment.end_time
            )));
        }
    }
    Ok(())
}

/// Builds the simulated download: a `data:` URL over a plain-text summary
/// of the segment.
fn download_artifact(segment: &VideoSegment) -> String {
    let summary = format!(
        "Segment Name: {}\nStart Time: {}s\nEnd Time: {}s\nDescription: {}",
        segment.segment_name, segment.start_time, segment.end_time, segment.description
    );
    format!("data:text/plain;base64,{}", BASE64.encode(summary))
}

/// Formats whole seconds as zero-padded `MM:SS` (65 → `01:05`).
pub fn format_timestamp(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(name: &str, start: f64, end: f64) -> VideoSegment {
        VideoSegment {
            segment_name: name.to_string(),
            start_time: start,
            end_time: end,
            description: "Intro and framing".to_string(),
            mock_download_url: None,
        }
    }

    #[test]
    fn test_format_timestamp_pads_minutes_and_seconds() {
        assert_eq!(format_timestamp(65.0), "01:05");
        assert_eq!(format_timestamp(130.0), "02:10");
        assert_eq!(format_timestamp(0.0), "00:00");
        assert_eq!(format_timestamp(59.9), "00:59");
    }

    #[test]
    fn test_time_range_rendering() {
        let s = segment("Opening", 65.0, 130.0);
        assert_eq!(s.time_range(), "01:05–02:10");
    }

    #[test]
    fn test_prompt_embeds_transcript_and_count_verbatim() {
        let prompt = build_segments_prompt("[00:00:00] Hello everyone", 3, None);
        assert!(prompt.contains("[00:00:00] Hello everyone"));
        assert!(prompt.contains("identify 3 key segments"));
        assert!(!prompt.contains("Prioritize segments"));
    }

    #[test]
    fn test_prompt_appends_topic_priority_only_when_given() {
        let prompt = build_segments_prompt("[00:00:00] Hello", 3, Some("AI ethics"));
        assert!(prompt.contains("Prioritize segments related to the topic: \"AI ethics\"."));
    }

    #[test]
    fn test_validate_rejects_backward_segment() {
        let result = validate_segments(&[segment("Backwards", 130.0, 65.0)]);
        assert!(matches!(result, Err(AppError::Llm(_))));
    }

    #[test]
    fn test_validate_rejects_zero_length_segment() {
        let result = validate_segments(&[segment("Empty", 65.0, 65.0)]);
        assert!(matches!(result, Err(AppError::Llm(_))));
    }

    #[test]
    fn test_download_artifact_encodes_segment_summary() {
        let s = segment("Opening", 65.0, 130.0);
        let url = download_artifact(&s);
        let encoded = url.strip_prefix("data:text/plain;base64,").unwrap();
        let decoded = String::from_utf8(BASE64.decode(encoded).unwrap()).unwrap();
        assert_eq!(
            decoded,
            "Segment Name: Opening\nStart Time: 65s\nEnd Time: 130s\nDescription: Intro and framing"
        );
    }

    #[test]
    fn test_segment_wire_names_are_camel_case() {
        let json = r#"{
            "segmentName": "Opening",
            "startTime": 0,
            "endTime": 12.5,
            "description": "Welcome"
        }"#;
        let parsed: VideoSegment = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.segment_name, "Opening");
        assert!(parsed.mock_download_url.is_none());

        let value = serde_json::to_value(&parsed).unwrap();
        assert!(value.get("startTime").is_some());
        // Absent artifact is omitted, not null
        assert!(value.get("mockDownloadUrl").is_none());
    }
}
