// LLM prompt constants for the Video module.

/// Segment extraction prompt template.
/// Replace `{num_segments}` and `{transcript}` before sending.
pub const SEGMENTS_PROMPT_TEMPLATE: &str = r#"Analyze the following video transcription and identify {num_segments} key segments.
For each segment, provide a descriptive name, its start time (in seconds), end time (in seconds), and a brief description of its content.
The transcription includes timestamps in [HH:MM:SS] format. Calculate start and end times in seconds based on these.

Video Transcription:
{transcript}"#;

/// Appended when the caller supplies a topic. Replace `{specific_topic}`.
pub const TOPIC_PRIORITY_TEMPLATE: &str =
    r#"Prioritize segments related to the topic: "{specific_topic}"."#;
