//! File-content extraction — an external collaborator boundary.
//!
//! Real decoding (PDF text, video transcription) belongs to a separate
//! service. This module only defines the interface and ships a fixture
//! implementation that returns canned text per document kind; uploaded
//! bytes are accepted but never decoded.

pub mod handlers;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// What the caller claims the uploaded file is. Drives which fixture text
/// the default extractor returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Resume,
    StudyDocument,
    VideoTranscript,
}

impl DocumentKind {
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "resume" => Ok(DocumentKind::Resume),
            "study_document" => Ok(DocumentKind::StudyDocument),
            "video_transcript" => Ok(DocumentKind::VideoTranscript),
            other => Err(AppError::Validation(format!(
                "unknown document kind '{other}' (expected resume, study_document, or video_transcript)"
            ))),
        }
    }
}

/// The file-to-text collaborator. Implement this to swap in a real
/// extraction backend without touching handlers or feature code.
///
/// Carried in `AppState` as `Arc<dyn TextExtractor>`.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(
        &self,
        filename: &str,
        bytes: &[u8],
        kind: DocumentKind,
    ) -> Result<String, AppError>;
}

const RESUME_FIXTURE: &str = r#"John Doe
Email: john.doe@example.com | Phone: 555-123-4567 | LinkedIn: linkedin.com/in/johndoe

Summary: Highly motivated software engineer with 5 years of experience in full-stack development using React, Node.js, and PostgreSQL. Proven ability to deliver high-quality code and contribute to scalable web applications. Seeking to leverage expertise in a challenging role.

Experience:
Senior Software Engineer | Tech Solutions Inc. | 2021 - Present
- Developed and maintained critical features for a large-scale e-commerce platform using React, Redux, and Node.js.
- Implemented RESTful APIs and integrated with third-party services.
- Led a team of 3 junior developers, providing mentorship and code reviews.
- Optimized database queries for PostgreSQL, reducing response times by 20%.

Software Engineer | InnovateWeb Co. | 2018 - 2021
- Designed and built responsive user interfaces with React and styled-components.
- Collaborated with product managers and designers to define and implement new features.
- Participated in agile development cycles, including daily stand-ups and sprint reviews.

Education:
B.S. in Computer Science | University of Example | 2014 - 2018

Skills:
Languages: JavaScript, TypeScript, Python, HTML, CSS
Frameworks/Libraries: React, Node.js, Express, Redux, Tailwind CSS
Databases: PostgreSQL, MongoDB
Tools: Git, Docker, AWS (EC2, S3)
"#;

/// `{file_name}` is substituted with the uploaded filename.
const STUDY_DOCUMENT_FIXTURE: &str = "This is simulated content from {file_name}. It discusses various topics like React, TypeScript, AI, machine learning, and natural language processing. Key concepts include components, hooks, state management, API integration, model training, data analysis, and ethical AI considerations. EduFlux aims to provide tools for learning and assessment in these areas. For example, a question could be about the purpose of React hooks, or the importance of ethical AI in model deployment. The document details a 4-week learning plan covering: Week 1: Introduction to AI, Week 2: Machine Learning Fundamentals, Week 3: Deep Learning Concepts, Week 4: Ethical AI and Project Work.";

const TRANSCRIPT_FIXTURE: &str = "\
[00:00:00] Hello everyone and welcome to our deep dive into the future of AI.
[00:00:05] Today we're going to explore the latest advancements in large language models.
[00:00:12] Specifically, we'll talk about the ethical implications and responsible AI development.
[00:00:20] This is a crucial topic as AI becomes more integrated into our daily lives.
[00:00:28] We'll also touch upon some practical applications, like automated content creation.
[00:00:35] And how AI is revolutionizing data analysis across various industries.
[00:00:42] Consider the impact on personalized education systems and individual learning paths.
[00:00:50] The power of AI to transform complex datasets into actionable insights is immense.
[00:00:58] Finally, we'll discuss the challenges of ensuring fairness and transparency in AI algorithms.
[00:01:05] Thank you for joining us. Don't forget to like and subscribe!";

/// Demonstration extractor: ignores the uploaded bytes and returns the
/// fixture text for the requested kind.
pub struct FixtureExtractor;

#[async_trait]
impl TextExtractor for FixtureExtractor {
    async fn extract(
        &self,
        filename: &str,
        _bytes: &[u8],
        kind: DocumentKind,
    ) -> Result<String, AppError> {
        let text = match kind {
            DocumentKind::Resume => RESUME_FIXTURE.to_string(),
            DocumentKind::StudyDocument => {
                STUDY_DOCUMENT_FIXTURE.replace("{file_name}", filename)
            }
            DocumentKind::VideoTranscript => TRANSCRIPT_FIXTURE.to_string(),
        };
        Ok(text)
    }
}
