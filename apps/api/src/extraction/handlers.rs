//! Multipart upload handler for the extraction collaborator.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;

use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::extraction::DocumentKind;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ExtractionResponse {
    pub filename: String,
    pub kind: DocumentKind,
    pub text: String,
}

/// POST /api/v1/extractions
///
/// Multipart form with a `kind` text field and a `file` field. The file
/// bytes are handed to the configured `TextExtractor`; nothing is stored.
pub async fn handle_extract(
    State(state): State<AppState>,
    _user: CurrentUser,
    mut multipart: Multipart,
) -> Result<Json<ExtractionResponse>, AppError> {
    let mut kind: Option<DocumentKind> = None;
    let mut filename: Option<String> = None;
    let mut bytes: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        let name = field.name().map(|n| n.to_string());
        match name.as_deref() {
            Some("kind") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("invalid kind field: {e}")))?;
                kind = Some(DocumentKind::parse(&value)?);
            }
            Some("file") => {
                filename = field.file_name().map(|n| n.to_string());
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("invalid file field: {e}")))?;
                bytes = Some(data.to_vec());
            }
            _ => {}
        }
    }

    let kind = kind.ok_or_else(|| AppError::Validation("kind field is required".to_string()))?;
    let bytes = bytes.ok_or_else(|| AppError::Validation("file field is required".to_string()))?;
    let filename = filename.unwrap_or_else(|| "upload".to_string());

    let text = state.extractor.extract(&filename, &bytes, kind).await?;

    Ok(Json(ExtractionResponse {
        filename,
        kind,
        text,
    }))
}
