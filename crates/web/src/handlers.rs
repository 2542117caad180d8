//! HTTP handlers: upload form page, export, and preview.

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderName, HeaderValue};
use axum::response::{Html, IntoResponse, Response};
use jmerge_convert::{ExportFormat, SourceFile};
use serde::Serialize;
use serde_json::json;

use crate::error::AppError;
use crate::routes::AppContext;

/// Notice summary header attached to export downloads.
static EXPORT_NOTICES_HEADER: HeaderName = HeaderName::from_static("x-export-notices");

/// Maximum number of delimited-text lines returned by the preview
/// endpoint (header row plus five data rows).
const PREVIEW_LINE_LIMIT: usize = 6;

/// Serve the upload form page with the configured display metadata.
pub async fn index(State(ctx): State<AppContext>) -> Html<String> {
    let page = include_str!("index.html")
        .replace("{{PAGE_TITLE}}", &ctx.config.page.title)
        .replace("{{PAGE_TAGLINE}}", &ctx.config.page.tagline);
    Html(page)
}

/// Liveness probe.
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// One parsed multipart upload: files plus the form's text fields.
struct UploadForm {
    files: Vec<SourceFile>,
    header_edit: Option<String>,
    format: Option<String>,
}

async fn read_form(multipart: &mut Multipart) -> Result<UploadForm, AppError> {
    let mut files = Vec::new();
    let mut header_edit = None;
    let mut format = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field
                    .file_name()
                    .unwrap_or("upload.json")
                    .to_string();
                let bytes = field.bytes().await?;
                files.push(SourceFile::new(filename, bytes.to_vec()));
            }
            Some("headers") => {
                let text = field.text().await?;
                if !text.trim().is_empty() {
                    header_edit = Some(text);
                }
            }
            Some("format") => {
                format = Some(field.text().await?);
            }
            _ => {}
        }
    }

    Ok(UploadForm {
        files,
        header_edit,
        format,
    })
}

/// Run one export and return the artifact as a download.
pub async fn export(mut multipart: Multipart) -> Result<Response, AppError> {
    let form = read_form(&mut multipart).await?;
    let format_token = form
        .format
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("missing format field".to_string()))?;
    let format = ExportFormat::from_str(format_token)
        .map_err(|err| AppError::BadRequest(err.to_string()))?;

    let outcome = jmerge_convert::export(&form.files, form.header_edit.as_deref(), format)?;
    for notice in &outcome.notices {
        tracing::warn!("{}", notice);
    }

    let mut headers = HeaderMap::new();
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static(outcome.buffer.content_type),
    );
    headers.insert(
        CONTENT_DISPOSITION,
        HeaderValue::from_str(&format!(
            "attachment; filename=\"{}\"",
            outcome.buffer.filename
        ))
        .map_err(|err| AppError::BadRequest(err.to_string()))?,
    );
    if !outcome.notices.is_empty() {
        let summary = outcome
            .notices
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        headers.insert(
            EXPORT_NOTICES_HEADER.clone(),
            HeaderValue::from_str(&header_safe(&summary))
                .map_err(|err| AppError::BadRequest(err.to_string()))?,
        );
    }

    Ok((headers, outcome.buffer.bytes).into_response())
}

/// Preview payload: effective headers, notices, and the first few lines
/// of the delimited-text rendering.
#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    headers: Vec<String>,
    notices: Vec<String>,
    preview: Vec<String>,
}

/// Return the detected headers plus a short CSV preview for the page.
pub async fn preview(mut multipart: Multipart) -> Result<Json<PreviewResponse>, AppError> {
    let form = read_form(&mut multipart).await?;
    let outcome =
        jmerge_convert::export(&form.files, form.header_edit.as_deref(), ExportFormat::Csv)?;

    let text = String::from_utf8_lossy(&outcome.buffer.bytes);
    Ok(Json(PreviewResponse {
        headers: outcome.headers,
        notices: outcome.notices.iter().map(ToString::to_string).collect(),
        preview: preview_lines(&text, PREVIEW_LINE_LIMIT),
    }))
}

fn preview_lines(text: &str, limit: usize) -> Vec<String> {
    text.lines().take(limit).map(str::to_string).collect()
}

/// Clamp a string to visible-ASCII so it is a valid header value.
fn header_safe(text: &str) -> String {
    text.chars()
        .map(|c| if matches!(c, ' '..='~') { c } else { '?' })
        .collect()
}
