use axum::{
    extract::{Json, Multipart, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::{
    error::{AppError, Result},
    handlers::AppState,
    local_storage::{UploadedFile, attachment_store::is_allowed_attachment},
    models::NewIssue,
    services::Selections,
};

/// List every logged issue, unfiltered
pub async fn list_issues(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let service = state.issue_service.clone();
    let rows = tokio::task::spawn_blocking(move || service.view(&Selections::default())).await??;
    Ok((StatusCode::OK, Json(rows)))
}

/// List logged issues matching the given selections
pub async fn search_issues(
    State(state): State<AppState>,
    Json(selections): Json<Selections>,
) -> Result<impl IntoResponse> {
    let service = state.issue_service.clone();
    let rows = tokio::task::spawn_blocking(move || service.view(&selections)).await??;
    Ok((StatusCode::OK, Json(rows)))
}

/// Options for the filter multi-selects
pub async fn get_filter_options(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let service = state.issue_service.clone();
    let options = tokio::task::spawn_blocking(move || service.filter_options()).await??;
    Ok((StatusCode::OK, Json(options)))
}

/// Submit a new issue.
///
/// Expects a multipart form with an `issue` part holding the JSON form
/// values and any number of `attachments` file parts.
pub async fn submit_issue(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse> {
    let mut issue: Option<NewIssue> = None;
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("issue") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                issue = Some(serde_json::from_str(&text)?);
            }
            Some("attachments") => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                // Browsers send an empty part when no file was picked
                if file_name.is_empty() {
                    continue;
                }
                if !is_allowed_attachment(&file_name) {
                    return Err(AppError::BadRequest(format!(
                        "File type not allowed: {}",
                        file_name
                    )));
                }
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                files.push(UploadedFile {
                    file_name,
                    bytes: bytes.to_vec(),
                });
            }
            _ => {}
        }
    }

    let issue = issue.ok_or_else(|| AppError::BadRequest("Missing issue form data".into()))?;

    let service = state.issue_service.clone();
    let record = tokio::task::spawn_blocking(move || service.submit(issue, &files)).await??;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Download the selected issues as a workbook
pub async fn export_issues(
    State(state): State<AppState>,
    Json(selections): Json<Selections>,
) -> Result<impl IntoResponse> {
    let service = state.issue_service.clone();
    let artifact = tokio::task::spawn_blocking(move || service.export(&selections)).await??;

    let headers = [
        (header::CONTENT_TYPE, artifact.mime_type.to_string()),
        (header::CONTENT_DISPOSITION, artifact.content_disposition()),
    ];
    Ok((StatusCode::OK, headers, artifact.bytes))
}
