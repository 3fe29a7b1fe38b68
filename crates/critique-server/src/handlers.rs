use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Response};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use critique_core::{AnalysisCategory, AnalysisRequest, DesignAsset, FocusArea, RunOutcome, SessionId};
use critique_engine::{decode_data_url, AnalysisEngine};

use crate::page;
use crate::server::AppState;

pub const NO_ASSETS_WARNING: &str = "Please upload at least one design to analyze.";
pub const MISSING_KEY_WARNING: &str = "Please enter your API key to proceed";
pub const MISSING_KEY_HINT: &str = "Get your API key from Google AI Studio";

pub async fn index() -> Html<&'static str> {
    Html(page::INDEX_HTML)
}

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "healthy", "service": "critique" }))
}

pub async fn create_session(State(state): State<AppState>) -> impl IntoResponse {
    let id = state.store.create();
    let credential_present = state
        .store
        .get(&id)
        .map(|config| config.has_credential())
        .unwrap_or(false);
    info!(session_id = %id, "session created");
    (
        StatusCode::CREATED,
        Json(json!({ "session_id": id, "credential_present": credential_present })),
    )
}

#[derive(Debug, Deserialize)]
pub struct CredentialUpdate {
    pub api_key: String,
}

/// The credential is write-only: the response states only whether one is
/// present, never the value.
pub async fn update_credential(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
    Json(update): Json<CredentialUpdate>,
) -> Response {
    match state.store.set_credential(&id, &update.api_key) {
        Some(present) => {
            info!(session_id = %id, credential_present = present, "credential updated");
            Json(json!({ "credential_present": present })).into_response()
        }
        None => unknown_session(&id),
    }
}

/// The run-analysis action: decode the form, check preconditions, hand the
/// request to the engine, return the report. Every failure surfaces as
/// structured JSON; nothing here terminates the process.
pub async fn run_analysis(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
    multipart: Multipart,
) -> Response {
    let Some(config) = state.store.get(&id) else {
        return unknown_session(&id);
    };

    let form = match parse_run_form(multipart).await {
        Ok(form) => form,
        Err(response) => return response,
    };

    let Some(credential) = config.credential() else {
        warn!(session_id = %id, "run attempted without a credential");
        return (
            StatusCode::CONFLICT,
            Json(json!({ "warning": MISSING_KEY_WARNING, "hint": MISSING_KEY_HINT })),
        )
            .into_response();
    };

    let model = match state.factory.build(credential) {
        Ok(model) => model,
        Err(e) => {
            warn!(session_id = %id, error = %e, "model construction failed");
            return (
                StatusCode::CONFLICT,
                Json(json!({ "error": e.to_string(), "hint": critique_engine::CREDENTIAL_HINT })),
            )
                .into_response();
        }
    };

    let request = AnalysisRequest::new(form.categories, form.focus_areas, form.context, form.assets);
    let engine = AnalysisEngine::new(model);

    match engine.run(&request).await {
        RunOutcome::NoAssets => Json(json!({ "warning": NO_ASSETS_WARNING })).into_response(),
        RunOutcome::Report(report) => Json(report).into_response(),
    }
}

#[derive(Debug, Default)]
struct RunForm {
    categories: Vec<AnalysisCategory>,
    focus_areas: Vec<FocusArea>,
    context: String,
    assets: Vec<DesignAsset>,
}

async fn parse_run_form(mut multipart: Multipart) -> Result<RunForm, Response> {
    let mut form = RunForm::default();
    let mut pasted = 0usize;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return Err(bad_request(format!("malformed multipart body: {e}"))),
        };

        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "image" => {
                let file_name = field
                    .file_name()
                    .map(str::to_owned)
                    .unwrap_or_else(|| "design".to_string());
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| bad_request(format!("could not read upload {file_name}: {e}")))?;
                form.assets.push(DesignAsset::new(file_name, bytes));
            }
            "pasted_image" => {
                pasted += 1;
                let text = field
                    .text()
                    .await
                    .map_err(|e| bad_request(format!("could not read pasted image: {e}")))?;
                // An undecodable paste still becomes an asset; conversion
                // reports it by name instead of failing the whole form.
                let bytes = decode_data_url(&text).unwrap_or_else(|| text.into_bytes());
                form.assets
                    .push(DesignAsset::new(format!("pasted image {pasted}"), bytes));
            }
            "categories" => {
                let text = read_text(field).await?;
                let category = text
                    .parse::<AnalysisCategory>()
                    .map_err(|e| bad_request(e.to_string()))?;
                form.categories.push(category);
            }
            "focus_areas" => {
                let text = read_text(field).await?;
                let area = text
                    .parse::<FocusArea>()
                    .map_err(|e| bad_request(e.to_string()))?;
                form.focus_areas.push(area);
            }
            "context" => {
                form.context = read_text(field).await?;
            }
            // Unknown fields are ignored so the page can evolve freely.
            _ => {}
        }
    }

    Ok(form)
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, Response> {
    field
        .text()
        .await
        .map_err(|e| bad_request(format!("could not read form field: {e}")))
}

fn bad_request(message: String) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}

fn unknown_session(id: &SessionId) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("unknown session: {id}") })),
    )
        .into_response()
}
