//! Page handlers and JSON API routes.

use askama::Template;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use super::state::AppState;
use crate::progress::{self, format_speed};
use crate::store::RunnerRecord;
use crate::validate::{validate, RawSubmission};

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/records", get(list_records))
}

/// The single tracker page: message slot, input form, history table.
#[derive(Template)]
#[template(path = "index.html")]
struct IndexPage {
    message: Option<Message>,
    form: RawSubmission,
    rows: Vec<HistoryRow>,
}

struct Message {
    text: String,
    ok: bool,
}

/// A record prepared for display: raw inputs as-is, speeds pre-formatted
/// to two decimals with the unit suffix.
struct HistoryRow {
    runner_name: String,
    total_distance: f64,
    distance_covered: f64,
    elapsed_time: f64,
    target_time: f64,
    current_speed: String,
    required_speed: String,
}

impl From<RunnerRecord> for HistoryRow {
    fn from(r: RunnerRecord) -> Self {
        Self {
            runner_name: r.runner_name,
            total_distance: r.total_distance,
            distance_covered: r.distance_covered,
            elapsed_time: r.elapsed_time,
            target_time: r.target_time,
            current_speed: format_speed(r.current_speed),
            required_speed: format_speed(r.required_speed),
        }
    }
}

/// GET / -- render the form and the full history.
pub(super) async fn index(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let history = state.store.load_all()?;
    render(None, RawSubmission::default(), history)
}

/// POST / -- validate the submission, append on accept, then render.
/// Rejection re-fills the form with the submitted values; acceptance
/// clears it.
pub(super) async fn submit(
    State(state): State<AppState>,
    Form(raw): Form<RawSubmission>,
) -> Result<Html<String>, WebError> {
    let mut history = state.store.load_all()?;

    match validate(&raw) {
        Ok(submission) => {
            let record = progress::build_record(submission);
            state.store.append(&record)?;
            tracing::info!(runner = %record.runner_name, "runner progress recorded");
            history.push(record);
            render(
                Some(Message {
                    text: "Runner data saved successfully.".to_string(),
                    ok: true,
                }),
                RawSubmission::default(),
                history,
            )
        }
        Err(err) => {
            tracing::debug!(%err, "submission rejected");
            render(
                Some(Message {
                    text: err.to_string(),
                    ok: false,
                }),
                raw,
                history,
            )
        }
    }
}

fn render(
    message: Option<Message>,
    form: RawSubmission,
    history: Vec<RunnerRecord>,
) -> Result<Html<String>, WebError> {
    let page = IndexPage {
        message,
        form,
        rows: history.into_iter().map(HistoryRow::from).collect(),
    };
    Ok(Html(page.render().map_err(anyhow::Error::from)?))
}

async fn health() -> Json<Value> {
    Json(json!({
        "data": {
            "status": "ok",
            "version": env!("CARGO_PKG_VERSION")
        },
        "meta": {
            "version": env!("CARGO_PKG_VERSION")
        }
    }))
}

/// GET /api/v1/records -- the full history as JSON.
async fn list_records(State(state): State<AppState>) -> Result<Json<Value>, WebError> {
    let records = state.store.load_all()?;
    let total = records.len();
    Ok(Json(json!({
        "data": records,
        "meta": { "total": total }
    })))
}

/// Internal failure (store I/O, template rendering) surfaced as a 500
/// with the error visible, never swallowed.
pub(super) struct WebError(anyhow::Error);

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("internal error: {}", self.0),
        )
            .into_response()
    }
}

impl<E> From<E> for WebError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
