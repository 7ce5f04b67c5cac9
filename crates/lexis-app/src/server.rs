//! JSON web API over the same state as the CLI.
//!
//! ## Routes
//!
//! - `GET /` service info
//! - `POST /api/translate` `{text, src?, tgt?, mode?}`, word results are recorded
//! - `POST /api/quick-translate` `{text, src?, tgt?}`, primary source only
//! - `GET /api/history?limit=` newest first
//! - `GET /api/history/search?q=`
//! - `GET /api/revision/words?limit=` the cards a review session would start with
//! - `POST /api/revision` `{word, src, answer}` grades one card and reschedules it
//! - `POST /api/revision/session` `{correct, incorrect}` records a finished session
//! - `GET /api/statistics`
//!
//! Errors come back as `{ "error": message }`.

use std::future::Future;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use lexis_core::InputError;
use lexis_core::language::LANGUAGES;
use lexis_history::StatisticsReport;
use lexis_review::grading::expected_answer;
use lexis_review::{ReviewError, apply_answer, is_correct, select_cards};
use lexis_types::{HistoryEntry, Lookup, SessionStats, TranslationResult};
use serde::Deserialize;
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;

use crate::state::{AppState, LookupError, LookupMode};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Review(#[from] ReviewError),

    #[error("Word not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<LookupError> for ApiError {
    fn from(e: LookupError) -> Self {
        match e {
            LookupError::Input(e) => ApiError::Input(e),
            LookupError::Storage(e) => ApiError::Internal(e.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Input(_) | ApiError::Review(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(e) => {
                tracing::error!("Request failed: {:#}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: String,
    pub src: Option<String>,
    pub tgt: Option<String>,
    #[serde(default)]
    pub mode: LookupMode,
}

#[derive(Debug, Deserialize)]
pub struct QuickTranslateRequest {
    #[serde(default)]
    pub text: String,
    pub src: Option<String>,
    pub tgt: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct RevisionQuery {
    /// Overrides the configured batch size
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub src: String,
    #[serde(default)]
    pub answer: String,
}

#[derive(Debug, Deserialize)]
pub struct SessionRequest {
    pub correct: u32,
    pub incorrect: u32,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/translate", post(translate))
        .route("/api/quick-translate", post(quick_translate))
        .route("/api/history", get(history))
        .route("/api/history/search", get(search_history))
        .route("/api/revision", post(answer_card))
        .route("/api/revision/words", get(revision_words))
        .route("/api/revision/session", post(record_session))
        .route("/api/statistics", get(statistics))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serve until `shutdown` resolves
pub async fn serve(
    state: Arc<AppState>,
    addr: &str,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn index(State(state): State<Arc<AppState>>) -> Json<Value> {
    let languages: Vec<Value> = LANGUAGES
        .iter()
        .map(|l| json!({ "code": l.code, "name": l.name, "flag": l.flag }))
        .collect();
    Json(json!({
        "name": "lexis",
        "version": env!("CARGO_PKG_VERSION"),
        "sources": state.aggregator.source_names(),
        "languages": languages,
    }))
}

/// `mode: "sentence"` forces a sentence; otherwise the word count decides
async fn translate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TranslateRequest>,
) -> Result<Json<Lookup>, ApiError> {
    let mode = match req.mode {
        LookupMode::Sentence => LookupMode::Sentence,
        LookupMode::Auto | LookupMode::Word => LookupMode::Auto,
    };
    let report = state
        .lookup(&req.text, req.src.as_deref(), req.tgt.as_deref(), mode)
        .await?;
    Ok(Json(report.lookup))
}

async fn quick_translate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<QuickTranslateRequest>,
) -> Result<Json<TranslationResult>, ApiError> {
    let result = state
        .quick_translate(&req.text, req.src.as_deref(), req.tgt.as_deref())
        .await?;
    Ok(Json(result))
}

async fn history(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HistoryQuery>,
) -> Json<Vec<HistoryEntry>> {
    let history = state.history.lock().await;
    let limit = query.limit.unwrap_or(history.len());
    Json(history.recent(limit).into_iter().cloned().collect())
}

async fn search_history(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<HistoryEntry>>, ApiError> {
    let q = lexis_core::error::validate_text(&query.q)?;
    let history = state.history.lock().await;
    Ok(Json(history.search(q).into_iter().cloned().collect()))
}

/// Read-only preview of a review batch; nothing is rescheduled
async fn revision_words(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RevisionQuery>,
) -> Result<Json<Vec<HistoryEntry>>, ApiError> {
    let history = state.history.lock().await;
    let mut config = state.config.review.clone();
    if let Some(limit) = query.limit {
        config.batch_size = limit;
    }
    if history.len() < config.min_history {
        return Err(ReviewError::NotEnoughWords {
            have: history.len(),
            need: config.min_history,
        }
        .into());
    }

    let cards = select_cards(
        history.entries(),
        Utc::now(),
        &config,
        &mut rand::thread_rng(),
    );
    let entries = history.entries();
    Ok(Json(cards.iter().map(|&i| entries[i].clone()).collect()))
}

/// Grade one answer, reschedule the card and persist the history
async fn answer_card(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnswerRequest>,
) -> Result<Json<Value>, ApiError> {
    let word = lexis_core::error::validate_text(&req.word)?;
    let mut history = state.history.lock().await;
    let Some(entry) = history.find_mut(word, &req.src) else {
        return Err(ApiError::NotFound(format!("{} ({})", word, req.src)));
    };

    let correct = is_correct(&req.answer, entry);
    let expected = expected_answer(entry).map(str::to_string);
    apply_answer(entry, correct, Utc::now());
    let body = json!({
        "word": entry.word,
        "correct": correct,
        "expected": expected,
        "revision_score": entry.revision_score,
        "next_revision": entry.next_revision,
    });
    tracing::debug!("'{}' graded over the API, score now {}", entry.word, entry.revision_score);

    history.save().map_err(anyhow::Error::from)?;
    Ok(Json(body))
}

/// Fold a finished client-side session into the persisted statistics
async fn record_session(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SessionRequest>,
) -> Result<Json<SessionStats>, ApiError> {
    let mut stats = state.stats.lock().await;
    stats
        .stats_mut()
        .record_session(req.correct, req.incorrect, Utc::now());
    stats.save().map_err(anyhow::Error::from)?;
    tracing::info!(
        "Session recorded: {} correct, {} incorrect",
        req.correct,
        req.incorrect
    );
    Ok(Json(stats.stats().clone()))
}

async fn statistics(State(state): State<Arc<AppState>>) -> Json<StatisticsReport> {
    let history = state.history.lock().await;
    let stats = state.stats.lock().await;
    Json(StatisticsReport::build(history.entries(), stats.stats()))
}
