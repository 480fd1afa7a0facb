//! HTTP request handlers for the Router service.
//!
//! Exposes claim analysis, history, statistics, feedback and health
//! endpoints using axum, plus a WebSocket feed at `/live` that pushes every
//! new classification to connected clients.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use claimcheck_analyzer::{Analyzer, Statistics};
use claimcheck_domain::ClassificationResult;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

/// Name reported by the health check
pub const ANALYZER_NAME: &str = concat!("claimcheck-analyzer v", env!("CARGO_PKG_VERSION"));

/// Results buffered per live subscriber before it starts lagging
pub const LIVE_CHANNEL_CAPACITY: usize = 64;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Classification pipeline and its history
    pub analyzer: Arc<Analyzer>,
    /// Page size for `/recent-results` without a `limit`
    pub recent_results_limit: usize,
    /// Fan-out of results classified through `/analyze`
    pub results: broadcast::Sender<ClassificationResult>,
}

impl AppState {
    /// Create state around an analyzer with a fresh live channel
    pub fn new(analyzer: Arc<Analyzer>, recent_results_limit: usize) -> Self {
        let (results, _) = broadcast::channel(LIVE_CHANNEL_CAPACITY);
        Self {
            analyzer,
            recent_results_limit,
            results,
        }
    }
}

/// Claim analysis request
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Claim to classify
    #[serde(default)]
    pub text: Option<String>,
}

/// Query parameters for recent results
#[derive(Debug, Deserialize)]
pub struct RecentQuery {
    /// Maximum number of results
    pub limit: Option<usize>,
}

/// User feedback on a classification
#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    /// Claim the feedback is about
    #[serde(default)]
    pub claim: Option<String>,
    /// Verdict the user believes is right
    #[serde(default, alias = "userVerdict")]
    pub user_verdict: Option<String>,
    /// Free-text comment
    #[serde(default)]
    pub comment: Option<String>,
}

/// Feedback acknowledgement
#[derive(Debug, Serialize, Deserialize)]
pub struct FeedbackResponse {
    /// Human-readable message
    pub message: String,
    /// Always "received"
    pub status: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
    /// Analyzer name and version
    pub analyzer: String,
    /// Number of recorded classifications
    pub history_size: usize,
    /// Facts loaded from the newspaper corpus
    pub corpus_facts: usize,
    /// Curated known facts loaded
    pub known_facts: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Frame sent to `/live` clients
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum LiveEvent {
    /// A claim was classified through `/analyze`
    NewResult(ClassificationResult),
    /// Reply to a claim the client sent over its own socket
    AnalysisResult(ClassificationResult),
    /// The client's frame could not be used
    Error(ErrorResponse),
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Analysis request without claim text
    MissingText,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::MissingText => (
                StatusCode::BAD_REQUEST,
                "Missing 'text' field in request.".to_string(),
            ),
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

/// POST /analyze - Classify a claim
///
/// Whitespace-only text is passed through and comes back as an UNKNOWN
/// result with an error marker.
async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<ClassificationResult>, AppError> {
    let text = match request.text {
        Some(text) if !text.is_empty() => text,
        _ => return Err(AppError::MissingText),
    };

    let result = state.analyzer.analyze(&text);
    if !result.is_rejected() && state.results.send(result.clone()).is_err() {
        debug!("No live subscribers for the new result");
    }

    Ok(Json(result))
}

/// GET /live - WebSocket feed of new results
///
/// Clients may also send `{"text": "..."}` frames; each is classified and
/// answered on the same socket only.
async fn live(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| live_session(socket, state))
}

async fn live_session(mut socket: WebSocket, state: AppState) {
    let mut results = state.results.subscribe();
    info!("Live client connected");

    loop {
        let event = tokio::select! {
            received = results.recv() => match received {
                Ok(result) => LiveEvent::NewResult(result),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!("Live client lagged; {} results dropped", skipped);
                    continue;
                }
                Err(broadcast::error::RecvError::Closed) => break,
            },
            frame = socket.recv() => match frame {
                Some(Ok(Message::Text(text))) => live_reply(&state.analyzer, &text),
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => continue,
                Some(Err(e)) => {
                    debug!("Live socket error: {}", e);
                    break;
                }
            },
        };

        let frame = match serde_json::to_string(&event) {
            Ok(frame) => frame,
            Err(e) => {
                warn!("Failed to encode live event: {}", e);
                continue;
            }
        };
        if socket.send(Message::Text(frame)).await.is_err() {
            break;
        }
    }

    info!("Live client disconnected");
}

/// Answer one client frame sent over `/live`
pub fn live_reply(analyzer: &Analyzer, frame: &str) -> LiveEvent {
    match serde_json::from_str::<AnalyzeRequest>(frame) {
        Ok(AnalyzeRequest { text: Some(text) }) if !text.is_empty() => LiveEvent::AnalysisResult(analyzer.analyze(&text)),
        _ => LiveEvent::Error(ErrorResponse {
            error: "Missing 'text' field in request.".to_string(),
        }),
    }
}

/// GET /recent-results - Recent classifications, most recent first
async fn recent_results(
    State(state): State<AppState>,
    Query(query): Query<RecentQuery>,
) -> Json<Vec<ClassificationResult>> {
    let limit = query.limit.unwrap_or(state.recent_results_limit);
    Json(state.analyzer.recent(limit))
}

/// GET /statistics - Verdict counts over the history
async fn statistics(State(state): State<AppState>) -> Json<Statistics> {
    Json(state.analyzer.statistics())
}

/// POST /feedback - Record user feedback in the log
async fn feedback(Json(request): Json<FeedbackRequest>) -> Json<FeedbackResponse> {
    info!(
        claim = request.claim.as_deref().unwrap_or_default(),
        user_verdict = request.user_verdict.as_deref().unwrap_or_default(),
        comment = request.comment.as_deref().unwrap_or_default(),
        "Feedback received"
    );

    Json(FeedbackResponse {
        message: "Feedback submitted successfully".to_string(),
        status: "received".to_string(),
    })
}

/// GET /health - Liveness and dataset sizes
async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    let datasets = state.analyzer.datasets();

    Json(HealthCheckResponse {
        status: "ok".to_string(),
        analyzer: ANALYZER_NAME.to_string(),
        history_size: state.analyzer.history_len(),
        corpus_facts: datasets.corpus.total_facts,
        known_facts: datasets.known_facts,
    })
}

/// GET /dataset - Newspaper corpus summary
async fn dataset(State(state): State<AppState>) -> Response {
    Json(state.analyzer.dataset_statistics()).into_response()
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    AxumRouter::new()
        .route("/analyze", post(analyze))
        .route("/recent-results", get(recent_results))
        .route("/statistics", get(statistics))
        .route("/feedback", post(feedback))
        .route("/health", get(health_check))
        .route("/dataset", get(dataset))
        .route("/live", get(live))
        .with_state(state)
}
