use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use bar_cut::types::{
    CATALOG, CutQuantity, Length, deserialize_u32_from_number, desired_from_cuts,
    to_cut_quantities, validate_raw_length,
};
use bar_cut::{Enumerator, ScoredResult, render, suggest};
use serde::{Deserialize, Serialize};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

type ApiError = (StatusCode, String);

#[derive(Deserialize, Serialize)]
struct CombinationsRequest {
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    raw_length: Length,
    #[serde(default)]
    cuts: Vec<CutQuantity>,
}

#[derive(Serialize)]
struct CombinationsResponse {
    raw_length: Length,
    results: Vec<ScoredResult>,
    recommended: Option<String>,
}

#[derive(Deserialize, Serialize)]
struct SuggestRequest {
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    raw_length: Length,
}

#[derive(Serialize)]
struct SuggestResponse {
    raw_length: Length,
    quantities: Vec<CutQuantity>,
}

fn bad_request(e: impl ToString) -> ApiError {
    (StatusCode::BAD_REQUEST, e.to_string())
}

fn internal_error(e: impl ToString) -> ApiError {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

async fn combinations(
    Json(req): Json<CombinationsRequest>,
) -> Result<Json<CombinationsResponse>, ApiError> {
    tracing::info!(
        body = serde_json::to_string(&req).unwrap_or_default(),
        "POST /combinations"
    );

    let raw_length = validate_raw_length(req.raw_length).map_err(bad_request)?;

    let desired = desired_from_cuts(req.cuts).map_err(bad_request)?;

    let enumerator = Enumerator::new(raw_length, &desired).map_err(bad_request)?;
    let results = tokio::task::spawn_blocking(move || enumerator.solve())
        .await
        .map_err(internal_error)?;

    Ok(Json(CombinationsResponse {
        raw_length,
        recommended: results.first().map(render::recommendation),
        results,
    }))
}

async fn suggestion(Json(req): Json<SuggestRequest>) -> Result<Json<SuggestResponse>, ApiError> {
    tracing::info!(raw_length = req.raw_length, "POST /suggest");

    let raw_length = validate_raw_length(req.raw_length).map_err(bad_request)?;
    let suggested = tokio::task::spawn_blocking(move || suggest(raw_length))
        .await
        .map_err(internal_error)?
        .map_err(bad_request)?;

    Ok(Json(SuggestResponse {
        raw_length,
        quantities: to_cut_quantities(&suggested),
    }))
}

fn init_sentry() -> sentry::ClientInitGuard {
    let dsn = std::env::var("SENTRY_DSN")
        .ok()
        .and_then(|dsn| dsn.parse().ok());
    sentry::init(sentry::ClientOptions {
        dsn,
        release: sentry::release_name!(),
        ..Default::default()
    })
}

#[tokio::main]
async fn main() {
    let _sentry = init_sentry();

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("development.log")
        .expect("failed to open development.log");

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_max_level(Level::INFO)
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3001".to_string());
    let addr = format!("0.0.0.0:{port}");

    let app = Router::new()
        .route("/up", get(|| async { "ok" }))
        .route("/catalog", get(|| async { Json(CATALOG) }))
        .route("/combinations", post(combinations))
        .route("/suggest", post(suggestion))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        );

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    eprintln!("Listening on {addr}");
    axum::serve(listener, app).await.unwrap();
}
