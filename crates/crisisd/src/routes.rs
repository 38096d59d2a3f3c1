//! API routes for crisisd.
//!
//! The five advice endpoints share one pipeline: build profile context,
//! compose the prompt, invoke the model, parse or fall back. Every endpoint
//! answers 200 with a schema-correct body even when the model is unreachable;
//! malformed client JSON is rejected by the extractor before a handler runs.

use crate::fallbacks;
use crate::prompts;
use crate::resolver;
use crate::server::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use crisis_common::{
    CrisisRequest, EnhanceStrategyRequest, FeedbackRequest, HealthResponse,
    QuickSituationRequest, StatusResponse, TeacherProfile,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

type AppStateArc = Arc<AppState>;

pub fn info_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}

pub fn advice_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/solve_crisis", post(solve_crisis))
        .route("/quick_situation", post(quick_situation))
        .route("/enhance_strategy", post(enhance_strategy))
        .route("/record_feedback", post(record_feedback))
        .route("/generate_energizer", post(generate_energizer))
}

// ============================================================================
// Info Routes
// ============================================================================

async fn root() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "🟢 Classroom Crisis OS Backend Running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: vec![
            "/solve_crisis".to_string(),
            "/quick_situation".to_string(),
            "/enhance_strategy".to_string(),
            "/record_feedback".to_string(),
            "/health".to_string(),
        ],
    })
}

async fn health_check(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        ai_model: state.model_id.clone(),
    })
}

// ============================================================================
// Advice Routes
// ============================================================================

/// Invoke → resolve → explicit fallback branch, shared by all five
/// capabilities. The fallback is computed by the caller before invocation so
/// request-derived fallbacks need no second look at the request here.
async fn complete(
    state: &AppState,
    system_instruction: &'static str,
    prompt: String,
    fallback: Value,
) -> Json<Value> {
    let outcome = state.model.generate_json(system_instruction, &prompt).await;
    match resolver::resolve(outcome) {
        Ok(body) => Json(body),
        Err(reason) => {
            warn!("[F]  Substituting canned response: {}", reason);
            Json(fallback)
        }
    }
}

/// Main crisis endpoint: transcript in, immediate action + strategy out.
async fn solve_crisis(
    State(state): State<AppStateArc>,
    Json(req): Json<CrisisRequest>,
) -> Json<Value> {
    info!("[C]  Teacher said: {}", req.transcript);

    let prompt = prompts::crisis_prompt(req.profile.as_ref(), &req.transcript);
    complete(
        &state,
        prompts::CRISIS_SYSTEM_INSTRUCTION,
        prompt,
        fallbacks::crisis(),
    )
    .await
}

/// Three quick solutions for a situation chip.
async fn quick_situation(
    State(state): State<AppStateArc>,
    Json(req): Json<QuickSituationRequest>,
) -> Json<Value> {
    info!("[Q]  Quick situation: {}", req.situation);

    let prompt = prompts::quick_situation_prompt(req.profile.as_ref(), &req.situation);
    complete(
        &state,
        prompts::SITUATION_SYSTEM_INSTRUCTION,
        prompt,
        fallbacks::quick_situation(),
    )
    .await
}

/// Adapt a library strategy to the teacher's classroom.
async fn enhance_strategy(
    State(state): State<AppStateArc>,
    Json(req): Json<EnhanceStrategyRequest>,
) -> Json<Value> {
    info!("[E]  Enhancing strategy: {}", req.strategy_title);

    let fallback = fallbacks::enhance_strategy(&req);
    let prompt = prompts::enhance_strategy_prompt(
        req.profile.as_ref(),
        &req.strategy_title,
        &req.strategy_steps,
    );
    complete(&state, prompts::ENHANCER_SYSTEM_INSTRUCTION, prompt, fallback).await
}

/// Analyze why earlier advice worked or failed.
async fn record_feedback(
    State(state): State<AppStateArc>,
    Json(req): Json<FeedbackRequest>,
) -> Json<Value> {
    info!("[R]  Feedback: {} for '{}'", req.feedback, req.action_given);

    let fallback = fallbacks::feedback(req.feedback);
    let prompt = prompts::feedback_prompt(
        req.profile.as_ref(),
        &req.crisis_transcript,
        &req.action_given,
        &req.strategy_given,
        req.feedback,
    );
    complete(&state, prompts::FEEDBACK_SYSTEM_INSTRUCTION, prompt, fallback).await
}

/// Generate a custom energizer. The body is the profile itself (or null).
async fn generate_energizer(
    State(state): State<AppStateArc>,
    Json(profile): Json<Option<TeacherProfile>>,
) -> Json<Value> {
    info!("[G]  Generating energizer");

    let prompt = prompts::energizer_prompt(profile.as_ref());
    complete(
        &state,
        prompts::SITUATION_SYSTEM_INSTRUCTION,
        prompt,
        fallbacks::energizer(),
    )
    .await
}
