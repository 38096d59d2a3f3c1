//! Typed responses for the informational endpoints.
//!
//! The five advice endpoints return the model's JSON verbatim and have no
//! response structs; only the banner and health check are typed.

use serde::{Deserialize, Serialize};

/// `GET /` banner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub version: String,
    pub endpoints: Vec<String>,
}

/// `GET /health` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub ai_model: String,
}
