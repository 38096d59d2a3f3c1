//! Model-output resolution: parse the raw reply, or report why not.
//!
//! The daemon chooses availability over correctness: any invocation or parse
//! failure ends in a canned, schema-correct payload and HTTP 200. The
//! substitution itself happens in the route pipeline so the degradation
//! policy stays visible there; this module only decides which side of the
//! branch applies.

use serde_json::Value;
use thiserror::Error;

use crate::gemini::ModelError;

/// Why a canned payload was substituted for the model's reply.
#[derive(Debug, Error)]
pub enum FallbackReason {
    /// The outbound invocation failed (network, auth, quota, server error).
    #[error("model invocation failed: {0}")]
    Invocation(ModelError),

    /// The model replied, but the text is not valid JSON.
    #[error("model reply is not valid JSON: {0}")]
    MalformedJson(serde_json::Error),
}

/// Parse the model's raw reply.
///
/// No schema validation happens here: any syntactically valid JSON passes
/// through unmodified, even if keys the client expects are missing.
pub fn resolve(outcome: Result<String, ModelError>) -> Result<Value, FallbackReason> {
    let text = outcome.map_err(FallbackReason::Invocation)?;
    serde_json::from_str(&text).map_err(FallbackReason::MalformedJson)
}
