//! Request bodies for the advice endpoints.

use crate::profile::TeacherProfile;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Free-text crisis description, usually a voice transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrisisRequest {
    pub transcript: String,
    pub profile: Option<TeacherProfile>,
}

/// One of the app's quick filter chips, or any free-form situation text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickSituationRequest {
    pub situation: String,
    pub profile: Option<TeacherProfile>,
}

/// Whether the advice previously handed out held up in the classroom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackOutcome {
    Worked,
    Failed,
}

impl FeedbackOutcome {
    /// Lowercase verb used inside prompt text.
    pub fn verb(&self) -> &'static str {
        match self {
            FeedbackOutcome::Worked => "worked",
            FeedbackOutcome::Failed => "failed",
        }
    }
}

impl fmt::Display for FeedbackOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedbackOutcome::Worked => write!(f, "Worked"),
            FeedbackOutcome::Failed => write!(f, "Failed"),
        }
    }
}

/// Outcome report for a previously issued action/strategy pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRequest {
    pub crisis_transcript: String,
    pub action_given: String,
    pub strategy_given: String,
    pub feedback: FeedbackOutcome,
    pub profile: Option<TeacherProfile>,
}

/// A library strategy the teacher wants adapted to their classroom.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhanceStrategyRequest {
    pub strategy_title: String,
    pub strategy_steps: Vec<String>,
    pub profile: Option<TeacherProfile>,
}
