//! Shared types for the classroom crisis backend.
//!
//! Value objects only: every type here lives for exactly one request/response
//! cycle and is never persisted.

pub mod profile;
pub mod requests;
pub mod responses;

pub use profile::TeacherProfile;
pub use requests::{
    CrisisRequest, EnhanceStrategyRequest, FeedbackOutcome, FeedbackRequest,
    QuickSituationRequest,
};
pub use responses::{HealthResponse, StatusResponse};
