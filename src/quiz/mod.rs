//! Adaptive quiz rounds over wordlists and practice progress

pub mod request;
pub mod round;
pub mod service;

// Re-exports
pub use request::{
    Batch, DEFAULT_LIMIT, SelectionRequest, Submission, SubmissionOutcome, normalize_limit,
};
pub use round::{Round, answer_matches};
pub use service::QuizService;
