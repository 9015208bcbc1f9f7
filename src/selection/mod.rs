//! Weighted word selection
//!
//! Words are drawn with probability proportional to their practice weight,
//! so the least practiced words come up most often.

pub mod batch;
pub mod sampler;

// Re-exports
pub use batch::select_batch;
pub use sampler::select;
