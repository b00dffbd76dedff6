//! # interest-selection
//!
//! Picks at most one candidate per call. Candidates are ranked by score,
//! filtered through the eligibility rules, and gated by a rate limiter shared
//! across all conversations.

pub mod gate;
pub mod rate_limiter;
pub mod ranking;
pub mod rules;

pub use gate::{SelectionGate, SelectionOutcome};
pub use rate_limiter::RateLimiter;
pub use rules::Ineligibility;
