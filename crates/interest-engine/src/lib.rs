//! # interest-engine
//!
//! [`InterestEngine`] is the one object a host builds: it owns the
//! conversation stores, the global rate limiter, the user's suggestion pool,
//! and the feedback coordinator, and exposes operations that never fail.
//! Collaborator and internal errors are logged, counted, and degraded to
//! "no suggestion".

pub mod engine;
pub mod options;

pub use engine::InterestEngine;
pub use options::{Collaborators, EngineOptions, LoggingProfileSync};
