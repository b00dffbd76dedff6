//! # interest-session
//!
//! Conversation store registry and the per-message pipeline:
//! extract → decay and accumulate → select.

pub mod manager;
pub mod session;

pub use manager::SessionManager;
pub use session::ExtractionSession;
