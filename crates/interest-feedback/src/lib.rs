//! # interest-feedback
//!
//! Applies accept/reject feedback to conversation candidates, keeps the
//! user's adopted-interest list and cross-conversation rejection tally, drives
//! the suggestion pool, and mirrors adopted interests to the remote profile.

pub mod adopted;
pub mod coordinator;
pub mod feedback_processor;
pub mod sync;
pub mod tally;

pub use adopted::AdoptedInterests;
pub use coordinator::{FeedbackCoordinator, RejectOutcome};
pub use feedback_processor::{apply_accept, apply_reject};
pub use sync::SyncDispatcher;
pub use tally::RejectionTally;
