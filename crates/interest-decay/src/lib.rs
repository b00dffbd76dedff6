//! # interest-decay
//!
//! Candidate store maintenance: exponential time decay between messages and
//! mention accumulation for each extracted phrase.

pub mod engine;
pub mod formula;

pub use engine::DecayEngine;
pub use formula::{decay_factor, decayed_score};
