//! Candidate updates for accept/reject feedback.

use interest_core::config::FeedbackConfig;
use interest_core::models::Candidate;

/// Mark a candidate accepted: score scaled down, long cooldown.
pub fn apply_accept(candidate: &mut Candidate, config: &FeedbackConfig, now: i64) {
    candidate.accepted = true;
    candidate.scale_score(config.accept_score_factor);
    candidate.extend_cooldown(now.saturating_add(config.accept_cooldown_secs));
}

/// Record a dislike: score damped, short cooldown. Returns the new dislike count.
pub fn apply_reject(candidate: &mut Candidate, config: &FeedbackConfig, now: i64) -> u32 {
    candidate.disliked_count = candidate.disliked_count.saturating_add(1);
    candidate.scale_score(config.reject_damping);
    candidate.extend_cooldown(now.saturating_add(config.reject_cooldown_secs));
    candidate.disliked_count
}
