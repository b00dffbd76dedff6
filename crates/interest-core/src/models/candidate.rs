use serde::{Deserialize, Serialize};

/// A scored phrase tracked within one conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Normalized lowercase phrase, 1–3 tokens.
    pub phrase: String,
    /// Accumulated, decayed score. Never negative.
    pub score: f64,
    pub mention_count: u32,
    /// Seconds since epoch.
    pub last_seen_at: i64,
    pub last_shown_at: Option<i64>,
    /// Ineligible for selection while `now < cooldown_until`.
    pub cooldown_until: i64,
    pub disliked_count: u32,
    /// Accepted phrases are never selected again.
    pub accepted: bool,
}

impl Candidate {
    /// Create an unscored candidate first seen at `now`.
    pub fn new(phrase: impl Into<String>, now: i64) -> Self {
        Self {
            phrase: phrase.into(),
            score: 0.0,
            mention_count: 0,
            last_seen_at: now,
            last_shown_at: None,
            cooldown_until: 0,
            disliked_count: 0,
            accepted: false,
        }
    }

    /// Record one mention carrying `weight`.
    pub fn record_mention(&mut self, weight: f64, now: i64) {
        self.set_score(self.score + weight);
        self.mention_count = self.mention_count.saturating_add(1);
        self.last_seen_at = now;
    }

    /// Multiply the score by `factor`, clamping at zero.
    pub fn scale_score(&mut self, factor: f64) {
        self.set_score(self.score * factor);
    }

    /// Assign a score, clamping negatives and NaN to zero.
    pub fn set_score(&mut self, score: f64) {
        self.score = if score.is_nan() { 0.0 } else { score.max(0.0) };
    }

    pub fn is_cooling_down(&self, now: i64) -> bool {
        self.cooldown_until > now
    }

    /// Extend the cooldown to at least `until`; never shortens an existing one.
    pub fn extend_cooldown(&mut self, until: i64) {
        self.cooldown_until = self.cooldown_until.max(until);
    }

    pub fn token_count(&self) -> usize {
        self.phrase.split(' ').count()
    }
}
