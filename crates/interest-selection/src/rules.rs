use std::collections::HashSet;

use interest_core::config::SelectionConfig;
use interest_core::models::Candidate;

/// Why a candidate was passed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ineligibility {
    Accepted,
    CoolingDown,
    AlreadyAdopted,
    ImmediateRepeat,
    BelowMinScore,
    TooFewMentions,
    Disliked,
}

/// Inputs shared by every candidate check in one selection pass.
pub struct RuleContext<'a> {
    pub now: i64,
    /// Normalized adopted interests.
    pub existing: &'a HashSet<String>,
    /// Normalized phrase last suggested in this conversation.
    pub last_suggested: Option<&'a str>,
    pub config: &'a SelectionConfig,
}

/// Run the eligibility rules in order; the first failing rule is reported.
pub fn check(candidate: &Candidate, ctx: &RuleContext<'_>) -> Result<(), Ineligibility> {
    let cfg = ctx.config;
    if candidate.accepted {
        return Err(Ineligibility::Accepted);
    }
    if candidate.is_cooling_down(ctx.now) {
        return Err(Ineligibility::CoolingDown);
    }
    if ctx.existing.contains(&candidate.phrase) {
        return Err(Ineligibility::AlreadyAdopted);
    }
    if ctx.last_suggested == Some(candidate.phrase.as_str()) {
        return Err(Ineligibility::ImmediateRepeat);
    }
    if candidate.score < cfg.min_score_to_suggest {
        return Err(Ineligibility::BelowMinScore);
    }
    if candidate.mention_count < cfg.min_mentions && !bypasses_mention_floor(candidate, cfg) {
        return Err(Ineligibility::TooFewMentions);
    }
    if candidate.disliked_count >= cfg.max_dislikes_before_removal {
        return Err(Ineligibility::Disliked);
    }
    Ok(())
}

/// A single strong mention may stand in for `min_mentions`.
fn bypasses_mention_floor(candidate: &Candidate, cfg: &SelectionConfig) -> bool {
    if cfg.strong_bypass_unigrams_only && candidate.token_count() > 1 {
        return false;
    }
    candidate.score >= cfg.strong_single_mention_threshold
}
