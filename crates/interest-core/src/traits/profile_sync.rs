use crate::errors::InterestResult;

/// Mirrors the adopted-interest list to a remote profile.
///
/// Replace semantics: `tags` is always the full current list.
pub trait IProfileSync: Send + Sync {
    fn replace_interests(&self, user_id: &str, tags: &[String]) -> InterestResult<()>;
}
