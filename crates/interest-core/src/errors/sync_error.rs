/// Remote profile-sync errors.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("profile sync rejected for user {user_id}: {reason}")]
    Rejected { user_id: String, reason: String },

    #[error("profile sync unavailable: {reason}")]
    Unavailable { reason: String },
}
