use crate::types::DbId;

/// Domain-level error taxonomy shared across the workspace.
///
/// `NotFound` deliberately covers both "does not exist" and "exists but is
/// owned by someone else": the two cases must be indistinguishable to the
/// caller so resource ids cannot be enumerated across owners.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Resource is absent or not owned by the caller.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Malformed input (e.g. an over-long category name).
    #[error("{0}")]
    Validation(String),

    /// Duplicate where uniqueness is required (e.g. category name per owner).
    #[error("{0}")]
    Conflict(String),

    /// Legal request, illegal state transition (e.g. deleting the default
    /// category).
    #[error("{0}")]
    InvalidOperation(String),

    /// Missing or invalid credential.
    #[error("{0}")]
    Unauthorized(String),

    /// Invariant violation. Never caller-triggerable; indicates a
    /// provisioning or integrity bug and is logged server-side.
    #[error("{0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for the ownership-guard failure case.
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        CoreError::NotFound { entity, id }
    }
}
