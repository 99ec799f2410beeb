use thiserror::Error;

/// Caller-visible configuration errors, rejected at construction time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("catalog has no subject requests")]
    EmptyRequests,
    #[error("invalid individuals_count option: must be greater than zero")]
    ZeroIndividuals,
    #[error("invalid selection_count option: must be less than individuals_count")]
    SelectionNotLessThanPopulation,
    #[error("invalid mutation_chance option: {0} is not in [0, 100]")]
    MutationChanceOutOfRange(u8),
    #[error("lock references unknown subject request id: {0}")]
    LockReferencesUnknownRequest(u64),
}

/// Catalog-lookup failures. Never occurs inside the core loop once
/// construction succeeds; only surfaced at the library boundary.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LookupError {
    #[error("unknown subject request id: {0}")]
    UnknownRequestId(u64),
}
