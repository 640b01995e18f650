use thiserror::Error;

/// Failures of the task and theme stores.
///
/// Only `Validation` is ever returned to callers; the other two are logged
/// and recovered inside the stores.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("task text must not be empty")]
    Validation,

    #[error("corrupt data in slot `{slot}`: {reason}")]
    CorruptPersistedState { slot: &'static str, reason: String },

    #[error("failed to write slot `{slot}`: {source:#}")]
    DurablePersistFailure {
        slot: &'static str,
        #[source]
        source: anyhow::Error,
    },
}
