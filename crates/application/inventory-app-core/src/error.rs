use inventory_core::CoreError;

/// A transition rejected its action. The state it was applied to is left as
/// it was.
#[derive(Debug, thiserror::Error)]
#[error("`{tag}` transition failed: {source}")]
pub struct ReduceError {
    pub tag: String,
    #[source]
    pub source: CoreError,
}
