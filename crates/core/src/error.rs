#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Stored data violates an invariant the application relies on.
    #[error("Data integrity violation: {0}")]
    Integrity(String),
}
