// ============================================================================
// Order Errors
// ============================================================================
//
// Building an order never fails. The only fallible step is turning
// untyped input (CLI arguments, config strings) into a `Size`.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    #[error("Unknown pizza size: {0:?} (expected small, medium or large)")]
    UnknownSize(String),
}
