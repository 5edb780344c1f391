// ============================================================================
// Domain Layer
// ============================================================================
//
// Plain values and the builders that assemble them. No I/O happens here;
// callers own every value they build.
//
// ============================================================================

pub mod order;
