//! Operator trace hooks.
//!
//! Events go through `tracing` when the feature is enabled; wire a
//! subscriber in the binary layer to see them.

#[cfg(feature = "tracing")]
pub(crate) fn emit_op(enabled: bool, op: &'static str, input: usize, output: usize) {
    if enabled {
        tracing::trace!(op, input, output, "operator evaluated");
    }
}

#[cfg(feature = "tracing")]
pub(crate) fn emit_fault(enabled: bool, op: &'static str, fault: &crate::OpError) {
    if enabled {
        tracing::debug!(op, %fault, "operator faulted");
    }
}

#[cfg(feature = "tracing")]
pub(crate) fn emit_skip(enabled: bool, op: &'static str) {
    if enabled {
        tracing::trace!(op, "carried fault, operator skipped");
    }
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn emit_op(_enabled: bool, _op: &'static str, _input: usize, _output: usize) { /* no-op */
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn emit_fault(_enabled: bool, _op: &'static str, _fault: &crate::OpError) { /* no-op */
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn emit_skip(_enabled: bool, _op: &'static str) { /* no-op */
}
