//! Error types for byte inspection
//!
//! [`InspectError`] is returned to the immediate caller of
//! [`inspect`](super::inspect). Inspection is never retried or clamped: a
//! request for more bytes than the region holds fails before any byte is read.

use std::fmt;

/// Errors that can occur while inspecting a byte region
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InspectError {
    /// Requested more bytes than the region holds
    OutOfBounds { requested: usize, available: usize },
}

impl fmt::Display for InspectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InspectError::OutOfBounds {
                requested,
                available,
            } => {
                write!(
                    f,
                    "Out of bounds: requested {} byte{}, region holds {}",
                    requested,
                    if *requested == 1 { "" } else { "s" },
                    available
                )
            }
        }
    }
}

impl std::error::Error for InspectError {}
