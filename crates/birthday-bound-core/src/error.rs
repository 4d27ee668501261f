// crates/birthday-bound-core/src/error.rs
// ============================================================================
// Module: Birthday Bound Errors
// Description: Error taxonomy for collision-probability computations.
// Purpose: Fail fast on domain violations instead of propagating inf/NaN.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Every computation in this crate is pure and synchronous, so errors are
//! local and immediate. There are no retries and no partial results: callers
//! either supply valid inputs and receive a value, or receive one of the
//! variants below.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised by estimators, solvers, simulations, and scenarios.
///
/// # Invariants
/// - Messages are stable, lowercase, and safe for display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollisionError {
    /// An input lies outside the mathematical domain of the operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The input is valid but too large for the requested procedure.
    #[error("unsupported input: {0}")]
    Unsupported(String),
}

impl CollisionError {
    /// Builds an [`CollisionError::InvalidArgument`] from a message.
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Builds an [`CollisionError::Unsupported`] from a message.
    pub(crate) fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported(message.into())
    }
}

/// Result alias for collision computations.
pub type CollisionResult<T> = Result<T, CollisionError>;
