//! Error types for the studio core.
//!
//! - [`StudioError`]: fatal errors raised while loading, validating or emitting DSL documents.
//!
//! Reference-integrity violations and unresolvable hierarchy chains are not
//! errors; they are returned as ordinary values by [`crate::integrity`] and
//! [`crate::hierarchy`].

pub mod studio_error;

pub use studio_error::StudioError;

/// Convenience alias for studio-level results.
pub type StudioResult<T> = Result<T, StudioError>;
