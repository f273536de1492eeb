//! Service-blueprint task flow.
//!
//! The [`TaskGraph`] is built from an [`SbpDocument`](crate::dsl::SbpDocument)
//! by [`TaskGraph::build`], with one edge per `link_to` entry. Editors use it
//! to order tasks and to highlight what a task feeds into.

pub mod builder;
pub mod traversal;
pub mod types;

pub use builder::*;
pub use types::*;
