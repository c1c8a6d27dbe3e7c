//! RCPSP domain model.
//!
//! Provides the core data types for representing a resource-constrained
//! project scheduling problem and its validated in-memory form.
//!
//! # Reference
//! Kolisch & Hartmann (2006), "Experimental investigation of heuristics
//! for the RCPSP: A classification and dynamic programming"

mod precedence;
mod project;

pub use precedence::PrecedenceIndex;
pub use project::{ProjectIndex, RawProject, Resource, Task};
pub(crate) use project::validate_requirement_shapes;
