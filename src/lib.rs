//! Resource-constrained project scheduling core.
//!
//! Four synchronous entry points: [`build_project`] validates raw input
//! into an immutable [`model::ProjectIndex`]; [`ga::initial_population`]
//! and [`ga::evolve`] run the precedence-aware genetic optimizer;
//! [`scheduler::decode`] runs the Serial Schedule Generation Scheme
//! decoder standalone, for callers wishing to rescore a specific priority
//! list. [`metrics::Metrics`] computes makespan, utilization, and
//! concurrency from any decoded schedule.
//!
//! This crate has no I/O and no logging: it is a pure computational core
//! meant to sit beneath a CLI or service layer that owns presentation,
//! configuration binding, and observability.

pub mod config;
pub mod error;
pub mod ga;
pub mod metrics;
pub mod model;
pub mod scheduler;
pub(crate) mod validation;

pub use config::EvolveConfig;
pub use error::{ConfigError, ProjectError};
pub use ga::{evolve, initial_population, EvolutionResult, Population, StoppedReason};
pub use metrics::Metrics;
pub use model::{ProjectIndex, RawProject, Resource, Task};
pub use scheduler::{decode, Schedule};
pub use validation::build_project;
