//! Typed errors for the RCPSP core.
//!
//! Only `build_project` can fail; the decoder and the genetic operators are
//! total on a validated `ProjectIndex` and never return an error.
//!
//! Negative durations, requirements, and capacities are not a variant here:
//! `RawProject`'s fields are `u64`, so the type system discharges that
//! failure mode at the API boundary rather than this enum catching it at
//! runtime. See DESIGN.md for the full note.

use thiserror::Error;

/// A violation detected while validating a [`crate::model::RawProject`].
///
/// Each variant carries enough context (ids, offending values) for a caller
/// to produce a precise diagnostic without re-deriving it from a message
/// string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectError {
    /// `requirements.len()` disagreed with `durations.len()`: there is no
    /// single offending task in this case, just a mismatched outer count.
    #[error("requirements has {found} rows, expected one per task ({expected})")]
    RequirementCountMismatch { found: usize, expected: usize },

    /// A requirement row's length disagreed with `capacities.len()`.
    #[error("task {task} has {found} resource requirements, expected {expected}")]
    RequirementShapeMismatch {
        task: usize,
        found: usize,
        expected: usize,
    },

    /// A precedence pair referenced a task id outside `[0, n)`.
    #[error("precedence ({u}, {v}) references out-of-range task id")]
    DanglingPrecedence { u: usize, v: usize },

    /// Fewer than two tasks were supplied (source and sink are mandatory).
    #[error("project must contain at least a source and a sink task, got {n} tasks")]
    TooFewTasks { n: usize },

    /// The source task (id 0) had a nonzero duration or requirement.
    #[error("source task must have zero duration and zero requirements")]
    InvalidSource,

    /// The sink task (id n-1) had a nonzero duration or requirement.
    #[error("sink task must have zero duration and zero requirements")]
    InvalidSink,

    /// Some task other than the sink has no precedence into the sink, or
    /// some task other than the source has no precedence from the source,
    /// making the source/sink invariants from §3 unsatisfiable.
    #[error("task {task} is not reachable from the source")]
    UnreachableFromSource { task: usize },

    /// Mirrors [`ProjectError::UnreachableFromSource`] for the sink.
    #[error("task {task} cannot reach the sink")]
    CannotReachSink { task: usize },

    /// A task's requirement for some resource exceeds that resource's
    /// capacity, making the project infeasible to schedule under any
    /// priority list.
    #[error(
        "task {task} requires {required} units of resource {resource}, which has only {capacity}"
    )]
    CapacityExceeded {
        task: usize,
        resource: usize,
        required: u64,
        capacity: u64,
    },

    /// The precedence relation contains a cycle; no topological order
    /// exists.
    #[error("precedence graph contains a cycle involving task {task}")]
    Cycle { task: usize },
}

/// A violation detected while validating an [`crate::config::EvolveConfig`].
///
/// `evolve` treats an invalid config as a caller programming error and
/// panics on it (see [`crate::config::EvolveConfig::validate`]'s doc
/// comment); this type exists so a caller that wants to validate ahead of
/// time, without risking that panic, has a typed result to match on.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// `population_size` was zero.
    #[error("population_size must be at least 1")]
    ZeroPopulationSize,

    /// `tournament_k` was zero.
    #[error("tournament_k must be at least 1")]
    ZeroTournamentSize,

    /// `tournament_k` exceeded `population_size`.
    #[error("tournament_k ({tournament_k}) exceeds population_size ({population_size})")]
    TournamentSizeExceedsPopulation {
        tournament_k: usize,
        population_size: usize,
    },

    /// `elitism` was at or beyond `population_size`, leaving no room for
    /// offspring.
    #[error("elitism ({elitism}) must be less than population_size ({population_size})")]
    ElitismExceedsPopulation {
        elitism: usize,
        population_size: usize,
    },

    /// A probability field fell outside `[0.0, 1.0]`.
    #[error("{field} must be within [0.0, 1.0], got {value}")]
    RateOutOfRange { field: &'static str, value: f64 },

    /// `workers` was zero.
    #[error("workers must be at least 1")]
    ZeroWorkers,
}
