//! Priority-list genetic optimizer for RCPSP.
//!
//! Individuals are topologically admissible permutations of task ids,
//! decoded to a schedule by SSGS (`crate::scheduler`) and scored by
//! makespan. Crossover and mutation are precedence-aware so that every
//! individual the loop ever touches stays admissible without repair.
//!
//! # Operators
//!
//! - [`operators::pox_crossover`]: Precedence-preserving order-based
//!   crossover (Bierwirth et al., 1996).
//! - [`operators::swap_mutation`]: precedence-safe swap with bounded
//!   resampling.
//!
//! # Reference
//! Hartmann (1998), "A competitive genetic algorithm for
//! resource-constrained project scheduling"

mod chromosome;
mod evolve;
pub mod operators;

pub use chromosome::random_admissible_permutation;
pub use evolve::{evolve, initial_population, EvolutionResult, Population, StoppedReason};
