//! Project model: tasks, resources, and the validated project index.
//!
//! A task is identified by a stable integer id in `[0, n)`; task 0 is the
//! source, task `n - 1` is the sink. A resource is identified by an integer
//! id in `[0, m)`. Both carry fixed, non-negative integer attributes — no
//! stochastic durations, no multi-mode tasks, no partially-renewable
//! resources.

use serde::{Deserialize, Serialize};

use super::PrecedenceIndex;
use crate::error::ProjectError;

/// A task to be scheduled.
///
/// Durations and requirements are constant over the task's execution; this
/// crate models a single execution mode per task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable id in `[0, n)`. Id 0 is always the source, id `n - 1` the sink.
    pub id: usize,
    /// Non-negative processing duration.
    pub duration: u64,
    /// Per-resource requirement, indexed the same as [`ProjectIndex::resources`].
    pub requirements: Vec<u64>,
}

/// A renewable resource with a fixed capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Stable id in `[0, m)`.
    pub id: usize,
    /// Units available at every instant over the project horizon.
    pub capacity: u64,
}

/// Boundary input to [`crate::validation::build_project`].
///
/// Plain parallel arrays, matching the wire shape a project-file parser
/// (an external collaborator, out of scope for this crate) would produce.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawProject {
    /// `durations[i]` is task `i`'s processing duration.
    pub durations: Vec<u64>,
    /// `requirements[i][k]` is task `i`'s requirement for resource `k`.
    pub requirements: Vec<Vec<u64>>,
    /// `capacities[k]` is resource `k`'s capacity.
    pub capacities: Vec<u64>,
    /// Ordered pairs `(u, v)` meaning `u` must finish before `v` starts.
    pub precedences: Vec<(usize, usize)>,
}

impl RawProject {
    /// Creates a raw project from its constituent arrays.
    pub fn new(
        durations: Vec<u64>,
        requirements: Vec<Vec<u64>>,
        capacities: Vec<u64>,
        precedences: Vec<(usize, usize)>,
    ) -> Self {
        Self {
            durations,
            requirements,
            capacities,
            precedences,
        }
    }
}

/// A validated, read-only, in-memory project.
///
/// Constructed once by [`crate::validation::build_project`] and shared by
/// reference throughout population initialization, decoding, and the
/// evolution loop. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct ProjectIndex {
    pub(crate) tasks: Vec<Task>,
    pub(crate) resources: Vec<Resource>,
    pub(crate) precedence: PrecedenceIndex,
    /// Safe upper bound on the project horizon: the sum of all task
    /// durations. Used to size resource profiles in the decoder.
    pub(crate) horizon: u64,
}

impl ProjectIndex {
    pub(crate) fn new(
        tasks: Vec<Task>,
        resources: Vec<Resource>,
        precedence: PrecedenceIndex,
    ) -> Self {
        let horizon = tasks.iter().map(|t| t.duration).sum();
        Self {
            tasks,
            resources,
            precedence,
            horizon,
        }
    }

    /// Number of tasks, including source and sink.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Number of resources.
    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    /// Id of the source task. Always 0.
    pub fn source(&self) -> usize {
        0
    }

    /// Id of the sink task. Always `task_count() - 1`.
    pub fn sink(&self) -> usize {
        self.tasks.len() - 1
    }

    /// Task data for id `i`.
    pub fn task(&self, i: usize) -> &Task {
        &self.tasks[i]
    }

    /// All tasks, in id order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Resource data for id `k`.
    pub fn resource(&self, k: usize) -> &Resource {
        &self.resources[k]
    }

    /// All resources, in id order.
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// The precedence index for this project.
    pub fn precedence(&self) -> &PrecedenceIndex {
        &self.precedence
    }

    /// Safe upper bound on the makespan: the sum of all task durations.
    pub fn horizon(&self) -> u64 {
        self.horizon
    }

    /// A deterministic admissible permutation with no genetic optimization:
    /// the topological order Kahn's algorithm produces when ties among
    /// ready tasks are broken by ascending id.
    ///
    /// This resolves the "non-optimized baseline" left open by the
    /// specification (property 6 in the testable-properties list): any
    /// deterministic admissible permutation is an acceptable baseline, and
    /// this is the simplest one to construct from the precedence index
    /// already built at project-index time.
    pub fn natural_order(&self) -> Vec<usize> {
        let n = self.task_count();
        let mut in_degree = self.precedence.in_degree().to_vec();
        let mut ready: std::collections::BTreeSet<usize> = (0..n)
            .filter(|&i| in_degree[i] == 0)
            .collect();
        let mut order = Vec::with_capacity(n);

        while let Some(&next) = ready.iter().next() {
            ready.remove(&next);
            order.push(next);
            for &succ in self.precedence.successors(next) {
                in_degree[succ] -= 1;
                if in_degree[succ] == 0 {
                    ready.insert(succ);
                }
            }
        }

        order
    }
}

pub(crate) fn validate_requirement_shapes(raw: &RawProject) -> Result<(), ProjectError> {
    let n = raw.durations.len();
    let m = raw.capacities.len();
    if raw.requirements.len() != n {
        return Err(ProjectError::RequirementCountMismatch {
            found: raw.requirements.len(),
            expected: n,
        });
    }
    for (i, row) in raw.requirements.iter().enumerate() {
        if row.len() != m {
            return Err(ProjectError::RequirementShapeMismatch {
                task: i,
                found: row.len(),
                expected: m,
            });
        }
    }
    Ok(())
}
