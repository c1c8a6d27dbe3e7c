//! Input validation for RCPSP projects.
//!
//! Checks structural integrity of a [`RawProject`] before it becomes a
//! [`ProjectIndex`]:
//! - Requirement array shapes
//! - Dangling precedence ids
//! - Source/sink invariants (task 0 is the source, task `n-1` the sink,
//!   every task reachable from the source and able to reach the sink)
//! - Per-task requirement not exceeding resource capacity
//! - Acyclicity (delegated to [`PrecedenceIndex::build`])
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use crate::error::ProjectError;
use crate::model::{PrecedenceIndex, ProjectIndex, RawProject, Resource, Task};

/// Validates and indexes a [`RawProject`], producing a read-only
/// [`ProjectIndex`].
///
/// Fails on the first violation encountered, in the order: shape
/// mismatches, dangling precedence ids, too few tasks, cycles, source/sink
/// invariants, then per-task capacity overruns.
pub fn build_project(raw: RawProject) -> Result<ProjectIndex, ProjectError> {
    crate::model::validate_requirement_shapes(&raw)?;

    let n = raw.durations.len();
    let m = raw.capacities.len();

    if n < 2 {
        return Err(ProjectError::TooFewTasks { n });
    }

    for &(u, v) in &raw.precedences {
        if u >= n || v >= n {
            return Err(ProjectError::DanglingPrecedence { u, v });
        }
    }

    let precedence = PrecedenceIndex::build(n, &raw.precedences)?;

    let source = 0;
    let sink = n - 1;

    if raw.durations[source] != 0 || raw.requirements[source].iter().any(|&r| r != 0) {
        return Err(ProjectError::InvalidSource);
    }
    if raw.durations[sink] != 0 || raw.requirements[sink].iter().any(|&r| r != 0) {
        return Err(ProjectError::InvalidSink);
    }

    for task in 0..n {
        if task != source && !precedence.reaches(source, task) {
            return Err(ProjectError::UnreachableFromSource { task });
        }
        if task != sink && !precedence.reaches(task, sink) {
            return Err(ProjectError::CannotReachSink { task });
        }
    }

    for task in 0..n {
        for resource in 0..m {
            let required = raw.requirements[task][resource];
            let capacity = raw.capacities[resource];
            if required > capacity {
                return Err(ProjectError::CapacityExceeded {
                    task,
                    resource,
                    required,
                    capacity,
                });
            }
        }
    }

    let tasks: Vec<Task> = (0..n)
        .map(|id| Task {
            id,
            duration: raw.durations[id],
            requirements: raw.requirements[id].clone(),
        })
        .collect();
    let resources: Vec<Resource> = (0..m)
        .map(|id| Resource {
            id,
            capacity: raw.capacities[id],
        })
        .collect();

    Ok(ProjectIndex::new(tasks, resources, precedence))
}
