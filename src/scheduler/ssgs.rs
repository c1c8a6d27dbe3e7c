//! Serial Schedule Generation Scheme: priority list → feasible schedule.

use super::ResourceProfile;
use crate::model::ProjectIndex;

/// A feasible schedule: one start time per task, indexed by task id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    starts: Vec<u64>,
}

impl Schedule {
    /// Start time of task `i`.
    pub fn start(&self, i: usize) -> u64 {
        self.starts[i]
    }

    /// Finish time of task `i` given its duration in `project`.
    pub fn finish(&self, i: usize, project: &ProjectIndex) -> u64 {
        self.starts[i] + project.task(i).duration
    }

    /// All start times, indexed by task id.
    pub fn starts(&self) -> &[u64] {
        &self.starts
    }

    /// The schedule's makespan: the sink task's finish time.
    ///
    /// Since the sink has zero duration, this equals its start time.
    pub fn makespan(&self, project: &ProjectIndex) -> u64 {
        self.finish(project.sink(), project)
    }
}

/// Decodes a priority list into a feasible schedule via SSGS.
///
/// Walks `priority_list` in order. For each task, finds the earliest
/// instant that is both precedence-feasible (every predecessor already
/// finished) and capacity-feasible (every required resource has spare
/// capacity for the task's full duration), then reserves that capacity.
///
/// `priority_list` must be a permutation of `0..project.task_count()` that
/// is precedence-admissible (every task appears after all its
/// predecessors); [`crate::model::ProjectIndex::natural_order`] and the
/// genetic operators in this crate only ever produce such permutations.
/// This function never fails: any admissible permutation decodes to some
/// feasible schedule, since resource profiles are unbounded in time.
pub fn decode(project: &ProjectIndex, priority_list: &[usize]) -> Schedule {
    let n = project.task_count();
    let m = project.resource_count();
    let mut starts = vec![0u64; n];
    let mut scheduled = vec![false; n];

    let mut profiles: Vec<ResourceProfile> = project
        .resources()
        .iter()
        .map(|r| ResourceProfile::new(r.capacity, project.horizon() + 1))
        .collect();

    for &task_id in priority_list {
        let task = project.task(task_id);

        let earliest = project
            .precedence()
            .predecessors(task_id)
            .iter()
            .map(|&p| {
                debug_assert!(scheduled[p], "priority list is not precedence-admissible");
                starts[p] + project.task(p).duration
            })
            .max()
            .unwrap_or(0);

        let start = find_feasible_start(&profiles, task.duration, &task.requirements, earliest);

        for k in 0..m {
            let required = task.requirements[k];
            if required > 0 {
                profiles[k].reserve(start, task.duration, required);
            }
        }

        starts[task_id] = start;
        scheduled[task_id] = true;
    }

    Schedule { starts }
}

/// Finds the earliest instant at or after `earliest` where every resource
/// in `requirements` has spare capacity for `duration`.
///
/// Advances past the first violation found in any resource and re-checks
/// from scratch, rather than computing the exact recovery instant: simple
/// and correct, at the cost of the documented worst-case complexity.
fn find_feasible_start(
    profiles: &[ResourceProfile],
    duration: u64,
    requirements: &[u64],
    earliest: u64,
) -> u64 {
    if duration == 0 {
        return earliest;
    }

    let mut t = earliest;
    loop {
        let violation = requirements
            .iter()
            .enumerate()
            .filter(|&(_, &required)| required > 0)
            .find_map(|(k, &required)| profiles[k].first_violation(t, duration, required));

        match violation {
            Some(v) => t = v + 1,
            None => return t,
        }
    }
}
