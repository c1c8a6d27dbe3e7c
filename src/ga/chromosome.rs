//! Random admissible permutation generation.

use rand::Rng;

use crate::model::ProjectIndex;

/// Draws a uniformly random topologically admissible permutation of
/// `0..project.task_count()`.
///
/// Kahn-style selection: maintain the ready set (tasks with in-degree
/// zero in a private copy of the in-degree vector); at each step pick one
/// ready task uniformly at random, append it, and promote any successor
/// whose in-degree drops to zero. The source is always first, the sink
/// always last.
///
/// # Reference
/// Kolisch & Hartmann (2006), "Experimental investigation of heuristics
/// for RCPSP: an update"
pub fn random_admissible_permutation<R: Rng>(project: &ProjectIndex, rng: &mut R) -> Vec<usize> {
    let n = project.task_count();
    let precedence = project.precedence();
    let mut in_degree = precedence.in_degree().to_vec();
    let mut ready: Vec<usize> = (0..n).filter(|&i| in_degree[i] == 0).collect();
    let mut order = Vec::with_capacity(n);

    while !ready.is_empty() {
        let idx = rng.random_range(0..ready.len());
        let task = ready.swap_remove(idx);
        order.push(task);
        for &succ in precedence.successors(task) {
            in_degree[succ] -= 1;
            if in_degree[succ] == 0 {
                ready.push(succ);
            }
        }
    }

    order
}
