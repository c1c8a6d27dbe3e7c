//! Precedence index: adjacency, in-degree, and transitive reachability.
//!
//! Built once from the raw precedence set and thereafter immutable. The
//! reachability table answers "is `v` a transitive successor of `u`?" in
//! O(1), which the swap-mutation legality check (ga::operators) needs on
//! every mutation attempt.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use crate::error::ProjectError;

/// Forward/backward adjacency and transitive reachability over the task DAG.
#[derive(Debug, Clone)]
pub struct PrecedenceIndex {
    successors: Vec<Vec<usize>>,
    predecessors: Vec<Vec<usize>>,
    in_degree: Vec<usize>,
    /// `reachable[u][v]` is true iff `v` is a (transitive) successor of `u`.
    reachable: Vec<Vec<bool>>,
}

impl PrecedenceIndex {
    /// Builds the index from `n` tasks and a raw precedence pair list.
    ///
    /// Fails with [`ProjectError::Cycle`] if the precedence relation is not
    /// acyclic. Dangling ids should already have been rejected by the
    /// caller ([`crate::validation::build_project`]) before this runs.
    pub fn build(n: usize, precedences: &[(usize, usize)]) -> Result<Self, ProjectError> {
        let mut successors = vec![Vec::new(); n];
        let mut predecessors = vec![Vec::new(); n];
        let mut in_degree = vec![0usize; n];

        for &(u, v) in precedences {
            successors[u].push(v);
            predecessors[v].push(u);
            in_degree[v] += 1;
        }

        let topo_order = topological_order(n, &successors, &in_degree)?;
        let reachable = compute_reachability(n, &successors, &topo_order);

        Ok(Self {
            successors,
            predecessors,
            in_degree,
            reachable,
        })
    }

    /// Direct successors of task `u`, in insertion order.
    pub fn successors(&self, u: usize) -> &[usize] {
        &self.successors[u]
    }

    /// Direct predecessors of task `v`, in insertion order.
    pub fn predecessors(&self, v: usize) -> &[usize] {
        &self.predecessors[v]
    }

    /// In-degree of every task, indexed by id. Callers that mutate their
    /// own copy (e.g. the random admissible permutation generator) should
    /// clone this rather than mutate the index's own copy.
    pub fn in_degree(&self) -> &[usize] {
        &self.in_degree
    }

    /// Whether `v` is a transitive successor of `u` (equivalently, `u` is a
    /// transitive predecessor of `v`). O(1).
    pub fn reaches(&self, u: usize, v: usize) -> bool {
        self.reachable[u][v]
    }
}

/// Kahn's algorithm, used purely to certify acyclicity (the order returned
/// is discarded by callers that don't need it — [`ProjectIndex::natural_order`]
/// recomputes its own tie-broken order for determinism).
fn topological_order(
    n: usize,
    successors: &[Vec<usize>],
    in_degree: &[usize],
) -> Result<Vec<usize>, ProjectError> {
    let mut degree = in_degree.to_vec();
    let mut ready: Vec<usize> = (0..n).filter(|&i| degree[i] == 0).collect();
    let mut order = Vec::with_capacity(n);

    while let Some(u) = ready.pop() {
        order.push(u);
        for &v in &successors[u] {
            degree[v] -= 1;
            if degree[v] == 0 {
                ready.push(v);
            }
        }
    }

    if order.len() != n {
        // Some task never reached in-degree zero: it lies on a cycle.
        let task = (0..n).find(|&i| degree[i] != 0).unwrap_or(0);
        return Err(ProjectError::Cycle { task });
    }

    Ok(order)
}

/// Computes `reachable[u][v]` by folding successors' reachable sets in
/// reverse topological order: every task's reachable set is the union of
/// its direct successors' reachable sets, plus those direct successors
/// themselves.
fn compute_reachability(
    n: usize,
    successors: &[Vec<usize>],
    topo_order: &[usize],
) -> Vec<Vec<bool>> {
    let mut reachable = vec![vec![false; n]; n];
    for &u in topo_order.iter().rev() {
        for &v in &successors[u] {
            let v_row = reachable[v].clone();
            let u_row = &mut reachable[u];
            u_row[v] = true;
            for (w, hit) in v_row.into_iter().enumerate() {
                if hit {
                    u_row[w] = true;
                }
            }
        }
    }
    reachable
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_chain() {
        // 0 -> 1 -> 2 -> 3
        let idx = PrecedenceIndex::build(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        assert_eq!(idx.successors(0), &[1]);
        assert_eq!(idx.predecessors(3), &[2]);
        assert_eq!(idx.in_degree(), &[0, 1, 1, 1]);
        assert!(idx.reaches(0, 3));
        assert!(idx.reaches(1, 3));
        assert!(!idx.reaches(3, 0));
        assert!(!idx.reaches(2, 1));
    }

    #[test]
    fn test_diamond() {
        // 0 -> {1, 2} -> 3
        let idx = PrecedenceIndex::build(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap();
        assert!(idx.reaches(0, 3));
        assert!(idx.reaches(1, 3));
        assert!(idx.reaches(2, 3));
        assert!(!idx.reaches(1, 2));
        assert!(!idx.reaches(2, 1));
    }

    #[test]
    fn test_cycle_rejected() {
        let result = PrecedenceIndex::build(3, &[(0, 1), (1, 2), (2, 1)]);
        assert!(matches!(result, Err(ProjectError::Cycle { .. })));
    }

    #[test]
    fn test_self_loop_rejected() {
        let result = PrecedenceIndex::build(2, &[(0, 0)]);
        assert!(matches!(result, Err(ProjectError::Cycle { .. })));
    }

    #[test]
    fn test_disconnected_tasks_no_cycle() {
        let idx = PrecedenceIndex::build(4, &[(0, 1)]).unwrap();
        assert!(!idx.reaches(2, 3));
        assert!(!idx.reaches(0, 2));
    }
}
