//! Precedence-aware crossover and mutation.

use rand::Rng;

use crate::model::ProjectIndex;

/// Maximum number of resample attempts before giving up and leaving the
/// individual unchanged.
const DEFAULT_SWAP_BUDGET: usize = 8;

/// Precedence-preserving order-based crossover (POX).
///
/// Chooses a crossover point `q` uniformly in `[1, n-1]`. `C1` copies
/// `P1`'s prefix `[0, q)` verbatim, then appends `P2`'s tasks not yet
/// placed, in the order they appear in `P2`. `C2` is built symmetrically
/// with the parents' roles swapped. Both children are permutations of
/// `0..n` and are always admissible: any task appended from a parent's
/// tail is preceded by its own predecessors, which (being admissible in
/// that parent) either already appear in the copied prefix or appear
/// earlier in that parent's sequence and are therefore copied first.
///
/// # Reference
/// Bierwirth, Mattfeld & Kopfer (1996), "On permutation representations
/// for scheduling problems"
pub fn pox_crossover<R: Rng>(p1: &[usize], p2: &[usize], rng: &mut R) -> (Vec<usize>, Vec<usize>) {
    let n = p1.len();
    debug_assert_eq!(n, p2.len());
    if n < 2 {
        return (p1.to_vec(), p2.to_vec());
    }

    let q = rng.random_range(1..n);
    (pox_build_child(p1, p2, q), pox_build_child(p2, p1, q))
}

fn pox_build_child(template: &[usize], donor: &[usize], q: usize) -> Vec<usize> {
    let n = template.len();
    let mut child = Vec::with_capacity(n);
    let mut placed = vec![false; n];

    for &task in &template[..q] {
        child.push(task);
        placed[task] = true;
    }
    for &task in donor {
        if !placed[task] {
            child.push(task);
            placed[task] = true;
        }
    }
    child
}

/// Precedence-safe swap mutation.
///
/// Applied with probability `rate` per individual. Draws two distinct
/// positions `a < b` from `[1, n-1)` (excluding source at 0 and sink at
/// `n-1`) and swaps them only if doing so inverts no precedence edge in
/// the swapped span: no task strictly between `a` and `b` may be a
/// transitive successor of `priority_list[a]`, and none may be a
/// transitive predecessor of `priority_list[b]`. Resamples up to `budget`
/// times; if no legal swap is found, the list is left unchanged.
pub fn swap_mutation<R: Rng>(
    priority_list: &mut [usize],
    project: &ProjectIndex,
    rate: f64,
    budget: usize,
    rng: &mut R,
) {
    let n = priority_list.len();
    if n < 4 || !rng.random_bool(rate) {
        return;
    }

    for _ in 0..budget.max(1) {
        let a = rng.random_range(1..n - 1);
        let b = rng.random_range(1..n - 1);
        if a == b {
            continue;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        if is_legal_swap(priority_list, project, lo, hi) {
            priority_list.swap(lo, hi);
            return;
        }
    }
}

fn is_legal_swap(priority_list: &[usize], project: &ProjectIndex, lo: usize, hi: usize) -> bool {
    let precedence = project.precedence();
    let task_lo = priority_list[lo];
    let task_hi = priority_list[hi];
    for &between in &priority_list[lo..=hi] {
        if between == task_lo || between == task_hi {
            continue;
        }
        if precedence.reaches(task_lo, between) {
            return false;
        }
        if precedence.reaches(between, task_hi) {
            return false;
        }
    }
    // Swapping task_lo and task_hi themselves must not invert their own edge.
    !precedence.reaches(task_lo, task_hi)
}
