//! The evolution loop: population management, selection, and termination.
//!
//! A single control thread drives generations; only fitness evaluation of
//! the offspring batch is parallel (a scoped `rayon` pool sized to
//! `config.workers`). All random draws needed to build the offspring
//! batch happen on the control thread before dispatch, so the RNG stream
//! is independent of worker interleaving.
//!
//! # Reference
//! Adapted from the BRKGA control-flow shape (elitism, generation
//! replacement, stagnation counter, cancellation token) of a biased
//! random-key genetic algorithm runner, generalized here to tournament
//! selection over precedence-admissible permutations instead of
//! random-key vectors.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::chromosome::random_admissible_permutation;
use super::operators::{pox_crossover, swap_mutation};
use crate::config::EvolveConfig;
use crate::model::ProjectIndex;
use crate::scheduler::decode;

/// A population of admissible priority lists with their decoded makespans.
#[derive(Debug, Clone)]
pub struct Population {
    individuals: Vec<Vec<usize>>,
    fitness: Vec<u64>,
}

impl Population {
    /// Number of individuals.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Whether the population is empty.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// The individual at `i`.
    pub fn individual(&self, i: usize) -> &[usize] {
        &self.individuals[i]
    }

    /// The makespan of individual `i`.
    pub fn fitness(&self, i: usize) -> u64 {
        self.fitness[i]
    }

    /// Index of the best (lowest-makespan) individual; ties broken by
    /// earliest index.
    pub fn best_index(&self) -> usize {
        (0..self.fitness.len())
            .min_by_key(|&i| self.fitness[i])
            .expect("population is never empty")
    }
}

/// Why the evolution loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoppedReason {
    /// The configured generation budget was exhausted.
    MaxGenerations,
    /// No improvement to the best makespan for `no_improve_stop` generations.
    Stagnation,
    /// The caller-supplied cancellation flag was observed set.
    Cancelled,
}

/// Result of a call to [`evolve`].
#[derive(Debug, Clone)]
pub struct EvolutionResult {
    /// The best priority list found.
    pub best_priority_list: Vec<usize>,
    /// Its makespan.
    pub best_makespan: u64,
    /// Best-so-far makespan at the end of each generation, including
    /// generation 0 (the initial population).
    pub history: Vec<u64>,
    /// Number of generations actually executed (excludes the initial
    /// population).
    pub generations_run: usize,
    /// Why the loop stopped.
    pub stopped_reason: StoppedReason,
}

/// Builds an initial population of `population_size` independent random
/// admissible permutations.
///
/// Deterministic given `seed`.
pub fn initial_population(project: &ProjectIndex, population_size: usize, seed: u64) -> Population {
    let mut rng = SmallRng::seed_from_u64(seed);
    let individuals: Vec<Vec<usize>> = (0..population_size)
        .map(|_| random_admissible_permutation(project, &mut rng))
        .collect();
    let fitness = individuals
        .iter()
        .map(|ind| decode(project, ind).makespan(project))
        .collect();
    Population { individuals, fitness }
}

/// Runs the genetic optimizer to completion, termination, or cancellation.
///
/// `cancel`, if supplied, is checked with [`Ordering::Relaxed`] between
/// generations; on cancellation the best individual found so far is
/// returned with `stopped_reason = StoppedReason::Cancelled`. This is not
/// a failure mode — `evolve` never returns a `Result`.
pub fn evolve(
    project: &ProjectIndex,
    config: &EvolveConfig,
    population: Population,
    cancel: Option<Arc<AtomicBool>>,
) -> EvolutionResult {
    config.validate().expect("invalid EvolveConfig");

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.workers)
        .build()
        .expect("failed to build evaluation thread pool");

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut population = population;
    let mut best_idx = population.best_index();
    let mut best_list = population.individual(best_idx).to_vec();
    let mut best_makespan = population.fitness(best_idx);

    let mut history = vec![best_makespan];
    let mut stagnation = 0usize;
    let mut stopped_reason = StoppedReason::MaxGenerations;
    let mut generations_run = 0usize;

    for _generation in 0..config.generations {
        if let Some(ref flag) = cancel {
            if flag.load(Ordering::Relaxed) {
                stopped_reason = StoppedReason::Cancelled;
                break;
            }
        }

        let n = population.len();
        let mut elite_order: Vec<usize> = (0..n).collect();
        elite_order.sort_by_key(|&i| population.fitness(i));

        let elite_count = config.elitism.min(n);
        let mut next_individuals: Vec<Vec<usize>> = elite_order[..elite_count]
            .iter()
            .map(|&i| population.individual(i).to_vec())
            .collect();

        let offspring_target = n - elite_count;
        let mut offspring: Vec<Vec<usize>> = Vec::with_capacity(offspring_target);
        while offspring.len() < offspring_target {
            let p1 = tournament_select(&population, config.tournament_k, &mut rng);
            let p2 = tournament_select(&population, config.tournament_k, &mut rng);

            let (mut c1, mut c2) = if rng.random_bool(config.crossover_rate) {
                pox_crossover(
                    population.individual(p1),
                    population.individual(p2),
                    &mut rng,
                )
            } else {
                (
                    population.individual(p1).to_vec(),
                    population.individual(p2).to_vec(),
                )
            };

            swap_mutation(
                &mut c1,
                project,
                config.mutation_rate,
                config.mutation_swap_budget,
                &mut rng,
            );
            swap_mutation(
                &mut c2,
                project,
                config.mutation_rate,
                config.mutation_swap_budget,
                &mut rng,
            );

            offspring.push(c1);
            if offspring.len() < offspring_target {
                offspring.push(c2);
            }
        }

        let offspring_fitness: Vec<u64> = pool.install(|| {
            use rayon::prelude::*;
            offspring
                .par_iter()
                .map(|ind| decode(project, ind).makespan(project))
                .collect()
        });

        next_individuals.extend(offspring);
        let mut next_fitness: Vec<u64> = elite_order[..elite_count]
            .iter()
            .map(|&i| population.fitness(i))
            .collect();
        next_fitness.extend(offspring_fitness);

        population = Population {
            individuals: next_individuals,
            fitness: next_fitness,
        };

        let gen_best_idx = population.best_index();
        let gen_best_makespan = population.fitness(gen_best_idx);
        if gen_best_makespan < best_makespan {
            best_makespan = gen_best_makespan;
            best_list = population.individual(gen_best_idx).to_vec();
            stagnation = 0;
        } else {
            stagnation += 1;
        }

        history.push(best_makespan);
        generations_run += 1;

        if let Some(limit) = config.no_improve_stop {
            if stagnation >= limit {
                stopped_reason = StoppedReason::Stagnation;
                break;
            }
        }
    }

    EvolutionResult {
        best_priority_list: best_list,
        best_makespan,
        history,
        generations_run,
        stopped_reason,
    }
}

/// Tournament selection: draw `k` individuals uniformly with replacement,
/// return the index of the one with the lowest makespan, ties broken by
/// earlier index.
fn tournament_select<R: Rng>(population: &Population, k: usize, rng: &mut R) -> usize {
    let n = population.len();
    let mut best = rng.random_range(0..n);
    for _ in 1..k.max(1) {
        let candidate = rng.random_range(0..n);
        let better = population.fitness(candidate) < population.fitness(best)
            || (population.fitness(candidate) == population.fitness(best) && candidate < best);
        if better {
            best = candidate;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RawProject;
    use crate::validation::build_project;

    fn s1() -> ProjectIndex {
        build_project(RawProject::new(
            vec![0, 3, 5, 0],
            vec![vec![0], vec![1], vec![1], vec![0]],
            vec![1],
            vec![(0, 1), (1, 2), (2, 3)],
        ))
        .unwrap()
    }

    fn s4() -> ProjectIndex {
        build_project(RawProject::new(
            vec![0, 2, 2, 2, 0],
            vec![vec![0], vec![1], vec![2], vec![1], vec![0]],
            vec![2],
            vec![(0, 1), (0, 2), (0, 3), (1, 4), (2, 4), (3, 4)],
        ))
        .unwrap()
    }

    fn default_config() -> EvolveConfig {
        EvolveConfig::new(30, 20)
            .with_seed(42)
            .with_workers(1)
    }

    #[test]
    fn test_initial_population_is_deterministic() {
        let project = s1();
        let a = initial_population(&project, 10, 7);
        let b = initial_population(&project, 10, 7);
        assert_eq!(a.individuals, b.individuals);
        assert_eq!(a.fitness, b.fitness);
    }

    #[test]
    fn test_evolve_never_regresses_best() {
        let project = s4();
        let config = default_config();
        let population = initial_population(&project, config.population_size, config.seed);
        let result = evolve(&project, &config, population, None);

        for window in result.history.windows(2) {
            assert!(window[1] <= window[0]);
        }
    }

    #[test]
    fn test_evolve_finds_optimum_on_s4() {
        let project = s4();
        let config = EvolveConfig::new(50, 40).with_seed(1).with_workers(1);
        let population = initial_population(&project, config.population_size, config.seed);
        let result = evolve(&project, &config, population, None);
        assert_eq!(result.best_makespan, 4);
    }

    #[test]
    fn test_evolve_is_deterministic_across_worker_counts() {
        let project = s4();
        let config_single = EvolveConfig::new(20, 16).with_seed(5).with_workers(1);
        let config_multi = EvolveConfig::new(20, 16).with_seed(5).with_workers(4);

        let pop1 = initial_population(&project, config_single.population_size, config_single.seed);
        let pop2 = initial_population(&project, config_multi.population_size, config_multi.seed);

        let result1 = evolve(&project, &config_single, pop1, None);
        let result2 = evolve(&project, &config_multi, pop2, None);

        assert_eq!(result1.best_priority_list, result2.best_priority_list);
        assert_eq!(result1.history, result2.history);
    }

    #[test]
    fn test_cancellation_stops_early() {
        let project = s1();
        let config = EvolveConfig::new(1000, 20).with_seed(9).with_workers(1);
        let population = initial_population(&project, config.population_size, config.seed);
        let cancel = Arc::new(AtomicBool::new(true));
        let result = evolve(&project, &config, population, Some(cancel));
        assert_eq!(result.stopped_reason, StoppedReason::Cancelled);
        assert_eq!(result.generations_run, 0);
    }

    #[test]
    fn test_stagnation_stop() {
        let project = s1();
        // Trivial chain has a unique feasible makespan: the search must
        // stagnate immediately.
        let config = EvolveConfig::new(100, 10)
            .with_seed(3)
            .with_workers(1)
            .with_no_improve_stop(Some(2));
        let population = initial_population(&project, config.population_size, config.seed);
        let result = evolve(&project, &config, population, None);
        assert_eq!(result.stopped_reason, StoppedReason::Stagnation);
    }
}
