//! Evolution configuration.

use crate::error::ConfigError;

/// Configuration for a single [`crate::ga::evolve`] call.
///
/// Constructed with [`EvolveConfig::new`] and refined with `with_*`
/// builder methods, mirroring the builder idiom used by the domain model.
/// Call [`EvolveConfig::validate`] before passing a config to `evolve`;
/// `evolve` itself validates and panics on an invalid config, since an
/// invalid config is a caller programming error, not a runtime condition.
#[derive(Debug, Clone)]
pub struct EvolveConfig {
    /// Maximum number of generations to run.
    pub generations: usize,
    /// Number of individuals in the population.
    pub population_size: usize,
    /// Tournament size for parent selection.
    pub tournament_k: usize,
    /// Number of top individuals carried unchanged into each new generation.
    pub elitism: usize,
    /// Probability of applying crossover to a selected parent pair.
    pub crossover_rate: f64,
    /// Probability of applying mutation to an individual.
    pub mutation_rate: f64,
    /// Maximum resample attempts for the precedence-safe swap mutation.
    pub mutation_swap_budget: usize,
    /// Stop early after this many consecutive generations without
    /// improvement to the best makespan. `None` disables early stop.
    pub no_improve_stop: Option<usize>,
    /// RNG seed. Determines the entire run given a fixed config.
    pub seed: u64,
    /// Worker threads for the per-generation parallel fitness evaluation.
    pub workers: usize,
}

impl EvolveConfig {
    /// Creates a config with the given generation budget and population
    /// size, and defaults for everything else: `tournament_k = 3`,
    /// `elitism = 1`, `crossover_rate = 0.9`, `mutation_rate = 0.2`,
    /// `mutation_swap_budget = 8`, `no_improve_stop = None`, `seed = 0`,
    /// `workers = 1`.
    pub fn new(generations: usize, population_size: usize) -> Self {
        Self {
            generations,
            population_size,
            tournament_k: 3,
            elitism: 1,
            crossover_rate: 0.9,
            mutation_rate: 0.2,
            mutation_swap_budget: 8,
            no_improve_stop: None,
            seed: 0,
            workers: 1,
        }
    }

    /// Sets the tournament size.
    pub fn with_tournament_k(mut self, k: usize) -> Self {
        self.tournament_k = k;
        self
    }

    /// Sets the elitism count.
    pub fn with_elitism(mut self, elitism: usize) -> Self {
        self.elitism = elitism;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the per-individual mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the swap-mutation resample budget.
    pub fn with_mutation_swap_budget(mut self, budget: usize) -> Self {
        self.mutation_swap_budget = budget;
        self
    }

    /// Sets the no-improvement early-stop limit.
    pub fn with_no_improve_stop(mut self, limit: Option<usize>) -> Self {
        self.no_improve_stop = limit;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the worker count for parallel fitness evaluation.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Rejects out-of-range rates, zero population/tournament sizes, and
    /// elitism at or beyond the population size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::ZeroPopulationSize);
        }
        if self.tournament_k == 0 {
            return Err(ConfigError::ZeroTournamentSize);
        }
        if self.tournament_k > self.population_size {
            return Err(ConfigError::TournamentSizeExceedsPopulation {
                tournament_k: self.tournament_k,
                population_size: self.population_size,
            });
        }
        if self.elitism >= self.population_size {
            return Err(ConfigError::ElitismExceedsPopulation {
                elitism: self.elitism,
                population_size: self.population_size,
            });
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(ConfigError::RateOutOfRange {
                field: "crossover_rate",
                value: self.crossover_rate,
            });
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::RateOutOfRange {
                field: "mutation_rate",
                value: self.mutation_rate,
            });
        }
        if self.workers == 0 {
            return Err(ConfigError::ZeroWorkers);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = EvolveConfig::new(100, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_population_rejected() {
        let config = EvolveConfig::new(100, 0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroPopulationSize));
    }

    #[test]
    fn test_zero_tournament_rejected() {
        let config = EvolveConfig::new(100, 50).with_tournament_k(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroTournamentSize));
    }

    #[test]
    fn test_elitism_exceeding_population_rejected() {
        let config = EvolveConfig::new(100, 5).with_elitism(5);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ElitismExceedsPopulation { .. })
        ));
    }

    #[test]
    fn test_crossover_rate_out_of_range_rejected() {
        let config = EvolveConfig::new(100, 50).with_crossover_rate(1.5);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::RateOutOfRange { field: "crossover_rate", .. })
        ));
    }

    #[test]
    fn test_mutation_rate_out_of_range_rejected() {
        let config = EvolveConfig::new(100, 50).with_mutation_rate(-0.1);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::RateOutOfRange { field: "mutation_rate", .. })
        ));
    }

    #[test]
    fn test_zero_workers_rejected() {
        let config = EvolveConfig::new(100, 50).with_workers(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroWorkers));
    }

    #[test]
    fn test_builder_chain() {
        let config = EvolveConfig::new(200, 80)
            .with_tournament_k(5)
            .with_elitism(2)
            .with_crossover_rate(0.8)
            .with_mutation_rate(0.15)
            .with_mutation_swap_budget(4)
            .with_no_improve_stop(Some(30))
            .with_seed(123)
            .with_workers(4);
        assert!(config.validate().is_ok());
        assert_eq!(config.tournament_k, 5);
        assert_eq!(config.no_improve_stop, Some(30));
    }
}
