//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::adjacency::AdjacencyRules;
use crate::evaluator::PenaltyConfig;

/// Configuration for the timetable Genetic Algorithm.
///
/// Controls population size, operator rates, termination, parallelism,
/// and the penalty model the evaluator applies.
///
/// # Defaults
///
/// ```
/// use u_timetable::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 1000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_timetable::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_crossover_rate(0.3)
///     .with_repair(true)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of individuals the population is truncated back to after
    /// each generation.
    ///
    /// Larger populations increase diversity but slow down each generation.
    /// Typical range: 50–500.
    pub population_size: usize,

    /// Maximum number of generations before termination.
    ///
    /// The run also stops early as soon as a zero-penalty timetable
    /// appears.
    pub max_generations: usize,

    /// Fraction of the population size mated per generation (0.0–1.0).
    ///
    /// Each mating picks two distinct parents and produces two offspring.
    pub crossover_rate: f64,

    /// Lower bound on the fraction of genes a crossover marks for
    /// exchange (0.0–1.0).
    pub crossover_min_bad_gene_rate: f64,

    /// Upper bound on the fraction of genes a crossover marks for
    /// exchange (0.0–1.0). Must be at least the lower bound.
    pub crossover_max_bad_gene_rate: f64,

    /// Fraction of each individual's worst genes that mutation considers
    /// (0.0–1.0).
    pub mutation_bad_genes_rate: f64,

    /// Per-gene probability of re-rolling the day (0.0–1.0).
    pub mutation_day_rate: f64,

    /// Per-gene probability of re-rolling the time slot (0.0–1.0).
    pub mutation_time_slot_rate: f64,

    /// Per-gene probability of re-rolling the room (0.0–1.0).
    pub mutation_place_rate: f64,

    /// Per-gene probability of flipping an alternating-week class between
    /// odd and even weeks (0.0–1.0). Weekly classes are never flipped.
    pub mutation_periodicity_rate: f64,

    /// Whether to greedily relocate each individual's worst genes after
    /// the operators run. Expensive but strong on tight catalogues.
    pub repair: bool,

    /// Whether to evaluate candidate timetables in parallel using rayon.
    ///
    /// Gene arrays are always produced sequentially from the seeded RNG,
    /// so this only parallelizes scoring and never changes the result.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Minute thresholds deciding what counts as a conflict or a window.
    pub adjacency: AdjacencyRules,

    /// Weights and exponents of the penalty model.
    pub penalties: PenaltyConfig,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 1000,
            crossover_rate: 0.25,
            crossover_min_bad_gene_rate: 0.1,
            crossover_max_bad_gene_rate: 0.4,
            mutation_bad_genes_rate: 0.25,
            mutation_day_rate: 0.3,
            mutation_time_slot_rate: 0.3,
            mutation_place_rate: 0.3,
            mutation_periodicity_rate: 0.3,
            repair: false,
            parallel: true,
            seed: None,
            adjacency: AdjacencyRules::default(),
            penalties: PenaltyConfig::default(),
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the fraction of the population mated per generation.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the range of gene fractions a crossover marks for exchange.
    pub fn with_crossover_bad_gene_rates(mut self, min: f64, max: f64) -> Self {
        self.crossover_min_bad_gene_rate = min.clamp(0.0, 1.0);
        self.crossover_max_bad_gene_rate = max.clamp(0.0, 1.0);
        self
    }

    /// Sets the fraction of worst genes mutation considers.
    pub fn with_mutation_bad_genes_rate(mut self, rate: f64) -> Self {
        self.mutation_bad_genes_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets all four per-field mutation probabilities at once.
    pub fn with_mutation_field_rates(
        mut self,
        day: f64,
        time_slot: f64,
        place: f64,
        periodicity: f64,
    ) -> Self {
        self.mutation_day_rate = day.clamp(0.0, 1.0);
        self.mutation_time_slot_rate = time_slot.clamp(0.0, 1.0);
        self.mutation_place_rate = place.clamp(0.0, 1.0);
        self.mutation_periodicity_rate = periodicity.clamp(0.0, 1.0);
        self
    }

    /// Enables or disables greedy local repair.
    pub fn with_repair(mut self, repair: bool) -> Self {
        self.repair = repair;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the adjacency thresholds.
    pub fn with_adjacency(mut self, adjacency: AdjacencyRules) -> Self {
        self.adjacency = adjacency;
        self
    }

    /// Sets the penalty model.
    pub fn with_penalties(mut self, penalties: PenaltyConfig) -> Self {
        self.penalties = penalties;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.max_generations == 0 {
            return Err("max_generations must be at least 1".into());
        }
        for (name, rate) in [
            ("crossover_rate", self.crossover_rate),
            ("crossover_min_bad_gene_rate", self.crossover_min_bad_gene_rate),
            ("crossover_max_bad_gene_rate", self.crossover_max_bad_gene_rate),
            ("mutation_bad_genes_rate", self.mutation_bad_genes_rate),
            ("mutation_day_rate", self.mutation_day_rate),
            ("mutation_time_slot_rate", self.mutation_time_slot_rate),
            ("mutation_place_rate", self.mutation_place_rate),
            ("mutation_periodicity_rate", self.mutation_periodicity_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) || rate.is_nan() {
                return Err(format!("{name} must be within [0, 1], got {rate}"));
            }
        }
        if self.crossover_min_bad_gene_rate > self.crossover_max_bad_gene_rate {
            return Err("crossover_min_bad_gene_rate exceeds crossover_max_bad_gene_rate".into());
        }
        if self.adjacency.min_break_min < 0 || self.adjacency.min_window_min < 0 {
            return Err("adjacency thresholds must be non-negative".into());
        }
        Ok(())
    }
}
