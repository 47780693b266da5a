use ordered_float::OrderedFloat;
use rand::distributions::{Distribution, WeightedError, WeightedIndex};
use rand::Rng;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeneticError {
    #[error("parent sampling failed: {0}")]
    Sampling(#[from] WeightedError),
    #[error("the population is empty")]
    EmptyPopulation,
}

/// Knobs of [`genetic_algorithm`]. The defaults mutate rarely and run a
/// hundred mid-sized generations.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneticConfig {
    /// Children strictly below this fitness are dropped from their
    /// generation. `None` keeps every child.
    pub culling_threshold: Option<f64>,
    /// A child reaching this fitness ends the run immediately.
    pub fitness_threshold: Option<f64>,
    /// Probability that a freshly bred child has one gene replaced.
    pub mutation_rate: f64,
    /// Generational turnovers before settling for the best survivor.
    pub generations: usize,
    /// Children bred per generation, before culling.
    pub generation_size: usize,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            culling_threshold: None,
            fitness_threshold: None,
            mutation_rate: 0.1,
            generations: 100,
            generation_size: 1000,
        }
    }
}

/// The fitness of every individual, in population order.
pub fn weight_by<G>(population: &[Vec<G>], fitness: impl Fn(&[G]) -> f64) -> Vec<f64> {
    population
        .iter()
        .map(|individual| fitness(individual))
        .collect()
}

/// Draws two parents, independently and with replacement, each with
/// probability proportional to its weight. Zero-weight individuals are
/// never drawn; a population whose weights cannot be sampled at all (empty,
/// all zero, or negative) is an error.
pub fn choose_parents<'a, G, R>(
    rng: &mut R,
    population: &'a [Vec<G>],
    weights: &[f64],
) -> Result<(&'a [G], &'a [G]), GeneticError>
where
    R: Rng + ?Sized,
{
    let sampler = WeightedIndex::new(weights)?;
    Ok((
        population[sampler.sample(rng)].as_slice(),
        population[sampler.sample(rng)].as_slice(),
    ))
}

/// Crosses two parents at one random point, producing the two children
/// that swap prefixes there.
pub fn reproduce<G, R>(rng: &mut R, first: &[G], second: &[G]) -> [Vec<G>; 2]
where
    G: Clone,
    R: Rng + ?Sized,
{
    debug_assert_eq!(
        first.len(),
        second.len(),
        "parents must share a genome length"
    );
    debug_assert!(!first.is_empty(), "parents must carry at least one gene");
    let crossover = rng.gen_range(0..first.len());
    [
        first[..crossover]
            .iter()
            .chain(&second[crossover..])
            .cloned()
            .collect(),
        second[..crossover]
            .iter()
            .chain(&first[crossover..])
            .cloned()
            .collect(),
    ]
}

/// With probability `rate`, replaces one random gene with a random draw
/// from `genes`; otherwise hands the individual back untouched.
pub fn mutate<G, R>(rng: &mut R, mut individual: Vec<G>, genes: &[G], rate: f64) -> Vec<G>
where
    G: Clone,
    R: Rng + ?Sized,
{
    debug_assert!(!genes.is_empty(), "the gene pool must not be empty");
    if rng.gen::<f64>() >= rate {
        return individual;
    }
    let position = rng.gen_range(0..individual.len());
    individual[position] = genes[rng.gen_range(0..genes.len())].clone();
    individual
}

/// Breeds `generation_size` children per generation from fitness-weighted
/// parents, then culls, for `generations` rounds; the fittest survivor of
/// the last generation wins. A child reaching `fitness_threshold` wins
/// early instead.
///
/// Culling can shrink a generation below sampling viability; the following
/// round then fails with [`GeneticError::Sampling`] rather than spinning
/// on an unsampleable population.
pub fn genetic_algorithm<G, R>(
    rng: &mut R,
    mut population: Vec<Vec<G>>,
    fitness: impl Fn(&[G]) -> f64,
    genes: &[G],
    config: &GeneticConfig,
) -> Result<Vec<G>, GeneticError>
where
    G: Clone,
    R: Rng + ?Sized,
{
    for _ in 0..config.generations {
        let weights = weight_by(&population, &fitness);
        let mut next_generation = Vec::with_capacity(config.generation_size);

        while next_generation.len() < config.generation_size {
            let (first, second) = choose_parents(rng, &population, &weights)?;
            for child in reproduce(rng, first, second) {
                let child = mutate(rng, child, genes, config.mutation_rate);
                if let Some(threshold) = config.fitness_threshold {
                    if fitness(&child) >= threshold {
                        return Ok(child);
                    }
                }
                next_generation.push(child);
            }
        }

        if let Some(threshold) = config.culling_threshold {
            next_generation.retain(|child| fitness(child) >= threshold);
        }
        population = next_generation;
    }

    population
        .into_iter()
        .max_by_key(|individual| OrderedFloat(fitness(individual)))
        .ok_or(GeneticError::EmptyPopulation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ones(individual: &[u8]) -> f64 {
        individual.iter().filter(|&&gene| gene == 1).count() as f64
    }

    #[test]
    fn weights_follow_population_order() {
        let population = vec![vec![1, 1, 0], vec![0, 0, 0], vec![1, 1, 1]];
        assert_eq!(weight_by(&population, ones), vec![2.0, 0.0, 3.0]);
    }

    #[test]
    fn zero_weight_individuals_are_never_drawn() {
        let mut rng = StdRng::seed_from_u64(42);
        let population = vec![vec![1u8], vec![0u8]];
        for _ in 0..50 {
            let (first, second) =
                choose_parents(&mut rng, &population, &[1.0, 0.0]).unwrap();
            assert_eq!(first, &[1]);
            assert_eq!(second, &[1]);
        }
    }

    #[test]
    fn unsampleable_weights_are_an_error() {
        let mut rng = StdRng::seed_from_u64(42);
        let population = vec![vec![0u8], vec![0u8]];
        let result = choose_parents(&mut rng, &population, &[0.0, 0.0]);
        assert!(matches!(result, Err(GeneticError::Sampling(_))));
        let result = choose_parents::<u8, _>(&mut rng, &[], &[]);
        assert!(matches!(result, Err(GeneticError::Sampling(_))));
    }

    #[test]
    fn crossover_swaps_prefixes() {
        let mut rng = StdRng::seed_from_u64(42);
        let first = [0u8, 0, 0, 0];
        let second = [1u8, 1, 1, 1];
        let [left, right] = reproduce(&mut rng, &first, &second);
        assert_eq!(left.len(), 4);
        assert_eq!(right.len(), 4);
        // Whatever the crossover point, each child is one parent's prefix
        // followed by the other's suffix.
        assert!(left.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(right.windows(2).all(|pair| pair[0] >= pair[1]));
        let zeroes = |child: &[u8]| child.iter().filter(|&&gene| gene == 0).count();
        assert_eq!(zeroes(&left) + zeroes(&right), 4);
    }

    #[test]
    fn a_zero_rate_never_mutates() {
        let mut rng = StdRng::seed_from_u64(42);
        let individual = vec![3u8, 1, 4, 1, 5];
        let result = mutate(&mut rng, individual.clone(), &[0, 1, 2], 0.0);
        assert_eq!(result, individual);
    }

    #[test]
    fn a_certain_rate_touches_at_most_one_gene() {
        let mut rng = StdRng::seed_from_u64(42);
        let genes = [7u8, 8, 9];
        let individual = vec![0u8, 1, 2, 3];
        let result = mutate(&mut rng, individual.clone(), &genes, 1.0);
        assert_eq!(result.len(), individual.len());
        let differing = result
            .iter()
            .zip(&individual)
            .filter(|(new, old)| new != old)
            .count();
        assert!(differing <= 1);
        for (new, old) in result.iter().zip(&individual) {
            if new != old {
                assert!(genes.contains(new));
            }
        }
    }

    #[test]
    fn a_met_fitness_threshold_ends_the_run_at_once() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = GeneticConfig {
            fitness_threshold: Some(0.0),
            generations: 1000,
            generation_size: 10,
            ..GeneticConfig::default()
        };
        // Every child scores at least zero, so the very first one wins.
        let winner = genetic_algorithm(&mut rng, vec![vec![0u8, 1]], ones, &[0, 1], &config);
        assert!(winner.is_ok());
    }

    #[test]
    fn culling_everything_starves_the_next_generation() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = GeneticConfig {
            culling_threshold: Some(f64::INFINITY),
            generations: 2,
            generation_size: 4,
            ..GeneticConfig::default()
        };
        let result = genetic_algorithm(&mut rng, vec![vec![1u8, 1]], ones, &[0, 1], &config);
        assert!(matches!(result, Err(GeneticError::Sampling(_))));
    }

    #[test]
    fn a_single_starved_generation_surfaces_as_empty_population() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = GeneticConfig {
            culling_threshold: Some(f64::INFINITY),
            generations: 1,
            generation_size: 4,
            ..GeneticConfig::default()
        };
        let result = genetic_algorithm(&mut rng, vec![vec![1u8, 1]], ones, &[0, 1], &config);
        assert_eq!(result, Err(GeneticError::EmptyPopulation));
    }

    #[test]
    fn evolution_preserves_genome_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = GeneticConfig {
            generations: 5,
            generation_size: 20,
            ..GeneticConfig::default()
        };
        let population = vec![vec![0u8, 0, 0], vec![1u8, 0, 1], vec![0u8, 1, 1]];
        let best = genetic_algorithm(&mut rng, population, ones, &[0, 1], &config).unwrap();
        assert_eq!(best.len(), 3);
        assert!(best.iter().all(|gene| [0, 1].contains(gene)));
    }
}
