use std::sync::Arc;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use sched_core::ScheduleData;
use tracing::debug;

use crate::individual::Individual;
use crate::params::GaParams;

/// Runs the generational loop and returns the final population sorted
/// ascending by fitness (`population[0]` is the best schedule found).
///
/// One generation:
/// 1. every individual independently rolls its mutation chance and mutates
///    in place if it hits, in parallel via rayon;
/// 2. the `selection_count` fittest individuals are partitioned to the
///    front (a partial selection, not a full sort);
/// 3. `crossover_count` times, a selected parent and a uniformly random
///    individual attempt a crossover;
/// 4. the whole population is re-evaluated in parallel;
/// 5. the `selection_count` worst individuals are overwritten with copies
///    of the current elites.
pub struct Ga {
    params: GaParams,
}

impl Ga {
    pub fn new(params: GaParams) -> Self {
        Self { params }
    }

    pub fn run(&self, data: Arc<ScheduleData>, seed: Option<u64>) -> Vec<Individual> {
        let master_seed = seed.unwrap_or_else(rand::random::<u64>);
        let mut seed_rng = ChaCha8Rng::seed_from_u64(master_seed);

        let mut first = Individual::seeded(data.clone(), ChaCha8Rng::seed_from_u64(seed_rng.gen()));
        first.evaluate();

        let mut population: Vec<Individual> = (0..self.params.individuals_count)
            .map(|_| first.clone_with_rng(ChaCha8Rng::seed_from_u64(seed_rng.gen())))
            .collect();

        let selection_count = self.params.selection_count;
        let mut crossover_rng = ChaCha8Rng::seed_from_u64(seed_rng.gen());

        for generation in 0..self.params.iterations_count {
            population.par_iter_mut().for_each(|individual| {
                if individual.roll_mutation() <= self.params.mutation_chance {
                    individual.mutate();
                }
                individual.evaluate();
            });

            if selection_count > 0 {
                let pivot = selection_count - 1;
                population.select_nth_unstable_by_key(pivot, |individual| individual.fitness().unwrap_or(u64::MAX));
            }

            for _ in 0..self.params.crossover_count {
                let n = population.len();
                let i = crossover_rng.gen_range(0..selection_count.max(1).min(n));
                let j = crossover_rng.gen_range(0..n);
                if i == j {
                    continue;
                }
                let (a, b) = pair_mut(&mut population, i, j);
                a.crossover(b);
            }

            population.par_iter_mut().for_each(|individual| {
                individual.evaluate();
            });

            if selection_count > 0 && selection_count < population.len() {
                let n = population.len();
                let pivot = n - selection_count;
                population.select_nth_unstable_by_key(pivot, |individual| individual.fitness().unwrap_or(u64::MAX));
                population[pivot..].sort_by_key(|individual| individual.fitness().unwrap_or(u64::MAX));
                let elites: Vec<Individual> = population[..selection_count].to_vec();
                population[pivot..].clone_from_slice(&elites);
            }

            if generation % 100 == 0 || generation + 1 == self.params.iterations_count {
                let best = population.iter().filter_map(Individual::fitness).min();
                debug!(generation, best_fitness = ?best, "generation complete");
            }
        }

        population.sort_by_key(|individual| individual.fitness().unwrap_or(u64::MAX));
        population
    }
}

fn pair_mut<T>(items: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    assert_ne!(i, j);
    if i < j {
        let (left, right) = items.split_at_mut(j);
        (&mut left[i], &mut right[0])
    } else {
        let (left, right) = items.split_at_mut(i);
        (&mut right[0], &mut left[j])
    }
}
