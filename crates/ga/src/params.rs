use types::ConfigError;

/// Tunables for one [`crate::driver::Ga::run`] call. Mirrors the reference
/// engine's defaults: a population of 1000 running for 1100 generations,
/// with the top 360 selected each generation and 220 crossover attempts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GaParams {
    pub individuals_count: usize,
    pub iterations_count: usize,
    pub selection_count: usize,
    pub crossover_count: usize,
    /// Out of 100: the chance a given individual mutates in one generation.
    pub mutation_chance: u8,
}

impl GaParams {
    pub fn new(
        individuals_count: usize,
        iterations_count: usize,
        selection_count: usize,
        crossover_count: usize,
        mutation_chance: u8,
    ) -> Result<Self, ConfigError> {
        if individuals_count == 0 {
            return Err(ConfigError::ZeroIndividuals);
        }
        if selection_count >= individuals_count {
            return Err(ConfigError::SelectionNotLessThanPopulation);
        }
        if mutation_chance > 100 {
            return Err(ConfigError::MutationChanceOutOfRange(mutation_chance));
        }
        Ok(Self {
            individuals_count,
            iterations_count,
            selection_count,
            crossover_count,
            mutation_chance,
        })
    }
}

impl Default for GaParams {
    fn default() -> Self {
        Self {
            individuals_count: 1000,
            iterations_count: 1100,
            selection_count: 360,
            crossover_count: 220,
            mutation_chance: 49,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_are_valid() {
        assert!(GaParams::new(1000, 1100, 360, 220, 49).is_ok());
    }

    #[test]
    fn rejects_zero_individuals() {
        assert_eq!(GaParams::new(0, 10, 0, 0, 0).unwrap_err(), ConfigError::ZeroIndividuals);
    }

    #[test]
    fn rejects_selection_count_at_or_above_population() {
        assert_eq!(
            GaParams::new(10, 10, 10, 0, 0).unwrap_err(),
            ConfigError::SelectionNotLessThanPopulation
        );
    }

    #[test]
    fn rejects_mutation_chance_above_100() {
        assert_eq!(GaParams::new(10, 10, 5, 0, 101).unwrap_err(), ConfigError::MutationChanceOutOfRange(101));
    }
}
