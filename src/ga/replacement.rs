//! Replacement strategies.
//!
//! A replacement strategy turns the current population and the offspring
//! buffer built during a generation into the next population.

use super::types::Individual;
use std::cmp::Ordering;

/// How the offspring buffer becomes the next population.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Replacement {
    /// The offspring buffer replaces the whole population.
    #[default]
    Generational,

    /// Like [`Generational`](Replacement::Generational), but the buffer is
    /// seeded with a copy of the generation's best individual.
    Elitism,

    /// Only the worst `min(offspring, population_size / 2)` individuals are
    /// replaced; the rest survive untouched.
    SteadyState,
}

impl Replacement {
    /// Whether the offspring buffer starts with a copy of the best individual.
    pub fn seeds_elite(self) -> bool {
        self == Replacement::Elitism
    }

    /// Produces the next population.
    ///
    /// Generational and elitism truncate `offspring` to exactly
    /// `population_size`; reproduction adds children in pairs, so the buffer
    /// can be one entry too long.
    ///
    /// Steady-state sorts `population` ascending by fitness (stable, so
    /// equal-fitness individuals keep their order; NaN ranks above every
    /// number) and overwrites the front with the first entries of
    /// `offspring`.
    pub fn replace<I: Individual>(
        self,
        mut population: Vec<I>,
        mut offspring: Vec<I>,
        population_size: usize,
    ) -> Vec<I> {
        match self {
            Replacement::Generational | Replacement::Elitism => {
                offspring.truncate(population_size);
                offspring
            }
            Replacement::SteadyState => {
                population.sort_by(|a, b| compare_fitness(a.fitness(), b.fitness()));
                let count = offspring.len().min(population_size / 2);
                for (slot, child) in population.iter_mut().zip(offspring).take(count) {
                    *slot = child;
                }
                population
            }
        }
    }
}

/// Total order on fitness values. Every NaN compares equal to other NaNs
/// and greater than any number.
fn compare_fitness(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.total_cmp(&b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Tagged {
        tag: &'static str,
        fit: f64,
    }

    impl Individual for Tagged {
        fn fitness(&self) -> f64 {
            self.fit
        }
        fn set_fitness(&mut self, f: f64) {
            self.fit = f;
        }
    }

    fn t(tag: &'static str, fit: f64) -> Tagged {
        Tagged { tag, fit }
    }

    fn tags(pop: &[Tagged]) -> Vec<&'static str> {
        pop.iter().map(|i| i.tag).collect()
    }

    #[test]
    fn test_generational_truncates_odd_buffer() {
        let pop = vec![t("a", 1.0), t("b", 2.0), t("c", 3.0)];
        let buffer = vec![t("x", 0.0), t("y", 0.0), t("z", 0.0), t("w", 0.0)];
        let next = Replacement::Generational.replace(pop, buffer, 3);
        assert_eq!(tags(&next), ["x", "y", "z"]);
    }

    #[test]
    fn test_elitism_keeps_buffer_order() {
        let pop = vec![t("a", 1.0), t("b", 2.0)];
        let buffer = vec![t("elite", 2.0), t("x", 0.0), t("y", 0.0)];
        let next = Replacement::Elitism.replace(pop, buffer, 2);
        assert_eq!(tags(&next), ["elite", "x"]);
        assert!(Replacement::Elitism.seeds_elite());
        assert!(!Replacement::Generational.seeds_elite());
        assert!(!Replacement::SteadyState.seeds_elite());
    }

    #[test]
    fn test_steady_state_replaces_worst_half() {
        let pop = vec![
            t("a", 5.0),
            t("b", 1.0),
            t("c", 4.0),
            t("d", 2.0),
            t("e", 3.0),
        ];
        let buffer = vec![t("x", 0.0), t("y", 0.0), t("z", 0.0), t("w", 0.0)];
        let next = Replacement::SteadyState.replace(pop, buffer, 5);
        // 5 / 2 = 2 replaced: the two lowest (b, d)
        assert_eq!(tags(&next), ["x", "y", "e", "c", "a"]);
    }

    #[test]
    fn test_steady_state_small_buffer() {
        let pop = vec![t("a", 3.0), t("b", 1.0), t("c", 2.0), t("d", 0.0)];
        let buffer = vec![t("x", 0.0)];
        let next = Replacement::SteadyState.replace(pop, buffer, 4);
        assert_eq!(tags(&next), ["x", "b", "c", "a"]);
    }

    #[test]
    fn test_steady_state_stable_on_ties() {
        let pop = vec![t("a", 1.0), t("b", 1.0), t("c", 1.0), t("d", 1.0)];
        let buffer = vec![t("x", 0.0), t("y", 0.0)];
        let next = Replacement::SteadyState.replace(pop, buffer, 4);
        assert_eq!(tags(&next), ["x", "y", "c", "d"]);
    }

    #[test]
    fn test_steady_state_tolerates_nan_fitness() {
        let population_size = 64;
        let pop: Vec<Tagged> = (0..population_size)
            .map(|i| {
                let fit = if i % 3 == 0 { f64::NAN } else { i as f64 };
                t("p", fit)
            })
            .collect();
        let buffer: Vec<Tagged> = (0..population_size).map(|_| t("x", 0.0)).collect();

        let next = Replacement::SteadyState.replace(pop, buffer, population_size);
        assert_eq!(next.len(), population_size);

        let replaced = population_size / 2;
        assert!(next[..replaced].iter().all(|i| i.tag == "x"));
        // NaN ranks highest, so every NaN individual survives at the back
        let nan_count = (0..population_size).filter(|i| i % 3 == 0).count();
        assert!(next[population_size - nan_count..]
            .iter()
            .all(|i| i.fit.is_nan()));
        let survivors = &next[replaced..population_size - nan_count];
        assert!(survivors.windows(2).all(|w| w[0].fit <= w[1].fit));
    }

    #[test]
    fn test_compare_fitness_orders_nan_last() {
        let mut values = vec![2.0, f64::NAN, -1.0, f64::NEG_INFINITY, -f64::NAN, 0.5];
        values.sort_by(|a, b| compare_fitness(*a, *b));
        assert_eq!(&values[..4], &[f64::NEG_INFINITY, -1.0, 0.5, 2.0]);
        assert!(values[4..].iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_steady_state_population_of_one_is_frozen() {
        let pop = vec![t("a", 1.0)];
        let buffer = vec![t("x", 0.0), t("y", 0.0)];
        let next = Replacement::SteadyState.replace(pop, buffer, 1);
        assert_eq!(tags(&next), ["a"]);
    }
}
