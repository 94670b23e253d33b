//! Representation-agnostic genetic operators.
//!
//! Crossover operators work on gene slices of any `Copy` type, so the
//! binary, integer and real chromosomes share one implementation. Each
//! returns two children of the parents' length.
//!
//! # Crossover Operators
//!
//! - [`one_point_crossover`]: exchange the tails after one split index
//! - [`two_point_crossover`]: exchange one inner segment
//! - [`uniform_crossover`]: exchange each gene with probability 0.5
//!
//! # Mutation
//!
//! - [`mutate_each`]: visit every gene, perturb with a fixed probability
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"

use rand::Rng;

/// Crossover strategy used by the engine.
///
/// # Examples
///
/// ```
/// use soft_ga::ga::CrossoverMethod;
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let (a, b) = CrossoverMethod::OnePoint.recombine(&[1, 1, 1], &[2, 2, 2], 0.0, &mut rng);
/// assert_eq!(a, vec![1, 1, 1]);
/// assert_eq!(b, vec![2, 2, 2]);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrossoverMethod {
    /// Single split index; tails are exchanged.
    #[default]
    OnePoint,

    /// Two split indices; the segment between them is exchanged.
    TwoPoint,

    /// Every gene is exchanged independently with probability 0.5.
    Uniform,
}

impl CrossoverMethod {
    /// Recombines two gene sequences.
    ///
    /// With probability `crossover_rate` the operator runs; otherwise the
    /// children are copies of `parent1` and `parent2` in that order.
    ///
    /// # Panics
    /// Panics if parents have different lengths.
    pub fn recombine<T: Copy, R: Rng>(
        self,
        parent1: &[T],
        parent2: &[T],
        crossover_rate: f64,
        rng: &mut R,
    ) -> (Vec<T>, Vec<T>) {
        assert_eq!(
            parent1.len(),
            parent2.len(),
            "parents must have equal length"
        );

        if parent1.is_empty() || rng.random_range(0.0..1.0) >= crossover_rate {
            return (parent1.to_vec(), parent2.to_vec());
        }

        match self {
            CrossoverMethod::OnePoint => one_point_crossover(parent1, parent2, rng),
            CrossoverMethod::TwoPoint => two_point_crossover(parent1, parent2, rng),
            CrossoverMethod::Uniform => uniform_crossover(parent1, parent2, rng),
        }
    }
}

// ============================================================================
// Crossover operators
// ============================================================================

/// One-point crossover.
///
/// Picks a split index `k` uniformly in `0..n`. Child 1 is
/// `parent1[..k] ++ parent2[k..]`, child 2 the complement.
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn one_point_crossover<T: Copy, R: Rng>(
    parent1: &[T],
    parent2: &[T],
    rng: &mut R,
) -> (Vec<T>, Vec<T>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    let point = rng.random_range(0..n);
    (
        splice(parent1, parent2, point, n),
        splice(parent2, parent1, point, n),
    )
}

/// Two-point crossover.
///
/// Picks a segment `[start, end]` and exchanges it between the parents.
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn two_point_crossover<T: Copy, R: Rng>(
    parent1: &[T],
    parent2: &[T],
    rng: &mut R,
) -> (Vec<T>, Vec<T>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    let (start, end) = random_segment(n, rng);
    let mut child1 = parent1.to_vec();
    let mut child2 = parent2.to_vec();
    child1[start..=end].copy_from_slice(&parent2[start..=end]);
    child2[start..=end].copy_from_slice(&parent1[start..=end]);
    (child1, child2)
}

/// Uniform crossover: each position is swapped with probability 0.5.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn uniform_crossover<T: Copy, R: Rng>(
    parent1: &[T],
    parent2: &[T],
    rng: &mut R,
) -> (Vec<T>, Vec<T>) {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have equal length"
    );

    parent1
        .iter()
        .zip(parent2)
        .map(|(&a, &b)| if rng.random_bool(0.5) { (b, a) } else { (a, b) })
        .unzip()
}

// ============================================================================
// Mutation
// ============================================================================

/// Applies `perturb` to each gene independently with probability `rate`.
///
/// The probability roll happens once per gene in order, so a given seed
/// always touches the same positions.
pub fn mutate_each<T, R, F>(genes: &mut [T], rate: f64, rng: &mut R, mut perturb: F)
where
    R: Rng,
    F: FnMut(&mut T, &mut R),
{
    for gene in genes.iter_mut() {
        if rng.random_range(0.0..1.0) < rate {
            perturb(gene, &mut *rng);
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// `head[..point] ++ tail[point..]`.
fn splice<T: Copy>(head: &[T], tail: &[T], point: usize, n: usize) -> Vec<T> {
    let mut child = Vec::with_capacity(n);
    child.extend_from_slice(&head[..point]);
    child.extend_from_slice(&tail[point..]);
    child
}

/// Pick a random segment `[start, end]` within `0..n` where `start <= end`.
fn random_segment<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Every child position holds the gene of one parent at that position,
    /// and the two children are complementary.
    fn is_positional_mix(c1: &[u8], c2: &[u8], p1: &[u8], p2: &[u8]) -> bool {
        (0..p1.len()).all(|i| {
            (c1[i] == p1[i] && c2[i] == p2[i]) || (c1[i] == p2[i] && c2[i] == p1[i])
        })
    }

    // ---- One-point ----

    #[test]
    fn test_one_point_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let p1 = vec![0u8; 8];
        let p2 = vec![1u8; 8];

        for _ in 0..100 {
            let (c1, c2) = one_point_crossover(&p1, &p2, &mut rng);
            assert_eq!(c1.len(), 8);
            assert_eq!(c2.len(), 8);
            // c1 is a run of 0s followed by a run of 1s
            let k = c1.iter().take_while(|&&g| g == 0).count();
            assert!(c1[k..].iter().all(|&g| g == 1), "c1 not a single split: {c1:?}");
            assert!(k < 8, "split index must lie in 0..n");
            assert!(is_positional_mix(&c1, &c2, &p1, &p2));
        }
    }

    #[test]
    fn test_one_point_single_gene_swaps() {
        let mut rng = StdRng::seed_from_u64(42);
        let (c1, c2) = one_point_crossover(&[3u8], &[9u8], &mut rng);
        assert_eq!(c1, vec![9]);
        assert_eq!(c2, vec![3]);
    }

    #[test]
    #[should_panic(expected = "parents must have equal length")]
    fn test_one_point_length_mismatch_panics() {
        let mut rng = StdRng::seed_from_u64(42);
        one_point_crossover(&[1u8, 2], &[1u8], &mut rng);
    }

    // ---- Two-point ----

    #[test]
    fn test_two_point_exchanges_one_segment() {
        let mut rng = StdRng::seed_from_u64(7);
        let p1 = vec![0u8; 10];
        let p2 = vec![1u8; 10];

        for _ in 0..100 {
            let (c1, c2) = two_point_crossover(&p1, &p2, &mut rng);
            assert!(is_positional_mix(&c1, &c2, &p1, &p2));
            let ones: Vec<usize> = (0..10).filter(|&i| c1[i] == 1).collect();
            assert!(!ones.is_empty(), "segment is never empty");
            let (lo, hi) = (ones[0], ones[ones.len() - 1]);
            assert_eq!(ones.len(), hi - lo + 1, "segment must be contiguous: {c1:?}");
        }
    }

    // ---- Uniform ----

    #[test]
    fn test_uniform_positional_mix() {
        let mut rng = StdRng::seed_from_u64(11);
        let p1: Vec<u8> = (0..16).collect();
        let p2: Vec<u8> = (100..116).collect();

        let mut swapped = 0usize;
        for _ in 0..200 {
            let (c1, c2) = uniform_crossover(&p1, &p2, &mut rng);
            assert!(is_positional_mix(&c1, &c2, &p1, &p2));
            swapped += (0..16).filter(|&i| c1[i] != p1[i]).count();
        }
        // roughly half of 3200 positions
        assert!(swapped > 1200 && swapped < 2000, "swapped {swapped} of 3200");
    }

    // ---- Rate handling ----

    #[test]
    fn test_zero_rate_copies_parents() {
        let mut rng = StdRng::seed_from_u64(42);
        let p1 = vec![1, 2, 3, 4];
        let p2 = vec![5, 6, 7, 8];
        for method in [
            CrossoverMethod::OnePoint,
            CrossoverMethod::TwoPoint,
            CrossoverMethod::Uniform,
        ] {
            for _ in 0..50 {
                let (c1, c2) = method.recombine(&p1, &p2, 0.0, &mut rng);
                assert_eq!(c1, p1);
                assert_eq!(c2, p2);
            }
        }
    }

    #[test]
    fn test_full_rate_one_point_always_splits() {
        let mut rng = StdRng::seed_from_u64(42);
        let p1 = vec![0u8; 6];
        let p2 = vec![1u8; 6];
        for _ in 0..100 {
            let (c1, _) = CrossoverMethod::OnePoint.recombine(&p1, &p2, 1.0, &mut rng);
            // a split always moves at least the last gene from parent2
            assert_eq!(c1[5], 1);
        }
    }

    #[test]
    fn test_recombine_empty_parents() {
        let mut rng = StdRng::seed_from_u64(42);
        let (c1, c2) = CrossoverMethod::Uniform.recombine::<u8, _>(&[], &[], 1.0, &mut rng);
        assert!(c1.is_empty() && c2.is_empty());
    }

    // ---- Mutation ----

    #[test]
    fn test_mutate_each_rates() {
        let mut rng = StdRng::seed_from_u64(42);

        let mut genes = vec![0u32; 50];
        mutate_each(&mut genes, 0.0, &mut rng, |g, _| *g += 1);
        assert!(genes.iter().all(|&g| g == 0));

        mutate_each(&mut genes, 1.0, &mut rng, |g, _| *g += 1);
        assert!(genes.iter().all(|&g| g == 1));
    }

    #[test]
    fn test_mutate_each_deterministic_under_seed() {
        let run = || {
            let mut rng = StdRng::seed_from_u64(5);
            let mut genes = vec![0u32; 32];
            mutate_each(&mut genes, 0.3, &mut rng, |g, r| *g = r.random_range(1..10));
            genes
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_random_segment_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let (start, end) = random_segment(10, &mut rng);
            assert!(start <= end);
            assert!(end < 10);
        }
    }
}
