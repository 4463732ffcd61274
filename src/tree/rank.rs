//! Node ranks and snapshot owner tags.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of geometrically distributed node ranks.
///
/// The rank of a node is the number of fair-coin tails flipped before the
/// first head, so `P(rank = r) = 2^-(r + 1)` and the mean rank is 1. The
/// coin flips are the low bits of one uniformly random `u64`.
#[derive(Debug, Clone)]
pub(crate) struct RankGenerator {
    rng: StdRng,
}

impl RankGenerator {
    /// Creates a generator from `seed`, or from OS entropy when `seed` is 0.
    pub(crate) fn new(seed: u64) -> Self {
        if seed == 0 {
            Self::seeded(rand::rng().random())
        } else {
            Self::seeded(seed)
        }
    }

    fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws the next rank.
    pub(crate) fn next_rank(&mut self) -> u32 {
        self.rng.next_u64().trailing_zeros()
    }

    /// Derives an independent generator whose seed comes from this one.
    ///
    /// The derivation is deterministic, so a seeded tree and every copy made
    /// from it produce reproducible ranks.
    pub(crate) fn fork(&mut self) -> Self {
        Self::seeded(self.rng.next_u64())
    }
}

/// Identifies the snapshot that owns a node.
///
/// A snapshot may mutate a node in place only when the node carries the
/// snapshot's current tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct OwnerTag(u64);

static NEXT_OWNER_TAG: AtomicU64 = AtomicU64::new(1);

impl OwnerTag {
    /// Returns a tag no other snapshot in this process has used.
    pub(crate) fn fresh() -> Self {
        Self(NEXT_OWNER_TAG.fetch_add(1, Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_same_seed_same_ranks() {
        let mut first = RankGenerator::new(99);
        let mut second = RankGenerator::new(99);
        let first_ranks: Vec<u32> = (0..64).map(|_| first.next_rank()).collect();
        let second_ranks: Vec<u32> = (0..64).map(|_| second.next_rank()).collect();
        assert_eq!(first_ranks, second_ranks);
    }

    #[rstest]
    fn test_fork_is_deterministic() {
        let mut first = RankGenerator::new(5);
        let mut second = RankGenerator::new(5);
        let mut first_child = first.fork();
        let mut second_child = second.fork();
        for _ in 0..32 {
            assert_eq!(first_child.next_rank(), second_child.next_rank());
            assert_eq!(first.next_rank(), second.next_rank());
        }
    }

    #[rstest]
    fn test_rank_distribution_is_geometric() {
        let mut generator = RankGenerator::new(12345);
        let samples = 100_000;
        let ranks: Vec<u32> = (0..samples).map(|_| generator.next_rank()).collect();

        let zeros = ranks.iter().filter(|&&rank| rank == 0).count();
        let ones = ranks.iter().filter(|&&rank| rank == 1).count();
        let total: u64 = ranks.iter().map(|&rank| u64::from(rank)).sum();

        // Expected: half are 0, a quarter are 1, mean is 1.
        assert!((45_000..55_000).contains(&zeros), "zeros = {zeros}");
        assert!((20_000..30_000).contains(&ones), "ones = {ones}");
        assert!((90_000..110_000).contains(&total), "total = {total}");
    }

    #[rstest]
    fn test_owner_tags_are_unique() {
        let tags: Vec<OwnerTag> = (0..100).map(|_| OwnerTag::fresh()).collect();
        for (index, tag) in tags.iter().enumerate() {
            assert!(!tags[index + 1..].contains(tag));
        }
    }
}
