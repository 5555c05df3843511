use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::navigator::Navigator;

/// Orders a candidate list before the least-loaded navigator is picked.
/// The order decides who wins among navigators with equal tour counts.
pub trait Shuffler {
    fn shuffle(&mut self, candidates: &mut [usize]);
}

/// Random tie-breaking backed by any `rand` generator
#[derive(Debug, Clone)]
pub struct RandomShuffle<R> {
    rng: R,
}

impl<R: Rng> RandomShuffle<R> {
    pub fn new(rng: R) -> Self {
        RandomShuffle { rng }
    }
}

impl RandomShuffle<StdRng> {
    /// Reproducible shuffling for a given seed
    pub fn seeded(seed: u64) -> Self {
        RandomShuffle::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        RandomShuffle::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Shuffler for RandomShuffle<R> {
    fn shuffle(&mut self, candidates: &mut [usize]) {
        candidates.shuffle(&mut self.rng);
    }
}

/// Leaves candidates in roster order, so ties go to whoever was added first
#[derive(Debug, Clone, Copy, Default)]
pub struct RosterOrder;

impl Shuffler for RosterOrder {
    fn shuffle(&mut self, _candidates: &mut [usize]) {}
}

/// Position in `candidates` of the navigator with the fewest tours.
/// On ties the earliest candidate wins.
pub fn least_loaded(candidates: &[usize], navigators: &[Navigator]) -> Option<usize> {
    candidates
        .iter()
        .enumerate()
        .min_by_key(|&(_, &idx)| navigators[idx].tour_count())
        .map(|(pos, _)| pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::types::{TimeOfDay, Weekday};

    fn navigator_with_tours(name: &str, tours: u16) -> Navigator {
        let mut nav = Navigator::new(name);
        for i in 0..tours {
            nav.mark_assigned(Weekday::Monday, TimeOfDay::from_hm(8, i).unwrap()).unwrap();
        }
        nav
    }

    #[test]
    fn least_loaded_prefers_fewest_tours_then_first_seen() {
        let navs = vec![
            navigator_with_tours("A", 2),
            navigator_with_tours("B", 1),
            navigator_with_tours("C", 1),
        ];
        assert_eq!(least_loaded(&[0, 1, 2], &navs), Some(1));
        assert_eq!(least_loaded(&[2, 1, 0], &navs), Some(0));
        assert_eq!(least_loaded(&[], &navs), None);
    }

    #[test]
    fn seeded_shuffles_are_reproducible() {
        let mut first = RandomShuffle::seeded(7);
        let mut second = RandomShuffle::seeded(7);
        let mut a: Vec<usize> = (0..10).collect();
        let mut b = a.clone();
        first.shuffle(&mut a);
        second.shuffle(&mut b);
        assert_eq!(a, b);

        let mut sorted = a.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn roster_order_is_a_no_op() {
        let mut items = vec![3, 1, 2];
        RosterOrder.shuffle(&mut items);
        assert_eq!(items, vec![3, 1, 2]);
    }
}
