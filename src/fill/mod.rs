//! Fill strategies
//!
//! - [`linear`]: consecutive cells, color block after color block
//! - [`random`]: a fixed number of random distinct cells per color
//! - [`ratio`]: the whole grid, split by relative frequency

pub mod linear;
pub mod random;
pub mod ratio;

pub use linear::draw_linear;
pub use random::draw_random;
pub use ratio::{draw_random_ratio, ratio_targets};

use crate::random::{pick_index, RandomSource};

/// Outcome of one filler invocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillReport {
    /// Paint operations the color spec asked for
    pub requested: usize,
    /// Paint operations that landed on a cell
    pub painted: usize,
}

impl FillReport {
    /// Requested paints that were dropped
    pub fn dropped(&self) -> usize {
        self.requested.saturating_sub(self.painted)
    }
}

/// Positions already chosen by a single filler invocation.
///
/// A collision steps forward one position, wrapping at the end, until a
/// free one turns up. This leans slightly towards
/// positions right after dense runs, which is the expected distribution.
pub(crate) struct ChosenSet {
    taken: Vec<bool>,
    count: usize,
}

impl ChosenSet {
    pub(crate) fn new(len: usize) -> Self {
        ChosenSet { taken: vec![false; len], count: 0 }
    }

    pub(crate) fn len(&self) -> usize {
        self.count
    }

    pub(crate) fn is_full(&self) -> bool {
        self.count >= self.taken.len()
    }

    /// Draw a free position; `None` once every position is taken
    pub(crate) fn choose(&mut self, rng: &mut dyn RandomSource) -> Option<usize> {
        if self.is_full() {
            return None;
        }
        let len = self.taken.len();
        let mut pos = pick_index(rng, len);
        while self.taken[pos] {
            pos += 1;
            if pos >= len {
                pos = 0;
            }
        }
        self.taken[pos] = true;
        self.count += 1;
        Some(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;

    #[test]
    fn collisions_step_forward_and_wrap() {
        let mut set = ChosenSet::new(4);
        // every draw lands on position 3
        let mut rng = ScriptedRandom::new(vec![0.8]);
        assert_eq!(set.choose(&mut rng), Some(3));
        assert_eq!(set.choose(&mut rng), Some(0));
        assert_eq!(set.choose(&mut rng), Some(1));
        assert_eq!(set.choose(&mut rng), Some(2));
        assert!(set.is_full());
        assert_eq!(set.choose(&mut rng), None);
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn empty_set_never_chooses() {
        let mut set = ChosenSet::new(0);
        let mut rng = ScriptedRandom::new(vec![0.5]);
        assert_eq!(set.choose(&mut rng), None);
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn report_counts_drops() {
        let r = FillReport { requested: 5, painted: 3 };
        assert_eq!(r.dropped(), 2);
    }
}
