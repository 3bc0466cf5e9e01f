//! Choosing among equally scored moves.

/// Picks one of `len` equally good candidates.
///
/// Implementations must return an index below `len`; `len` is never zero.
/// Any `FnMut(usize) -> usize` closure is a `TieBreak`, which is how tests
/// pin the choice.
pub trait TieBreak {
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniformly random choice from the thread-local generator.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomTieBreak;

impl TieBreak for RandomTieBreak {
    fn pick(&mut self, len: usize) -> usize {
        (rand::random::<u64>() % len as u64) as usize
    }
}

impl<F> TieBreak for F
where
    F: FnMut(usize) -> usize,
{
    fn pick(&mut self, len: usize) -> usize {
        self(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_pick_stays_in_range() {
        let mut tb = RandomTieBreak;
        for len in 1..20 {
            assert!(tb.pick(len) < len);
        }
    }

    #[test]
    fn closures_are_tie_breaks() {
        let mut last = |len: usize| len - 1;
        assert_eq!(last.pick(5), 4);
    }
}
