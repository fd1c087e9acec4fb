//! Random index source for quiz selection

use rand::Rng;
use trivia_domain::IndexPicker;

/// [`IndexPicker`] backed by the thread-local generator
///
/// Holds no state; each call borrows the calling thread's generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngPicker;

impl IndexPicker for ThreadRngPicker {
    fn pick(&self, upper: usize) -> usize {
        rand::thread_rng().gen_range(0..upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_stays_in_range() {
        let picker = ThreadRngPicker;
        for upper in 1..50 {
            assert!(picker.pick(upper) < upper);
        }
        assert_eq!(picker.pick(1), 0);
    }

    #[test]
    fn test_pick_is_roughly_uniform() {
        let picker = ThreadRngPicker;
        let mut counts = [0usize; 4];
        let draws = 40_000;
        for _ in 0..draws {
            counts[picker.pick(4)] += 1;
        }
        // Expected 10_000 each; 9_000..11_000 is far outside normal variance.
        for count in counts {
            assert!((9_000..11_000).contains(&count), "counts: {counts:?}");
        }
    }
}
