use crate::class::{Class, N_CLASSES};

/// Per-class values computed on first use and kept until [`ClassMemo::reset()`] is called.
pub struct ClassMemo<T> {
    values: [Option<T>; N_CLASSES],
}

impl<T> ClassMemo<T>
where
    T: Copy,
{
    pub const fn new() -> Self {
        Self {
            values: [None; N_CLASSES],
        }
    }

    /// Returns the cached value of `class`, computing it with `f` on a miss.
    pub fn get_or_insert_with<F>(&mut self, class: Class, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        *self.values[class.index()].get_or_insert_with(f)
    }

    #[cfg(test)]
    pub fn is_cached(&self, class: Class) -> bool {
        self.values[class.index()].is_some()
    }

    /// Forgets all cached values. Must be called whenever the underlying counts change.
    pub fn reset(&mut self) {
        self.values = [None; N_CLASSES];
    }
}

impl<T> Default for ClassMemo<T>
where
    T: Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the index of the maximum score. Only a strictly greater score replaces the current
/// best, so the lowest index wins a tie.
pub fn argmax(scores: &[f64; N_CLASSES]) -> usize {
    let mut max_idx = 0;
    for (i, &score) in scores.iter().enumerate().skip(1) {
        if scores[max_idx] < score {
            max_idx = i;
        }
    }
    max_idx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_memo_computes_once() {
        let mut memo = ClassMemo::new();
        let mut calls = 0;
        for _ in 0..3 {
            let v = memo.get_or_insert_with(Class::Negative, || {
                calls += 1;
                42u64
            });
            assert_eq!(42, v);
        }
        assert_eq!(1, calls);
        assert!(memo.is_cached(Class::Negative));
        assert!(!memo.is_cached(Class::Positive));
    }

    #[test]
    fn test_class_memo_reset() {
        let mut memo = ClassMemo::new();
        memo.get_or_insert_with(Class::Positive, || 1.5);
        memo.reset();
        assert!(!memo.is_cached(Class::Positive));
        assert_eq!(2.5, memo.get_or_insert_with(Class::Positive, || 2.5));
    }

    #[test]
    fn test_argmax_first_wins_ties() {
        assert_eq!(0, argmax(&[1.0, 1.0, 1.0, 1.0]));
        assert_eq!(1, argmax(&[0.0, 2.0, 2.0, 1.0]));
        assert_eq!(3, argmax(&[-3.0, -2.0, -1.5, -1.0]));
    }

    #[test]
    fn test_argmax_negative_infinity() {
        assert_eq!(
            2,
            argmax(&[f64::NEG_INFINITY, f64::NEG_INFINITY, -10.0, f64::NEG_INFINITY])
        );
        assert_eq!(0, argmax(&[f64::NEG_INFINITY; N_CLASSES]));
    }
}
