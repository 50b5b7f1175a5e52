use std::sync::atomic::{AtomicU64, Ordering};

/// A running maximum shared between workers.
///
/// Stores the bit pattern of an `f64` in an `AtomicU64`; [`fold`] is a
/// read-compare-write performed as one compare-exchange loop, so concurrent
/// folds never lose an update.
///
/// [`fold`]: GlobalMaximum::fold
#[derive(Debug)]
pub struct GlobalMaximum {
    bits: AtomicU64,
}

impl GlobalMaximum {
    /// Start from `initial`.
    pub fn new(initial: f64) -> Self {
        GlobalMaximum {
            bits: AtomicU64::new(initial.to_bits()),
        }
    }

    /// Raise the maximum to `candidate` if it is larger.
    ///
    /// NaN candidates never win.
    pub fn fold(&self, candidate: f64) {
        // Err only means the current value already wins; nothing to store.
        let _ = self
            .bits
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                (candidate > f64::from_bits(current)).then(|| candidate.to_bits())
            });
    }

    /// Consume and return the final value.
    pub fn into_inner(self) -> f64 {
        f64::from_bits(self.bits.into_inner())
    }
}

impl Default for GlobalMaximum {
    fn default() -> Self {
        Self::new(f64::NEG_INFINITY)
    }
}
