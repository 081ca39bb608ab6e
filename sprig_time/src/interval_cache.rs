use std::sync::Arc;

use ahash::AHashMap;
use log::trace;

/// "Suspend for this many seconds." Immutable once created.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub seconds: f32,
}

impl Interval {
    pub const fn new(seconds: f32) -> Self {
        Self { seconds }
    }
}

/// How a duration is turned into a cache key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IntervalKeyPolicy {
    /// Bit-exact `f32` equality: `0.3` and the next representable `f32` are different entries.
    #[default]
    Exact,
    /// Rounded to whole milliseconds before keying. Durations with no
    /// millisecond representation in `i64` (NaN, infinities, huge values)
    /// fall back to bit-exact keys.
    Millis,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum IntervalKey {
    Bits(u32),
    Millis(i64),
}

impl IntervalKeyPolicy {
    fn key(self, seconds: f32) -> IntervalKey {
        match self {
            Self::Exact => IntervalKey::Bits(seconds.to_bits()),
            Self::Millis => {
                let millis = (f64::from(seconds) * 1000.0).round();
                if millis.is_finite() && millis.abs() < i64::MAX as f64 {
                    IntervalKey::Millis(millis as i64)
                } else {
                    IntervalKey::Bits(seconds.to_bits())
                }
            }
        }
    }
}

/// Memoizes [`Interval`] descriptors by duration. Entries are never evicted.
///
/// Lookups and inserts take `&mut self`; share it across threads behind a `Mutex`.
#[derive(Debug, Default)]
pub struct IntervalCache {
    policy: IntervalKeyPolicy,
    entries: AHashMap<IntervalKey, Arc<Interval>>,
}

impl IntervalCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: IntervalKeyPolicy) -> Self {
        Self {
            policy,
            entries: AHashMap::default(),
        }
    }

    pub fn key_policy(&self) -> IntervalKeyPolicy {
        self.policy
    }

    /// Cached descriptor for `seconds`, created on first request.
    /// Every later call with the same key returns the same `Arc`.
    pub fn get_interval(&mut self, seconds: f32) -> Arc<Interval> {
        let key = self.policy.key(seconds);
        self.entries
            .entry(key)
            .or_insert_with(|| {
                trace!("interval cache miss for {seconds}s");
                Arc::new(Interval::new(seconds))
            })
            .clone()
    }

    pub fn contains(&self, seconds: f32) -> bool {
        self.entries.contains_key(&self.policy.key(seconds))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
