//! Amortised grow/shrink policy for the contiguous stores.
//!
//! Below the threshold, capacity roughly doubles (`c -> 2c + 1`). At or above
//! it, capacity grows by the growth ratio (default `5/4`). Shrinking uses a
//! coarser trigger than growth (`len * shrink_divisor <= capacity`) so a
//! store sitting near a boundary does not reallocate on every operation.
//!
//! ```
//! use nexus_seq::GrowthPolicy;
//!
//! let policy = GrowthPolicy::DEFAULT;
//! assert_eq!(policy.grow(0), Some(1));
//! assert_eq!(policy.grow(100), Some(201));
//! assert_eq!(policy.grow(256), Some(320));
//!
//! assert!(policy.should_shrink(300, 600));
//! assert!(!policy.should_shrink(300, 599));
//! assert!(!policy.should_shrink(200, 1000)); // below threshold
//! assert_eq!(policy.shrink_target(300), 375);
//! ```

use thiserror::Error;

const DEFAULT_THRESHOLD: usize = 256;
const DEFAULT_GROWTH_NUM: usize = 5;
const DEFAULT_GROWTH_DEN: usize = 4;
const DEFAULT_SHRINK_DIVISOR: usize = 2;

/// Capacity management constants for the array and index-indirected stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GrowthPolicy {
    threshold: usize,
    growth_num: usize,
    growth_den: usize,
    shrink_divisor: usize,
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl GrowthPolicy {
    /// Threshold 256, growth `5/4`, shrink when at most half full.
    pub const DEFAULT: Self = Self {
        threshold: DEFAULT_THRESHOLD,
        growth_num: DEFAULT_GROWTH_NUM,
        growth_den: DEFAULT_GROWTH_DEN,
        shrink_divisor: DEFAULT_SHRINK_DIVISOR,
    };

    /// Returns a builder starting from the default policy.
    #[inline]
    pub fn builder() -> PolicyBuilder {
        PolicyBuilder::default()
    }

    /// Capacity below which growth is `c -> 2c + 1`.
    #[inline]
    pub const fn threshold(&self) -> usize {
        self.threshold
    }

    /// Growth ratio as `(numerator, denominator)`.
    #[inline]
    pub const fn growth(&self) -> (usize, usize) {
        (self.growth_num, self.growth_den)
    }

    /// Shrink triggers when `len * shrink_divisor <= capacity`.
    #[inline]
    pub const fn shrink_divisor(&self) -> usize {
        self.shrink_divisor
    }

    /// Returns the next capacity after `capacity`, or `None` on overflow.
    ///
    /// The result is always strictly greater than `capacity`.
    pub fn grow(&self, capacity: usize) -> Option<usize> {
        if capacity < self.threshold {
            capacity.checked_mul(2)?.checked_add(1)
        } else {
            let scaled = capacity.checked_mul(self.growth_num)? / self.growth_den;
            Some(scaled.max(capacity.checked_add(1)?))
        }
    }

    /// Returns `true` if a removal at `len` elements should reallocate.
    ///
    /// `len` is the length before the removal.
    #[inline]
    pub fn should_shrink(&self, len: usize, capacity: usize) -> bool {
        len > self.threshold
            && len
                .checked_mul(self.shrink_divisor)
                .is_some_and(|scaled| scaled <= capacity)
    }

    /// Capacity to reallocate to when shrinking at `len` elements.
    ///
    /// Never smaller than `len`.
    #[inline]
    pub fn shrink_target(&self, len: usize) -> usize {
        len.checked_mul(self.growth_num)
            .map_or(len, |scaled| scaled / self.growth_den)
            .max(len)
    }
}

/// Error from [`PolicyBuilder::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// Growth ratio must be strictly greater than one.
    #[error("growth ratio {num}/{den} must be greater than 1")]
    GrowthNotIncreasing {
        /// Numerator.
        num: usize,
        /// Denominator.
        den: usize,
    },
    /// Shrink divisor must be at least two, or a shrunk buffer could be
    /// immediately full again.
    #[error("shrink divisor {0} must be at least 2")]
    ShrinkDivisorTooSmall(usize),
}

/// Builder for [`GrowthPolicy`].
///
/// ```
/// use nexus_seq::GrowthPolicy;
///
/// let policy = GrowthPolicy::builder()
///     .threshold(16)
///     .growth(3, 2)
///     .shrink_divisor(4)
///     .build()
///     .unwrap();
/// assert_eq!(policy.grow(16), Some(24));
/// ```
#[derive(Debug, Clone)]
pub struct PolicyBuilder {
    policy: GrowthPolicy,
}

impl Default for PolicyBuilder {
    fn default() -> Self {
        Self {
            policy: GrowthPolicy::DEFAULT,
        }
    }
}

impl PolicyBuilder {
    /// Capacity below which growth doubles. Default: 256.
    pub fn threshold(mut self, threshold: usize) -> Self {
        self.policy.threshold = threshold;
        self
    }

    /// Growth ratio at or above the threshold. Default: `5/4`.
    pub fn growth(mut self, num: usize, den: usize) -> Self {
        self.policy.growth_num = num;
        self.policy.growth_den = den;
        self
    }

    /// Shrink trigger divisor. Default: 2.
    pub fn shrink_divisor(mut self, divisor: usize) -> Self {
        self.policy.shrink_divisor = divisor;
        self
    }

    /// Validates and returns the policy.
    pub fn build(self) -> Result<GrowthPolicy, PolicyError> {
        let GrowthPolicy {
            growth_num,
            growth_den,
            shrink_divisor,
            ..
        } = self.policy;

        if growth_den == 0 || growth_num <= growth_den {
            return Err(PolicyError::GrowthNotIncreasing {
                num: growth_num,
                den: growth_den,
            });
        }
        if shrink_divisor < 2 {
            return Err(PolicyError::ShrinkDivisorTooSmall(shrink_divisor));
        }

        Ok(self.policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grow_below_threshold_doubles_plus_one() {
        let policy = GrowthPolicy::DEFAULT;
        let mut cap = 0;
        let mut seen = Vec::new();
        while cap < 256 {
            cap = policy.grow(cap).unwrap();
            seen.push(cap);
        }
        assert_eq!(seen, vec![1, 3, 7, 15, 31, 63, 127, 255, 511]);
    }

    #[test]
    fn grow_above_threshold_is_five_quarters() {
        let policy = GrowthPolicy::DEFAULT;
        assert_eq!(policy.grow(511), Some(638));
        assert_eq!(policy.grow(1000), Some(1250));
    }

    #[test]
    fn grow_always_increases() {
        let policy = GrowthPolicy::builder().threshold(0).build().unwrap();
        assert_eq!(policy.grow(0), Some(1));
        assert_eq!(policy.grow(1), Some(2));
        assert_eq!(policy.grow(3), Some(4));
    }

    #[test]
    fn grow_overflow() {
        assert_eq!(GrowthPolicy::DEFAULT.grow(usize::MAX), None);
        assert_eq!(GrowthPolicy::DEFAULT.grow(usize::MAX / 2), None);
    }

    #[test]
    fn shrink_trigger_has_hysteresis() {
        let policy = GrowthPolicy::DEFAULT;
        let len = 400;
        let target = policy.shrink_target(len);
        assert_eq!(target, 500);
        // After shrinking and removing one element the next removal must not
        // trigger another reallocation.
        assert!(!policy.should_shrink(len - 1, target));
    }

    #[test]
    fn builder_rejects_bad_values() {
        assert_eq!(
            GrowthPolicy::builder().growth(1, 1).build(),
            Err(PolicyError::GrowthNotIncreasing { num: 1, den: 1 })
        );
        assert_eq!(
            GrowthPolicy::builder().growth(3, 0).build(),
            Err(PolicyError::GrowthNotIncreasing { num: 3, den: 0 })
        );
        assert_eq!(
            GrowthPolicy::builder().shrink_divisor(1).build(),
            Err(PolicyError::ShrinkDivisorTooSmall(1))
        );
    }

    #[test]
    fn default_builder_is_default_policy() {
        assert_eq!(
            GrowthPolicy::builder().build().unwrap(),
            GrowthPolicy::default()
        );
    }

    #[test]
    fn builder_settings_are_readable() {
        let policy = GrowthPolicy::builder()
            .threshold(64)
            .growth(3, 2)
            .shrink_divisor(4)
            .build()
            .unwrap();
        assert_eq!(policy.threshold(), 64);
        assert_eq!(policy.growth(), (3, 2));
        assert_eq!(policy.shrink_divisor(), 4);

        let default = GrowthPolicy::DEFAULT;
        assert_eq!(
            (default.threshold(), default.growth(), default.shrink_divisor()),
            (256, (5, 4), 2)
        );
    }
}
