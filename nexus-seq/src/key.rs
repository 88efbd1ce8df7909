//! Key trait for arena slots and physical slot indices.
//!
//! The [`Key`] trait abstracts over the integer types used to address
//! arena nodes (linked stores) and physical element slots (the
//! index-indirected store). It provides a sentinel value (`NONE`) used as
//! the "no link" marker and checked conversion from `usize`.

/// Trait for key/index types used by the stores.
///
/// Provides a sentinel value (`NONE`) and conversion to/from `usize`.
/// Implemented for the unsigned integer types. Narrow keys shrink node
/// links at the cost of a lower addressable capacity: a `u16` keyed store
/// holds at most `u16::MAX` elements (the maximum itself is the sentinel).
///
/// # Example
///
/// ```
/// use nexus_seq::Key;
///
/// // u32 is a Key with NONE = u32::MAX
/// let key: u32 = 42;
/// assert!(key.is_some());
/// assert!(u32::NONE.is_none());
///
/// assert_eq!(u8::try_from_usize(200), Some(200));
/// assert_eq!(u8::try_from_usize(255), None); // reserved for NONE
/// ```
pub trait Key: Copy + Eq + core::fmt::Debug {
    /// Sentinel value representing "no key" / "null".
    ///
    /// Used internally to represent empty links in node chains.
    const NONE: Self;

    /// Creates a key from a `usize` value, or `None` if the value does not
    /// fit or collides with the sentinel.
    fn try_from_usize(val: usize) -> Option<Self>;

    /// Creates a key from a `usize` value the caller knows to be in range.
    ///
    /// Values that do not fit are truncated.
    fn from_usize(val: usize) -> Self;

    /// Returns the key as a `usize`.
    fn as_usize(&self) -> usize;

    /// Returns `true` if this is the sentinel value.
    #[inline]
    fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// Returns `true` if this is NOT the sentinel value.
    #[inline]
    fn is_some(&self) -> bool {
        !self.is_none()
    }
}

macro_rules! impl_key_for_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Key for $ty {
                const NONE: Self = <$ty>::MAX;

                #[inline]
                fn try_from_usize(val: usize) -> Option<Self> {
                    match <$ty>::try_from(val) {
                        Ok(key) if key != Self::NONE => Some(key),
                        _ => None,
                    }
                }

                #[inline]
                fn from_usize(val: usize) -> Self {
                    val as Self
                }

                #[inline]
                fn as_usize(&self) -> usize {
                    *self as usize
                }
            }
        )*
    };
}

impl_key_for_unsigned!(u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_key_sentinel {
        ($($ty:ty => $name:ident),*) => {
            $(
                #[test]
                fn $name() {
                    assert!(<$ty>::NONE.is_none());
                    assert!(!<$ty>::NONE.is_some());
                    assert!((0 as $ty).is_some());
                    assert!((<$ty>::MAX - 1).is_some());
                }
            )*
        };
    }

    test_key_sentinel!(
        u8 => u8_sentinel,
        u16 => u16_sentinel,
        u32 => u32_sentinel,
        u64 => u64_sentinel,
        usize => usize_sentinel
    );

    #[test]
    fn try_from_usize_roundtrip() {
        for i in [0usize, 1, 100, 1000, u16::MAX as usize - 1] {
            let key = u32::try_from_usize(i).unwrap();
            assert_eq!(key.as_usize(), i);
        }
    }

    #[test]
    fn try_from_usize_rejects_sentinel_and_overflow() {
        assert_eq!(u8::try_from_usize(u8::MAX as usize), None);
        assert_eq!(u8::try_from_usize(256), None);
        assert_eq!(u16::try_from_usize(70_000), None);
        assert_eq!(usize::try_from_usize(usize::MAX), None);
        assert_eq!(u16::try_from_usize(65_534), Some(65_534));
    }
}
