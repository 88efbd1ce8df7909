//! Owned byte strings with substring search.
//!
//! [`ByteString::find`] uses Knuth-Morris-Pratt with the optimised failure
//! table: when the mismatched byte equals the byte the fallback would try
//! next, the table skips straight past it.

use std::fmt;

/// An owned, length-prefixed run of bytes.
///
/// Ordering is lexicographic by byte; a proper prefix sorts first.
///
/// # Example
///
/// ```
/// use nexus_kit::ByteString;
///
/// let hello = ByteString::from("hello, ");
/// let world = ByteString::from("world");
/// let both = hello.concat(&world);
///
/// assert_eq!(both.to_string(), "hello, world");
/// assert_eq!(both.slice(-5, 12), Some(world.clone()));
/// assert_eq!(both.find(&world), Some(7));
/// assert!(hello < world);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteString {
    bytes: Vec<u8>,
}

impl ByteString {
    /// Creates an empty string.
    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Returns the length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the string has no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns a new string holding `self` followed by `other`.
    pub fn concat(&self, other: &ByteString) -> ByteString {
        let mut bytes = Vec::with_capacity(self.len() + other.len());
        bytes.extend_from_slice(&self.bytes);
        bytes.extend_from_slice(&other.bytes);
        ByteString { bytes }
    }

    /// Returns the bytes in `begin..end` as a new string.
    ///
    /// Negative bounds count from the end: `-k` means `len - k`. Returns
    /// `None` if either bound falls outside `0..=len` after that adjustment
    /// or if `end < begin`. `begin == end` yields an empty string.
    ///
    /// ```
    /// use nexus_kit::ByteString;
    ///
    /// let s = ByteString::from("abcdef");
    /// assert_eq!(s.slice(1, 3), Some(ByteString::from("bc")));
    /// assert_eq!(s.slice(-3, -1), Some(ByteString::from("de")));
    /// assert_eq!(s.slice(4, 2), None);
    /// assert_eq!(s.slice(0, 7), None);
    /// ```
    pub fn slice(&self, begin: isize, end: isize) -> Option<ByteString> {
        let begin = self.resolve(begin)?;
        let end = self.resolve(end)?;
        if end < begin {
            return None;
        }
        Some(ByteString::from(&self.bytes[begin..end]))
    }

    fn resolve(&self, index: isize) -> Option<usize> {
        let len = self.len();
        let resolved = if index < 0 {
            len.checked_sub(index.unsigned_abs())?
        } else {
            index.unsigned_abs()
        };
        (resolved <= len).then_some(resolved)
    }

    /// Returns the byte offset of the first occurrence of `pattern`.
    ///
    /// The empty pattern matches at 0.
    pub fn find(&self, pattern: &ByteString) -> Option<usize> {
        let text = self.as_bytes();
        let pattern = pattern.as_bytes();
        if pattern.is_empty() {
            return Some(0);
        }

        let fallback = failure_table(pattern);
        let m = pattern.len() as isize;
        let (mut i, mut j) = (0usize, 0isize);
        while i < text.len() && j < m {
            if j < 0 || text[i] == pattern[j as usize] {
                i += 1;
                j += 1;
            } else {
                j = fallback[j as usize];
            }
        }

        (j == m).then(|| i - pattern.len())
    }
}

/// Builds the optimised KMP fallback table. `-1` means "advance the text".
fn failure_table(pattern: &[u8]) -> Vec<isize> {
    let mut next = vec![-1isize; pattern.len()];
    let (mut i, mut j) = (0usize, -1isize);

    while i + 1 < pattern.len() {
        if j < 0 || pattern[i] == pattern[j as usize] {
            i += 1;
            j += 1;
            next[i] = if pattern[i] == pattern[j as usize] {
                next[j as usize]
            } else {
                j
            };
        } else {
            j = next[j as usize];
        }
    }
    next
}

impl From<&[u8]> for ByteString {
    fn from(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }
}

impl From<&str> for ByteString {
    fn from(s: &str) -> Self {
        Self::from(s.as_bytes())
    }
}

impl From<Vec<u8>> for ByteString {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl fmt::Display for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bs(s: &str) -> ByteString {
        ByteString::from(s)
    }

    // ========================================================================
    // Construction and concat
    // ========================================================================

    #[test]
    fn empty_and_len() {
        assert!(ByteString::new().is_empty());
        assert_eq!(bs("abc").len(), 3);
        assert_eq!(bs("").as_bytes(), b"");
    }

    #[test]
    fn concat_either_side_empty() {
        assert_eq!(bs("ab").concat(&bs("cd")), bs("abcd"));
        assert_eq!(bs("").concat(&bs("cd")), bs("cd"));
        assert_eq!(bs("ab").concat(&bs("")), bs("ab"));
        assert!(bs("").concat(&bs("")).is_empty());
    }

    // ========================================================================
    // Slicing
    // ========================================================================

    #[test]
    fn slice_positive() {
        let s = bs("abcdef");
        assert_eq!(s.slice(0, 6), Some(bs("abcdef")));
        assert_eq!(s.slice(2, 2), Some(bs("")));
        assert_eq!(s.slice(5, 6), Some(bs("f")));
        assert_eq!(s.slice(6, 6), Some(bs("")));
    }

    #[test]
    fn slice_negative() {
        let s = bs("abcdef");
        assert_eq!(s.slice(-6, -3), Some(bs("abc")));
        assert_eq!(s.slice(-1, 6), Some(bs("f")));
        assert_eq!(s.slice(0, -1), Some(bs("abcde")));
        assert_eq!(s.slice(-7, 2), None);
    }

    #[test]
    fn slice_rejects_out_of_range() {
        let s = bs("abc");
        assert_eq!(s.slice(0, 4), None);
        assert_eq!(s.slice(4, 4), None);
        assert_eq!(s.slice(2, 1), None);
        assert_eq!(s.slice(-1, -2), None);
        assert_eq!(s.slice(isize::MIN, 0), None);
    }

    // ========================================================================
    // Ordering
    // ========================================================================

    #[test]
    fn ordering_is_bytewise_then_length() {
        assert!(bs("abc") < bs("abd"));
        assert!(bs("ab") < bs("abc"));
        assert!(bs("") < bs("a"));
        assert!(bs("b") > bs("abc"));
        assert_eq!(bs("same").cmp(&bs("same")), std::cmp::Ordering::Equal);
    }

    // ========================================================================
    // KMP search
    // ========================================================================

    #[test]
    fn failure_table_is_optimised() {
        assert_eq!(failure_table(b"abab"), vec![-1, 0, -1, 0]);
        assert_eq!(failure_table(b"aaaa"), vec![-1, -1, -1, -1]);
        assert_eq!(failure_table(b"abcabd"), vec![-1, 0, 0, -1, 0, 2]);
    }

    #[test]
    fn find_basic() {
        let text = bs("ababcabcacbab");
        assert_eq!(text.find(&bs("abcac")), Some(5));
        assert_eq!(text.find(&bs("ab")), Some(0));
        assert_eq!(text.find(&bs("bab")), Some(1));
        assert_eq!(text.find(&bs("cbab")), Some(9));
        assert_eq!(text.find(&bs("abd")), None);
    }

    #[test]
    fn find_edges() {
        assert_eq!(bs("abc").find(&bs("")), Some(0));
        assert_eq!(bs("").find(&bs("")), Some(0));
        assert_eq!(bs("").find(&bs("a")), None);
        assert_eq!(bs("ab").find(&bs("abc")), None);
        assert_eq!(bs("abc").find(&bs("abc")), Some(0));
        assert_eq!(bs("aaab").find(&bs("aab")), Some(1));
    }

    #[test]
    fn find_matches_naive_search() {
        use rand::rngs::SmallRng;
        use rand::{Rng, SeedableRng};

        let mut rng = SmallRng::seed_from_u64(17);
        for _ in 0..2000 {
            let text: Vec<u8> = (0..rng.random_range(0..40))
                .map(|_| rng.random_range(b'a'..=b'c'))
                .collect();
            let pattern: Vec<u8> = (0..rng.random_range(1..6))
                .map(|_| rng.random_range(b'a'..=b'c'))
                .collect();

            let expected = text.windows(pattern.len()).position(|w| w == pattern.as_slice());
            let found = ByteString::from(text.clone()).find(&ByteString::from(pattern.clone()));
            assert_eq!(found, expected, "{text:?} / {pattern:?}");
        }
    }

    #[test]
    fn display_is_lossy() {
        assert_eq!(bs("hi").to_string(), "hi");
        assert_eq!(ByteString::from(vec![b'a', 0xff]).to_string(), "a\u{fffd}");
    }
}
