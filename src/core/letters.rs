//! Letter multisets
//!
//! A `LetterCounts` maps each character to how many times it occurs. All of the
//! letter accounting in the engine (what a puzzle offers, what has been used, what
//! a word needs) is expressed as operations on these counts.

use rustc_hash::FxHashMap;
use std::fmt;

/// A multiset of characters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts {
    counts: FxHashMap<char, u32>,
}

impl LetterCounts {
    /// Create an empty multiset
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the letters of a word after lower-casing it
    ///
    /// # Examples
    /// ```
    /// use wordpool::core::LetterCounts;
    ///
    /// let counts = LetterCounts::from_word("Apple");
    /// assert_eq!(counts.count('p'), 2);
    /// assert_eq!(counts.count('a'), 1);
    /// assert_eq!(counts.total(), 5);
    /// ```
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        Self::from_chars(word.chars().flat_map(char::to_lowercase))
    }

    /// Count an arbitrary sequence of characters as given
    pub fn from_chars<I: IntoIterator<Item = char>>(chars: I) -> Self {
        let mut counts = FxHashMap::default();
        for ch in chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Occurrences of `ch` (zero when absent)
    #[inline]
    #[must_use]
    pub fn count(&self, ch: char) -> u32 {
        self.counts.get(&ch).copied().unwrap_or(0)
    }

    /// Total number of characters, duplicates included
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Number of distinct characters
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// `true` if no character is held
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate `(char, count)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (char, u32)> + '_ {
        self.counts.iter().map(|(&ch, &n)| (ch, n))
    }

    /// Per-character difference, floored at zero
    ///
    /// Characters whose count drops to zero are removed, so the result never
    /// reports a letter it does not hold.
    #[must_use]
    pub fn saturating_sub(&self, other: &Self) -> Self {
        let counts = self
            .counts
            .iter()
            .filter_map(|(&ch, &n)| {
                let left = n.saturating_sub(other.count(ch));
                (left > 0).then_some((ch, left))
            })
            .collect();
        Self { counts }
    }

    /// First character of `needed` that this multiset cannot supply
    ///
    /// Stops at the first shortfall found.
    #[must_use]
    pub fn first_shortfall(&self, needed: &Self) -> Option<char> {
        needed
            .counts
            .iter()
            .find(|&(&ch, &n)| self.count(ch) < n)
            .map(|(&ch, _)| ch)
    }

    /// `true` iff every character of `needed` is available in sufficient quantity
    #[inline]
    #[must_use]
    pub fn covers(&self, needed: &Self) -> bool {
        self.first_shortfall(needed).is_none()
    }

    /// `true` iff this multiset is contained in `other`
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        other.covers(self)
    }
}

impl fmt::Display for LetterCounts {
    /// Letters in sorted order, each repeated by its count
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pairs: Vec<(char, u32)> = self.iter().collect();
        pairs.sort_unstable();
        for (ch, n) in pairs {
            for _ in 0..n {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

impl FromIterator<char> for LetterCounts {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::from_chars(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_word_lowercases() {
        let counts = LetterCounts::from_word("ApPlE");
        assert_eq!(counts.count('a'), 1);
        assert_eq!(counts.count('p'), 2);
        assert_eq!(counts.count('l'), 1);
        assert_eq!(counts.count('e'), 1);
        assert_eq!(counts.count('A'), 0);
        assert_eq!(counts.distinct(), 4);
    }

    #[test]
    fn from_chars_keeps_case() {
        let counts = LetterCounts::from_chars("aA".chars());
        assert_eq!(counts.count('a'), 1);
        assert_eq!(counts.count('A'), 1);
    }

    #[test]
    fn empty_counts() {
        let counts = LetterCounts::new();
        assert!(counts.is_empty());
        assert_eq!(counts.total(), 0);
        assert_eq!(counts.to_string(), "");
    }

    #[test]
    fn saturating_sub_floors_at_zero() {
        let puzzle = LetterCounts::from_word("apple");
        let used = LetterCounts::from_word("appzz");
        let left = puzzle.saturating_sub(&used);

        assert_eq!(left.count('p'), 0);
        assert_eq!(left.count('a'), 0);
        assert_eq!(left.count('z'), 0);
        assert_eq!(left.count('l'), 1);
        assert_eq!(left.count('e'), 1);
        assert_eq!(left.distinct(), 2);
    }

    #[test]
    fn saturating_sub_more_than_available() {
        let puzzle = LetterCounts::from_word("ab");
        let used = LetterCounts::from_word("aaab");
        assert!(puzzle.saturating_sub(&used).is_empty());
    }

    #[test]
    fn covers_respects_multiplicity() {
        let pool = LetterCounts::from_word("apple");
        assert!(pool.covers(&LetterCounts::from_word("pal")));
        assert!(pool.covers(&LetterCounts::from_word("apple")));
        assert!(!pool.covers(&LetterCounts::from_word("appple")));
        assert!(!pool.covers(&LetterCounts::from_word("zap")));
    }

    #[test]
    fn covers_empty_word() {
        let pool = LetterCounts::new();
        assert!(pool.covers(&LetterCounts::new()));
        assert!(!pool.covers(&LetterCounts::from_word("a")));
    }

    #[test]
    fn first_shortfall_reports_missing_letter() {
        let pool = LetterCounts::from_word("le");
        let shortfall = pool.first_shortfall(&LetterCounts::from_word("eel"));
        assert_eq!(shortfall, Some('e'));
        assert_eq!(pool.first_shortfall(&LetterCounts::from_word("el")), None);
    }

    #[test]
    fn first_shortfall_agrees_with_full_scan() {
        let pool = LetterCounts::from_word("lava");
        for word in ["lava", "val", "al", "aval", "valla", "x", "aaa"] {
            let needed = LetterCounts::from_word(word);
            let full_scan = needed.iter().all(|(ch, n)| pool.count(ch) >= n);
            assert_eq!(pool.covers(&needed), full_scan, "disagreement on {word}");
        }
    }

    #[test]
    fn subset_relation() {
        let used = LetterCounts::from_word("pp");
        let puzzle = LetterCounts::from_word("apple");
        assert!(used.is_subset_of(&puzzle));
        assert!(!puzzle.is_subset_of(&used));
    }

    #[test]
    fn display_sorted_with_repeats() {
        let counts = LetterCounts::from_word("apple");
        assert_eq!(counts.to_string(), "aelpp");
    }

    #[test]
    fn collect_from_iterator() {
        let counts: LetterCounts = "lava".chars().collect();
        assert_eq!(counts.count('a'), 2);
        assert_eq!(counts.total(), 4);
    }
}
