//! Benchmark command
//!
//! Measures enumeration over many random puzzles: how long a full dictionary
//! scan takes and how many words a typical puzzle allows.

use crate::engine::{Dictionary, possible_words};
use crate::puzzle;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub puzzles: usize,
    pub puzzle_length: usize,
    pub total_words: usize,
    pub average_words: f64,
    pub min_words: usize,
    pub max_words: usize,
    /// Puzzle with the most formable words, and that count
    pub richest_puzzle: Option<(String, usize)>,
    /// Longest formable word per puzzle, bucketed by length
    pub longest_word_distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub puzzles_per_second: f64,
}

/// Enumerate words for `count` random puzzles of `len` letters
pub fn run_benchmark<R: Rng>(
    dictionary: &Dictionary,
    count: usize,
    len: usize,
    rng: &mut R,
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        let pb = ProgressBar::new(count as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut total_words = 0;
    let mut min_words = usize::MAX;
    let mut max_words = 0;
    let mut richest_puzzle: Option<(String, usize)> = None;
    let mut longest_word_distribution: BTreeMap<usize, usize> = BTreeMap::new();

    for done in 1..=count {
        let letters = puzzle::generate(rng, len);
        let words = possible_words(dictionary, &letters);
        let found = words.len();

        total_words += found;
        min_words = min_words.min(found);
        max_words = max_words.max(found);
        if richest_puzzle.as_ref().is_none_or(|(_, best)| found > *best) {
            richest_puzzle = Some((letters, found));
        }

        let longest = words.iter().map(|w| w.chars().count()).max().unwrap_or(0);
        *longest_word_distribution.entry(longest).or_insert(0) += 1;

        if done % 10 == 0 {
            pb.set_message(format!("Avg: {:.1} words", total_words as f64 / done as f64));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    BenchmarkResult {
        puzzles: count,
        puzzle_length: len,
        total_words,
        average_words: if count > 0 {
            total_words as f64 / count as f64
        } else {
            0.0
        },
        min_words: if count > 0 { min_words } else { 0 },
        max_words,
        richest_puzzle,
        longest_word_distribution,
        duration,
        puzzles_per_second: count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn benchmark_runs() {
        let dictionary = Dictionary::embedded();
        let mut rng = StdRng::seed_from_u64(11);
        let result = run_benchmark(&dictionary, 10, 14, &mut rng, false);

        assert_eq!(result.puzzles, 10);
        assert_eq!(result.puzzle_length, 14);
        assert!(result.min_words <= result.max_words);
        assert!(result.average_words >= result.min_words as f64);
        assert!(result.average_words <= result.max_words as f64);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let dictionary = Dictionary::embedded();
        let mut rng = StdRng::seed_from_u64(5);
        let result = run_benchmark(&dictionary, 20, 10, &mut rng, false);

        let distribution_sum: usize = result.longest_word_distribution.values().sum();
        assert_eq!(distribution_sum, result.puzzles);
        assert!(result.longest_word_distribution.keys().all(|&len| len <= 10));
    }

    #[test]
    fn benchmark_richest_puzzle_matches_max() {
        let dictionary = Dictionary::embedded();
        let mut rng = StdRng::seed_from_u64(9);
        let result = run_benchmark(&dictionary, 5, 14, &mut rng, false);

        let (letters, found) = result.richest_puzzle.unwrap();
        assert_eq!(found, result.max_words);
        assert_eq!(possible_words(&dictionary, &letters).len(), found);
    }

    #[test]
    fn benchmark_zero_puzzles() {
        let dictionary = Dictionary::embedded();
        let mut rng = StdRng::seed_from_u64(1);
        let result = run_benchmark(&dictionary, 0, 14, &mut rng, false);

        assert_eq!(result.total_words, 0);
        assert_eq!(result.min_words, 0);
        assert!(result.richest_puzzle.is_none());
    }
}
