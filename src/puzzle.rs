//! Puzzle string generation

use rand::Rng;

/// Length of a default puzzle
pub const PUZZLE_LENGTH: usize = 14;

/// Draw `len` lowercase ASCII letters uniformly at random
///
/// # Examples
/// ```
/// use wordpool::puzzle::generate;
///
/// let puzzle = generate(&mut rand::rng(), 14);
/// assert_eq!(puzzle.len(), 14);
/// assert!(puzzle.chars().all(|c| c.is_ascii_lowercase()));
/// ```
pub fn generate<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| char::from(rng.random_range(b'a'..=b'z')))
        .collect()
}
