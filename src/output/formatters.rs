//! Formatting utilities for terminal output

/// Render letters as tiles, e.g. `[A][P][P]`
#[must_use]
pub fn letter_tiles(letters: &str) -> String {
    letters
        .chars()
        .flat_map(char::to_uppercase)
        .map(|c| format!("[{c}]"))
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Lay out words in rows of at most `per_row`, separated by two spaces
#[must_use]
pub fn word_columns(words: &[String], per_row: usize) -> Vec<String> {
    words
        .chunks(per_row.max(1))
        .map(|row| row.join("  "))
        .collect()
}
