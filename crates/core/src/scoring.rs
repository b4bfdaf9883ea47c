//! Line-clear scoring
//!
//! Clearing `n` rows with one piece awards `n²`, so multi-row clears pay more
//! than the same rows cleared one at a time.

/// Points for clearing `lines` rows at once
pub fn line_clear_score(lines: usize) -> u32 {
    let lines = lines as u32;
    lines.saturating_mul(lines)
}
