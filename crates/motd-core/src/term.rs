//! Terminal width detection.

/// Detected terminal column count, falling back to 80 when the size cannot
/// be queried (no tty, pipes, CI).
pub fn detect_width() -> u16 {
    match crossterm::terminal::size() {
        Ok((cols, _rows)) if cols > 0 => cols,
        _ => 80,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_width_is_positive() {
        // Detected or fallback, the result is always usable as a line width.
        assert!(detect_width() > 0);
    }
}
