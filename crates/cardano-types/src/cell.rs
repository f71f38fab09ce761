// ─────────────────────────────────────────────────────────────────────
// Matrix Calculator — Cell Input
// ─────────────────────────────────────────────────────────────────────
//! Per-cell text handling shared by the solver and the form layer.
//!
//! A form accepts edits with [`accepts_partial_input`] while the user is
//! typing, so intermediate states such as `"-"` or `"3."` are allowed.
//! The solver later requires every cell to pass [`parse_cell`].

/// Whether `value` is an acceptable in-progress edit of a numeric cell.
///
/// Matches `^-?\d*\.?\d*$`: an optional leading minus, ASCII digits, and
/// at most one decimal point. The empty string is accepted.
pub fn accepts_partial_input(value: &str) -> bool {
    let body = value.strip_prefix('-').unwrap_or(value);
    let mut seen_point = false;
    for ch in body.chars() {
        match ch {
            '0'..='9' => {}
            '.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }
    true
}

/// Parse a cell to a finite `f64`. Surrounding whitespace is ignored.
pub fn parse_cell(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_input_accepts_numeric_prefixes() {
        for s in ["", "-", "0", "12", "-3.", ".5", "-.", "10.25"] {
            assert!(accepts_partial_input(s), "{s:?} should be accepted");
        }
    }

    #[test]
    fn test_partial_input_rejects_garbage() {
        for s in ["a", "1.2.3", "--1", "1-", "+1", "1e5", " 1", "∞"] {
            assert!(!accepts_partial_input(s), "{s:?} should be rejected");
        }
    }

    #[test]
    fn test_parse_cell_finite() {
        assert_eq!(parse_cell("2"), Some(2.0));
        assert_eq!(parse_cell(" -1.5 "), Some(-1.5));
        assert_eq!(parse_cell(".25"), Some(0.25));
    }

    #[test]
    fn test_parse_cell_rejects() {
        for s in ["", "-", ".", "abc", "1.2.3", "inf", "-inf", "NaN", "1e400"] {
            assert_eq!(parse_cell(s), None, "{s:?} should not parse");
        }
    }
}
