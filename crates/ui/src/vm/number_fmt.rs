/// Rounds halves up (`42.5 → 43`, `-0.5 → 0`), the way browsers round.
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Whole-number percentage label, e.g. `43%`.
#[must_use]
pub fn format_percentage(value: f64) -> String {
    format!("{:.0}%", round_half_up(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halves_round_up() {
        assert_eq!(round_half_up(42.5), 43.0);
        assert_eq!(round_half_up(42.49), 42.0);
        assert_eq!(round_half_up(0.0), 0.0);
    }

    #[test]
    fn percentage_label_has_no_decimals() {
        assert_eq!(format_percentage(42.6), "43%");
        assert_eq!(format_percentage(100.0), "100%");
    }
}
