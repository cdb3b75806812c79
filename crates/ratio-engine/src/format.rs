//! Display formatting for computed metric values.

/// Fraction as a percentage with two decimals, e.g. 0.1234 → "12.34%".
pub fn pct(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Fraction as a percentage with one decimal, e.g. R².
pub fn pct1(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

/// Plain ratio with two decimals.
pub fn ratio(value: f64) -> String {
    format!("{value:.2}")
}

/// Three decimals for index-like values (HHI).
pub fn index3(value: f64) -> String {
    format!("{value:.3}")
}

/// One decimal for count-like values (effective N).
pub fn count1(value: f64) -> String {
    format!("{value:.1}")
}

pub fn days(value: usize) -> String {
    format!("{value} days")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats() {
        assert_eq!(pct(0.1234), "12.34%");
        assert_eq!(pct(-0.1), "-10.00%");
        assert_eq!(pct1(0.987), "98.7%");
        assert_eq!(ratio(1.234), "1.23");
        assert_eq!(index3(0.625), "0.625");
        assert_eq!(count1(1.6), "1.6");
        assert_eq!(days(87), "87 days");
    }
}
