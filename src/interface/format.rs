/// Money with the 2-decimal display convention; non-finite renders as
/// zero (totals are already sanitized, this is the last line of defense).
pub fn money(n: f64) -> String {
    if !n.is_finite() {
        return "0.00".to_string();
    }
    format!("{:.2}", n)
}

/// Money for breakdown rows, where a non-finite value means "unresolvable"
/// and must show as N/A rather than a number.
pub fn money_or_na(n: f64) -> String {
    if n.is_finite() { money(n) } else { "N/A".to_string() }
}

/// Ratio as a percentage with one decimal.
pub fn pct(n: f64) -> String {
    if !n.is_finite() {
        return "0.0".to_string();
    }
    format!("{:.1}", n * 100.0)
}

/// Quantity with up to three decimals, trailing zeros trimmed.
pub fn num(n: f64) -> String {
    if !n.is_finite() {
        return "0".to_string();
    }
    let s = format!("{:.3}", n);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money() {
        assert_eq!(money(0.2), "0.20");
        assert_eq!(money(3.0), "3.00");
        assert_eq!(money(f64::NAN), "0.00");
        assert_eq!(money(f64::INFINITY), "0.00");
    }

    #[test]
    fn test_money_or_na() {
        assert_eq!(money_or_na(0.5), "0.50");
        assert_eq!(money_or_na(f64::NAN), "N/A");
    }

    #[test]
    fn test_pct() {
        assert_eq!(pct(0.305), "30.5");
        assert_eq!(pct(f64::NAN), "0.0");
    }

    #[test]
    fn test_num_trims_trailing_zeros() {
        assert_eq!(num(1000.0), "1000");
        assert_eq!(num(0.2), "0.2");
        assert_eq!(num(2.345), "2.345");
        assert_eq!(num(f64::NAN), "0");
    }
}
