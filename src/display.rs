//! Showroom display format: whole units, `.` as the thousands separator,
//! euro suffix. Pricing never rounds; only these helpers do.

/// Group an integer's digits in threes with `.`.
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// `25794.44` -> `25.794 €`
pub fn format_eur(amount: f64) -> String {
    format!("{} €", group_thousands(amount.round() as i64))
}

/// `78000` -> `78.000 km`
pub fn format_km(km: u32) -> String {
    format!("{} km", group_thousands(i64::from(km)))
}

pub fn format_range(min: f64, max: f64) -> String {
    format!("{} – {}", format_eur(min), format_eur(max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_200), "1.200");
        assert_eq!(group_thousands(250_000), "250.000");
        assert_eq!(group_thousands(1_234_567), "1.234.567");
        assert_eq!(group_thousands(-45_000), "-45.000");
    }

    #[test]
    fn euros_round_to_whole_units() {
        assert_eq!(format_eur(25_794.44), "25.794 €");
        assert_eq!(format_eur(1_199.5), "1.200 €");
    }

    #[test]
    fn range_and_km() {
        assert_eq!(format_range(24_246.78, 27_342.11), "24.247 € – 27.342 €");
        assert_eq!(format_km(78_000), "78.000 km");
    }
}
