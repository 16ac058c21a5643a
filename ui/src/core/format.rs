//! Formatting helpers for presenting report values.

use crate::i18n;

/// Group digits in threes per the active locale, `1234567` →
/// `"1,234,567"` (en-US) or `"1.234.567"` (de-DE).
pub fn format_count(value: u64) -> String {
    format_count_for(&i18n::current_language(), value)
}

/// Locale-keyed grouping, split out so it stays pure and testable.
///
/// The separator is presentation only and never round-trips back into a
/// number.
pub fn format_count_for(lang: &str, value: u64) -> String {
    let separator = grouping_separator(lang);
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

/// Grouping separator for the shipped locales, keyed on the primary
/// language subtag. Unknown tags use the fallback locale's comma.
fn grouping_separator(lang: &str) -> char {
    match lang.split(['-', '_']).next().unwrap_or("") {
        "de" => '.',
        _ => ',',
    }
}

/// Render a percentage with one decimal place (no sign, no `%`).
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_are_grouped_in_threes() {
        assert_eq!(format_count_for("en-US", 0), "0");
        assert_eq!(format_count_for("en-US", 999), "999");
        assert_eq!(format_count_for("en-US", 1_000), "1,000");
        assert_eq!(format_count_for("en-US", 1_234_567), "1,234,567");
    }

    #[test]
    fn german_counts_use_dot_grouping() {
        assert_eq!(format_count_for("de-DE", 1_234_567), "1.234.567");
        assert_eq!(format_count_for("de", 1_000), "1.000");
    }

    #[test]
    fn unknown_tags_fall_back_to_comma_grouping() {
        assert_eq!(format_count_for("fr-FR", 1_000), "1,000");
        assert_eq!(format_count_for("", 1_000), "1,000");
    }

    #[test]
    fn active_locale_drives_format_count() {
        // The loader starts on the en-US fallback.
        assert_eq!(format_count(1_000), "1,000");
    }

    #[test]
    fn percent_keeps_one_decimal() {
        assert_eq!(format_percent(70.0), "70.0");
        assert_eq!(format_percent(33.333), "33.3");
        assert_eq!(format_percent(0.05), "0.1");
    }
}
