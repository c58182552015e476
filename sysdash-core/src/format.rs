//! Fixed-format display strings for raw metrics.
//!
//! Everything here is pure: numbers in, strings out.

/// Number of cells between the brackets of a progress bar
pub const PROGRESS_BAR_WIDTH: usize = 50;

/// Left-pad `n` with zeros to a minimum width of two digits.
pub fn zero_pad2(n: u64) -> String {
    let digits = n.to_string();
    let pad = 2usize.saturating_sub(digits.len());
    let mut out = "0".repeat(pad);
    out.push_str(&digits);
    out
}

/// Render a duration in seconds as `HH:MM:SS`.
///
/// Hours keep their natural width once they pass 99.
pub fn elapsed_time(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let rest = total_seconds % 3600;
    let minutes = rest / 60;
    let seconds = rest % 60;
    format!(
        "{}:{}:{}",
        zero_pad2(hours),
        zero_pad2(minutes),
        zero_pad2(seconds)
    )
}

/// Convert kilobytes to megabytes with one fractional digit.
pub fn kb_to_mb(kilobytes: f64) -> String {
    format!("{:.1}", kilobytes / 1024.0)
}

/// Render a utilization fraction as a bracketed bar followed by its percentage.
///
/// The cell sitting on the boundary is drawn filled as well, so a fraction of
/// zero still shows one `|` and the count is capped at the bar width.
pub fn progress_bar(fraction: f64) -> String {
    let fraction = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };
    let filled = ((fraction * PROGRESS_BAR_WIDTH as f64).floor() as usize + 1)
        .min(PROGRESS_BAR_WIDTH);

    let mut out = String::with_capacity(PROGRESS_BAR_WIDTH + 16);
    out.push('[');
    out.push_str(&"|".repeat(filled));
    out.push_str(&" ".repeat(PROGRESS_BAR_WIDTH - filled));
    out.push_str("] ");
    out.push_str(&percent_label(fraction * 100.0));
    out.push_str(" /100%");
    out
}

/// First four characters of the decimal form, without a dangling point.
///
/// Rounding to six places first absorbs binary noise such as `28.999999999999996`.
fn percent_label(percent: f64) -> String {
    let fixed = format!("{percent:.6}");
    let trimmed = fixed.trim_end_matches('0');
    let text = if trimmed.ends_with('.') {
        format!("{trimmed}0")
    } else {
        trimmed.to_string()
    };
    let mut label: String = text.chars().take(4).collect();
    if label.ends_with('.') {
        label.pop();
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn filled_cells(bar: &str) -> usize {
        let inner = &bar[1..=PROGRESS_BAR_WIDTH];
        inner.chars().filter(|c| *c == '|').count()
    }

    #[test]
    fn test_zero_pad2_small_values() {
        assert_eq!(zero_pad2(0), "00");
        assert_eq!(zero_pad2(7), "07");
        assert_eq!(zero_pad2(42), "42");
    }

    #[test]
    fn test_zero_pad2_wide_values_unpadded() {
        assert_eq!(zero_pad2(100), "100");
        assert_eq!(zero_pad2(123_456), "123456");
    }

    #[test]
    fn test_elapsed_time() {
        assert_eq!(elapsed_time(0), "00:00:00");
        assert_eq!(elapsed_time(59), "00:00:59");
        assert_eq!(elapsed_time(3661), "01:01:01");
        assert_eq!(elapsed_time(86_461), "24:01:01");
    }

    #[test]
    fn test_elapsed_time_hours_past_two_digits() {
        assert_eq!(elapsed_time(100 * 3600), "100:00:00");
        assert_eq!(elapsed_time(1234 * 3600 + 5 * 60 + 6), "1234:05:06");
    }

    #[test]
    fn test_kb_to_mb() {
        assert_eq!(kb_to_mb(1024.0), "1.0");
        assert_eq!(kb_to_mb(0.0), "0.0");
        assert_eq!(kb_to_mb(1536.0), "1.5");
        assert_eq!(kb_to_mb(10_485_760.0), "10240.0");
    }

    #[test]
    fn test_progress_bar_empty_fills_boundary_cell() {
        let bar = progress_bar(0.0);
        assert_eq!(filled_cells(&bar), 1);
        assert!(bar.starts_with("[|"));
        assert!(bar.ends_with("] 0.0 /100%"), "got {bar}");
    }

    #[test]
    fn test_progress_bar_full_stays_inside_brackets() {
        let bar = progress_bar(1.0);
        assert_eq!(filled_cells(&bar), PROGRESS_BAR_WIDTH);
        assert_eq!(&bar[PROGRESS_BAR_WIDTH + 1..PROGRESS_BAR_WIDTH + 2], "]");
        assert!(bar.ends_with("] 100 /100%"), "got {bar}");
    }

    #[test]
    fn test_progress_bar_midpoint() {
        let bar = progress_bar(0.5);
        assert_eq!(filled_cells(&bar), 26);
        assert!(bar.ends_with("] 50.0 /100%"), "got {bar}");
    }

    #[test]
    fn test_progress_bar_percent_truncated_to_four_chars() {
        assert!(progress_bar(0.456).ends_with("] 45.6 /100%"));
        assert!(progress_bar(0.25).ends_with("] 25.0 /100%"));
    }

    #[test]
    fn test_progress_bar_percent_rounds_away_float_noise() {
        assert!(progress_bar(0.29).ends_with("] 29.0 /100%"), "got {}", progress_bar(0.29));
        assert!(progress_bar(0.57).ends_with("] 57.0 /100%"));
        assert!(progress_bar(0.58).ends_with("] 58.0 /100%"));
        assert!(progress_bar(0.07).ends_with("] 7.0 /100%"));
        assert!(progress_bar(0.1).ends_with("] 10.0 /100%"));
        assert!(progress_bar(0.3).ends_with("] 30.0 /100%"));
    }

    #[test]
    fn test_progress_bar_out_of_range_input() {
        assert_eq!(progress_bar(-0.3), progress_bar(0.0));
        assert_eq!(progress_bar(7.0), progress_bar(1.0));
        assert_eq!(progress_bar(f64::NAN), progress_bar(0.0));
    }

    proptest! {
        #[test]
        fn zero_pad2_is_two_wide_below_100(n in 0u64..100) {
            let s = zero_pad2(n);
            prop_assert_eq!(s.len(), 2);
            prop_assert_eq!(s.parse::<u64>().unwrap(), n);
        }

        #[test]
        fn progress_bar_width_is_fixed(fraction in 0.0f64..=1.0) {
            let bar = progress_bar(fraction);
            prop_assert!(bar.starts_with('['));
            prop_assert_eq!(&bar[PROGRESS_BAR_WIDTH + 1..PROGRESS_BAR_WIDTH + 3], "] ");
            let expected = ((fraction * 50.0).floor() as usize + 1).min(50);
            prop_assert_eq!(filled_cells(&bar), expected);
            prop_assert!(bar.ends_with(" /100%"));
        }

        #[test]
        fn elapsed_time_round_trips(secs in 0u64..10_000_000) {
            let text = elapsed_time(secs);
            let parts: Vec<u64> = text.split(':').map(|p| p.parse().unwrap()).collect();
            prop_assert_eq!(parts.len(), 3);
            prop_assert_eq!(parts[0] * 3600 + parts[1] * 60 + parts[2], secs);
        }
    }
}
