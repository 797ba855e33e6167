//! Trigger distance threshold: percentage of viewport height or absolute
//! pixels.

/// Distance from the end of the content at which the trigger fires.
///
/// Exactly one representation is active at a time; parsing a value in one
/// mode replaces whatever the other mode held.
///
/// Parsing is a permissive leading-number scan (optional sign, digits, at
/// most one dot; no exponent forms): the leading number is taken and the
/// rest of the string is ignored, so `"15%"` and `"100px"` both parse.
/// Input with no leading number yields a
/// `NaN` field, which silently disables the trigger (every distance
/// comparison against NaN is false). Callers get no error; a warning is
/// logged for diagnosis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Threshold {
    /// Fraction of the visible content height (`"15%"` → `Percent(0.15)`).
    Percent(f32),
    /// Absolute distance in pixels (`"100px"` → `Pixels(100.0)`).
    Pixels(f32),
}

impl Threshold {
    /// Parses a threshold string: percentage form when the input contains
    /// `%`, pixel form otherwise.
    pub fn parse(value: &str) -> Self {
        let threshold = if value.contains('%') {
            Threshold::Percent(leading_float(value) / 100.0)
        } else {
            Threshold::Pixels(leading_float(value))
        };
        if threshold.magnitude().is_nan() {
            log::warn!(
                "Threshold: no leading number in {value:?}; trigger will never fire"
            );
        }
        threshold
    }

    /// The raw numeric component (fraction or pixels).
    pub fn magnitude(&self) -> f32 {
        match self {
            Threshold::Percent(fraction) => *fraction,
            Threshold::Pixels(pixels) => *pixels,
        }
    }
}

impl Default for Threshold {
    /// `"15%"`, the stock distance for infinite lists.
    fn default() -> Self {
        Threshold::Percent(0.15)
    }
}

/// Longest-leading-number scan: optional sign, digits, at most one dot.
/// Returns NaN when no digit is found.
fn leading_float(value: &str) -> f32 {
    let trimmed = value.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (index, ch) in trimmed.char_indices() {
        match ch {
            '+' | '-' if index == 0 => end = index + 1,
            '0'..='9' => {
                seen_digit = true;
                end = index + 1;
            }
            '.' if !seen_dot => {
                seen_dot = true;
                end = index + 1;
            }
            _ => break,
        }
    }
    if !seen_digit {
        return f32::NAN;
    }
    trimmed[..end].parse().unwrap_or(f32::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_input_parses_to_fraction() {
        assert_eq!(Threshold::parse("15%"), Threshold::Percent(0.15));
        assert_eq!(Threshold::parse("100%"), Threshold::Percent(1.0));
    }

    #[test]
    fn pixel_input_parses_to_pixels() {
        assert_eq!(Threshold::parse("100px"), Threshold::Pixels(100.0));
        assert_eq!(Threshold::parse("64"), Threshold::Pixels(64.0));
    }

    #[test]
    fn leading_number_wins_over_trailing_garbage() {
        assert_eq!(Threshold::parse("12.5%extra"), Threshold::Percent(0.125));
        assert_eq!(Threshold::parse("  -8px"), Threshold::Pixels(-8.0));
    }

    #[test]
    fn second_dot_ends_the_scan() {
        assert_eq!(Threshold::parse("1.2.3"), Threshold::Pixels(1.2));
    }

    #[test]
    fn exponent_is_not_part_of_the_scan() {
        // "1e3" reads as the number 1 followed by the unit "e3".
        assert_eq!(Threshold::parse("1e3"), Threshold::Pixels(1.0));
    }

    #[test]
    fn malformed_input_yields_nan_silently() {
        assert!(Threshold::parse("abc").magnitude().is_nan());
        assert!(Threshold::parse("%").magnitude().is_nan());
        assert!(Threshold::parse("px").magnitude().is_nan());
        assert!(Threshold::parse("").magnitude().is_nan());
    }

    #[test]
    fn default_is_fifteen_percent() {
        assert_eq!(Threshold::default(), Threshold::Percent(0.15));
    }
}
