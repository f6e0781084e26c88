use crate::core::{LINE_CURVE, LINE_OPACITY, LINE_VISIBLE, LINE_WIDTH, OptionValue, OptionsMap};
use crate::error::{ChartError, ChartResult};

pub(super) fn is_known_option(key: &str) -> bool {
    matches!(key, LINE_CURVE | LINE_WIDTH | LINE_VISIBLE | LINE_OPACITY)
}

/// Checks every known key present in `options`.
///
/// Unknown keys pass through unless they hold a non-finite number, which
/// would not survive a JSON snapshot.
pub(super) fn validate_known_options(options: &OptionsMap) -> ChartResult<()> {
    for (key, value) in options {
        match key.as_str() {
            LINE_CURVE | LINE_OPACITY => validate_unit_number(key, value)?,
            LINE_WIDTH => {
                let width = expect_number(key, value)?;
                if !width.is_finite() || width <= 0.0 {
                    return Err(ChartError::invalid_option(key, "must be finite and > 0"));
                }
            }
            LINE_VISIBLE => {
                if value.as_flag().is_none() {
                    return Err(type_mismatch(key, "flag", value));
                }
            }
            _ => {
                if let Some(number) = value.as_number() {
                    if !number.is_finite() {
                        return Err(ChartError::invalid_option(key, "must be finite"));
                    }
                }
            }
        }
    }
    Ok(())
}

fn validate_unit_number(key: &str, value: &OptionValue) -> ChartResult<()> {
    let number = expect_number(key, value)?;
    if !number.is_finite() || !(0.0..=1.0).contains(&number) {
        return Err(ChartError::invalid_option(key, "must be finite and in [0, 1]"));
    }
    Ok(())
}

fn expect_number(key: &str, value: &OptionValue) -> ChartResult<f64> {
    value
        .as_number()
        .ok_or_else(|| type_mismatch(key, "number", value))
}

fn type_mismatch(key: &str, expected: &str, value: &OptionValue) -> ChartError {
    ChartError::invalid_option(
        key,
        format!("expected {expected}, found {}", value.type_name()),
    )
}

#[cfg(test)]
mod tests {
    use super::validate_known_options;
    use crate::core::options;
    use crate::error::ChartError;

    #[test]
    fn unknown_keys_are_not_validated() {
        let map = options([("marker_shape", "diamond")]);
        assert!(validate_known_options(&map).is_ok());
    }

    #[test]
    fn unknown_keys_reject_non_finite_numbers() {
        let map = options([("marker_size", f64::NAN)]);
        let err = validate_known_options(&map).expect_err("nan marker size");
        assert_eq!(err.to_string(), "invalid option `marker_size`: must be finite");
    }

    #[test]
    fn curve_outside_unit_range_is_rejected() {
        let map = options([("line_curve", 1.5)]);
        let err = validate_known_options(&map).expect_err("curve above 1");
        assert!(matches!(err, ChartError::InvalidOption { ref key, .. } if key == "line_curve"));
    }

    #[test]
    fn visible_flag_rejects_text() {
        let map = options([("line_visible", "yes")]);
        let err = validate_known_options(&map).expect_err("text for flag");
        assert_eq!(err.to_string(), "invalid option `line_visible`: expected flag, found text");
    }
}
