use serde::{Deserialize, Serialize};

use crate::core::{LINE_CURVE, LINE_OPACITY, LINE_VISIBLE, LINE_WIDTH, OptionValue, OptionsMap};
use crate::error::ChartResult;

use super::validation::validate_known_options;

/// Effective values of the options a line graph understands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLineOptions {
    pub line_curve: f64,
    pub line_width: f64,
    pub line_visible: bool,
    pub line_opacity: f64,
}

impl Default for ResolvedLineOptions {
    fn default() -> Self {
        Self {
            line_curve: 0.0,
            line_width: 1.5,
            line_visible: true,
            line_opacity: 1.0,
        }
    }
}

impl ResolvedLineOptions {
    /// Resolves each known key as `fixed` > `settings` > default.
    ///
    /// Both maps are validated in full, so a bad value in `settings` is
    /// reported even when `fixed` shadows it.
    pub fn resolve(settings: &OptionsMap, fixed: &OptionsMap) -> ChartResult<Self> {
        validate_known_options(settings)?;
        validate_known_options(fixed)?;

        let lookup = |key: &str| fixed.get(key).or_else(|| settings.get(key));
        let defaults = Self::default();

        Ok(Self {
            line_curve: lookup(LINE_CURVE)
                .and_then(OptionValue::as_number)
                .unwrap_or(defaults.line_curve),
            line_width: lookup(LINE_WIDTH)
                .and_then(OptionValue::as_number)
                .unwrap_or(defaults.line_width),
            line_visible: lookup(LINE_VISIBLE)
                .and_then(OptionValue::as_flag)
                .unwrap_or(defaults.line_visible),
            line_opacity: lookup(LINE_OPACITY)
                .and_then(OptionValue::as_number)
                .unwrap_or(defaults.line_opacity),
        })
    }
}
