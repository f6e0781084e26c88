use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Option key controlling how far line segments bend (0 = no curvature).
pub const LINE_CURVE: &str = "line_curve";
/// Option key for the stroke width of every series path.
pub const LINE_WIDTH: &str = "line_width";
/// Option key toggling series path output.
pub const LINE_VISIBLE: &str = "line_visible";
/// Option key for the stroke opacity of every series path.
pub const LINE_OPACITY: &str = "line_opacity";

/// Heterogeneous option value.
///
/// Untagged so plain JSON scalars (`2`, `"after"`, `true`) deserialize directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Flag(bool),
    Number(f64),
    Text(String),
}

impl OptionValue {
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Flag(_) => "flag",
            Self::Number(_) => "number",
            Self::Text(_) => "text",
        }
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Named options, kept in insertion order so snapshots stay stable.
pub type OptionsMap = IndexMap<String, OptionValue>;

/// Builds an `OptionsMap` from `(key, value)` pairs.
pub fn options<K, V, I>(entries: I) -> OptionsMap
where
    K: Into<String>,
    V: Into<OptionValue>,
    I: IntoIterator<Item = (K, V)>,
{
    entries
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}

/// Returns `base` with every entry of `overlay` written on top.
///
/// Neither input is modified; for shared keys the overlay value wins and
/// keeps the key's original position in `base`.
#[must_use]
pub fn merge_options(base: &OptionsMap, overlay: &OptionsMap) -> OptionsMap {
    let mut merged = base.clone();
    for (key, value) in overlay {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

pub fn options_from_json_str(input: &str) -> ChartResult<OptionsMap> {
    serde_json::from_str(input)
        .map_err(|e| ChartError::InvalidData(format!("failed to parse options json: {e}")))
}

pub fn options_to_json_pretty(options: &OptionsMap) -> ChartResult<String> {
    serde_json::to_string_pretty(options)
        .map_err(|e| ChartError::InvalidData(format!("failed to serialize options json: {e}")))
}
