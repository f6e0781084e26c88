use std::sync::{Arc, LazyLock};

use tracing::debug;

use crate::core::{
    LINE_CURVE, OptionValue, OptionsMap, SharedSegmentStrategy, SteppedSegments, merge_options,
};
use crate::error::ChartResult;

use super::{GraphConstructor, LineGraphConstructor, MultiLineGraph, MultiLineGraphConstructor};

static STEPPED_SEGMENTS: LazyLock<SharedSegmentStrategy> =
    LazyLock::new(|| Arc::new(SteppedSegments));

/// Stepped strategy instance shared by every stepped variant.
#[must_use]
pub fn stepped_segments() -> SharedSegmentStrategy {
    Arc::clone(&STEPPED_SEGMENTS)
}

/// Specialization of a base graph.
///
/// A variant pins some options through the fixed channel and may inject a
/// segment strategy. Everything else, including validation and errors, is
/// left to the base constructor.
#[derive(Debug, Clone)]
pub struct GraphVariant<C: GraphConstructor> {
    name: String,
    base: C,
    fixed_defaults: OptionsMap,
    segments: Option<SharedSegmentStrategy>,
}

impl<C: GraphConstructor> GraphVariant<C> {
    #[must_use]
    pub fn new(name: impl Into<String>, base: C, fixed_defaults: OptionsMap) -> Self {
        Self {
            name: name.into(),
            base,
            fixed_defaults,
            segments: None,
        }
    }

    #[must_use]
    pub fn with_segment_strategy(mut self, segments: SharedSegmentStrategy) -> Self {
        self.segments = Some(segments);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn base(&self) -> &C {
        &self.base
    }

    #[must_use]
    pub fn fixed_defaults(&self) -> &OptionsMap {
        &self.fixed_defaults
    }

    #[must_use]
    pub fn segment_strategy(&self) -> Option<&SharedSegmentStrategy> {
        self.segments.as_ref()
    }

    /// Layers caller fixed overrides on top of this variant's defaults.
    #[must_use]
    pub fn merge_fixed_overrides(&self, fixed_overrides: &OptionsMap) -> OptionsMap {
        merge_options(&self.fixed_defaults, fixed_overrides)
    }

    /// Constructs the base graph with this variant's fixed options applied.
    ///
    /// `settings` is forwarded untouched and base errors are returned as-is.
    pub fn create_variant(
        &self,
        width: f64,
        height: f64,
        settings: OptionsMap,
        fixed_overrides: OptionsMap,
    ) -> ChartResult<C::Graph> {
        let fixed = self.merge_fixed_overrides(&fixed_overrides);
        debug!(
            variant = self.name.as_str(),
            fixed_keys = fixed.len(),
            settings_keys = settings.len(),
            "creating graph variant"
        );
        self.base
            .construct(width, height, settings, fixed, self.segments.clone())
    }
}

fn flat_line_defaults() -> OptionsMap {
    OptionsMap::from([(LINE_CURVE.to_owned(), OptionValue::Number(0.0))])
}

impl GraphVariant<MultiLineGraphConstructor> {
    /// Multi-series graph drawn with right-angle steps and no curvature.
    #[must_use]
    pub fn stepped_multi_line() -> Self {
        Self::new(
            "stepped_multi_line",
            MultiLineGraphConstructor,
            flat_line_defaults(),
        )
        .with_segment_strategy(stepped_segments())
    }
}

impl GraphVariant<LineGraphConstructor> {
    /// Single-series graph drawn with right-angle steps and no curvature.
    #[must_use]
    pub fn stepped_line() -> Self {
        Self::new("stepped_line", LineGraphConstructor, flat_line_defaults())
            .with_segment_strategy(stepped_segments())
    }
}

/// Shorthand for `GraphVariant::stepped_multi_line().create_variant(..)`.
pub fn create_stepped_multi_line_graph(
    width: f64,
    height: f64,
    settings: OptionsMap,
    fixed_overrides: OptionsMap,
) -> ChartResult<MultiLineGraph> {
    GraphVariant::stepped_multi_line().create_variant(width, height, settings, fixed_overrides)
}
