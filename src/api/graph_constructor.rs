use crate::core::{OptionsMap, SharedSegmentStrategy};
use crate::error::ChartResult;

use super::MultiLineGraph;

/// Construction contract of a base graph.
///
/// `fixed` options take precedence over `settings` for the whole lifetime of
/// the graph. When `segments` is `None` the graph picks its own strategy.
pub trait GraphConstructor {
    type Graph;

    fn construct(
        &self,
        width: f64,
        height: f64,
        settings: OptionsMap,
        fixed: OptionsMap,
        segments: Option<SharedSegmentStrategy>,
    ) -> ChartResult<Self::Graph>;
}

/// Builds `MultiLineGraph`s without a series limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MultiLineGraphConstructor;

impl GraphConstructor for MultiLineGraphConstructor {
    type Graph = MultiLineGraph;

    fn construct(
        &self,
        width: f64,
        height: f64,
        settings: OptionsMap,
        fixed: OptionsMap,
        segments: Option<SharedSegmentStrategy>,
    ) -> ChartResult<MultiLineGraph> {
        MultiLineGraph::construct(width, height, settings, fixed, segments, None)
    }
}

/// Builds `MultiLineGraph`s that accept a single series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineGraphConstructor;

impl GraphConstructor for LineGraphConstructor {
    type Graph = MultiLineGraph;

    fn construct(
        &self,
        width: f64,
        height: f64,
        settings: OptionsMap,
        fixed: OptionsMap,
        segments: Option<SharedSegmentStrategy>,
    ) -> ChartResult<MultiLineGraph> {
        MultiLineGraph::construct(width, height, settings, fixed, segments, Some(1))
    }
}
