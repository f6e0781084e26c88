use tracing::{debug, trace};

use crate::core::{
    LineSegmentKind, LineSeries, OptionValue, OptionsMap, PixelPoint, SeriesScales,
    SharedSegmentStrategy, Viewport, project_points, strategy_for_curve,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{DEFAULT_STROKE_COLOR, PathPrimitive, RenderFrame, Renderer};

use super::ResolvedLineOptions;
use super::validation::is_known_option;

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

/// Line graph holding any number of named series.
///
/// Options arrive through two channels: `settings` (general, caller-owned)
/// and `fixed` (pinned by the graph variant). A key present in `fixed` can
/// never be overridden from `settings`. Both maps are stored exactly as
/// received.
#[derive(Debug, Clone)]
pub struct MultiLineGraph {
    viewport: Viewport,
    settings: OptionsMap,
    fixed: OptionsMap,
    resolved: ResolvedLineOptions,
    segments: SharedSegmentStrategy,
    series_limit: Option<usize>,
    series: Vec<LineSeries>,
}

impl MultiLineGraph {
    /// Creates a graph whose segment strategy follows the effective `line_curve`.
    pub fn new(
        width: f64,
        height: f64,
        settings: OptionsMap,
        fixed: OptionsMap,
    ) -> ChartResult<Self> {
        Self::construct(width, height, settings, fixed, None, None)
    }

    /// Creates a graph that draws every series with `segments`.
    pub fn with_segment_strategy(
        width: f64,
        height: f64,
        settings: OptionsMap,
        fixed: OptionsMap,
        segments: SharedSegmentStrategy,
    ) -> ChartResult<Self> {
        Self::construct(width, height, settings, fixed, Some(segments), None)
    }

    pub(super) fn construct(
        width: f64,
        height: f64,
        settings: OptionsMap,
        fixed: OptionsMap,
        segments: Option<SharedSegmentStrategy>,
        series_limit: Option<usize>,
    ) -> ChartResult<Self> {
        let viewport = Viewport::new(width, height).validate()?;
        let resolved = ResolvedLineOptions::resolve(&settings, &fixed)?;

        for key in settings.keys().chain(fixed.keys()) {
            if !is_known_option(key) {
                debug!(key = key.as_str(), "forwarding unrecognized graph option");
            }
        }

        let segments = segments.unwrap_or_else(|| strategy_for_curve(resolved.line_curve));
        debug!(
            width,
            height,
            line_curve = resolved.line_curve,
            segments = ?segments.kind(),
            "constructed line graph"
        );

        Ok(Self {
            viewport,
            settings,
            fixed,
            resolved,
            segments,
            series_limit,
            series: Vec::new(),
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// General settings exactly as passed at construction.
    #[must_use]
    pub fn settings(&self) -> &OptionsMap {
        &self.settings
    }

    /// Fixed overrides exactly as passed at construction.
    #[must_use]
    pub fn fixed_settings(&self) -> &OptionsMap {
        &self.fixed
    }

    #[must_use]
    pub fn resolved_options(&self) -> ResolvedLineOptions {
        self.resolved
    }

    /// Effective value of any option, known or not.
    #[must_use]
    pub fn option(&self, key: &str) -> Option<&OptionValue> {
        self.fixed.get(key).or_else(|| self.settings.get(key))
    }

    #[must_use]
    pub fn line_curve(&self) -> f64 {
        self.resolved.line_curve
    }

    #[must_use]
    pub fn segment_kind(&self) -> LineSegmentKind {
        self.segments.kind()
    }

    #[must_use]
    pub fn segment_strategy(&self) -> &SharedSegmentStrategy {
        &self.segments
    }

    #[must_use]
    pub fn series_limit(&self) -> Option<usize> {
        self.series_limit
    }

    #[must_use]
    pub fn series(&self) -> &[LineSeries] {
        &self.series
    }

    pub fn add_series(&mut self, series: LineSeries) -> ChartResult<()> {
        series.validate()?;

        if let Some(limit) = self.series_limit {
            if self.series.len() >= limit {
                return Err(ChartError::InvalidData(format!(
                    "graph accepts at most {limit} series"
                )));
            }
        }
        if self.series.iter().any(|s| s.name == series.name) {
            return Err(ChartError::InvalidData(format!(
                "duplicate series name `{}`",
                series.name
            )));
        }

        trace!(
            name = series.name.as_str(),
            points = series.points.len(),
            "series added"
        );
        self.series.push(series);
        Ok(())
    }

    pub fn clear_series(&mut self) {
        self.series.clear();
    }

    /// Projects every series into pixel space using scales fitted to all data.
    pub fn project_series(&self) -> ChartResult<Vec<Vec<PixelPoint>>> {
        let Some(scales) = SeriesScales::fit(&self.series)? else {
            return Ok(vec![Vec::new(); self.series.len()]);
        };

        #[cfg(feature = "parallel-projection")]
        let series = self.series.par_iter();
        #[cfg(not(feature = "parallel-projection"))]
        let series = self.series.iter();

        series
            .map(|series| project_points(&series.points, scales, self.viewport))
            .collect()
    }

    /// Builds one path per series with at least two points.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.viewport);
        if !self.resolved.line_visible {
            trace!("line output disabled, empty frame");
            return Ok(frame);
        }

        let color = DEFAULT_STROKE_COLOR.with_alpha(self.resolved.line_opacity);
        for (series, projected) in self.series.iter().zip(self.project_series()?) {
            let commands = self.segments.build_path(&projected);
            if commands.is_empty() {
                continue;
            }
            frame.paths.push(PathPrimitive::new(
                series.name.clone(),
                commands,
                self.resolved.line_width,
                color,
            ));
        }

        trace!(
            paths = frame.paths.len(),
            commands = frame.command_count(),
            "render frame built"
        );
        Ok(frame)
    }

    pub fn render<R: Renderer>(&self, renderer: &mut R) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        renderer.render(&frame)
    }
}
