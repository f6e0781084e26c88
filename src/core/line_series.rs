use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, LinearScale, PixelPoint, Viewport};
use crate::error::{ChartError, ChartResult};

/// Named sequence of points drawn as one path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeries {
    pub name: String,
    pub points: Vec<DataPoint>,
}

impl LineSeries {
    #[must_use]
    pub fn new(name: impl Into<String>, points: Vec<DataPoint>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.name.is_empty() {
            return Err(ChartError::InvalidData(
                "series name must not be empty".to_owned(),
            ));
        }
        if let Some(index) = self.points.iter().position(|p| !p.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "series `{}` has a non-finite point at index {index}",
                self.name
            )));
        }
        Ok(())
    }
}

/// X and Y scales shared by every series of one graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesScales {
    pub x: LinearScale,
    pub y: LinearScale,
}

impl SeriesScales {
    /// Fits both scales to the bounds of all points.
    ///
    /// Returns `None` when no series holds any point.
    pub fn fit(series: &[LineSeries]) -> ChartResult<Option<Self>> {
        let mut points = series.iter().flat_map(|s| s.points.iter()).peekable();
        if points.peek().is_none() {
            return Ok(None);
        }

        let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
        for point in points {
            min_x = min_x.min(point.x);
            max_x = max_x.max(point.x);
            min_y = min_y.min(point.y);
            max_y = max_y.max(point.y);
        }

        Ok(Some(Self {
            x: LinearScale::fitted(min_x, max_x)?,
            y: LinearScale::fitted(min_y, max_y)?,
        }))
    }
}

/// Projects data points into pixel space.
///
/// X grows to the right over `[0, width]`; Y is flipped so larger values sit
/// closer to the top edge.
pub fn project_points(
    points: &[DataPoint],
    scales: SeriesScales,
    viewport: Viewport,
) -> ChartResult<Vec<PixelPoint>> {
    let viewport = viewport.validate()?;

    points
        .iter()
        .map(|point| {
            let x = scales.x.domain_to_pixel(point.x, viewport.width)?;
            let y = viewport.height - scales.y.domain_to_pixel(point.y, viewport.height)?;
            Ok(PixelPoint::new(x, y))
        })
        .collect()
}
