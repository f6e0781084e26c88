use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PixelPoint;

/// One drawing instruction of a series path, in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    CubicTo {
        c1x: f64,
        c1y: f64,
        c2x: f64,
        c2y: f64,
        x: f64,
        y: f64,
    },
}

impl PathCommand {
    /// End point reached by this command.
    #[must_use]
    pub fn end_point(self) -> PixelPoint {
        match self {
            Self::MoveTo { x, y } | Self::LineTo { x, y } | Self::CubicTo { x, y, .. } => {
                PixelPoint::new(x, y)
            }
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        match self {
            Self::MoveTo { x, y } | Self::LineTo { x, y } => x.is_finite() && y.is_finite(),
            Self::CubicTo {
                c1x,
                c1y,
                c2x,
                c2y,
                x,
                y,
            } => [c1x, c1y, c2x, c2y, x, y].iter().all(|v| v.is_finite()),
        }
    }
}

/// Serializable tag identifying a segment strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineSegmentKind {
    Straight,
    Curved,
    Stepped,
}

/// Turns consecutive projected points into path commands.
///
/// Implementations are stateless apart from their own parameters, so one
/// instance can be shared by any number of graphs.
pub trait LineSegmentStrategy: fmt::Debug + Send + Sync {
    fn kind(&self) -> LineSegmentKind;

    /// Builds a path through `points`. Fewer than two points yield no path.
    fn build_path(&self, points: &[PixelPoint]) -> Vec<PathCommand>;
}

/// Strategy handle stored by graphs.
pub type SharedSegmentStrategy = Arc<dyn LineSegmentStrategy>;

/// Straight lines between consecutive points.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StraightSegments;

impl LineSegmentStrategy for StraightSegments {
    fn kind(&self) -> LineSegmentKind {
        LineSegmentKind::Straight
    }

    fn build_path(&self, points: &[PixelPoint]) -> Vec<PathCommand> {
        if points.len() < 2 {
            return Vec::new();
        }

        let mut path = Vec::with_capacity(points.len());
        path.push(PathCommand::MoveTo {
            x: points[0].x,
            y: points[0].y,
        });
        path.extend(
            points[1..]
                .iter()
                .map(|p| PathCommand::LineTo { x: p.x, y: p.y }),
        );
        path
    }
}

/// Cubic Bezier segments whose tangents follow neighboring points.
///
/// `amount` scales the tangent length: `1.0` is a Catmull-Rom spline and
/// `0.0` collapses the control points onto the segment ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvedSegments {
    amount: f64,
}

impl CurvedSegments {
    #[must_use]
    pub fn new(amount: f64) -> Self {
        Self { amount }
    }

    #[must_use]
    pub fn amount(self) -> f64 {
        self.amount
    }
}

impl LineSegmentStrategy for CurvedSegments {
    fn kind(&self) -> LineSegmentKind {
        LineSegmentKind::Curved
    }

    fn build_path(&self, points: &[PixelPoint]) -> Vec<PathCommand> {
        if points.len() < 2 {
            return Vec::new();
        }

        let factor = self.amount / 6.0;
        let last = points.len() - 1;
        let mut path = Vec::with_capacity(points.len());
        path.push(PathCommand::MoveTo {
            x: points[0].x,
            y: points[0].y,
        });

        for i in 0..last {
            let p0 = points[i.saturating_sub(1)];
            let p1 = points[i];
            let p2 = points[i + 1];
            let p3 = points[(i + 2).min(last)];

            path.push(PathCommand::CubicTo {
                c1x: p1.x + (p2.x - p0.x) * factor,
                c1y: p1.y + (p2.y - p0.y) * factor,
                c2x: p2.x - (p3.x - p1.x) * factor,
                c2y: p2.y - (p3.y - p1.y) * factor,
                x: p2.x,
                y: p2.y,
            });
        }

        path
    }
}

/// Right-angle segments: horizontal at the current value, then vertical.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SteppedSegments;

impl SteppedSegments {
    fn step(from: PixelPoint, to: PixelPoint) -> SmallVec<[PathCommand; 2]> {
        let mut commands = SmallVec::new();
        if to.x != from.x {
            commands.push(PathCommand::LineTo { x: to.x, y: from.y });
        }
        if to.y != from.y {
            commands.push(PathCommand::LineTo { x: to.x, y: to.y });
        }
        commands
    }
}

impl LineSegmentStrategy for SteppedSegments {
    fn kind(&self) -> LineSegmentKind {
        LineSegmentKind::Stepped
    }

    fn build_path(&self, points: &[PixelPoint]) -> Vec<PathCommand> {
        if points.len() < 2 {
            return Vec::new();
        }

        let mut path = Vec::with_capacity(points.len() * 2);
        path.push(PathCommand::MoveTo {
            x: points[0].x,
            y: points[0].y,
        });
        for pair in points.windows(2) {
            path.extend(Self::step(pair[0], pair[1]));
        }
        path
    }
}

/// Default strategy for a curve amount: straight at zero, curved otherwise.
#[must_use]
pub fn strategy_for_curve(amount: f64) -> SharedSegmentStrategy {
    if amount > 0.0 {
        Arc::new(CurvedSegments::new(amount))
    } else {
        Arc::new(StraightSegments)
    }
}
