pub mod line_series;
pub mod line_strategy;
pub mod options;
pub mod scale;
pub mod types;

pub use line_series::{LineSeries, SeriesScales, project_points};
pub use line_strategy::{
    CurvedSegments, LineSegmentKind, LineSegmentStrategy, PathCommand, SharedSegmentStrategy,
    SteppedSegments, StraightSegments, strategy_for_curve,
};
pub use options::{
    LINE_CURVE, LINE_OPACITY, LINE_VISIBLE, LINE_WIDTH, OptionValue, OptionsMap, merge_options,
    options, options_from_json_str, options_to_json_pretty,
};
pub use scale::LinearScale;
pub use types::{DataPoint, PixelPoint, Viewport};
