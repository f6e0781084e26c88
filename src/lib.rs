//! chart-lines: multi-series line graph geometry with composable variants.
//!
//! A base graph (`MultiLineGraph`) resolves options from a general settings
//! map and a fixed overrides map, then draws each series through a
//! `LineSegmentStrategy`. Variants such as the stepped multi-line graph are
//! plain `GraphVariant` values that pin options and inject a strategy
//! instead of subclassing the base.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{GraphVariant, MultiLineGraph, create_stepped_multi_line_graph};
pub use error::{ChartError, ChartResult};
