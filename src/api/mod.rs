mod graph_constructor;
mod graph_variant;
mod json_contract;
mod line_options;
mod multi_line_graph;
mod validation;

pub use graph_constructor::{GraphConstructor, LineGraphConstructor, MultiLineGraphConstructor};
pub use graph_variant::{GraphVariant, create_stepped_multi_line_graph, stepped_segments};
pub use json_contract::{
    GRAPH_SNAPSHOT_JSON_SCHEMA_V1, GraphSnapshot, GraphSnapshotJsonContractV1,
};
pub use line_options::ResolvedLineOptions;
pub use multi_line_graph::MultiLineGraph;
