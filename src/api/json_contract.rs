use serde::{Deserialize, Serialize};

use crate::core::{LineSegmentKind, OptionsMap, Viewport};
use crate::error::{ChartError, ChartResult};

use super::{MultiLineGraph, ResolvedLineOptions};

pub const GRAPH_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable view of a graph's configuration and series layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub viewport: Viewport,
    pub settings: OptionsMap,
    pub fixed_settings: OptionsMap,
    pub resolved: ResolvedLineOptions,
    pub segment_kind: LineSegmentKind,
    #[serde(default)]
    pub series_limit: Option<usize>,
    pub series_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: GraphSnapshot,
}

impl GraphSnapshot {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = GraphSnapshotJsonContractV1 {
            schema_version: GRAPH_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<GraphSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: GraphSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != GRAPH_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl MultiLineGraph {
    #[must_use]
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            viewport: self.viewport(),
            settings: self.settings().clone(),
            fixed_settings: self.fixed_settings().clone(),
            resolved: self.resolved_options(),
            segment_kind: self.segment_kind(),
            series_limit: self.series_limit(),
            series_names: self.series().iter().map(|s| s.name.clone()).collect(),
        }
    }

    pub fn snapshot_json_contract_v1_pretty(&self) -> ChartResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
