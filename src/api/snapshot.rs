use serde::{Deserialize, Serialize};

use crate::core::{BarDatum, LineSeries, PieDatum, Viewport};
use crate::error::{DashboardError, DashboardResult};

use super::{DashboardController, DashboardState, Selection};

/// Line chart state as seen by regression tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartSnapshot {
    pub viewport: Viewport,
    pub time_full_range: Option<(f64, f64)>,
    pub time_visible_range: Option<(f64, f64)>,
    pub series: Vec<LineSeries>,
}

/// Serializable deterministic dashboard state used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub state: DashboardState,
    pub pending: Selection,
    pub committed: Selection,
    pub line: LineChartSnapshot,
    pub bar_viewport: Viewport,
    pub bars: Vec<BarDatum>,
    pub pie_viewport: Viewport,
    pub wedges: Vec<PieDatum>,
}

impl DashboardController {
    #[must_use]
    pub fn snapshot(&self) -> DashboardSnapshot {
        let line = self.line_chart();
        let time_scale = line.time_scale();
        DashboardSnapshot {
            state: self.state(),
            pending: self.pending().clone(),
            committed: self.committed().clone(),
            line: LineChartSnapshot {
                viewport: line.viewport(),
                time_full_range: time_scale.map(|scale| scale.full_range()),
                time_visible_range: time_scale.map(|scale| scale.visible_range()),
                series: line.series().to_vec(),
            },
            bar_viewport: self.bar_chart().viewport(),
            bars: self.bar_chart().data().to_vec(),
            pie_viewport: self.pie_chart().viewport(),
            wedges: self.pie_chart().data().to_vec(),
        }
    }

    pub fn snapshot_json_pretty(&self) -> DashboardResult<String> {
        serde_json::to_string_pretty(&self.snapshot()).map_err(|err| {
            DashboardError::InvalidData(format!("failed to serialize snapshot: {err}"))
        })
    }
}
