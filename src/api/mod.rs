mod axis;
mod bar_chart;
mod chart_output;
mod config;
mod controller;
mod line_chart;
mod pie_chart;
mod snapshot;

pub use bar_chart::BarChartView;
pub use chart_output::{
    ChartKind, ChartOutput, SELECT_BAR_VARIABLE_PROMPT, SELECT_LINE_VARIABLE_PROMPT,
    SELECT_PIE_VARIABLE_PROMPT, SELECT_REGION_PROMPT,
};
pub use config::{
    BarChartConfig, ChartMargins, DashboardConfig, LineChartConfig, PieChartConfig, TooltipOffset,
};
pub use controller::{DashboardController, DashboardState, Selection};
pub use line_chart::LineChartView;
pub use pie_chart::PieChartView;
pub use snapshot::{DashboardSnapshot, LineChartSnapshot};
