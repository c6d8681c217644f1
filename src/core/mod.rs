pub mod bar_series;
pub mod dataset;
pub mod line_series;
pub mod pie_series;
pub mod region;
pub mod scale;
pub mod snapshot;
pub mod ticks;
pub mod time_scale;
pub mod types;
pub mod variable;

pub use bar_series::{BarDatum, BarGeometry, bar_value_domain, project_bars, shape_bar};
pub use dataset::Dataset;
pub use line_series::{
    LinePoint, LineSeries, LineValuePolicy, line_value_domain, nearest_point_index,
    project_line_points, shape_line,
};
pub use pie_series::{
    PieDatum, PieSlice, RankWindow, arc_centroid, pie_layout, pointer_angle, shape_pie,
    shape_pie_window,
};
pub use region::{canonical_region, region_options, translate_regions};
pub use scale::{BandScale, LinearScale};
pub use snapshot::latest_snapshot;
pub use time_scale::TimeScale;
pub use types::{Record, Viewport};
pub use variable::{VariableKey, variable_options};
