//! vitals-dashboard: regional vital-statistics dashboard.
//!
//! The crate turns a table of monthly births, deaths, marriages and
//! divorces per region into three charts (a multi-region line chart, a
//! latest-month bar chart and a top-ranked pie chart) driven by a
//! pending/confirmed selection. Charts are emitted as backend-agnostic
//! `RenderFrame` scenes; an SVG backend and a static asset server ship
//! alongside.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "server")]
pub mod server;

pub use api::{ChartKind, ChartOutput, DashboardConfig, DashboardController};
pub use error::{DashboardError, DashboardResult};
