use std::sync::Arc;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{
    Dataset, VariableKey, Viewport, latest_snapshot, shape_bar, shape_line, shape_pie_window,
    translate_regions,
};
use crate::error::DashboardResult;

use super::chart_output::{
    SELECT_BAR_VARIABLE_PROMPT, SELECT_LINE_VARIABLE_PROMPT, SELECT_PIE_VARIABLE_PROMPT,
    SELECT_REGION_PROMPT,
};
use super::{BarChartView, ChartKind, ChartOutput, DashboardConfig, LineChartView, PieChartView};

/// Regions (native labels, in toggle order) and one variable per chart.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    pub regions: IndexSet<String>,
    pub line: Option<VariableKey>,
    pub bar: Option<VariableKey>,
    pub pie: Option<VariableKey>,
}

impl Selection {
    /// Canonical region names for filtering, in selection order.
    #[must_use]
    pub fn canonical_regions(&self) -> Vec<String> {
        let labels: Vec<&str> = self.regions.iter().map(String::as_str).collect();
        translate_regions(&labels)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DashboardState {
    /// Pending edits exist that have not been confirmed.
    Editing,
    /// Charts reflect the committed selection.
    Displayed,
}

/// Owns the pending and committed selections and the three chart views.
///
/// Edits only touch the pending selection. `confirm` copies it over the
/// committed one and recomputes every chart; nothing else does.
#[derive(Debug, Clone)]
pub struct DashboardController {
    dataset: Arc<Dataset>,
    config: DashboardConfig,
    pending: Selection,
    committed: Selection,
    state: DashboardState,
    line: LineChartView,
    bar: BarChartView,
    pie: PieChartView,
}

impl DashboardController {
    pub fn new(dataset: Arc<Dataset>, config: DashboardConfig) -> DashboardResult<Self> {
        config.validate()?;
        Ok(Self {
            dataset,
            config,
            pending: Selection::default(),
            committed: Selection::default(),
            state: DashboardState::Displayed,
            line: LineChartView::new(config.line),
            bar: BarChartView::new(config.bar),
            pie: PieChartView::new(config.pie),
        })
    }

    /// Controller over the bundled dataset with default config.
    pub fn with_bundled_dataset() -> DashboardResult<Self> {
        Self::new(Arc::new(Dataset::bundled()?), DashboardConfig::default())
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    #[must_use]
    pub fn pending(&self) -> &Selection {
        &self.pending
    }

    #[must_use]
    pub fn committed(&self) -> &Selection {
        &self.committed
    }

    #[must_use]
    pub fn state(&self) -> DashboardState {
        self.state
    }

    /// Any pending edit leaves the displayed state until the next confirm.
    fn mark_editing(&mut self) {
        self.state = DashboardState::Editing;
    }

    /// Flips one region checkbox. Returns whether it is now checked.
    pub fn toggle_region(&mut self, label: &str) -> bool {
        let checked = if self.pending.regions.shift_remove(label) {
            false
        } else {
            self.pending.regions.insert(label.to_owned());
            true
        };
        self.mark_editing();
        checked
    }

    /// Replaces the pending region set; duplicates keep their first position.
    pub fn set_regions<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pending.regions = labels.into_iter().map(Into::into).collect();
        self.mark_editing();
    }

    /// Unknown labels and the "none" option both clear the variable.
    pub fn select_line_variable(&mut self, label: &str) {
        self.pending.line = VariableKey::from_label(label);
        self.mark_editing();
    }

    pub fn select_bar_variable(&mut self, label: &str) {
        self.pending.bar = VariableKey::from_label(label);
        self.mark_editing();
    }

    pub fn select_pie_variable(&mut self, label: &str) {
        self.pending.pie = VariableKey::from_label(label);
        self.mark_editing();
    }

    /// Commits the pending selection and recomputes all charts.
    pub fn confirm(&mut self) -> DashboardResult<()> {
        self.committed = self.pending.clone();
        self.state = DashboardState::Displayed;
        info!(
            regions = self.committed.regions.len(),
            line = ?self.committed.line,
            bar = ?self.committed.bar,
            pie = ?self.committed.pie,
            "selection confirmed"
        );
        self.recompute()
    }

    fn recompute(&mut self) -> DashboardResult<()> {
        let regions = self.committed.canonical_regions();
        let records = self.dataset.records();

        let series = shape_line(
            records,
            &regions,
            self.committed.line,
            self.config.line.value_policy,
        );
        let snapshot = latest_snapshot(records);
        let bars = shape_bar(snapshot.iter().copied(), self.committed.bar, &regions);
        let wedges = shape_pie_window(
            snapshot.iter().copied(),
            self.committed.pie,
            self.config.pie.rank_window,
        );
        debug!(
            series = series.len(),
            snapshot = snapshot.len(),
            bars = bars.len(),
            wedges = wedges.len(),
            "charts recomputed"
        );

        self.line.set_series(series)?;
        self.bar.set_data(bars)?;
        self.pie.set_data(wedges);
        Ok(())
    }

    /// New container size for one chart; only that chart is recomputed.
    pub fn resize(&mut self, chart: ChartKind, viewport: Viewport) -> DashboardResult<()> {
        debug!(?chart, width = viewport.width, height = viewport.height, "chart resized");
        match chart {
            ChartKind::Line => self.line.resize(viewport),
            ChartKind::Bar => self.bar.resize(viewport),
            ChartKind::Pie => {
                self.pie.resize(viewport);
                Ok(())
            }
        }
    }

    #[must_use]
    pub fn line_output(&self) -> ChartOutput {
        if self.committed.regions.is_empty() {
            return ChartOutput::Placeholder(SELECT_REGION_PROMPT);
        }
        if self
            .config
            .line
            .value_policy
            .resolve(self.committed.line)
            .is_none()
        {
            return ChartOutput::Placeholder(SELECT_LINE_VARIABLE_PROMPT);
        }
        self.line.output()
    }

    #[must_use]
    pub fn bar_output(&self) -> ChartOutput {
        if self.committed.bar.is_none() {
            return ChartOutput::Placeholder(SELECT_BAR_VARIABLE_PROMPT);
        }
        self.bar.output()
    }

    #[must_use]
    pub fn pie_output(&self) -> ChartOutput {
        if self.committed.pie.is_none() {
            return ChartOutput::Placeholder(SELECT_PIE_VARIABLE_PROMPT);
        }
        self.pie.output()
    }

    #[must_use]
    pub fn output(&self, chart: ChartKind) -> ChartOutput {
        match chart {
            ChartKind::Line => self.line_output(),
            ChartKind::Bar => self.bar_output(),
            ChartKind::Pie => self.pie_output(),
        }
    }

    #[must_use]
    pub fn line_chart(&self) -> &LineChartView {
        &self.line
    }

    #[must_use]
    pub fn bar_chart(&self) -> &BarChartView {
        &self.bar
    }

    #[must_use]
    pub fn pie_chart(&self) -> &PieChartView {
        &self.pie
    }

    /// Pointer input for the line chart goes through here.
    pub fn line_chart_mut(&mut self) -> &mut LineChartView {
        &mut self.line
    }

    pub fn bar_chart_mut(&mut self) -> &mut BarChartView {
        &mut self.bar
    }

    pub fn pie_chart_mut(&mut self) -> &mut PieChartView {
        &mut self.pie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> DashboardController {
        DashboardController::with_bundled_dataset().expect("bundled dataset")
    }

    #[test]
    fn undone_edit_stays_editing_until_confirm() {
        let mut dashboard = controller();
        assert!(dashboard.toggle_region("서울"));
        dashboard.confirm().expect("confirm");
        assert_eq!(dashboard.state(), DashboardState::Displayed);

        assert!(dashboard.toggle_region("부산"));
        assert_eq!(dashboard.state(), DashboardState::Editing);
        assert!(!dashboard.toggle_region("부산"));
        assert_eq!(dashboard.pending(), dashboard.committed());
        assert_eq!(dashboard.state(), DashboardState::Editing);

        dashboard.confirm().expect("confirm");
        assert_eq!(dashboard.state(), DashboardState::Displayed);
    }

    #[test]
    fn canonical_regions_follow_toggle_order() {
        let mut dashboard = controller();
        dashboard.toggle_region("부산");
        dashboard.toggle_region("서울");
        assert_eq!(
            dashboard.pending().canonical_regions(),
            vec!["Busan".to_owned(), "Seoul".to_owned()]
        );
    }
}
