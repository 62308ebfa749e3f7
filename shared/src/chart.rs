//! Chart lifecycle: at most one live chart instance per drawing surface.
//!
//! The chart library itself is a black box behind [`ChartLibrary`]: it turns a
//! declarative [`BarChartConfig`] into a live [`ChartHandle`] and the handle
//! must be destroyed before another chart targets the same surface.
//! [`ChartController`] owns that handle and enforces release-before-replace.

use crate::session::PresentationSurface;
use crate::{CustomerId, CustomerSummary, DashboardConfig, Result};
use log::{debug, error};
use serde::{Deserialize, Serialize};

/// Declarative description of a single-series bar chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartConfig {
    /// X-axis categories, one per bar
    pub categories: Vec<String>,
    pub series_label: String,
    pub values: Vec<f64>,
    /// `#rrggbb` used for both fill and border
    pub color: String,
    pub border_width: u32,
    pub y_begin_at_zero: bool,
    /// Prepended to every y-axis tick label
    pub y_tick_prefix: String,
}

impl BarChartConfig {
    pub fn for_summary(summary: &CustomerSummary, config: &DashboardConfig) -> Self {
        Self {
            categories: summary.labels.clone(),
            series_label: config.series_label(&summary.customer_name),
            values: summary.totals.clone(),
            color: config.bar_color.clone(),
            border_width: 1,
            y_begin_at_zero: true,
            y_tick_prefix: config.currency_symbol.clone(),
        }
    }

    pub fn y_tick_label(&self, value: f64) -> String {
        format!("{}{}", self.y_tick_prefix, crate::format_amount(value))
    }

    /// Lower and upper y bounds; the lower bound is pinned to zero when
    /// `y_begin_at_zero` is set and no value is negative.
    pub fn y_range(&self) -> (f64, f64) {
        let max = self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = self.values.iter().copied().fold(f64::INFINITY, f64::min);
        if !max.is_finite() || !min.is_finite() {
            return (0.0, 1.0);
        }

        let low = if self.y_begin_at_zero { min.min(0.0) } else { min };
        let high = if max > low { max } else { low + 1.0 };
        (low, high)
    }
}

/// A live chart drawn by a [`ChartLibrary`]
pub trait ChartHandle {
    /// Release the chart and everything it holds on the drawing surface
    fn destroy(self);
}

pub trait ChartLibrary {
    type Handle: ChartHandle;

    fn construct(&mut self, config: &BarChartConfig) -> Result<Self::Handle>;
}

enum ChartState<H> {
    /// Nothing selected yet; the surface shows placeholder text
    Empty,
    Showing {
        customer_id: CustomerId,
        customer_name: String,
        handle: H,
    },
}

pub struct ChartController<L: ChartLibrary> {
    library: L,
    state: ChartState<L::Handle>,
    config: DashboardConfig,
}

impl<L: ChartLibrary> ChartController<L> {
    pub fn new(library: L, config: DashboardConfig) -> Self {
        Self {
            library,
            state: ChartState::Empty,
            config,
        }
    }

    pub fn has_chart(&self) -> bool {
        matches!(self.state, ChartState::Showing { .. })
    }

    pub fn active_customer(&self) -> Option<CustomerId> {
        match &self.state {
            ChartState::Showing { customer_id, .. } => Some(*customer_id),
            ChartState::Empty => None,
        }
    }

    /// Name the current chart was built for, fallback label included
    pub fn active_customer_name(&self) -> Option<&str> {
        match &self.state {
            ChartState::Showing { customer_name, .. } => Some(customer_name),
            ChartState::Empty => None,
        }
    }

    /// Draw the idle text. Only meaningful before the first selection.
    pub fn show_placeholder<S: PresentationSurface + ?Sized>(&self, surface: &mut S) {
        if let ChartState::Empty = self.state {
            surface.draw_placeholder_text(&self.config.placeholder_text);
        }
    }

    /// Replace whatever is displayed with a chart of `summary`.
    ///
    /// The current chart is destroyed before the new one is constructed. If
    /// construction fails the surface is left without a chart.
    pub fn show(&mut self, summary: &CustomerSummary) -> Result<()> {
        self.release();

        let chart_config = BarChartConfig::for_summary(summary, &self.config);
        match self.library.construct(&chart_config) {
            Ok(handle) => {
                debug!(
                    "Chart for customer {} with {} categories",
                    summary.customer_id,
                    chart_config.categories.len()
                );
                self.state = ChartState::Showing {
                    customer_id: summary.customer_id,
                    customer_name: summary.customer_name.clone(),
                    handle,
                };
                Ok(())
            }
            Err(e) => {
                error!("Failed to draw chart for customer {}: {}", summary.customer_id, e);
                Err(e)
            }
        }
    }

    fn release(&mut self) {
        if let ChartState::Showing { customer_id, handle, .. } =
            std::mem::replace(&mut self.state, ChartState::Empty)
        {
            debug!("Destroying chart for customer {}", customer_id);
            handle.destroy();
        }
    }
}

impl<L: ChartLibrary> Drop for ChartController<L> {
    fn drop(&mut self) {
        self.release();
    }
}


#[cfg(test)]
mod tests {
    use super::testing::FakeChartLibrary;
    use super::*;
    use crate::aggregate;
    use crate::fixtures::{alice_and_bob, customer};

    #[derive(Default)]
    struct PlaceholderOnly {
        placeholder: Vec<String>,
    }

    impl PresentationSurface for PlaceholderOnly {
        fn render_rows(&mut self, _rows: &[crate::DisplayRow]) {}
        fn clear_rows(&mut self) {}
        fn draw_placeholder_text(&mut self, text: &str) {
            self.placeholder.push(text.to_string());
        }
        fn highlight_row(&mut self, _row: usize) {}
    }

    fn summary_for(id: i64) -> CustomerSummary {
        let mut data = alice_and_bob();
        data.customers.push(customer(3, "Nobody"));
        aggregate(&data.transactions, &data.customers, CustomerId(id), "Undefined User")
    }

    #[test]
    fn test_starts_empty_with_placeholder() {
        let library = FakeChartLibrary::default();
        let controller = ChartController::new(library.clone(), DashboardConfig::default());
        let mut surface = PlaceholderOnly::default();

        controller.show_placeholder(&mut surface);

        assert!(!controller.has_chart());
        assert_eq!(surface.placeholder, vec!["Select One To Get Data"]);
        assert!(library.log.borrow().constructed.is_empty());
    }

    #[test]
    fn test_show_builds_bar_config() {
        let library = FakeChartLibrary::default();
        let mut controller = ChartController::new(library.clone(), DashboardConfig::default());

        controller.show(&summary_for(1)).unwrap();

        let log = library.log.borrow();
        let config = &log.constructed[0];
        assert_eq!(config.categories, vec!["2024-01-01"]);
        assert_eq!(config.values, vec![15.0]);
        assert_eq!(config.series_label, "Total Amount Of Alice");
        assert!(config.y_begin_at_zero);
        assert_eq!(config.y_tick_label(15.0), "$15");
        assert_eq!(controller.active_customer(), Some(CustomerId(1)));
        assert_eq!(controller.active_customer_name(), Some("Alice"));
    }

    #[test]
    fn test_active_name_follows_summary_fallback() {
        let library = FakeChartLibrary::default();
        let mut controller = ChartController::new(library, DashboardConfig::default());
        assert_eq!(controller.active_customer_name(), None);

        let data = alice_and_bob();
        let orphan = aggregate(&data.transactions, &data.customers, CustomerId(42), "Undefined User");
        controller.show(&orphan).unwrap();

        assert_eq!(controller.active_customer(), Some(CustomerId(42)));
        assert_eq!(controller.active_customer_name(), Some("Undefined User"));
    }

    #[test]
    fn test_reselecting_replaces_chart() {
        let library = FakeChartLibrary::default();
        let mut controller = ChartController::new(library.clone(), DashboardConfig::default());

        for id in [1, 2, 1, 3, 2] {
            controller.show(&summary_for(id)).unwrap();
            assert_eq!(library.log.borrow().live, 1);
        }

        let log = library.log.borrow();
        assert_eq!(log.max_live, 1);
        assert_eq!(log.constructed.len(), 5);
        assert_eq!(log.destroyed, 4);
        assert_eq!(controller.active_customer(), Some(CustomerId(2)));
    }

    #[test]
    fn test_customer_without_data_gets_empty_chart_not_placeholder() {
        let library = FakeChartLibrary::default();
        let mut controller = ChartController::new(library.clone(), DashboardConfig::default());
        let mut surface = PlaceholderOnly::default();

        controller.show(&summary_for(3)).unwrap();
        controller.show_placeholder(&mut surface);

        assert!(controller.has_chart());
        assert!(surface.placeholder.is_empty());
        assert!(library.log.borrow().constructed[0].categories.is_empty());
    }

    #[test]
    fn test_failed_construction_leaves_no_chart() {
        let library = FakeChartLibrary::default();
        let mut controller = ChartController::new(library.clone(), DashboardConfig::default());
        controller.show(&summary_for(1)).unwrap();

        *library.fail_next.borrow_mut() = true;
        assert!(controller.show(&summary_for(2)).is_err());

        assert!(!controller.has_chart());
        assert_eq!(controller.active_customer_name(), None);
        assert_eq!(library.log.borrow().live, 0);
    }

    #[test]
    fn test_drop_releases_chart() {
        let library = FakeChartLibrary::default();
        {
            let mut controller = ChartController::new(library.clone(), DashboardConfig::default());
            controller.show(&summary_for(2)).unwrap();
        }
        assert_eq!(library.log.borrow().live, 0);
    }

    #[test]
    fn test_y_range() {
        let mut config = BarChartConfig::for_summary(&summary_for(1), &DashboardConfig::default());
        assert_eq!(config.y_range(), (0.0, 15.0));

        config.values = vec![];
        assert_eq!(config.y_range(), (0.0, 1.0));

        config.values = vec![-4.0, 2.0];
        assert_eq!(config.y_range(), (-4.0, 2.0));

        config.values = vec![0.0];
        assert_eq!(config.y_range(), (0.0, 1.0));
    }
}
