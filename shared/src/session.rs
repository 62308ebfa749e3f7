//! Interaction flow of the dashboard.
//!
//! [`DashboardSession`] owns the loaded data, the current filter queries, the
//! chart controller and the presentation surface. UI event handlers call into
//! it; it never touches the DOM directly.

use crate::{
    aggregate, filter_transactions, render_rows, ChartController, ChartLibrary, CustomerId,
    DashboardConfig, DatasetPayload, DisplayRow, FilterQuery, Result, RowSelection,
};
use crate::store::DataStore;
use log::{debug, error, info};
use std::fmt;

/// What the UI layer has to be able to do with the table and chart surface
pub trait PresentationSurface {
    fn render_rows(&mut self, rows: &[DisplayRow]);
    fn clear_rows(&mut self);
    fn draw_placeholder_text(&mut self, text: &str);
    /// Mark `row` (a position in the last rendering) as the only active row
    fn highlight_row(&mut self, row: usize);
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Loading,
    Loaded { customers: usize, transactions: usize },
    Failed(String),
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadStatus::Loading => write!(f, "Loading data..."),
            LoadStatus::Loaded { customers, transactions } => {
                write!(f, "Loaded {} customers and {} transactions", customers, transactions)
            }
            LoadStatus::Failed(message) => write!(f, "Failed to load data: {}", message),
        }
    }
}

pub struct DashboardSession<S: PresentationSurface, L: ChartLibrary> {
    config: DashboardConfig,
    store: DataStore,
    query: FilterQuery,
    status: LoadStatus,
    rows: Vec<DisplayRow>,
    highlighted: Option<RowSelection>,
    table_error: Option<String>,
    surface: S,
    chart: ChartController<L>,
}

impl<S: PresentationSurface, L: ChartLibrary> DashboardSession<S, L> {
    pub fn new(surface: S, library: L, config: DashboardConfig) -> Self {
        Self {
            chart: ChartController::new(library, config.clone()),
            config,
            store: DataStore::new(),
            query: FilterQuery::default(),
            status: LoadStatus::Loading,
            rows: Vec::new(),
            highlighted: None,
            table_error: None,
            surface,
        }
    }

    /// Put the surface in its initial state: no rows and the chart placeholder
    pub fn start(&mut self) {
        self.surface.clear_rows();
        self.chart.show_placeholder(&mut self.surface);
    }

    pub fn on_loaded(&mut self, payload: DatasetPayload) -> Result<()> {
        let (customers, transactions) = self.store.load(payload);
        self.status = LoadStatus::Loaded {
            customers: customers.len(),
            transactions: transactions.len(),
        };
        info!("{}", self.status);
        self.refresh_table()
    }

    /// Record a failed fetch. The page stays in its empty initial state.
    pub fn on_load_failed(&mut self, reason: impl fmt::Display) {
        error!("Error fetching data: {}", reason);
        self.status = LoadStatus::Failed(reason.to_string());
    }

    pub fn set_name_query(&mut self, name: impl Into<String>) -> Result<()> {
        self.query.name = name.into();
        self.refresh_table()
    }

    pub fn set_amount_query(&mut self, amount: impl Into<String>) -> Result<()> {
        self.query.amount = amount.into();
        self.refresh_table()
    }

    /// Recompute the filtered rows and redraw the table.
    ///
    /// On a data-integrity error the previously drawn rows stay in place and
    /// the error is kept for [`Self::table_error`] until a redraw succeeds.
    pub fn refresh_table(&mut self) -> Result<()> {
        let rendered = filter_transactions(self.store.transactions(), self.store.customers(), &self.query)
            .and_then(|matching| render_rows(&matching, self.store.customers()));
        let rows = match rendered {
            Ok(rows) => rows,
            Err(e) => {
                error!("Cannot filter transactions with {:?}: {}", self.query, e);
                self.table_error = Some(e.to_string());
                return Err(e);
            }
        };

        debug!("Rendering {} rows for {:?}", rows.len(), self.query);
        self.surface.clear_rows();
        self.surface.render_rows(&rows);
        self.rows = rows;
        self.highlighted = None;
        self.table_error = None;
        Ok(())
    }

    /// Chart the clicked row's customer and highlight that row.
    ///
    /// The customer comes from the row's own tag; nothing is looked up by
    /// position in the transaction list.
    pub fn select_row(&mut self, selection: RowSelection) -> Result<()> {
        if !self.store.is_loaded() {
            debug!("Ignoring row selection before data is loaded");
            return Ok(());
        }

        self.show_customer(selection.customer_id)?;
        if selection.row < self.rows.len() {
            self.surface.highlight_row(selection.row);
            self.highlighted = Some(selection);
        }
        Ok(())
    }

    /// Chart a customer's per-date totals without touching the table
    pub fn show_customer(&mut self, customer_id: CustomerId) -> Result<()> {
        let summary = aggregate(
            self.store.transactions(),
            self.store.customers(),
            customer_id,
            &self.config.unknown_customer_label,
        );
        self.chart.show(&summary)
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn query(&self) -> &FilterQuery {
        &self.query
    }

    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    pub fn highlighted(&self) -> Option<RowSelection> {
        self.highlighted
    }

    /// Why the table could not be drawn for the current data and queries
    pub fn table_error(&self) -> Option<&str> {
        self.table_error.as_deref()
    }

    pub fn chart(&self) -> &ChartController<L> {
        &self.chart
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
