use shared::{DashboardConfig, DashboardSession, DatasetPayload, LoadStatus, RowSelection};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::filter_bar::FilterBar;
use super::header::Header;
use super::transactions::{CanvasChartLibrary, DomSurface, TransactionTable};
use crate::services::DataClient;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub config: DashboardConfig,
}

pub enum Msg {
    Loaded(DatasetPayload),
    LoadFailed(String),
    NameQuery(String),
    AmountQuery(String),
    RowClicked(RowSelection),
}

/// Table, filters and chart for one dataset
pub struct Dashboard {
    session: DashboardSession<DomSurface, CanvasChartLibrary>,
    canvas_ref: NodeRef,
}

impl Component for Dashboard {
    type Message = Msg;
    type Properties = DashboardProps;

    fn create(ctx: &Context<Self>) -> Self {
        let config = ctx.props().config.clone();
        let canvas_ref = NodeRef::default();
        let session = DashboardSession::new(
            DomSurface::new(canvas_ref.clone()),
            CanvasChartLibrary::new(canvas_ref.clone()),
            config.clone(),
        );

        let client = DataClient::new(config.data_url);
        log::info!("Fetching dataset from {}", client.data_url());
        let link = ctx.link().clone();
        spawn_local(async move {
            let msg = match client.fetch_dataset().await {
                Ok(payload) => Msg::Loaded(payload),
                Err(e) => Msg::LoadFailed(format!("{:#}", e)),
            };
            link.send_message(msg);
        });

        Self { session, canvas_ref }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // Errors from here on are logged and kept as the session's table error
            Msg::Loaded(payload) => {
                let _ = self.session.on_loaded(payload);
                true
            }
            Msg::LoadFailed(reason) => {
                self.session.on_load_failed(reason);
                true
            }
            Msg::NameQuery(name) => {
                let _ = self.session.set_name_query(name);
                true
            }
            Msg::AmountQuery(amount) => {
                let _ = self.session.set_amount_query(amount);
                true
            }
            Msg::RowClicked(selection) => self.session.select_row(selection).is_ok(),
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.session.start();
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let config = self.session.config();
        let surface = self.session.surface();
        let query = self.session.query();
        let status = self.session.status();
        let table_error = self.session.table_error();

        let status_class = match (status, table_error) {
            (LoadStatus::Failed(_), _) | (_, Some(_)) => "connection-status error",
            (LoadStatus::Loading, None) => "connection-status loading",
            (LoadStatus::Loaded { .. }, None) => "connection-status",
        };
        let status_text = match table_error {
            Some(error) => format!("{}. {}", status, error),
            None => status.to_string(),
        };

        let selected_customer = self.session.chart().active_customer_name().map(str::to_string);

        html! {
            <div class="dashboard">
                <Header title="Customer Transactions" {selected_customer} />

                <FilterBar
                    name={query.name.clone()}
                    amount={query.amount.clone()}
                    on_name_input={link.callback(Msg::NameQuery)}
                    on_amount_input={link.callback(Msg::AmountQuery)}
                />

                <TransactionTable
                    rows={surface.rows().to_vec()}
                    active_row={surface.active_row()}
                    loading={matches!(status, LoadStatus::Loading)}
                    error={table_error.map(str::to_string)}
                    on_row_click={link.callback(Msg::RowClicked)}
                />

                <section class="chart-section">
                    <canvas
                        ref={self.canvas_ref.clone()}
                        id="transactionChart"
                        width={config.chart_width.to_string()}
                        height={config.chart_height.to_string()}
                    ></canvas>
                </section>

                <div class={status_class}>{status_text}</div>
            </div>
        }
    }
}
