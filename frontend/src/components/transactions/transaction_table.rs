use shared::{DisplayRow, RowSelection};
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TransactionTableProps {
    pub rows: Vec<DisplayRow>,
    pub active_row: Option<usize>,
    pub loading: bool,
    /// Set when the rows could not be rendered; replaces the empty-result text
    #[prop_or_default]
    pub error: Option<String>,
    pub on_row_click: Callback<RowSelection>,
}

#[function_component(TransactionTable)]
pub fn transaction_table(props: &TransactionTableProps) -> Html {
    // One listener on the body; the clicked row is found through its tags
    let onclick = {
        let on_row_click = props.on_row_click.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(selection) = selection_from_event(&e) {
                on_row_click.emit(selection);
            }
        })
    };

    html! {
        <section class="transactions-section">
            <div class="table-container">
                <table class="transactions-table">
                    <thead>
                        <tr>
                            <th>{"Customer Name"}</th>
                            <th>{"Date"}</th>
                            <th>{"Amount"}</th>
                        </tr>
                    </thead>
                    <tbody {onclick}>
                        {for props.rows.iter().map(|row| {
                            let active = props.active_row == Some(row.row);
                            html! {
                                <tr
                                    key={row.row}
                                    class={classes!("transaction-row", active.then_some("active"))}
                                    data-row={row.row.to_string()}
                                    data-customer-id={row.customer_id.to_string()}
                                >
                                    <td class="customer-name">{&row.customer_name}</td>
                                    <td class="date">{&row.date}</td>
                                    <td class="amount">{row.amount_text()}</td>
                                </tr>
                            }
                        })}
                    </tbody>
                </table>
                {if props.loading {
                    html! { <div class="loading">{"Loading transactions..."}</div> }
                } else if let Some(error) = &props.error {
                    html! { <div class="table-error">{error}</div> }
                } else if props.rows.is_empty() {
                    html! { <div class="table-empty">{"No matching transactions"}</div> }
                } else {
                    html! {}
                }}
            </div>
        </section>
    }
}

fn selection_from_event(e: &MouseEvent) -> Option<RowSelection> {
    let target = e.target()?.dyn_into::<Element>().ok()?;
    let row = target.closest("tr[data-customer-id]").ok()??;
    RowSelection::from_attributes(
        row.get_attribute(RowSelection::ROW_ATTR).as_deref(),
        row.get_attribute(RowSelection::CUSTOMER_ATTR).as_deref(),
    )
}
