use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub name: String,
    pub amount: String,
    pub on_name_input: Callback<String>,
    pub on_amount_input: Callback<String>,
}

/// Customer-name and amount filter inputs. Fires on every keystroke.
#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let on_name = {
        let on_name_input = props.on_name_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_name_input.emit(input.value());
        })
    };

    let on_amount = {
        let on_amount_input = props.on_amount_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_amount_input.emit(input.value());
        })
    };

    html! {
        <div class="filter-bar">
            <div class="form-group">
                <label for="filterInput">{"Filter by customer name"}</label>
                <input
                    type="text"
                    id="filterInput"
                    placeholder="Customer name..."
                    value={props.name.clone()}
                    oninput={on_name}
                />
            </div>
            <div class="form-group">
                <label for="filterAmountInput">{"Filter by amount"}</label>
                <input
                    type="text"
                    id="filterAmountInput"
                    placeholder="Amount..."
                    value={props.amount.clone()}
                    oninput={on_amount}
                />
            </div>
        </div>
    }
}
