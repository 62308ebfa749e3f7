use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub title: String,
    /// Name of the customer currently charted, if any
    pub selected_customer: Option<String>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <div class="container">
                <h1>{&props.title}</h1>
                <div class="header-right">
                    <span class="selection-label">
                        {match &props.selected_customer {
                            Some(name) => format!("Charting {}", name),
                            None => "No customer selected".to_string(),
                        }}
                    </span>
                </div>
            </div>
        </header>
    }
}
