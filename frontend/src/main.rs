use shared::DashboardConfig;
use yew::prelude::*;

mod components;
mod services;

use components::Dashboard;
use services::Logger;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: DashboardConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    html! {
        <main class="main">
            <div class="container">
                <Dashboard config={props.config.clone()} />
            </div>
        </main>
    }
}

/// Defaults, with `?data=<url>` on the page address overriding the dataset location
fn page_config() -> DashboardConfig {
    let config = DashboardConfig::default();
    let data_override = web_sys::window()
        .and_then(|window| window.location().search().ok())
        .and_then(|search| web_sys::UrlSearchParams::new_with_str(&search).ok())
        .and_then(|params| params.get("data"))
        .filter(|url| !url.is_empty());

    match data_override {
        Some(url) => config.with_data_url(url),
        None => config,
    }
}

fn main() {
    let config = page_config();
    Logger::init(config.level_filter());

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
