use dioxus::prelude::*;

mod form_state;
mod routes;
use routes::Route;

const THEME: Asset = asset!("/assets/theme.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // One client for the app's lifetime, pointed at the configured endpoint.
    use_context_provider(|| api::DishClient::from_config(api::config::load_config()));

    rsx! {
        document::Link { rel: "stylesheet", href: THEME }
        Router::<Route> {}
    }
}
