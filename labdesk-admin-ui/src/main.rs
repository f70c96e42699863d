use dioxus::prelude::*;

mod components;
mod config;
mod notify;
mod pages;
mod session;
mod widgets;

use components::toast::ToastProvider;
use pages::{Login, UserManagement};
use shared_http::ApiClient;
use widgets::layout::AppLayout;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Login {},
    #[layout(AppLayout)]
        #[route("/admin/users")]
        UserManagement {},
}

const FAVICON: Asset = asset!("/assets/logo.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    // Load environment variables from .env file (if exists)
    match dotenvy::dotenv() {
        Ok(_) => info!("Loaded environment variables from .env file"),
        Err(_) => info!("No .env file found, using system environment variables"),
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = config::Config::from_env();
    info!("Using API at {}", config.api_base_url);
    use_context_provider(|| ApiClient::new(config.api_base_url.clone()));
    session::use_session_provider();

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }

        ToastProvider { Router::<Route> {} }
    }
}
