use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::wasm_bindgen;

pub mod config;
pub mod content;
pub mod error;
pub mod navigator;
mod pages;
pub mod routes;

pub use config::UiConfig;
pub use navigator::{Navigator, NavigatorHandle};
pub use pages::{HomeView, NotFound};

#[component]
pub fn App(config: UiConfig) -> impl IntoView {
    provide_meta_context();

    let home_path = config.home_path();
    let title = config.title.clone();
    let stylesheet = config.asset_href("pkg/kubeapps-ui.css");
    provide_context(NavigatorHandle::document(&config));
    provide_context(config);

    view! {
        <Stylesheet id="leptos" href=stylesheet/>
        <Title text=title/>
        <Meta name="description" content="Kubeapps - Kubernetes application management"/>

        <Router>
            <main class="container">
                <Routes>
                    <Route path=home_path view=HomeView/>
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </main>
        </Router>
    }
}

/// Loads the build-time configuration, falling back to defaults.
pub fn load_config() -> UiConfig {
    match UiConfig::from_build_env() {
        Ok(config) => config,
        Err(e) => {
            logging::error!("Falling back to default configuration: {}", e);
            UiConfig::default()
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let config = load_config();
    logging::log!("Mounting Kubeapps home at {}", config.home_path());

    mount_to_body(move || view! { <App config=config/> });
}
