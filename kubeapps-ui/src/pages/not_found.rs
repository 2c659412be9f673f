use leptos::*;
use leptos_router::*;

use crate::config::UiConfig;

#[component]
pub fn NotFound() -> impl IntoView {
    let config = use_context::<UiConfig>().unwrap_or_default();
    let location = use_location();

    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>{move || format!("No page at {}", location.pathname.get())}</p>
            <A href=config.home_path()>"Back to Kubeapps"</A>
        </div>
    }
}
