use yew::prelude::*;

mod components;
pub mod api_client;
pub mod common;
pub mod settings;

use common::toast::ToastProvider;
use components::dashboard::AdminDashboard;

#[function_component(App)]
pub fn app() -> Html {
    log::trace!("Rendering admin dashboard");
    html! {
        <ToastProvider>
            <div class="min-h-screen bg-base-200">
                <AdminDashboard />
            </div>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== CRM Dashboard Frontend Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.api_base_url());
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
