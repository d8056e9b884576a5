// ============================================================================
// TRAINBOOKER - Yew frontend (WASM)
// ============================================================================
// - Views / Components: render only
// - ViewModels: view-local state and its transitions
// - Stores + Hooks: session state, shared through context
// - Services: HTTP only
// - Models: payloads shared with the backend
// ============================================================================

mod components;
mod config;
mod hooks;
mod models;
mod router;
mod services;
mod stores;
mod utils;
mod viewmodels;
mod views;

use components::App;
use config::CONFIG;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!(
        "🚀 TrainBooker starting ({}, API {})",
        CONFIG.environment,
        CONFIG.backend_url()
    );

    yew::Renderer::<App>::new().render();
}
