//! Lost & Found Frontend Entry Point

mod app;
mod browser;
mod components;
mod context;
mod logging;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = browser::load_config();
    logging::init(&config.log_level);
    log::info!("[APP] Using backend at {}", config.api_base);

    mount_to_body(move || view! { <App config=config /> });
}
