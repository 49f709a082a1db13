/// Tab Lister - browser extension demo: list open tab titles, mount a Yew root
/// Built with Rust + WASM + Yew

pub mod config;
pub mod error;
pub mod lister;
pub mod markup;
pub mod results;
pub mod tab_data;
pub mod tab_query;
pub mod ui;

use wasm_bindgen::prelude::*;

pub use config::ListerConfig;
pub use error::{ListerError, Result};

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Bind the tab lister to its button and results container
#[wasm_bindgen]
pub fn start_tab_lister(config: JsValue) -> std::result::Result<(), JsValue> {
    ListerConfig::from_js(config)
        .and_then(|config| lister::bind_tab_lister(&config))
        .map_err(|e| {
            log::error!("Tab lister not started: {}", e);
            JsValue::from(e)
        })
}

// Mount the Yew app root
#[wasm_bindgen]
pub fn start_app(config: JsValue) -> std::result::Result<(), JsValue> {
    ListerConfig::from_js(config)
        .and_then(|config| ui::mount_app(&config))
        .map(|_| ())
        .map_err(|e| {
            log::error!("App not mounted: {}", e);
            JsValue::from(e)
        })
}
