/// Access to the host browser's tab-query capability

use std::future::Future;

use crate::error::{ListerError, Result};
use crate::tab_data::{QueryFilter, TabInfo};
use wasm_bindgen::prelude::*;

// Import JS bridge functions
#[wasm_bindgen(module = "/bridge.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn queryTabs(filter: JsValue) -> std::result::Result<JsValue, JsValue>;
}

/// Anything that can answer a single-shot tab query
pub trait TabSource {
    fn query(&self, filter: QueryFilter) -> impl Future<Output = Result<Vec<TabInfo>>>;
}

/// `browser.tabs.query` (or `chrome.tabs.query`) through the JS bridge
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserTabs;

impl TabSource for BrowserTabs {
    async fn query(&self, filter: QueryFilter) -> Result<Vec<TabInfo>> {
        let filter_js = serde_wasm_bindgen::to_value(&filter)
            .map_err(|e| ListerError::QueryFailed(format!("Failed to serialize filter: {:?}", e)))?;

        let started = js_sys::Date::now();
        let tabs_js = queryTabs(filter_js)
            .await
            .map_err(|e| ListerError::QueryFailed(describe_js_error(&e)))?;
        log::debug!("tabs.query answered in {:.1}ms", js_sys::Date::now() - started);

        serde_wasm_bindgen::from_value(tabs_js)
            .map_err(|e| ListerError::QueryFailed(format!("Failed to parse tabs: {:?}", e)))
    }
}

fn describe_js_error(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", err))
}
