/// Page wiring configuration passed in from JavaScript

use crate::error::{ListerError, Result};
use crate::tab_data::QueryFilter;
use serde::Deserialize;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ListerConfig {
    /// Id of the control whose click triggers a tab query
    pub button_id: String,
    /// Id of the element that receives the rendered list
    pub results_id: String,
    /// Id of the element the Yew root is mounted on
    pub mount_id: String,
    pub current_window_only: bool,
}

impl ListerConfig {
    /// Read config from a JS value, falling back to defaults for `undefined` / `null`
    pub fn from_js(value: JsValue) -> Result<ListerConfig> {
        if value.is_null() || value.is_undefined() {
            return Ok(ListerConfig::default());
        }

        serde_wasm_bindgen::from_value(value)
            .map_err(|e| ListerError::InvalidConfig(e.to_string()))
    }

    pub fn query_filter(&self) -> QueryFilter {
        QueryFilter {
            current_window: self.current_window_only,
        }
    }
}

impl Default for ListerConfig {
    fn default() -> Self {
        ListerConfig {
            button_id: "button".to_string(),
            results_id: "results".to_string(),
            mount_id: "my-app".to_string(),
            current_window_only: true,
        }
    }
}
