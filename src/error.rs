/// Error types for Tab Lister

use thiserror::Error;
use wasm_bindgen::JsValue;

pub type Result<T> = std::result::Result<T, ListerError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ListerError {
    /// The host tab-query capability rejected the request
    #[error("Tab query failed: {0}")]
    QueryFailed(String),

    /// A results container, control, or mount point is absent from the page
    #[error("Render target missing: #{0}")]
    RenderTargetMissing(String),

    /// Title contains markup-significant characters
    #[error("Title contains markup characters: {0:?}")]
    MalformedTitle(String),

    #[error("App already mounted on #{0}")]
    AlreadyMounted(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl From<ListerError> for JsValue {
    fn from(err: ListerError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}
