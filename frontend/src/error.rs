use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("Browser window or document is not available")]
    NoWindow,
    #[error("DOM call failed: {0}")]
    Js(String),
    #[error("Invalid page config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("Invalid page config value for {field}: {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        PageError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
