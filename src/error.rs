//! Error taxonomy for the view binder.
//!
//! Everything here is recoverable: a failed render leaves the DOM as the last
//! successful render put it, gets logged, and surfaces as a toast.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("required element #{0} is missing from the host document")]
    MissingRegion(&'static str),

    #[error("payload for '{event}' failed schema validation")]
    SchemaViolation { event: &'static str },

    #[error("payload for '{event}' could not be decoded: {detail}")]
    Decode {
        event: &'static str,
        detail: String,
    },

    #[error("DOM mutation failed: {0}")]
    Dom(String),

    #[error("host bridge unavailable: {0}")]
    Bridge(String),
}

impl From<JsValue> for ViewError {
    fn from(value: JsValue) -> Self {
        ViewError::Dom(format!("{value:?}"))
    }
}

impl From<ViewError> for JsValue {
    fn from(err: ViewError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
