use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures from the browser APIs the interaction layer leans on. None of
/// them are fatal: callers log and leave derived values at their defaults.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element with id `{0}`")]
    MissingElement(String),
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
