/// Errors from the browser boundary. The inference engine itself never fails.
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no window available")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("invalid page location: {0}")]
    Location(String),

    #[error("navigation to {url} failed: {reason}")]
    Navigation { url: String, reason: String },

    #[error("storage access failed: {0}")]
    Storage(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl From<serde_wasm_bindgen::Error> for Error {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::Location(e.to_string())
    }
}

impl From<Error> for JsValue {
    fn from(e: Error) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
