use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GamificationError {
    #[error("Request failed: {0}")]
    Network(String),
    #[error("Invalid response body: {0}")]
    Decode(String),
    #[error("Unexpected status {0}")]
    Status(u16),
    #[error("Server rejected the request: {}", .0.as_deref().unwrap_or("no message"))]
    Rejected(Option<String>),
    #[error("Element not found: {0}")]
    MissingElement(String),
    #[error("Could not play sound: {0}")]
    Audio(String),
    #[error("Local storage unavailable")]
    Storage,
    #[error("JavaScript error: {0}")]
    Js(String),
}

#[cfg(feature = "yew")]
impl From<gloo_net::Error> for GamificationError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(err) => GamificationError::Decode(err.to_string()),
            other => GamificationError::Network(other.to_string()),
        }
    }
}

#[cfg(feature = "yew")]
impl From<wasm_bindgen::JsValue> for GamificationError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        GamificationError::Js(format!("{:?}", value))
    }
}
