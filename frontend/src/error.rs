use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures from browser APIs. None of these are fatal; callers log them and
/// fall back to doing nothing.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("local storage is not available")]
    StorageUnavailable,
    #[error("element not found: {0}")]
    MissingElement(&'static str),
    #[error("created element is not a {0}")]
    UnexpectedElement(&'static str),
    #[error("2d canvas context is not available")]
    NoCanvasContext,
    #[error("clipboard is not available")]
    ClipboardUnavailable,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_element_type_is_not_reported_as_missing() {
        let error = DomError::UnexpectedElement("canvas");
        assert_eq!(error.to_string(), "created element is not a canvas");
        assert_ne!(error.to_string(), DomError::MissingElement("canvas").to_string());
    }

    #[test]
    fn clipboard_unavailable_has_its_own_message() {
        assert_eq!(DomError::ClipboardUnavailable.to_string(), "clipboard is not available");
    }
}
