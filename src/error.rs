//! Error taxonomy for setup and collaborator failures.
//!
//! Setup errors abort `initialize` and reach the host as a JS exception.
//! Collaborator errors raised while handling a click are logged by the
//! controller and never reach the user.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use wasm_bindgen::JsValue;

use crate::mode::UnknownMode;

#[derive(Debug, thiserror::Error)]
pub enum ToggleError {
    #[error("no global `window`")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no root element")]
    NoDocumentElement,
    #[error("localStorage is unavailable")]
    StorageUnavailable,
    #[error("no element with id {id:?}")]
    ButtonNotFound { id: String },
    #[error("element {id:?} is not an HTML element")]
    NotHtmlElement { id: String },
    #[error("icon set `window.{global}` is missing")]
    IconsMissing { global: String },
    #[error("icon set `window.{global}` has no string `{field}`")]
    IconMissing { global: String, field: &'static str },
    #[error(transparent)]
    UnknownMode(#[from] UnknownMode),
    #[error("invalid toggle options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
    #[error("{op} failed: {message}")]
    Dom { op: &'static str, message: String },
}

impl ToggleError {
    /// Wrap an exception thrown by a DOM call.
    #[must_use]
    pub fn dom(op: &'static str, err: &JsValue) -> Self {
        let message = err.as_string().unwrap_or_else(|| format!("{err:?}"));
        Self::Dom { op, message }
    }
}

impl From<ToggleError> for JsValue {
    fn from(err: ToggleError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
