//! Names the toggle uses to find its collaborators in the page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The theme template renders the button, the icon global and the CSS that
//! keys on the root attribute. These names must agree with it. Hosts that
//! use the stock template pass nothing; others pass a partial JSON object.

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;

use serde::Deserialize;

use crate::error::ToggleError;

pub const DEFAULT_STORAGE_KEY: &str = "md-width";
pub const DEFAULT_ATTRIBUTE: &str = "data-md-width";
pub const DEFAULT_BUTTON_ID: &str = "md-width-toggle";
pub const DEFAULT_ICONS_GLOBAL: &str = "__mdWidthIcons";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct ToggleOptions {
    /// `localStorage` key holding the persisted mode.
    pub storage_key: String,
    /// Attribute on `<html>` that stylesheet rules read.
    pub attribute: String,
    /// Id of the toggle button.
    pub button_id: String,
    /// Property of `window` holding the `{ maximize, minimize }` glyphs.
    pub icons_global: String,
}

impl Default for ToggleOptions {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            attribute: DEFAULT_ATTRIBUTE.to_owned(),
            button_id: DEFAULT_BUTTON_ID.to_owned(),
            icons_global: DEFAULT_ICONS_GLOBAL.to_owned(),
        }
    }
}

impl ToggleOptions {
    /// Parse options from a JSON object. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::InvalidOptions`] for malformed JSON or unknown fields.
    pub fn from_json(raw: &str) -> Result<Self, ToggleError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Defaults when `raw` is `None` or blank, otherwise [`ToggleOptions::from_json`].
    ///
    /// # Errors
    ///
    /// Same as [`ToggleOptions::from_json`].
    pub fn resolve(raw: Option<&str>) -> Result<Self, ToggleError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(json) => Self::from_json(json),
        }
    }
}
