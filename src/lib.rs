//! Document width toggle for the docs theme.
//!
//! Compiled to WebAssembly and loaded by the theme page. A single button
//! cycles the content width through slim, wide and full, persists the choice
//! in `localStorage`, and marks `<html>` with a `data-md-width` attribute the
//! stylesheet keys on.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`mode`] | Width modes, their cycle and stored-value parsing |
//! | [`button`] | Icon and tooltip derived from a mode |
//! | [`controller`] | Browser-independent state machine and collaborator traits |
//! | [`options`] | Page names (storage key, attribute, button id, icon global) |
//! | [`error`] | Error type for setup and DOM failures |
//! | [`logging`] | Console logger and panic hook installation |
//! | [`web`] | `web-sys` collaborators, `initialize` and the disposable handle |

pub mod button;
pub mod controller;
pub mod error;
pub mod logging;
pub mod mode;
pub mod options;
pub mod web;

pub use controller::WidthToggle;
pub use mode::Mode;
pub use web::{WidthToggleHandle, initialize};
