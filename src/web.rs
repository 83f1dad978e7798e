//! Browser bindings: `web-sys` collaborators and the JS entry point.
//!
//! SYSTEM CONTEXT
//! ==============
//! The theme page loads the wasm module and calls `initialize()` once the
//! toggle button is in the DOM. The returned handle keeps the click listener
//! alive; `dispose()` (or freeing the handle) detaches it.
//!
//! TRADE-OFFS
//! ==========
//! Storage is best effort. When `localStorage` is disabled the toggle still
//! cycles for the lifetime of the page; it just forgets on reload.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Reflect;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, HtmlElement, Storage, Window};

use crate::button::{ButtonView, IconSet};
use crate::controller::{PreferenceStore, ToggleButton, WidthAttribute, WidthToggle};
use crate::error::ToggleError;
use crate::logging;
use crate::mode::Mode;
use crate::options::ToggleOptions;

// =============================================================================
// COLLABORATORS
// =============================================================================

/// `PreferenceStore` over `window.localStorage`.
pub struct LocalStorageStore {
    storage: Option<Storage>,
    key: String,
}

impl LocalStorageStore {
    /// Open local storage for `key`. Missing or blocked storage degrades to
    /// an empty store whose writes fail.
    pub fn new(window: &Window, key: impl Into<String>) -> Self {
        let storage = match window.local_storage() {
            Ok(Some(storage)) => Some(storage),
            Ok(None) => {
                log::warn!("width toggle: localStorage is not available");
                None
            }
            Err(err) => {
                log::warn!("width toggle: {}", ToggleError::dom("window.localStorage", &err));
                None
            }
        };
        Self { storage, key: key.into() }
    }
}

impl PreferenceStore for LocalStorageStore {
    fn load(&self) -> Result<Option<String>, ToggleError> {
        let Some(storage) = &self.storage else {
            return Ok(None);
        };
        storage
            .get_item(&self.key)
            .map_err(|err| ToggleError::dom("localStorage.getItem", &err))
    }

    fn save(&mut self, mode: Mode) -> Result<(), ToggleError> {
        let storage = self.storage.as_ref().ok_or(ToggleError::StorageUnavailable)?;
        storage
            .set_item(&self.key, mode.as_str())
            .map_err(|err| ToggleError::dom("localStorage.setItem", &err))
    }
}

/// `WidthAttribute` over an attribute of `document.documentElement`.
pub struct DocumentRoot {
    element: Element,
    name: String,
}

impl DocumentRoot {
    pub fn new(element: Element, name: impl Into<String>) -> Self {
        Self { element, name: name.into() }
    }
}

impl WidthAttribute for DocumentRoot {
    fn apply(&mut self, mode: Mode) -> Result<(), ToggleError> {
        match mode.attribute_value() {
            None => self
                .element
                .remove_attribute(&self.name)
                .map_err(|err| ToggleError::dom("removeAttribute", &err)),
            Some(value) => self
                .element
                .set_attribute(&self.name, value)
                .map_err(|err| ToggleError::dom("setAttribute", &err)),
        }
    }
}

/// `ToggleButton` over the toggle's HTML element.
pub struct ButtonElement {
    element: HtmlElement,
}

impl ButtonElement {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }
}

impl ToggleButton for ButtonElement {
    fn show(&mut self, view: &ButtonView<'_>) -> Result<(), ToggleError> {
        self.element.set_inner_html(view.icon);
        self.element
            .set_attribute("title", &view.title)
            .map_err(|err| ToggleError::dom("setAttribute", &err))
    }
}

impl IconSet {
    /// Read `window[global].maximize` and `window[global].minimize`.
    ///
    /// # Errors
    ///
    /// Fails when the global is absent or either glyph is not a string.
    pub fn from_global(window: &Window, global: &str) -> Result<Self, ToggleError> {
        let icons = Reflect::get(window, &JsValue::from_str(global))
            .map_err(|err| ToggleError::dom("Reflect.get", &err))?;
        if icons.is_undefined() || icons.is_null() {
            return Err(ToggleError::IconsMissing { global: global.to_owned() });
        }
        Ok(Self {
            maximize: icon_field(&icons, global, "maximize")?,
            minimize: icon_field(&icons, global, "minimize")?,
        })
    }
}

fn icon_field(icons: &JsValue, global: &str, field: &'static str) -> Result<String, ToggleError> {
    Reflect::get(icons, &JsValue::from_str(field))
        .map_err(|err| ToggleError::dom("Reflect.get", &err))?
        .as_string()
        .ok_or_else(|| ToggleError::IconMissing { global: global.to_owned(), field })
}

// =============================================================================
// ENTRY POINT
// =============================================================================

type BrowserToggle = WidthToggle<LocalStorageStore, DocumentRoot, ButtonElement>;

/// Live toggle returned to JS. Owns the click listener.
#[wasm_bindgen]
pub struct WidthToggleHandle {
    toggle: Rc<RefCell<BrowserToggle>>,
    target: HtmlElement,
    listener: Option<Closure<dyn FnMut(Event)>>,
}

#[wasm_bindgen]
impl WidthToggleHandle {
    /// Name of the current mode.
    pub fn mode(&self) -> String {
        self.toggle.borrow().mode().as_str().to_owned()
    }

    /// Advance as if the button had been clicked. Returns the new mode name.
    pub fn click(&self) -> String {
        advance(&self.toggle);
        self.mode()
    }

    /// Jump to the named mode.
    ///
    /// # Errors
    ///
    /// Throws when `mode` is not `slim`, `wide` or `full`.
    #[wasm_bindgen(js_name = setMode)]
    pub fn set_mode(&self, mode: &str) -> Result<(), JsValue> {
        let mode: Mode = mode.parse().map_err(ToggleError::from)?;
        match self.toggle.try_borrow_mut() {
            Ok(mut toggle) => toggle.set_mode(mode),
            Err(_) => log::warn!("width toggle: ignoring re-entrant setMode({mode})"),
        }
        Ok(())
    }

    /// Detach the click listener and release the handle.
    pub fn dispose(self) {
        drop(self);
    }
}

impl WidthToggleHandle {
    fn detach(&mut self) {
        let Some(listener) = self.listener.take() else {
            return;
        };
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
        {
            log::warn!("width toggle: {}", ToggleError::dom("removeEventListener", &err));
        }
        log::debug!("width toggle: listener detached");
    }
}

impl Drop for WidthToggleHandle {
    fn drop(&mut self) {
        self.detach();
    }
}

fn advance(toggle: &Rc<RefCell<BrowserToggle>>) {
    match toggle.try_borrow_mut() {
        Ok(mut toggle) => {
            toggle.handle_click();
        }
        Err(_) => log::warn!("width toggle: ignoring re-entrant click"),
    }
}

/// Wire the toggle into the page.
///
/// `options` is an optional JSON object overriding any of `storageKey`,
/// `attribute`, `buttonId` and `iconsGlobal`.
///
/// # Errors
///
/// Throws when the options are invalid or the button, root element or icon
/// set cannot be found.
#[wasm_bindgen]
pub fn initialize(options: Option<String>) -> Result<WidthToggleHandle, JsValue> {
    logging::init();
    let options = ToggleOptions::resolve(options.as_deref())?;
    mount(&options).map_err(|err| {
        log::error!("width toggle: {err}");
        JsValue::from(err)
    })
}

/// Build the browser collaborators from `options`, initialize the toggle and
/// attach the click listener.
///
/// # Errors
///
/// See [`initialize`].
pub fn mount(options: &ToggleOptions) -> Result<WidthToggleHandle, ToggleError> {
    let window = web_sys::window().ok_or(ToggleError::NoWindow)?;
    let document = window.document().ok_or(ToggleError::NoDocument)?;
    let root = document.document_element().ok_or(ToggleError::NoDocumentElement)?;
    let button: HtmlElement = document
        .get_element_by_id(&options.button_id)
        .ok_or_else(|| ToggleError::ButtonNotFound { id: options.button_id.clone() })?
        .dyn_into()
        .map_err(|_| ToggleError::NotHtmlElement { id: options.button_id.clone() })?;
    let icons = IconSet::from_global(&window, &options.icons_global)?;

    let toggle = Rc::new(RefCell::new(WidthToggle::new(
        LocalStorageStore::new(&window, options.storage_key.as_str()),
        DocumentRoot::new(root, options.attribute.as_str()),
        ButtonElement::new(button.clone()),
        icons,
    )));

    let for_click = Rc::clone(&toggle);
    let listener = Closure::wrap(Box::new(move |_event: Event| {
        advance(&for_click);
    }) as Box<dyn FnMut(Event)>);
    button
        .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
        .map_err(|err| ToggleError::dom("addEventListener", &err))?;

    Ok(WidthToggleHandle { toggle, target: button, listener: Some(listener) })
}
