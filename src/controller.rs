//! Width toggle state machine.
//!
//! `WidthToggle` owns the current [`Mode`] and pushes it out to three
//! collaborators: the persisted preference, the root width attribute and the
//! button. It has no browser dependency; the `web` module supplies `web-sys`
//! implementations of the collaborator traits and tests supply fakes.
//!
//! Every transition runs the same sequence: apply attribute, persist, render.
//! A collaborator failure is logged and the sequence continues, so the
//! in-memory mode always advances and the remaining surfaces stay in step
//! with it.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::button::{ButtonView, IconSet, render};
use crate::error::ToggleError;
use crate::mode::Mode;

/// Durable storage for the chosen mode.
pub trait PreferenceStore {
    /// The raw stored value, `None` if nothing was stored.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be read.
    fn load(&self) -> Result<Option<String>, ToggleError>;

    /// Persist `mode`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store rejects the write.
    fn save(&mut self, mode: Mode) -> Result<(), ToggleError>;
}

/// Document-level marker that stylesheet rules key on.
pub trait WidthAttribute {
    /// Remove the marker for slim, set it to the mode name otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error when the DOM rejects the update.
    fn apply(&mut self, mode: Mode) -> Result<(), ToggleError>;
}

/// The clickable surface showing the current mode.
pub trait ToggleButton {
    /// # Errors
    ///
    /// Returns an error when the DOM rejects the update.
    fn show(&mut self, view: &ButtonView<'_>) -> Result<(), ToggleError>;
}

pub struct WidthToggle<S, A, B> {
    store: S,
    attribute: A,
    button: B,
    icons: IconSet,
    mode: Mode,
}

impl<S, A, B> WidthToggle<S, A, B>
where
    S: PreferenceStore,
    A: WidthAttribute,
    B: ToggleButton,
{
    /// Build the controller and bring the page in line with the stored mode.
    pub fn new(store: S, attribute: A, button: B, icons: IconSet) -> Self {
        let stored = match store.load() {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("width toggle: reading preference failed: {err}");
                None
            }
        };
        let mode = Mode::from_stored(stored.as_deref());
        let mut toggle = Self { store, attribute, button, icons, mode };
        toggle.apply_attribute();
        toggle.show_button();
        log::info!("width toggle: initialized in {mode} mode");
        toggle
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Advance to the next mode in the cycle and return it.
    pub fn handle_click(&mut self) -> Mode {
        let next = self.mode.next();
        self.transition(next);
        next
    }

    /// Jump straight to `mode`.
    pub fn set_mode(&mut self, mode: Mode) {
        self.transition(mode);
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn attribute(&self) -> &A {
        &self.attribute
    }

    #[must_use]
    pub fn button(&self) -> &B {
        &self.button
    }

    /// Tear down, returning the collaborators.
    pub fn into_parts(self) -> (S, A, B, IconSet) {
        (self.store, self.attribute, self.button, self.icons)
    }

    fn transition(&mut self, next: Mode) {
        log::debug!("width toggle: {} -> {next}", self.mode);
        self.mode = next;
        self.apply_attribute();
        if let Err(err) = self.store.save(next) {
            log::warn!("width toggle: persisting {next} failed: {err}");
        }
        self.show_button();
    }

    fn apply_attribute(&mut self) {
        if let Err(err) = self.attribute.apply(self.mode) {
            log::warn!("width toggle: applying {} to root failed: {err}", self.mode);
        }
    }

    fn show_button(&mut self) {
        let view = render(self.mode, &self.icons);
        if let Err(err) = self.button.show(&view) {
            log::warn!("width toggle: updating button failed: {err}");
        }
    }
}
