//! Button presentation derived from the current mode.

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

use crate::mode::Mode;

/// Glyph markup supplied by the host page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IconSet {
    /// Shown while the layout can still grow (slim, wide).
    pub maximize: String,
    /// Shown in full mode, where the next click shrinks back to slim.
    pub minimize: String,
}

impl IconSet {
    #[must_use]
    pub fn new(maximize: impl Into<String>, minimize: impl Into<String>) -> Self {
        Self { maximize: maximize.into(), minimize: minimize.into() }
    }

    /// Glyph for `mode`. Only full mode shows the minimize glyph.
    #[must_use]
    pub fn glyph(&self, mode: Mode) -> &str {
        match mode {
            Mode::Full => &self.minimize,
            Mode::Slim | Mode::Wide => &self.maximize,
        }
    }
}

/// Everything the button displays for one mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonView<'a> {
    pub icon: &'a str,
    pub title: String,
}

/// Tooltip naming the current mode and the one a click leads to.
#[must_use]
pub fn tooltip(mode: Mode) -> String {
    format!("Current: {} - Click for {}", mode.label(), mode.next().label())
}

/// Compute the button view for `mode`.
#[must_use]
pub fn render(mode: Mode, icons: &IconSet) -> ButtonView<'_> {
    ButtonView { icon: icons.glyph(mode), title: tooltip(mode) }
}
