//! Submit-key handling.

/// Modifier keys held during a key press.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

/// Whether an Enter press should submit the form. A modifier-held
/// Enter is not intercepted, so the input control inserts a literal
/// newline instead.
pub fn submit_on_enter(modifiers: Modifiers) -> bool {
    !modifiers.any()
}
