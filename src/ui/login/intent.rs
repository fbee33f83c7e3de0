use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum LoginIntent {
    /// Append a character to the focused field.
    Input(char),
    /// Delete the last character of the focused field.
    Backspace,
    NextField,
    PrevField,
    /// Flip between sign-in and registration.
    ToggleMode,
    /// Wipe entered values, keeping the mode.
    Clear,
}

impl Intent for LoginIntent {}
