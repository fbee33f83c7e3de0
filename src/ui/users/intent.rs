use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum UserFormIntent {
    /// Open an empty form for a new team member.
    OpenCreate,
    /// Open the form pre-filled from an existing record.
    OpenEdit {
        id: i64,
        name: String,
        email: String,
    },
    Close,
    /// User pressed Escape. If dirty and not yet confirming, arms the
    /// confirm_discard flag; otherwise hides the form.
    RequestClose,
    Input(char),
    Backspace,
    NextField,
    PrevField,
}

impl Intent for UserFormIntent {}
