use crate::ui::mvi::UiState;

/// Input field of the user form currently holding focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Email,
    Password,
}

impl FormField {
    pub const ORDER: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Password];
}

/// Add/edit dialog for a team member.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum UserFormState {
    #[default]
    Hidden,
    Visible {
        /// `Some(id)` edits an existing record; `None` creates one.
        user_id: Option<i64>,
        name: String,
        email: String,
        password: String,
        focused: FormField,
        dirty: bool,
        /// When true, the next Escape discards changes. Set on the
        /// first Escape while dirty.
        confirm_discard: bool,
    },
}

impl UiState for UserFormState {}

impl UserFormState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}
