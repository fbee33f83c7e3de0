use crate::ui::mvi::UiState;

/// Whether the form submits a sign-in or a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    Register,
}

/// Input field currently holding focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    Name,
    #[default]
    Email,
    Password,
}

/// Sign-in / registration form. Purely local input state; submission
/// outcome is observed through the session slice.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginFormState {
    pub mode: AuthMode,
    pub name: String,
    pub email: String,
    pub password: String,
    pub focused: LoginField,
}

impl UiState for LoginFormState {}

impl LoginFormState {
    /// Fields reachable in the current mode, in focus order.
    pub fn fields(&self) -> &'static [LoginField] {
        match self.mode {
            AuthMode::SignIn => &[LoginField::Email, LoginField::Password],
            AuthMode::Register => &[LoginField::Name, LoginField::Email, LoginField::Password],
        }
    }
}
