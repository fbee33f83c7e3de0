use crate::ui::login::intent::LoginIntent;
use crate::ui::login::state::{AuthMode, LoginField, LoginFormState};
use crate::ui::mvi::Reducer;

pub struct LoginReducer;

impl Reducer for LoginReducer {
    type State = LoginFormState;
    type Intent = LoginIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LoginIntent::Input(ch) => {
                let mut state = state;
                field_mut(&mut state).push(ch);
                state
            }
            LoginIntent::Backspace => {
                let mut state = state;
                field_mut(&mut state).pop();
                state
            }
            LoginIntent::NextField => shift_focus(state, 1),
            LoginIntent::PrevField => shift_focus(state, -1),
            LoginIntent::ToggleMode => {
                let mode = match state.mode {
                    AuthMode::SignIn => AuthMode::Register,
                    AuthMode::Register => AuthMode::SignIn,
                };
                // Name is only reachable in register mode; refocus if it
                // would otherwise be stranded.
                let focused = match (mode, state.focused) {
                    (AuthMode::SignIn, LoginField::Name) => LoginField::Email,
                    (_, focused) => focused,
                };
                LoginFormState {
                    mode,
                    focused,
                    ..state
                }
            }
            LoginIntent::Clear => LoginFormState {
                mode: state.mode,
                ..LoginFormState::default()
            },
        }
    }
}

fn field_mut(state: &mut LoginFormState) -> &mut String {
    match state.focused {
        LoginField::Name => &mut state.name,
        LoginField::Email => &mut state.email,
        LoginField::Password => &mut state.password,
    }
}

fn shift_focus(state: LoginFormState, step: isize) -> LoginFormState {
    let fields = state.fields();
    let current = fields
        .iter()
        .position(|field| *field == state.focused)
        .unwrap_or(0);
    let len = fields.len() as isize;
    let next = (current as isize + step).rem_euclid(len) as usize;
    LoginFormState {
        focused: fields[next],
        ..state
    }
}
