use crate::ui::mvi::Reducer;
use crate::ui::users::intent::UserFormIntent;
use crate::ui::users::state::{FormField, UserFormState};

pub struct UserFormReducer;

impl Reducer for UserFormReducer {
    type State = UserFormState;
    type Intent = UserFormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            UserFormIntent::OpenCreate => UserFormState::Visible {
                user_id: None,
                name: String::new(),
                email: String::new(),
                password: String::new(),
                focused: FormField::Name,
                dirty: false,
                confirm_discard: false,
            },
            UserFormIntent::OpenEdit { id, name, email } => UserFormState::Visible {
                user_id: Some(id),
                name,
                email,
                password: String::new(),
                focused: FormField::Name,
                dirty: false,
                confirm_discard: false,
            },
            UserFormIntent::Close => UserFormState::Hidden,
            UserFormIntent::RequestClose => match state {
                UserFormState::Visible {
                    dirty: true,
                    confirm_discard: false,
                    user_id,
                    name,
                    email,
                    password,
                    focused,
                } => {
                    // First Escape with unsaved input: ask for confirmation.
                    UserFormState::Visible {
                        user_id,
                        name,
                        email,
                        password,
                        focused,
                        dirty: true,
                        confirm_discard: true,
                    }
                }
                _ => UserFormState::Hidden,
            },
            UserFormIntent::Input(ch) => edit_field(state, |field| field.push(ch)),
            UserFormIntent::Backspace => edit_field(state, |field| {
                field.pop();
            }),
            UserFormIntent::NextField => shift_focus(state, 1),
            UserFormIntent::PrevField => shift_focus(state, -1),
        }
    }
}

fn edit_field(state: UserFormState, apply: impl FnOnce(&mut String)) -> UserFormState {
    match state {
        UserFormState::Visible {
            user_id,
            mut name,
            mut email,
            mut password,
            focused,
            ..
        } => {
            match focused {
                FormField::Name => apply(&mut name),
                FormField::Email => apply(&mut email),
                FormField::Password => apply(&mut password),
            }
            UserFormState::Visible {
                user_id,
                name,
                email,
                password,
                focused,
                dirty: true,
                confirm_discard: false,
            }
        }
        hidden => hidden,
    }
}

fn shift_focus(state: UserFormState, step: isize) -> UserFormState {
    match state {
        UserFormState::Visible {
            user_id,
            name,
            email,
            password,
            focused,
            dirty,
            ..
        } => {
            let current = FormField::ORDER
                .iter()
                .position(|field| *field == focused)
                .unwrap_or(0);
            let len = FormField::ORDER.len() as isize;
            let next = (current as isize + step).rem_euclid(len) as usize;
            UserFormState::Visible {
                user_id,
                name,
                email,
                password,
                focused: FormField::ORDER[next],
                dirty,
                confirm_discard: false,
            }
        }
        hidden => hidden,
    }
}
