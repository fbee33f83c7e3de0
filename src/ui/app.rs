//! Application state and key dispatch.
//!
//! The app owns the local MVI slices, holds clones of the store
//! handles, and turns key presses into intents or worker commands. It
//! never talks to the network itself.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::api::{Conversation, Message, UserPatch};
use crate::store::{SessionStore, UsersStore};
use crate::ui::chat::{render_chat, ChatIntent, ChatPaneState, ChatProps, ChatReducer};
use crate::ui::layout::layout_regions;
use crate::ui::login::{render_login, AuthMode, LoginFormState, LoginIntent, LoginReducer};
use crate::ui::mvi::Reducer;
use crate::ui::theme::{STATUS_OK, TEXT_DIM};
use crate::ui::users::{
    render_user_form, render_users, UserFormIntent, UserFormReducer, UserFormState,
};
use crate::ui::worker::{UiCommand, UiCommandSender};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Which pane the main view shows.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Tab {
    Chat,
    Users,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {{
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    }};
}

pub struct App {
    should_quit: bool,
    tab: Tab,
    session: SessionStore,
    users: UsersStore,
    commands: UiCommandSender,
    conversation_id: i64,
    /// Login/registration form (MVI slice).
    login: LoginFormState,
    /// Add/edit member dialog (MVI slice).
    user_form: UserFormState,
    /// Chat scroll state (MVI slice).
    chat: ChatPaneState,
    /// View-only chat data, delivered by the worker.
    conversation: Option<Conversation>,
    messages: Vec<Message>,
    chat_error: Option<String>,
    selected_user: usize,
    /// Set once the post-login data loads have been issued.
    bootstrapped: bool,
}

impl App {
    pub fn new(
        session: SessionStore,
        users: UsersStore,
        commands: UiCommandSender,
        conversation_id: i64,
    ) -> Self {
        // A rehydrated token is only trusted after the server confirms it.
        if session.snapshot().token.is_some() {
            let _ = commands.send(UiCommand::FetchCurrentUser);
        }

        Self {
            should_quit: false,
            tab: Tab::Chat,
            session,
            users,
            commands,
            conversation_id,
            login: LoginFormState::default(),
            user_form: UserFormState::default(),
            chat: ChatPaneState::default(),
            conversation: None,
            messages: Vec::new(),
            chat_error: None,
            selected_user: 0,
            bootstrapped: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn send(&self, command: UiCommand) {
        if self.commands.send(command).is_err() {
            tracing::error!("command worker is gone");
        }
    }

    pub fn on_tick(&mut self) {
        let authenticated = self.session.snapshot().is_authenticated();
        if authenticated && !self.bootstrapped {
            self.bootstrapped = true;
            // Credentials must not linger across a later sign-out.
            dispatch_mvi!(self, login, LoginReducer, LoginIntent::Clear);
            self.send(UiCommand::LoadUsers);
            self.send(UiCommand::LoadConversation {
                id: self.conversation_id,
            });
        }
        if !authenticated && self.bootstrapped {
            // Signed out (or the session expired): drop stale data.
            self.bootstrapped = false;
            self.conversation = None;
            self.messages.clear();
            self.chat_error = None;
            self.users.reset();
        }
    }

    pub fn on_conversation_loaded(&mut self, conversation: Conversation, messages: Vec<Message>) {
        self.conversation = Some(conversation);
        self.messages = messages;
        self.chat_error = None;
        dispatch_mvi!(self, chat, ChatReducer, ChatIntent::TranscriptReplaced);
    }

    pub fn on_conversation_error(&mut self, message: String) {
        self.chat_error = Some(message);
    }

    // -- input --------------------------------------------------------------

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('q') {
            self.should_quit = true;
            return;
        }

        if !self.session.snapshot().is_authenticated() {
            self.handle_login_key(key);
        } else if self.user_form.is_visible() {
            self.handle_form_key(key);
        } else {
            self.handle_main_key(key);
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_login(),
            KeyCode::Tab | KeyCode::Down => {
                dispatch_mvi!(self, login, LoginReducer, LoginIntent::NextField)
            }
            KeyCode::BackTab | KeyCode::Up => {
                dispatch_mvi!(self, login, LoginReducer, LoginIntent::PrevField)
            }
            KeyCode::Backspace => dispatch_mvi!(self, login, LoginReducer, LoginIntent::Backspace),
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                dispatch_mvi!(self, login, LoginReducer, LoginIntent::ToggleMode)
            }
            KeyCode::Char(ch) => dispatch_mvi!(self, login, LoginReducer, LoginIntent::Input(ch)),
            _ => {}
        }
    }

    fn submit_login(&mut self) {
        // No client-side validation: the server is the sole validator.
        match self.login.mode {
            AuthMode::SignIn => self.send(UiCommand::Login {
                email: self.login.email.clone(),
                password: self.login.password.clone(),
            }),
            AuthMode::Register => self.send(UiCommand::Register {
                name: self.login.name.clone(),
                email: self.login.email.clone(),
                password: self.login.password.clone(),
            }),
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                dispatch_mvi!(self, user_form, UserFormReducer, UserFormIntent::RequestClose)
            }
            KeyCode::Enter => self.submit_user_form(),
            KeyCode::Tab | KeyCode::Down => {
                dispatch_mvi!(self, user_form, UserFormReducer, UserFormIntent::NextField)
            }
            KeyCode::BackTab | KeyCode::Up => {
                dispatch_mvi!(self, user_form, UserFormReducer, UserFormIntent::PrevField)
            }
            KeyCode::Backspace => {
                dispatch_mvi!(self, user_form, UserFormReducer, UserFormIntent::Backspace)
            }
            KeyCode::Char(ch) => {
                dispatch_mvi!(self, user_form, UserFormReducer, UserFormIntent::Input(ch))
            }
            _ => {}
        }
    }

    fn submit_user_form(&mut self) {
        let UserFormState::Visible {
            user_id,
            name,
            email,
            password,
            ..
        } = &self.user_form
        else {
            return;
        };

        match user_id {
            None => self.send(UiCommand::CreateUser {
                name: name.clone(),
                email: email.clone(),
                password: password.clone(),
            }),
            Some(id) => {
                let mut patch = UserPatch::default().name(name.clone()).email(email.clone());
                if !password.is_empty() {
                    patch = patch.password(password.clone());
                }
                self.send(UiCommand::UpdateUser { id: *id, patch });
            }
        }
        dispatch_mvi!(self, user_form, UserFormReducer, UserFormIntent::Close);
    }

    fn handle_main_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => {
                self.tab = match self.tab {
                    Tab::Chat => Tab::Users,
                    Tab::Users => Tab::Chat,
                };
            }
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.send(UiCommand::Logout);
            }
            KeyCode::Char('r') => match self.tab {
                Tab::Chat => self.send(UiCommand::LoadConversation {
                    id: self.conversation_id,
                }),
                Tab::Users => self.send(UiCommand::LoadUsers),
            },
            _ => match self.tab {
                Tab::Chat => self.handle_chat_key(key),
                Tab::Users => self.handle_users_key(key),
            },
        }
    }

    fn handle_chat_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => dispatch_mvi!(self, chat, ChatReducer, ChatIntent::ScrollUp),
            KeyCode::Down => dispatch_mvi!(self, chat, ChatReducer, ChatIntent::ScrollDown),
            KeyCode::End => dispatch_mvi!(self, chat, ChatReducer, ChatIntent::JumpToLatest),
            _ => {}
        }
    }

    fn handle_users_key(&mut self, key: KeyEvent) {
        let count = self.users.snapshot().users.len();
        match key.code {
            KeyCode::Up => self.selected_user = self.selected_user.saturating_sub(1),
            KeyCode::Down if count > 0 => {
                self.selected_user = (self.selected_user + 1).min(count - 1)
            }
            KeyCode::Char('a') => {
                dispatch_mvi!(self, user_form, UserFormReducer, UserFormIntent::OpenCreate)
            }
            KeyCode::Char('e') => {
                if let Some(user) = self.users.snapshot().users.get(self.selected_user) {
                    let intent = UserFormIntent::OpenEdit {
                        id: user.id,
                        name: user.name.clone(),
                        email: user.email.clone(),
                    };
                    dispatch_mvi!(self, user_form, UserFormReducer, intent);
                }
            }
            KeyCode::Char('d') => {
                if let Some(user) = self.users.snapshot().users.get(self.selected_user) {
                    self.send(UiCommand::DeleteUser { id: user.id });
                }
            }
            _ => {}
        }
    }

    // -- rendering ----------------------------------------------------------

    pub fn render(&self, frame: &mut Frame) {
        let (body, footer) = layout_regions(frame.area());
        let session = self.session.snapshot();

        match self.tab {
            Tab::Chat => {
                let props = ChatProps {
                    conversation: self.conversation.as_ref(),
                    messages: &self.messages,
                    current_user_id: session.user.as_ref().map(|user| user.id),
                    error: self.chat_error.as_deref(),
                };
                render_chat(frame, body, &props, &self.chat);
            }
            Tab::Users => {
                let slice = self.users.snapshot();
                render_users(frame, body, &slice, self.selected_user, true);
            }
        }

        self.render_footer(frame, footer, session.user.as_ref().map(|user| user.name.as_str()));

        if !session.is_authenticated() {
            render_login(frame, &self.login, &session);
        } else {
            render_user_form(frame, &self.user_form);
        }
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect, user: Option<&str>) {
        let hints = match self.tab {
            Tab::Chat => " Tab: users │ ↑/↓: scroll │ r: refresh │ Ctrl+L: sign out │ Ctrl+Q: quit",
            Tab::Users => {
                " Tab: chat │ a: add │ e: edit │ d: delete │ r: refresh │ Ctrl+L: sign out │ Ctrl+Q: quit"
            }
        };
        let who = match user {
            Some(name) => format!("● {name} "),
            None => String::new(),
        };
        let version = format!("v{VERSION} ");
        let padding = (area.width as usize)
            .saturating_sub(hints.chars().count())
            .saturating_sub(who.chars().count())
            .saturating_sub(version.chars().count());
        let style = Style::default().fg(TEXT_DIM).add_modifier(Modifier::DIM);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(hints, style),
                Span::styled(" ".repeat(padding), style),
                Span::styled(who, Style::default().fg(STATUS_OK)),
                Span::styled(version, style),
            ])),
            area,
        );
    }
}
