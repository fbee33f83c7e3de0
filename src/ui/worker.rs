//! Command worker: bridges the synchronous UI loop and the async store
//! actions.
//!
//! The UI thread sends [`UiCommand`]s; the worker fires the matching
//! store action as its own task, so actions are fire-and-settle and
//! never block input handling. Chat data is view-only (no container
//! owns it), so the worker delivers it back as an [`AppEvent`] instead.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::api::{ApiClient, UserPatch};
use crate::store::{SessionStore, UsersStore};
use crate::ui::events::AppEvent;

const CONVERSATION_FALLBACK: &str = "Unable to load the conversation";

/// Requests the UI issues to the worker.
#[derive(Debug)]
pub enum UiCommand {
    Login { email: String, password: String },
    Register { name: String, email: String, password: String },
    Logout,
    FetchCurrentUser,
    LoadUsers,
    CreateUser { name: String, email: String, password: String },
    UpdateUser { id: i64, patch: UserPatch },
    DeleteUser { id: i64 },
    LoadConversation { id: i64 },
}

pub type UiCommandSender = mpsc::UnboundedSender<UiCommand>;

/// Spawn the worker onto the given runtime and return its sender.
pub fn spawn_worker(
    handle: &tokio::runtime::Handle,
    api: Arc<ApiClient>,
    session: SessionStore,
    users: UsersStore,
    events: Sender<AppEvent>,
) -> UiCommandSender {
    let (tx, mut rx) = mpsc::unbounded_channel();

    let inner = handle.clone();
    handle.spawn(async move {
        while let Some(command) = rx.recv().await {
            tracing::debug!(?command, "dispatching command");
            let api = Arc::clone(&api);
            let session = session.clone();
            let users = users.clone();
            let events = events.clone();
            inner.spawn(async move {
                run_command(command, api, session, users, events).await;
            });
        }
    });

    tx
}

async fn run_command(
    command: UiCommand,
    api: Arc<ApiClient>,
    session: SessionStore,
    users: UsersStore,
    events: Sender<AppEvent>,
) {
    match command {
        UiCommand::Login { email, password } => {
            // Failures are re-signaled to callers by contract; the UI
            // reacts through the slice, so the result is only logged.
            if session.login(&email, &password).await.is_err() {
                tracing::info!("login rejected");
            }
        }
        UiCommand::Register {
            name,
            email,
            password,
        } => {
            if session.register(&name, &email, &password).await.is_err() {
                tracing::info!("registration rejected");
            }
        }
        UiCommand::Logout => {
            if session.logout().await.is_err() {
                tracing::info!("logout rejected");
            }
        }
        UiCommand::FetchCurrentUser => session.fetch_current_user().await,
        UiCommand::LoadUsers => users.load().await,
        UiCommand::CreateUser {
            name,
            email,
            password,
        } => users.add(&name, &email, &password).await,
        UiCommand::UpdateUser { id, patch } => users.edit(id, patch).await,
        UiCommand::DeleteUser { id } => users.remove(id).await,
        UiCommand::LoadConversation { id } => {
            let loaded = async {
                let conversation = api.conversation(id).await?;
                let messages = api.messages(id).await?;
                Ok::<_, crate::api::ApiError>((conversation, messages))
            }
            .await;
            let event = match loaded {
                Ok((conversation, messages)) => AppEvent::ConversationLoaded {
                    conversation,
                    messages,
                },
                Err(err) => AppEvent::ConversationError(err.message_or(CONVERSATION_FALLBACK)),
            };
            let _ = events.send(event);
        }
    }
}
