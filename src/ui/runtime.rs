//! The synchronous UI loop.
//!
//! Draws on every event, forwards keys to the app, and shuttles worker
//! results back into it. Async work lives entirely behind the command
//! worker; this loop never awaits.

use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;

use crate::api::ApiClient;
use crate::store::{SessionStore, UsersStore};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::spawn_worker;

const TICK_RATE: Duration = Duration::from_millis(250);

pub fn run(
    session: SessionStore,
    users: UsersStore,
    api: Arc<ApiClient>,
    conversation_id: i64,
    handle: &tokio::runtime::Handle,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;

    let events = EventHandler::new(TICK_RATE);
    let commands = spawn_worker(handle, api, session.clone(), users.clone(), events.sender());
    let mut app = App::new(session, users, commands, conversation_id);

    loop {
        terminal.draw(|frame| app.render(frame))?;

        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Key(key)) => app.handle_key(key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(..)) => {}
            Ok(AppEvent::ConversationLoaded {
                conversation,
                messages,
            }) => app.on_conversation_loaded(conversation, messages),
            Ok(AppEvent::ConversationError(message)) => app.on_conversation_error(message),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
