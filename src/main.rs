use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use huddle::api::ApiClient;
use huddle::cli::Cli;
use huddle::config::{Config, TokenCache};
use huddle::store::{SessionStore, UsersStore};
use huddle::{logging, ui};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(server) = cli.server {
        config.server.base_url = server;
    }
    if let Some(conversation) = cli.conversation {
        config.chat.conversation_id = conversation;
    }
    config.validate()?;

    let api = Arc::new(ApiClient::new(&config.server).context("failed to build HTTP client")?);
    let tokens = TokenCache::new(TokenCache::default_path());
    let session = SessionStore::new(Arc::clone(&api), tokens);
    let users = UsersStore::new(Arc::clone(&api));

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;

    ui::runtime::run(
        session,
        users,
        api,
        config.chat.conversation_id,
        runtime.handle(),
    )?;

    Ok(())
}
