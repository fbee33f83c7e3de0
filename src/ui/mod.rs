pub mod app;
pub mod chat;
pub mod events;
pub mod layout;
pub mod login;
pub mod mvi;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod users;
pub mod worker;
