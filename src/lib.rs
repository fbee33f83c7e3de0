//! Terminal dashboard client for a team workspace server.
//!
//! The crate splits into three layers: [`api`] wraps the HTTP surface,
//! [`store`] holds the shared session and member containers, and
//! [`ui`] renders them with ratatui.

pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
pub mod store;
pub mod ui;
