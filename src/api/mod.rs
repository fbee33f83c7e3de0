//! Remote API collaborator: typed client, wire entities, and the
//! normalized error taxonomy consumed by the store layer.

mod client;
mod error;
mod types;

pub use client::ApiClient;
pub use error::{ApiError, ErrorKind};
pub use types::{
    AuthPayload, Conversation, Message, MessageAuthor, Participant, UserPatch, UserRecord,
};
