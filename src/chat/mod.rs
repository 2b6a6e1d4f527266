//! Rule-based botanical chat
//!
//! - `domain`: relevance gate (`is_in_domain`)
//! - `intents`: ordered intent table
//! - `context`: plant mention resolution from message, history and last identification
//! - `replies`: canned reply text
//! - `responder`: `BotanicalResponder` (`respond`, `handle`)
//! - `session` / `store`: bounded history and the session store
//! - `service`: responder plus store

pub mod context;
pub mod domain;
pub mod intents;
pub mod replies;
pub mod responder;
pub mod service;
pub mod session;
pub mod store;
pub mod text;

pub use intents::Intent;
pub use responder::{BotanicalResponder, ChatReply, ReplyKind};
pub use service::ChatService;
pub use session::{ConversationSession, Role, Turn};
pub use store::{InMemorySessionStore, SessionStore};
