//! Lumon Botanist
//!
//! Plant photo identification by color heuristics plus a rule-based
//! botanical chat responder with bounded per-session memory.
//!
//! - `classifier/`: color ratio extraction and the ordered rule tables
//! - `profiles/`: static plant facts and name lookup
//! - `chat/`: domain gate, intent matching, sessions
//! - `config`: constants and environment configuration
//! - `api_server`: Axum HTTP API (feature `api`)

pub mod chat;
pub mod classifier;
pub mod config;
pub mod error;
pub mod profiles;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use chat::{BotanicalResponder, ChatReply, ChatService, ConversationSession, InMemorySessionStore, SessionStore};
pub use classifier::{ClassificationResult, ColorHeuristicClassifier, SourceTag};
pub use config::{ClassifierConfig, ResponderConfig, ServerConfig, SessionConfig, TieBreak};
pub use error::{ChatError, ClassifyError};
pub use profiles::{lookup, PlantProfile};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
