use tracing::{debug, info};

use super::responder::{BotanicalResponder, ChatReply};
use super::session::ConversationSession;
use super::store::SessionStore;
use crate::error::ChatError;

/// Responder bound to a session store.
pub struct ChatService<S: SessionStore> {
    responder: BotanicalResponder,
    store: S,
}

impl<S: SessionStore> ChatService<S> {
    pub fn new(responder: BotanicalResponder, store: S) -> Self {
        Self { responder, store }
    }

    pub fn responder(&self) -> &BotanicalResponder {
        &self.responder
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// One chat turn. The whole exchange runs under the session's lock, so
    /// concurrent callers on one id never interleave a user/bot pair.
    /// Empty and off-domain messages never create a session.
    pub fn chat(&self, session_id: &str, message: &str) -> Result<ChatReply, ChatError> {
        if message.trim().is_empty() {
            return Err(ChatError::EmptyInput);
        }
        if !self.responder.is_in_domain(message) {
            debug!(session_id, "Off-domain message");
            return Ok(ChatReply::off_domain());
        }
        self.store
            .update(session_id, |session| self.responder.handle(message, session))
    }

    /// Record the plant last identified for this session.
    pub fn remember_plant(&self, session_id: &str, label: &str) {
        self.store
            .update(session_id, |session| session.remember_plant(label));
        info!(session_id, label, "Remembered identified plant");
    }

    pub fn history(&self, session_id: &str) -> Option<ConversationSession> {
        self.store.get(session_id)
    }

    pub fn forget(&self, session_id: &str) -> bool {
        self.store.evict(session_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::replies;
    use crate::chat::store::InMemorySessionStore;
    use crate::chat::ReplyKind;

    fn service() -> ChatService<InMemorySessionStore> {
        ChatService::new(BotanicalResponder::default(), InMemorySessionStore::default())
    }

    #[test]
    fn test_chat_records_history() {
        let service = service();
        let reply = service.chat("s1", "hello").unwrap();
        assert_eq!(reply.text, replies::GREETING);
        assert_eq!(reply.kind, ReplyKind::Success);
        assert_eq!(service.history("s1").unwrap().len(), 2);
    }

    #[test]
    fn test_off_domain_message_creates_no_session() {
        let service = service();
        let reply = service.chat("s1", "what is the capital of France").unwrap();
        assert_eq!(reply.kind, ReplyKind::Warning);
        assert_eq!(reply.text, replies::OFF_DOMAIN);
        assert!(service.history("s1").is_none());
        assert!(service.store().is_empty());
    }

    #[test]
    fn test_empty_message_creates_no_session() {
        let service = service();
        assert_eq!(service.chat("s1", "  "), Err(ChatError::EmptyInput));
        assert!(service.history("s1").is_none());
    }

    #[test]
    fn test_remembered_plant_feeds_replies() {
        let service = service();
        service.remember_plant("s1", "Epipremnum aureum");
        let reply = service.chat("s1", "is it safe for my cat?").unwrap();
        assert!(reply.text.starts_with("Pothos has a toxicity score of 75/100"), "{}", reply.text);
        assert_eq!(service.history("s1").unwrap().last_plant(), Some("Epipremnum aureum"));
    }

    #[test]
    fn test_forget() {
        let service = service();
        service.chat("s1", "hello").unwrap();
        assert!(service.forget("s1"));
        assert!(service.history("s1").is_none());
    }
}
