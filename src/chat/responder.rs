//! Rule-based botanical responder.

use serde::Serialize;
use tracing::debug;

use super::context::{self, PlantContext};
use super::domain;
use super::intents::{self, Intent};
use super::replies;
use super::session::{ConversationSession, Turn};
use super::text::Message;
use crate::config::ResponderConfig;
use crate::error::ChatError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyKind {
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatReply {
    pub text: String,
    pub kind: ReplyKind,
}

impl ChatReply {
    pub fn off_domain() -> Self {
        Self {
            text: replies::OFF_DOMAIN.to_string(),
            kind: ReplyKind::Warning,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BotanicalResponder {
    config: ResponderConfig,
}

impl BotanicalResponder {
    pub fn new(config: ResponderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResponderConfig {
        &self.config
    }

    pub fn is_in_domain(&self, message: &str) -> bool {
        domain::is_in_domain(&Message::new(message), self.config.short_message_max_words)
    }

    pub fn intent_of(&self, message: &str) -> Intent {
        intents::match_intent(&Message::new(message), self.config.shortcut_max_words)
    }

    /// Reply to `message` and record both turns in `session`.
    ///
    /// Never fails: blank or unmatched input gets the catch-all reply.
    pub fn respond(&self, message: &str, session: &mut ConversationSession) -> String {
        let parsed = Message::new(message);
        let reply = self.compose(&parsed, session);

        session.push(Turn::user(message.trim()));
        session.push(Turn::bot(reply.clone()));
        session.retain_recent(self.config.history_cap);
        reply
    }

    /// Chat entry point: rejects empty input and answers off-domain messages
    /// with a warning, leaving history untouched.
    pub fn handle(&self, message: &str, session: &mut ConversationSession) -> Result<ChatReply, ChatError> {
        if message.trim().is_empty() {
            return Err(ChatError::EmptyInput);
        }

        if !self.is_in_domain(message) {
            debug!(session_id = session.id(), "Off-domain message");
            return Ok(ChatReply::off_domain());
        }

        Ok(ChatReply {
            text: self.respond(message, session),
            kind: ReplyKind::Success,
        })
    }

    fn compose(&self, message: &Message, session: &ConversationSession) -> String {
        if message.is_blank() {
            return replies::CATCH_ALL.to_string();
        }

        let intent = intents::match_intent(message, self.config.shortcut_max_words);
        debug!(session_id = session.id(), ?intent, "Intent matched");

        match intent {
            Intent::MoreDetail => self.follow_up(message, session),
            _ => {
                let plant = context::resolve(message, session, self.config.context_lookback);
                replies::render(intent, plant.as_ref())
            }
        }
    }

    /// "Tell me more": the message's own topic if it names one, else the
    /// topic of the previous user turn.
    fn follow_up(&self, message: &Message, session: &ConversationSession) -> String {
        let own_topic = intents::topic_of(message);
        let (topic, source) = if replies::detail(own_topic).is_some() {
            (own_topic, message.clone())
        } else {
            match session.last_user_turn() {
                Some(turn) => {
                    let previous = Message::new(&turn.text);
                    (intents::topic_of(&previous), previous)
                }
                None => return replies::NO_PREVIOUS_TOPIC.to_string(),
            }
        };

        let Some(text) = replies::detail(topic) else {
            return replies::NO_MORE_DETAIL.to_string();
        };

        let plant: Option<PlantContext> =
            context::resolve(&source, session, self.config.context_lookback);
        match plant {
            Some(p) => format!("More on {} for {}: {}", topic.topic(), p.name, text),
            None => format!("More on {}: {}", topic.topic(), text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::session::Role;

    fn responder() -> BotanicalResponder {
        BotanicalResponder::default()
    }

    #[test]
    fn test_greeting_regardless_of_history() {
        let responder = responder();
        let mut session = ConversationSession::new("s");
        assert_eq!(responder.respond("hi", &mut session), replies::GREETING);
        responder.respond("how do I water my orchid?", &mut session);
        assert_eq!(responder.respond("hi", &mut session), replies::GREETING);
    }

    #[test]
    fn test_turns_recorded_in_order() {
        let responder = responder();
        let mut session = ConversationSession::new("s");
        let reply = responder.respond("  how often should I water?  ", &mut session);

        let turns: Vec<_> = session.history().iter().collect();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].role, Role::User);
        assert_eq!(turns[0].text, "how often should I water?");
        assert_eq!(turns[1].role, Role::Bot);
        assert_eq!(turns[1].text, reply);
    }

    #[test]
    fn test_history_capped() {
        let responder = responder();
        let mut session = ConversationSession::with_capacity("s", 100);
        for i in 0..15 {
            responder.respond(&format!("question {i}"), &mut session);
        }
        assert_eq!(session.len(), 20);
        assert_eq!(session.history()[0].text, "question 5");
    }

    #[test]
    fn test_plant_from_history() {
        let responder = responder();
        let mut session = ConversationSession::new("s");
        responder.respond("I just bought some basil", &mut session);
        let reply = responder.respond("how should I water it?", &mut session);
        assert_eq!(reply, "For basil, check soil moisture first. Water when the top inch is dry.");
    }

    #[test]
    fn test_last_identified_plant_resolves_pronouns() {
        let responder = responder();
        let mut session = ConversationSession::new("s");
        session.remember_plant("Aloe barbadensis");
        let reply = responder.respond("where are these found?", &mut session);
        assert!(reply.contains("Aloe Vera (Aloe barbadensis) is native to"), "{reply}");
    }

    #[test]
    fn test_more_detail_uses_previous_topic() {
        let responder = responder();
        let mut session = ConversationSession::new("s");
        responder.respond("how much light do ferns need", &mut session);
        let reply = responder.respond("tell me more", &mut session);
        assert!(reply.starts_with("More on light for ferns: "), "{reply}");
    }

    #[test]
    fn test_more_detail_without_history() {
        let responder = responder();
        let mut session = ConversationSession::new("s");
        assert_eq!(responder.respond("tell me more", &mut session), replies::NO_PREVIOUS_TOPIC);
    }

    #[test]
    fn test_go_onto_is_not_a_follow_up() {
        let responder = responder();
        let mut session = ConversationSession::new("s");
        let reply = responder.respond("should my plant go onto the balcony", &mut session);
        assert_ne!(reply, replies::NO_PREVIOUS_TOPIC);
        assert!(reply.starts_with("I can help with any plant topic!"), "{reply}");
    }

    #[test]
    fn test_unmatched_and_blank_input() {
        let responder = responder();
        let mut session = ConversationSession::new("s");
        assert_eq!(responder.respond("", &mut session), replies::CATCH_ALL);
        assert_eq!(responder.respond("qwerty", &mut session), replies::CATCH_ALL);
    }

    #[test]
    fn test_handle() {
        let responder = responder();
        let mut session = ConversationSession::new("s");

        assert_eq!(responder.handle("   ", &mut session), Err(ChatError::EmptyInput));

        let reply = responder
            .handle("what is the capital of France", &mut session)
            .unwrap();
        assert_eq!(reply.kind, ReplyKind::Warning);
        assert_eq!(reply.text, replies::OFF_DOMAIN);
        assert!(session.is_empty());

        let reply = responder.handle("hello", &mut session).unwrap();
        assert_eq!(reply.kind, ReplyKind::Success);
        assert_eq!(session.len(), 2);
    }
}
