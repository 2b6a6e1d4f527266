// Chat Integration Tests
//
// Purpose: Responder behaviour across turns and session store concurrency
// Run with: cargo test --test chat_tests

use lumon_botanist::chat::{replies, Role, Turn};
use lumon_botanist::config::SessionConfig;
use lumon_botanist::{BotanicalResponder, ChatService, ConversationSession, InMemorySessionStore, SessionStore};
use std::sync::Arc;
use std::thread;

fn service() -> Arc<ChatService<InMemorySessionStore>> {
    Arc::new(ChatService::new(
        BotanicalResponder::default(),
        InMemorySessionStore::default(),
    ))
}

// ============================================================================
// Responder
// ============================================================================

#[test]
fn test_domain_gate() {
    let responder = BotanicalResponder::default();
    assert!(responder.is_in_domain("where do pothos grow?"));
    assert!(!responder.is_in_domain("what is the capital of France"));
}

#[test]
fn test_history_keeps_twenty_newest() {
    let store = InMemorySessionStore::default();
    for i in 0..25 {
        store.append("s", Turn::user(format!("turn {i}")));
    }

    let session = store.get("s").unwrap();
    assert_eq!(session.len(), 20);
    let texts: Vec<String> = session.history().iter().map(|t| t.text.clone()).collect();
    let expected: Vec<String> = (5..25).map(|i| format!("turn {i}")).collect();
    assert_eq!(texts, expected);
}

#[test]
fn test_append_then_read_last() {
    let store = InMemorySessionStore::default();
    let turn = Turn::bot("Ferns love humidity.");
    store.append("s", turn.clone());
    assert_eq!(store.get("s").unwrap().last_turn(), Some(&turn));
}

#[test]
fn test_conversation_carries_plant_context() {
    let service = service();
    service.chat("s", "my tomato plant looks sad").unwrap();
    let reply = service.chat("s", "how often should I water?").unwrap();
    assert_eq!(reply.text, "For tomatoes, check soil moisture first. Water when the top inch is dry.");

    let reply = service.chat("s", "tell me more").unwrap();
    assert!(reply.text.starts_with("More on watering for tomatoes: "), "{}", reply.text);
}

#[test]
fn test_greeting_after_long_conversation() {
    let service = service();
    for _ in 0..12 {
        service.chat("s", "what soil do succulents like?").unwrap();
    }
    assert_eq!(service.chat("s", "hi").unwrap().text, replies::GREETING);
}

// ============================================================================
// Concurrency
// ============================================================================

#[test]
fn test_distinct_sessions_never_mix() {
    let service = service();
    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                let id = format!("session-{worker}");
                for i in 0..5 {
                    service.chat(&id, &format!("water plant {worker} {i}")).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    for worker in 0..8 {
        let session = service.history(&format!("session-{worker}")).unwrap();
        assert_eq!(session.len(), 10);
        for turn in session.history().iter().filter(|t| t.role == Role::User) {
            assert!(turn.text.starts_with(&format!("water plant {worker} ")), "{}", turn.text);
        }
    }
}

#[test]
fn test_same_session_pairs_stay_together() {
    let service = service();
    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                for i in 0..2 {
                    service.chat("shared", &format!("light for fern {worker}-{i}")).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let session: ConversationSession = service.history("shared").unwrap();
    assert_eq!(session.len(), 16);
    let turns: Vec<&Turn> = session.history().iter().collect();
    for pair in turns.chunks(2) {
        assert_eq!(pair[0].role, Role::User);
        assert_eq!(pair[1].role, Role::Bot);
    }
}

#[test]
fn test_expired_sessions_are_recreated_empty() {
    let config = SessionConfig {
        ttl: std::time::Duration::from_millis(100),
        ..SessionConfig::default()
    };
    let service = ChatService::new(
        BotanicalResponder::default(),
        InMemorySessionStore::new(&config, 20),
    );

    service.chat("s", "hello").unwrap();
    thread::sleep(std::time::Duration::from_millis(300));
    assert!(service.history("s").is_none());

    service.chat("s", "hello").unwrap();
    assert_eq!(service.history("s").unwrap().len(), 2);
}
