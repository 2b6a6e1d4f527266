//! Tunable constants and runtime configuration.
//!
//! Compile-time defaults are plain constants. `ServerConfig::from_env` reads
//! overrides from environment variables; unparsable values keep the default.

use std::time::Duration;

// ============================================================================
// Defaults
// ============================================================================

/// Images are downsampled to a square of this side before pixel analysis.
pub const DOWNSAMPLE_SIZE: u32 = 224;

/// Turns kept per conversation (user and bot turns both count).
pub const HISTORY_CAP: usize = 20;

/// History turns scanned for a previously mentioned plant.
pub const CONTEXT_LOOKBACK: usize = 6;

/// Greeting/thanks/farewell shortcuts only fire for messages this short.
pub const SHORTCUT_MAX_WORDS: usize = 4;

/// Messages this short are always treated as botanical.
pub const SHORT_MESSAGE_MAX_WORDS: usize = 5;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(30 * 60);
pub const DEFAULT_MAX_SESSIONS: u64 = 10_000;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

// ============================================================================
// Component configuration
// ============================================================================

/// How one label is picked from a candidate set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    /// Always the first candidate.
    First,
    /// Uniform choice from a generator seeded fresh for every call.
    Seeded(u64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierConfig {
    pub downsample_size: u32,
    pub tie_break: TieBreak,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            downsample_size: DOWNSAMPLE_SIZE,
            tie_break: TieBreak::First,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResponderConfig {
    pub history_cap: usize,
    pub context_lookback: usize,
    pub shortcut_max_words: usize,
    pub short_message_max_words: usize,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            history_cap: HISTORY_CAP,
            context_lookback: CONTEXT_LOOKBACK,
            shortcut_max_words: SHORTCUT_MAX_WORDS,
            short_message_max_words: SHORT_MESSAGE_MAX_WORDS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Idle time after which a session is dropped.
    pub ttl: Duration,
    pub max_sessions: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_SESSION_TTL,
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }
}

// ============================================================================
// Server configuration
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub max_upload_bytes: usize,
    pub classifier: ClassifierConfig,
    pub responder: ResponderConfig,
    pub sessions: SessionConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            classifier: ClassifierConfig::default(),
            responder: ResponderConfig::default(),
            sessions: SessionConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Configuration from environment variables
    ///
    /// PORT, MAX_UPLOAD_BYTES, DOWNSAMPLE_SIZE, CLASSIFIER_SEED, HISTORY_CAP,
    /// SESSION_TTL_SECS, MAX_SESSIONS
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        fn parsed<T: std::str::FromStr>(
            lookup: &impl Fn(&str) -> Option<String>,
            key: &str,
        ) -> Option<T> {
            lookup(key).and_then(|v| v.trim().parse().ok())
        }

        let defaults = Self::default();

        let tie_break = parsed::<u64>(&lookup, "CLASSIFIER_SEED")
            .map(TieBreak::Seeded)
            .unwrap_or(TieBreak::First);

        Self {
            port: parsed(&lookup, "PORT").unwrap_or(defaults.port),
            max_upload_bytes: parsed(&lookup, "MAX_UPLOAD_BYTES").unwrap_or(defaults.max_upload_bytes),
            classifier: ClassifierConfig {
                downsample_size: parsed::<u32>(&lookup, "DOWNSAMPLE_SIZE")
                    .filter(|&s| s > 0)
                    .unwrap_or(DOWNSAMPLE_SIZE),
                tie_break,
            },
            responder: ResponderConfig {
                history_cap: parsed::<usize>(&lookup, "HISTORY_CAP")
                    .filter(|&c| c > 0)
                    .unwrap_or(HISTORY_CAP),
                ..defaults.responder
            },
            sessions: SessionConfig {
                ttl: parsed::<u64>(&lookup, "SESSION_TTL_SECS")
                    .map(Duration::from_secs)
                    .unwrap_or(DEFAULT_SESSION_TTL),
                max_sessions: parsed(&lookup, "MAX_SESSIONS").unwrap_or(DEFAULT_MAX_SESSIONS),
            },
        }
    }
}
