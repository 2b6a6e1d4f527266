//! Ordered intent table.
//!
//! Rules are tried top to bottom and the first match wins. Shortcut rules only
//! apply to short messages and match exact words or phrases, so `hi` never
//! fires inside `hibiscus`. Keyword rules match by token prefix.

use serde::Serialize;

use super::domain::INTERROGATIVES;
use super::text::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    Farewell,
    Thanks,
    Identity,
    MoreDetail,
    Habitat,
    Identification,
    Care,
    Watering,
    Light,
    Toxicity,
    Symptoms,
    Fertilizer,
    Propagation,
    Pruning,
    Pests,
    Soil,
    Temperature,
    Size,
    Color,
    Season,
    GeneralPlant,
    CatchAll,
}

impl Intent {
    /// Short name used when a reply refers back to a topic.
    pub fn topic(self) -> &'static str {
        match self {
            Intent::Greeting => "greetings",
            Intent::Farewell => "goodbyes",
            Intent::Thanks => "thanks",
            Intent::Identity => "me",
            Intent::MoreDetail => "that",
            Intent::Habitat => "native habitats",
            Intent::Identification => "identification",
            Intent::Care => "plant care",
            Intent::Watering => "watering",
            Intent::Light => "light",
            Intent::Toxicity => "toxicity",
            Intent::Symptoms => "plant problems",
            Intent::Fertilizer => "feeding",
            Intent::Propagation => "propagation",
            Intent::Pruning => "pruning",
            Intent::Pests => "pests",
            Intent::Soil => "soil and potting",
            Intent::Temperature => "temperature and humidity",
            Intent::Size => "plant size",
            Intent::Color => "plant color",
            Intent::Season => "seasonal care",
            Intent::GeneralPlant => "plants",
            Intent::CatchAll => "that",
        }
    }

    pub fn is_shortcut(self) -> bool {
        matches!(
            self,
            Intent::Greeting | Intent::Farewell | Intent::Thanks | Intent::Identity
        )
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Trigger {
    /// Exact words or phrases, only in messages at most the shortcut length
    Shortcut(&'static [&'static str]),
    /// Any keyword by token prefix
    Keywords(&'static [&'static str]),
    /// Exact words anywhere in the message
    Words(&'static [&'static str]),
    /// A keyword together with an interrogative word
    Question(&'static [&'static str]),
}

impl Trigger {
    fn fires(&self, message: &Message, shortcut_max_words: usize) -> bool {
        match *self {
            Trigger::Shortcut(words) => {
                message.word_count() <= shortcut_max_words && message.has_any_word(words)
            }
            Trigger::Keywords(keywords) => message.has_any_keyword(keywords),
            Trigger::Words(words) => message.has_any_word(words),
            Trigger::Question(keywords) => {
                message.has_any_word(INTERROGATIVES) && message.has_any_keyword(keywords)
            }
        }
    }
}

#[derive(Debug)]
pub struct IntentRule {
    pub intent: Intent,
    pub trigger: Trigger,
}

const fn rule(intent: Intent, trigger: Trigger) -> IntentRule {
    IntentRule { intent, trigger }
}

use Trigger::{Keywords, Question, Shortcut, Words};

pub static INTENT_RULES: &[IntentRule] = &[
    // --- shortcuts ---
    rule(Intent::Greeting, Shortcut(&[
        "hi", "hello", "hey", "hiya", "howdy", "greetings",
        "good morning", "good afternoon", "good evening",
    ])),
    rule(Intent::Farewell, Shortcut(&["bye", "goodbye", "farewell", "cya", "see you", "good night"])),
    rule(Intent::Thanks, Shortcut(&["thanks", "thank you", "thx", "ty", "cheers", "appreciate it"])),
    rule(Intent::Identity, Shortcut(&[
        "who are you", "what are you", "your name", "are you a bot", "are you human",
        "what can you do",
    ])),
    // --- follow-up ---
    rule(Intent::MoreDetail, Words(&[
        "tell me more", "more detail", "more details", "more info", "more information",
        "elaborate", "explain more", "go on", "go deeper", "in depth",
    ])),
    // --- domain buckets ---
    rule(Intent::Habitat, Keywords(&["where", "native", "habitat", "originat", "come from"])),
    rule(Intent::Habitat, Question(&["found"])),
    rule(Intent::Identification, Keywords(&[
        "what plant", "identif", "what type of plant", "what kind of plant", "name of",
        "which plant", "species",
    ])),
    rule(Intent::Care, Keywords(&["care", "grow", "raise", "maintain", "look after"])),
    rule(Intent::Watering, Keywords(&["water", "overwater", "drink", "thirsty", "dry", "moist"])),
    rule(Intent::Light, Keywords(&["light", "sun", "bright", "dark", "shade", "window"])),
    rule(Intent::Toxicity, Keywords(&[
        "harmful", "toxic", "poison", "dangerous", "safe", "eat", "edible",
    ])),
    rule(Intent::Symptoms, Keywords(&[
        "dying", "dead", "yellow", "brown", "sick", "problem", "wrong", "droop", "wilt",
        "spot", "curl",
    ])),
    rule(Intent::Fertilizer, Keywords(&["fertili", "feed", "food", "nutrient", "hungry"])),
    rule(Intent::Propagation, Keywords(&[
        "propagat", "cutting", "clone", "multiply", "babies", "offspring", "offshoot", "plantlet",
    ])),
    rule(Intent::Pruning, Keywords(&["prun", "trim", "cut back", "deadhead"])),
    rule(Intent::Pests, Keywords(&[
        "pest", "bug", "insect", "aphid", "mite", "mealybug", "scale", "gnat", "fungus",
        "fungal", "mold", "mould",
    ])),
    rule(Intent::Soil, Keywords(&[
        "soil", "dirt", "potting", "repot", "transplant", "pot", "compost", "mulch", "drainage",
    ])),
    rule(Intent::Temperature, Keywords(&[
        "temperature", "hot", "cold", "humid", "frost", "heat", "draft", "draught", "environment",
    ])),
    rule(Intent::Size, Keywords(&["big", "small", "large", "size", "tall", "short", "height", "wide", "huge"])),
    rule(Intent::Color, Words(&[
        "color", "colors", "colour", "colours", "green", "red", "purple", "white", "pink",
        "variegated", "pretty", "beautiful",
    ])),
    rule(Intent::Season, Keywords(&[
        "when", "season", "spring", "summer", "autumn", "fall", "winter", "month", "dorman",
    ])),
    rule(Intent::GeneralPlant, Keywords(&[
        "plant", "flower", "leaf", "leaves", "root", "garden", "botan", "bloom", "seed",
    ])),
];

/// First rule that fires, or `CatchAll`.
pub fn match_intent(message: &Message, shortcut_max_words: usize) -> Intent {
    INTENT_RULES
        .iter()
        .find(|rule| rule.trigger.fires(message, shortcut_max_words))
        .map(|rule| rule.intent)
        .unwrap_or(Intent::CatchAll)
}

/// Domain topic of a message, ignoring shortcuts and follow-ups.
pub fn topic_of(message: &Message) -> Intent {
    INTENT_RULES
        .iter()
        .filter(|rule| !rule.intent.is_shortcut() && rule.intent != Intent::MoreDetail)
        .find(|rule| rule.trigger.fires(message, 0))
        .map(|rule| rule.intent)
        .unwrap_or(Intent::CatchAll)
}
