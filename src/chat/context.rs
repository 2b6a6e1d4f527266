//! Which plant a message is talking about.
//!
//! Resolution order: the current message, then user turns among the most
//! recent history entries (newest first), then the session's last
//! identified plant.

use super::session::{ConversationSession, Role};
use super::text::Message;
use crate::profiles::{self, PlantCategory, PlantProfile};

pub struct PlantMention {
    /// Token prefix searched for in messages
    pub keyword: &'static str,
    /// How replies refer to the plant
    pub display: &'static str,
    pub scientific_name: Option<&'static str>,
    pub category: PlantCategory,
}

const fn mention(
    keyword: &'static str,
    display: &'static str,
    scientific_name: Option<&'static str>,
    category: PlantCategory,
) -> PlantMention {
    PlantMention { keyword, display, scientific_name, category }
}

/// Order matters: `rosemary` precedes `rose`, phrases precede single words.
pub static PLANT_MENTIONS: &[PlantMention] = &[
    mention("snake plant", "snake plants", Some("Dracaena trifasciata"), PlantCategory::Houseplant),
    mention("peace lil", "peace lilies", Some("Spathiphyllum wallisii"), PlantCategory::Flowering),
    mention("spider plant", "spider plants", Some("Chlorophytum comosum"), PlantCategory::Houseplant),
    mention("rosemary", "rosemary", Some("Rosmarinus officinalis"), PlantCategory::Herb),
    mention("rose", "roses", Some("Rosa hybrida"), PlantCategory::Flowering),
    mention("apple", "apple trees", Some("Malus domestica"), PlantCategory::Crop),
    mention("tomato", "tomatoes", Some("Solanum lycopersicum"), PlantCategory::Crop),
    mention("mint", "mint", Some("Mentha x piperita"), PlantCategory::Herb),
    mention("basil", "basil", Some("Ocimum basilicum"), PlantCategory::Herb),
    mention("lavender", "lavender", Some("Lavandula angustifolia"), PlantCategory::Herb),
    mention("orchid", "orchids", Some("Phalaenopsis amabilis"), PlantCategory::Flowering),
    mention("cactus", "cacti", None, PlantCategory::Succulent),
    mention("cacti", "cacti", None, PlantCategory::Succulent),
    mention("succulent", "succulents", None, PlantCategory::Succulent),
    mention("fern", "ferns", None, PlantCategory::Fern),
    mention("pothos", "pothos", Some("Epipremnum aureum"), PlantCategory::TropicalFoliage),
    mention("monstera", "monstera", Some("Monstera deliciosa"), PlantCategory::TropicalFoliage),
    mention("aloe", "aloe", Some("Aloe barbadensis"), PlantCategory::Succulent),
    mention("jade", "jade plants", Some("Crassula ovata"), PlantCategory::Succulent),
];

/// Plant used to personalise a reply.
#[derive(Debug, Clone, PartialEq)]
pub struct PlantContext {
    pub name: String,
    pub category: PlantCategory,
    pub profile: Option<&'static PlantProfile>,
}

impl PlantContext {
    fn from_mention(mention: &PlantMention) -> Self {
        Self {
            name: mention.display.to_string(),
            category: mention.category,
            profile: mention.scientific_name.and_then(profiles::find_exact),
        }
    }

    /// Context from a classifier label; `None` when the label has no profile.
    pub fn from_label(label: &str) -> Option<Self> {
        let profile = profiles::lookup(label);
        if profile.is_unknown() {
            return None;
        }
        Some(Self {
            name: profile.common_name.to_string(),
            category: profile.category,
            profile: Some(profile),
        })
    }

    pub fn is_orchid(&self) -> bool {
        self.profile.is_some_and(|p| p.family == "Orchidaceae")
    }

    pub fn is_apple(&self) -> bool {
        self.profile.is_some_and(|p| p.scientific_name == "Malus domestica")
    }
}

pub fn find_mention(message: &Message) -> Option<&'static PlantMention> {
    PLANT_MENTIONS.iter().find(|m| message.has_keyword(m.keyword))
}

pub fn resolve(
    message: &Message,
    session: &ConversationSession,
    lookback: usize,
) -> Option<PlantContext> {
    if let Some(found) = find_mention(message) {
        return Some(PlantContext::from_mention(found));
    }

    let from_history = session
        .recent(lookback)
        .filter(|turn| turn.role == Role::User)
        .find_map(|turn| find_mention(&Message::new(&turn.text)));
    if let Some(found) = from_history {
        return Some(PlantContext::from_mention(found));
    }

    session.last_plant().and_then(PlantContext::from_label)
}
