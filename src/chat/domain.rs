//! Botanical relevance gate for chat messages.

use super::text::Message;

/// Case-insensitive substring vocabulary
pub static BOTANICAL_VOCABULARY: &[&str] = &[
    "plant", "flower", "tree", "leaf", "leaves", "garden", "botany", "botanical",
    "grow", "care", "water", "soil", "fertiliz", "fertilis", "prun", "propagat",
    "succulent", "cactus", "cacti", "herb", "vegetable", "fruit", "seed", "bloom",
    "houseplant", "indoor", "outdoor", "photosynthesis", "chlorophyll", "root", "stem",
    "petal", "pollen", "pollinat", "species", "variety", "cultivar", "hybrid",
    "perennial", "annual", "biennial", "evergreen", "deciduous", "tropical", "temperate",
    "light", "sunlight", "shade", "humidity", "temperature", "climate", "season",
    "repot", "transplant", "mulch", "compost", "organic", "disease", "pest",
    "fungus", "bacteria", "virus", "nutrient", "nitrogen", "phosphorus", "potassium",
    "respiration", "transpiration", "germinat", "phototropism",
    "found", "native", "habitat", "region", "location",
    "orchid", "rose", "fern", "bamboo", "palm", "moss", "algae", "fungi", "mushroom",
    "pothos", "monstera", "aloe", "basil", "mint", "tomato", "apple", "lily", "ficus",
];

pub static INTERROGATIVES: &[&str] = &["where", "what", "how", "why", "when", "which"];

pub static CONTEXT_REFERENCES: &[&str] =
    &["these", "those", "they", "them", "it", "its", "this", "that", "there"];

/// Permissive gate: short messages, context follow-up questions and any
/// vocabulary hit all pass.
pub fn is_in_domain(message: &Message, short_message_max_words: usize) -> bool {
    if message.word_count() <= short_message_max_words {
        return true;
    }
    if message.has_any_word(INTERROGATIVES) && message.has_any_word(CONTEXT_REFERENCES) {
        return true;
    }
    BOTANICAL_VOCABULARY.iter().any(|term| message.contains(term))
}
