//! Canned reply text per intent, with light plant interpolation.

use super::context::PlantContext;
use super::intents::Intent;
use crate::profiles::PlantCategory;

pub const GREETING: &str = "Hello! I'm Lumon, your botanical expert. I can help identify plants, \
    provide care advice, troubleshoot problems, and answer gardening questions. What can I help you with?";

pub const FAREWELL: &str = "Goodbye and happy growing! Come back any time your plants need a hand.";

pub const THANKS: &str = "You're welcome! Let me know if your plants need anything else.";

pub const IDENTITY: &str = "I'm Lumon, a botanical assistant. Upload a plant photo and I'll suggest what it is, \
    or ask me about care, watering, light, pests and more.";

pub const OFF_DOMAIN: &str = "I'm Lumon, your botanical expert! I can only help with plant and gardening questions. \
    Please ask me about plant care, identification, botanical facts, or gardening advice.";

pub const CATCH_ALL: &str = "I can help with plant care, identification, problems, and botanical questions. \
    Try asking about watering, light, toxicity, pests, or upload a photo for plant identification. \
    What plant topic interests you?";

pub const NO_PREVIOUS_TOPIC: &str = "Happy to go deeper! What would you like more detail on? \
    Ask about watering, light, soil, pests or any plant you're growing.";

pub const NO_MORE_DETAIL: &str = "That's about all I have on that one. \
    Could you ask a narrower question, for example about watering, light or soil?";

const HABITAT: &str = "Most houseplants originate from tropical rainforests (pothos, monstera), arid regions \
    (succulents, cacti), or temperate forests (ferns). For specific habitat information, upload a photo of your \
    plant and I'll tell you where it's native to!";

const IDENTIFICATION: &str = "I can identify plants from photos! Upload a clear image showing leaves, stems, and \
    any flowers. I'll analyze the colors and suggest the plant name with care information.";

const CARE: &str = "Plant care basics: bright indirect light, water when top soil feels dry, ensure drainage, \
    feed monthly in growing season. What specific plant needs care advice?";

const CARE_SUCCULENT: &str = "Succulents need bright light, well-draining soil, and infrequent watering. \
    Water only when soil is completely dry (every 1-2 weeks). Overwatering kills them!";

const CARE_ORCHID: &str = "Orchids need bright indirect light, orchid bark (not soil), weekly soaking, and good \
    drainage. They're air plants in nature!";

const CARE_FERN: &str = "Ferns love humidity (50-80%), consistent moisture, and indirect light. \
    Mist regularly and avoid direct sun.";

const WATERING: &str = "Water most houseplants when top 1-2 inches of soil feel dry. Water thoroughly until it \
    drains, then empty the saucer. Frequency: every 1-2 weeks for most plants, less for succulents, more for ferns.";

const LIGHT: &str = "Most houseplants prefer bright, indirect light near windows. Too little light: leggy growth, \
    pale leaves. Too much: scorched or bleached leaves. Adjust placement accordingly.";

const TOXICITY: &str = "Many common houseplants can be toxic to humans and pets if ingested. Plants like pothos, \
    philodendron, and peace lilies contain calcium oxalate crystals that cause irritation. Keep plants away from \
    children and pets, and upload a photo for specific toxicity information about your plant.";

const SYMPTOMS: &str = "Yellow leaves usually mean overwatering. Brown tips suggest low humidity. Wilting \
    indicates watering issues or root problems. Check soil moisture and examine roots. What specific symptoms do you see?";

const FERTILIZER: &str = "Feed houseplants monthly in spring/summer with diluted liquid fertilizer (half strength). \
    Reduce in fall/winter. Yellow leaves may indicate nitrogen deficiency.";

const PROPAGATION: &str = "Most houseplants propagate via stem cuttings: cut below a node, remove lower leaves, \
    place in water or rooting medium. Succulents use leaf cuttings. What plant are you propagating?";

const PRUNING: &str = "Prune in early spring before new growth. Remove dead, diseased, or crossing branches first.";

const PRUNING_APPLE: &str = "Apple trees should be pruned in late winter (February-March) when dormant. \
    Remove dead, diseased, and crossing branches.";

const PESTS: &str = "Common pests include aphids, spider mites, and scale insects. Look for sticky honeydew, \
    webbing, or small moving dots. Treat with insecticidal soap or neem oil. Fungal issues need better air \
    circulation and less moisture.";

const SOIL: &str = "Good potting soil drains well but retains some moisture. Most houseplants need a mix of peat, \
    perlite, and bark. Repot when roots circle the pot or soil stays soggy. What soil question can I help with?";

const TEMPERATURE: &str = "Most houseplants prefer 65-75°F and 40-60% humidity. Cold drafts and heat vents can \
    stress plants. Increase humidity with pebble trays or humidifiers. What environmental concern do you have?";

const SIZE: &str = "Plant size depends on species, growing conditions, and care. Light, water, nutrients, and pot \
    size all affect growth. Some plants can be kept smaller through pruning or root restriction. What size question \
    do you have?";

const COLOR: &str = "Plant colors come from pigments like chlorophyll (green), anthocyanins (red/purple), and \
    carotenoids (yellow/orange). Color changes can indicate health, light conditions, or natural variation. \
    What color aspect interests you?";

const SEASON: &str = "Plant care varies by season: Spring - active growth, increase watering/feeding. Summer - \
    monitor for heat stress and pests. Fall - reduce feeding, prepare for dormancy. Winter - minimal water, no \
    fertilizer. What seasonal question do you have?";

const GENERAL: &str = "I can help with any plant topic! Ask about care, identification, problems, propagation, or \
    general botanical questions. What specific plant information do you need?";

/// Reply for a matched intent. `MoreDetail` is resolved by the responder and
/// renders as the catch-all here.
pub fn render(intent: Intent, plant: Option<&PlantContext>) -> String {
    match intent {
        Intent::Greeting => GREETING.to_string(),
        Intent::Farewell => FAREWELL.to_string(),
        Intent::Thanks => THANKS.to_string(),
        Intent::Identity => IDENTITY.to_string(),
        Intent::Habitat => habitat(plant),
        Intent::Identification => IDENTIFICATION.to_string(),
        Intent::Care => care(plant),
        Intent::Watering => watering(plant),
        Intent::Light => match plant {
            Some(p) => format!(
                "For {}, give appropriate light. Most plants prefer bright, indirect light.",
                p.name
            ),
            None => LIGHT.to_string(),
        },
        Intent::Toxicity => toxicity(plant),
        Intent::Symptoms => SYMPTOMS.to_string(),
        Intent::Fertilizer => FERTILIZER.to_string(),
        Intent::Propagation => PROPAGATION.to_string(),
        Intent::Pruning => match plant {
            Some(p) if p.is_apple() => PRUNING_APPLE.to_string(),
            Some(p) => format!(
                "For {}, prune in early spring before new growth. Remove dead and diseased parts first.",
                p.name
            ),
            None => PRUNING.to_string(),
        },
        Intent::Pests => PESTS.to_string(),
        Intent::Soil => SOIL.to_string(),
        Intent::Temperature => TEMPERATURE.to_string(),
        Intent::Size => SIZE.to_string(),
        Intent::Color => COLOR.to_string(),
        Intent::Season => SEASON.to_string(),
        Intent::GeneralPlant => GENERAL.to_string(),
        Intent::MoreDetail | Intent::CatchAll => CATCH_ALL.to_string(),
    }
}

fn habitat(plant: Option<&PlantContext>) -> String {
    let Some(plant) = plant else {
        return HABITAT.to_string();
    };
    if let Some(profile) = plant.profile {
        return format!(
            "{} ({}) is native to {}. {}",
            profile.common_name, profile.scientific_name, profile.region, profile.description
        );
    }
    match plant.category {
        PlantCategory::Succulent => "Succulents and cacti come mostly from arid and semi-arid regions such as \
            Mexico, the American Southwest and southern Africa, where they store water in thick leaves and stems."
            .to_string(),
        PlantCategory::Fern => "Ferns grow wild on shaded, humid forest floors, from tropical rainforests to \
            temperate woodland, often beside streams or on tree trunks."
            .to_string(),
        _ => HABITAT.to_string(),
    }
}

fn care(plant: Option<&PlantContext>) -> String {
    match plant {
        Some(p) if p.category == PlantCategory::Succulent => CARE_SUCCULENT.to_string(),
        Some(p) if p.is_orchid() => CARE_ORCHID.to_string(),
        Some(p) if p.category == PlantCategory::Fern => CARE_FERN.to_string(),
        Some(PlantContext { name, profile: Some(profile), .. }) => {
            format!("For {name}: {}.", profile.care_tip)
        }
        _ => CARE.to_string(),
    }
}

fn watering(plant: Option<&PlantContext>) -> String {
    match plant {
        Some(p) if p.category == PlantCategory::Succulent => format!(
            "Water {} only when the soil is completely dry, roughly every 1-2 weeks in summer and less in winter.",
            p.name
        ),
        Some(p) => format!(
            "For {}, check soil moisture first. Water when the top inch is dry.",
            p.name
        ),
        None => WATERING.to_string(),
    }
}

fn toxicity(plant: Option<&PlantContext>) -> String {
    let Some(profile) = plant.and_then(|p| p.profile) else {
        return TOXICITY.to_string();
    };
    let edible = if profile.edible { "is edible" } else { "is not considered edible" };
    format!(
        "{} has a toxicity score of {}/100 and {}. Watch for: {}.",
        profile.common_name,
        profile.toxicity,
        edible,
        profile.hazards.join("; ")
    )
}

/// Extended text for a topic, used by "tell me more" follow-ups.
pub fn detail(intent: Intent) -> Option<&'static str> {
    let text = match intent {
        Intent::Habitat => "Native habitat explains most care needs. Rainforest plants want warmth and humidity, \
            desert plants want sharp drainage and strong light, and woodland plants want shade with steady moisture. \
            Matching those conditions indoors is the biggest single step toward a healthy plant.",
        Intent::Identification => "For the best result, photograph the plant in even daylight without harsh \
            shadows, fill the frame with leaves, and include flowers or fruit if there are any.",
        Intent::Care => "Beyond the basics, rotate pots a quarter turn each week for even growth, wipe dust off \
            leaves so they can photosynthesize, and check the roots every spring to see if it's time to repot.",
        Intent::Watering => "Water deeply rather than little and often, so roots grow down. Use room-temperature \
            water, always empty the saucer after 15 minutes, and water less in winter when growth slows. Terracotta \
            pots dry out faster than plastic.",
        Intent::Light => "South-facing windows give the strongest light, east-facing gentle morning sun, north-facing \
            the least. A sheer curtain turns harsh direct sun into bright indirect light. Plants leaning toward the \
            window are asking for more light.",
        Intent::Toxicity => "If a pet or child chews a plant, rinse their mouth, note the plant name, and call a \
            poison control line or vet. Calcium oxalate plants cause burning and swelling; lilies are especially \
            dangerous to cats.",
        Intent::Symptoms => "Check in this order: soil moisture (soggy or bone dry), roots (white and firm is \
            healthy, brown and mushy is rot), the undersides of leaves for pests, then recent changes in light or \
            temperature.",
        Intent::Fertilizer => "Look at the N-P-K numbers: nitrogen for leaves, phosphorus for roots and flowers, \
            potassium for overall health. Never feed a dry or freshly repotted plant, and flush the soil with plain \
            water every few months to clear salt build-up.",
        Intent::Propagation => "Take cuttings in spring or early summer, 10-15 cm long with at least two nodes. \
            Change the water weekly, and pot up once roots are 2-3 cm long. Succulent leaves should callus for a few \
            days before they touch soil.",
        Intent::Pruning => "Use clean, sharp shears and cut just above a leaf node or outward-facing bud. Never \
            remove more than a third of the plant at once, and sterilise blades between plants to avoid spreading \
            disease.",
        Intent::Pests => "Isolate the affected plant first. Wipe leaves with a damp cloth, then spray neem oil or \
            insecticidal soap every 5-7 days for three weeks to break the breeding cycle. Yellow sticky traps catch \
            fungus gnats.",
        Intent::Soil => "Succulents want a gritty mix with extra perlite or sand, aroids like chunky bark, and ferns \
            a moisture-holding peat or coir mix. Go up only one pot size when repotting.",
        Intent::Temperature => "Keep plants away from radiators, air conditioning and single-glazed windows in \
            winter. Grouping plants together raises local humidity, and a hygrometer tells you where you stand.",
        Intent::Season => "In spring, repot and resume feeding. In summer, water more and watch for pests. In \
            autumn, bring tender plants indoors before the first frost. In winter, hold off on fertilizer and let the \
            soil dry further between waterings.",
        _ => return None,
    };
    Some(text)
}
