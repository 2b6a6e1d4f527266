//! Plant Reference Lookup Tables
//!
//! Static botanical facts for every plant the classifier can name, plus a few
//! crops the chat responder talks about. Keyed by scientific name.
//!
//! Toxicity is a 0-100 score (0 = harmless, 100 = severely toxic) for humans
//! and pets combined.

use super::{PlantCategory, PlantProfile};

// ============================================================================
// UNKNOWN PROFILE
// ============================================================================

/// Returned by `lookup` when nothing in the table matches.
pub static UNKNOWN_PROFILE: PlantProfile = PlantProfile {
    scientific_name: "Unknown",
    common_name: "Unknown",
    family: "Unknown",
    region: "Various",
    toxicity: 50,
    edible: false,
    hazards: &["Unknown toxicity — avoid ingestion"],
    care_tip: "Provide appropriate light and water based on plant type",
    description: "No reference data is available for this plant.",
    category: PlantCategory::Unclassified,
};

// ============================================================================
// EMBEDDED PROFILE DATA
// ============================================================================

pub static PLANT_PROFILES: &[PlantProfile] = &[
    // --- Tropical foliage ---
    PlantProfile {
        scientific_name: "Monstera deliciosa",
        common_name: "Swiss Cheese Plant",
        family: "Araceae",
        region: "Central America",
        toxicity: 85,
        edible: false,
        hazards: &["Skin irritation", "Mouth swelling if ingested", "Kidney stones from oxalates"],
        care_tip: "Bright indirect light, water when top soil is dry, high humidity preferred",
        description: "Split-leaf philodendron native to Central American rainforests, known for its fenestrated leaves.",
        category: PlantCategory::TropicalFoliage,
    },
    PlantProfile {
        scientific_name: "Epipremnum aureum",
        common_name: "Pothos",
        family: "Araceae",
        region: "Southeast Asia",
        toxicity: 75,
        edible: false,
        hazards: &["Oral irritation", "Difficulty swallowing", "Vomiting if consumed"],
        care_tip: "Low to bright indirect light, water when soil is dry, very adaptable",
        description: "Golden pothos from Southeast Asia, a hardy trailing vine with heart-shaped variegated leaves.",
        category: PlantCategory::TropicalFoliage,
    },
    PlantProfile {
        scientific_name: "Philodendron hederaceum",
        common_name: "Heartleaf Philodendron",
        family: "Araceae",
        region: "Central America and the Caribbean",
        toxicity: 75,
        edible: false,
        hazards: &["Calcium oxalate crystals irritate mouth and throat", "Toxic to cats and dogs"],
        care_tip: "Medium to bright indirect light, let the top inch of soil dry between waterings",
        description: "Heartleaf philodendron, fast-growing vine with glossy green heart-shaped foliage.",
        category: PlantCategory::TropicalFoliage,
    },
    PlantProfile {
        scientific_name: "Ficus lyrata",
        common_name: "Fiddle-leaf Fig",
        family: "Moraceae",
        region: "West Africa",
        toxicity: 60,
        edible: false,
        hazards: &["Latex allergies", "Skin rashes", "Respiratory irritation"],
        care_tip: "Bright indirect light, consistent watering, avoid moving frequently",
        description: "Fiddle-leaf fig from western Africa, featuring large violin-shaped leaves and upright growth.",
        category: PlantCategory::TropicalFoliage,
    },
    PlantProfile {
        scientific_name: "Ficus elastica",
        common_name: "Rubber Plant",
        family: "Moraceae",
        region: "South and Southeast Asia",
        toxicity: 55,
        edible: false,
        hazards: &["Milky latex irritates skin and eyes", "Mild stomach upset if chewed"],
        care_tip: "Bright indirect light, water when the top two inches are dry, wipe leaves to keep them glossy",
        description: "Indian rubber tree with thick, glossy leaves and natural latex production.",
        category: PlantCategory::TropicalFoliage,
    },
    PlantProfile {
        scientific_name: "Dracaena trifasciata",
        common_name: "Snake Plant",
        family: "Asparagaceae",
        region: "West Africa",
        toxicity: 40,
        edible: false,
        hazards: &["Saponins cause nausea and vomiting in pets"],
        care_tip: "Tolerates low light, water sparingly and let soil dry completely",
        description: "Snake plant (Sansevieria) from West Africa, extremely drought-tolerant with sword-like leaves.",
        category: PlantCategory::TropicalFoliage,
    },
    PlantProfile {
        scientific_name: "Zamioculcas zamiifolia",
        common_name: "ZZ Plant",
        family: "Araceae",
        region: "Eastern Africa",
        toxicity: 65,
        edible: false,
        hazards: &["Sap irritates skin", "Oral swelling if ingested"],
        care_tip: "Low to bright indirect light, water only when the soil is fully dry",
        description: "ZZ plant from eastern Africa, waxy dark green leaves, extremely low maintenance.",
        category: PlantCategory::TropicalFoliage,
    },
    // --- Flowering ---
    PlantProfile {
        scientific_name: "Saintpaulia ionantha",
        common_name: "African Violet",
        family: "Gesneriaceae",
        region: "Tanzania",
        toxicity: 5,
        edible: false,
        hazards: &["Generally non-toxic"],
        care_tip: "Bright indirect light, water from below with room-temperature water, keep leaves dry",
        description: "African violet from Tanzania, compact rosette with velvety leaves and colorful flowers.",
        category: PlantCategory::Flowering,
    },
    PlantProfile {
        scientific_name: "Spathiphyllum wallisii",
        common_name: "Peace Lily",
        family: "Araceae",
        region: "Tropical Americas",
        toxicity: 70,
        edible: false,
        hazards: &["Oral burning and swelling", "Drooling and vomiting in pets"],
        care_tip: "Low to medium indirect light, water when leaves begin to droop slightly",
        description: "Peace lily from tropical Americas, white spathes and excellent air purification.",
        category: PlantCategory::Flowering,
    },
    PlantProfile {
        scientific_name: "Anthurium andraeanum",
        common_name: "Flamingo Flower",
        family: "Araceae",
        region: "Colombia and Ecuador",
        toxicity: 70,
        edible: false,
        hazards: &["Calcium oxalate crystals irritate mouth", "Skin irritation from sap"],
        care_tip: "Bright indirect light, high humidity, water when the top of the soil is dry",
        description: "Flamingo flower from Colombia, heart-shaped red bracts and glossy foliage.",
        category: PlantCategory::Flowering,
    },
    PlantProfile {
        scientific_name: "Phalaenopsis amabilis",
        common_name: "Moth Orchid",
        family: "Orchidaceae",
        region: "Southeast Asia",
        toxicity: 5,
        edible: false,
        hazards: &["Generally non-toxic"],
        care_tip: "Bright indirect light, orchid bark mix, soak weekly and drain well",
        description: "Moth orchid from Southeast Asia, long-lasting blooms in various colors.",
        category: PlantCategory::Flowering,
    },
    PlantProfile {
        scientific_name: "Cyclamen persicum",
        common_name: "Persian Cyclamen",
        family: "Primulaceae",
        region: "Eastern Mediterranean",
        toxicity: 60,
        edible: false,
        hazards: &["Tubers cause vomiting and diarrhea", "Toxic to cats and dogs"],
        care_tip: "Cool room, bright indirect light, water from below and avoid the crown",
        description: "Persian cyclamen with heart-shaped leaves and reflexed petals.",
        category: PlantCategory::Flowering,
    },
    PlantProfile {
        scientific_name: "Begonia rex",
        common_name: "Rex Begonia",
        family: "Begoniaceae",
        region: "Northeast India",
        toxicity: 45,
        edible: false,
        hazards: &["Oxalates in tubers irritate mouth", "Vomiting in pets"],
        care_tip: "Medium indirect light, keep soil lightly moist, boost humidity without misting leaves",
        description: "Rex begonia with colorful asymmetrical leaves and small pink flowers.",
        category: PlantCategory::Flowering,
    },
    PlantProfile {
        scientific_name: "Hibiscus rosa-sinensis",
        common_name: "Chinese Hibiscus",
        family: "Malvaceae",
        region: "East Asia",
        toxicity: 10,
        edible: true,
        hazards: &["Mild stomach upset in pets"],
        care_tip: "Full sun to bright light, keep evenly moist, feed regularly during bloom",
        description: "Chinese hibiscus with large trumpet-shaped flowers in bright colors.",
        category: PlantCategory::Flowering,
    },
    // --- Succulents and cacti ---
    PlantProfile {
        scientific_name: "Aloe barbadensis",
        common_name: "Aloe Vera",
        family: "Asphodelaceae",
        region: "Arabian Peninsula",
        toxicity: 20,
        edible: true,
        hazards: &["Laxative effects if consumed in large amounts", "Skin sensitivity in rare cases"],
        care_tip: "Bright light, water deeply but infrequently, well-draining soil",
        description: "True aloe vera from the Arabian Peninsula, medicinal gel-filled thick leaves.",
        category: PlantCategory::Succulent,
    },
    PlantProfile {
        scientific_name: "Crassula ovata",
        common_name: "Jade Plant",
        family: "Crassulaceae",
        region: "South Africa",
        toxicity: 35,
        edible: false,
        hazards: &["Vomiting and lethargy in pets"],
        care_tip: "Bright light with some direct sun, let soil dry out completely between waterings",
        description: "Jade plant from South Africa, thick oval leaves and tree-like growth pattern.",
        category: PlantCategory::Succulent,
    },
    PlantProfile {
        scientific_name: "Echeveria elegans",
        common_name: "Mexican Snowball",
        family: "Crassulaceae",
        region: "Mexico",
        toxicity: 5,
        edible: false,
        hazards: &["Generally non-toxic"],
        care_tip: "Full sun, gritty free-draining soil, water only when fully dry",
        description: "Mexican snowball succulent with blue-green rosettes and pink flower spikes.",
        category: PlantCategory::Succulent,
    },
    PlantProfile {
        scientific_name: "Sedum morganianum",
        common_name: "Burro's Tail",
        family: "Crassulaceae",
        region: "Mexico",
        toxicity: 5,
        edible: false,
        hazards: &["Generally non-toxic"],
        care_tip: "Bright light, hang where stems are not brushed, water sparingly",
        description: "Burro's tail from Mexico, trailing succulent with plump blue-green leaves.",
        category: PlantCategory::Succulent,
    },
    PlantProfile {
        scientific_name: "Haworthia fasciata",
        common_name: "Zebra Plant",
        family: "Asphodelaceae",
        region: "South Africa",
        toxicity: 5,
        edible: false,
        hazards: &["Generally non-toxic"],
        care_tip: "Bright indirect light, cactus mix, water every two to three weeks",
        description: "Zebra plant from South Africa, distinctive white stripes on dark green leaves.",
        category: PlantCategory::Succulent,
    },
    PlantProfile {
        scientific_name: "Opuntia microdasys",
        common_name: "Bunny Ears Cactus",
        family: "Cactaceae",
        region: "Mexico",
        toxicity: 25,
        edible: false,
        hazards: &["Glochids lodge in skin and are hard to remove"],
        care_tip: "Full sun, very sparse watering, handle with gloves",
        description: "Bunny ears cactus from Mexico, flat oval pads with golden glochids.",
        category: PlantCategory::Succulent,
    },
    PlantProfile {
        scientific_name: "Schlumbergera x buckleyi",
        common_name: "Christmas Cactus",
        family: "Cactaceae",
        region: "Southeastern Brazil",
        toxicity: 5,
        edible: false,
        hazards: &["Generally non-toxic"],
        care_tip: "Bright indirect light, keep slightly moist, long cool nights in autumn to set buds",
        description: "Christmas cactus hybrid, segmented leaves and winter blooms.",
        category: PlantCategory::Succulent,
    },
    // --- Culinary herbs ---
    PlantProfile {
        scientific_name: "Ocimum basilicum",
        common_name: "Sweet Basil",
        family: "Lamiaceae",
        region: "India",
        toxicity: 5,
        edible: true,
        hazards: &["Generally safe", "Possible blood thinning with excessive consumption"],
        care_tip: "Full sun, regular watering, pinch flowers to encourage leaf growth",
        description: "Sweet basil from India, aromatic leaves essential for Mediterranean cuisine.",
        category: PlantCategory::Herb,
    },
    PlantProfile {
        scientific_name: "Mentha x piperita",
        common_name: "Peppermint",
        family: "Lamiaceae",
        region: "Europe and the Middle East",
        toxicity: 10,
        edible: true,
        hazards: &["Essential oil is toxic to pets in concentrated form"],
        care_tip: "Partial shade to sun, keep soil moist, grow in a pot to contain spreading roots",
        description: "Peppermint hybrid, cooling menthol-rich leaves for teas and cooking.",
        category: PlantCategory::Herb,
    },
    PlantProfile {
        scientific_name: "Rosmarinus officinalis",
        common_name: "Rosemary",
        family: "Lamiaceae",
        region: "Mediterranean",
        toxicity: 5,
        edible: true,
        hazards: &["Generally safe"],
        care_tip: "Full sun, sandy well-drained soil, water only when dry",
        description: "Rosemary from the Mediterranean, needle-like aromatic leaves, drought tolerant.",
        category: PlantCategory::Herb,
    },
    PlantProfile {
        scientific_name: "Lavandula angustifolia",
        common_name: "English Lavender",
        family: "Lamiaceae",
        region: "Mediterranean",
        toxicity: 15,
        edible: true,
        hazards: &["Linalool can upset pets' stomachs"],
        care_tip: "Full sun, lean alkaline soil, prune after flowering",
        description: "English lavender with fragrant purple spikes, attracts beneficial insects.",
        category: PlantCategory::Herb,
    },
    PlantProfile {
        scientific_name: "Thymus vulgaris",
        common_name: "Common Thyme",
        family: "Lamiaceae",
        region: "Mediterranean",
        toxicity: 5,
        edible: true,
        hazards: &["Generally safe"],
        care_tip: "Full sun, dry well-drained soil, trim regularly to prevent woody stems",
        description: "Common thyme from the Mediterranean, small aromatic leaves for seasoning.",
        category: PlantCategory::Herb,
    },
    PlantProfile {
        scientific_name: "Salvia officinalis",
        common_name: "Garden Sage",
        family: "Lamiaceae",
        region: "Mediterranean",
        toxicity: 10,
        edible: true,
        hazards: &["Thujone content makes large doses unsafe"],
        care_tip: "Full sun, well-drained soil, cut back in spring",
        description: "Garden sage with grey-green velvety leaves and culinary uses.",
        category: PlantCategory::Herb,
    },
    PlantProfile {
        scientific_name: "Petroselinum crispum",
        common_name: "Curly Parsley",
        family: "Apiaceae",
        region: "Central Mediterranean",
        toxicity: 10,
        edible: true,
        hazards: &["Large amounts can cause photosensitivity in pets"],
        care_tip: "Sun to partial shade, keep evenly moist, harvest outer stems first",
        description: "Curly parsley, biennial herb rich in vitamins and minerals.",
        category: PlantCategory::Herb,
    },
    // --- Trees and woody shrubs ---
    PlantProfile {
        scientific_name: "Acer palmatum",
        common_name: "Japanese Maple",
        family: "Sapindaceae",
        region: "Japan, Korea and China",
        toxicity: 5,
        edible: false,
        hazards: &["Generally non-toxic"],
        care_tip: "Dappled shade, shelter from drying winds, mulch to keep roots cool",
        description: "Japanese maple with palmate leaves, spectacular autumn color changes.",
        category: PlantCategory::Woody,
    },
    PlantProfile {
        scientific_name: "Buxus sempervirens",
        common_name: "Common Boxwood",
        family: "Buxaceae",
        region: "Europe and North Africa",
        toxicity: 60,
        edible: false,
        hazards: &["Alkaloids cause vomiting and diarrhea", "Toxic to pets and livestock"],
        care_tip: "Sun or partial shade, trim in late spring, water deeply in dry spells",
        description: "Common boxwood, dense evergreen shrub ideal for topiary and hedging.",
        category: PlantCategory::Woody,
    },
    PlantProfile {
        scientific_name: "Rhododendron ponticum",
        common_name: "Pontian Rhododendron",
        family: "Ericaceae",
        region: "Iberia and the Black Sea region",
        toxicity: 90,
        edible: false,
        hazards: &["Grayanotoxins affect the heart", "Honey from the flowers can be toxic"],
        care_tip: "Partial shade, acidic moist soil, deadhead after flowering",
        description: "Pontian rhododendron with large flower clusters in spring.",
        category: PlantCategory::Woody,
    },
    PlantProfile {
        scientific_name: "Camellia japonica",
        common_name: "Japanese Camellia",
        family: "Theaceae",
        region: "Japan, Korea and China",
        toxicity: 5,
        edible: false,
        hazards: &["Generally non-toxic"],
        care_tip: "Partial shade, acidic soil, keep roots moist while buds form",
        description: "Japanese camellia, evergreen with waxy flowers in winter and spring.",
        category: PlantCategory::Woody,
    },
    PlantProfile {
        scientific_name: "Hydrangea macrophylla",
        common_name: "Bigleaf Hydrangea",
        family: "Hydrangeaceae",
        region: "Japan",
        toxicity: 55,
        edible: false,
        hazards: &["Cyanogenic glycosides cause vomiting", "Toxic to pets"],
        care_tip: "Morning sun and afternoon shade, keep soil moist, soil pH changes flower color",
        description: "Bigleaf hydrangea with pH-dependent flower color changes.",
        category: PlantCategory::Woody,
    },
    PlantProfile {
        scientific_name: "Magnolia grandiflora",
        common_name: "Southern Magnolia",
        family: "Magnoliaceae",
        region: "Southeastern United States",
        toxicity: 5,
        edible: false,
        hazards: &["Generally non-toxic"],
        care_tip: "Full sun to partial shade, deep rich soil, little pruning needed",
        description: "Southern magnolia with large fragrant white flowers and glossy leaves.",
        category: PlantCategory::Woody,
    },
    PlantProfile {
        scientific_name: "Prunus serrulata",
        common_name: "Japanese Cherry",
        family: "Rosaceae",
        region: "Japan, Korea and China",
        toxicity: 50,
        edible: false,
        hazards: &["Leaves and seeds contain cyanogenic compounds"],
        care_tip: "Full sun, well-drained soil, prune only in summer to limit silver leaf",
        description: "Japanese cherry with pink spring blossoms and serrated leaves.",
        category: PlantCategory::Woody,
    },
    // --- Ferns ---
    PlantProfile {
        scientific_name: "Nephrolepis exaltata",
        common_name: "Boston Fern",
        family: "Nephrolepidaceae",
        region: "Tropical Americas",
        toxicity: 5,
        edible: false,
        hazards: &["Generally non-toxic"],
        care_tip: "Indirect light, consistently moist soil, high humidity",
        description: "Boston fern with arching fronds, excellent for humid environments.",
        category: PlantCategory::Fern,
    },
    PlantProfile {
        scientific_name: "Adiantum raddianum",
        common_name: "Maidenhair Fern",
        family: "Pteridaceae",
        region: "Tropical South America",
        toxicity: 5,
        edible: false,
        hazards: &["Generally non-toxic"],
        care_tip: "Bright shade, never let the soil dry out, keep away from drafts",
        description: "Maidenhair fern with delicate fan-shaped leaflets on black stems.",
        category: PlantCategory::Fern,
    },
    PlantProfile {
        scientific_name: "Pteris cretica",
        common_name: "Cretan Brake Fern",
        family: "Pteridaceae",
        region: "Mediterranean and tropical Asia",
        toxicity: 5,
        edible: false,
        hazards: &["Generally non-toxic"],
        care_tip: "Medium indirect light, evenly moist soil, moderate humidity",
        description: "Cretan brake fern with variegated fronds and easy care requirements.",
        category: PlantCategory::Fern,
    },
    PlantProfile {
        scientific_name: "Asplenium nidus",
        common_name: "Bird's Nest Fern",
        family: "Aspleniaceae",
        region: "Tropical Asia and Australasia",
        toxicity: 5,
        edible: false,
        hazards: &["Generally non-toxic"],
        care_tip: "Medium indirect light, water the soil not the central rosette",
        description: "Bird's nest fern with glossy strap-like fronds arranged in a rosette.",
        category: PlantCategory::Fern,
    },
    PlantProfile {
        scientific_name: "Platycerium bifurcatum",
        common_name: "Staghorn Fern",
        family: "Polypodiaceae",
        region: "Eastern Australia",
        toxicity: 5,
        edible: false,
        hazards: &["Generally non-toxic"],
        care_tip: "Mount on a board, bright indirect light, soak the root ball weekly",
        description: "Staghorn fern, epiphytic with antler-shaped fertile fronds.",
        category: PlantCategory::Fern,
    },
    // --- Common houseplants (default and fallback candidates) ---
    PlantProfile {
        scientific_name: "Chlorophytum comosum",
        common_name: "Spider Plant",
        family: "Asparagaceae",
        region: "Southern Africa",
        toxicity: 5,
        edible: false,
        hazards: &["Generally non-toxic", "Mildly hallucinogenic to cats"],
        care_tip: "Bright indirect light, water when the top soil is dry, pot up plantlets to propagate",
        description: "Spider plant from South Africa, easy-care with long arching leaves and plantlets.",
        category: PlantCategory::Houseplant,
    },
    PlantProfile {
        scientific_name: "Dracaena marginata",
        common_name: "Dragon Tree",
        family: "Asparagaceae",
        region: "Madagascar",
        toxicity: 40,
        edible: false,
        hazards: &["Saponins cause vomiting in cats and dogs"],
        care_tip: "Medium indirect light, let the top half of the soil dry, avoid fluoridated water",
        description: "Dragon tree with narrow pointed leaves and red edges, low maintenance.",
        category: PlantCategory::Houseplant,
    },
    PlantProfile {
        scientific_name: "Ficus benjamina",
        common_name: "Weeping Fig",
        family: "Moraceae",
        region: "South and Southeast Asia",
        toxicity: 55,
        edible: false,
        hazards: &["Latex allergies", "Skin irritation from sap"],
        care_tip: "Bright indirect light, keep in one spot, water when the top inch is dry",
        description: "Weeping fig with glossy leaves, popular indoor tree species.",
        category: PlantCategory::Houseplant,
    },
    PlantProfile {
        scientific_name: "Rosa hybrida",
        common_name: "Garden Rose",
        family: "Rosaceae",
        region: "Europe, Asia and North America",
        toxicity: 5,
        edible: true,
        hazards: &["Thorns can puncture skin", "Petals and hips are edible"],
        care_tip: "Full sun, rich well-drained soil, water at the base, prune in late winter",
        description: "Garden rose with fragrant blooms, requires regular care and pruning.",
        category: PlantCategory::Flowering,
    },
    PlantProfile {
        scientific_name: "Tulipa gesneriana",
        common_name: "Garden Tulip",
        family: "Liliaceae",
        region: "Central Asia and Turkey",
        toxicity: 50,
        edible: false,
        hazards: &["Bulbs cause vomiting", "Tulip finger dermatitis from handling"],
        care_tip: "Plant bulbs in autumn in full sun, keep dry during summer dormancy",
        description: "Garden tulip with cup-shaped flowers, spring blooming bulb.",
        category: PlantCategory::Flowering,
    },
    PlantProfile {
        scientific_name: "Impatiens walleriana",
        common_name: "Busy Lizzie",
        family: "Balsaminaceae",
        region: "East Africa",
        toxicity: 5,
        edible: false,
        hazards: &["Generally non-toxic"],
        care_tip: "Shade to partial shade, keep soil evenly moist, feed lightly every two weeks",
        description: "Busy lizzie with continuous blooms in shade conditions.",
        category: PlantCategory::Flowering,
    },
    // --- Crops the chat responder knows about ---
    PlantProfile {
        scientific_name: "Malus domestica",
        common_name: "Apple Tree",
        family: "Rosaceae",
        region: "Central Asia",
        toxicity: 10,
        edible: true,
        hazards: &["Seeds contain cyanogenic compounds - avoid consuming in large quantities"],
        care_tip: "Full sun, well-draining soil, regular watering, annual pruning in late winter",
        description: "Apple tree with round red and yellow fruits, serrated leaves and a branching crown.",
        category: PlantCategory::Crop,
    },
    PlantProfile {
        scientific_name: "Solanum lycopersicum",
        common_name: "Tomato",
        family: "Solanaceae",
        region: "Western South America",
        toxicity: 30,
        edible: true,
        hazards: &["Leaves and stems contain solanine and tomatine"],
        care_tip: "Full sun, deep even watering, stake or cage and feed once fruit sets",
        description: "Tomato plant, a tender perennial grown as an annual for its fruit.",
        category: PlantCategory::Crop,
    },
];

// ============================================================================
// CARE ADVICE BY CATEGORY
// ============================================================================

static SUCCULENT_CARE: &[&str] = &[
    "Water only when soil is completely dry",
    "Provide bright, indirect light",
    "Use well-draining soil",
    "Avoid overwatering - less is more",
];

static FLOWERING_CARE: &[&str] = &[
    "Water when soil surface is dry",
    "Provide bright, indirect light to keep buds forming",
    "Remove spent flowers",
    "Feed lightly while in bloom",
];

static FERN_CARE: &[&str] = &[
    "Keep soil consistently moist",
    "Provide high humidity",
    "Avoid direct sunlight",
    "Mist regularly but avoid waterlogged soil",
];

static HERB_CARE: &[&str] = &[
    "Give at least six hours of sun",
    "Water when the top inch is dry",
    "Harvest often to keep plants bushy",
    "Pinch off flower buds for better leaves",
];

static WOODY_CARE: &[&str] = &[
    "Mulch around the base to keep roots cool",
    "Water deeply during dry spells",
    "Prune dead or crossing branches when dormant",
    "Feed in early spring",
];

static CROP_CARE: &[&str] = &[
    "Grow in full sun",
    "Water deeply and evenly",
    "Feed once flowering starts",
    "Check regularly for pests",
];

static GENERAL_CARE: &[&str] = &[
    "Provide appropriate light for species",
    "Water when topsoil feels dry",
    "Ensure good drainage",
    "Feed during growing season",
];

/// Short care checklist for a plant category.
pub fn care_advice(category: PlantCategory) -> &'static [&'static str] {
    match category {
        PlantCategory::Succulent => SUCCULENT_CARE,
        PlantCategory::Flowering => FLOWERING_CARE,
        PlantCategory::Fern => FERN_CARE,
        PlantCategory::Herb => HERB_CARE,
        PlantCategory::Woody => WOODY_CARE,
        PlantCategory::Crop => CROP_CARE,
        PlantCategory::TropicalFoliage
        | PlantCategory::Houseplant
        | PlantCategory::Unclassified => GENERAL_CARE,
    }
}
