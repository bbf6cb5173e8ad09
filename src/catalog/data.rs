//! Catalog content. Pure data; tuning lives here, rules live elsewhere.

use super::{
    BonusKind, CreatureDef, IngredientDef, ItemDef, ItemKind, RecipeDef, StockDef, TriviaQuestion,
    VaultTier, WandCore, WandFinish, WandWood,
};

pub const SHOP_ITEMS: &[ItemDef] = &[
    ItemDef {
        id: 1001,
        name: "Apprentice Wand",
        description: "Ash and owl feather. Every student's first wand.",
        kind: ItemKind::Wand,
        price: 150,
        attack: 15,
        defense: 5,
    },
    ItemDef {
        id: 1002,
        name: "Duelist's Wand",
        description: "Short-hafted blackthorn, balanced for fast casting.",
        kind: ItemKind::Wand,
        price: 900,
        attack: 80,
        defense: 20,
    },
    ItemDef {
        id: 1003,
        name: "Stormheart Wand",
        description: "Yew around a sliver of fulgurite. Crackles when drawn.",
        kind: ItemKind::Wand,
        price: 3000,
        attack: 280,
        defense: 50,
    },
    ItemDef {
        id: 2001,
        name: "Ember Bolt",
        description: "A reliable offensive cantrip. Singes eyebrows.",
        kind: ItemKind::Spell,
        price: 250,
        attack: 30,
        defense: 0,
    },
    ItemDef {
        id: 2002,
        name: "Glacial Lance",
        description: "Slow to form, brutal on arrival.",
        kind: ItemKind::Spell,
        price: 1200,
        attack: 120,
        defense: 0,
    },
    ItemDef {
        id: 2003,
        name: "Mirror Ward",
        description: "Turns the weakest third of incoming hexes.",
        kind: ItemKind::Spell,
        price: 800,
        attack: 0,
        defense: 90,
    },
    ItemDef {
        id: 2004,
        name: "Veil of Cinders",
        description: "A smokescreen that bites back.",
        kind: ItemKind::Spell,
        price: 1800,
        attack: 60,
        defense: 110,
    },
    ItemDef {
        id: 3001,
        name: "Padded Dueling Robe",
        description: "Standard academy issue. Smells of old victories.",
        kind: ItemKind::Equipment,
        price: 300,
        attack: 0,
        defense: 40,
    },
    ItemDef {
        id: 3002,
        name: "Wyrmhide Gloves",
        description: "Shed scales, triple-stitched.",
        kind: ItemKind::Equipment,
        price: 650,
        attack: 10,
        defense: 55,
    },
    ItemDef {
        id: 3003,
        name: "Circlet of Still Water",
        description: "Keeps the mind quiet under fire.",
        kind: ItemKind::Equipment,
        price: 1500,
        attack: 25,
        defense: 130,
    },
    ItemDef {
        id: 3004,
        name: "Boots of the Unseen Step",
        description: "The opponent aims where you were.",
        kind: ItemKind::Equipment,
        price: 2200,
        attack: 70,
        defense: 120,
    },
    ItemDef {
        id: 3005,
        name: "Warded Satchel",
        description: "Carries reagents; shrugs off stray sparks.",
        kind: ItemKind::Equipment,
        price: 450,
        attack: 0,
        defense: 35,
    },
];

pub const CREATURES: &[CreatureDef] = &[
    CreatureDef {
        id: "moon_owl",
        species: "Moon Owl",
        name: "Moon Owl",
        description: "Carries letters by night. Brings back loose coins.",
        price: 200,
        bonus: BonusKind::GoldFinder,
        bonus_value: 5.0,
    },
    CreatureDef {
        id: "marsh_toad",
        species: "Marsh Toad",
        name: "Marsh Toad",
        description: "Unpopular but loyal. Its slime dulls hexes.",
        price: 50,
        bonus: BonusKind::DefenseBoost,
        bonus_value: 5.0,
    },
    CreatureDef {
        id: "lynx_familiar",
        species: "Silver Lynx",
        name: "Silver Lynx",
        description: "Smells a bargain three stalls away.",
        price: 300,
        bonus: BonusKind::Discount,
        bonus_value: 0.05,
    },
    CreatureDef {
        id: "griffon",
        species: "Highland Griffon",
        name: "Highland Griffon",
        description: "Proud and heavy-taloned. Unnerves opponents.",
        price: 1000,
        bonus: BonusKind::AttackBoost,
        bonus_value: 10.0,
    },
    CreatureDef {
        id: "drake_hatchling",
        species: "Drake Hatchling",
        name: "Cinder",
        description: "Illegal, dangerous, adorable. Hoards gold.",
        price: 5000,
        bonus: BonusKind::GoldFinder,
        bonus_value: 50.0,
    },
    CreatureDef {
        id: "burrow_mole",
        species: "Treasure Mole",
        name: "Treasure Mole",
        description: "Digs up anything shiny within a league.",
        price: 800,
        bonus: BonusKind::GoldFinder,
        bonus_value: 20.0,
    },
    CreatureDef {
        id: "ember_finch",
        species: "Ember Finch",
        name: "Ember Finch",
        description: "Reborn from its own ash. Its warmth steadies the guard.",
        price: 10_000,
        bonus: BonusKind::DefenseBoost,
        bonus_value: 50.0,
    },
    CreatureDef {
        id: "puffwisp",
        species: "Puffwisp",
        name: "Puffwisp",
        description: "A fist-sized cloud with opinions.",
        price: 150,
        bonus: BonusKind::DefenseBoost,
        bonus_value: 2.0,
    },
    CreatureDef {
        id: "twig_sprite",
        species: "Twig Sprite",
        name: "Twig Sprite",
        description: "Picks locks, pockets and better prices.",
        price: 450,
        bonus: BonusKind::Discount,
        bonus_value: 0.02,
    },
    CreatureDef {
        id: "shade_serpent",
        species: "Shade Serpent",
        name: "Shade Serpent",
        description: "Grows to fill the room it is angry in.",
        price: 2500,
        bonus: BonusKind::AttackBoost,
        bonus_value: 25.0,
    },
    CreatureDef {
        id: "dusk_mare",
        species: "Dusk Mare",
        name: "Dusk Mare",
        description: "Visible only to those who have lost a duel badly.",
        price: 1800,
        bonus: BonusKind::AttackBoost,
        bonus_value: 18.0,
    },
    CreatureDef {
        id: "moor_calf",
        species: "Moor Calf",
        name: "Moor Calf",
        description: "Dances under a full moon; turns up coins doing it.",
        price: 600,
        bonus: BonusKind::GoldFinder,
        bonus_value: 8.0,
    },
    CreatureDef {
        id: "quill_raven",
        species: "Quill Raven",
        name: "Quill Raven",
        description: "Silent until it has something cutting to say.",
        price: 500,
        bonus: BonusKind::Discount,
        bonus_value: 0.03,
    },
    CreatureDef {
        id: "garden_gnarl",
        species: "Garden Gnarl",
        name: "Garden Gnarl",
        description: "A pest. Might dig up a copper or two.",
        price: 25,
        bonus: BonusKind::GoldFinder,
        bonus_value: 1.0,
    },
    CreatureDef {
        id: "fire_crab",
        species: "Kiln Crab",
        name: "Kiln Crab",
        description: "A jeweled shell with a furnace under it.",
        price: 1100,
        bonus: BonusKind::AttackBoost,
        bonus_value: 14.0,
    },
    CreatureDef {
        id: "river_eel",
        species: "Glass Eel",
        name: "Glass Eel",
        description: "Hard to see, harder to hit.",
        price: 750,
        bonus: BonusKind::DefenseBoost,
        bonus_value: 10.0,
    },
];

pub const STOCKS: &[StockDef] = &[
    StockDef {
        id: "whimsy",
        ticker: "WHM",
        name: "Whimsy & Bang Novelties",
        description: "High risk, hilarious returns.",
        base_price: 50.0,
        volatility: 0.25,
    },
    StockDef {
        id: "herald",
        ticker: "TEH",
        name: "The Evening Herald",
        description: "Stable dividend, flexible facts.",
        base_price: 120.0,
        volatility: 0.05,
    },
    StockDef {
        id: "zephyr",
        ticker: "ZPH",
        name: "Zephyr Broomworks",
        description: "Cyclical. Watch for new model releases.",
        base_price: 250.0,
        volatility: 0.15,
    },
    StockDef {
        id: "wandwright",
        ticker: "WWG",
        name: "Wandwright & Daughters",
        description: "The gold standard in focus instruments.",
        base_price: 500.0,
        volatility: 0.03,
    },
    StockDef {
        id: "vaultkeep",
        ticker: "VLT",
        name: "Vaultkeep Holdings",
        description: "Betting on the bank itself. Very safe.",
        base_price: 1000.0,
        volatility: 0.01,
    },
    StockDef {
        id: "fizzle",
        ticker: "FZL",
        name: "Fizzle's Joke Emporium",
        description: "Struggling against Whimsy & Bang. Wild swings.",
        base_price: 30.0,
        volatility: 0.4,
    },
];

pub const VAULT_TIERS: &[VaultTier] = &[
    VaultTier {
        level: 1,
        name: "Standard Vault",
        cost: 0,
        capacity: 1_000,
    },
    VaultTier {
        level: 2,
        name: "Reinforced Door",
        cost: 1_000,
        capacity: 5_000,
    },
    VaultTier {
        level: 3,
        name: "Sigil-Sealed",
        cost: 5_000,
        capacity: 25_000,
    },
    VaultTier {
        level: 4,
        name: "Wyrm-Guarded",
        cost: 20_000,
        capacity: 100_000,
    },
    VaultTier {
        level: 5,
        name: "Deepest Undercroft",
        cost: 100_000,
        capacity: 1_000_000,
    },
];

pub const INGREDIENTS: &[IngredientDef] = &[
    IngredientDef {
        id: "mandrel_root",
        name: "Mandrel Root",
        price: 50,
    },
    IngredientDef {
        id: "gallstone",
        name: "Goat Gallstone",
        price: 80,
    },
    IngredientDef {
        id: "lacewing",
        name: "Lacewing Flies",
        price: 30,
    },
    IngredientDef {
        id: "peppermint",
        name: "Peppermint",
        price: 5,
    },
    IngredientDef {
        id: "ginger_root",
        name: "Ginger Root",
        price: 8,
    },
    IngredientDef {
        id: "quill_spines",
        name: "Quillback Spines",
        price: 10,
    },
    IngredientDef {
        id: "marsh_jelly",
        name: "Marsh Jelly",
        price: 15,
    },
    IngredientDef {
        id: "leech_extract",
        name: "Leech Extract",
        price: 20,
    },
    IngredientDef {
        id: "silver_moss",
        name: "Silver Moss",
        price: 25,
    },
    IngredientDef {
        id: "dusk_poppy",
        name: "Dusk Poppy",
        price: 90,
    },
    IngredientDef {
        id: "moonstone_dust",
        name: "Moonstone Dust",
        price: 100,
    },
    IngredientDef {
        id: "unicorn_hair",
        name: "Unicorn Hair",
        price: 120,
    },
    IngredientDef {
        id: "wyrm_liver",
        name: "Wyrm Liver",
        price: 150,
    },
    IngredientDef {
        id: "slumber_bean",
        name: "Slumber Bean",
        price: 180,
    },
    IngredientDef {
        id: "serpent_skin",
        name: "Shed Serpent Skin",
        price: 200,
    },
    IngredientDef {
        id: "ember_egg",
        name: "Ember Egg",
        price: 300,
    },
];

pub const RECIPES: &[RecipeDef] = &[
    RecipeDef {
        id: "boil_cure",
        name: "Boil-Cure Draught",
        sell_price: 150,
        ingredients: &["mandrel_root", "gallstone"],
        difficulty: 10,
    },
    RecipeDef {
        id: "wit_tonic",
        name: "Wit-Sharpening Tonic",
        sell_price: 400,
        ingredients: &["ginger_root", "mandrel_root", "peppermint"],
        difficulty: 30,
    },
    RecipeDef {
        id: "muddle_brew",
        name: "Muddling Brew",
        sell_price: 350,
        ingredients: &["leech_extract", "silver_moss"],
        difficulty: 35,
    },
    RecipeDef {
        id: "sealing_salve",
        name: "Wound-Sealing Salve",
        sell_price: 500,
        ingredients: &["silver_moss", "leech_extract", "marsh_jelly"],
        difficulty: 45,
    },
    RecipeDef {
        id: "dreamless_sleep",
        name: "Dreamless Sleep Philtre",
        sell_price: 400,
        ingredients: &["mandrel_root", "lacewing", "unicorn_hair"],
        difficulty: 40,
    },
    RecipeDef {
        id: "bone_mend",
        name: "Bone-Mending Decoction",
        sell_price: 900,
        ingredients: &["marsh_jelly", "quill_spines", "gallstone"],
        difficulty: 60,
    },
    RecipeDef {
        id: "calming_draught",
        name: "Draught of Calm Waters",
        sell_price: 1000,
        ingredients: &["moonstone_dust", "dusk_poppy", "quill_spines"],
        difficulty: 70,
    },
    RecipeDef {
        id: "faceshift",
        name: "Faceshift Elixir",
        sell_price: 2500,
        ingredients: &["lacewing", "serpent_skin", "wyrm_liver"],
        difficulty: 80,
    },
    RecipeDef {
        id: "deathlike_sleep",
        name: "Deathlike Sleep Potion",
        sell_price: 2800,
        ingredients: &["dusk_poppy", "slumber_bean", "moonstone_dust"],
        difficulty: 85,
    },
    RecipeDef {
        id: "truth_serum",
        name: "Serum of Plain Truth",
        sell_price: 4500,
        ingredients: &["moonstone_dust", "slumber_bean", "unicorn_hair"],
        difficulty: 90,
    },
    RecipeDef {
        id: "liquid_fortune",
        name: "Liquid Fortune",
        sell_price: 5000,
        ingredients: &["ember_egg", "moonstone_dust", "wyrm_liver", "unicorn_hair"],
        difficulty: 95,
    },
];

pub const TRIVIA_QUESTIONS: &[TriviaQuestion] = &[
    TriviaQuestion {
        question: "Which wand wood is said to cleave to one master for life?",
        options: ["Willow", "Ashwood", "Rowan", "Blackthorn"],
        correct: 1,
    },
    TriviaQuestion {
        question: "What is the only safe way to extract juice from a slumber bean?",
        options: ["Cutting", "Boiling", "Crushing", "Freezing"],
        correct: 2,
    },
    TriviaQuestion {
        question: "Which potion is nicknamed 'Liquid Fortune'?",
        options: [
            "Draught of Calm Waters",
            "Faceshift Elixir",
            "Serum of Plain Truth",
            "Liquid Fortune",
        ],
        correct: 3,
    },
    TriviaQuestion {
        question: "A kiln crab's shell is best described as...",
        options: [
            "A jeweled furnace",
            "Ordinary granite",
            "Woven reeds",
            "Solid ice",
        ],
        correct: 0,
    },
    TriviaQuestion {
        question: "Lacewing flies must be stewed for how many days?",
        options: ["Seven", "Fourteen", "Twenty-one", "Thirty"],
        correct: 2,
    },
    TriviaQuestion {
        question: "Which house claims the motto 'Steady under storm'?",
        options: ["Emberfall", "Frosthollow", "Galewind", "Briarwood"],
        correct: 2,
    },
    TriviaQuestion {
        question: "What does a dusk mare reveal itself to?",
        options: [
            "Anyone at midnight",
            "Those who have badly lost a duel",
            "Children only",
            "No one at all",
        ],
        correct: 1,
    },
    TriviaQuestion {
        question: "The Evening Herald is infamous for...",
        options: [
            "Flexible facts",
            "Perfect accuracy",
            "Blank pages",
            "Singing headlines",
        ],
        correct: 0,
    },
    TriviaQuestion {
        question: "Moonstone dust is a key component of which draught?",
        options: [
            "Boil-Cure Draught",
            "Muddling Brew",
            "Draught of Calm Waters",
            "Wit-Sharpening Tonic",
        ],
        correct: 2,
    },
    TriviaQuestion {
        question: "Which creature is a known lockpick?",
        options: ["Marsh Toad", "Twig Sprite", "Moor Calf", "Puffwisp"],
        correct: 1,
    },
];

pub const OPPONENT_NAMES: &[&str] = &[
    "Morwen the Pale",
    "Caldus Rook",
    "Ysolde Blackbriar",
    "Ferrin Vex",
    "Octavia Thorne",
    "Grimald Hollowell",
    "Seraphine Duskwater",
    "Aldric Mourne",
    "Petra Galebreaker",
];

pub const WAND_WOODS: &[WandWood] = &[
    WandWood {
        id: "holly",
        name: "Holly",
        cost: 500,
        attack_bonus: 30,
    },
    WandWood {
        id: "yew",
        name: "Yew",
        cost: 800,
        attack_bonus: 60,
    },
    WandWood {
        id: "ashwood",
        name: "Ashwood",
        cost: 600,
        attack_bonus: 40,
    },
    WandWood {
        id: "blackthorn",
        name: "Blackthorn",
        cost: 900,
        attack_bonus: 70,
    },
    WandWood {
        id: "elderwood",
        name: "Elderwood",
        cost: 2000,
        attack_bonus: 100,
    },
];

pub const WAND_CORES: &[WandCore] = &[
    WandCore {
        id: "unicorn",
        name: "Unicorn Hair",
        cost: 400,
        defense_bonus: 50,
    },
    WandCore {
        id: "wyrm",
        name: "Wyrm Heartstring",
        cost: 600,
        defense_bonus: 20,
    },
    WandCore {
        id: "ember_feather",
        name: "Ember Finch Feather",
        cost: 800,
        defense_bonus: 40,
    },
    WandCore {
        id: "mare_hair",
        name: "Dusk Mare Hair",
        cost: 1200,
        defense_bonus: 10,
    },
];

pub const WAND_FINISHES: &[WandFinish] = &[
    WandFinish {
        id: "natural",
        name: "Natural Polish",
        cost: 0,
    },
    WandFinish {
        id: "midnight",
        name: "Midnight Blue",
        cost: 100,
    },
    WandFinish {
        id: "oxblood",
        name: "Oxblood Red",
        cost: 100,
    },
    WandFinish {
        id: "void",
        name: "Void Black",
        cost: 200,
    },
    WandFinish {
        id: "gilded",
        name: "Gilded",
        cost: 500,
    },
];
