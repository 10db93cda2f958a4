//! Embedded sample word lists
//!
//! A small five-letter vocabulary used when no word list file is given.

/// Common five-letter answers
pub const SAMPLE_ANSWERS: &[&str] = &[
    "aback", "abase", "abate", "abbey", "abbot", "abhor", "abide", "abled", "abode", "abort",
    "about", "above", "abuse", "abyss", "acorn", "acrid", "actor", "acute", "adage", "adapt",
    "adept", "admin", "admit", "adobe", "adopt", "adore", "adorn", "adult", "affix", "afire",
    "afoot", "afoul", "after", "again", "agape", "agate", "agent", "agile", "aging", "aglow",
    "agony", "agree", "ahead", "aider", "aisle", "alarm", "album", "alert", "algae", "alibi",
    "alien", "align", "alike", "alive", "allay", "alley", "allot", "allow", "alloy", "aloft",
    "alone", "along", "aloof", "aloud", "alpha", "altar", "alter", "amass", "amaze", "amber",
    "amble", "amend", "amiss", "amity", "among", "ample", "amply", "amuse", "angel", "anger",
    "angle", "angry", "angst", "anime", "ankle", "annex", "annoy", "annul", "anode", "antic",
    "anvil", "aorta", "apart", "aphid", "aping", "apnea", "apple", "apply", "apron", "aptly",
    "arbor", "ardor", "arena", "argue", "arise", "armor", "aroma", "arose", "array", "arrow",
    "arson", "artsy", "ascot", "ashen", "aside", "askew", "assay", "asset", "atoll", "atone",
    "attic", "audio", "audit", "augur", "aunty", "avail", "avert", "avian", "avoid", "await",
    "awake", "award", "aware", "awash", "awful", "awoke", "axial", "axiom", "axion", "azure",
    "baker", "basic", "beach", "beast", "began", "being", "below", "bench", "berry", "birth",
    "black", "blade", "blame", "bland", "blast", "blaze", "bleak", "blend", "bless", "blind",
    "block", "blood", "bloom", "blown", "board", "boast", "booth", "bound", "brain", "brand",
    "brave", "bread", "break", "brick", "bride", "brief", "bring", "brink", "broad", "broke",
    "brown", "brush", "build", "built", "burst", "cabin", "cable", "candy", "canoe", "cargo",
    "carry", "catch", "cause", "chain", "chair", "chalk", "charm", "chart", "chase", "cheap",
    "check", "chess", "chest", "chief", "child", "chill", "choir", "chord", "chose", "civic",
    "claim", "class", "clean", "clear", "clerk", "click", "cliff", "climb", "clock", "close",
    "cloth", "cloud", "coach", "coast", "could", "count", "court", "cover", "crack", "craft",
    "crane", "crash", "crazy", "cream", "crime", "crisp", "cross", "crowd", "crown", "crush",
    "curve", "cycle", "daily", "dance", "death", "debut", "delay", "depth", "diary", "digit",
    "dirty", "doubt", "dozen", "draft", "drain", "drama", "drawn", "dream", "dress", "drink",
    "drive", "early", "earth", "eight", "elbow", "elder", "elite", "empty", "enemy", "enjoy",
    "enter", "entry", "equal", "error", "essay", "event", "every", "exact", "exist", "extra",
    "faint", "faith", "false", "fancy", "feast", "fence", "fever", "field", "fiery", "fifth",
    "fifty", "fight", "final", "first", "flame", "flash", "fleet", "flesh", "float", "flood",
    "floor", "flour", "fluid", "flute", "focus", "force", "forge", "forth", "forty", "forum",
    "found", "frame", "fresh", "front", "frost", "fruit", "funky", "funny", "ghost", "giant",
    "given", "glass", "globe", "glory", "grace", "grade", "grain", "grand", "grant", "grape",
    "graph", "grasp", "grass", "grave", "great", "green", "greet", "grief", "grind", "gross",
    "group", "grove", "guard", "guess", "guest", "guide", "habit", "happy", "harsh", "heart",
    "heavy", "hello", "honey", "horse", "hotel", "house", "human", "humor", "hurry", "ideal",
    "image", "imply", "index", "inner", "input", "irony", "issue", "ivory", "jelly", "joint",
    "judge", "juice", "knife", "knock", "known", "label", "large", "laser", "later", "laugh",
    "layer", "learn", "least", "leave", "legal", "lemon", "level", "light", "limit", "linen",
    "liver", "local", "lodge", "logic", "loose", "lover", "lower", "loyal", "lucky", "lunar",
    "lunch", "magic", "major", "maker", "manor", "march", "match", "mayor", "medal", "media",
    "mercy", "merit", "metal", "meter", "midst", "might", "minor", "model", "money", "month",
    "moral", "motor", "mount", "mouse", "mouth", "movie", "music", "musky", "naive", "nasty",
    "nerve", "never", "night", "noble", "noise", "north", "novel", "nurse", "ocean", "offer",
    "often", "olive", "onion", "opera", "orbit", "order", "other", "ought", "ounce", "outer",
    "owner", "paint", "panel", "panic", "paper", "party", "pasta", "patch", "pause", "peace",
    "pearl", "pedal", "penny", "phase", "phone", "photo", "piano", "piece", "pilot", "pitch",
    "pizza", "place", "plain", "plane", "plant", "plate", "plaza", "point", "polar", "porch",
    "pound", "power", "press", "price", "pride", "prime", "print", "prior", "prize", "proof",
    "proud", "prove", "pulse", "punch", "pupil", "purse", "queen", "query", "quest", "quick",
    "quiet", "quite", "quota", "quote", "radar", "radio", "rainy", "raise", "rally", "ranch",
    "range", "rapid", "ratio", "reach", "react", "ready", "realm", "rebel", "refer", "relax",
    "reply", "rider", "ridge", "rifle", "right", "rigid", "rival", "river", "roast", "robin",
    "robot", "rocky", "roomy", "rough", "round", "route", "royal", "rural", "salad", "salty",
    "sauce", "scale", "scare", "scarf", "scene", "scent", "scope", "score", "scout", "scrap",
    "sense", "serve", "seven", "shade", "shake", "shall", "shame", "shape", "share", "shark",
    "sharp", "sheep", "sheet", "shelf", "shell", "shift", "shine", "shirt", "shock", "shoot",
    "shore", "short", "shout", "sight", "silly", "since", "skill", "skirt", "slate", "sleep",
    "slice", "slide", "slope", "small", "smart", "smell", "smile", "smoke", "snack", "snake",
    "solar", "solid", "solve", "sound", "south", "space", "spare", "spark", "speak", "speed",
    "spell", "spend", "spice", "spill", "spine", "spite", "split", "spoon", "sport", "spray",
    "squad", "stack", "staff", "stage", "stain", "stair", "stake", "stamp", "stand", "start",
    "state", "steam", "steel", "steep", "stick", "still", "stock", "stone", "stool", "storm",
    "story", "stove", "strap", "straw", "strip", "stuck", "study", "style", "sugar", "suite",
    "sunny", "super", "swamp", "swear", "sweet", "swift", "swill", "swing", "sword", "table",
    "taste", "teach", "thank", "theft", "theme", "there", "thick", "thief", "thing", "think",
    "third", "those", "three", "threw", "throw", "thumb", "tiger", "tight", "timer", "tired",
    "title", "toast", "today", "token", "tooth", "topic", "torch", "total", "touch", "tough",
    "tower", "toxic", "trace", "track", "trade", "trail", "train", "trait", "treat", "trend",
    "trial", "tribe", "trick", "tried", "troop", "truck", "truly", "trunk", "trust", "truth",
    "tulip", "tumor", "twice", "twist", "uncle", "under", "union", "unity", "until", "upper",
    "upset", "urban", "usage", "usual", "vague", "valid", "value", "valve", "vapor", "vault",
    "venue", "verse", "video", "vigor", "villa", "vital", "vivid", "vocal", "voice", "voter",
    "wagon", "waist", "waste", "watch", "water", "weary", "weird", "whale", "wheat", "wheel",
    "where", "which", "while", "white", "whole", "whose", "width", "witch", "woman", "world",
    "worry", "worse", "worst", "worth", "would", "wound", "wrist", "write", "wrong", "yacht",
    "yeast", "yield", "young", "youth", "zebra",
];

/// Extra allowed guesses; the answers are guessable too
pub const SAMPLE_GUESSES: &[&str] = &[
    "aahed", "aalii", "aargh", "abaca", "abaci", "abacs", "abaft", "aloes", "bumps", "caret",
    "carte", "chant", "crate", "crone", "fjord", "fuzzy", "gawky", "irate", "jazzy", "jumbo",
    "kapow", "lairs", "lares", "leapt", "liars", "nares", "nymph", "petal", "pixie", "pleat",
    "quack", "raile", "rails", "rates", "reast", "rials", "roate", "salet", "saner", "setal",
    "slane", "slant", "snare", "soare", "stale", "stare", "steal", "stoae", "tales", "tares",
    "tasel", "teals", "tears", "toeas", "tolar", "trone", "vozhd", "waltz", "whelk", "zippy",
];
