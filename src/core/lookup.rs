//! Display lookups for awards, skills and languages.
//!
//! Every function is total: an unknown label falls through to a fixed
//! default rather than an error.

pub const DEFAULT_BADGE_COLOR: &str = "bg-orange-600";
pub const DEFAULT_LEVEL: u8 = 50;
pub const DEFAULT_SKILL_COLOR: &str = "from-blue-400 to-blue-600";
pub const DEFAULT_LANGUAGE_COLOR: &str = "from-slate-400 to-slate-600";

const AWARD_BADGE_COLORS: &[(&str, &str)] = &[
    ("Certificate", "bg-amber-600"),
    ("Award", "bg-yellow-600"),
];

const SKILL_LEVELS: &[(&str, u8)] = &[
    ("Beginner", 25),
    ("Intermediate", 50),
    ("Advanced", 75),
    ("Expert", 90),
    ("Master", 100),
];

const SKILL_COLORS: &[(&str, &str)] = &[
    ("Beginner", "from-red-400 to-red-600"),
    ("Intermediate", "from-orange-400 to-orange-600"),
    ("Advanced", "from-blue-400 to-blue-600"),
    ("Expert", "from-indigo-500 to-indigo-700"),
    ("Master", "from-purple-500 to-purple-700"),
];

const LANGUAGE_LEVELS: &[(&str, u8)] = &[
    ("Elementary", 25),
    ("Limited working", 40),
    ("Professional working", 60),
    ("Full professional", 80),
    ("Native speaker", 100),
    ("Native", 100),
];

// Substring rules, first match wins. "Full professional" must precede
// "Professional".
const LANGUAGE_COLORS: &[(&str, &str)] = &[
    ("Native", "from-emerald-500 to-emerald-700"),
    ("Full professional", "from-green-500 to-green-700"),
    ("Professional", "from-blue-500 to-blue-700"),
    ("Limited", "from-orange-500 to-orange-700"),
];

fn lookup<T: Copy>(table: &[(&str, T)], key: &str, default: T, table_name: &str) -> T {
    match table.iter().find(|(label, _)| *label == key) {
        Some((_, value)) => *value,
        None => {
            tracing::debug!(table = table_name, label = key, "unknown label, using default");
            default
        }
    }
}

pub fn award_badge_color(award_type: &str) -> &'static str {
    lookup(AWARD_BADGE_COLORS, award_type, DEFAULT_BADGE_COLOR, "award_badge_color")
}

/// Bar fill percentage for a skill level label.
pub fn skill_level(level: &str) -> u8 {
    lookup(SKILL_LEVELS, level, DEFAULT_LEVEL, "skill_level")
}

pub fn skill_color(level: &str) -> &'static str {
    lookup(SKILL_COLORS, level, DEFAULT_SKILL_COLOR, "skill_color")
}

/// Bar fill percentage for a language fluency label.
pub fn language_level(fluency: &str) -> u8 {
    lookup(LANGUAGE_LEVELS, fluency, DEFAULT_LEVEL, "language_level")
}

/// Gradient for free-form fluency text, e.g. "Native or bilingual".
pub fn language_color(fluency: &str) -> &'static str {
    LANGUAGE_COLORS
        .iter()
        .find(|(needle, _)| fluency.contains(needle))
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_LANGUAGE_COLOR)
}
