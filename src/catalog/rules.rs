// src/catalog/rules.rs
//! Keyword tables that classify a report by its title.
//!
//! Both tables are scanned top to bottom against the lower-cased title and
//! the first keyword found as a substring wins, so row order is precedence.
//! Keep them as data: adding a report family means adding a row here.

use std::fmt;

/// Fixed set of statistical groupings used for navigation.
///
/// Declaration order is display order (and `Ord`), so grouped views come out
/// batting → … → other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Batting,
    Bowling,
    Fielding,
    Partnerships,
    Player,
    Team,
    Milestones,
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Batting,
        Category::Bowling,
        Category::Fielding,
        Category::Partnerships,
        Category::Player,
        Category::Team,
        Category::Milestones,
        Category::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Batting => "Batting",
            Category::Bowling => "Bowling",
            Category::Fielding => "Fielding",
            Category::Partnerships => "Partnerships",
            Category::Player => "Player Stats",
            Category::Team => "Team Stats",
            Category::Milestones => "Milestones",
            Category::Other => "Other",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::Batting => "🏏",
            Category::Bowling => "🎯",
            Category::Fielding => "🧤",
            Category::Partnerships => "🤝",
            Category::Player => "👤",
            Category::Team => "👥",
            Category::Milestones => "🏆",
            Category::Other => "📊",
        }
    }

    /// Stable lower-case key ("batting", "player", …).
    pub fn key(self) -> &'static str {
        match self {
            Category::Batting => "batting",
            Category::Bowling => "bowling",
            Category::Fielding => "fielding",
            Category::Partnerships => "partnerships",
            Category::Player => "player",
            Category::Team => "team",
            Category::Milestones => "milestones",
            Category::Other => "other",
        }
    }

    pub fn from_key(key: &str) -> Option<Category> {
        let key = key.trim().to_ascii_lowercase();
        Category::ALL.into_iter().find(|c| c.key() == key)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

pub const DEFAULT_ICON: &str = "📊";

pub static ICON_RULES: &[(&str, &str)] = &[
    ("run", "🏏"),
    ("batting", "🏏"),
    ("score", "💯"),
    ("average", "📊"),
    ("strike rate", "⚡"),
    ("wicket", "⚾"),
    ("bowling", "🎯"),
    ("catch", "🧤"),
    ("stumping", "🧤"),
    ("fielding", "🧤"),
    ("partnership", "🤝"),
    ("all-rounder", "⭐"),
    ("match", "🎮"),
    ("win", "🏆"),
    ("duck", "🦆"),
    ("hundred", "💯"),
    ("century", "💯"),
    ("fifty", "5️⃣0️⃣"),
    ("six", "6️⃣"),
    ("four", "4️⃣"),
    ("boundary", "4️⃣"),
    ("hat trick", "🎩"),
    ("maiden", "🚫"),
    ("economy", "💰"),
    ("run out", "🏃"),
    ("debut", "🌟"),
    ("season", "📅"),
    ("total", "📈"),
    ("margin", "📏"),
    ("consecutive", "🔗"),
    ("umpire", "👨‍⚖️"),
    ("scorer", "📝"),
    ("captain", "👑"),
    ("mvp", "🏅"),
    ("ranking", "📋"),
    ("recent", "🕐"),
    ("upcoming", "📆"),
];

pub static CATEGORY_RULES: &[(Category, &[&str])] = &[
    (Category::Batting, &[
        "batting", "run", "score", "hundred", "century", "fifty", "duck",
        "six", "four", "boundary", "balls faced", "carrying the bat",
    ]),
    (Category::Bowling, &[
        "bowling", "wicket", "economy", "maiden", "hat trick", "wides", "noballs",
    ]),
    (Category::Fielding, &[
        "catch", "stumping", "fielding", "keeping", "run out", "dismissal",
    ]),
    (Category::Partnerships, &["partnership"]),
    (Category::Player, &[
        "match", "win", "loss", "captain", "mvp", "ranking", "debut", "serving",
        "played together",
    ]),
    (Category::Team, &[
        "innings total", "team", "margin", "chase", "extras", "consecutive matches",
        "toss",
    ]),
    (Category::Milestones, &["most", "top", "highest", "lowest", "best"]),
];

pub fn icon_for_title(title: &str) -> &'static str {
    let lc = title.to_lowercase();
    ICON_RULES
        .iter()
        .find(|(kw, _)| lc.contains(*kw))
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}

pub fn category_for_title(title: &str) -> Category {
    let lc = title.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|(_, kws)| kws.iter().any(|kw| lc.contains(*kw)))
        .map(|(cat, _)| *cat)
        .unwrap_or(Category::Other)
}
