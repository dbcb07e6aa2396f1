// src/table/columns.rs
//
// Per-column display metadata, derived from the keys of row zero.
// Label, width and highlight come from the static tables below.

use super::{StatsRow, order};

/// How the renderer treats a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnRole {
    /// `no`: position in the server's ordering; carries the medal.
    Rank,
    /// Player / batsman names.
    Name,
    Stat,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnConfig {
    pub key: String,
    pub label: String,
    /// Long form shown on hover ("Strike Rate" for `sr`).
    pub title: Option<String>,
    /// Minimum width in px; columns may grow to fit content.
    pub width: u16,
    pub highlight: bool,
    pub role: ColumnRole,
    /// Display position after reordering.
    pub sort_rank: usize,
}

impl ColumnConfig {
    pub fn for_key(key: &str) -> Self {
        let (label, title) = label_for(key);
        Self {
            key: s!(key),
            label,
            title,
            width: width_for(key),
            highlight: is_highlight(key),
            role: role_for(key),
            sort_rank: 0,
        }
    }

    /// Hover text: the long title when there is one, else the label.
    pub fn tooltip(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.label)
    }
}

pub const RANK_KEY: &str = "no";
pub const DEFAULT_WIDTH: u16 = 70;

pub static LABELS: &[(&str, &str, Option<&str>)] = &[
    ("no", "#", None),
    ("name", "Player", None),
    ("last_team", "Team", None),
    ("mts", "M", Some("Matches")),
    ("inns", "Inn", Some("Innings")),
    ("nos", "NO", Some("Not Outs")),
    ("runs", "Runs", None),
    ("hs", "HS", Some("Highest Score")),
    ("avg", "Avg", Some("Average")),
    ("sr", "SR", Some("Strike Rate")),
    ("100s", "100s", Some("Centuries")),
    ("50s", "50s", Some("Half Centuries")),
    ("0s", "0s", Some("Ducks")),
    ("4s", "4s", Some("Fours")),
    ("6s", "6s", Some("Sixes")),
    ("balls", "Balls", None),
    ("overs", "Overs", None),
    ("mdns", "Mdns", Some("Maidens")),
    ("wkts", "Wkts", Some("Wickets")),
    ("econ", "Econ", Some("Economy Rate")),
    ("bb", "BB", Some("Best Bowling")),
    ("5w", "5W", Some("5 Wicket Hauls")),
    ("4w", "4W", Some("4 Wicket Hauls")),
    ("catches", "Ct", Some("Catches")),
    ("stumpings", "St", Some("Stumpings")),
    ("runouts", "RO", Some("Run Outs")),
    ("total", "Total", None),
    ("opposition", "Opposition", None),
    ("venue", "Venue", None),
    ("date", "Date", None),
    ("season", "Season", None),
    ("wkt", "Wkt", Some("Wicket")),
    ("bat1", "Batsman 1", None),
    ("bat2", "Batsman 2", None),
    ("team", "Team", None),
    ("score", "Score", None),
    ("wins", "Wins", None),
    ("losses", "Losses", None),
    ("points", "Points", None),
    ("position", "Pos", Some("Position")),
    ("bat_avg", "Bat Avg", Some("Batting Average")),
    ("bowl_avg", "Bowl Avg", Some("Bowling Average")),
];

pub static WIDTH_EXACT: &[(&str, u16)] = &[
    ("no", 50),
    ("name", 160),
    ("player", 160),
    ("bat1", 150),
    ("bat2", 150),
    ("last_team", 130),
    ("team", 130),
    ("opposition", 160),
    ("venue", 150),
    ("date", 100),
    ("season", 80),
    ("hs", 75),
    ("bb", 75),
    ("score", 80),
    ("total", 80),
    ("points", 80),
];

pub static WIDTH_GROUPS: &[(&[&str], u16)] = &[
    (&["mts", "inns", "nos", "4s", "6s", "100s", "50s", "0s", "5w", "4w", "wkt"], 55),
    (&["avg", "sr", "econ", "bat_avg", "bowl_avg"], 70),
    (&["runs", "wkts", "balls", "overs", "catches", "stumpings", "runouts"], 65),
];

pub static HIGHLIGHT_KEYS: &[&str] = &["runs", "wkts", "avg", "total", "score", "points", "catches"];

pub static NAME_KEYS: &[&str] = &["name", "bat1", "bat2", "player"];

/// Label and optional long title; unknown keys get a generated label.
pub fn label_for(key: &str) -> (String, Option<String>) {
    match LABELS.iter().find(|(k, _, _)| *k == key) {
        Some((_, label, title)) => (s!(*label), title.map(String::from)),
        None => (generated_label(key), None),
    }
}

/// `last_matchDate` → `Last match Date`
pub fn generated_label(key: &str) -> String {
    let mut spaced = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if ch == '_' {
            spaced.push(' ');
        } else if ch.is_ascii_uppercase() && i > 0 {
            spaced.push(' ');
            spaced.push(ch);
        } else {
            spaced.push(ch);
        }
    }

    let trimmed = spaced.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => s!(),
    }
}

pub fn width_for(key: &str) -> u16 {
    if let Some((_, w)) = WIDTH_EXACT.iter().find(|(k, _)| *k == key) {
        return *w;
    }
    WIDTH_GROUPS
        .iter()
        .find(|(keys, _)| keys.contains(&key))
        .map(|(_, w)| *w)
        .unwrap_or(DEFAULT_WIDTH)
}

pub fn is_highlight(key: &str) -> bool {
    HIGHLIGHT_KEYS.contains(&key)
}

pub fn role_for(key: &str) -> ColumnRole {
    if key == RANK_KEY {
        ColumnRole::Rank
    } else if NAME_KEYS.contains(&key) {
        ColumnRole::Name
    } else {
        ColumnRole::Stat
    }
}

/// Columns of row zero in its own key order. Empty for no rows.
pub fn discover(rows: &[StatsRow]) -> Vec<ColumnConfig> {
    let Some(first) = rows.first() else {
        return Vec::new();
    };
    first
        .keys()
        .enumerate()
        .map(|(i, key)| ColumnConfig { sort_rank: i, ..ColumnConfig::for_key(key) })
        .collect()
}

/// Ordered column descriptors for one result set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableSchema {
    columns: Vec<ColumnConfig>,
}

impl TableSchema {
    pub fn infer(rows: &[StatsRow]) -> Self {
        Self { columns: order::reorder(discover(rows)) }
    }

    pub fn columns(&self) -> &[ColumnConfig] {
        &self.columns
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.key.as_str())
    }

    pub fn labels(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.label.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
