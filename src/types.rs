use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

// ---------------------------------------------------------------------------
// Fixed vocabularies
// ---------------------------------------------------------------------------

/// Sportsbooks carried by the page. Order here is both the melt iteration
/// order and the output column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sportsbook {
    Draftkings,
    Fanduel,
    Mgm,
    Pointsbet,
}

impl Sportsbook {
    pub const ALL: [Sportsbook; 4] = [
        Sportsbook::Draftkings,
        Sportsbook::Fanduel,
        Sportsbook::Mgm,
        Sportsbook::Pointsbet,
    ];

    /// Index into the per-row odds slots.
    pub fn slot(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Sportsbook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Sportsbook::Draftkings => "draftkings",
            Sportsbook::Fanduel => "fanduel",
            Sportsbook::Mgm => "mgm",
            Sportsbook::Pointsbet => "pointsbet",
        };
        write!(f, "{s}")
    }
}

/// Prop codes as they appear inside the page's field names.
pub const PROPS: [&str; 7] = [
    "pts",
    "reb",
    "ast",
    "ptsrebast",
    "ptsreb",
    "ptsast",
    "rebast",
];

/// Display name for a prop code. Codes outside the fixed mapping pass
/// through verbatim.
pub fn prop_display_name(code: &str) -> &str {
    match code {
        "pts" => "Points",
        "reb" => "Rebounds",
        "ast" => "Assists",
        "ptsrebast" => "Pts+Rebs+Asts",
        "ptsreb" => "Pts+Rebs",
        "ptsast" => "Pts+Asts",
        "rebast" => "Rebs+Asts",
        other => other,
    }
}

/// Over/Under side of a line. Over orders before Under, which matches the
/// lexicographic order of the labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Over,
    Under,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Over, Side::Under];

    /// Suffix used in the page's field names (`draftkings_ptsOver`).
    pub fn field_suffix(self) -> &'static str {
        match self {
            Side::Over => "Over",
            Side::Under => "Under",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.field_suffix())
    }
}

// ---------------------------------------------------------------------------
// Odds values
// ---------------------------------------------------------------------------

/// A single posted line. The page mixes numeric and string odds; both are
/// carried verbatim. "No line" is `Option<Odds>::None`, never a NaN.
#[derive(Debug, Clone, PartialEq)]
pub enum Odds {
    Price(f64),
    Text(String),
}

impl Odds {
    /// Read an odds field out of raw JSON. Null, missing, empty and the
    /// literal string "NaN" all mean the book has no line.
    pub fn from_field(value: Option<&Value>) -> Option<Odds> {
        match value {
            Some(Value::Number(n)) => n.as_f64().map(Odds::Price),
            Some(Value::String(s)) if s.is_empty() || s == "NaN" => None,
            Some(Value::String(s)) => Some(Odds::Text(s.clone())),
            _ => None,
        }
    }
}

impl std::fmt::Display for Odds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Odds::Price(p) => write!(f, "{p}"),
            Odds::Text(s) => write!(f, "{s}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Pipeline rows
// ---------------------------------------------------------------------------

/// One entry of the extracted data blob: player identity plus a flattened
/// map of the per-(sportsbook, prop, side) odds fields.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "firstName", default)]
    pub first_name: String,
    #[serde(rename = "lastName", default)]
    pub last_name: String,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub opp: String,
    #[serde(flatten)]
    pub fields: HashMap<String, Value>,
}

impl RawRecord {
    /// Full player name. First/last are not carried past this point.
    pub fn player_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Long form: one row per (player, prop, sportsbook, side).
#[derive(Debug, Clone)]
pub struct LongRow {
    pub player_name: String,
    pub team: String,
    pub opp: String,
    pub prop: &'static str,
    pub sportsbook: Sportsbook,
    pub side: Side,
    pub odds: Option<Odds>,
}

/// Wide form: one row per (player, opp, prop, side) with one odds slot per
/// sportsbook, indexed by `Sportsbook::slot`.
#[derive(Debug, Clone, PartialEq)]
pub struct WideRow {
    pub player_name: String,
    pub opp: String,
    pub prop: String,
    pub side: Side,
    pub odds: [Option<Odds>; Sportsbook::ALL.len()],
}
