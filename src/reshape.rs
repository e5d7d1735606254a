use std::collections::BTreeMap;

use crate::types::{LongRow, Odds, RawRecord, Side, Sportsbook, WideRow, prop_display_name, PROPS};

// ---------------------------------------------------------------------------
// Field table
// ---------------------------------------------------------------------------

/// One odds field of a raw record, addressed by its typed coordinates.
#[derive(Debug, Clone)]
pub struct OddsColumn {
    pub sportsbook: Sportsbook,
    pub prop: &'static str,
    pub side: Side,
    pub field: String,
}

/// Build the full (prop, sportsbook, side) → field-name table once, from
/// the two fixed vocabularies. Field names follow the page's
/// `{sportsbook}_{prop}{Side}` convention, e.g. `draftkings_ptsOver`.
pub fn odds_columns() -> Vec<OddsColumn> {
    let mut columns = Vec::with_capacity(PROPS.len() * Sportsbook::ALL.len() * Side::ALL.len());
    for prop in PROPS {
        for sportsbook in Sportsbook::ALL {
            for side in Side::ALL {
                columns.push(OddsColumn {
                    sportsbook,
                    prop,
                    side,
                    field: format!("{sportsbook}_{prop}{}", side.field_suffix()),
                });
            }
        }
    }
    columns
}

// ---------------------------------------------------------------------------
// Melt
// ---------------------------------------------------------------------------

/// Flatten records into long form: one row per record × field-table entry.
/// Every entry yields a row; a missing or null source field becomes an
/// absent odds value, not a dropped row.
pub fn melt(records: &[RawRecord], columns: &[OddsColumn]) -> Vec<LongRow> {
    let mut rows = Vec::with_capacity(records.len() * columns.len());
    for record in records {
        let player_name = record.player_name();
        for column in columns {
            rows.push(LongRow {
                player_name: player_name.clone(),
                team: record.team.clone(),
                opp: record.opp.clone(),
                prop: column.prop,
                sportsbook: column.sportsbook,
                side: column.side,
                odds: Odds::from_field(record.fields.get(&column.field)),
            });
        }
    }
    rows
}

// ---------------------------------------------------------------------------
// Pivot
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct GroupKey {
    player_name: String,
    team: String,
    opp: String,
    prop: &'static str,
    side: Side,
}

/// Pivot long rows back to wide: one row per (player, team, opp, prop,
/// side) group, one odds slot per sportsbook. Each slot takes the first
/// non-absent value seen for that sportsbook in melt order; groups whose
/// values are all absent still appear. Output is in ascending order of the
/// full group key. The team attribute only participates in grouping and is
/// not carried into the result.
pub fn pivot(rows: Vec<LongRow>) -> Vec<WideRow> {
    let mut groups: BTreeMap<GroupKey, [Option<Odds>; Sportsbook::ALL.len()]> = BTreeMap::new();

    for row in rows {
        let key = GroupKey {
            player_name: row.player_name,
            team: row.team,
            opp: row.opp,
            prop: row.prop,
            side: row.side,
        };
        let slots = groups.entry(key).or_default();
        let slot = &mut slots[row.sportsbook.slot()];
        if slot.is_none() {
            *slot = row.odds;
        }
    }

    groups
        .into_iter()
        .map(|(key, odds)| WideRow {
            player_name: key.player_name,
            opp: key.opp,
            prop: key.prop.to_string(),
            side: key.side,
            odds,
        })
        .collect()
}

/// Swap prop codes for their display names. Codes outside the fixed
/// mapping stay as-is.
pub fn relabel_props(rows: &mut [WideRow]) {
    for row in rows {
        row.prop = prop_display_name(&row.prop).to_string();
    }
}
