use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::types::{Sportsbook, WideRow};

/// Serialize the pivoted table to a CSV file at `path`, header row first,
/// no index column. An existing file is overwritten.
pub fn write_csv(path: &Path, rows: &[WideRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    write_rows(&mut writer, rows)?;
    writer.flush()?;
    Ok(())
}

fn write_rows<W: Write>(writer: &mut csv::Writer<W>, rows: &[WideRow]) -> Result<()> {
    let mut header = vec![
        "PlayerName".to_string(),
        "opp".to_string(),
        "Prop".to_string(),
        "Over_Under".to_string(),
    ];
    header.extend(Sportsbook::ALL.iter().map(|b| b.to_string()));
    writer.write_record(&header)?;

    for row in rows {
        let mut record = vec![
            row.player_name.clone(),
            row.opp.clone(),
            row.prop.clone(),
            row.side.to_string(),
        ];
        // Absent odds serialize as an empty field.
        record.extend(
            row.odds
                .iter()
                .map(|odds| odds.as_ref().map(|o| o.to_string()).unwrap_or_default()),
        );
        writer.write_record(&record)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Odds, Side};

    fn row(prop: &str, side: Side, odds: [Option<Odds>; 4]) -> WideRow {
        WideRow {
            player_name: "A B".to_string(),
            opp: "Y".to_string(),
            prop: prop.to_string(),
            side,
            odds,
        }
    }

    fn render(rows: &[WideRow]) -> String {
        let mut writer = csv::Writer::from_writer(Vec::new());
        write_rows(&mut writer, rows).unwrap();
        String::from_utf8(writer.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn header_lists_sportsbooks_after_fixed_columns() {
        let out = render(&[]);
        assert_eq!(
            out,
            "PlayerName,opp,Prop,Over_Under,draftkings,fanduel,mgm,pointsbet\n"
        );
    }

    #[test]
    fn absent_odds_become_empty_fields() {
        let out = render(&[row(
            "Points",
            Side::Over,
            [Some(Odds::Price(-110.0)), Some(Odds::Price(-105.0)), None, None],
        )]);
        let mut lines = out.lines();
        lines.next();
        assert_eq!(lines.next(), Some("A B,Y,Points,Over,-110,-105,,"));
    }

    #[test]
    fn string_odds_write_verbatim() {
        let out = render(&[row(
            "Rebounds",
            Side::Under,
            [None, Some(Odds::Text("+100".to_string())), None, None],
        )]);
        assert!(out.ends_with("A B,Y,Rebounds,Under,,+100,,\n"), "got {out:?}");
    }

    #[test]
    fn write_csv_overwrites_existing_file() {
        let path = std::env::temp_dir().join("props_writer_overwrite_test.csv");
        write_csv(&path, &[row("Points", Side::Over, Default::default())]).unwrap();
        write_csv(&path, &[]).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "PlayerName,opp,Prop,Over_Under,draftkings,fanduel,mgm,pointsbet\n"
        );
        std::fs::remove_file(&path).unwrap();
    }
}
