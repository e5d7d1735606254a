use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use tracing::debug;

use crate::config::SCRIPT_MARKER;
use crate::error::{AppError, Result};
use crate::types::RawRecord;

static SCRIPT_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("script").unwrap());

/// The props table is inlined as a JS array literal: `data: [ ... ]`.
/// Greedy to the last `]` on the line, as the literal never spans lines.
static DATA_LITERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"data:\s*(\[.*\])").unwrap());

/// Pull every player record out of the page body.
///
/// Scans all `<script>` blocks whose text contains the marker token, parses
/// the data literal of each, and concatenates the results in encounter
/// order (no deduplication). Fails without partial results when the marker
/// is absent, no marker script carries a literal, or a literal is not
/// valid JSON.
pub fn extract_records(body: &str) -> Result<Vec<RawRecord>> {
    let document = Html::parse_document(body);

    let mut records = Vec::new();
    let mut marker_scripts = 0usize;
    let mut literals = 0usize;

    for script in document.select(&SCRIPT_SELECTOR) {
        let text: String = script.text().collect();
        if !text.contains(SCRIPT_MARKER) {
            continue;
        }
        marker_scripts += 1;

        let Some(caps) = DATA_LITERAL.captures(&text) else {
            continue;
        };
        literals += 1;

        let parsed: Vec<RawRecord> = serde_json::from_str(&caps[1]).map_err(|e| {
            AppError::Extraction(format!("data literal is not valid JSON: {e}"))
        })?;
        debug!("Parsed {} records from marker script", parsed.len());
        records.extend(parsed);
    }

    if marker_scripts == 0 {
        return Err(AppError::Extraction(format!(
            "no <script> block contains the marker token {SCRIPT_MARKER:?}"
        )));
    }
    if literals == 0 {
        return Err(AppError::Extraction(format!(
            "{marker_scripts} marker script(s) found, but none contains a data literal"
        )));
    }

    Ok(records)
}
