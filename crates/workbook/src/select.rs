//! Sheet selection heuristics.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

lazy_static! {
    // Matches "equity"/"trading"/"public" followed by anything then "comps",
    // or a bare "comps" token anywhere in the name.
    static ref COMPS_PATTERN: Regex =
        Regex::new(r"(?i)(equity|trading|public).*comps|comps").unwrap();
}

/// Number of leading sheets used when no name matches.
const FALLBACK_SHEETS: usize = 3;

/// Pick the sheets worth sending to the extraction oracle.
///
/// Sheet names are scanned in declared order; the first one matching the
/// comps pattern wins and is returned alone. Workbooks with no matching
/// sheet fall back to the first three sheets, so a non-empty workbook
/// never selects zero sheets.
pub fn select_sheets(sheet_names: &[String]) -> Vec<String> {
    for name in sheet_names {
        if COMPS_PATTERN.is_match(name) {
            debug!(sheet = %name, "found comps sheet");
            return vec![name.clone()];
        }
    }

    let fallback: Vec<String> = sheet_names.iter().take(FALLBACK_SHEETS).cloned().collect();
    debug!(
        count = fallback.len(),
        "no comps sheet, defaulting to leading sheets"
    );
    fallback
}
