//! Per-file company extraction via the oracle.

use std::collections::HashSet;

use analysis_core::{extract_json, Oracle};
use tracing::{debug, warn};
use workbook::{build_context, select_sheets, Workbook, MAX_CONTEXT_CHARS};

use crate::prompts;

/// Run the extraction oracle over a loaded workbook.
///
/// Returns the set of company names, or `None` when the oracle produced
/// no usable result: a failed call, an unparseable reply, or an empty
/// company list. The caller records all three the same way.
pub async fn extract_companies(
    oracle: &dyn Oracle,
    workbook: &Workbook,
    target_company: &str,
) -> Option<HashSet<String>> {
    let selected = select_sheets(&workbook.sheet_names());
    let sheets: Vec<_> = selected
        .iter()
        .filter_map(|name| workbook.sheet(name))
        .collect();

    let context = build_context(&sheets, MAX_CONTEXT_CHARS);
    let prompt = prompts::extraction_prompt(&context, target_company);

    let reply = match oracle.generate(&prompt).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!(error = %e, "extraction oracle call failed");
            return None;
        }
    };

    let payload = match extract_json(&reply, &["companies"]) {
        Ok(payload) => payload,
        Err(e) => {
            warn!(error = %e, "extraction reply was not usable");
            return None;
        }
    };

    let companies: HashSet<String> = payload
        .get("companies")
        .and_then(|value| value.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    debug!(count = companies.len(), "extracted companies");

    if companies.is_empty() {
        None
    } else {
        Some(companies)
    }
}
