//! Bounded text context assembly for the extraction oracle.

use tracing::debug;

use crate::loader::Sheet;

/// Hard character budget for one extraction context.
///
/// Sized for a 1M-token input window at roughly four characters per
/// token, with a safety margin.
pub const MAX_CONTEXT_CHARS: usize = 3_200_000;

const PREAMBLE: &str = "Below is data from an Excel file containing company information:\n\n";
const TRUNCATION_MARKER: &str = "\n... (truncated due to size limits)";

/// Render the selected sheets into one bounded text blob.
///
/// Sheets are appended in declared order, each as a header line plus a
/// tab-separated rendering of every row. A sheet that would blow the
/// budget is cut to the remaining room and marked, and every later sheet
/// is dropped. The assembled text is hard-truncated to the budget
/// afterwards so the bound holds even if the per-sheet accounting
/// drifts. Character counts, not bytes, so the cut is safe for
/// multi-byte names.
pub fn build_context(sheets: &[&Sheet], max_chars: usize) -> String {
    let marker_chars = TRUNCATION_MARKER.chars().count();
    let mut context = String::from(PREAMBLE);
    let mut used = PREAMBLE.chars().count();

    for sheet in sheets {
        let header = format!("=== SHEET: {} ===\n", sheet.name);
        let header_chars = header.chars().count();
        let body = render_rows(&sheet.rows);
        let body_chars = body.chars().count();

        if used + header_chars + body_chars + 2 > max_chars {
            let remaining = max_chars.saturating_sub(used + header_chars + marker_chars + 2);
            if remaining == 0 {
                debug!(sheet = %sheet.name, "context budget exhausted, dropping sheet");
                break;
            }
            context.push_str(&header);
            context.push_str(&truncate_chars(&body, remaining));
            context.push_str(TRUNCATION_MARKER);
            context.push_str("\n\n");
            break;
        }

        context.push_str(&header);
        context.push_str(&body);
        context.push_str("\n\n");
        used += header_chars + body_chars + 2;
    }

    // Hard cap regardless of the accounting above.
    if context.chars().count() > max_chars {
        context = truncate_chars(&context, max_chars);
    }

    debug!(chars = context.chars().count(), "assembled extraction context");
    context
}

fn render_rows(rows: &[Vec<String>]) -> String {
    rows.iter()
        .map(|row| row.join("\t"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
