//! File-reference discovery in assistant transcripts.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::FileReference;

/// Marker that separates a site prefix from the drive-relative path.
const DOCUMENT_ROOT_MARKER: &str = "Shared Documents/";

lazy_static! {
    static ref FULL_PATH_PATTERN: Regex =
        Regex::new(r"(?i)Full Path:\s*(.+?\.(?:xlsx|xls|csv|pptx|pdf))").unwrap();
}

/// Extract unique file references from a transcript.
///
/// Paths are de-duplicated by full path with the first occurrence
/// winning, so report ordering follows the transcript. The relative
/// path strips everything up to and including the document-root marker
/// when present; otherwise it equals the full path.
pub fn extract_file_references(transcript: &str) -> Vec<FileReference> {
    let mut seen = HashSet::new();
    let mut references = Vec::new();

    for captures in FULL_PATH_PATTERN.captures_iter(transcript) {
        let full_path = captures[1].trim().to_string();
        if !seen.insert(full_path.clone()) {
            continue;
        }

        let relative_path = match full_path.split_once(DOCUMENT_ROOT_MARKER) {
            Some((_, rest)) => rest.to_string(),
            None => full_path.clone(),
        };

        references.push(FileReference {
            full_path,
            relative_path,
        });
    }

    references
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_and_strips_document_root() {
        let transcript =
            "See Full Path: https://corp.example.com/sites/deals/Shared Documents/Comps/Q1.xlsx for details";

        let references = extract_file_references(transcript);
        assert_eq!(references.len(), 1);
        assert_eq!(
            references[0].full_path,
            "https://corp.example.com/sites/deals/Shared Documents/Comps/Q1.xlsx"
        );
        assert_eq!(references[0].relative_path, "Comps/Q1.xlsx");
    }

    #[test]
    fn test_path_without_marker_is_unchanged() {
        let transcript = "Full Path: local/reports/targets.csv";

        let references = extract_file_references(transcript);
        assert_eq!(references[0].relative_path, "local/reports/targets.csv");
    }

    #[test]
    fn test_deduplicates_by_full_path() {
        let transcript = "Full Path: a/Shared Documents/one.xlsx\n\
                          Full Path: a/Shared Documents/two.xlsx\n\
                          Full Path: a/Shared Documents/one.xlsx";

        let references = extract_file_references(transcript);
        assert_eq!(references.len(), 2);
        assert_eq!(references[0].relative_path, "one.xlsx");
        assert_eq!(references[1].relative_path, "two.xlsx");
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let transcript = "full path: docs/Comps.XLSX";

        let references = extract_file_references(transcript);
        assert_eq!(references.len(), 1);
    }

    #[test]
    fn test_all_supported_extensions() {
        let transcript = "Full Path: a.xlsx Full Path: b.xls Full Path: c.csv \
                          Full Path: d.pptx Full Path: e.pdf Full Path: f.docx";

        let references = extract_file_references(transcript);
        let paths: Vec<&str> = references.iter().map(|r| r.full_path.as_str()).collect();
        assert_eq!(paths, vec!["a.xlsx", "b.xls", "c.csv", "d.pptx", "e.pdf"]);
    }

    #[test]
    fn test_no_references_yields_empty() {
        assert!(extract_file_references("nothing to see here").is_empty());
    }
}
