//! Wire types for analysis reports.

use serde::{Deserialize, Serialize};

/// A spreadsheet reference found in a transcript.
///
/// `relative_path` is `full_path` with the site prefix up to and
/// including the document-root marker stripped, ready for a drive
/// download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReference {
    pub full_path: String,
    pub relative_path: String,
}

/// One scored company judgment from the classification stage.
///
/// Fallback entries carry neither score nor reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// A file that could not be processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureRecord {
    pub path: String,
    pub error: String,
}

/// The full result of one analysis request.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub target_company: String,
    pub verified_competitors: Vec<ClassificationEntry>,
    pub to_crosscheck: Vec<ClassificationEntry>,
    pub verified_count: usize,
    pub crosscheck_count: usize,
    pub reasoning: String,
    pub files_processed: usize,
    pub total_files_found: usize,
    pub failed_files: Vec<FailureRecord>,
    pub cached: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_without_score_serializes_bare() {
        let entry = ClassificationEntry {
            name: "Acme".to_string(),
            score: None,
            reason: None,
        };

        let raw = serde_json::to_string(&entry).unwrap();
        assert_eq!(raw, r#"{"name":"Acme"}"#);
    }

    #[test]
    fn test_entry_with_score_serializes_fully() {
        let entry = ClassificationEntry {
            name: "Acme".to_string(),
            score: Some(92),
            reason: Some("same market".to_string()),
        };

        let raw = serde_json::to_string(&entry).unwrap();
        assert!(raw.contains("\"score\":92"));
        assert!(raw.contains("\"reason\":\"same market\""));
    }
}
