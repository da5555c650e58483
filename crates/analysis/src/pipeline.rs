//! End-to-end orchestration of one analysis request.

use std::collections::HashSet;
use std::sync::Arc;

use analysis_core::{FileSession, FileSource, Oracle};
use tracing::{info, warn};
use workbook::load_workbook;

use crate::cache::{cache_key, AnalysisCache};
use crate::classify::classify_candidates;
use crate::error::AnalysisError;
use crate::extract::extract_companies;
use crate::references::extract_file_references;
use crate::types::{AnalysisReport, FailureRecord, FileReference};

/// Reason recorded when the oracle produced no usable extraction result.
const NO_COMPANIES: &str = "No companies extracted";

/// The analysis pipeline with its injected collaborators.
pub struct Analyzer {
    oracle: Arc<dyn Oracle>,
    files: Arc<dyn FileSource>,
    cache: Arc<AnalysisCache>,
}

impl Analyzer {
    /// Create a new Analyzer.
    pub fn new(
        oracle: Arc<dyn Oracle>,
        files: Arc<dyn FileSource>,
        cache: Arc<AnalysisCache>,
    ) -> Self {
        Self {
            oracle,
            files,
            cache,
        }
    }

    /// Run the full pipeline for one transcript.
    ///
    /// Transcripts without file references short-circuit to an empty
    /// report before the cache or the file source is touched. Per-file
    /// problems are recorded and skipped; the only fatal error is a
    /// failure to open the file source. Reports are cached only when at
    /// least one file actually yielded companies.
    pub async fn analyze(
        &self,
        transcript: &str,
        target_company: &str,
    ) -> Result<AnalysisReport, AnalysisError> {
        let references = extract_file_references(transcript);
        if references.is_empty() {
            info!(target = %target_company, "no file references in transcript");
            return Ok(empty_report(target_company));
        }

        let full_paths: Vec<String> = references.iter().map(|r| r.full_path.clone()).collect();
        let key = cache_key(target_company, &full_paths);

        if let Some(report) = self.cache.get(&key).await {
            info!(target = %target_company, key = %key, "cache hit");
            return Ok(report);
        }
        info!(target = %target_company, key = %key, "cache miss, processing");

        let session = self.files.open().await?;

        let mut candidates: HashSet<String> = HashSet::new();
        let mut failed_files = Vec::new();
        let mut processed = 0usize;

        for reference in &references {
            match self
                .process_file(session.as_ref(), reference, target_company)
                .await
            {
                Ok(companies) => {
                    candidates.extend(companies);
                    processed += 1;
                }
                Err(error) => {
                    warn!(path = %reference.relative_path, error = %error, "file failed");
                    failed_files.push(FailureRecord {
                        path: reference.relative_path.clone(),
                        error,
                    });
                }
            }
        }

        let candidate_list: Vec<String> = candidates.into_iter().collect();
        let classification =
            classify_candidates(self.oracle.as_ref(), candidate_list, target_company).await;

        let report = AnalysisReport {
            target_company: target_company.to_string(),
            verified_count: classification.verified.len(),
            crosscheck_count: classification.crosscheck.len(),
            verified_competitors: classification.verified,
            to_crosscheck: classification.crosscheck,
            reasoning: classification.reasoning,
            files_processed: processed,
            total_files_found: references.len(),
            failed_files,
            cached: false,
        };

        if processed > 0 {
            self.cache.put(&key, report.clone()).await;
            info!(key = %key, "cached analysis result");
        }

        Ok(report)
    }

    async fn process_file(
        &self,
        session: &dyn FileSession,
        reference: &FileReference,
        target_company: &str,
    ) -> Result<HashSet<String>, String> {
        let bytes = session
            .download(&reference.relative_path)
            .await
            .map_err(|e| e.to_string())?;

        let workbook =
            load_workbook(&bytes, &reference.relative_path).map_err(|e| e.to_string())?;

        extract_companies(self.oracle.as_ref(), &workbook, target_company)
            .await
            .ok_or_else(|| NO_COMPANIES.to_string())
    }
}

fn empty_report(target_company: &str) -> AnalysisReport {
    AnalysisReport {
        target_company: target_company.to_string(),
        verified_competitors: Vec::new(),
        to_crosscheck: Vec::new(),
        verified_count: 0,
        crosscheck_count: 0,
        reasoning: "No file paths found in Copilot response.".to_string(),
        files_processed: 0,
        total_files_found: 0,
        failed_files: Vec::new(),
        cached: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use analysis_core::{async_trait, SourceError};
    use mock_oracle::{FailingOracle, SequenceOracle};

    /// File source serving canned bytes, with per-path failures and an
    /// open counter.
    struct StubSource {
        files: HashMap<String, Result<Vec<u8>, String>>,
        opens: Arc<AtomicUsize>,
        auth_error: Option<String>,
    }

    impl StubSource {
        fn new(entries: Vec<(&str, Result<Vec<u8>, &str>)>) -> Self {
            Self {
                files: entries
                    .into_iter()
                    .map(|(path, outcome)| {
                        (path.to_string(), outcome.map_err(|m| m.to_string()))
                    })
                    .collect(),
                opens: Arc::new(AtomicUsize::new(0)),
                auth_error: None,
            }
        }

        fn failing_auth(message: &str) -> Self {
            Self {
                files: HashMap::new(),
                opens: Arc::new(AtomicUsize::new(0)),
                auth_error: Some(message.to_string()),
            }
        }

        fn opens(&self) -> Arc<AtomicUsize> {
            Arc::clone(&self.opens)
        }
    }

    struct StubSession {
        files: HashMap<String, Result<Vec<u8>, String>>,
    }

    #[async_trait]
    impl FileSource for StubSource {
        async fn open(&self) -> Result<Box<dyn FileSession>, SourceError> {
            self.opens.fetch_add(1, Ordering::SeqCst);
            if let Some(message) = &self.auth_error {
                return Err(SourceError::Auth(message.clone()));
            }
            Ok(Box::new(StubSession {
                files: self.files.clone(),
            }))
        }
    }

    #[async_trait]
    impl FileSession for StubSession {
        async fn download(&self, relative_path: &str) -> Result<Vec<u8>, SourceError> {
            match self.files.get(relative_path) {
                Some(Ok(bytes)) => Ok(bytes.clone()),
                Some(Err(message)) => Err(SourceError::Download(message.clone())),
                None => Err(SourceError::NotFound(relative_path.to_string())),
            }
        }
    }

    fn analyzer(
        oracle: impl Oracle + 'static,
        source: StubSource,
        cache: Arc<AnalysisCache>,
    ) -> Analyzer {
        Analyzer::new(Arc::new(oracle), Arc::new(source), cache)
    }

    #[tokio::test]
    async fn test_empty_transcript_short_circuits() {
        let source = StubSource::new(Vec::new());
        let opens = source.opens();
        let cache = Arc::new(AnalysisCache::default());
        let pipeline = analyzer(FailingOracle::default(), source, Arc::clone(&cache));

        let report = pipeline
            .analyze("nothing references a spreadsheet here", "Initech")
            .await
            .unwrap();

        assert_eq!(report.total_files_found, 0);
        assert_eq!(report.files_processed, 0);
        assert_eq!(report.reasoning, "No file paths found in Copilot response.");
        assert!(!report.cached);
        // Neither the authenticator nor the cache was touched.
        assert_eq!(opens.load(Ordering::SeqCst), 0);
        assert_eq!(cache.stats().await.cache_size, 0);
    }

    #[tokio::test]
    async fn test_partial_failure_is_isolated() {
        let transcript = "Full Path: site/Shared Documents/one.csv\n\
                          Full Path: site/Shared Documents/two.csv\n\
                          Full Path: site/Shared Documents/three.csv";
        let source = StubSource::new(vec![
            ("one.csv", Ok(b"Acme\nGlobex\n".to_vec())),
            ("two.csv", Err("connection reset by peer")),
            ("three.csv", Ok(b"Globex\nInitrode\n".to_vec())),
        ]);
        let cache = Arc::new(AnalysisCache::default());
        // Two extraction replies; the classification reply is unusable,
        // so the crosscheck fallback exposes the aggregated candidates.
        let oracle = SequenceOracle::new([
            r#"{"companies": ["Acme", "Globex"]}"#,
            r#"{"companies": ["Globex", "Initrode"]}"#,
            "no json in this reply",
        ]);
        let pipeline = analyzer(oracle, source, Arc::clone(&cache));

        let report = pipeline.analyze(transcript, "Initech").await.unwrap();

        assert_eq!(report.total_files_found, 3);
        assert_eq!(report.files_processed, 2);
        assert_eq!(report.failed_files.len(), 1);
        assert_eq!(report.failed_files[0].path, "two.csv");
        assert!(report.failed_files[0].error.contains("connection reset by peer"));

        // Union of the two surviving files, sorted by the classifier.
        let names: Vec<&str> = report
            .to_crosscheck
            .iter()
            .map(|entry| entry.name.as_str())
            .collect();
        assert_eq!(names, vec!["Acme", "Globex", "Initrode"]);
        assert!(report.verified_competitors.is_empty());
    }

    #[tokio::test]
    async fn test_unusable_extraction_is_recorded_as_no_companies() {
        let transcript = "Full Path: site/Shared Documents/one.csv";
        let source = StubSource::new(vec![("one.csv", Ok(b"Acme\n".to_vec()))]);
        let cache = Arc::new(AnalysisCache::default());
        let oracle = SequenceOracle::new([
            "nothing structured",
            r#"{"verified_competitors": [], "to_crosscheck": [], "reasoning": ""}"#,
        ]);
        let pipeline = analyzer(oracle, source, Arc::clone(&cache));

        let report = pipeline.analyze(transcript, "Initech").await.unwrap();

        assert_eq!(report.files_processed, 0);
        assert_eq!(report.failed_files.len(), 1);
        assert_eq!(report.failed_files[0].error, "No companies extracted");
    }

    #[tokio::test]
    async fn test_cache_hit_short_circuits_processing() {
        let transcript = "Full Path: site/Shared Documents/one.csv";
        let source = StubSource::new(vec![("one.csv", Ok(b"Acme,100\n".to_vec()))]);
        let opens = source.opens();
        let cache = Arc::new(AnalysisCache::default());
        // Exactly one extraction and one classification reply; a second
        // pass would exhaust the queue and fail loudly.
        let oracle = SequenceOracle::new([
            r#"{"companies": ["Acme"]}"#,
            r#"{"verified_competitors": [{"name": "Acme", "score": 90, "reason": "direct"}],
                "to_crosscheck": [], "reasoning": "ok"}"#,
        ]);
        let pipeline = analyzer(oracle, source, Arc::clone(&cache));

        let first = pipeline.analyze(transcript, "Initech").await.unwrap();
        assert!(!first.cached);
        assert_eq!(first.verified_count, 1);

        let second = pipeline.analyze(transcript, "Initech").await.unwrap();
        assert!(second.cached);
        assert_eq!(second.verified_count, 1);
        assert_eq!(opens.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fully_failed_request_is_not_cached() {
        let transcript = "Full Path: site/Shared Documents/one.csv";
        let source = StubSource::new(vec![("one.csv", Err("gone"))]);
        let cache = Arc::new(AnalysisCache::default());
        let pipeline = analyzer(FailingOracle::default(), source, Arc::clone(&cache));

        let report = pipeline.analyze(transcript, "Initech").await.unwrap();

        assert_eq!(report.files_processed, 0);
        assert_eq!(report.total_files_found, 1);
        assert!(report.to_crosscheck.is_empty());
        assert_eq!(cache.stats().await.cache_size, 0);
    }

    #[tokio::test]
    async fn test_auth_failure_is_fatal() {
        let transcript = "Full Path: site/Shared Documents/one.csv";
        let source = StubSource::failing_auth("tenant rejected the client");
        let cache = Arc::new(AnalysisCache::default());
        let pipeline = analyzer(FailingOracle::default(), source, Arc::clone(&cache));

        let err = pipeline.analyze(transcript, "Initech").await.unwrap_err();
        assert!(err.to_string().contains("tenant rejected the client"));
    }

    #[tokio::test]
    async fn test_unreadable_workbook_records_load_error() {
        let transcript = "Full Path: site/Shared Documents/broken.xlsx";
        let source = StubSource::new(vec![("broken.xlsx", Ok(b"not a zip archive".to_vec()))]);
        let cache = Arc::new(AnalysisCache::default());
        let oracle = SequenceOracle::new([
            r#"{"verified_competitors": [], "to_crosscheck": [], "reasoning": ""}"#,
        ]);
        let pipeline = analyzer(oracle, source, Arc::clone(&cache));

        let report = pipeline.analyze(transcript, "Initech").await.unwrap();

        assert_eq!(report.files_processed, 0);
        assert_eq!(report.failed_files.len(), 1);
        assert!(report.failed_files[0].error.contains("failed to read workbook"));
    }
}
