//! Candidate classification against the target company.

use analysis_core::{extract_json, Oracle};
use serde_json::Value;
use tracing::{info, warn};

use crate::prompts::{classification_prompt, MAX_CANDIDATES};
use crate::types::ClassificationEntry;

/// The outcome of one classification call.
#[derive(Debug, Clone)]
pub struct Classification {
    pub verified: Vec<ClassificationEntry>,
    pub crosscheck: Vec<ClassificationEntry>,
    pub reasoning: String,
}

const FALLBACK_REASONING: &str = "Error during classification, fallback to cross-check.";

/// Classify candidates by competitive relevance to the target company.
///
/// Candidates are sorted lexicographically and capped at
/// [`MAX_CANDIDATES`] before the oracle sees them, so any truncation is
/// reproducible. This function never fails: an oracle error or an
/// unusable reply degrades to an all-crosscheck result with no scores.
pub async fn classify_candidates(
    oracle: &dyn Oracle,
    mut candidates: Vec<String>,
    target_company: &str,
) -> Classification {
    candidates.sort();
    if candidates.len() > MAX_CANDIDATES {
        warn!(
            total = candidates.len(),
            cap = MAX_CANDIDATES,
            "candidate list over cap, truncating for classification"
        );
        candidates.truncate(MAX_CANDIDATES);
    }

    info!(
        count = candidates.len(),
        target = %target_company,
        "classifying candidates"
    );

    let prompt = classification_prompt(&candidates, target_company);

    let reply = match oracle.generate(&prompt).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!(error = %e, "classification oracle call failed");
            return fallback(candidates);
        }
    };

    let payload = match extract_json(&reply, &["verified_competitors", "to_crosscheck"]) {
        Ok(payload) => payload,
        Err(e) => {
            warn!(error = %e, "classification reply was not usable");
            return fallback(candidates);
        }
    };

    let mut verified = entries_from(payload.get("verified_competitors"));
    let mut crosscheck = entries_from(payload.get("to_crosscheck"));

    // The oracle is told to sort descending but does not always comply.
    verified.sort_by(|a, b| b.score.cmp(&a.score));
    crosscheck.sort_by(|a, b| b.score.cmp(&a.score));

    let reasoning = payload
        .get("reasoning")
        .and_then(|value| value.as_str())
        .unwrap_or_default()
        .to_string();

    Classification {
        verified,
        crosscheck,
        reasoning,
    }
}

fn fallback(candidates: Vec<String>) -> Classification {
    Classification {
        verified: Vec::new(),
        crosscheck: candidates
            .into_iter()
            .map(|name| ClassificationEntry {
                name,
                score: None,
                reason: None,
            })
            .collect(),
        reasoning: FALLBACK_REASONING.to_string(),
    }
}

fn entries_from(value: Option<&Value>) -> Vec<ClassificationEntry> {
    value
        .and_then(|v| v.as_array())
        .map(|items| items.iter().filter_map(entry_from_value).collect())
        .unwrap_or_default()
}

fn entry_from_value(value: &Value) -> Option<ClassificationEntry> {
    let name = value.get("name")?.as_str()?.to_string();
    let score = value.get("score").and_then(score_from_value);
    let reason = value
        .get("reason")
        .and_then(|v| v.as_str())
        .map(str::to_string);

    Some(ClassificationEntry {
        name,
        score,
        reason,
    })
}

fn score_from_value(value: &Value) -> Option<u32> {
    if let Some(n) = value.as_u64() {
        return Some(n.min(100) as u32);
    }
    value.as_f64().map(|n| n.clamp(0.0, 100.0).round() as u32)
}
