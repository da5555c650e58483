//! Prompt builders for the extraction and classification oracles.

/// Maximum candidates sent to one classification call.
///
/// Roughly 60K characters of names plus the prompt itself, well inside
/// the model's input window.
pub const MAX_CANDIDATES: usize = 2000;

/// Build the per-file extraction prompt.
///
/// The rendered sheet context comes first, then the target-company
/// framing, then the task and the JSON-only instruction.
pub fn extraction_prompt(context: &str, target_company: &str) -> String {
    let target_context = format!(
        "\nTARGET COMPANY CONTEXT: {target}\n\
         IMPORTANT: Use your knowledge of {target}'s industry, products, and market to filter the extracted companies.\n\
         Only extract companies that operate in the SAME or CLOSELY RELATED business as {target}.\n\
         Exclude companies from completely different industries or product categories.\n\n",
        target = target_company
    );

    format!(
        "{context}\n\n{target_context}TASK: Extract ALL company names from the data above that are potential competitors or comparable companies.\n\n\
         Instructions:\n\
         - Look for columns containing company names, targets, acquirers, sellers, or similar identifiers\n\
         - Extract only actual company names (exclude headers, totals, averages, summaries)\n\
         - Ignore entries like \"N/A\", \"TBD\", \"Others\", \"Mean\", \"Total\", \"Average\", \"Median\"\n\
         - Include ALL companies found in the spreadsheet\n\
         - Return the results as a JSON object with the following structure:\n\
         {{\n    \"companies\": [\"Company 1\", \"Company 2\", ...],\n    \"count\": <number of unique companies>\n}}\n\n\
         CRITICAL: Provide ONLY valid JSON response, no additional text, no markdown formatting, no explanations."
    )
}

/// Build the classification prompt for the aggregated candidate list.
///
/// The candidate list must already be sorted and capped by the caller;
/// the prompt pins the oracle to a closed world over exactly that list.
pub fn classification_prompt(candidates: &[String], target_company: &str) -> String {
    let candidate_json = serde_json::to_string_pretty(candidates).unwrap_or_default();

    format!(
        "You are a business analyst expert specializing in competitive analysis.\n\n\
         TARGET COMPANY: {target}\n\n\
         EXTRACTED COMPANIES CANDIDATES:\n{candidates}\n\n\
         TASK: Classify these candidates based on their competitive relationship with {target}.\n\n\
         RULES:\n\
         1. **STRICTLY** use ONLY the companies provided in the list above. DO NOT add any new companies.\n\
         2. Assign a **Confidence Score (0-100)** representing the strength of the competitive overlap.\n   \
         - 90-100: Direct competitor (same core products/services, same market).\n   \
         - 70-89: Strong competitor (significant overlap).\n   \
         - 50-69: Moderate/Indirect competitor or substitute.\n   \
         - <50: Low relevance or different industry.\n\n\
         CLASSIFICATION CATEGORIES:\n\
         1. **Verified Competitors**: Score >= 70. Direct/Strong competitors.\n\
         2. **To Cross-Check**: Score < 70. Indirect, potential, or unclear competitors.\n\n\
         RESPONSE FORMAT:\n\
         Return a JSON object with two lists. Each item must be an object containing \"name\" and \"score\".\n\
         Sort both lists by \"score\" in DESCENDING order.\n\n\
         {{\n    \"verified_competitors\": [\n        {{\"name\": \"Company A\", \"score\": 95, \"reason\": \"...\"}},\n        {{\"name\": \"Company B\", \"score\": 88, \"reason\": \"...\"}}\n    ],\n    \"to_crosscheck\": [\n        {{\"name\": \"Company C\", \"score\": 45, \"reason\": \"...\"}}\n    ],\n    \"reasoning\": \"Brief analysis of the industry context.\"\n}}",
        target = target_company,
        candidates = candidate_json
    )
}
