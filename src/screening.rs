// Screening orchestrator: extract, filter, keep the matches
use crate::config::MAX_DOCUMENTS;
use crate::filter::filter_text;
use crate::pdf_extraction::extract_document;
use crate::types::{
    MatchResult, Result, ScreeningRun, SearchSpec, SkippedDocument, SourceDocument, TriageError,
};

/// Checks the batch preconditions the host is expected to enforce before
/// calling [`screen`]: at most [`MAX_DOCUMENTS`] files, at least one file,
/// and at least one non-empty search term.
pub fn validate_batch(documents: &[SourceDocument], spec: &SearchSpec) -> Result<()> {
    if documents.len() > MAX_DOCUMENTS {
        return Err(TriageError::TooManyDocuments {
            count: documents.len(),
            limit: MAX_DOCUMENTS,
        });
    }
    if documents.is_empty() || !spec.has_searchable_term() {
        return Err(TriageError::InvalidSearch(
            "upload PDF files and enter at least one search term".to_string(),
        ));
    }
    Ok(())
}

/// Screens every document in input order. Documents that cannot be parsed
/// are recorded in `skipped` and do not stop the run.
pub fn screen<'a>(documents: &'a [SourceDocument], spec: &SearchSpec) -> ScreeningRun<'a> {
    let mut run = ScreeningRun {
        terms: spec.terms().to_vec(),
        screened: documents.len(),
        matches: Vec::new(),
        skipped: Vec::new(),
    };

    for document in documents {
        match screen_document(document, spec) {
            Ok(Some(result)) => {
                tracing::debug!(
                    file = %document.filename,
                    sentences = result.matched_sentences.len(),
                    "document matched"
                );
                run.matches.push(result);
            }
            Ok(None) => {
                tracing::debug!(file = %document.filename, "no matching sentences");
            }
            Err(e) => {
                tracing::warn!("Skipping '{}': {}", document.filename, e);
                run.skipped.push(SkippedDocument {
                    filename: document.filename.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    tracing::info!(
        screened = run.screened,
        matched = run.matches.len(),
        skipped = run.skipped.len(),
        "screening finished"
    );
    run
}

/// Runs extraction and filtering for one document.
pub fn screen_document<'a>(
    document: &'a SourceDocument,
    spec: &SearchSpec,
) -> Result<Option<MatchResult<'a>>> {
    let text = extract_document(document)?;
    let outcome = filter_text(&text, spec);
    if !outcome.matched() {
        return Ok(None);
    }
    Ok(Some(MatchResult {
        filename: &document.filename,
        content: &document.content,
        matched_sentences: outcome.matched_sentences,
        term_counts: outcome.term_counts,
    }))
}
