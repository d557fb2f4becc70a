// pdf-triage: screen PDFs for sentences matching boolean term searches
pub mod archive;
pub mod config;
pub mod filter;
pub mod pdf_extraction;
pub mod report;
pub mod screening;
pub mod search_form;
pub mod types;

pub use archive::build_archive;
pub use filter::{filter_text, FilterOutcome};
pub use report::build_report;
pub use screening::{screen, validate_batch};
pub use search_form::SearchForm;
pub use types::{
    Connector, MatchResult, Result, ScreeningRun, SearchSpec, SkippedDocument, SourceDocument,
    TermCounts, TriageError,
};
