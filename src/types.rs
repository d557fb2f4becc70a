// Core types for pdf-triage
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

// Boolean operator between two consecutive search terms
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Connector {
    #[default]
    And,
    Or,
    Not,
}

impl Connector {
    /// Folds the presence of the next term onto the running inclusion flag.
    pub fn apply(self, include: bool, term_present: bool) -> bool {
        match self {
            Connector::And => include && term_present,
            Connector::Or => include || term_present,
            Connector::Not => include && !term_present,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Connector::And => "and",
            Connector::Or => "or",
            Connector::Not => "not",
        }
    }
}

impl fmt::Display for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Connector {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "and" => Ok(Connector::And),
            "or" => Ok(Connector::Or),
            "not" => Ok(Connector::Not),
            other => Err(TriageError::InvalidSearch(format!(
                "unknown connector '{}' (expected and, or, not)",
                other
            ))),
        }
    }
}

// Ordered search terms plus the connectors between them.
// Invariant: connectors.len() == terms.len() - 1
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchSpec {
    terms: Vec<String>,
    connectors: Vec<Connector>,
}

impl SearchSpec {
    pub fn new(terms: Vec<String>, connectors: Vec<Connector>) -> Result<Self> {
        if terms.is_empty() {
            return Err(TriageError::InvalidSearch(
                "at least one search term is required".to_string(),
            ));
        }
        if connectors.len() != terms.len() - 1 {
            return Err(TriageError::InvalidSearch(format!(
                "{} terms need {} connectors, got {}",
                terms.len(),
                terms.len() - 1,
                connectors.len()
            )));
        }
        Ok(Self { terms, connectors })
    }

    pub fn single(term: impl Into<String>) -> Self {
        Self {
            terms: vec![term.into()],
            connectors: Vec::new(),
        }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }

    pub fn has_searchable_term(&self) -> bool {
        self.terms.iter().any(|t| !t.is_empty())
    }
}

// One uploaded PDF. Owned by the caller, only read by the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub filename: String,
    pub content: Vec<u8>,
}

impl SourceDocument {
    pub fn new(filename: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }
}

/// Occurrence count per search term, kept in search-term order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermCounts(Vec<(String, usize)>);

impl TermCounts {
    /// Every term starts at zero. A repeated term keeps its first position.
    pub fn for_terms(terms: &[String]) -> Self {
        let mut counts = Self::default();
        for term in terms {
            counts.add(term, 0);
        }
        counts
    }

    pub fn add(&mut self, term: &str, n: usize) {
        match self.0.iter_mut().find(|(t, _)| t == term) {
            Some((_, count)) => *count += n,
            None => self.0.push((term.to_string(), n)),
        }
    }

    pub fn get(&self, term: &str) -> Option<usize> {
        self.0.iter().find(|(t, _)| t == term).map(|(_, c)| *c)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().map(|(_, c)| *c)
    }
}

impl Index<&str> for TermCounts {
    type Output = usize;

    fn index(&self, term: &str) -> &usize {
        self.0
            .iter()
            .find(|(t, _)| t == term)
            .map(|(_, c)| c)
            .unwrap_or_else(|| panic!("no count for term '{}'", term))
    }
}

impl FromIterator<(String, usize)> for TermCounts {
    fn from_iter<I: IntoIterator<Item = (String, usize)>>(iter: I) -> Self {
        let mut counts = Self::default();
        for (term, n) in iter {
            counts.add(&term, n);
        }
        counts
    }
}

// JSON object whose keys follow the search terms
impl Serialize for TermCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (term, count) in &self.0 {
            map.serialize_entry(term, count)?;
        }
        map.end()
    }
}

/// A document that passed the filter, borrowed from its [`SourceDocument`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult<'a> {
    pub filename: &'a str,
    #[serde(skip)]
    pub content: &'a [u8],
    pub matched_sentences: Vec<String>,
    pub term_counts: TermCounts,
}

impl MatchResult<'_> {
    pub fn count_for(&self, term: &str) -> usize {
        self.term_counts.get(term).unwrap_or(0)
    }
}

// A document that could not be read as a PDF
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedDocument {
    pub filename: String,
    pub reason: String,
}

/// Everything one screening pass produced.
#[derive(Debug, Clone, Serialize)]
pub struct ScreeningRun<'a> {
    pub terms: Vec<String>,
    pub screened: usize,
    pub matches: Vec<MatchResult<'a>>,
    pub skipped: Vec<SkippedDocument>,
}

impl ScreeningRun<'_> {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn summary(&self) -> String {
        if self.is_empty() {
            return "Nenhum arquivo contém os termos".to_string();
        }
        format!(
            "Foram encontrados {} arquivos com os termos '{}'.",
            self.matches.len(),
            self.terms.join(", ")
        )
    }
}

// Error types
#[derive(Debug, thiserror::Error)]
pub enum TriageError {
    #[error("cannot extract text from '{filename}': {message}")]
    Extraction { filename: String, message: String },

    #[error("invalid search: {0}")]
    InvalidSearch(String),

    #[error("too many documents: {count} (limit {limit})")]
    TooManyDocuments { count: usize, limit: usize },

    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("report error: {0}")]
    Report(#[from] rust_xlsxwriter::XlsxError),

    #[error("report has too many columns: {0}")]
    ReportTooWide(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("profile error: {0}")]
    Profile(String),
}

pub type Result<T> = std::result::Result<T, TriageError>;
