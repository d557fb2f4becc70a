// Editable list of search terms and the connectors between them
use crate::types::{Connector, Result, SearchSpec, TriageError};

/// Caller-owned form state. Starts with a single empty term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchForm {
    terms: Vec<String>,
    connectors: Vec<Connector>,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchForm {
    pub fn new() -> Self {
        Self {
            terms: vec![String::new()],
            connectors: Vec::new(),
        }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Appends an empty term joined by `and`.
    pub fn add_term(&mut self) {
        self.terms.push(String::new());
        self.connectors.push(Connector::And);
    }

    /// Removes a term together with the connector in front of it.
    /// Removing the first term drops the connector that followed it.
    pub fn remove_term(&mut self, index: usize) -> Result<()> {
        if index >= self.terms.len() {
            return Err(TriageError::InvalidSearch(format!(
                "no search term at position {}",
                index + 1
            )));
        }
        if self.terms.len() == 1 {
            return Err(TriageError::InvalidSearch(
                "the last search term cannot be removed".to_string(),
            ));
        }
        self.terms.remove(index);
        self.connectors.remove(index.saturating_sub(1));
        Ok(())
    }

    pub fn set_term(&mut self, index: usize, text: impl Into<String>) -> Result<()> {
        let slot = self.terms.get_mut(index).ok_or_else(|| {
            TriageError::InvalidSearch(format!("no search term at position {}", index + 1))
        })?;
        *slot = text.into();
        Ok(())
    }

    /// Sets the connector between term `index` and term `index + 1`.
    pub fn set_connector(&mut self, index: usize, connector: Connector) -> Result<()> {
        let slot = self.connectors.get_mut(index).ok_or_else(|| {
            TriageError::InvalidSearch(format!("no connector at position {}", index + 1))
        })?;
        *slot = connector;
        Ok(())
    }

    pub fn to_spec(&self) -> Result<SearchSpec> {
        SearchSpec::new(self.terms.clone(), self.connectors.clone())
    }
}
