// Configuration for pdf-triage
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::types::{Connector, Result, SearchSpec, TriageError};

// Batch limits
pub const MAX_DOCUMENTS: usize = 100;

// Output artifacts
pub const ARCHIVE_FILE_NAME: &str = "pdfs_relevantes.zip";
pub const ARCHIVE_MIME: &str = "application/zip";
pub const REPORT_FILE_NAME: &str = "relatorio_triangem.xlsx";
pub const REPORT_MIME: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const REPORT_FILENAME_HEADER: &str = "Arquivo";
pub const REPORT_SHEET_NAME: &str = "Sheet1";

// Get profile path from environment or use default
pub fn profile_path() -> PathBuf {
    env::var("PDF_TRIAGE_PROFILE")
        .unwrap_or_else(|_| "triage.toml".to_string())
        .into()
}

/// Saved search terms and connectors, stored as TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TriageProfile {
    pub terms: Vec<String>,
    #[serde(default)]
    pub connectors: Vec<Connector>,
}

impl TriageProfile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| TriageError::Profile(format!("{}: {}", path.display(), e)))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TriageError::Profile(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn to_spec(&self) -> Result<SearchSpec> {
        SearchSpec::new(self.terms.clone(), self.connectors.clone())
    }
}

impl From<&SearchSpec> for TriageProfile {
    fn from(spec: &SearchSpec) -> Self {
        Self {
            terms: spec.terms().to_vec(),
            connectors: spec.connectors().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_parses_lowercase_connectors() {
        let profile: TriageProfile = toml::from_str(
            r#"
            terms = ["randomized", "placebo", "animal"]
            connectors = ["and", "not"]
            "#,
        )
        .unwrap();
        let spec = profile.to_spec().unwrap();
        assert_eq!(spec.terms().len(), 3);
        assert_eq!(spec.connectors(), &[Connector::And, Connector::Not]);
    }

    #[test]
    fn profile_without_connectors_is_single_term() {
        let profile: TriageProfile = toml::from_str(r#"terms = ["sepsis"]"#).unwrap();
        assert_eq!(profile.to_spec().unwrap(), SearchSpec::single("sepsis"));
    }

    #[test]
    fn profile_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("triage.toml");
        let profile = TriageProfile {
            terms: vec!["cats".into(), "dogs".into()],
            connectors: vec![Connector::Or],
        };
        profile.save(&path).unwrap();
        assert_eq!(TriageProfile::load(&path).unwrap(), profile);
    }

    #[test]
    fn malformed_profile_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "terms = [\"a\", \"b\"]\nconnectors = [\"xor\"]\n").unwrap();
        assert!(matches!(
            TriageProfile::load(&path),
            Err(TriageError::Profile(_))
        ));
    }
}
