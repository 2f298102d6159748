//! Content store: the static document holding all site copy and data.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

pub mod models;

pub use models::ContentDocument;

/// The document served when no `CONTENT_PATH` is configured.
pub const BUILTIN_CONTENT: &str = include_str!("../../data/content.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to read content document {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Content document is not valid: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parses a content document. Either the whole document loads or nothing does.
pub fn parse_content(json: &str) -> Result<ContentDocument, ContentError> {
    Ok(serde_json::from_str(json)?)
}

/// Loads the content document from `path`, or the built-in one when `None`.
pub fn load_content(path: Option<&Path>) -> Result<ContentDocument, ContentError> {
    let Some(path) = path else {
        info!("Using built-in content document");
        return parse_content(BUILTIN_CONTENT);
    };

    let json = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document = parse_content(&json)?;
    info!("Loaded content document from {}", path.display());
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::models::Bio;
    use std::io::Write;

    #[test]
    fn test_builtin_document_parses() {
        let doc = parse_content(BUILTIN_CONTENT).unwrap();
        assert_eq!(doc.hero.name, "John Doe");
        assert_eq!(doc.skills.categories.len(), 2);
        assert!(doc.projects.iter().any(|p| p.featured));
        assert_eq!(doc.about.resume_url.as_deref(), Some("/resume"));
    }

    #[test]
    fn test_empty_object_yields_empty_document() {
        let doc = parse_content("{}").unwrap();
        assert!(doc.projects.is_empty());
        assert!(doc.contact.is_none());
        assert!(doc.about.journey.is_none());
        assert!(doc.theme.colors.light.primary.is_none());
    }

    #[test]
    fn test_bio_accepts_string_or_list() {
        let single = parse_content(r#"{"about": {"bio": "One paragraph."}}"#).unwrap();
        assert_eq!(single.about.bio, Some(Bio::Text("One paragraph.".to_string())));

        let many = parse_content(r#"{"about": {"bio": ["A", "B"]}}"#).unwrap();
        assert_eq!(many.about.bio.unwrap().paragraphs(), vec!["A", "B"]);
    }

    #[test]
    fn test_project_urls_are_camel_case() {
        let doc = parse_content(
            r#"{"projects": [{"title": "X", "demoUrl": "https://d", "sourceUrl": "https://s"}]}"#,
        )
        .unwrap();
        assert_eq!(doc.projects[0].demo_url.as_deref(), Some("https://d"));
        assert_eq!(doc.projects[0].source_url.as_deref(), Some("https://s"));
        assert!(!doc.projects[0].featured);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"hero": {{"name": "Ada", "title": "Engineer"}}}}"#).unwrap();

        let doc = load_content(Some(file.path())).unwrap();
        assert_eq!(doc.hero.name, "Ada");
    }

    #[test]
    fn test_malformed_file_fails_closed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"hero": {{"name": "Ada""#).unwrap();

        let err = load_content(Some(file.path())).unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_content(Some(&dir.path().join("absent.json"))).unwrap_err();
        assert!(matches!(err, ContentError::Io { .. }));
    }
}
