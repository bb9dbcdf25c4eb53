//! Loaded document state and document loading helpers

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex_lite::Regex;

use super::error::LoadError;

/// A document snapshot handed to the shell by the viewer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDocument {
    /// Full text content
    pub content: String,
    /// Where the document came from (file name, doc id), if known
    pub label: Option<String>,
}

impl LoadedDocument {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Read an exported document (plain text or markdown) from disk
    pub fn open(path: &Path) -> Result<Self, LoadError> {
        let bytes = fs::read(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let content =
            String::from_utf8(bytes).map_err(|_| LoadError::NotText(path.to_path_buf()))?;
        if content.trim().is_empty() {
            return Err(LoadError::EmptyFile(path.to_path_buf()));
        }

        let label = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "Untitled".to_string());

        Ok(Self::new(content).with_label(label))
    }

    /// First non-empty line, used as a title
    pub fn title(&self) -> String {
        self.label.clone().unwrap_or_else(|| {
            self.content
                .lines()
                .map(|line| line.trim().trim_start_matches('#').trim())
                .find(|line| !line.is_empty())
                .unwrap_or("Untitled")
                .to_string()
        })
    }
}

/// Whether a document has been loaded yet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DocumentState {
    #[default]
    Empty,
    Loaded(LoadedDocument),
}

/// How a state replacement changed the visibility of document-gated panels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateChange {
    Opened,
    Closed,
    Unchanged,
}

impl DocumentState {
    pub fn is_loaded(&self) -> bool {
        matches!(self, DocumentState::Loaded(_))
    }

    /// Content of the loaded document, or `""` when nothing is loaded
    pub fn content(&self) -> &str {
        match self {
            DocumentState::Empty => "",
            DocumentState::Loaded(doc) => &doc.content,
        }
    }

    /// Replace the state wholesale. Empty content means "nothing loaded".
    pub fn replace(&mut self, doc: LoadedDocument) -> GateChange {
        let was_loaded = self.is_loaded();
        *self = if doc.content.is_empty() {
            DocumentState::Empty
        } else {
            DocumentState::Loaded(doc)
        };

        match (was_loaded, self.is_loaded()) {
            (false, true) => GateChange::Opened,
            (true, false) => GateChange::Closed,
            _ => GateChange::Unchanged,
        }
    }
}

fn doc_url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"docs\.google\.com/document/(?:u/\d+/)?d/([A-Za-z0-9_-]{10,})")
            .unwrap_or_else(|e| panic!("invalid document url pattern: {e}"))
    })
}

fn doc_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_-]{20,}$").unwrap_or_else(|e| panic!("invalid document id pattern: {e}"))
    })
}

/// Extract the document id from a Google Docs link or a bare id
pub fn parse_google_doc_id(input: &str) -> Result<String, LoadError> {
    let input = input.trim();
    if let Some(caps) = doc_url_pattern().captures(input) {
        return Ok(caps[1].to_string());
    }
    if doc_id_pattern().is_match(input) {
        return Ok(input.to_string());
    }
    Err(LoadError::InvalidDocLink(input.to_string()))
}

/// Browser URL that downloads a Google Doc as plain text
pub fn google_doc_export_url(doc_id: &str) -> String {
    format!("https://docs.google.com/document/d/{doc_id}/export?format=txt")
}
