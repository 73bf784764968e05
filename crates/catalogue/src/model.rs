use serde::{Deserialize, Serialize};

/// One record of a raw directory listing. The upstream listing is a
/// GitHub org repositories response, which carries dozens of fields;
/// only the three below matter and the rest are ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct DirectoryEntry {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
}

/// A validated scraper candidate. Candidates are read-only once loaded:
/// the scorer only ever borrows them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// Stable name used for matching. May carry a `multiple_` prefix
    /// which the scorer strips before matching.
    pub identifier: String,
    pub description: Option<String>,
    pub reference_url: Option<String>,
}

impl Candidate {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            description: None,
            reference_url: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_reference_url(mut self, url: impl Into<String>) -> Self {
        self.reference_url = Some(url.into());
        self
    }
}

impl From<DirectoryEntry> for Candidate {
    fn from(entry: DirectoryEntry) -> Self {
        Self {
            identifier: entry.name,
            description: entry.description,
            reference_url: entry.html_url,
        }
    }
}
