use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Named region of a product page. The string form doubles as the DOM id
/// of the element wrapping the section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Concept,
    Demo,
    Features,
    Sound,
    Gallery,
    Specs,
    Faq,
    Downloads,
}

impl SectionId {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Concept => "concept",
            SectionId::Demo => "demo",
            SectionId::Features => "features",
            SectionId::Sound => "sound",
            SectionId::Gallery => "gallery",
            SectionId::Specs => "specs",
            SectionId::Faq => "faq",
            SectionId::Downloads => "downloads",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: SectionId,
    pub label: String,
}

impl Section {
    pub fn new(id: SectionId, label: impl Into<String>) -> Self {
        Self { id, label: label.into() }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SectionListError {
    #[error("a page must declare at least one section")]
    Empty,
    #[error("section `{0}` is declared more than once")]
    Duplicate(SectionId),
}

/// Ordered, non-empty list of the sections declared on one page.
///
/// Declaration order is scan order, so earlier sections win when two
/// ranges overlap.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionList {
    sections: Vec<Section>,
}

impl SectionList {
    pub fn new(sections: Vec<Section>) -> Result<Self, SectionListError> {
        if sections.is_empty() {
            return Err(SectionListError::Empty);
        }
        for (i, section) in sections.iter().enumerate() {
            if sections[..i].iter().any(|s| s.id == section.id) {
                return Err(SectionListError::Duplicate(section.id));
            }
        }
        Ok(Self { sections })
    }

    pub fn first(&self) -> SectionId {
        // Non-empty by construction.
        self.sections[0].id
    }

    pub fn contains(&self, id: SectionId) -> bool {
        self.sections.iter().any(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }
}

/// Reference to a downloadable file, relative to the asset base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    pub path: String,
    #[serde(default)]
    pub file_name: Option<String>,
}

impl FileRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), file_name: None }
    }

    /// Name offered to the browser when saving; falls back to the last
    /// path segment.
    pub fn download_name(&self) -> &str {
        match &self.file_name {
            Some(name) => name,
            None => self.path.rsplit('/').next().unwrap_or(&self.path),
        }
    }
}

/// One entry of the sticky navigation bar.
#[derive(Debug, Clone, PartialEq)]
pub enum NavItem {
    ScrollTarget(SectionId),
    DownloadAction(FileRef),
}
