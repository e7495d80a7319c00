use std::rc::Rc;

use log::error;
use serde::Deserialize;
use thiserror::Error;

use crate::config::ScrollSpyConfig;
use crate::scroll_spy::section::{FileRef, NavItem, Section, SectionId, SectionList, SectionListError};

const CATALOG_JSON: &str = include_str!("../assets/catalog.json");

thread_local! {
    static BUNDLED: Option<Rc<Catalog>> = match Catalog::load() {
        Ok(catalog) => Some(Rc::new(catalog)),
        Err(err) => {
            error!("failed to load product catalog: {}", err);
            None
        }
    };
}

/// The catalog compiled into the binary, parsed once per thread.
pub fn bundled() -> Option<Rc<Catalog>> {
    BUNDLED.with(|catalog| catalog.clone())
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("product `{slug}` has an invalid section list: {source}")]
    Sections {
        slug: String,
        #[source]
        source: SectionListError,
    },
    #[error("product slug `{0}` is used twice")]
    DuplicateSlug(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Catalog {
    pub brand: Brand,
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Brand {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub support_email: Option<String>,
    #[serde(default)]
    pub scroll_spy: ScrollSpyConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub slug: String,
    pub name: String,
    pub category: String,
    pub tagline: String,
    pub hero: Hero,
    pub sections: Vec<PageSection>,
    #[serde(default)]
    pub manual: Option<FileRef>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Hero {
    pub image: String,
    pub headline: String,
    #[serde(default)]
    pub subline: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageSection {
    pub id: SectionId,
    pub label: String,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionBody {
    Text {
        heading: String,
        paragraphs: Vec<String>,
        #[serde(default)]
        image: Option<String>,
    },
    Video {
        src: String,
        #[serde(default)]
        poster: Option<String>,
        #[serde(default)]
        caption: Option<String>,
    },
    Audio {
        tracks: Vec<AudioTrack>,
    },
    Gallery {
        images: Vec<GalleryImage>,
    },
    Accordion {
        #[serde(default)]
        heading: Option<String>,
        #[serde(default)]
        single_open: bool,
        panels: Vec<Panel>,
    },
    Downloads {
        items: Vec<DownloadItem>,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AudioTrack {
    pub title: String,
    pub src: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Panel {
    pub title: String,
    pub body: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DownloadItem {
    pub title: String,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    pub file: FileRef,
}

impl Catalog {
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_json(CATALOG_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        for (i, product) in catalog.products.iter().enumerate() {
            if catalog.products[..i].iter().any(|p| p.slug == product.slug) {
                return Err(CatalogError::DuplicateSlug(product.slug.clone()));
            }
            product.section_list()?;
        }
        Ok(catalog)
    }

    pub fn product(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.slug == slug)
    }
}

impl Product {
    pub fn section_list(&self) -> Result<SectionList, CatalogError> {
        let sections = self
            .sections
            .iter()
            .map(|s| Section::new(s.id, s.label.clone()))
            .collect();
        SectionList::new(sections).map_err(|source| CatalogError::Sections {
            slug: self.slug.clone(),
            source,
        })
    }

    /// Entries of the sticky bar: every section in page order, then the
    /// manual if the product has one.
    pub fn nav_items(&self) -> Vec<(String, NavItem)> {
        let mut items: Vec<(String, NavItem)> = self
            .sections
            .iter()
            .map(|s| (s.label.clone(), NavItem::ScrollTarget(s.id)))
            .collect();
        if let Some(manual) = &self.manual {
            items.push(("Manual".to_string(), NavItem::DownloadAction(manual.clone())));
        }
        items
    }
}
