// src/catalog/links.rs
//
// The static link list: `{ "count": n, "links": [{ "title", "url" }, …] }`.
// The bundled copy is compiled in; another list can be loaded from disk.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

static BUNDLED: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/report_links.json"
));

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLink {
    pub title: String,
    pub url: String,
}

impl ReportLink {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self { title: title.into(), url: url.into() }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ReportLinks {
    /// Informational; the list itself is authoritative.
    #[serde(default)]
    pub count: usize,
    pub links: Vec<ReportLink>,
}

#[derive(Debug, Error)]
pub enum LinksError {
    #[error("could not read link list {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid link list: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReportLinks {
    pub fn parse(text: &str) -> Result<Self, LinksError> {
        let links: ReportLinks = serde_json::from_str(text)?;
        if links.count != links.links.len() {
            logd!("Links: count field says {}, list has {}", links.count, links.links.len());
        }
        Ok(links)
    }

    pub fn from_path(path: &Path) -> Result<Self, LinksError> {
        let text = fs::read_to_string(path).map_err(|source| LinksError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&text)
    }

    /// The list shipped with the binary.
    pub fn bundled() -> Result<Self, LinksError> {
        Self::parse(BUNDLED)
    }
}
