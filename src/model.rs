// Catalog model: the data shapes for the menu hierarchy and the loader
// that reads them from a JSON file. The catalog is loaded once per
// session and treated as immutable afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Opaque item identifier. Catalog files carry either numeric or string
/// ids, so both shapes are accepted; `Display` renders either without
/// quotes because ids are joined verbatim into the summary link.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum NodeId {
    Number(i64),
    Text(String),
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Number(n) => write!(f, "{}", n),
            NodeId::Text(s) => f.write_str(s),
        }
    }
}

/// One selectable item at some tier of the menu. A node with children
/// exposes them as the next tier; a node without children is a leaf and
/// ends the walk. A missing `children` key and an empty array behave
/// identically.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CatalogNode {
    pub id: NodeId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub children: Vec<CatalogNode>,
}

impl CatalogNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Root of the catalog file: the top-level `menu` array. A document
/// without a `menu` key parses as an empty menu so the walker can report
/// "no menu items" instead of failing the load.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Catalog {
    #[serde(default)]
    pub menu: Vec<CatalogNode>,
}

/// Failure to produce a catalog from a file. Both variants name the path
/// and carry the underlying error so the top-level message stays
/// descriptive.
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("error reading catalog file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("error parsing catalog file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Read the file at `path` and parse it as a `Catalog`. Missing name or
/// price fields on a node fail the parse here; optional fields
/// (`description`, `children`) simply default.
pub fn load_model(path: &Path) -> Result<Catalog, ModelLoadError> {
    let data = fs::read_to_string(path).map_err(|source| ModelLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog: Catalog =
        serde_json::from_str(&data).map_err(|source| ModelLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(
        top_level_items = catalog.menu.len(),
        "loaded catalog from {}",
        path.display()
    );
    Ok(catalog)
}
