//! Deck projects on disk.
//!
//! A project is a directory holding the deck document and, optionally, a
//! `deck.toml` with [`DeckOptions`] and a template directory with files the
//! document embeds:
//!
//! ```text
//! talk/
//! ├── reveal.yaml         # the deck (or reveal.yml / reveal.json)
//! ├── deck.toml           # optional decode options
//! └── templates/
//!     ├── intro.md        # slide `include: intro.md`
//!     └── custom.css      # `extra_style: custom.css`
//! ```
//!
//! Parsing only produces a [`Value`] tree. All type checking, defaulting and
//! normalization happen in [`decode`](crate::decode::decode).

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::{ConfigError, DeckOptions, load_options};
use crate::decode::{DecodeError, decode};
use crate::schema::{DocumentConfig, TopSlide};
use crate::value::Value;

/// Deck document names, in lookup order.
pub const PROJECT_FILES: &[&str] = &["reveal.yaml", "reveal.yml", "reveal.json"];

#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("project file 'reveal.yaml' is not found in {}", .0.display())]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid deck: {0}")]
    Decode(#[from] DecodeError),
    #[error("deck document must be a mapping at the top level, got {0}")]
    NotAMap(&'static str),
}

/// Syntax of a deck document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// Format implied by the file extension; anything but `.json` is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

/// Locate the deck document in `dir`.
pub fn find_project(dir: &Path) -> Result<PathBuf, ProjectError> {
    PROJECT_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
        .ok_or_else(|| ProjectError::NotFound(dir.to_path_buf()))
}

/// Parse document text into a value tree.
///
/// An empty (or all-comment) document is an empty map, which decodes to the
/// default deck. Any other top level must be a map.
pub fn parse_document(text: &str, format: DocumentFormat) -> Result<Value, ProjectError> {
    if text.trim().is_empty() {
        return Ok(Value::Map(BTreeMap::new()));
    }
    let value = match format {
        DocumentFormat::Yaml => Value::from(serde_yaml::from_str::<serde_yaml::Value>(text)?),
        DocumentFormat::Json => Value::from(serde_json::from_str::<serde_json::Value>(text)?),
    };
    match value {
        Value::Map(_) => Ok(value),
        Value::Null => Ok(Value::Map(BTreeMap::new())),
        other => Err(ProjectError::NotAMap(other.kind())),
    }
}

/// Read and parse a deck document.
pub fn load_document(path: &Path) -> Result<Value, ProjectError> {
    log::debug!("loading {}", path.display());
    let text = fs::read_to_string(path)?;
    parse_document(&text, DocumentFormat::from_path(path))
}

/// Load the project in `root`: options from `deck.toml`, then the deck.
pub fn load_deck(root: &Path) -> Result<DocumentConfig, ProjectError> {
    let options = load_options(root)?;
    let path = find_project(root)?;
    load_deck_with(&path, &options)
}

/// Load and decode one deck document with explicit options.
pub fn load_deck_with(path: &Path, options: &DeckOptions) -> Result<DocumentConfig, ProjectError> {
    let document = load_document(path)?;
    Ok(decode(&document, options)?)
}

/// The one-slide deck shown in place of a deck that failed to load.
pub fn error_deck(
    title: &str,
    description: &str,
    options: &DeckOptions,
) -> Result<DocumentConfig, DecodeError> {
    let slide: TopSlide = decode(
        &Value::map([
            ("title", title.into()),
            ("doc", format!("```sh\n{description}\n```").into()),
        ]),
        options,
    )?;
    decode(
        &Value::map([
            ("title", title.into()),
            ("theme", "night".into()),
            ("nav", vec![slide].into()),
        ]),
        options,
    )
}
