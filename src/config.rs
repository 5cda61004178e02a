//! Decode options.
//!
//! Everything the decoder needs from its surroundings is carried by a
//! [`DeckOptions`] value passed into every decode call. Nothing is read from
//! process-wide state, so two decks can be decoded side by side with
//! different settings (a live preview and a static export, say).
//!
//! ## Options File
//!
//! Place an optional `deck.toml` next to `reveal.yaml`:
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! static_url = "/static"      # Prefix for resolved asset paths
//! relative_urls = false       # Page-relative asset URLs (static export)
//! template_dir = "templates"  # Root for `include` and `extra_style` files
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the optional options file in a project root.
pub const OPTIONS_FILE: &str = "deck.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Settings threaded through a single decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeckOptions {
    /// URL prefix under which static assets are served.
    pub static_url: String,
    /// Resolve assets relative to the page instead of the site root.
    /// Set when freezing a deck into a static site that may be hosted
    /// under an arbitrary sub-path.
    pub relative_urls: bool,
    /// Directory that `include` and `extra_style` file names are read from.
    pub template_dir: PathBuf,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            static_url: "/static".to_string(),
            relative_urls: false,
            template_dir: PathBuf::from("templates"),
        }
    }
}

impl DeckOptions {
    pub fn with_relative_urls(mut self, relative: bool) -> Self {
        self.relative_urls = relative;
        self
    }

    pub fn with_template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.template_dir = dir.into();
        self
    }

    /// Path of a file named by the document, under the template directory.
    pub fn template_path(&self, name: &str) -> PathBuf {
        self.template_dir.join(name)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.static_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "static_url must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Load options from `deck.toml` in the given project root.
///
/// Missing file means stock defaults. A relative `template_dir` is anchored
/// at `root`.
pub fn load_options(root: &Path) -> Result<DeckOptions, ConfigError> {
    let path = root.join(OPTIONS_FILE);
    let mut options = if path.exists() {
        let content = fs::read_to_string(&path)?;
        toml::from_str::<DeckOptions>(&content)?
    } else {
        DeckOptions::default()
    };
    options.validate()?;
    if options.template_dir.is_relative() {
        options.template_dir = root.join(&options.template_dir);
    }
    Ok(options)
}

/// Returns a fully-commented stock `deck.toml`.
pub fn stock_options_toml() -> &'static str {
    r##"# Deck options
# ============
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# URL prefix under which static assets (images, icons, watermarks) are served.
static_url = "/static"

# Resolve asset URLs relative to the page instead of the site root.
# Enable when exporting the deck as a static site.
relative_urls = false

# Directory holding files referenced by `include` (slide bodies) and
# `extra_style` (style sheets). Relative to the project root.
template_dir = "templates"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_options() {
        let options = DeckOptions::default();
        assert_eq!(options.static_url, "/static");
        assert!(!options.relative_urls);
        assert_eq!(options.template_dir, PathBuf::from("templates"));
    }

    #[test]
    fn parse_partial_options() {
        let options: DeckOptions = toml::from_str("relative_urls = true").unwrap();
        assert!(options.relative_urls);
        assert_eq!(options.static_url, "/static");
    }

    #[test]
    fn unknown_key_rejected() {
        let result: Result<DeckOptions, _> = toml::from_str("relative_url = true");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn builder_methods() {
        let options = DeckOptions::default()
            .with_relative_urls(true)
            .with_template_dir("/srv/deck/templates");
        assert!(options.relative_urls);
        assert_eq!(
            options.template_path("intro.md"),
            PathBuf::from("/srv/deck/templates/intro.md")
        );
    }

    #[test]
    fn validate_rejects_empty_static_url() {
        let options = DeckOptions {
            static_url: "  ".to_string(),
            ..DeckOptions::default()
        };
        assert!(matches!(
            options.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    // =========================================================================
    // load_options tests
    // =========================================================================

    #[test]
    fn load_options_defaults_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let options = load_options(tmp.path()).unwrap();
        assert_eq!(options.static_url, "/static");
        assert_eq!(options.template_dir, tmp.path().join("templates"));
    }

    #[test]
    fn load_options_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(OPTIONS_FILE),
            r#"
static_url = "/assets"
relative_urls = true
template_dir = "parts"
"#,
        )
        .unwrap();

        let options = load_options(tmp.path()).unwrap();
        assert_eq!(options.static_url, "/assets");
        assert!(options.relative_urls);
        assert_eq!(options.template_dir, tmp.path().join("parts"));
    }

    #[test]
    fn load_options_keeps_absolute_template_dir() {
        let tmp = TempDir::new().unwrap();
        let elsewhere = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(OPTIONS_FILE),
            format!("template_dir = {:?}\n", elsewhere.path().display().to_string()),
        )
        .unwrap();

        let options = load_options(tmp.path()).unwrap();
        assert_eq!(options.template_dir, elsewhere.path());
    }

    #[test]
    fn load_options_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(OPTIONS_FILE), "this is not valid toml [[[").unwrap();
        assert!(matches!(
            load_options(tmp.path()),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn load_options_validates_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(OPTIONS_FILE), "static_url = \"\"\n").unwrap();
        assert!(matches!(
            load_options(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn stock_options_toml_roundtrips_to_defaults() {
        let options: DeckOptions = toml::from_str(stock_options_toml()).unwrap();
        assert_eq!(options, DeckOptions::default());
    }
}
