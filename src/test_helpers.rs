//! Shared test utilities for the reveal-deck test suite.
//!
//! Documents are written with `serde_json::json!` and converted into the
//! decoder's [`Value`] tree:
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let config = deck(json!({"outline": 1, "nav": [{"title": "Home"}, {"title": "A"}]}));
//! let outline = outline_slide(&config).unwrap();
//! assert_eq!(outline.doc(), "+ [A](#/1)");
//! ```

use crate::config::DeckOptions;
use crate::decode::decode;
use crate::outline::OUTLINE_TITLE;
use crate::schema::{DocumentConfig, Slide};
use crate::value::Value;

// =========================================================================
// Inputs
// =========================================================================

/// Stock options: `/static` asset root, absolute URLs, `templates/` dir.
pub fn options() -> DeckOptions {
    DeckOptions::default()
}

/// Convert a `json!` literal into a decoder value.
pub fn value(json: serde_json::Value) -> Value {
    Value::from(json)
}

// =========================================================================
// Decoding
// =========================================================================

/// Decode a document with stock options, panicking on error.
pub fn deck(json: serde_json::Value) -> DocumentConfig {
    decode(&value(json), &options()).unwrap()
}

/// The synthesized outline slide under the first top-level slide, if any.
pub fn outline_slide(config: &DocumentConfig) -> Option<&Slide> {
    config
        .nav()
        .first()?
        .sub()
        .iter()
        .find(|slide| slide.title() == OUTLINE_TITLE)
}
