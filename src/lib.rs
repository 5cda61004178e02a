//! # Reveal Deck
//!
//! Turns a nested key/value slide document (normally `reveal.yaml`) into a
//! fully validated, defaulted and normalized presentation model that a
//! reveal.js renderer can consume without further checks.
//!
//! # Architecture: Parse, Decode, Render
//!
//! ```text
//! 1. Parse    reveal.yaml  →  Value            (serde_yaml / serde_json → generic tree)
//! 2. Decode   Value        →  DocumentConfig   (type-directed, defaults, normalization)
//! 3. Render   DocumentConfig → HTML            (outside this crate; model serializes to JSON)
//! ```
//!
//! Only stage 2 carries rules. Parsing produces an untyped [`value::Value`],
//! and the renderer trusts what it receives. Everything in between is a single
//! recursive decode driven by the Rust type being produced.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`value`] | The generic document tree and conversions from YAML, JSON and TOML values |
//! | [`decode`] | Type-directed decoder: `Decode`/`Schema` traits, field declarations, errors with paths |
//! | [`schema`] | The presentation shapes: blocks, images, footer, slides, the document |
//! | [`normalize`] | Asset path resolution and CSS length units |
//! | [`outline`] | Table-of-contents slide synthesis |
//! | [`json_schema`] | JSON Schema of the document, derived from the field declarations |
//! | [`config`] | `DeckOptions` and the optional `deck.toml` |
//! | [`project`] | Project discovery, document loading, the error deck |
//!
//! # Design Decisions
//!
//! ## Declared Fields, Not Reflection
//!
//! Each shape lists its fields with their declared [`decode::Shape`] and binds
//! them in an exhaustive `match`. The same declarations drive unknown-key
//! rejection, the JSON Schema, and the error messages, so the three never
//! disagree.
//!
//! ## Extension by Composition
//!
//! An image is a visual block plus a label; a top-level slide is a slide plus
//! sub-slides. The child embeds its parent and delegates the parent's keys to
//! it. Serialization flattens the parent back in, so the renderer sees one
//! object per slide.
//!
//! ## Options Are a Parameter
//!
//! The static-asset root and the relative-URL mode used by static export are
//! fields of [`config::DeckOptions`], passed into every decode. Two decks can
//! be decoded concurrently with different settings.
//!
//! ## Finished Shapes Decode to Themselves
//!
//! A [`value::Value`] can carry an already-decoded shape. Decoding it again
//! returns it unchanged, so programmatic decks (the error deck, the outline
//! slide) are assembled from real slides rather than from hand-written maps.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! let deck = reveal_deck::load_deck(Path::new("talk"))?;
//! println!("{}", serde_json::to_string_pretty(&deck)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod decode;
pub mod json_schema;
pub mod normalize;
pub mod outline;
pub mod project;
pub mod schema;
pub mod value;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use config::{ConfigError, DeckOptions, load_options};
pub use decode::{DecodeError, Decode, Schema, decode};
pub use project::{ProjectError, error_deck, find_project, load_deck, load_deck_with};
pub use schema::DocumentConfig;
pub use value::Value;
