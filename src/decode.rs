//! Type-directed decoding of a [`Value`] tree into presentation shapes.
//!
//! The decoder is driven by the Rust type being produced. Every target type
//! implements [`Decode`], and [`decode`] applies the same contract to all of
//! them:
//!
//! | Input | Result |
//! |-------|--------|
//! | null / absent | the target's zero value (never an error) |
//! | list, target `Vec<U>` | each item decoded as `U` |
//! | single value, target `Vec<U>` | a one-element list |
//! | [`Value::Node`] of the target shape | that node, unchanged |
//! | map, target a [`Schema`] | keys bound to declared fields, then `finish` |
//! | primitive of the target type | that primitive |
//! | anything else | [`DecodeError::TypeMismatch`] |
//!
//! Shapes are built field by field through [`Schema::bind`], which decodes
//! the field value against its declared type before storing it. Writes made
//! after construction go through [`Schema::set`], which is the same bind.
//! A shape can therefore never hold a value of the wrong type.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::DeckOptions;
use crate::normalize::resolve_unit;
use crate::outline::OutlineLevel;
use crate::schema::{
    DocumentConfig, FooterBlock, FragmentStyles, Image, Slide, TopSlide, VisualBlock,
};
use crate::value::{Node, Value};

/// Declared type of a field, and of every shape the decoder can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Str,
    Bool,
    Int,
    /// A CSS length: a string, or a number rendered in points.
    Length,
    /// The outline depth, an integer in `0..=2`.
    Outline,
    /// A list of the inner shape; a lone item is accepted as a list of one.
    List(&'static Shape),
    VisualBlock,
    Image,
    Footer,
    Fragments,
    Slide,
    TopSlide,
    Document,
}

impl Shape {
    /// Name used in error messages. Lists are described by [`fmt::Display`].
    pub fn name(self) -> &'static str {
        match self {
            Shape::Str => "string",
            Shape::Bool => "boolean",
            Shape::Int => "integer",
            Shape::Length => "length (string or number)",
            Shape::Outline => "outline level",
            Shape::List(_) => "list",
            Shape::VisualBlock => "visual block",
            Shape::Image => "image",
            Shape::Footer => "footer",
            Shape::Fragments => "fragment styles",
            Shape::Slide => "slide",
            Shape::TopSlide => "top-level slide",
            Shape::Document => "document",
        }
    }

    /// Declared fields of a structured shape; empty for scalars and lists.
    pub fn fields(self) -> &'static [Field] {
        match self {
            Shape::Str
            | Shape::Bool
            | Shape::Int
            | Shape::Length
            | Shape::Outline
            | Shape::List(_) => &[],
            Shape::VisualBlock => VisualBlock::FIELDS,
            Shape::Image => Image::FIELDS,
            Shape::Footer => FooterBlock::FIELDS,
            Shape::Fragments => FragmentStyles::FIELDS,
            Shape::Slide => Slide::FIELDS,
            Shape::TopSlide => TopSlide::FIELDS,
            Shape::Document => DocumentConfig::FIELDS,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::List(item) => write!(f, "list of {item}"),
            other => f.write_str(other.name()),
        }
    }
}

/// A named, typed field of a structured shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub shape: Shape,
}

impl Field {
    pub const fn new(name: &'static str, shape: Shape) -> Self {
        Self { name, shape }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Key(String),
    Index(usize),
}

/// Location of a failing value inside the document, e.g. `nav[2].img[0].width`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath {
    // Innermost segment first; errors collect segments on the way out.
    segments: Vec<Segment>,
}

impl FieldPath {
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("<document>");
        }
        for (i, segment) in self.segments.iter().rev().enumerate() {
            match segment {
                Segment::Key(key) if i == 0 => f.write_str(key)?,
                Segment::Key(key) => write!(f, ".{key}")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum DecodeError {
    /// A value's type disagrees with its field's declared shape, or a map
    /// carries a key the shape does not declare.
    #[error("{path}: expected {expected}, got {actual}")]
    TypeMismatch {
        path: FieldPath,
        expected: String,
        actual: String,
    },
    /// A well-typed value breaks a semantic rule.
    #[error("{path}: {message}")]
    InvalidConfiguration { path: FieldPath, message: String },
    /// A file named by the document could not be embedded.
    #[error("{path}: cannot read {}: {source}", .file.display())]
    Include {
        path: FieldPath,
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DecodeError {
    pub fn mismatch(expected: impl fmt::Display, actual: &Value) -> Self {
        DecodeError::TypeMismatch {
            path: FieldPath::default(),
            expected: expected.to_string(),
            actual: actual.kind().to_string(),
        }
    }

    pub fn unknown_field(shape: Shape, key: &str) -> Self {
        DecodeError::TypeMismatch {
            path: FieldPath::default(),
            expected: format!("a field of {shape}"),
            actual: format!("unexpected key `{key}`"),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        DecodeError::InvalidConfiguration {
            path: FieldPath::default(),
            message: message.into(),
        }
    }

    pub fn include(file: PathBuf, source: std::io::Error) -> Self {
        DecodeError::Include {
            path: FieldPath::default(),
            file,
            source,
        }
    }

    pub fn path(&self) -> &FieldPath {
        match self {
            DecodeError::TypeMismatch { path, .. }
            | DecodeError::InvalidConfiguration { path, .. }
            | DecodeError::Include { path, .. } => path,
        }
    }

    /// Record that the error happened under map key `key`.
    pub fn at_key(self, key: &str) -> Self {
        self.within(Segment::Key(key.to_string()))
    }

    /// Record that the error happened at list position `index`.
    pub fn at_index(self, index: usize) -> Self {
        self.within(Segment::Index(index))
    }

    fn within(mut self, segment: Segment) -> Self {
        match &mut self {
            DecodeError::TypeMismatch { path, .. }
            | DecodeError::InvalidConfiguration { path, .. }
            | DecodeError::Include { path, .. } => path.segments.push(segment),
        }
        self
    }
}

/// A type the decoder can produce from a [`Value`].
pub trait Decode: Sized {
    /// Result for a null or missing value.
    fn zero(options: &DeckOptions) -> Result<Self, DecodeError>;

    /// Decode a value that is present (not null).
    fn decode_present(value: &Value, options: &DeckOptions) -> Result<Self, DecodeError>;
}

/// Decode `value` as a `T`.
pub fn decode<T: Decode>(value: &Value, options: &DeckOptions) -> Result<T, DecodeError> {
    match value {
        Value::Null => T::zero(options),
        present => T::decode_present(present, options),
    }
}

impl Decode for String {
    fn zero(_: &DeckOptions) -> Result<Self, DecodeError> {
        Ok(String::new())
    }

    fn decode_present(value: &Value, _: &DeckOptions) -> Result<Self, DecodeError> {
        match value {
            Value::Str(text) => Ok(text.clone()),
            other => Err(DecodeError::mismatch(Shape::Str, other)),
        }
    }
}

impl Decode for bool {
    fn zero(_: &DeckOptions) -> Result<Self, DecodeError> {
        Ok(false)
    }

    fn decode_present(value: &Value, _: &DeckOptions) -> Result<Self, DecodeError> {
        match value {
            Value::Bool(flag) => Ok(*flag),
            other => Err(DecodeError::mismatch(Shape::Bool, other)),
        }
    }
}

impl Decode for i64 {
    fn zero(_: &DeckOptions) -> Result<Self, DecodeError> {
        Ok(0)
    }

    fn decode_present(value: &Value, _: &DeckOptions) -> Result<Self, DecodeError> {
        match value {
            Value::Int(n) => Ok(*n),
            other => Err(DecodeError::mismatch(Shape::Int, other)),
        }
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn zero(_: &DeckOptions) -> Result<Self, DecodeError> {
        Ok(Vec::new())
    }

    fn decode_present(value: &Value, options: &DeckOptions) -> Result<Self, DecodeError> {
        match value {
            Value::List(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| decode(item, options).map_err(|e| e.at_index(i)))
                .collect(),
            single => Ok(vec![T::decode_present(single, options)?]),
        }
    }
}

impl Decode for OutlineLevel {
    fn zero(_: &DeckOptions) -> Result<Self, DecodeError> {
        Ok(OutlineLevel::Off)
    }

    fn decode_present(value: &Value, _: &DeckOptions) -> Result<Self, DecodeError> {
        match value {
            Value::Int(depth) => OutlineLevel::try_from(*depth).map_err(|depth| {
                DecodeError::invalid(format!(
                    "outline level should be 0, 1 or 2, not {depth}"
                ))
            }),
            other => Err(DecodeError::mismatch(Shape::Outline, other)),
        }
    }
}

/// Decode a CSS length. Null is the empty length.
pub fn decode_length(value: &Value) -> Result<String, DecodeError> {
    if value.is_null() {
        return Ok(String::new());
    }
    resolve_unit(value).ok_or_else(|| DecodeError::mismatch(Shape::Length, value))
}

/// Replace hyphens in document keys so `watermark-size` binds `watermark_size`.
pub fn normalize_key(key: &str) -> String {
    key.replace('-', "_")
}

/// A structured shape with declared fields.
pub trait Schema: Sized + Clone {
    const SHAPE: Shape;
    const FIELDS: &'static [Field];

    /// The shape with every field at its declared default, before binding.
    fn blank() -> Self;

    /// Decode `value` against the declared type of field `key` and store it.
    fn bind(&mut self, key: &str, value: &Value, options: &DeckOptions)
    -> Result<(), DecodeError>;

    /// Post-construction step, run once after all fields are bound.
    fn finish(&mut self, _options: &DeckOptions) -> Result<(), DecodeError> {
        Ok(())
    }

    /// Borrow this shape out of an already-decoded node.
    fn from_node(node: &Node) -> Option<&Self>;

    fn declares(key: &str) -> bool {
        Self::FIELDS.iter().any(|field| field.name == key)
    }

    /// Replace a field, re-running its decode.
    fn set(
        &mut self,
        key: &str,
        value: impl Into<Value>,
        options: &DeckOptions,
    ) -> Result<(), DecodeError> {
        let key = normalize_key(key);
        self.bind(&key, &value.into(), options)
            .map_err(|e| e.at_key(&key))
    }
}

/// Build a shape from map entries: blank, bind every entry, finish.
pub fn construct<T: Schema>(
    entries: &BTreeMap<String, Value>,
    options: &DeckOptions,
) -> Result<T, DecodeError> {
    log::debug!("constructing {} from {} keys", T::SHAPE, entries.len());
    let mut shape = T::blank();
    for (key, value) in entries {
        let key = normalize_key(key);
        shape
            .bind(&key, value, options)
            .map_err(|e| e.at_key(&key))?;
    }
    shape.finish(options)?;
    Ok(shape)
}

fn decode_schema<T: Schema>(value: &Value, options: &DeckOptions) -> Result<T, DecodeError> {
    match value {
        Value::Node(node) => T::from_node(node)
            .cloned()
            .ok_or_else(|| DecodeError::mismatch(T::SHAPE, value)),
        Value::Map(entries) => construct(entries, options),
        other => Err(DecodeError::mismatch(T::SHAPE, other)),
    }
}

macro_rules! decode_via_schema {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Decode for $ty {
                fn zero(options: &DeckOptions) -> Result<Self, DecodeError> {
                    construct(&BTreeMap::new(), options)
                }

                fn decode_present(value: &Value, options: &DeckOptions) -> Result<Self, DecodeError> {
                    decode_schema(value, options)
                }
            }
        )*
    };
}

decode_via_schema!(
    VisualBlock,
    Image,
    FooterBlock,
    FragmentStyles,
    Slide,
    TopSlide,
    DocumentConfig,
);
