//! The untyped document tree handed to the decoder.
//!
//! A [`Value`] is what a document parser produces: booleans, numbers,
//! strings, lists, string-keyed maps and null. Parsing the raw document is
//! somebody else's job; this module only provides conversions from the trees
//! that `serde_yaml`, `serde_json` and `toml` already build.
//!
//! One extra variant, [`Value::Node`], carries a shape that has already been
//! decoded. Code that assembles decks programmatically (the error deck, the
//! outline slide) can hand finished slides back to the decoder, which returns
//! them unchanged.

use std::collections::BTreeMap;

use crate::decode::Shape;
use crate::schema::{
    DocumentConfig, FooterBlock, FragmentStyles, Image, Slide, TopSlide, VisualBlock,
};

/// A node of the generic document tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
    /// A shape that went through the decoder already.
    Node(Box<Node>),
}

impl Value {
    /// Build a map value from key/value pairs.
    pub fn map<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Human-readable name of this value's type, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Node(node) => node.shape().name(),
        }
    }
}

/// The closed set of decoded shapes a [`Value`] may carry.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    VisualBlock(VisualBlock),
    Image(Image),
    Footer(FooterBlock),
    Fragments(FragmentStyles),
    Slide(Slide),
    TopSlide(TopSlide),
    Document(DocumentConfig),
}

impl Node {
    pub fn shape(&self) -> Shape {
        match self {
            Node::VisualBlock(_) => Shape::VisualBlock,
            Node::Image(_) => Shape::Image,
            Node::Footer(_) => Shape::Footer,
            Node::Fragments(_) => Shape::Fragments,
            Node::Slide(_) => Shape::Slide,
            Node::TopSlide(_) => Shape::TopSlide,
            Node::Document(_) => Shape::Document,
        }
    }
}

macro_rules! node_conversions {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Node {
                fn from(shape: $ty) -> Self {
                    Node::$variant(shape)
                }
            }

            impl From<$ty> for Value {
                fn from(shape: $ty) -> Self {
                    Value::Node(Box::new(Node::$variant(shape)))
                }
            }
        )*
    };
}

node_conversions! {
    VisualBlock => VisualBlock,
    Image => Image,
    Footer => FooterBlock,
    Fragments => FragmentStyles,
    Slide => Slide,
    TopSlide => TopSlide,
    Document => DocumentConfig,
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Str(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Str(text)
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Value::Bool(flag)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Json::String(s) => Value::Str(s),
            Json::Array(items) => Value::List(items.into_iter().map(Value::from).collect()),
            Json::Object(entries) => {
                Value::Map(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<serde_yaml::Value> for Value {
    fn from(yaml: serde_yaml::Value) -> Self {
        use serde_yaml::Value as Yaml;
        match yaml {
            Yaml::Null => Value::Null,
            Yaml::Bool(b) => Value::Bool(b),
            Yaml::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Yaml::String(s) => Value::Str(s),
            Yaml::Sequence(items) => Value::List(items.into_iter().map(Value::from).collect()),
            Yaml::Mapping(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (yaml_key(k), v.into()))
                    .collect(),
            ),
            Yaml::Tagged(tagged) => tagged.value.into(),
        }
    }
}

/// YAML allows non-string keys; they are kept as their source text so the
/// decoder can report them as unexpected fields.
fn yaml_key(key: serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::String(s) => s,
        other => serde_yaml::to_string(&other)
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
    }
}

impl From<toml::Value> for Value {
    fn from(toml: toml::Value) -> Self {
        use toml::Value as Toml;
        match toml {
            Toml::String(s) => Value::Str(s),
            Toml::Integer(i) => Value::Int(i),
            Toml::Float(f) => Value::Float(f),
            Toml::Boolean(b) => Value::Bool(b),
            Toml::Datetime(dt) => Value::Str(dt.to_string()),
            Toml::Array(items) => Value::List(items.into_iter().map(Value::from).collect()),
            Toml::Table(entries) => {
                Value::Map(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_numbers_split_into_int_and_float() {
        assert_eq!(Value::from(json!(12)), Value::Int(12));
        assert_eq!(Value::from(json!(1.5)), Value::Float(1.5));
    }

    #[test]
    fn json_object_becomes_map() {
        let value = Value::from(json!({"title": "Deck", "nav": [{"title": "Home"}]}));
        let Value::Map(entries) = value else {
            panic!("expected a map");
        };
        assert_eq!(entries["title"], Value::Str("Deck".into()));
        assert!(matches!(entries["nav"], Value::List(ref items) if items.len() == 1));
    }

    #[test]
    fn yaml_tree_converts() {
        let yaml: serde_yaml::Value = serde_yaml::from_str(
            r#"
title: Talk
outline: 2
history: false
watermark-size: 12.5
nav:
  - title: Home
  -
"#,
        )
        .unwrap();
        let Value::Map(entries) = Value::from(yaml) else {
            panic!("expected a map");
        };
        assert_eq!(entries["outline"], Value::Int(2));
        assert_eq!(entries["history"], Value::Bool(false));
        assert_eq!(entries["watermark-size"], Value::Float(12.5));
        assert_eq!(
            entries["nav"],
            Value::List(vec![Value::map([("title", "Home".into())]), Value::Null])
        );
    }

    #[test]
    fn yaml_non_string_keys_keep_their_text() {
        let yaml: serde_yaml::Value = serde_yaml::from_str("1: one\ntrue: yes\n").unwrap();
        let Value::Map(entries) = Value::from(yaml) else {
            panic!("expected a map");
        };
        assert!(entries.contains_key("1"));
        assert!(entries.contains_key("true"));
    }

    #[test]
    fn toml_table_converts() {
        let toml: toml::Value = toml::from_str("title = \"Deck\"\nprogress = true\n").unwrap();
        let value = Value::from(toml);
        assert_eq!(
            value,
            Value::map([
                ("progress", Value::Bool(true)),
                ("title", Value::Str("Deck".into())),
            ])
        );
    }

    #[test]
    fn kind_names_value_types() {
        assert_eq!(Value::Null.kind(), "null");
        assert_eq!(Value::from(vec!["a", "b"]).kind(), "list");
        assert_eq!(Value::map::<&str>([]).kind(), "map");
        assert_eq!(Value::from(3.0).kind(), "float");
    }
}
