//! JSON Schema of the deck document, for editor completion and validation.
//!
//! Generated from the same [`Field`] declarations the decoder binds against,
//! so an editor that validates `reveal.yaml` with this schema accepts exactly
//! the keys and value types [`decode`](crate::decode::decode) accepts. The
//! schema lists canonical underscore keys; hyphenated spellings are a decoder
//! convenience and are not listed.
//!
//! Limits the schema cannot express: the outline synthesis and the embedding
//! of `include` and `extra_style` files happen after validation.

use serde_json::{Map, Value as Json, json};

use crate::decode::{Field, Shape};

const DRAFT: &str = "http://json-schema.org/draft-07/schema#";

/// Structured shapes that get a `definitions` entry, keyed by name.
const DEFINITIONS: &[(&str, Shape)] = &[
    ("visual_block", Shape::VisualBlock),
    ("image", Shape::Image),
    ("footer", Shape::Footer),
    ("fragment", Shape::Fragments),
    ("slide", Shape::Slide),
    ("top_slide", Shape::TopSlide),
];

/// The full document schema.
pub fn document_schema() -> Json {
    let mut definitions = Map::new();
    for (name, shape) in DEFINITIONS {
        definitions.insert(name.to_string(), object_schema(shape.fields()));
    }

    let mut schema = object_schema(Shape::Document.fields());
    if let Json::Object(root) = &mut schema {
        root.insert("$schema".into(), json!(DRAFT));
        root.insert("title".into(), json!("Reveal deck"));
        root.insert("definitions".into(), Json::Object(definitions));
    }
    schema
}

fn object_schema(fields: &[Field]) -> Json {
    let properties: Map<String, Json> = fields
        .iter()
        .map(|field| (field.name.to_string(), shape_schema(field.shape)))
        .collect();
    json!({
        "type": ["object", "null"],
        "properties": properties,
        "additionalProperties": false,
    })
}

fn shape_schema(shape: Shape) -> Json {
    match shape {
        Shape::Str => json!({"type": ["string", "null"]}),
        Shape::Bool => json!({"type": ["boolean", "null"]}),
        Shape::Int => json!({"type": ["integer", "null"]}),
        Shape::Length => json!({"type": ["string", "number", "null"]}),
        Shape::Outline => json!({"enum": [0, 1, 2, null]}),
        Shape::List(item) => {
            let item = shape_schema(*item);
            json!({
                "oneOf": [
                    {"type": "array", "items": item.clone()},
                    item,
                ],
            })
        }
        Shape::Document => json!({"$ref": "#"}),
        structured => match definition_name(structured) {
            Some(name) => json!({"$ref": format!("#/definitions/{name}")}),
            None => json!({}),
        },
    }
}

fn definition_name(shape: Shape) -> Option<&'static str> {
    DEFINITIONS
        .iter()
        .find(|(_, candidate)| *candidate == shape)
        .map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::Schema;
    use crate::schema::{DocumentConfig, Slide};

    #[test]
    fn root_is_draft_07_object() {
        let schema = document_schema();
        assert_eq!(schema["$schema"], DRAFT);
        assert_eq!(schema["additionalProperties"], false);
        assert_eq!(schema["type"], json!(["object", "null"]));
    }

    #[test]
    fn every_document_field_is_listed() {
        let schema = document_schema();
        let properties = schema["properties"].as_object().unwrap();
        assert_eq!(properties.len(), DocumentConfig::FIELDS.len());
        for field in DocumentConfig::FIELDS {
            assert!(properties.contains_key(field.name), "missing {}", field.name);
        }
    }

    #[test]
    fn every_structured_shape_has_a_definition() {
        let schema = document_schema();
        for (name, shape) in DEFINITIONS {
            let definition = &schema["definitions"][*name];
            let listed = definition["properties"].as_object().unwrap();
            assert_eq!(listed.len(), shape.fields().len(), "{name}");
        }
        let slide = &schema["definitions"]["slide"]["properties"];
        assert_eq!(slide.as_object().unwrap().len(), Slide::FIELDS.len());
    }

    #[test]
    fn field_types() {
        let schema = document_schema();
        let props = &schema["properties"];
        assert_eq!(props["title"]["type"], json!(["string", "null"]));
        assert_eq!(props["history"]["type"], json!(["boolean", "null"]));
        assert_eq!(props["watermark_size"]["type"], json!(["string", "number", "null"]));
        assert_eq!(props["outline"]["enum"], json!([0, 1, 2, null]));
        assert_eq!(props["footer"]["$ref"], "#/definitions/footer");
    }

    #[test]
    fn lists_accept_a_single_item() {
        let schema = document_schema();
        let nav = &schema["properties"]["nav"]["oneOf"];
        assert_eq!(nav[0]["type"], "array");
        assert_eq!(nav[0]["items"]["$ref"], "#/definitions/top_slide");
        assert_eq!(nav[1]["$ref"], "#/definitions/top_slide");

        let sub = &schema["definitions"]["top_slide"]["properties"]["sub"]["oneOf"];
        assert_eq!(sub[0]["items"]["$ref"], "#/definitions/slide");
    }

    #[test]
    fn sub_is_only_on_top_slides() {
        let schema = document_schema();
        assert!(schema["definitions"]["slide"]["properties"].get("sub").is_none());
        assert!(schema["definitions"]["top_slide"]["properties"].get("sub").is_some());
    }
}
