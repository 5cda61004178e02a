//! Sized visual blocks: embeds, images and the footer logo.

use serde::Serialize;

use crate::config::DeckOptions;
use crate::decode::{DecodeError, Field, Schema, Shape, decode, decode_length};
use crate::normalize::resolve_asset;
use crate::value::{Node, Value};

/// Something with a source and a size: a video, an iframe embed, a picture.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualBlock {
    src: String,
    width: String,
    height: String,
}

impl VisualBlock {
    /// Absolute URL or resolved static-asset path; empty when unset.
    pub fn source(&self) -> &str {
        &self.src
    }

    pub fn width(&self) -> &str {
        &self.width
    }

    pub fn height(&self) -> &str {
        &self.height
    }
}

impl Schema for VisualBlock {
    const SHAPE: Shape = Shape::VisualBlock;
    const FIELDS: &'static [Field] = &[
        Field::new("src", Shape::Str),
        Field::new("width", Shape::Length),
        Field::new("height", Shape::Length),
    ];

    fn blank() -> Self {
        Self {
            src: String::new(),
            width: String::new(),
            height: String::new(),
        }
    }

    fn bind(&mut self, key: &str, value: &Value, options: &DeckOptions) -> Result<(), DecodeError> {
        match key {
            "src" => self.src = decode(value, options)?,
            "width" => self.width = decode_length(value)?,
            "height" => self.height = decode_length(value)?,
            _ => return Err(DecodeError::unknown_field(Self::SHAPE, key)),
        }
        Ok(())
    }

    fn finish(&mut self, options: &DeckOptions) -> Result<(), DecodeError> {
        let src = resolve_asset(&self.src, options);
        self.set("src", src, options)
    }

    fn from_node(node: &Node) -> Option<&Self> {
        match node {
            Node::VisualBlock(block) => Some(block),
            _ => None,
        }
    }
}

/// A captioned picture.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Image {
    #[serde(flatten)]
    block: VisualBlock,
    label: String,
}

impl Image {
    pub fn block(&self) -> &VisualBlock {
        &self.block
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Schema for Image {
    const SHAPE: Shape = Shape::Image;
    const FIELDS: &'static [Field] = &[
        Field::new("src", Shape::Str),
        Field::new("width", Shape::Length),
        Field::new("height", Shape::Length),
        Field::new("label", Shape::Str),
    ];

    fn blank() -> Self {
        Self {
            block: VisualBlock::blank(),
            label: String::new(),
        }
    }

    fn bind(&mut self, key: &str, value: &Value, options: &DeckOptions) -> Result<(), DecodeError> {
        match key {
            "label" => self.label = decode(value, options)?,
            _ if Self::declares(key) => self.block.bind(key, value, options)?,
            _ => return Err(DecodeError::unknown_field(Self::SHAPE, key)),
        }
        Ok(())
    }

    fn finish(&mut self, options: &DeckOptions) -> Result<(), DecodeError> {
        self.block.finish(options)
    }

    fn from_node(node: &Node) -> Option<&Self> {
        match node {
            Node::Image(image) => Some(image),
            _ => None,
        }
    }
}

/// The logo in the page footer, optionally a link.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FooterBlock {
    #[serde(flatten)]
    image: Image,
    link: String,
}

impl FooterBlock {
    pub fn image(&self) -> &Image {
        &self.image
    }

    /// Link target; empty for a plain logo.
    pub fn link(&self) -> &str {
        &self.link
    }
}

impl Schema for FooterBlock {
    const SHAPE: Shape = Shape::Footer;
    const FIELDS: &'static [Field] = &[
        Field::new("src", Shape::Str),
        Field::new("width", Shape::Length),
        Field::new("height", Shape::Length),
        Field::new("label", Shape::Str),
        Field::new("link", Shape::Str),
    ];

    fn blank() -> Self {
        Self {
            image: Image::blank(),
            link: String::new(),
        }
    }

    fn bind(&mut self, key: &str, value: &Value, options: &DeckOptions) -> Result<(), DecodeError> {
        match key {
            "link" => self.link = decode(value, options)?,
            _ if Self::declares(key) => self.image.bind(key, value, options)?,
            _ => return Err(DecodeError::unknown_field(Self::SHAPE, key)),
        }
        Ok(())
    }

    fn finish(&mut self, options: &DeckOptions) -> Result<(), DecodeError> {
        self.image.finish(options)
    }

    fn from_node(node: &Node) -> Option<&Self> {
        match node {
            Node::Footer(footer) => Some(footer),
            _ => None,
        }
    }
}
