//! Slides and their fragment settings.

use serde::Serialize;

use super::read_template;
use crate::config::DeckOptions;
use crate::decode::{DecodeError, Field, Schema, Shape, decode};
use crate::schema::{Image, VisualBlock};
use crate::value::{Node, Value};

const DEFAULT_EMBED_WIDTH: &str = "1000px";
const DEFAULT_EMBED_HEIGHT: &str = "450px";

/// Slide element kinds that can be revealed as fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    Image,
    Math,
    Video,
    Embed,
    UnorderedList,
    OrderedList,
}

impl FragmentKind {
    pub const ALL: [FragmentKind; 6] = [
        FragmentKind::Image,
        FragmentKind::Math,
        FragmentKind::Video,
        FragmentKind::Embed,
        FragmentKind::UnorderedList,
        FragmentKind::OrderedList,
    ];

    /// Document key naming this kind under `fragment`.
    pub fn key(self) -> &'static str {
        match self {
            FragmentKind::Image => "img",
            FragmentKind::Math => "math",
            FragmentKind::Video => "youtube",
            FragmentKind::Embed => "embed",
            FragmentKind::UnorderedList => "ul",
            FragmentKind::OrderedList => "ol",
        }
    }
}

/// Fragment animation class per element kind, e.g. `img: fade-in`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FragmentStyles {
    img: String,
    math: String,
    youtube: String,
    embed: String,
    ul: String,
    ol: String,
}

impl FragmentStyles {
    /// Animation name for `kind`; empty means "not a fragment".
    pub fn get(&self, kind: FragmentKind) -> &str {
        match kind {
            FragmentKind::Image => &self.img,
            FragmentKind::Math => &self.math,
            FragmentKind::Video => &self.youtube,
            FragmentKind::Embed => &self.embed,
            FragmentKind::UnorderedList => &self.ul,
            FragmentKind::OrderedList => &self.ol,
        }
    }

    fn slot(&mut self, key: &str) -> Option<&mut String> {
        match key {
            "img" => Some(&mut self.img),
            "math" => Some(&mut self.math),
            "youtube" => Some(&mut self.youtube),
            "embed" => Some(&mut self.embed),
            "ul" => Some(&mut self.ul),
            "ol" => Some(&mut self.ol),
            _ => None,
        }
    }
}

impl Schema for FragmentStyles {
    const SHAPE: Shape = Shape::Fragments;
    const FIELDS: &'static [Field] = &[
        Field::new("img", Shape::Str),
        Field::new("math", Shape::Str),
        Field::new("youtube", Shape::Str),
        Field::new("embed", Shape::Str),
        Field::new("ul", Shape::Str),
        Field::new("ol", Shape::Str),
    ];

    fn blank() -> Self {
        Self {
            img: String::new(),
            math: String::new(),
            youtube: String::new(),
            embed: String::new(),
            ul: String::new(),
            ol: String::new(),
        }
    }

    fn bind(&mut self, key: &str, value: &Value, options: &DeckOptions) -> Result<(), DecodeError> {
        let slot = self
            .slot(key)
            .ok_or_else(|| DecodeError::unknown_field(Self::SHAPE, key))?;
        *slot = decode(value, options)?;
        Ok(())
    }

    fn from_node(node: &Node) -> Option<&Self> {
        match node {
            Node::Fragments(styles) => Some(styles),
            _ => None,
        }
    }
}

/// A single slide.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slide {
    id: String,
    title: String,
    doc: String,
    math: String,
    ol: Vec<String>,
    ul: Vec<String>,
    img: Vec<Image>,
    youtube: VisualBlock,
    embed: VisualBlock,
    fragment: FragmentStyles,
}

impl Slide {
    /// Anchor id; empty when the renderer should number the slide.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Markdown body.
    pub fn doc(&self) -> &str {
        &self.doc
    }

    /// Math markup shown under the body.
    pub fn math(&self) -> &str {
        &self.math
    }

    pub fn ordered_list(&self) -> &[String] {
        &self.ol
    }

    pub fn unordered_list(&self) -> &[String] {
        &self.ul
    }

    pub fn images(&self) -> &[Image] {
        &self.img
    }

    pub fn video(&self) -> &VisualBlock {
        &self.youtube
    }

    pub fn embed(&self) -> &VisualBlock {
        &self.embed
    }

    pub fn fragments(&self) -> &FragmentStyles {
        &self.fragment
    }
}

impl Schema for Slide {
    const SHAPE: Shape = Shape::Slide;
    const FIELDS: &'static [Field] = &[
        Field::new("id", Shape::Str),
        Field::new("title", Shape::Str),
        Field::new("doc", Shape::Str),
        Field::new("math", Shape::Str),
        Field::new("ol", Shape::List(&Shape::Str)),
        Field::new("ul", Shape::List(&Shape::Str)),
        Field::new("img", Shape::List(&Shape::Image)),
        Field::new("youtube", Shape::VisualBlock),
        Field::new("embed", Shape::VisualBlock),
        Field::new("fragment", Shape::Fragments),
        Field::new("include", Shape::Str),
    ];

    fn blank() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            doc: String::new(),
            math: String::new(),
            ol: Vec::new(),
            ul: Vec::new(),
            img: Vec::new(),
            youtube: VisualBlock::blank(),
            embed: VisualBlock::blank(),
            fragment: FragmentStyles::blank(),
        }
    }

    fn bind(&mut self, key: &str, value: &Value, options: &DeckOptions) -> Result<(), DecodeError> {
        match key {
            "id" => self.id = decode(value, options)?,
            "title" => self.title = decode(value, options)?,
            "doc" => self.doc = decode(value, options)?,
            "math" => self.math = decode(value, options)?,
            "ol" => self.ol = decode(value, options)?,
            "ul" => self.ul = decode(value, options)?,
            "img" => self.img = decode(value, options)?,
            "youtube" => self.youtube = decode(value, options)?,
            "embed" => self.embed = decode(value, options)?,
            "fragment" => self.fragment = decode(value, options)?,
            // Map keys bind in sorted order, so `include` lands after `doc`
            // and the file body wins over an inline one.
            "include" => {
                let name: String = decode(value, options)?;
                if !name.is_empty() {
                    self.doc = read_template(&name, options)?;
                }
            }
            _ => return Err(DecodeError::unknown_field(Self::SHAPE, key)),
        }
        Ok(())
    }

    fn finish(&mut self, options: &DeckOptions) -> Result<(), DecodeError> {
        if self.embed.width().is_empty() {
            self.embed
                .set("width", DEFAULT_EMBED_WIDTH, options)
                .map_err(|e| e.at_key("embed"))?;
        }
        if self.embed.height().is_empty() {
            self.embed
                .set("height", DEFAULT_EMBED_HEIGHT, options)
                .map_err(|e| e.at_key("embed"))?;
        }
        Ok(())
    }

    fn from_node(node: &Node) -> Option<&Self> {
        match node {
            Node::Slide(slide) => Some(slide),
            _ => None,
        }
    }
}

/// A horizontal slide with its vertical sub-slides.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopSlide {
    #[serde(flatten)]
    slide: Slide,
    sub: Vec<Slide>,
}

impl TopSlide {
    pub fn slide(&self) -> &Slide {
        &self.slide
    }

    pub fn title(&self) -> &str {
        self.slide.title()
    }

    pub fn sub(&self) -> &[Slide] {
        &self.sub
    }

    /// Append a sub-slide, decoding it first. Accepts a raw map or a
    /// decoded [`Slide`].
    pub fn push_sub(
        &mut self,
        slide: impl Into<Value>,
        options: &DeckOptions,
    ) -> Result<(), DecodeError> {
        let index = self.sub.len();
        let slide: Slide = decode(&slide.into(), options)
            .map_err(|e| e.at_index(index).at_key("sub"))?;
        self.sub.push(slide);
        Ok(())
    }
}

impl Schema for TopSlide {
    const SHAPE: Shape = Shape::TopSlide;
    const FIELDS: &'static [Field] = &[
        Field::new("id", Shape::Str),
        Field::new("title", Shape::Str),
        Field::new("doc", Shape::Str),
        Field::new("math", Shape::Str),
        Field::new("ol", Shape::List(&Shape::Str)),
        Field::new("ul", Shape::List(&Shape::Str)),
        Field::new("img", Shape::List(&Shape::Image)),
        Field::new("youtube", Shape::VisualBlock),
        Field::new("embed", Shape::VisualBlock),
        Field::new("fragment", Shape::Fragments),
        Field::new("include", Shape::Str),
        Field::new("sub", Shape::List(&Shape::Slide)),
    ];

    fn blank() -> Self {
        Self {
            slide: Slide::blank(),
            sub: Vec::new(),
        }
    }

    fn bind(&mut self, key: &str, value: &Value, options: &DeckOptions) -> Result<(), DecodeError> {
        match key {
            "sub" => self.sub = decode(value, options)?,
            _ if Self::declares(key) => self.slide.bind(key, value, options)?,
            _ => return Err(DecodeError::unknown_field(Self::SHAPE, key)),
        }
        Ok(())
    }

    fn finish(&mut self, options: &DeckOptions) -> Result<(), DecodeError> {
        self.slide.finish(options)
    }

    fn from_node(node: &Node) -> Option<&Self> {
        match node {
            Node::TopSlide(top) => Some(top),
            _ => None,
        }
    }
}
