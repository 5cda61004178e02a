//! The top-level document: deck metadata, theme options and navigation.

use serde::Serialize;

use super::read_template;
use crate::config::DeckOptions;
use crate::decode::{DecodeError, Field, Schema, Shape, decode, decode_length};
use crate::normalize::resolve_asset;
use crate::outline::{OutlineLevel, synthesize_outline};
use crate::schema::{FooterBlock, TopSlide};
use crate::value::{Node, Value};

/// A decoded deck, ready for the renderer.
///
/// | Key | Type | Default |
/// |-----|------|---------|
/// | `title` | string | `"Untitled"` |
/// | `description`, `author` | string | `""` |
/// | `theme` | string | `"serif"` |
/// | `icon` | asset | `"img/icon.png"` |
/// | `outline` | 0, 1 or 2 | `0` |
/// | `default_style` | bool | `true` |
/// | `extra_style` | file name or inline CSS | `""` |
/// | `watermark` | asset | `""` |
/// | `watermark_size` | length | `""` |
/// | `history` | bool | `true` |
/// | `transition` | string | `"slide"` |
/// | `slide_num` | string | `"c/t"` |
/// | `progress` | bool | `true` |
/// | `footer` | [`FooterBlock`] | empty |
/// | `nav` | list of [`TopSlide`] | empty |
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentConfig {
    title: String,
    description: String,
    author: String,
    theme: String,
    icon: String,
    outline: OutlineLevel,
    default_style: bool,
    extra_style: String,
    watermark: String,
    watermark_size: String,
    history: bool,
    transition: String,
    slide_num: String,
    progress: bool,
    footer: FooterBlock,
    nav: Vec<TopSlide>,
}

impl DocumentConfig {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// reveal.js theme name.
    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn outline(&self) -> OutlineLevel {
        self.outline
    }

    /// Whether the renderer includes its built-in style sheet.
    pub fn default_style(&self) -> bool {
        self.default_style
    }

    /// Extra CSS, already read from its file when the document named one.
    pub fn extra_style(&self) -> &str {
        &self.extra_style
    }

    pub fn watermark(&self) -> &str {
        &self.watermark
    }

    pub fn watermark_size(&self) -> &str {
        &self.watermark_size
    }

    pub fn history(&self) -> bool {
        self.history
    }

    pub fn transition(&self) -> &str {
        &self.transition
    }

    pub fn slide_num(&self) -> &str {
        &self.slide_num
    }

    pub fn progress(&self) -> bool {
        self.progress
    }

    pub fn footer(&self) -> &FooterBlock {
        &self.footer
    }

    pub fn nav(&self) -> &[TopSlide] {
        &self.nav
    }

    /// `history` as a JavaScript literal.
    pub fn history_str(&self) -> &'static str {
        if self.history { "true" } else { "false" }
    }

    /// `slide_num` as reveal.js expects it.
    pub fn slide_num_str(&self) -> String {
        self.slide_num.to_lowercase()
    }

    fn embed_style_sheet(&mut self, options: &DeckOptions) -> Result<(), DecodeError> {
        if self.extra_style.is_empty() || !options.template_path(&self.extra_style).is_file() {
            return Ok(());
        }
        let css = read_template(&self.extra_style, options).map_err(|e| e.at_key("extra_style"))?;
        self.set("extra_style", css, options)
    }
}

impl Schema for DocumentConfig {
    const SHAPE: Shape = Shape::Document;
    const FIELDS: &'static [Field] = &[
        Field::new("title", Shape::Str),
        Field::new("description", Shape::Str),
        Field::new("author", Shape::Str),
        Field::new("theme", Shape::Str),
        Field::new("icon", Shape::Str),
        Field::new("outline", Shape::Outline),
        Field::new("default_style", Shape::Bool),
        Field::new("extra_style", Shape::Str),
        Field::new("watermark", Shape::Str),
        Field::new("watermark_size", Shape::Length),
        Field::new("history", Shape::Bool),
        Field::new("transition", Shape::Str),
        Field::new("slide_num", Shape::Str),
        Field::new("progress", Shape::Bool),
        Field::new("footer", Shape::Footer),
        Field::new("nav", Shape::List(&Shape::TopSlide)),
    ];

    fn blank() -> Self {
        Self {
            title: "Untitled".to_string(),
            description: String::new(),
            author: String::new(),
            theme: "serif".to_string(),
            icon: "img/icon.png".to_string(),
            outline: OutlineLevel::Off,
            default_style: true,
            extra_style: String::new(),
            watermark: String::new(),
            watermark_size: String::new(),
            history: true,
            transition: "slide".to_string(),
            slide_num: "c/t".to_string(),
            progress: true,
            footer: FooterBlock::blank(),
            nav: Vec::new(),
        }
    }

    fn bind(&mut self, key: &str, value: &Value, options: &DeckOptions) -> Result<(), DecodeError> {
        match key {
            "title" => self.title = decode(value, options)?,
            "description" => self.description = decode(value, options)?,
            "author" => self.author = decode(value, options)?,
            "theme" => self.theme = decode(value, options)?,
            "icon" => self.icon = decode(value, options)?,
            "outline" => self.outline = decode(value, options)?,
            "default_style" => self.default_style = decode(value, options)?,
            "extra_style" => self.extra_style = decode(value, options)?,
            "watermark" => self.watermark = decode(value, options)?,
            "watermark_size" => self.watermark_size = decode_length(value)?,
            "history" => self.history = decode(value, options)?,
            "transition" => self.transition = decode(value, options)?,
            "slide_num" => self.slide_num = decode(value, options)?,
            "progress" => self.progress = decode(value, options)?,
            "footer" => self.footer = decode(value, options)?,
            "nav" => self.nav = decode(value, options)?,
            _ => return Err(DecodeError::unknown_field(Self::SHAPE, key)),
        }
        Ok(())
    }

    fn finish(&mut self, options: &DeckOptions) -> Result<(), DecodeError> {
        let icon = resolve_asset(&self.icon, options);
        self.set("icon", icon, options)?;
        let watermark = resolve_asset(&self.watermark, options);
        self.set("watermark", watermark, options)?;
        self.embed_style_sheet(options)?;
        synthesize_outline(&mut self.nav, self.outline, options).map_err(|e| e.at_key("nav"))?;
        Ok(())
    }

    fn from_node(node: &Node) -> Option<&Self> {
        match node {
            Node::Document(config) => Some(config),
            _ => None,
        }
    }
}
