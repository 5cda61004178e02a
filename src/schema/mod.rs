//! The presentation shapes the decoder produces.
//!
//! | Shape | Document keys |
//! |-------|---------------|
//! | [`VisualBlock`] | `src`, `width`, `height` |
//! | [`Image`] | visual block + `label` |
//! | [`FooterBlock`] | image + `link` |
//! | [`FragmentStyles`] | `img`, `math`, `youtube`, `embed`, `ul`, `ol` |
//! | [`Slide`] | `id`, `title`, `doc`, `math`, `ol`, `ul`, `img`, `youtube`, `embed`, `fragment`, `include` |
//! | [`TopSlide`] | slide + `sub` |
//! | [`DocumentConfig`] | see [`DocumentConfig`] |
//!
//! Where one shape extends another, it embeds the parent as a sub-record
//! and serializes flattened, so the renderer sees one flat object.
//!
//! Fields are private. Read them through accessors; write them through
//! [`Schema::set`](crate::decode::Schema::set), which decodes the new value
//! first.

mod block;
mod document;
mod slide;

pub use block::{FooterBlock, Image, VisualBlock};
pub use document::DocumentConfig;
pub use slide::{FragmentKind, FragmentStyles, Slide, TopSlide};

use crate::config::DeckOptions;
use crate::decode::DecodeError;

/// Read a file named by the document from the template directory.
fn read_template(name: &str, options: &DeckOptions) -> Result<String, DecodeError> {
    let file = options.template_path(name);
    log::debug!("embedding {}", file.display());
    std::fs::read_to_string(&file).map_err(|source| DecodeError::include(file, source))
}
