//! Table-of-contents synthesis.
//!
//! With `outline: 1` or `outline: 2` and more than one top-level slide, the
//! deck gains an "Outline" sub-slide under its first (title) slide. The body
//! is a markdown list linking every titled top-level slide, and with level 2
//! every titled sub-slide as well:
//!
//! ```text
//! + [Background](#/1)
//!   + [Prior work](#/1/1)
//! + [Method](#/2)
//! ```
//!
//! Link targets follow reveal.js addressing: `#/h` for the `h`-th horizontal
//! slide and `#/h/v` for its `v`-th vertical slide. The title slide is `#/0`
//! and is never listed.

use serde::{Serialize, Serializer};

use crate::config::DeckOptions;
use crate::decode::DecodeError;
use crate::schema::TopSlide;
use crate::value::Value;

/// Title of the synthesized slide.
pub const OUTLINE_TITLE: &str = "Outline";

/// How much of the navigation tree the outline lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum OutlineLevel {
    /// No outline slide.
    #[default]
    Off,
    /// Top-level slides only.
    Pages,
    /// Top-level slides and their sub-slides.
    Sections,
}

impl OutlineLevel {
    pub fn depth(self) -> u8 {
        match self {
            OutlineLevel::Off => 0,
            OutlineLevel::Pages => 1,
            OutlineLevel::Sections => 2,
        }
    }
}

impl TryFrom<i64> for OutlineLevel {
    type Error = i64;

    fn try_from(depth: i64) -> Result<Self, Self::Error> {
        match depth {
            0 => Ok(OutlineLevel::Off),
            1 => Ok(OutlineLevel::Pages),
            2 => Ok(OutlineLevel::Sections),
            other => Err(other),
        }
    }
}

impl Serialize for OutlineLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.depth())
    }
}

/// Markdown body of the outline slide, or `None` when no outline applies.
pub fn outline_body(nav: &[TopSlide], level: OutlineLevel) -> Option<String> {
    if level == OutlineLevel::Off || nav.len() < 2 {
        return None;
    }
    let mut lines = Vec::new();
    for (h, top) in nav.iter().enumerate().skip(1) {
        if !top.title().is_empty() {
            lines.push(format!("+ [{}](#/{h})", top.title()));
        }
        if level < OutlineLevel::Sections {
            continue;
        }
        for (v, sub) in top.sub().iter().enumerate() {
            if !sub.title().is_empty() {
                lines.push(format!("  + [{}](#/{h}/{})", sub.title(), v + 1));
            }
        }
    }
    Some(lines.join("\n"))
}

/// Append the outline slide to the first top-level slide's sub-slides.
///
/// Returns whether a slide was added.
pub fn synthesize_outline(
    nav: &mut [TopSlide],
    level: OutlineLevel,
    options: &DeckOptions,
) -> Result<bool, DecodeError> {
    let Some(body) = outline_body(nav, level) else {
        return Ok(false);
    };
    let Some(home) = nav.first_mut() else {
        return Ok(false);
    };
    log::debug!(
        "synthesizing level {} outline with {} entries",
        level.depth(),
        body.lines().count()
    );
    let slide = Value::map([("title", OUTLINE_TITLE.into()), ("doc", body.into())]);
    home.push_sub(slide, options).map_err(|e| e.at_index(0))?;
    Ok(true)
}
