//! The eight fixed layout slots and the renderer's placeholder capability.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the eight layout templates a renderer recognizes.
///
/// Serialized as its integer index (0-7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum LayoutSlot {
    TitleSlide = 0,
    TitleAndContent = 1,
    SectionHeader = 2,
    TwoContent = 3,
    Comparison = 4,
    TitleOnly = 5,
    Blank = 6,
    ContentWithCaption = 7,
}

impl LayoutSlot {
    /// All slots in index order.
    pub const ALL: [LayoutSlot; 8] = [
        LayoutSlot::TitleSlide,
        LayoutSlot::TitleAndContent,
        LayoutSlot::SectionHeader,
        LayoutSlot::TwoContent,
        LayoutSlot::Comparison,
        LayoutSlot::TitleOnly,
        LayoutSlot::Blank,
        LayoutSlot::ContentWithCaption,
    ];

    /// The slot's integer index.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Human-readable template name.
    pub fn name(self) -> &'static str {
        match self {
            LayoutSlot::TitleSlide => "Title Slide",
            LayoutSlot::TitleAndContent => "Title and Content",
            LayoutSlot::SectionHeader => "Section Header",
            LayoutSlot::TwoContent => "Two Content",
            LayoutSlot::Comparison => "Comparison",
            LayoutSlot::TitleOnly => "Title Only",
            LayoutSlot::Blank => "Blank",
            LayoutSlot::ContentWithCaption => "Content with Caption",
        }
    }
}

impl From<LayoutSlot> for u8 {
    fn from(slot: LayoutSlot) -> Self {
        slot.index()
    }
}

impl TryFrom<u8> for LayoutSlot {
    type Error = Error;

    fn try_from(index: u8) -> Result<Self> {
        LayoutSlot::ALL
            .get(index as usize)
            .copied()
            .ok_or(Error::InvalidSlot(index))
    }
}

impl fmt::Display for LayoutSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.index(), self.name())
    }
}

/// What the external renderer declares about its layouts: how many
/// placeholders (title included) each slot exposes.
pub trait PlaceholderCapability {
    fn placeholder_count(&self, slot: LayoutSlot) -> usize;
}

impl<F> PlaceholderCapability for F
where
    F: Fn(LayoutSlot) -> usize,
{
    fn placeholder_count(&self, slot: LayoutSlot) -> usize {
        self(slot)
    }
}

/// Placeholder counts of the stock presentation template.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTemplate;

impl PlaceholderCapability for DefaultTemplate {
    fn placeholder_count(&self, slot: LayoutSlot) -> usize {
        match slot {
            LayoutSlot::TitleSlide => 2,
            LayoutSlot::TitleAndContent => 2,
            LayoutSlot::SectionHeader => 2,
            LayoutSlot::TwoContent => 3,
            LayoutSlot::Comparison => 5,
            LayoutSlot::TitleOnly => 1,
            LayoutSlot::Blank => 0,
            LayoutSlot::ContentWithCaption => 3,
        }
    }
}

/// Explicit per-slot placeholder counts, indexed by slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderCounts([usize; 8]);

impl PlaceholderCounts {
    pub fn new(counts: [usize; 8]) -> Self {
        Self(counts)
    }

    /// Every slot exposes the same number of placeholders.
    pub fn uniform(count: usize) -> Self {
        Self([count; 8])
    }
}

impl Default for PlaceholderCounts {
    fn default() -> Self {
        let mut counts = [0; 8];
        for slot in LayoutSlot::ALL {
            counts[slot.index() as usize] = DefaultTemplate.placeholder_count(slot);
        }
        Self(counts)
    }
}

impl PlaceholderCapability for PlaceholderCounts {
    fn placeholder_count(&self, slot: LayoutSlot) -> usize {
        self.0[slot.index() as usize]
    }
}

impl FromStr for PlaceholderCounts {
    type Err = Error;

    /// Parse a comma-separated list of eight counts, e.g. `2,2,2,3,5,1,0,3`.
    fn from_str(s: &str) -> Result<Self> {
        let parsed = s
            .split(',')
            .map(|part| part.trim().parse::<usize>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| Error::InvalidPlaceholderSpec(format!("{}: {}", s, e)))?;

        let counts: [usize; 8] = parsed.try_into().map_err(|v: Vec<usize>| {
            Error::InvalidPlaceholderSpec(format!("expected 8 counts, got {}", v.len()))
        })?;

        Ok(Self(counts))
    }
}
