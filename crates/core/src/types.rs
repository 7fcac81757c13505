//! Domain types for slide inputs, layout decisions and extracted content.

use crate::slots::LayoutSlot;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw text for one slide, as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideInput {
    /// Slide title.
    pub title: String,

    /// Body text; may hold newline-separated lines, prose or "1. ..." markup.
    #[serde(default)]
    pub content: String,
}

impl SlideInput {
    /// Create a new slide input.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// The engine's classification of a slide's content shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutType {
    Content,
    Comparison,
    Chart,
    Process,
    Section,
    TwoColumn,
    TitleOnly,
    ContentWithCaption,
    Blank,
}

impl LayoutType {
    /// The snake_case name used in plan records.
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutType::Content => "content",
            LayoutType::Comparison => "comparison",
            LayoutType::Chart => "chart",
            LayoutType::Process => "process",
            LayoutType::Section => "section",
            LayoutType::TwoColumn => "two_column",
            LayoutType::TitleOnly => "title_only",
            LayoutType::ContentWithCaption => "content_with_caption",
            LayoutType::Blank => "blank",
        }
    }
}

impl fmt::Display for LayoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Auxiliary visual element a slide should carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualElement {
    Chart,
    Smartart,
    Table,
    Shape,
    ImagePlaceholder,
}

impl VisualElement {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisualElement::Chart => "chart",
            VisualElement::Smartart => "smartart",
            VisualElement::Table => "table",
            VisualElement::Shape => "shape",
            VisualElement::ImagePlaceholder => "image_placeholder",
        }
    }
}

impl fmt::Display for VisualElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation enhancement suggested by a classifier rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Enhancement {
    SideBySideLayout,
    DataVisualization,
    SmartartFlow,
    SectionHeader,
    TwoColumnLayout,
    TitleOnlyEmphasis,
    CaptionLayout,
    BlankCustomGraphics,
}

/// A layout decision for one slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutDecision {
    /// Chosen layout type.
    pub layout_type: LayoutType,

    /// Renderer slot for the layout; always set together with `layout_type`.
    pub slot_index: LayoutSlot,

    /// Visual elements accumulated from every rule that fired.
    pub visual_elements: Vec<VisualElement>,

    /// Enhancements accumulated from every rule that fired.
    #[serde(default)]
    pub enhancements: Vec<Enhancement>,

    /// Diagnostic justification, never interpreted.
    pub reasoning: String,

    /// Structured data extracted for the layout.
    pub content_structure: ContentStructure,
}

impl Default for LayoutDecision {
    fn default() -> Self {
        Self {
            layout_type: LayoutType::Content,
            slot_index: LayoutSlot::TitleAndContent,
            visual_elements: Vec::new(),
            enhancements: Vec::new(),
            reasoning: String::new(),
            content_structure: ContentStructure::Empty,
        }
    }
}

impl LayoutDecision {
    /// Whether the decision carries the given visual element.
    pub fn has_visual(&self, element: VisualElement) -> bool {
        self.visual_elements.contains(&element)
    }
}

/// Typed content extracted for a layout family.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentStructure {
    #[default]
    Empty,
    Comparison(ComparisonStructure),
    Chart(ChartStructure),
    Process(ProcessStructure),
    TwoColumn(TwoColumnStructure),
}

/// Two sides of a comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonStructure {
    pub left_side: Vec<String>,
    pub right_side: Vec<String>,
    pub comparison_kind: String,
}

impl ComparisonStructure {
    /// A comparison with the "general" kind.
    pub fn general(left_side: Vec<String>, right_side: Vec<String>) -> Self {
        Self {
            left_side,
            right_side,
            comparison_kind: "general".to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.left_side.is_empty() && self.right_side.is_empty()
    }
}

/// Chart type for extracted series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Pie,
    #[default]
    Column,
}

/// A single chart series with one category per value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartStructure {
    pub chart_kind: ChartKind,
    pub categories: Vec<String>,
    pub values: Vec<i64>,
}

impl ChartStructure {
    /// Build a series, labelling each value `"<prefix> N"` (1-based).
    pub fn labelled(chart_kind: ChartKind, prefix: &str, values: Vec<i64>) -> Self {
        let categories = (1..=values.len())
            .map(|i| format!("{} {}", prefix, i))
            .collect();
        Self {
            chart_kind,
            categories,
            values,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Ordered process steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStructure {
    pub steps: Vec<String>,
    pub step_count: usize,
}

impl ProcessStructure {
    pub fn from_steps(steps: Vec<String>) -> Self {
        Self {
            step_count: steps.len(),
            steps,
        }
    }
}

/// Content split into two columns of text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwoColumnStructure {
    pub left_column: String,
    pub right_column: String,
}
