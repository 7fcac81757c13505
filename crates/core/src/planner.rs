//! Slide assembly: maps a layout decision onto placeholder roles.
//!
//! Each layout type needs a minimum number of placeholders (title included)
//! on its slot. When the renderer offers fewer, the planner degrades:
//! two-region layouts fall back to the single-body content mapping, and
//! single-body layouts fall back to a bare title. Planning never fails.

use crate::bullets::extract_bullet_points;
use crate::slots::LayoutSlot;
use crate::types::{
    ChartStructure, ContentStructure, LayoutDecision, LayoutType, ProcessStructure, SlideInput,
};
use serde::{Deserialize, Serialize};

/// Default caption length before truncation, in characters.
pub const DEFAULT_CAPTION_LIMIT: usize = 200;

/// Placeholders needed for a title plus two body regions.
const PAIRED_PLACEHOLDERS: usize = 3;

/// Placeholders needed for a title plus one body region.
const SINGLE_BODY_PLACEHOLDERS: usize = 2;

/// Named region of a slide template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderRole {
    Title,
    Body,
    Left,
    Right,
    Caption,
}

/// What goes into a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Payload {
    /// Plain text, one paragraph per line.
    Text(String),
    /// One bullet paragraph per point.
    Points(Vec<String>),
    Chart(ChartStructure),
    Process(ProcessStructure),
}

/// A role paired with its payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub role: PlaceholderRole,
    pub payload: Payload,
}

impl Placement {
    pub fn new(role: PlaceholderRole, payload: Payload) -> Self {
        Self { role, payload }
    }
}

/// Degraded mapping taken because the slot had too few placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fallback {
    ContentMapping,
    TitleOnly,
}

/// Renderer-agnostic instructions for building one slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideBuildInstruction {
    /// Slot chosen by the classifier; never changed by the planner.
    pub slot_index: LayoutSlot,

    pub title: String,

    /// Ordered placements, always starting with the title.
    pub placements: Vec<Placement>,

    /// Set when a degraded mapping was used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<Fallback>,
}

impl SlideBuildInstruction {
    fn titled(slot_index: LayoutSlot, title: &str) -> Self {
        Self {
            slot_index,
            title: title.to_string(),
            placements: vec![Placement::new(
                PlaceholderRole::Title,
                Payload::Text(title.to_string()),
            )],
            fallback: None,
        }
    }

    fn place(mut self, role: PlaceholderRole, payload: Payload) -> Self {
        self.placements.push(Placement::new(role, payload));
        self
    }

    fn degraded(mut self, fallback: Fallback) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Roles in placement order.
    pub fn roles(&self) -> Vec<PlaceholderRole> {
        self.placements.iter().map(|p| p.role).collect()
    }

    /// Payload of the first placement with the given role.
    pub fn payload(&self, role: PlaceholderRole) -> Option<&Payload> {
        self.placements
            .iter()
            .find(|p| p.role == role)
            .map(|p| &p.payload)
    }
}

/// Builds slide instructions from layout decisions.
#[derive(Debug, Clone)]
pub struct SlideAssemblyPlanner {
    /// Captions longer than this many characters are truncated.
    caption_limit: usize,
}

impl Default for SlideAssemblyPlanner {
    fn default() -> Self {
        Self {
            caption_limit: DEFAULT_CAPTION_LIMIT,
        }
    }
}

impl SlideAssemblyPlanner {
    /// Create a planner with the default caption limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the caption truncation limit.
    pub fn with_caption_limit(mut self, limit: usize) -> Self {
        self.caption_limit = limit;
        self
    }

    /// Plan one slide given how many placeholders its slot exposes.
    pub fn plan(
        &self,
        slide: &SlideInput,
        decision: &LayoutDecision,
        available: usize,
    ) -> SlideBuildInstruction {
        let slot = decision.slot_index;

        match decision.layout_type {
            LayoutType::Comparison | LayoutType::TwoColumn if available < PAIRED_PLACEHOLDERS => {
                log::warn!(
                    "slot {} offers {} placeholder(s), {} needs {}; using content mapping",
                    slot,
                    available,
                    decision.layout_type,
                    PAIRED_PLACEHOLDERS
                );
                let instruction = self.content_mapping(slide, slot, available);
                if instruction.fallback.is_none() {
                    instruction.degraded(Fallback::ContentMapping)
                } else {
                    instruction
                }
            }
            LayoutType::Comparison => {
                let (left, right) = match &decision.content_structure {
                    ContentStructure::Comparison(c) => (c.left_side.clone(), c.right_side.clone()),
                    _ => (Vec::new(), Vec::new()),
                };
                SlideBuildInstruction::titled(slot, &slide.title)
                    .place(PlaceholderRole::Left, Payload::Points(left))
                    .place(PlaceholderRole::Right, Payload::Points(right))
            }
            LayoutType::TwoColumn => {
                let (left, right) = match &decision.content_structure {
                    ContentStructure::TwoColumn(s) => {
                        (s.left_column.clone(), s.right_column.clone())
                    }
                    _ => (String::new(), String::new()),
                };
                SlideBuildInstruction::titled(slot, &slide.title)
                    .place(PlaceholderRole::Left, Payload::Text(left))
                    .place(PlaceholderRole::Right, Payload::Text(right))
            }
            LayoutType::Chart
            | LayoutType::Process
            | LayoutType::ContentWithCaption
            | LayoutType::Content
                if available < SINGLE_BODY_PLACEHOLDERS =>
            {
                log::warn!(
                    "slot {} offers {} placeholder(s), {} needs {}; using title only",
                    slot,
                    available,
                    decision.layout_type,
                    SINGLE_BODY_PLACEHOLDERS
                );
                SlideBuildInstruction::titled(slot, &slide.title).degraded(Fallback::TitleOnly)
            }
            LayoutType::Chart => {
                let chart = match &decision.content_structure {
                    ContentStructure::Chart(c) => c.clone(),
                    _ => ChartStructure::default(),
                };
                SlideBuildInstruction::titled(slot, &slide.title)
                    .place(PlaceholderRole::Body, Payload::Chart(chart))
            }
            LayoutType::Process => {
                let process = match &decision.content_structure {
                    ContentStructure::Process(p) => p.clone(),
                    _ => ProcessStructure::default(),
                };
                SlideBuildInstruction::titled(slot, &slide.title)
                    .place(PlaceholderRole::Body, Payload::Process(process))
            }
            LayoutType::ContentWithCaption => SlideBuildInstruction::titled(slot, &slide.title)
                .place(
                    PlaceholderRole::Caption,
                    Payload::Text(self.caption(&slide.content)),
                ),
            LayoutType::Content => self.content_mapping(slide, slot, available),
            LayoutType::Section => {
                let instruction = SlideBuildInstruction::titled(slot, &slide.title);
                if available >= SINGLE_BODY_PLACEHOLDERS && !slide.content.trim().is_empty() {
                    instruction.place(PlaceholderRole::Body, body_payload(&slide.content))
                } else {
                    instruction
                }
            }
            LayoutType::TitleOnly | LayoutType::Blank => {
                SlideBuildInstruction::titled(slot, &slide.title)
            }
        }
    }

    /// Title plus one body of bullet points (or the raw text when there are
    /// none), degrading to title only below two placeholders.
    fn content_mapping(
        &self,
        slide: &SlideInput,
        slot: LayoutSlot,
        available: usize,
    ) -> SlideBuildInstruction {
        let instruction = SlideBuildInstruction::titled(slot, &slide.title);
        if available < SINGLE_BODY_PLACEHOLDERS {
            return instruction.degraded(Fallback::TitleOnly);
        }
        instruction.place(PlaceholderRole::Body, body_payload(&slide.content))
    }

    fn caption(&self, content: &str) -> String {
        if content.chars().count() <= self.caption_limit {
            return content.to_string();
        }
        let truncated: String = content.chars().take(self.caption_limit).collect();
        format!("{}...", truncated)
    }
}

fn body_payload(content: &str) -> Payload {
    let points = extract_bullet_points(content);
    if points.is_empty() {
        Payload::Text(content.to_string())
    } else {
        Payload::Points(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::ContentClassifier;
    use crate::types::{ChartKind, ComparisonStructure, TwoColumnStructure};

    fn decision(layout_type: LayoutType, slot: LayoutSlot) -> LayoutDecision {
        LayoutDecision {
            layout_type,
            slot_index: slot,
            ..LayoutDecision::default()
        }
    }

    fn comparison_decision() -> LayoutDecision {
        LayoutDecision {
            content_structure: ContentStructure::Comparison(ComparisonStructure::general(
                vec!["Fast".into()],
                vec!["Safe".into()],
            )),
            ..decision(LayoutType::Comparison, LayoutSlot::Comparison)
        }
    }

    #[test]
    fn test_comparison_with_enough_placeholders() {
        let slide = SlideInput::new("Go vs Rust", "- Fast\nvs\n- Safe");
        let instruction = SlideAssemblyPlanner::new().plan(&slide, &comparison_decision(), 5);

        assert_eq!(instruction.slot_index, LayoutSlot::Comparison);
        assert_eq!(
            instruction.roles(),
            vec![
                PlaceholderRole::Title,
                PlaceholderRole::Left,
                PlaceholderRole::Right
            ]
        );
        assert_eq!(
            instruction.payload(PlaceholderRole::Left),
            Some(&Payload::Points(vec!["Fast".into()]))
        );
        assert_eq!(instruction.fallback, None);
    }

    #[test]
    fn test_comparison_falls_back_to_content_mapping() {
        let slide = SlideInput::new("Go vs Rust", "- Fast\nvs\n- Safe");
        let planner = SlideAssemblyPlanner::new();

        let instruction = planner.plan(&slide, &comparison_decision(), 2);
        assert_eq!(
            instruction.roles(),
            vec![PlaceholderRole::Title, PlaceholderRole::Body]
        );
        assert_eq!(
            instruction.payload(PlaceholderRole::Body),
            Some(&Payload::Points(vec!["Fast".into(), "Safe".into()]))
        );
        assert_eq!(instruction.fallback, Some(Fallback::ContentMapping));
        assert_eq!(instruction.slot_index, LayoutSlot::Comparison);
    }

    #[test]
    fn test_comparison_with_one_placeholder_matches_content_fallback() {
        let slide = SlideInput::new("Go vs Rust", "- Fast\nvs\n- Safe");
        let planner = SlideAssemblyPlanner::new();

        let comparison = planner.plan(&slide, &comparison_decision(), 1);
        let content = planner.plan(
            &slide,
            &decision(LayoutType::Content, LayoutSlot::Comparison),
            1,
        );

        assert_eq!(comparison, content);
        assert_eq!(comparison.roles(), vec![PlaceholderRole::Title]);
        assert_eq!(comparison.fallback, Some(Fallback::TitleOnly));
    }

    #[test]
    fn test_empty_comparison_keeps_shape() {
        let slide = SlideInput::new("A versus B", "No sides here");
        let empty = LayoutDecision {
            content_structure: ContentStructure::Comparison(ComparisonStructure::default()),
            ..decision(LayoutType::Comparison, LayoutSlot::Comparison)
        };
        let instruction = SlideAssemblyPlanner::new().plan(&slide, &empty, 3);

        assert_eq!(
            instruction.payload(PlaceholderRole::Left),
            Some(&Payload::Points(Vec::new()))
        );
        assert_eq!(
            instruction.payload(PlaceholderRole::Right),
            Some(&Payload::Points(Vec::new()))
        );
    }

    #[test]
    fn test_two_column_text_payloads() {
        let slide = SlideInput::new("Teams", "ignored");
        let two_column = LayoutDecision {
            content_structure: ContentStructure::TwoColumn(TwoColumnStructure {
                left_column: "left text".into(),
                right_column: "right text".into(),
            }),
            ..decision(LayoutType::TwoColumn, LayoutSlot::TwoContent)
        };
        let instruction = SlideAssemblyPlanner::new().plan(&slide, &two_column, 3);

        assert_eq!(
            instruction.payload(PlaceholderRole::Right),
            Some(&Payload::Text("right text".into()))
        );
    }

    #[test]
    fn test_chart_payload_and_title_only_fallback() {
        let slide = SlideInput::new("Share", "60% mobile, 40% desktop");
        let decision = ContentClassifier::new().classify(&slide.title, &slide.content);
        let planner = SlideAssemblyPlanner::new();

        let instruction = planner.plan(&slide, &decision, 2);
        let Some(Payload::Chart(chart)) = instruction.payload(PlaceholderRole::Body) else {
            panic!("expected chart payload");
        };
        assert_eq!(chart.chart_kind, ChartKind::Pie);
        assert_eq!(chart.values, vec![60, 40]);

        let degraded = planner.plan(&slide, &decision, 1);
        assert_eq!(degraded.roles(), vec![PlaceholderRole::Title]);
        assert_eq!(degraded.fallback, Some(Fallback::TitleOnly));
    }

    #[test]
    fn test_process_payload() {
        let slide = SlideInput::new("Release", "1. Tag\n2. Build");
        let decision = ContentClassifier::new().classify(&slide.title, &slide.content);
        let instruction = SlideAssemblyPlanner::new().plan(&slide, &decision, 2);

        assert_eq!(
            instruction.payload(PlaceholderRole::Body),
            Some(&Payload::Process(ProcessStructure::from_steps(vec![
                "Tag".into(),
                "Build".into()
            ])))
        );
    }

    #[test]
    fn test_caption_truncation() {
        let long = "x".repeat(250);
        let slide = SlideInput::new("Picture", long);
        let decision = decision(LayoutType::ContentWithCaption, LayoutSlot::ContentWithCaption);

        let instruction = SlideAssemblyPlanner::new().plan(&slide, &decision, 3);
        let Some(Payload::Text(caption)) = instruction.payload(PlaceholderRole::Caption) else {
            panic!("expected caption text");
        };
        assert_eq!(caption.len(), 203);
        assert!(caption.ends_with("..."));

        let short = SlideAssemblyPlanner::new()
            .with_caption_limit(300)
            .plan(&slide, &decision, 3);
        assert_eq!(
            short.payload(PlaceholderRole::Caption),
            Some(&Payload::Text("x".repeat(250)))
        );
    }

    #[test]
    fn test_content_uses_points_or_text() {
        let planner = SlideAssemblyPlanner::new();
        let content = decision(LayoutType::Content, LayoutSlot::TitleAndContent);

        let bullets = SlideInput::new("List", "- one\n- two");
        assert_eq!(
            planner.plan(&bullets, &content, 2).payload(PlaceholderRole::Body),
            Some(&Payload::Points(vec!["one".into(), "two".into()]))
        );

        let prose = SlideInput::new("Prose", "Just words.");
        assert_eq!(
            planner.plan(&prose, &content, 2).payload(PlaceholderRole::Body),
            Some(&Payload::Text("Just words.".into()))
        );
    }

    #[test]
    fn test_title_only_layouts_never_fail() {
        let slide = SlideInput::new("Timeline", "");
        let planner = SlideAssemblyPlanner::new();

        for layout in [LayoutType::TitleOnly, LayoutType::Blank, LayoutType::Section] {
            let instruction = planner.plan(&slide, &decision(layout, LayoutSlot::Blank), 0);
            assert_eq!(instruction.roles(), vec![PlaceholderRole::Title]);
            assert_eq!(instruction.fallback, None);
            assert_eq!(instruction.title, "Timeline");
        }
    }

    #[test]
    fn test_section_body_when_room() {
        let slide = SlideInput::new("Summary", "- Ship it");
        let instruction = SlideAssemblyPlanner::new().plan(
            &slide,
            &decision(LayoutType::Section, LayoutSlot::SectionHeader),
            2,
        );
        assert_eq!(
            instruction.payload(PlaceholderRole::Body),
            Some(&Payload::Points(vec!["Ship it".into()]))
        );
    }

    #[test]
    fn test_instruction_json_shape() {
        let slide = SlideInput::new("List", "- one");
        let instruction = SlideAssemblyPlanner::new().plan(
            &slide,
            &decision(LayoutType::Content, LayoutSlot::TitleAndContent),
            2,
        );
        let json = serde_json::to_value(&instruction).unwrap();

        assert_eq!(json["slot_index"], 1);
        assert_eq!(json["placements"][1]["role"], "body");
        assert_eq!(json["placements"][1]["payload"]["type"], "points");
        assert!(json.get("fallback").is_none());
    }
}
