//! Plan records and their JSON persistence.
//!
//! A saved plan reloads field-for-field identical.

use crate::planner::SlideBuildInstruction;
use crate::types::{LayoutDecision, SlideInput};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Title used when a deck file does not name one.
pub const DEFAULT_DECK_TITLE: &str = "Presentation";

/// One input slide with its decision and build instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedSlide {
    pub input: SlideInput,
    pub decision: LayoutDecision,
    pub instruction: SlideBuildInstruction,
}

/// The plan for a whole deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckPlan {
    pub title: String,

    /// Instruction for the generated title slide (slot 0).
    pub title_slide: SlideBuildInstruction,

    /// Planned slides in input order.
    pub slides: Vec<PlannedSlide>,
}

impl DeckPlan {
    /// Decisions of all planned slides, in order.
    pub fn decisions(&self) -> Vec<&LayoutDecision> {
        self.slides.iter().map(|s| &s.decision).collect()
    }

    /// Encode as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write as pretty-printed JSON.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Read from JSON.
    pub fn read_from<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Save to a file, replacing it.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        log::debug!("saved plan to {}", path.display());
        Ok(())
    }

    /// Load from a file.
    pub fn load(path: &Path) -> Result<Self> {
        Self::read_from(BufReader::new(File::open(path)?))
    }
}

/// Encode a sequence of decisions as JSON.
pub fn decisions_to_json(decisions: &[LayoutDecision]) -> Result<String> {
    Ok(serde_json::to_string_pretty(decisions)?)
}

/// Decode a sequence of decisions from JSON.
pub fn decisions_from_json(json: &str) -> Result<Vec<LayoutDecision>> {
    Ok(serde_json::from_str(json)?)
}

/// Slides to plan, as read from a deck file.
///
/// Accepts either a bare array of slides or an object with a title.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DeckFile {
    Slides(Vec<SlideInput>),
    Titled {
        title: Option<String>,
        slides: Vec<SlideInput>,
    },
}

/// A deck of slide inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckInput {
    pub title: String,
    pub slides: Vec<SlideInput>,
}

impl DeckInput {
    /// Parse a deck file, normalizing CRLF and CR line endings to `\n`.
    pub fn from_json(json: &str) -> Result<Self> {
        let (title, slides) = match serde_json::from_str(json)? {
            DeckFile::Slides(slides) => (None, slides),
            DeckFile::Titled { title, slides } => (title, slides),
        };

        Ok(Self {
            title: title.unwrap_or_else(|| DEFAULT_DECK_TITLE.to_string()),
            slides: slides
                .into_iter()
                .map(|s| {
                    SlideInput::new(
                        normalize_line_endings(&s.title),
                        normalize_line_endings(&s.content),
                    )
                })
                .collect(),
        })
    }

    /// Read and parse a deck file.
    pub fn load(path: &Path) -> Result<Self> {
        let mut json = String::new();
        File::open(path)?.read_to_string(&mut json)?;
        Self::from_json(&json)
    }
}

fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::LayoutEngine;
    use crate::slots::DefaultTemplate;

    fn sample_deck() -> DeckPlan {
        let slides = vec![
            SlideInput::new("Go vs Rust", "- Fast\nvs\n- Safe"),
            SlideInput::new("Share", "Pie chart: 60% mobile, 40% desktop"),
            SlideInput::new("Overview", "Our 3-step process: 1. Plan 2. Build 3. Ship"),
            SlideInput::new(
                "Teams",
                "Alpha team ships the API\nBeta team owns billing\nGamma team does search\nDelta team runs infra\nEpsilon team owns mobile\nZeta team handles data",
            ),
            SlideInput::new("Timeline", ""),
        ];
        LayoutEngine::new().plan_deck("Roadmap", &slides, &DefaultTemplate)
    }

    #[test]
    fn test_deck_plan_round_trip() {
        let deck = sample_deck();
        let json = deck.to_json().unwrap();
        let reloaded = DeckPlan::from_json(&json).unwrap();
        assert_eq!(reloaded, deck);
    }

    #[test]
    fn test_writer_reader_round_trip() {
        let deck = sample_deck();
        let mut buffer = Vec::new();
        deck.write_to(&mut buffer).unwrap();

        let reloaded = DeckPlan::read_from(buffer.as_slice()).unwrap();
        assert_eq!(reloaded, deck);
    }

    #[test]
    fn test_decisions_round_trip() {
        let deck = sample_deck();
        let decisions: Vec<LayoutDecision> = deck.decisions().into_iter().cloned().collect();

        let json = decisions_to_json(&decisions).unwrap();
        assert_eq!(decisions_from_json(&json).unwrap(), decisions);
    }

    #[test]
    fn test_decision_json_fields() {
        let deck = sample_deck();
        let value = serde_json::to_value(&deck.slides[1].decision).unwrap();

        assert_eq!(value["layout_type"], "content_with_caption");
        assert_eq!(value["slot_index"], 7);
        assert_eq!(value["visual_elements"][0], "chart");
        assert_eq!(value["visual_elements"][1], "image_placeholder");
        assert_eq!(value["content_structure"]["kind"], "chart");
        assert_eq!(value["content_structure"]["chart_kind"], "pie");
    }

    #[test]
    fn test_invalid_plan_is_an_error() {
        assert!(DeckPlan::from_json("{").is_err());
        assert!(decisions_from_json(r#"[{"layout_type": "content", "slot_index": 12}]"#).is_err());
    }

    #[test]
    fn test_deck_input_bare_array() {
        let deck = DeckInput::from_json(r#"[{"title": "A", "content": "one\r\ntwo\rthree"}]"#)
            .unwrap();
        assert_eq!(deck.title, DEFAULT_DECK_TITLE);
        assert_eq!(deck.slides, vec![SlideInput::new("A", "one\ntwo\nthree")]);
    }

    #[test]
    fn test_deck_input_titled() {
        let deck = DeckInput::from_json(
            r#"{"title": "Roadmap", "slides": [{"title": "Intro"}, {"title": "B", "content": "x"}]}"#,
        )
        .unwrap();
        assert_eq!(deck.title, "Roadmap");
        assert_eq!(deck.slides.len(), 2);
        assert_eq!(deck.slides[0].content, "");
    }

    #[test]
    fn test_deck_input_rejects_garbage() {
        assert!(DeckInput::from_json(r#"{"slides": 3}"#).is_err());
        assert!(DeckInput::from_json("not json").is_err());
    }
}
