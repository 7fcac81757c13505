//! The per-slide entry point and deck-level planning.

use crate::classify::ContentClassifier;
use crate::plan::{DeckPlan, PlannedSlide};
use crate::planner::{
    Payload, PlaceholderRole, Placement, SlideAssemblyPlanner, SlideBuildInstruction,
};
use crate::slots::{LayoutSlot, PlaceholderCapability};
use crate::types::SlideInput;

/// Subtitle placed on the generated title slide.
pub const DEFAULT_SUBTITLE: &str = "Smart Layout Enhanced Presentation";

/// Classifies slides and assembles their build instructions.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    classifier: ContentClassifier,
    planner: SlideAssemblyPlanner,
    subtitle: String,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self {
            classifier: ContentClassifier::new(),
            planner: SlideAssemblyPlanner::new(),
            subtitle: DEFAULT_SUBTITLE.to_string(),
        }
    }
}

impl LayoutEngine {
    /// Create an engine with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom slide planner.
    pub fn with_planner(mut self, planner: SlideAssemblyPlanner) -> Self {
        self.planner = planner;
        self
    }

    /// Set the subtitle of the deck's title slide.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Classify one slide and plan it against `available` placeholders.
    pub fn classify_and_plan(
        &self,
        title: &str,
        content: &str,
        available: usize,
    ) -> SlideBuildInstruction {
        let slide = SlideInput::new(title, content);
        let decision = self.classifier.classify(title, content);
        self.planner.plan(&slide, &decision, available)
    }

    /// Classify and plan one slide, asking the renderer for the slot's
    /// placeholder count.
    pub fn plan_slide<C>(&self, slide: &SlideInput, capability: &C) -> PlannedSlide
    where
        C: PlaceholderCapability + ?Sized,
    {
        let decision = self.classifier.classify(&slide.title, &slide.content);
        let available = capability.placeholder_count(decision.slot_index);
        let instruction = self.planner.plan(slide, &decision, available);

        PlannedSlide {
            input: slide.clone(),
            decision,
            instruction,
        }
    }

    /// Plan a whole deck: a title slide followed by every input slide in
    /// order.
    pub fn plan_deck<C>(&self, title: &str, slides: &[SlideInput], capability: &C) -> DeckPlan
    where
        C: PlaceholderCapability + ?Sized,
    {
        log::debug!("planning deck {:?} with {} slides", title, slides.len());

        DeckPlan {
            title: title.to_string(),
            title_slide: self.title_slide(title, capability),
            slides: slides
                .iter()
                .map(|slide| self.plan_slide(slide, capability))
                .collect(),
        }
    }

    fn title_slide<C>(&self, title: &str, capability: &C) -> SlideBuildInstruction
    where
        C: PlaceholderCapability + ?Sized,
    {
        let mut instruction = SlideBuildInstruction {
            slot_index: LayoutSlot::TitleSlide,
            title: title.to_string(),
            placements: vec![Placement::new(
                PlaceholderRole::Title,
                Payload::Text(title.to_string()),
            )],
            fallback: None,
        };

        if capability.placeholder_count(LayoutSlot::TitleSlide) >= 2 {
            instruction.placements.push(Placement::new(
                PlaceholderRole::Body,
                Payload::Text(self.subtitle.clone()),
            ));
        }

        instruction
    }
}

/// Classify and plan one slide with the default engine.
pub fn classify_and_plan(title: &str, content: &str, available: usize) -> SlideBuildInstruction {
    LayoutEngine::new().classify_and_plan(title, content, available)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::{DefaultTemplate, PlaceholderCounts};
    use crate::types::LayoutType;

    #[test]
    fn test_classify_and_plan_comparison() {
        let instruction =
            classify_and_plan("Pets", "Cats vs Dogs: loyal, clean vs loyal, playful", 5);

        assert_eq!(instruction.slot_index, LayoutSlot::Comparison);
        assert_eq!(
            instruction.roles(),
            vec![
                PlaceholderRole::Title,
                PlaceholderRole::Left,
                PlaceholderRole::Right
            ]
        );
    }

    #[test]
    fn test_every_input_maps_to_a_slot() {
        let engine = LayoutEngine::new();
        let contents = [
            "",
            "   ",
            "Apples versus oranges",
            "50% and 20%",
            "- a\n- b\n- c\n- d\n- e\n- f and more text here",
            "key",
            "ünïcödé vs ascii",
        ];
        for content in contents {
            for available in 0..6 {
                let instruction = engine.classify_and_plan("Title", content, available);
                assert!(instruction.slot_index.index() <= 7);
                assert_eq!(instruction.placements[0].role, PlaceholderRole::Title);
            }
        }
    }

    #[test]
    fn test_plan_slide_uses_capability() {
        let engine = LayoutEngine::new();
        let slide = SlideInput::new("Go vs Rust", "- Fast\nvs\n- Safe");

        let planned = engine.plan_slide(&slide, &DefaultTemplate);
        assert_eq!(planned.decision.layout_type, LayoutType::Comparison);
        assert_eq!(planned.instruction.fallback, None);

        let cramped = engine.plan_slide(&slide, &PlaceholderCounts::uniform(2));
        assert_eq!(
            cramped.instruction.roles(),
            vec![PlaceholderRole::Title, PlaceholderRole::Body]
        );
    }

    #[test]
    fn test_plan_deck_keeps_order_and_adds_title_slide() {
        let engine = LayoutEngine::new().with_subtitle("Q3 review");
        let slides = vec![
            SlideInput::new("Introduction", "Welcome"),
            SlideInput::new("Market share", "Mobile 60%, desktop 40%"),
        ];

        let deck = engine.plan_deck("Quarterly", &slides, &DefaultTemplate);

        assert_eq!(deck.title_slide.slot_index, LayoutSlot::TitleSlide);
        assert_eq!(
            deck.title_slide.payload(PlaceholderRole::Body),
            Some(&Payload::Text("Q3 review".into()))
        );
        assert_eq!(deck.slides.len(), 2);
        assert_eq!(deck.slides[0].decision.layout_type, LayoutType::Section);
        assert_eq!(deck.slides[1].decision.layout_type, LayoutType::Chart);
        assert_eq!(deck.slides[1].input, slides[1]);
    }

    #[test]
    fn test_title_slide_without_subtitle_room() {
        let deck = LayoutEngine::new().plan_deck("Solo", &[], &PlaceholderCounts::uniform(1));
        assert_eq!(deck.title_slide.roles(), vec![PlaceholderRole::Title]);
        assert!(deck.slides.is_empty());
    }
}
