//! Content classification: (title, content) into a layout decision.
//!
//! Eight rules run in a fixed order, all of them, every time. A rule that
//! fires replaces the layout type, slot and reasoning of the decision and
//! may replace its content structure, while its visual elements and
//! enhancements are added to those of earlier rules. A slide can therefore
//! end up as a section header that still carries "smartart" from the
//! process rule it overrode.

use crate::extract::{
    extract_chart_data, extract_comparison, extract_process_steps, split_two_columns,
};
use crate::slots::LayoutSlot;
use crate::types::{ContentStructure, Enhancement, LayoutDecision, LayoutType, VisualElement};
use regex::Regex;
use std::sync::LazyLock;

/// Numeric phrases that suggest chart data. Matches are counted per pattern,
/// so "25%" counts twice.
static NUMBER_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\d+%",
        r"\d+\s*(percent|%)",
        r"increased by \d+",
        r"decreased by \d+",
        r"growth of \d+",
        r"\d+\s*(million|billion|thousand)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

static STEP_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [r"\d+\.", r"step \d+", r"phase \d+"]
        .iter()
        .map(|pattern| Regex::new(pattern).unwrap())
        .collect()
});

/// Phrases that make a slide a comparison. Wider than the keywords the
/// comparison extractor splits on, so a slide can be a comparison with
/// empty sides.
const COMPARISON_TRIGGERS: &[&str] = &[
    "vs",
    "versus",
    "compared to",
    "compared with",
    "difference between",
];

const PROCESS_KEYWORDS: &[&str] = &[
    "step", "process", "flow", "first", "then", "next", "finally", "stage", "phase",
];

const SECTION_KEYWORDS: &[&str] = &[
    "overview",
    "introduction",
    "summary",
    "conclusion",
    "key points",
    "main points",
];

const TITLE_ONLY_WORDS: &[&str] = &["key", "main", "important", "critical"];

const CAPTION_WORDS: &[&str] = &[
    "diagram",
    "graph",
    "chart",
    "image",
    "picture",
    "visual",
    "illustration",
];

const BLANK_TITLE_WORDS: &[&str] = &["diagram", "flowchart", "timeline", "mind map"];

/// Minimum number-pattern matches for the chart rule.
const CHART_MIN_MATCHES: usize = 2;

/// Stripped content shorter than this (in characters) may be title-only.
const TITLE_ONLY_MAX_CHARS: usize = 50;

/// Stripped content shorter than this (in characters) may be blank.
const BLANK_MAX_CHARS: usize = 20;

/// Text views shared by all rules for one slide.
struct SlideText<'a> {
    content: &'a str,
    content_lower: String,
    title_lower: String,
    stripped_len: usize,
}

impl<'a> SlideText<'a> {
    fn new(title: &str, content: &'a str) -> Self {
        Self {
            content,
            content_lower: content.to_lowercase(),
            title_lower: title.to_lowercase(),
            stripped_len: content.trim().chars().count(),
        }
    }

    fn content_has_any(&self, words: &[&str]) -> bool {
        words.iter().any(|w| self.content_lower.contains(w))
    }

    fn title_has_any(&self, words: &[&str]) -> bool {
        words.iter().any(|w| self.title_lower.contains(w))
    }
}

/// The effect of one rule that fired.
#[derive(Debug)]
struct RuleMatch {
    layout_type: LayoutType,
    slot: LayoutSlot,
    reasoning: String,
    enhancement: Enhancement,
    visual: Option<VisualElement>,
    structure: Option<ContentStructure>,
}

impl RuleMatch {
    fn new(layout_type: LayoutType, slot: LayoutSlot, enhancement: Enhancement) -> Self {
        Self {
            layout_type,
            slot,
            reasoning: String::new(),
            enhancement,
            visual: None,
            structure: None,
        }
    }

    fn reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = reasoning.into();
        self
    }

    fn visual(mut self, element: VisualElement) -> Self {
        self.visual = Some(element);
        self
    }

    fn structure(mut self, structure: ContentStructure) -> Self {
        self.structure = Some(structure);
        self
    }
}

type Rule = fn(&SlideText) -> Option<RuleMatch>;

/// Rules in evaluation order. Later matches take precedence for the layout.
const RULES: &[(&str, Rule)] = &[
    ("comparison", comparison_rule),
    ("chart", chart_rule),
    ("process", process_rule),
    ("section", section_rule),
    ("two_column", two_column_rule),
    ("title_only", title_only_rule),
    ("content_with_caption", caption_rule),
    ("blank", blank_rule),
];

fn comparison_rule(text: &SlideText) -> Option<RuleMatch> {
    if !text.content_has_any(COMPARISON_TRIGGERS) && !text.title_has_any(COMPARISON_TRIGGERS) {
        return None;
    }

    Some(
        RuleMatch::new(
            LayoutType::Comparison,
            LayoutSlot::Comparison,
            Enhancement::SideBySideLayout,
        )
        .reasoning("Contains comparison keywords - using side-by-side layout")
        .structure(ContentStructure::Comparison(extract_comparison(text.content))),
    )
}

fn chart_rule(text: &SlideText) -> Option<RuleMatch> {
    let found: usize = NUMBER_REGEXES
        .iter()
        .map(|re| re.find_iter(&text.content_lower).count())
        .sum();

    if found < CHART_MIN_MATCHES {
        return None;
    }

    Some(
        RuleMatch::new(
            LayoutType::Chart,
            LayoutSlot::TitleAndContent,
            Enhancement::DataVisualization,
        )
        .reasoning(format!(
            "Found {} numerical data points - adding chart visualization",
            found
        ))
        .visual(VisualElement::Chart)
        .structure(ContentStructure::Chart(extract_chart_data(text.content))),
    )
}

fn process_rule(text: &SlideText) -> Option<RuleMatch> {
    let has_steps = text.content_has_any(PROCESS_KEYWORDS)
        || STEP_REGEXES.iter().any(|re| re.is_match(&text.content_lower));
    if !has_steps {
        return None;
    }

    Some(
        RuleMatch::new(
            LayoutType::Process,
            LayoutSlot::TitleAndContent,
            Enhancement::SmartartFlow,
        )
        .reasoning("Contains process or step-by-step content - using SmartArt process flow")
        .visual(VisualElement::Smartart)
        .structure(ContentStructure::Process(extract_process_steps(text.content))),
    )
}

fn section_rule(text: &SlideText) -> Option<RuleMatch> {
    text.title_has_any(SECTION_KEYWORDS).then(|| {
        RuleMatch::new(
            LayoutType::Section,
            LayoutSlot::SectionHeader,
            Enhancement::SectionHeader,
        )
        .reasoning("Section header detected - using section layout")
    })
}

fn two_column_rule(text: &SlideText) -> Option<RuleMatch> {
    let split = split_two_columns(text.content)?;

    Some(
        RuleMatch::new(
            LayoutType::TwoColumn,
            LayoutSlot::TwoContent,
            Enhancement::TwoColumnLayout,
        )
        .reasoning("Content can be split into two balanced columns")
        .structure(ContentStructure::TwoColumn(split)),
    )
}

fn title_only_rule(text: &SlideText) -> Option<RuleMatch> {
    let short_and_punchy =
        text.stripped_len < TITLE_ONLY_MAX_CHARS && text.content_has_any(TITLE_ONLY_WORDS);

    short_and_punchy.then(|| {
        RuleMatch::new(
            LayoutType::TitleOnly,
            LayoutSlot::TitleOnly,
            Enhancement::TitleOnlyEmphasis,
        )
        .reasoning("Short, impactful content - using title-only layout for emphasis")
    })
}

fn caption_rule(text: &SlideText) -> Option<RuleMatch> {
    text.content_has_any(CAPTION_WORDS).then(|| {
        RuleMatch::new(
            LayoutType::ContentWithCaption,
            LayoutSlot::ContentWithCaption,
            Enhancement::CaptionLayout,
        )
        .reasoning("Content mentions visual elements - using caption layout")
        .visual(VisualElement::ImagePlaceholder)
    })
}

fn blank_rule(text: &SlideText) -> Option<RuleMatch> {
    let sparse_diagram =
        text.stripped_len < BLANK_MAX_CHARS && text.title_has_any(BLANK_TITLE_WORDS);

    sparse_diagram.then(|| {
        RuleMatch::new(LayoutType::Blank, LayoutSlot::Blank, Enhancement::BlankCustomGraphics)
            .reasoning(
                "Minimal content with diagram title - using blank layout for custom graphics",
            )
    })
}

/// Decision record threaded through the rules.
#[derive(Debug, Default)]
struct DecisionAccumulator {
    decision: LayoutDecision,
}

impl DecisionAccumulator {
    /// Layout, slot and reasoning are replaced together; visual elements
    /// and enhancements are unioned; the structure is replaced only when the
    /// rule produced one.
    fn merge(&mut self, m: RuleMatch) {
        let decision = &mut self.decision;

        decision.layout_type = m.layout_type;
        decision.slot_index = m.slot;
        decision.reasoning = m.reasoning;

        if let Some(element) = m.visual {
            if !decision.visual_elements.contains(&element) {
                decision.visual_elements.push(element);
            }
        }

        if !decision.enhancements.contains(&m.enhancement) {
            decision.enhancements.push(m.enhancement);
        }

        if let Some(structure) = m.structure {
            decision.content_structure = structure;
        }
    }

    fn finish(self) -> LayoutDecision {
        self.decision
    }
}

/// Rule-ordered classifier. Holds no state between slides.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentClassifier;

impl ContentClassifier {
    /// Create a new classifier.
    pub fn new() -> Self {
        Self
    }

    /// Classify one slide. Total over arbitrary strings.
    pub fn classify(&self, title: &str, content: &str) -> LayoutDecision {
        let text = SlideText::new(title, content);
        let mut acc = DecisionAccumulator::default();

        for (name, rule) in RULES {
            if let Some(m) = rule(&text) {
                log::debug!("rule '{}' matched: {} -> slot {}", name, m.layout_type, m.slot);
                acc.merge(m);
            }
        }

        let decision = acc.finish();
        log::debug!(
            "classified {:?} as {} (slot {})",
            title,
            decision.layout_type,
            decision.slot_index
        );
        decision
    }
}
