//! Plain-text outline output for deck plans.
//!
//! One block per slide, separated by a blank line:
//!
//! ```text
//! Slide 2: Go vs Rust
//!   layout: comparison, slot 4 (Comparison)
//!   visuals: none
//!   left: 1 point(s)
//!   right: 1 point(s)
//! ```

use crate::plan::DeckPlan;
use crate::planner::{Payload, PlaceholderRole, SlideBuildInstruction};
use crate::types::LayoutDecision;
use std::fmt::Write;

/// Formatter for human-readable plan summaries.
#[derive(Debug, Clone, Default)]
pub struct PlanFormatter {
    /// Include each decision's reasoning line.
    show_reasoning: bool,
}

impl PlanFormatter {
    /// Create a new formatter without reasoning lines.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to print the classifier's reasoning.
    pub fn with_reasoning(mut self, show: bool) -> Self {
        self.show_reasoning = show;
        self
    }

    /// Format a deck plan. The title slide is numbered 1.
    pub fn format(&self, plan: &DeckPlan) -> String {
        let mut blocks = Vec::with_capacity(plan.slides.len() + 1);
        blocks.push(self.format_block(1, &plan.title_slide, None));

        for (i, slide) in plan.slides.iter().enumerate() {
            blocks.push(self.format_block(i + 2, &slide.instruction, Some(&slide.decision)));
        }

        blocks.join("\n\n")
    }

    /// Format and add a trailing newline.
    pub fn format_with_newline(&self, plan: &DeckPlan) -> String {
        format!("{}\n", self.format(plan))
    }

    fn format_block(
        &self,
        number: usize,
        instruction: &SlideBuildInstruction,
        decision: Option<&LayoutDecision>,
    ) -> String {
        let mut out = format!("Slide {}: {}", number, instruction.title);

        let layout = decision.map_or("title", |d| d.layout_type.as_str());
        let _ = write!(out, "\n  layout: {}, slot {}", layout, instruction.slot_index);

        if let Some(decision) = decision {
            let visuals = if decision.visual_elements.is_empty() {
                "none".to_string()
            } else {
                decision
                    .visual_elements
                    .iter()
                    .map(|v| v.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            let _ = write!(out, "\n  visuals: {}", visuals);

            if self.show_reasoning && !decision.reasoning.is_empty() {
                let _ = write!(out, "\n  reasoning: {}", decision.reasoning);
            }
        }

        if let Some(fallback) = instruction.fallback {
            let _ = write!(out, "\n  fallback: {:?}", fallback);
        }

        for placement in &instruction.placements {
            if placement.role == PlaceholderRole::Title {
                continue;
            }
            let _ = write!(
                out,
                "\n  {}: {}",
                role_name(placement.role),
                summarize(&placement.payload)
            );
        }

        out
    }
}

fn role_name(role: PlaceholderRole) -> &'static str {
    match role {
        PlaceholderRole::Title => "title",
        PlaceholderRole::Body => "body",
        PlaceholderRole::Left => "left",
        PlaceholderRole::Right => "right",
        PlaceholderRole::Caption => "caption",
    }
}

fn summarize(payload: &Payload) -> String {
    match payload {
        Payload::Text(text) => {
            let first = text.lines().next().unwrap_or("");
            format!("\"{}\"", first)
        }
        Payload::Points(points) => format!("{} point(s)", points.len()),
        Payload::Chart(chart) => format!(
            "{:?} chart, {} value(s)",
            chart.chart_kind,
            chart.values.len()
        ),
        Payload::Process(process) => format!("process, {} step(s)", process.step_count),
    }
}
