//! Layout decision engine: classifies slide text, extracts typed content
//! structures and plans how each slide fills its layout's placeholders.

pub mod bullets;
pub mod classify;
pub mod engine;
pub mod error;
pub mod extract;
pub mod formatter;
pub mod plan;
pub mod planner;
pub mod slots;
pub mod types;

pub use bullets::extract_bullet_points;
pub use classify::ContentClassifier;
pub use engine::{classify_and_plan, LayoutEngine};
pub use error::{Error, Result};
pub use formatter::PlanFormatter;
pub use plan::{DeckInput, DeckPlan, PlannedSlide};
pub use planner::{
    Fallback, Payload, PlaceholderRole, Placement, SlideAssemblyPlanner, SlideBuildInstruction,
};
pub use slots::{DefaultTemplate, LayoutSlot, PlaceholderCapability, PlaceholderCounts};
pub use types::{
    ChartKind, ChartStructure, ComparisonStructure, ContentStructure, Enhancement,
    LayoutDecision, LayoutType, ProcessStructure, SlideInput, TwoColumnStructure, VisualElement,
};
