//! The visual tree produced by [`render`](super::render).

use serde::Serialize;

use super::charts::{BarChart, PieChart, ScatterChart};
use crate::models::{StoryStep, VisualKind};
use crate::navigation::View;
use crate::style::{Gradient, PanelStyle};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub header: Header,
    pub nav: Vec<NavItem>,
    pub body: Body,
    pub insights: KeyInsights,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub title: String,
    pub subtitle: String,
    pub data_line: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub view: View,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Body {
    Story(StoryPanel),
    Overview(OverviewPanel),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepButton {
    /// 1-based step number passed to `go_to_step` on click.
    pub step: usize,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepArrows {
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub indicator: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoryPanel {
    pub step_buttons: Vec<StepButton>,
    pub step_number: usize,
    pub step: StoryStep,
    pub visual: StoryVisual,
    pub arrows: StepArrows,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImpactPanel {
    pub title: String,
    pub text: String,
    pub style: PanelStyle,
}

/// The visual shown under a story step, one variant per [`VisualKind`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum StoryVisual {
    Problem {
        quality: BarChart,
        wine_types: PieChart,
    },
    Discovery {
        scatter: ScatterChart,
    },
    Proof {
        categories: BarChart,
    },
    Impact {
        panels: Vec<ImpactPanel>,
    },
}

impl StoryVisual {
    pub fn kind(&self) -> VisualKind {
        match self {
            Self::Problem { .. } => VisualKind::Problem,
            Self::Discovery { .. } => VisualKind::Discovery,
            Self::Proof { .. } => VisualKind::Proof,
            Self::Impact { .. } => VisualKind::Impact,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricCard {
    pub value: String,
    pub label: String,
    pub detail: String,
    pub gradient: Gradient,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewPanel {
    pub metrics: Vec<MetricCard>,
    pub quality: BarChart,
    pub scatter: ScatterChart,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsightCard {
    pub value: String,
    pub label: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyInsights {
    pub title: String,
    pub cards: Vec<InsightCard>,
    pub bottom_line: String,
    pub final_message: String,
    pub background: Gradient,
}
