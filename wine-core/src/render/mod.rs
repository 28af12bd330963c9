//! Renderer: a pure mapping from navigation state and dataset to a [`Scene`].
//!
//! The scene says *what* is on screen (texts, which charts, which buttons are
//! active or disabled) without saying how to draw it, so the whole dispatch
//! can be tested without a window.
//!
//! ```
//! use wine_core::navigation::{View, ViewState};
//! use wine_core::render::{Body, StoryVisual, render};
//! use wine_core::{Dataset, StyleConfig};
//!
//! let dataset = Dataset::uci_wine_quality();
//! let scene = render(&ViewState::new(View::Story, 3), &dataset, &StyleConfig::default());
//!
//! let Body::Story(panel) = &scene.body else { panic!("story view") };
//! assert!(matches!(panel.visual, StoryVisual::Proof { .. }));
//! ```

pub mod charts;
mod display;
pub mod scene;

use tracing::{trace, warn};

pub use charts::{Bar, BarChart, PieChart, PieSlice, ScatterChart, ScatterPoint, ScatterSeries};
pub use scene::{
    Body, Header, ImpactPanel, InsightCard, KeyInsights, MetricCard, NavItem, OverviewPanel, Scene,
    StepArrows, StepButton, StoryPanel, StoryVisual,
};

use crate::Dataset;
use crate::calculations::{
    excellence_rate, format_one_dp, format_percent, format_thousands, quality_point_gap,
};
use crate::models::VisualKind;
use crate::navigation::{View, ViewState};
use crate::style::StyleConfig;

/// Builds the full scene for the current state.
pub fn render(
    state: &ViewState,
    dataset: &Dataset,
    style: &StyleConfig,
) -> Scene {
    trace!(view = %state.selected_view(), step = state.current_step(), "rendering scene");

    let body = match state.selected_view() {
        View::Story => Body::Story(story_panel(state, dataset, style)),
        View::Overview => Body::Overview(overview_panel(dataset, style)),
    };

    Scene {
        header: header(dataset),
        nav: View::all()
            .iter()
            .map(|&view| NavItem {
                view,
                label: view.label().to_string(),
                active: view == state.selected_view(),
            })
            .collect(),
        body,
        insights: key_insights(dataset, style),
    }
}

fn header(dataset: &Dataset) -> Header {
    let summary = &dataset.summary;
    Header {
        title: "🍷 Wine Quality Analysis".to_string(),
        subtitle: "The Science Behind Great Wine".to_string(),
        data_line: format!(
            "Analysis of {} Portuguese Vinho Verde wines • UCI Dataset • Correlation: {}",
            format_thousands(summary.total_wines),
            summary.alcohol_quality_correlation
        ),
    }
}

fn story_panel(
    state: &ViewState,
    dataset: &Dataset,
    style: &StyleConfig,
) -> StoryPanel {
    let step_number = state.current_step();
    let step = match dataset.story_step(step_number) {
        Some(step) => step.clone(),
        None => {
            warn!(step = step_number, "dataset has no such story step");
            Default::default()
        }
    };

    let step_buttons = dataset
        .story_steps
        .iter()
        .enumerate()
        .map(|(index, s)| StepButton {
            step: index + 1,
            label: format!("{}. {}", index + 1, s.title),
            active: index + 1 == step_number,
        })
        .collect();

    let visual = story_visual(step.visual, dataset, style);

    StoryPanel {
        step_buttons,
        step_number,
        step,
        visual,
        arrows: StepArrows {
            previous_enabled: state.can_go_previous(),
            next_enabled: state.can_go_next(),
            indicator: format!(
                "Step {} of {}",
                step_number,
                dataset.story_steps.len()
            ),
        },
    }
}

fn story_visual(
    kind: VisualKind,
    dataset: &Dataset,
    style: &StyleConfig,
) -> StoryVisual {
    match kind {
        VisualKind::Problem => StoryVisual::Problem {
            quality: charts::quality_distribution(dataset, style, "The Quality Pyramid"),
            wine_types: charts::wine_types(dataset, style),
        },
        VisualKind::Discovery => StoryVisual::Discovery {
            scatter: charts::alcohol_vs_quality(
                dataset,
                style,
                "🚀 The Alcohol Discovery",
                style.charts.large_height,
            ),
        },
        VisualKind::Proof => StoryVisual::Proof {
            categories: charts::alcohol_categories(dataset, style),
        },
        VisualKind::Impact => StoryVisual::Impact {
            panels: impact_panels(style),
        },
    }
}

fn impact_panels(style: &StyleConfig) -> Vec<ImpactPanel> {
    let texts = [
        (
            "For Winemakers",
            "Optimize fermentation to achieve 11-12% alcohol content. Focus on extraction \
             techniques that maximize alcohol while maintaining balance.",
        ),
        (
            "For Consumers",
            "Use alcohol percentage as a quality indicator when purchasing wine. Look for \
             11%+ alcohol for better quality.",
        ),
        (
            "For Industry",
            "Implement science-based quality prediction and pricing models. Use alcohol \
             content for market positioning.",
        ),
    ];

    texts
        .iter()
        .zip(style.impact_panels.iter())
        .map(|((title, text), panel_style)| ImpactPanel {
            title: title.to_string(),
            text: text.to_string(),
            style: *panel_style,
        })
        .collect()
}

fn overview_panel(
    dataset: &Dataset,
    style: &StyleConfig,
) -> OverviewPanel {
    let summary = &dataset.summary;
    let [total, correlation, excellent, gap] = style.metric_cards;

    let metrics = vec![
        MetricCard {
            value: format_thousands(summary.total_wines),
            label: "Total Wines Analyzed".to_string(),
            detail: "Portuguese Vinho Verde".to_string(),
            gradient: total,
        },
        MetricCard {
            value: summary.alcohol_quality_correlation.to_string(),
            label: "Alcohol-Quality Correlation".to_string(),
            detail: "Strong positive relationship".to_string(),
            gradient: correlation,
        },
        MetricCard {
            value: summary.excellent_wines.to_string(),
            label: "Excellent Wines (8+)".to_string(),
            detail: format!("{} of total", format_percent(excellence_rate(summary))),
            gradient: excellent,
        },
        MetricCard {
            value: format_one_dp(quality_point_gap(summary)),
            label: "Quality Point Difference".to_string(),
            detail: "Premium vs Budget alcohol".to_string(),
            gradient: gap,
        },
    ];

    OverviewPanel {
        metrics,
        quality: charts::quality_distribution(dataset, style, "Wine Quality Distribution"),
        scatter: charts::alcohol_vs_quality(
            dataset,
            style,
            "🎯 Alcohol vs Quality Discovery",
            style.charts.small_height,
        ),
    }
}

fn key_insights(
    dataset: &Dataset,
    style: &StyleConfig,
) -> KeyInsights {
    let summary = &dataset.summary;
    KeyInsights {
        title: "🔍 Key Discoveries".to_string(),
        cards: vec![
            InsightCard {
                value: summary.alcohol_quality_correlation.to_string(),
                label: "Alcohol-Quality Correlation".to_string(),
                detail: "Strong positive relationship".to_string(),
            },
            InsightCard {
                value: format_one_dp(quality_point_gap(summary)),
                label: "Quality Point Difference".to_string(),
                detail: "Premium vs Budget alcohol".to_string(),
            },
            InsightCard {
                value: format_percent(excellence_rate(summary)),
                label: "Excellence Rate".to_string(),
                detail: "Wines scoring 8+ points".to_string(),
            },
        ],
        bottom_line:
            "🏆 Bottom Line: Wine quality isn't subjective - it's scientifically predictable!"
                .to_string(),
        final_message:
            "Next time you buy wine, check that alcohol percentage - science beats sommelier! 🍷"
                .to_string(),
        background: style.palette.insights,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::navigation::StepDirection;

    fn scene_for(
        view: View,
        step: usize,
    ) -> Scene {
        render(
            &ViewState::new(view, step),
            &Dataset::uci_wine_quality(),
            &StyleConfig::default(),
        )
    }

    fn story(scene: &Scene) -> &StoryPanel {
        match &scene.body {
            Body::Story(panel) => panel,
            Body::Overview(_) => panic!("expected story body"),
        }
    }

    #[test]
    fn header_quotes_total_and_correlation() {
        let scene = scene_for(View::Story, 1);

        assert_eq!(
            scene.header.data_line,
            "Analysis of 6,497 Portuguese Vinho Verde wines • UCI Dataset • Correlation: 0.476"
        );
    }

    #[test]
    fn nav_marks_selected_view_active() {
        let scene = scene_for(View::Overview, 1);
        let active: Vec<(View, bool)> = scene.nav.iter().map(|n| (n.view, n.active)).collect();

        assert_eq!(active, vec![(View::Story, false), (View::Overview, true)]);
    }

    #[test]
    fn each_step_dispatches_its_visual() {
        let kinds: Vec<VisualKind> = (1..=4)
            .map(|step| story(&scene_for(View::Story, step)).visual.kind())
            .collect();

        assert_eq!(kinds, VisualKind::all().to_vec());
    }

    #[test]
    fn story_shows_current_step_text() {
        let scene = scene_for(View::Story, 2);
        let panel = story(&scene);

        assert_eq!(panel.step.title, "The Discovery");
        assert_eq!(panel.step_number, 2);
        assert_eq!(panel.arrows.indicator, "Step 2 of 4");
    }

    #[test]
    fn step_buttons_are_numbered_and_one_is_active() {
        let scene = scene_for(View::Story, 3);
        let buttons = &story(&scene).step_buttons;

        let labels: Vec<&str> = buttons.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "1. The Problem",
                "2. The Discovery",
                "3. The Proof",
                "4. The Impact"
            ]
        );
        let active: Vec<usize> = buttons.iter().filter(|b| b.active).map(|b| b.step).collect();
        assert_eq!(active, vec![3]);
    }

    #[test]
    fn arrows_disable_at_story_ends() {
        let first = scene_for(View::Story, 1);
        let last = scene_for(View::Story, 4);

        assert!(!story(&first).arrows.previous_enabled);
        assert!(story(&first).arrows.next_enabled);
        assert!(story(&last).arrows.previous_enabled);
        assert!(!story(&last).arrows.next_enabled);
    }

    #[test]
    fn impact_step_has_three_text_panels() {
        let scene = scene_for(View::Story, 4);
        let StoryVisual::Impact { panels } = &story(&scene).visual else {
            panic!("expected impact visual");
        };
        let titles: Vec<&str> = panels.iter().map(|p| p.title.as_str()).collect();

        assert_eq!(titles, vec!["For Winemakers", "For Consumers", "For Industry"]);
        assert_eq!(panels[0].style, StyleConfig::default().impact_panels[0]);
    }

    #[test]
    fn overview_ignores_current_step() {
        let from_one = scene_for(View::Overview, 1);
        let from_four = scene_for(View::Overview, 4);

        assert_eq!(from_one, from_four);
    }

    #[test]
    fn overview_metric_values() {
        let scene = scene_for(View::Overview, 1);
        let Body::Overview(panel) = &scene.body else {
            panic!("expected overview body");
        };
        let values: Vec<(&str, &str)> = panel
            .metrics
            .iter()
            .map(|m| (m.value.as_str(), m.detail.as_str()))
            .collect();

        assert_eq!(
            values,
            vec![
                ("6,497", "Portuguese Vinho Verde"),
                ("0.476", "Strong positive relationship"),
                ("198", "3.0% of total"),
                ("1.5", "Premium vs Budget alcohol"),
            ]
        );
        assert_eq!(panel.scatter.series.len(), 2);
        assert_eq!(panel.quality.bars.len(), 7);
    }

    #[test]
    fn insights_footer_is_present_in_both_views() {
        let story_scene = scene_for(View::Story, 2);
        let overview_scene = scene_for(View::Overview, 2);
        let values: Vec<&str> = story_scene
            .insights
            .cards
            .iter()
            .map(|c| c.value.as_str())
            .collect();

        assert_eq!(values, vec!["0.476", "1.5", "3.0%"]);
        assert_eq!(story_scene.insights, overview_scene.insights);
    }

    #[test]
    fn missing_story_step_renders_empty_step() {
        let mut dataset = Dataset::uci_wine_quality();
        dataset.story_steps.clear();
        let mut state = ViewState::default();
        state.advance_step(StepDirection::Next);

        let scene = render(&state, &dataset, &StyleConfig::default());
        let panel = story(&scene);

        assert_eq!(panel.step.title, "");
        assert!(panel.step_buttons.is_empty());
        assert_eq!(panel.arrows.indicator, "Step 2 of 0");
    }
}
