//! Plain-text rendition of a [`Scene`], used by the headless mode and logs.

use std::fmt::{self, Display, Formatter};

use super::charts::{BarChart, PieChart, ScatterChart};
use super::scene::{Body, KeyInsights, OverviewPanel, Scene, StoryPanel, StoryVisual};

const BAR_WIDTH: f64 = 30.0;

impl Display for Scene {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "{}", self.header.title)?;
        writeln!(f, "{}", self.header.subtitle)?;
        writeln!(f, "{}", self.header.data_line)?;
        writeln!(f)?;

        let nav: Vec<String> = self
            .nav
            .iter()
            .map(|item| marked(&item.label, item.active))
            .collect();
        writeln!(f, "{}", nav.join("  "))?;
        writeln!(f)?;

        match &self.body {
            Body::Story(panel) => write_story(f, panel)?,
            Body::Overview(panel) => write_overview(f, panel)?,
        }

        writeln!(f)?;
        write_insights(f, &self.insights)
    }
}

fn marked(
    label: &str,
    active: bool,
) -> String {
    if active {
        format!("[{label}]")
    } else {
        format!(" {label} ")
    }
}

fn write_story(
    f: &mut Formatter<'_>,
    panel: &StoryPanel,
) -> fmt::Result {
    let buttons: Vec<String> = panel
        .step_buttons
        .iter()
        .map(|b| marked(&b.label, b.active))
        .collect();
    writeln!(f, "{}", buttons.join(" "))?;
    writeln!(f)?;

    writeln!(f, "== {} ==", panel.step.title)?;
    writeln!(f, "{}", panel.step.subtitle)?;
    writeln!(f, "{}", panel.step.content)?;
    writeln!(f, "> {}", panel.step.stats_text)?;
    writeln!(f)?;

    match &panel.visual {
        StoryVisual::Problem {
            quality,
            wine_types,
        } => {
            write_bar_chart(f, quality)?;
            write_pie_chart(f, wine_types)?;
        }
        StoryVisual::Discovery { scatter } => write_scatter_chart(f, scatter)?,
        StoryVisual::Proof { categories } => write_bar_chart(f, categories)?,
        StoryVisual::Impact { panels } => {
            for impact in panels {
                writeln!(f, "* {}: {}", impact.title, impact.text)?;
            }
        }
    }

    let arrow = |label: &str, enabled: bool| {
        if enabled {
            format!("({label})")
        } else {
            format!("({label} - disabled)")
        }
    };
    writeln!(
        f,
        "{}   {}   {}",
        arrow("← Previous", panel.arrows.previous_enabled),
        panel.arrows.indicator,
        arrow("Next →", panel.arrows.next_enabled)
    )
}

fn write_overview(
    f: &mut Formatter<'_>,
    panel: &OverviewPanel,
) -> fmt::Result {
    for metric in &panel.metrics {
        writeln!(f, "{:>8}  {} ({})", metric.value, metric.label, metric.detail)?;
    }
    writeln!(f)?;
    write_bar_chart(f, &panel.quality)?;
    write_scatter_chart(f, &panel.scatter)
}

fn write_bar_chart(
    f: &mut Formatter<'_>,
    chart: &BarChart,
) -> fmt::Result {
    writeln!(f, "-- {} --", chart.title)?;
    let max = chart.max_value();
    let width = chart
        .bars
        .iter()
        .map(|b| b.label.chars().count())
        .max()
        .unwrap_or(0);

    for bar in &chart.bars {
        let filled = if max > 0.0 {
            (bar.value / max * BAR_WIDTH).round() as usize
        } else {
            0
        };
        writeln!(
            f,
            "{:>width$} | {:<bar_width$} {} {}",
            bar.label,
            "█".repeat(filled),
            bar.value,
            bar.color,
            bar_width = BAR_WIDTH as usize,
        )?;
    }
    writeln!(f, "({} by {})", chart.y_label, chart.x_label)
}

fn write_pie_chart(
    f: &mut Formatter<'_>,
    chart: &PieChart,
) -> fmt::Result {
    writeln!(f, "-- {} --", chart.title)?;
    let total: f64 = chart.slices.iter().map(|s| s.value).sum();
    for slice in &chart.slices {
        let share = if total > 0.0 {
            slice.value / total * 100.0
        } else {
            0.0
        };
        writeln!(f, "{} ({share:.1}%) {}", slice.caption(), slice.color)?;
    }
    Ok(())
}

fn write_scatter_chart(
    f: &mut Formatter<'_>,
    chart: &ScatterChart,
) -> fmt::Result {
    writeln!(f, "-- {} --", chart.title)?;
    for series in &chart.series {
        write!(f, "{} {}:", series.name, series.color)?;
        for point in &series.points {
            write!(f, " ({}, {})", point.x, point.y)?;
        }
        writeln!(f)?;
    }
    writeln!(
        f,
        "({} vs {}, {} from {} to {})",
        chart.y_label, chart.x_label, chart.y_label, chart.y_domain.0, chart.y_domain.1
    )
}

fn write_insights(
    f: &mut Formatter<'_>,
    insights: &KeyInsights,
) -> fmt::Result {
    writeln!(f, "{}", insights.title)?;
    for card in &insights.cards {
        writeln!(f, "{:>8}  {} ({})", card.value, card.label, card.detail)?;
    }
    writeln!(f, "{}", insights.bottom_line)?;
    write!(f, "{}", insights.final_message)
}
