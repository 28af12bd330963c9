//! Chart descriptions handed to the charting layer.
//!
//! These are plain records: labelled numeric series with colours. Drawing
//! them is the UI crate's job.

use serde::Serialize;

use crate::Dataset;
use crate::calculations::to_chart_value;
use crate::models::{ColorTag, WineCategory};
use crate::style::StyleConfig;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub color: ColorTag,
}

/// Categorical bar chart. Every bar carries its own colour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub height: f32,
    pub bars: Vec<Bar>,
}

impl BarChart {
    pub fn max_value(&self) -> f64 {
        self.bars.iter().map(|b| b.value).fold(0.0, f64::max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub color: ColorTag,
}

impl PieSlice {
    /// Text drawn next to the slice, e.g. `White Wine: 4898`.
    pub fn caption(&self) -> String {
        format!("{}: {}", self.label, self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub height: f32,
    pub outer_radius: f32,
    pub slices: Vec<PieSlice>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub name: String,
    pub color: ColorTag,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub height: f32,
    pub y_domain: (f64, f64),
    pub series: Vec<ScatterSeries>,
}

impl ScatterChart {
    /// Smallest and largest x over all series, or `None` when empty.
    pub fn x_extent(&self) -> Option<(f64, f64)> {
        self.series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.x))
            .fold(None, |acc, x| match acc {
                None => Some((x, x)),
                Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
            })
    }
}

pub(crate) fn quality_distribution(
    dataset: &Dataset,
    style: &StyleConfig,
    title: &str,
) -> BarChart {
    BarChart {
        title: title.to_string(),
        x_label: "Quality".to_string(),
        y_label: "Number of Wines".to_string(),
        height: style.charts.small_height,
        bars: dataset
            .quality_distribution
            .iter()
            .map(|bucket| Bar {
                label: bucket.quality.to_string(),
                value: f64::from(bucket.count),
                color: style.palette.quality_bar,
            })
            .collect(),
    }
}

pub(crate) fn wine_types(
    dataset: &Dataset,
    style: &StyleConfig,
) -> PieChart {
    PieChart {
        title: "Wine Types Distribution".to_string(),
        height: style.charts.small_height,
        outer_radius: style.charts.pie_outer_radius,
        slices: dataset
            .wine_types
            .iter()
            .map(|slice| PieSlice {
                label: slice.label.clone(),
                value: f64::from(slice.count),
                color: slice.color,
            })
            .collect(),
    }
}

pub(crate) fn alcohol_vs_quality(
    dataset: &Dataset,
    style: &StyleConfig,
    title: &str,
    height: f32,
) -> ScatterChart {
    let series = WineCategory::all()
        .iter()
        .map(|&category| ScatterSeries {
            name: category.series_name().to_string(),
            color: dataset
                .category_color(category)
                .unwrap_or(style.palette.faint_text),
            points: dataset
                .samples_for(category)
                .map(|sample| ScatterPoint {
                    x: to_chart_value(sample.alcohol),
                    y: f64::from(sample.quality),
                })
                .collect(),
        })
        .collect();

    ScatterChart {
        title: title.to_string(),
        x_label: "Alcohol %".to_string(),
        y_label: "Quality".to_string(),
        height,
        y_domain: style.charts.scatter_y_domain,
        series,
    }
}

pub(crate) fn alcohol_categories(
    dataset: &Dataset,
    style: &StyleConfig,
) -> BarChart {
    BarChart {
        title: "📊 Quality by Alcohol Category".to_string(),
        x_label: "Alcohol Category".to_string(),
        y_label: "Average Quality".to_string(),
        height: style.charts.large_height,
        bars: dataset
            .alcohol_categories
            .iter()
            .map(|stat| Bar {
                label: stat.label.clone(),
                value: to_chart_value(stat.avg_quality),
                color: stat.color,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn quality_bars_share_series_colour() {
        let style = StyleConfig::default();
        let chart = quality_distribution(&Dataset::uci_wine_quality(), &style, "Q");

        assert_eq!(chart.bars.len(), 7);
        assert!(chart.bars.iter().all(|b| b.color == style.palette.quality_bar));
        assert_eq!(chart.max_value(), 2836.0);
    }

    #[test]
    fn pie_caption_shows_label_and_count() {
        let chart = wine_types(&Dataset::uci_wine_quality(), &StyleConfig::default());
        let captions: Vec<String> = chart.slices.iter().map(PieSlice::caption).collect();

        assert_eq!(captions, vec!["White Wine: 4898", "Red Wine: 1599"]);
    }

    #[test]
    fn scatter_has_red_then_white_series() {
        let chart = alcohol_vs_quality(
            &Dataset::uci_wine_quality(),
            &StyleConfig::default(),
            "S",
            400.0,
        );
        let names: Vec<&str> = chart.series.iter().map(|s| s.name.as_str()).collect();

        assert_eq!(names, vec!["Red Wine", "White Wine"]);
        assert_eq!(chart.series[0].points[0], ScatterPoint { x: 9.2, y: 5.0 });
        assert_eq!(chart.x_extent(), Some((8.4, 14.0)));
    }

    #[test]
    fn empty_scatter_has_no_extent() {
        let mut dataset = Dataset::uci_wine_quality();
        dataset.alcohol_quality_samples.clear();
        let chart = alcohol_vs_quality(&dataset, &StyleConfig::default(), "S", 300.0);

        assert_eq!(chart.x_extent(), None);
    }
}
