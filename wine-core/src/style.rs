//! Presentation settings.
//!
//! Colours and sizes live in one record so that the state and data logic
//! never touch styling. Every field defaults to the stock look; a config
//! file can override any subset.

use serde::{Deserialize, Serialize};

use crate::models::ColorTag;

const fn tag(rgb: u32) -> ColorTag {
    ColorTag::from_rgb(rgb)
}

/// Two-stop gradient, drawn from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gradient {
    pub from: ColorTag,
    pub to: ColorTag,
}

impl Gradient {
    pub const fn new(
        from: u32,
        to: u32,
    ) -> Self {
        Self {
            from: tag(from),
            to: tag(to),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: ColorTag,
    pub surface: ColorTag,
    pub border: ColorTag,
    pub title: ColorTag,
    pub accent: Gradient,
    pub text: ColorTag,
    pub muted_text: ColorTag,
    pub faint_text: ColorTag,
    pub story_background: ColorTag,
    pub stats_background: ColorTag,
    pub stats_text: ColorTag,
    pub inactive_button: ColorTag,
    pub disabled_button: ColorTag,
    pub insights: Gradient,
    /// Fill of the single-series quality distribution bars.
    pub quality_bar: ColorTag,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: tag(0xfef7f7),
            surface: tag(0xffffff),
            border: tag(0xe5e7eb),
            title: tag(0x8b0000),
            accent: Gradient::new(0xdc2626, 0xb91c1c),
            text: tag(0x374151),
            muted_text: tag(0x6b7280),
            faint_text: tag(0x9ca3af),
            story_background: tag(0xfef2f2),
            stats_background: tag(0xfef3c7),
            stats_text: tag(0x92400e),
            inactive_button: tag(0xf3f4f6),
            disabled_button: tag(0xd1d5db),
            insights: Gradient::new(0xdc2626, 0xf59e0b),
            quality_bar: tag(0x3b82f6),
        }
    }
}

/// Colours of one "impact" text panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelStyle {
    pub background: ColorTag,
    pub title: ColorTag,
    pub text: ColorTag,
}

impl PanelStyle {
    pub const fn new(
        background: u32,
        title: u32,
        text: u32,
    ) -> Self {
        Self {
            background: tag(background),
            title: tag(title),
            text: tag(text),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub small_height: f32,
    pub large_height: f32,
    pub pie_outer_radius: f32,
    pub scatter_y_domain: (f64, f64),
    pub scatter_point_radius: f32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            small_height: 300.0,
            large_height: 400.0,
            pie_outer_radius: 80.0,
            scatter_y_domain: (3.0, 9.0),
            scatter_point_radius: 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub palette: Palette,
    /// Overview metric cards, left to right.
    pub metric_cards: [Gradient; 4],
    /// Winemakers, consumers, industry.
    pub impact_panels: [PanelStyle; 3],
    pub charts: ChartStyle,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            metric_cards: [
                Gradient::new(0xdc2626, 0xb91c1c),
                Gradient::new(0xd97706, 0xc2410c),
                Gradient::new(0x059669, 0x047857),
                Gradient::new(0x7c3aed, 0x6d28d9),
            ],
            impact_panels: [
                PanelStyle::new(0xdcfce7, 0x166534, 0x15803d),
                PanelStyle::new(0xdbeafe, 0x1e40af, 0x1d4ed8),
                PanelStyle::new(0xf3e8ff, 0x7c3aed, 0x8b5cf6),
            ],
            charts: ChartStyle::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let style: StyleConfig = toml::from_str(
            r##"
            [palette]
            quality_bar = "#112233"

            [charts]
            large_height = 480.0
            "##,
        )
        .unwrap();

        assert_eq!(style.palette.quality_bar, ColorTag::from_rgb(0x112233));
        assert_eq!(style.palette.title, ColorTag::from_rgb(0x8b0000));
        assert_eq!(style.charts.large_height, 480.0);
        assert_eq!(style.charts.small_height, 300.0);
        assert_eq!(style.metric_cards, StyleConfig::default().metric_cards);
    }

    #[test]
    fn invalid_colour_is_rejected() {
        let result: Result<StyleConfig, _> = toml::from_str(
            r##"
            [palette]
            surface = "white"
            "##,
        );

        assert!(result.is_err());
    }
}
