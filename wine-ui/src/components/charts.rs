//! Chart elements for the chart descriptions built by `wine_core::render`.
//!
//! Bar and pie charts are gpui-component charts. The scatter plot is
//! painted on a canvas since the component library has no scatter series.

use gpui::{
    Bounds, Corners, Hsla, IntoElement, ParentElement, PathBuilder, Pixels, Styled, canvas, div,
    fill, point, px, size,
};
use gpui_component::chart::{BarChart as BarElement, PieChart as PieElement};
use gpui_component::{h_flex, v_flex};
use wine_core::render::charts::{Bar, BarChart, PieChart, PieSlice, ScatterChart, ScatterPoint};
use wine_core::style::Palette;

use crate::themes::hsla;

const PLOT_MARGIN: f32 = 24.0;

fn chart_card(
    title: &str,
    palette: &Palette,
) -> gpui::Div {
    v_flex()
        .gap_2()
        .p_4()
        .rounded_lg()
        .border_1()
        .border_color(hsla(palette.border))
        .bg(hsla(palette.surface))
        .child(
            div()
                .text_lg()
                .font_weight(gpui::FontWeight::SEMIBOLD)
                .text_color(hsla(palette.text))
                .child(title.to_string()),
        )
}

fn axis_caption(
    text: &str,
    palette: &Palette,
) -> gpui::Div {
    div()
        .text_xs()
        .text_color(hsla(palette.muted_text))
        .child(text.to_string())
}

pub fn bar_chart(
    chart: &BarChart,
    palette: &Palette,
) -> impl IntoElement {
    let bars: Vec<Bar> = chart.bars.clone();

    chart_card(&chart.title, palette)
        .child(
            div().h(px(chart.height)).w_full().child(
                BarElement::new(bars)
                    .x(|bar| bar.label.clone())
                    .y(|bar| bar.value)
                    .fill(|bar| hsla(bar.color)),
            ),
        )
        .child(
            h_flex()
                .justify_between()
                .child(axis_caption(&chart.y_label, palette))
                .child(axis_caption(&chart.x_label, palette)),
        )
}

pub fn pie_chart(
    chart: &PieChart,
    palette: &Palette,
) -> impl IntoElement {
    let slices: Vec<PieSlice> = chart.slices.clone();

    chart_card(&chart.title, palette)
        .child(
            div().h(px(chart.height)).w_full().child(
                PieElement::new(slices)
                    .value(|slice| slice.value as f32)
                    .outer_radius(chart.outer_radius)
                    .color(|slice| hsla(slice.color)),
            ),
        )
        .child(legend(
            chart
                .slices
                .iter()
                .map(|slice| (slice.caption(), hsla(slice.color))),
            palette,
        ))
}

fn legend(
    entries: impl Iterator<Item = (String, Hsla)>,
    palette: &Palette,
) -> impl IntoElement {
    h_flex()
        .gap_4()
        .justify_center()
        .children(entries.map(|(label, color)| {
            h_flex()
                .gap_1()
                .items_center()
                .child(div().size_3().rounded_full().bg(color))
                .child(
                    div()
                        .text_sm()
                        .text_color(hsla(palette.text))
                        .child(label),
                )
        }))
}

/// Widens an x extent to whole numbers so the outermost points do not
/// sit on the plot edge.
fn padded_extent((min, max): (f64, f64)) -> (f64, f64) {
    let (low, high) = (min.floor(), max.ceil());
    if high > low { (low, high) } else { (low - 1.0, high + 1.0) }
}

/// Maps `value` in `domain` onto `[0, span]`. Values outside the domain
/// are clamped to its edges.
fn project(
    value: f64,
    (low, high): (f64, f64),
    span: f32,
) -> f32 {
    if high <= low {
        return 0.0;
    }
    let t = ((value - low) / (high - low)).clamp(0.0, 1.0);
    (t as f32) * span
}

struct PlotSeries {
    color: Hsla,
    points: Vec<ScatterPoint>,
}

pub fn scatter_chart(
    chart: &ScatterChart,
    point_radius: f32,
    palette: &Palette,
) -> impl IntoElement {
    let x_domain = padded_extent(chart.x_extent().unwrap_or((0.0, 1.0)));
    let y_domain = chart.y_domain;
    let axis_color = hsla(palette.faint_text);
    let series: Vec<PlotSeries> = chart
        .series
        .iter()
        .map(|s| PlotSeries {
            color: hsla(s.color),
            points: s.points.clone(),
        })
        .collect();

    let plot = canvas(
        move |bounds, _window, _cx| bounds,
        move |bounds: Bounds<Pixels>, _, window, _cx| {
            let width: f32 = f32::from(bounds.size.width) - 2.0 * PLOT_MARGIN;
            let height: f32 = f32::from(bounds.size.height) - 2.0 * PLOT_MARGIN;
            let left = bounds.origin.x + px(PLOT_MARGIN);
            let bottom = bounds.origin.y + px(PLOT_MARGIN + height);

            let mut axes = PathBuilder::stroke(px(1.0));
            axes.move_to(point(left, bounds.origin.y + px(PLOT_MARGIN)));
            axes.line_to(point(left, bottom));
            axes.line_to(point(left + px(width), bottom));
            if let Ok(path) = axes.build() {
                window.paint_path(path, axis_color);
            }

            for s in &series {
                for p in &s.points {
                    let center_x = left + px(project(p.x, x_domain, width));
                    let center_y = bottom - px(project(p.y, y_domain, height));
                    let dot = Bounds::new(
                        point(center_x - px(point_radius), center_y - px(point_radius)),
                        size(px(point_radius * 2.0), px(point_radius * 2.0)),
                    );
                    window.paint_quad(
                        fill(dot, s.color).corner_radii(Corners::all(px(point_radius))),
                    );
                }
            }
        },
    )
    .w_full()
    .h(px(chart.height));

    chart_card(&chart.title, palette)
        .child(
            h_flex()
                .gap_2()
                .child(
                    v_flex()
                        .h(px(chart.height))
                        .justify_between()
                        .py(px(PLOT_MARGIN))
                        .child(axis_caption(&format!("{}", y_domain.1), palette))
                        .child(axis_caption(&chart.y_label, palette))
                        .child(axis_caption(&format!("{}", y_domain.0), palette)),
                )
                .child(div().flex_1().child(plot)),
        )
        .child(
            h_flex()
                .justify_between()
                .px(px(PLOT_MARGIN))
                .child(axis_caption(&format!("{}", x_domain.0), palette))
                .child(axis_caption(&chart.x_label, palette))
                .child(axis_caption(&format!("{}", x_domain.1), palette)),
        )
        .child(legend(
            chart
                .series
                .iter()
                .map(|s| (s.name.clone(), hsla(s.color))),
            palette,
        ))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn extent_rounds_outwards() {
        assert_eq!(padded_extent((8.5, 14.2)), (8.0, 15.0));
        assert_eq!(padded_extent((10.0, 10.0)), (9.0, 11.0));
    }

    #[test]
    fn projection_spans_the_domain() {
        assert_eq!(project(3.0, (3.0, 9.0), 300.0), 0.0);
        assert_eq!(project(6.0, (3.0, 9.0), 300.0), 150.0);
        assert_eq!(project(9.0, (3.0, 9.0), 300.0), 300.0);
    }

    #[test]
    fn projection_clamps_out_of_domain_values() {
        assert_eq!(project(1.0, (3.0, 9.0), 300.0), 0.0);
        assert_eq!(project(12.0, (3.0, 9.0), 300.0), 300.0);
        assert_eq!(project(5.0, (4.0, 4.0), 300.0), 0.0);
    }
}
