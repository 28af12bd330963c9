use gpui::{App, Hsla};
use gpui_component::Theme;
use tracing::debug;
use wine_core::{ColorTag, StyleConfig};

/// Converts a palette colour into a gpui colour.
pub fn hsla(tag: ColorTag) -> Hsla {
    gpui::rgb(tag.rgb()).into()
}

fn hover_variant(base: Hsla) -> Hsla {
    let shift = if base.l > 0.5 { -0.05 } else { 0.05 };
    Hsla {
        l: (base.l + shift).clamp(0.0, 1.0),
        ..base
    }
}

fn active_variant(base: Hsla) -> Hsla {
    let shift = if base.l > 0.5 { -0.10 } else { 0.10 };
    Hsla {
        l: (base.l + shift).clamp(0.0, 1.0),
        ..base
    }
}

/// Near-black or near-white, whichever reads on `background`.
fn text_on(background: Hsla) -> Hsla {
    if background.l > 0.55 {
        gpui::rgb(0x141414).into()
    } else {
        gpui::rgb(0xf7f7f7).into()
    }
}

/// Pushes the dashboard palette into the gpui-component global theme so
/// buttons and charts pick it up.
pub fn apply_dashboard_theme(
    style: &StyleConfig,
    cx: &mut App,
) {
    let palette = &style.palette;
    let colors = &mut Theme::global_mut(cx).colors;

    // ── Primary (active nav and step buttons) ─────────────────────
    let accent = hsla(palette.accent.from);
    colors.primary = accent;
    colors.primary_foreground = text_on(accent);
    colors.primary_hover = hover_variant(accent);
    colors.primary_active = active_variant(accent);

    // ── Secondary (inactive buttons) ──────────────────────────────
    let inactive = hsla(palette.inactive_button);
    colors.secondary = inactive;
    colors.secondary_foreground = hsla(palette.text);
    colors.secondary_hover = hover_variant(inactive);
    colors.secondary_active = active_variant(inactive);

    // ── Surfaces ──────────────────────────────────────────────────
    colors.background = hsla(palette.background);
    colors.foreground = hsla(palette.text);
    colors.muted = hsla(palette.disabled_button);
    colors.muted_foreground = hsla(palette.muted_text);
    colors.border = hsla(palette.border);
    colors.popover = hsla(palette.surface);
    colors.popover_foreground = hsla(palette.text);

    // ── Charts ────────────────────────────────────────────────────
    colors.chart_1 = hsla(palette.quality_bar);
    colors.chart_2 = hsla(palette.accent.from);
    colors.chart_3 = hsla(palette.insights.to);
    colors.chart_4 = hsla(palette.title);
    colors.chart_5 = hsla(palette.faint_text);

    debug!(accent = %palette.accent.from, "Applied dashboard theme");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_contrasts_with_background() {
        let light = hsla(ColorTag::from_rgb(0xfef7f7));
        let dark = hsla(ColorTag::from_rgb(0x8b0000));

        assert!(text_on(light).l < 0.5);
        assert!(text_on(dark).l > 0.5);
    }

    #[test]
    fn hover_moves_towards_middle() {
        let light = hsla(ColorTag::from_rgb(0xf3f4f6));
        let dark = hsla(ColorTag::from_rgb(0x1e40af));

        assert!(hover_variant(light).l < light.l);
        assert!(hover_variant(dark).l > dark.l);
        assert!(active_variant(dark).l > hover_variant(dark).l);
    }
}
