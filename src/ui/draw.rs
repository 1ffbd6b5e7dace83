use super::theme::StyleProvider;
use super::tooltip::TooltipController;
use super::{Edges, Rect, Size};

/// Line height as a multiple of font size.
const LINE_SPACING: f32 = 1.2;
/// Average glyph advance as a fraction of font size. Used only to estimate
/// wrapped line counts; real shaping belongs to the renderer.
const GLYPH_ADVANCE: f32 = 0.5;

/// Intermediate draw command for a background blur region.
#[derive(Debug, Clone, PartialEq)]
pub struct BlurCommand {
    pub rect: Rect,
    pub radius: f32,
    pub strength: f32,
}

/// Intermediate draw command for a panel quad.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelCommand {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub bg_color: [f32; 4],     // sRGB RGBA
    pub border_color: [f32; 4], // sRGB RGBA
    pub border_width: f32,
}

/// Intermediate draw command for a text run.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCommand {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub color: [f32; 4],        // sRGB RGBA
    pub shadow_color: [f32; 4], // sRGB RGBA
    pub font_size: f32,
    /// Width at which the renderer should wrap.
    pub wrap_width: f32,
}

/// Collects draw commands for one frame.
/// Decouples tooltip state from whatever backend draws it.
#[derive(Debug, Default)]
pub struct DrawList {
    pub blurs: Vec<BlurCommand>,
    pub panels: Vec<PanelCommand>,
    pub texts: Vec<TextCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.blurs.clear();
        self.panels.clear();
        self.texts.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.blurs.is_empty() && self.panels.is_empty() && self.texts.is_empty()
    }
}

/// Scale a color's alpha by `opacity`.
fn faded(mut color: [f32; 4], opacity: f32) -> [f32; 4] {
    color[3] *= opacity;
    color
}

/// Width available to text inside the box.
fn wrap_width(style: &impl StyleProvider) -> f32 {
    let pad = style.content_padding();
    (style.content_width() - 2.0 * pad.horizontal()).max(0.0)
}

/// Estimated height of `text` wrapped at `wrap` pixels.
fn text_height(text: &str, font_size: f32, wrap: f32) -> f32 {
    let per_line = if wrap > 0.0 {
        (wrap / (font_size * GLYPH_ADVANCE)).floor().max(1.0)
    } else {
        1.0
    };
    let lines: f32 = text
        .lines()
        .map(|line| (line.chars().count() as f32 / per_line).ceil().max(1.0))
        .sum();
    lines * font_size * LINE_SPACING
}

/// Estimated content box size for a title/body pair.
///
/// Hosts without a text shaper pass this to `TooltipController::anchor`.
pub fn tooltip_content_size(style: &impl StyleProvider, title: &str, body: &str) -> Size {
    let pad = style.content_padding();
    let wrap = wrap_width(style);
    let title_h = text_height(title, style.title_font_size(), wrap);
    let body_h = text_height(body, style.body_font_size(), wrap);
    Size {
        width: style.content_width(),
        height: title_h + body_h + 2.0 * pad.vertical(),
    }
}

/// Emit the tooltip's draw commands for this frame.
///
/// Nothing is emitted while fully transparent or collapsed. Every
/// alpha-dependent value (blur, panel fill, text and shadow color) is
/// scaled by the current opacity.
pub fn emit_tooltip(
    list: &mut DrawList,
    tooltip: &TooltipController,
    style: &impl StyleProvider,
    content: Size,
) {
    let opacity = tooltip.opacity();
    if opacity <= 0.0 || tooltip.is_collapsed() {
        return;
    }

    let (x, y) = tooltip.anchor(content);
    let outer = Rect {
        x,
        y,
        width: content.width,
        height: content.height,
    };

    list.blurs.push(BlurCommand {
        rect: outer,
        radius: style.blur_radius() * opacity,
        strength: style.blur_strength() * opacity,
    });

    // Two nested bordered boxes.
    let border = style.tooltip_border_width();
    let bg = faded(style.tooltip_bg_color(), opacity);
    let border_color = faded(style.tooltip_border_color(), opacity);
    let inner = outer.inset(Edges::all(border));
    for rect in [outer, inner] {
        list.panels.push(PanelCommand {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            bg_color: bg,
            border_color,
            border_width: border,
        });
    }

    let pad = style.content_padding();
    let wrap = wrap_width(style);
    let color = faded(style.tooltip_color(), opacity);

    let title_y = y + pad.top;
    list.texts.push(TextCommand {
        text: tooltip.title().to_string(),
        x: x + pad.left,
        y: title_y,
        color,
        shadow_color: color,
        font_size: style.title_font_size(),
        wrap_width: wrap,
    });

    let title_h = text_height(tooltip.title(), style.title_font_size(), wrap);
    list.texts.push(TextCommand {
        text: tooltip.body().to_string(),
        x: x + pad.left,
        y: title_y + title_h + pad.bottom + pad.top,
        color,
        shadow_color: color,
        font_size: style.body_font_size(),
        wrap_width: wrap,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{FrameContext, Theme, WidgetId};
    use slotmap::SlotMap;

    fn screen() -> Size {
        Size {
            width: 800.0,
            height: 600.0,
        }
    }

    fn shown(seconds: f32) -> TooltipController {
        let mut arena: SlotMap<WidgetId, ()> = SlotMap::with_key();
        let id = arena.insert(());
        let mut tip = TooltipController::new();
        tip.show(id, "Shipyard", "Builds and repairs hulls.");
        tip.advance(seconds, &FrameContext::new((10.0, 10.0), screen()));
        tip
    }

    #[test]
    fn nothing_emitted_while_transparent() {
        let theme = Theme::default();
        let tip = shown(0.5);
        let mut list = DrawList::new();
        emit_tooltip(&mut list, &tip, &theme, Size::new(100.0, 50.0));
        assert!(list.is_empty());
    }

    #[test]
    fn nothing_emitted_after_force_hide() {
        let theme = Theme::default();
        let mut tip = shown(1.5);
        tip.force_hide();
        let mut list = DrawList::new();
        emit_tooltip(&mut list, &tip, &theme, Size::new(100.0, 50.0));
        assert!(list.is_empty());
    }

    #[test]
    fn full_opacity_emits_blur_panels_and_text() {
        let theme = Theme::default();
        let tip = shown(1.5);
        let mut list = DrawList::new();
        emit_tooltip(&mut list, &tip, &theme, Size::new(100.0, 50.0));

        assert_eq!(list.blurs.len(), 1);
        assert_eq!(list.panels.len(), 2);
        assert_eq!(list.texts.len(), 2);
        assert_eq!(list.texts[0].text, "Shipyard");
        assert_eq!(list.texts[1].text, "Builds and repairs hulls.");

        assert!((list.blurs[0].radius - theme.blur_radius).abs() < 1e-4);
        assert_eq!(list.blurs[0].rect.x, 40.0);
        assert_eq!(list.blurs[0].rect.y, 50.0);
        // Body sits below title.
        assert!(list.texts[1].y > list.texts[0].y);
    }

    #[test]
    fn alpha_scales_with_opacity() {
        let theme = Theme::default();
        let tip = shown(1.1);
        let opacity = tip.opacity();
        assert!((opacity - 0.5).abs() < 1e-3);

        let mut list = DrawList::new();
        emit_tooltip(&mut list, &tip, &theme, Size::new(100.0, 50.0));

        assert!((list.blurs[0].strength - theme.blur_strength * opacity).abs() < 1e-4);
        assert!((list.texts[0].color[3] - theme.text_light[3] * opacity).abs() < 1e-4);
        assert!((list.panels[0].bg_color[3] - theme.tooltip_bg_color[3] * opacity).abs() < 1e-4);
        assert!((list.texts[1].shadow_color[3] - theme.text_light[3] * opacity).abs() < 1e-4);
        // RGB untouched.
        assert_eq!(list.texts[0].color[0], theme.text_light[0]);
    }

    #[test]
    fn content_size_grows_with_body_length() {
        let theme = Theme::default();
        let short = tooltip_content_size(&theme, "Title", "Short.");
        let long = tooltip_content_size(&theme, "Title", &"word ".repeat(200));
        assert_eq!(short.width, StyleProvider::content_width(&theme));
        assert!(long.height > short.height);
    }

    #[test]
    fn text_height_counts_explicit_lines() {
        let one = text_height("a", 10.0, 300.0);
        let three = text_height("a\nb\nc", 10.0, 300.0);
        assert!((three - 3.0 * one).abs() < 1e-4);
    }
}
