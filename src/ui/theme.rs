use super::Edges;

/// Visual constants the tooltip renderer pulls each frame.
///
/// Pure lookups: values are reported at full intensity and the draw step
/// scales the alpha-dependent ones by the controller's opacity.
pub trait StyleProvider {
    /// Background blur radius at full opacity (pixels).
    fn blur_radius(&self) -> f32;
    /// Background blur strength at full opacity.
    fn blur_strength(&self) -> f32;
    /// Text and shadow color (sRGB RGBA) before opacity.
    fn tooltip_color(&self) -> [f32; 4];
    /// Panel fill (sRGB RGBA) before opacity.
    fn tooltip_bg_color(&self) -> [f32; 4];
    fn tooltip_border_color(&self) -> [f32; 4];
    fn tooltip_border_width(&self) -> f32;
    /// Width of the tooltip content box (pixels).
    fn content_width(&self) -> f32;
    /// Padding around each text block inside the box.
    fn content_padding(&self) -> Edges;
    fn title_font_size(&self) -> f32;
    fn body_font_size(&self) -> f32;
}

/// Centralized visual style constants.
///
/// Single global theme. No runtime switching. Passed explicitly to the draw
/// step rather than looked up from a singleton.
#[derive(Debug, Clone)]
pub struct Theme {
    // -- Color palette (sRGB RGBA) --
    /// Light text: #E6EEF5
    pub text_light: [f32; 4],
    /// Accent cyan used for borders: #4FB6D4
    pub accent: [f32; 4],

    // -- Layout --
    /// Width of a full content column (pixels). Tooltips use half of it.
    pub content_width: f32,
    /// Padding around text blocks (pixels).
    pub content_padding: Edges,

    // -- Fonts --
    /// Title font size in pixels.
    pub font_name_size: f32,
    /// Body font size in pixels.
    pub font_text_size: f32,

    // -- Tooltip --
    /// Background blur radius (pixels) at full opacity.
    pub blur_radius: f32,
    /// Background blur strength at full opacity.
    pub blur_strength: f32,
    /// Tooltip panel fill (sRGB RGBA).
    pub tooltip_bg_color: [f32; 4],
    /// Tooltip border color (sRGB RGBA).
    pub tooltip_border_color: [f32; 4],
    /// Tooltip border width (pixels).
    pub tooltip_border_width: f32,
}

/// Convert a hex color (#RRGGBB) to sRGB [f32; 4] with alpha 1.0.
const fn hex(r: u8, g: u8, b: u8) -> [f32; 4] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

/// Convert a hex color with custom alpha.
const fn hex_a(r: u8, g: u8, b: u8, a: f32) -> [f32; 4] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a]
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text_light: hex(0xE6, 0xEE, 0xF5),
            accent: hex(0x4F, 0xB6, 0xD4),

            content_width: 800.0,
            content_padding: Edges {
                top: 8.0,
                right: 20.0,
                bottom: 8.0,
                left: 20.0,
            },

            font_name_size: 16.0,
            font_text_size: 12.0,

            blur_radius: 4.0,
            blur_strength: 10.0,
            tooltip_bg_color: hex_a(0x0A, 0x0F, 0x16, 0.85),
            tooltip_border_color: hex(0x4F, 0xB6, 0xD4), // accent
            tooltip_border_width: 1.0,
        }
    }
}

impl StyleProvider for Theme {
    fn blur_radius(&self) -> f32 {
        self.blur_radius
    }

    fn blur_strength(&self) -> f32 {
        self.blur_strength
    }

    fn tooltip_color(&self) -> [f32; 4] {
        self.text_light
    }

    fn tooltip_bg_color(&self) -> [f32; 4] {
        self.tooltip_bg_color
    }

    fn tooltip_border_color(&self) -> [f32; 4] {
        self.tooltip_border_color
    }

    fn tooltip_border_width(&self) -> f32 {
        self.tooltip_border_width
    }

    fn content_width(&self) -> f32 {
        self.content_width / 2.0
    }

    fn content_padding(&self) -> Edges {
        self.content_padding
    }

    fn title_font_size(&self) -> f32 {
        self.font_name_size
    }

    fn body_font_size(&self) -> f32 {
        self.font_text_size
    }
}
