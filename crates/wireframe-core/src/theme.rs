//! Palette and layout constants shared by every screen.
//!
//! The [`Theme`] is a leaf value: screen builders read colors from its
//! [`Palette`] and position shapes with the layout constants below. The
//! defaults reproduce the expenses-tracker look (indigo brand, emerald
//! income, rose expenses).

use crate::{color::Color, geometry::Size, shape::FontFamily};

/// Width of every screen frame.
pub const SCREEN_WIDTH: f32 = 1440.0;

/// Height of every screen frame.
pub const SCREEN_HEIGHT: f32 = 900.0;

/// Height of the faux browser header strip.
pub const HEADER_HEIGHT: f32 = 60.0;

/// Width of the navigation side panel.
pub const SIDEBAR_WIDTH: f32 = 280.0;

/// Horizontal gap between the side panel and page content.
pub const CONTENT_INSET: f32 = 40.0;

/// Vertical position of the page heading, relative to the screen origin.
pub const CONTENT_TOP: f32 = 100.0;

/// Size of one screen frame.
pub fn screen_size() -> Size {
    Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)
}

/// Named colors used by the screen builders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Page and card background.
    pub background: Color,
    /// Default outline color.
    pub stroke: Color,
    /// Default text color.
    pub text: Color,
    /// Primary brand color (buttons, active navigation, hero card).
    pub brand: Color,
    /// Positive figures and healthy progress bars.
    pub success: Color,
    /// Negative figures and destructive actions.
    pub danger: Color,
    /// Progress bars that need attention.
    pub warning: Color,
    /// Header strip, progress tracks, badges.
    pub muted: Color,
    /// Card and panel borders.
    pub border: Color,
    /// Input borders and the avatar placeholder.
    pub input_border: Color,
    /// Placeholder and URL text.
    pub placeholder: Color,
    /// Field labels and table headers.
    pub label: Color,
    /// Inactive navigation entries.
    pub nav_text: Color,
    /// Secondary text on brand-colored surfaces.
    pub on_brand_muted: Color,
    /// Primary text on brand-colored surfaces.
    pub on_brand: Color,
    /// Modal dimming overlay.
    pub overlay: Color,
    /// Window control dots, left to right.
    pub window_controls: [Color; 3],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::rgb(0xff, 0xff, 0xff),
            stroke: Color::rgb(0x21, 0x21, 0x21),
            text: Color::rgb(0x00, 0x00, 0x00),
            brand: Color::rgb(0x4f, 0x46, 0xe5),
            success: Color::rgb(0x10, 0xb9, 0x81),
            danger: Color::rgb(0xf4, 0x3f, 0x5e),
            warning: Color::rgb(0xf5, 0x9e, 0x0b),
            muted: Color::rgb(0xf3, 0xf4, 0xf6),
            border: Color::rgb(0xe5, 0xe7, 0xeb),
            input_border: Color::rgb(0xd1, 0xd5, 0xdb),
            placeholder: Color::rgb(0x9c, 0xa3, 0xaf),
            label: Color::rgb(0x6b, 0x72, 0x80),
            nav_text: Color::rgb(0x4b, 0x55, 0x63),
            on_brand_muted: Color::rgb(0xe0, 0xe7, 0xff),
            on_brand: Color::rgb(0xff, 0xff, 0xff),
            overlay: Color::rgb(0x00, 0x00, 0x00),
            window_controls: [
                Color::rgb(0xff, 0x5f, 0x56),
                Color::rgb(0xff, 0xbd, 0x2e),
                Color::rgb(0x27, 0xc9, 0x3f),
            ],
        }
    }
}

impl Palette {
    /// Returns the named palette entry for overriding, or `None` for an
    /// unknown name. Window controls are fixed and not addressable.
    pub fn color_mut(&mut self, name: &str) -> Option<&mut Color> {
        let slot = match name {
            "background" => &mut self.background,
            "stroke" => &mut self.stroke,
            "text" => &mut self.text,
            "brand" => &mut self.brand,
            "success" => &mut self.success,
            "danger" => &mut self.danger,
            "warning" => &mut self.warning,
            "muted" => &mut self.muted,
            "border" => &mut self.border,
            "input_border" => &mut self.input_border,
            "placeholder" => &mut self.placeholder,
            "label" => &mut self.label,
            "nav_text" => &mut self.nav_text,
            "on_brand_muted" => &mut self.on_brand_muted,
            "on_brand" => &mut self.on_brand,
            "overlay" => &mut self.overlay,
            _ => return None,
        };
        Some(slot)
    }
}

/// Visual theme: palette plus the font family used for every label.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Theme {
    pub palette: Palette,
    pub font_family: FontFamily,
}

impl Theme {
    /// Creates a theme from a palette with the default font family.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            font_family: FontFamily::default(),
        }
    }

    /// Returns the theme with a different font family.
    pub fn with_font_family(mut self, font_family: FontFamily) -> Self {
        self.font_family = font_family;
        self
    }
}
