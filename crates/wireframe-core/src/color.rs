//! Color handling for wireframe drawings
//!
//! This module provides the [`Color`] type. Colors are parsed with the
//! `color` crate, so any CSS color string is accepted on input, and are
//! stored as 8-bit sRGBA so they serialise to the hex notation the
//! diagramming tool expects.

use std::{fmt, str::FromStr};

use color::{DynamicColor, Srgb};
use serde::{Serialize, Serializer};

/// An 8-bit sRGBA color.
///
/// Fully transparent colors display as `transparent`, opaque ones as
/// `#rrggbb`, everything else as `#rrggbbaa`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    rgba: [u8; 4],
}

impl Color {
    /// The fully transparent color.
    pub const TRANSPARENT: Color = Color { rgba: [0, 0, 0, 0] };

    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use wireframe_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// assert_eq!(red.to_string(), "#ff0000");
    /// assert_eq!(blue.to_string(), "#0000ff");
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => {
                let rgba = color.to_alpha_color::<Srgb>().to_rgba8();
                Ok(Self {
                    rgba: [rgba.r, rgba.g, rgba.b, rgba.a],
                })
            }
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Creates an opaque color from its red, green and blue channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            rgba: [r, g, b, 0xff],
        }
    }

    /// Creates a new color with the specified alpha channel.
    pub const fn with_alpha(self, alpha: u8) -> Self {
        let [r, g, b, _] = self.rgba;
        Self {
            rgba: [r, g, b, alpha],
        }
    }

    /// Returns the alpha channel (0 = fully transparent, 255 = opaque).
    pub fn alpha(self) -> u8 {
        self.rgba[3]
    }

    /// Returns true if the color is fully transparent.
    pub fn is_transparent(self) -> bool {
        self.alpha() == 0
    }

    /// Returns the opaque `#rrggbb` part of the color, ignoring alpha.
    pub fn to_hex_rgb(self) -> String {
        let [r, g, b, _] = self.rgba;
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.alpha() {
            0 => f.write_str("transparent"),
            0xff => f.write_str(&self.to_hex_rgb()),
            alpha => write!(f, "{}{alpha:02x}", self.to_hex_rgb()),
        }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({self})")
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
