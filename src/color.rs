//! Semantic colour table.
//!
//! Every stroke and fill in the renderer names one of these identifiers; the
//! table is the only place raw channel values appear.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// An RGBA colour with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Build from 8-bit channel values and a unit alpha.
    #[must_use]
    pub fn from_u8(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a,
        }
    }

    /// CSS `rgba(...)` notation, for backends that take colour strings.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "rgba({:.0}, {:.0}, {:.0}, {})",
            self.r * 255.0,
            self.g * 255.0,
            self.b * 255.0,
            self.a
        )
    }
}

/// The closed set of colours the panel uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colour {
    Orange1,
    Orange2,
    Orange3,
    Green1,
    Green2,
    Green3,
    Blue1,
    Blue2,
    Blue3,
    Purple1,
    Purple2,
    Purple3,
    Grey1,
    Grey2,
    Grey3,
    Grey4,
    Background,
    RecordRed,
    Transparent,
}

impl Colour {
    /// Fully opaque value (fully clear for [`Colour::Transparent`]).
    #[must_use]
    pub fn rgba(self) -> Rgba {
        self.with_alpha(1.0)
    }

    /// Value with `alpha` replacing the default opacity.
    ///
    /// `Transparent` ignores the override.
    #[must_use]
    pub fn with_alpha(self, alpha: f32) -> Rgba {
        let a = if alpha.is_nan() { 1.0 } else { alpha.clamp(0.0, 1.0) };
        let (r, g, b) = match self {
            Self::Orange1 => (255, 104, 0),
            Self::Orange2 => (178, 71, 0),
            Self::Orange3 => (89, 35, 0),
            Self::Green1 => (25, 255, 0),
            Self::Green2 => (17, 179, 0),
            Self::Green3 => (8, 89, 0),
            Self::Blue1 => (0, 153, 255),
            Self::Blue2 => (20, 73, 109),
            Self::Blue3 => (0, 53, 89),
            Self::Purple1 => (230, 0, 255),
            Self::Purple2 => (161, 0, 179),
            Self::Purple3 => (80, 0, 89),
            Self::Grey1 => (130, 130, 130),
            Self::Grey2 => (98, 98, 98),
            Self::Grey3 => (66, 66, 66),
            Self::Grey4 => (28, 28, 28),
            Self::RecordRed => (226, 0, 0),
            Self::Background => (40, 40, 40),
            Self::Transparent => return Rgba { r: 0.0, g: 0.0, b: 0.0, a: 0.0 },
        };
        Rgba::from_u8(r, g, b, a)
    }
}
