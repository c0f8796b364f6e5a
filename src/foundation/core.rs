use crate::foundation::error::{StoryError, StoryResult};

pub use kurbo::{BezPath, Point, Vec2};

/// Logical drawing surface size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Surface width in logical units.
    pub width: u32,
    /// Surface height in logical units.
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 960,
            height: 500,
        }
    }
}

impl Canvas {
    /// Reject zero-sized surfaces.
    pub fn validate(self) -> StoryResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(StoryError::validation("canvas width and height must be > 0"));
        }
        Ok(())
    }

    /// Width as `f64`.
    pub fn w(self) -> f64 {
        f64::from(self.width)
    }

    /// Height as `f64`.
    pub fn h(self) -> f64 {
        f64::from(self.height)
    }
}

/// Opaque sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// CSS `black`.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// CSS `steelblue`.
    pub const STEELBLUE: Self = Self::rgb(70, 130, 180);
    /// CSS `lightgray`.
    pub const LIGHTGRAY: Self = Self::rgb(211, 211, 211);
    /// CSS `red`.
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// CSS `blue`.
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    /// CSS `orange`.
    pub const ORANGE: Self = Self::rgb(255, 165, 0);

    /// Build a color from channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` form used by the SVG writer.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Monotonic scene-selection counter.
///
/// Every scene change bumps the generation; background work tagged with an older generation is
/// stale and must not touch the surface.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation following `self`.
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
