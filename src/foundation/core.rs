use crate::foundation::error::{PolarError, PolarResult};

pub use kurbo::{BezPath, Point, Vec2};

/// Zero-based animation frame index.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

impl FrameIndex {
    /// Next index within a rotation of `frames` frames, wrapping to 0.
    pub fn next_wrapping(self, frames: u64) -> Self {
        if frames == 0 {
            return Self(0);
        }
        Self((self.0 + 1) % frames)
    }
}

/// Output surface size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Build a canvas, rejecting empty dimensions.
    pub fn new(width: u32, height: u32) -> PolarResult<Self> {
        if width == 0 || height == 0 {
            return Err(PolarError::validation("Canvas width and height must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Center of the canvas in pixel space.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    /// Half of the shorter side.
    pub fn inner_radius(self) -> f64 {
        f64::from(self.width.min(self.height)) / 2.0
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Rgba8Premul {
    /// Fully transparent black.
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Premultiply a straight-alpha color.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    /// Premultiply an opaque color by a fractional opacity in `[0, 1]`.
    pub fn from_rgb_alpha(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::from_straight_rgba(r, g, b, a)
    }

    /// Recover straight-alpha channels, as expected by color constructors.
    pub fn to_straight_rgba(self) -> [u8; 4] {
        if self.a == 0 {
            return [0, 0, 0, 0];
        }
        let unpremul = |c: u8| -> u8 {
            let v = (u32::from(c) * 255 + u32::from(self.a) / 2) / u32::from(self.a);
            v.min(255) as u8
        };
        [unpremul(self.r), unpremul(self.g), unpremul(self.b), self.a]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
