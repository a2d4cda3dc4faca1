use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_SCALE, MIN_SCALE};

/// A point or offset in viewport space (pixels, origin at the top-left).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point {
    type Output = Point;
    fn mul(self, rhs: f32) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Point {
    type Output = Point;
    fn div(self, rhs: f32) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

/// Width and height in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Both sides are finite and strictly positive, so dividing by them is safe.
    pub fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn scaled(&self, scale: f32) -> Size {
        Size::new(self.width * scale, self.height * scale)
    }
}

/// Natural pixel size of the image being viewed.
pub type ImageDimensions = Size;

/// On-screen rectangle available for displaying the image.
pub type ViewportBounds = Size;

/// Image-to-viewport map: `viewport = image * scale + (x, y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    pub fn new(x: f32, y: f32, scale: f32) -> Self {
        Self { x, y, scale }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn with_position(self, position: Point) -> Self {
        Self {
            x: position.x,
            y: position.y,
            ..self
        }
    }

    /// Image-space point to viewport space.
    pub fn apply(&self, image_point: Point) -> Point {
        image_point * self.scale + self.position()
    }

    /// Viewport-space point back to image space. `None` for a degenerate scale.
    pub fn invert(&self, viewport_point: Point) -> Option<Point> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return None;
        }
        Some((viewport_point - self.position()) / self.scale)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.scale.is_finite()
    }
}

/// Allowed zoom range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScaleLimits {
    pub min: f32,
    pub max: f32,
}

impl Default for ScaleLimits {
    fn default() -> Self {
        Self {
            min: MIN_SCALE,
            max: MAX_SCALE,
        }
    }
}

impl ScaleLimits {
    /// Invalid limits fall back to the defaults rather than panicking.
    pub fn clamp(&self, scale: f32) -> f32 {
        let limits = if self.is_valid() {
            *self
        } else {
            Self::default()
        };
        scale.clamp(limits.min, limits.max)
    }

    /// `min` and `max` are positive and ordered.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min > 0.0 && self.min <= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_invert_inverse() {
        let t = Transform::new(30.0, -12.5, 2.5);
        let p = Point::new(17.0, 4.0);
        let back = t.invert(t.apply(p)).unwrap();
        assert!((back.x - p.x).abs() < 1e-4);
        assert!((back.y - p.y).abs() < 1e-4);
    }

    #[test]
    fn test_invert_zero_scale() {
        assert!(Transform::new(0.0, 0.0, 0.0).invert(Point::ZERO).is_none());
    }

    #[test]
    fn test_size_usable() {
        assert!(Size::new(1.0, 1.0).is_usable());
        assert!(!Size::new(0.0, 10.0).is_usable());
        assert!(!Size::new(10.0, f32::NAN).is_usable());
        assert!(!Size::new(-5.0, 10.0).is_usable());
    }

    #[test]
    fn test_scale_limits_invalid_falls_back() {
        let inverted = ScaleLimits { min: 3.0, max: 1.0 };
        assert_eq!(inverted.clamp(0.01), MIN_SCALE);
        assert_eq!(inverted.clamp(100.0), MAX_SCALE);
    }
}
