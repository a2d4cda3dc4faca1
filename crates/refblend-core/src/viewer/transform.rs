//! Pure transform math for the image viewer.
//!
//! Every function here takes its inputs by value and returns a new value.
//! Degenerate inputs (zero or non-finite sizes, zero scale) never produce
//! NaN: the functions either return `None` or hand back the input unchanged.

use crate::consts::PAN_TOLERANCE;

use super::geometry::{ImageDimensions, Point, ScaleLimits, Transform, ViewportBounds};

/// Scale the image down (never up) so it fits the viewport, and centre it.
///
/// Returns `None` until both sizes are usable.
pub fn compute_fit_transform(
    image: ImageDimensions,
    viewport: ViewportBounds,
) -> Option<Transform> {
    if !image.is_usable() || !viewport.is_usable() {
        return None;
    }

    let scale_x = viewport.width / image.width;
    let scale_y = viewport.height / image.height;
    let scale = scale_x.min(scale_y).min(1.0);

    Some(Transform {
        x: (viewport.width - image.width * scale) / 2.0,
        y: (viewport.height - image.height * scale) / 2.0,
        scale,
    })
}

/// Constrain a position so the image cannot leave the viewport.
///
/// Per axis: an image no larger than the viewport is centred; a larger one
/// is clamped into `[viewport - scaled, 0]` so no gap opens at either edge.
pub fn clamp_position(
    position: Point,
    scale: f32,
    image: ImageDimensions,
    viewport: ViewportBounds,
) -> Point {
    if !image.is_usable() || !viewport.is_usable() || !scale.is_finite() {
        return position;
    }

    let scaled = image.scaled(scale);
    Point {
        x: clamp_axis(position.x, scaled.width, viewport.width),
        y: clamp_axis(position.y, scaled.height, viewport.height),
    }
}

fn clamp_axis(position: f32, scaled: f32, viewport: f32) -> f32 {
    if scaled <= viewport {
        (viewport - scaled) / 2.0
    } else if position.is_finite() {
        position.clamp(viewport - scaled, 0.0)
    } else {
        (viewport - scaled) / 2.0
    }
}

/// Whether the scaled image overflows the viewport by more than
/// [`PAN_TOLERANCE`] on at least one axis.
pub fn is_pannable(scale: f32, image: ImageDimensions, viewport: ViewportBounds) -> bool {
    if !image.is_usable() || !viewport.is_usable() {
        return false;
    }
    let scaled = image.scaled(scale);
    scaled.width > viewport.width + PAN_TOLERANCE || scaled.height > viewport.height + PAN_TOLERANCE
}

/// Zoom by `factor` keeping `focal` (viewport space) visually fixed.
///
/// `focal` defaults to the viewport centre. The new scale is clamped into
/// `limits` and the resulting position passed through [`clamp_position`].
pub fn zoom_at(
    current: Transform,
    factor: f32,
    focal: Option<Point>,
    image: ImageDimensions,
    viewport: ViewportBounds,
    limits: ScaleLimits,
) -> Transform {
    if !image.is_usable() || !viewport.is_usable() || !factor.is_finite() || factor <= 0.0 {
        return current;
    }

    let focal = focal.filter(Point::is_finite).unwrap_or_else(|| viewport.center());
    let image_point = match current.invert(focal) {
        Some(p) => p,
        None => return current,
    };

    let new_scale = limits.clamp(current.scale * factor);
    let new_position = focal - image_point * new_scale;

    Transform {
        scale: new_scale,
        ..current.with_position(clamp_position(new_position, new_scale, image, viewport))
    }
}

/// Move the image by `delta`, clamped.
///
/// When the image is not pannable the delta is ignored and both axes are
/// forced to their centring values, including one that overflows by less
/// than [`PAN_TOLERANCE`].
pub fn pan_by(
    current: Transform,
    delta: Point,
    image: ImageDimensions,
    viewport: ViewportBounds,
) -> Transform {
    if !image.is_usable() || !viewport.is_usable() {
        return current;
    }

    if !is_pannable(current.scale, image, viewport) {
        let scaled = image.scaled(current.scale);
        return current.with_position(Point {
            x: (viewport.width - scaled.width) / 2.0,
            y: (viewport.height - scaled.height) / 2.0,
        });
    }

    let target = if delta.is_finite() {
        current.position() + delta
    } else {
        current.position()
    };

    current.with_position(clamp_position(target, current.scale, image, viewport))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewer::geometry::Size;

    #[test]
    fn test_clamp_axis_centres_small_image() {
        assert_eq!(clamp_axis(-300.0, 200.0, 800.0), 300.0);
    }

    #[test]
    fn test_clamp_axis_nan_position_recentres() {
        assert_eq!(clamp_axis(f32::NAN, 1000.0, 800.0), -100.0);
    }

    #[test]
    fn test_pannable_tolerance_boundary() {
        let image = Size::new(800.5, 600.0);
        let viewport = Size::new(800.0, 600.0);
        assert!(!is_pannable(1.0, image, viewport));
        assert!(is_pannable(1.0, Size::new(801.5, 600.0), viewport));
    }
}
