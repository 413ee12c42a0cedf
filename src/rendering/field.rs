//! Per-pixel distance fields, one pure function per gradient variant.
//!
//! Pixels are addressed by integer coordinates `(x, y)` with the origin at
//! the top-left corner. Every function validates its inputs before the
//! field buffer is allocated.

use std::f64::consts::{PI, TAU};

use crate::error::{Error, Result};

/// Scale applied to the image size to get the elliptical variant's diameters.
///
/// Values above 1.0 keep the corners below the last stop; 1.5 gives the
/// default spread.
pub const ELLIPSE_SPREAD: f64 = 1.5;

/// Dense row-major field of normalized distances, shape `(height, width)`.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceField {
    width: u32,
    height: u32,
    values: Vec<f64>,
}

impl DistanceField {
    /// Evaluate `f(x, y)` at every pixel coordinate.
    fn from_fn(width: u32, height: u32, f: impl Fn(f64, f64) -> f64) -> Self {
        let mut values = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                values.push(f(f64::from(x), f64::from(y)));
            }
        }
        Self { width, height, values }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, x: u32, y: u32) -> Option<f64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.values.get(y as usize * self.width as usize + x as usize).copied()
    }

    /// Smallest and largest value in the field.
    pub fn range(&self) -> (f64, f64) {
        self.values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }
}

/// Reject empty images and buffers that could not be addressed.
pub fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidGeometry(format!(
            "image dimensions must be positive, got {}x{}",
            width, height
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(3))
        .ok_or_else(|| Error::InvalidGeometry(format!("image {}x{} is too large", width, height)))?;
    Ok(())
}

fn check_finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidGeometry(format!("{} must be finite, got {}", name, value)))
    }
}

/// Center of the pixel grid, so that `(x, y)` and `(w-1-x, h-1-y)` are
/// equidistant from it.
fn grid_center(width: u32, height: u32) -> (f64, f64) {
    (f64::from(width - 1) / 2.0, f64::from(height - 1) / 2.0)
}

// sin/cos of multiples of 90 degrees are not exactly 0
fn snap(v: f64) -> f64 {
    if v.abs() < 1e-12 {
        0.0
    } else {
        v
    }
}

/// Angle-dependent correction of the linear gradient's span.
///
/// Angles in (0, 90] shrink the span towards 0.9; every other angle widens
/// it, up to 1.2 at 0 degrees.
pub fn extension_factor(angle: f64) -> f64 {
    if angle > 0.0 && angle <= 90.0 {
        1.0 - 0.1 * (angle / 90.0)
    } else {
        1.0 + 0.1 * ((180.0 - angle) / 90.0)
    }
}

/// Projection of each pixel onto the direction at `angle` degrees,
/// divided by `ceil(width * extension_factor(angle))`.
///
/// The result is not clamped; the interpolator handles values outside the
/// stop range.
pub fn linear(width: u32, height: u32, angle: f64) -> Result<DistanceField> {
    check_dimensions(width, height)?;
    check_finite("angle", angle)?;

    let span = (f64::from(width) * extension_factor(angle)).ceil();
    if span <= 0.0 {
        return Err(Error::InvalidGeometry(format!(
            "angle {} collapses the gradient span to {}",
            angle, span
        )));
    }

    let (sin, cos) = angle.to_radians().sin_cos();
    let (sin, cos) = (snap(sin), snap(cos));
    log::debug!("linear field: angle={} span={}", angle, span);

    Ok(DistanceField::from_fn(width, height, |x, y| (x * cos + y * sin) / span))
}

/// Euclidean distance from the image center over the half-diagonal.
pub fn radial(width: u32, height: u32) -> Result<DistanceField> {
    check_dimensions(width, height)?;

    let (cx, cy) = grid_center(width, height);
    let half_diagonal = cx.hypot(cy);
    if half_diagonal == 0.0 {
        // single pixel
        return Ok(DistanceField::from_fn(width, height, |_, _| 0.0));
    }

    Ok(DistanceField::from_fn(width, height, |x, y| (x - cx).hypot(y - cy) / half_diagonal))
}

/// Ellipse metric around the image center.
///
/// Horizontal and vertical offsets are normalized independently by half of
/// `spread * width` and `spread * height`, then combined with the Euclidean
/// norm.
pub fn elliptical(width: u32, height: u32, spread: f64) -> Result<DistanceField> {
    check_dimensions(width, height)?;
    check_finite("ellipse spread", spread)?;
    if spread <= 0.0 {
        return Err(Error::InvalidGeometry(format!("ellipse spread must be positive, got {}", spread)));
    }

    let (cx, cy) = grid_center(width, height);
    let rx = f64::from(width) * spread / 2.0;
    let ry = f64::from(height) * spread / 2.0;

    Ok(DistanceField::from_fn(width, height, |x, y| ((x - cx).abs() / rx).hypot((y - cy).abs() / ry)))
}

/// Angular distance between each pixel's bearing from `(center_x, center_y)`
/// and the rotation `angle` (degrees), wrapped to [-pi, pi] and divided by pi.
pub fn center_point(
    width: u32,
    height: u32,
    center_x: f64,
    center_y: f64,
    angle: f64,
) -> Result<DistanceField> {
    check_dimensions(width, height)?;
    check_finite("center_x", center_x)?;
    check_finite("center_y", center_y)?;
    check_finite("angle", angle)?;

    let rotation = angle.rem_euclid(360.0).to_radians();

    Ok(DistanceField::from_fn(width, height, |x, y| {
        let theta = (y - center_y).atan2(x - center_x);
        ((theta - rotation + PI).rem_euclid(TAU) - PI).abs() / PI
    }))
}
