//! Piecewise-linear color interpolation over a distance field.
//!
//! Distances below the first stop take the first stop's color and
//! distances above the last stop take the last stop's color. NaN is
//! treated as below the first stop.

use image::{Rgb, RgbImage};

use crate::heatmap::{Color, Heatmap};
use crate::rendering::field::DistanceField;

/// Color of the heatmap at `distance`.
pub fn color_at(heatmap: &Heatmap, distance: f64) -> Color {
    let first = heatmap.first();
    let last = heatmap.last();

    if distance.is_nan() || distance <= first.position {
        return first.color;
    }
    if distance >= last.position {
        return last.color;
    }

    // first < distance < last, so 1 <= idx <= len - 1
    let stops = heatmap.stops();
    let idx = stops.partition_point(|s| s.position <= distance);
    let (start, end) = (&stops[idx - 1], &stops[idx]);

    let t = (distance - start.position) / (end.position - start.position);
    Color::new(
        lerp_channel(start.color.r, end.color.r, t),
        lerp_channel(start.color.g, end.color.g, t),
        lerp_channel(start.color.b, end.color.b, t),
    )
}

fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    let v = (1.0 - t) * f64::from(a) + t * f64::from(b);
    v.round().clamp(0.0, 255.0) as u8
}

/// Map every value of `field` through the heatmap.
pub fn interpolate(field: &DistanceField, heatmap: &Heatmap) -> RgbImage {
    log::debug!(
        "interpolating {}x{} field over {} stops",
        field.width(),
        field.height(),
        heatmap.len()
    );

    let mut image = RgbImage::new(field.width(), field.height());
    for (pixel, &distance) in image.pixels_mut().zip(field.values()) {
        *pixel = Rgb(color_at(heatmap, distance).channels());
    }
    image
}
