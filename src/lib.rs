//! Gradientkit
//!
//! Renders 2D gradient images from a heatmap (an ordered sequence of
//! position/color stops) and variant-specific geometry.
//!
//! # Variants
//!
//! - **Linear**: projection onto a direction given in degrees
//! - **Radial**: distance from the image center
//! - **Elliptical**: axis-normalized distance from the image center
//! - **CenterPoint**: angular sweep around an arbitrary point
//!
//! Each variant produces a [`DistanceField`](rendering::DistanceField) which
//! is mapped through the heatmap by the shared interpolator.
//!
//! # Example
//!
//! ```no_run
//! use gradientkit::{GradientRequest, Heatmap};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let heatmap = Heatmap::from_pairs(&[
//!     (0.0, (255, 0, 0)),
//!     (0.5, (0, 255, 0)),
//!     (1.0, (0, 0, 255)),
//! ])?;
//!
//! GradientRequest::linear(500, 250, heatmap, "gradient_linear.png", 20.0).render()?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use image::RgbImage;

pub mod error;
pub use error::{Error, Result};

pub mod heatmap;
pub use heatmap::{Color, ColorStop, Heatmap};

pub mod logging;
pub mod rendering;

use rendering::{field, DistanceField, ELLIPSE_SPREAD};

/// Shape-specific parameters of a gradient
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    /// Gradient axis rotated by `angle` degrees
    Linear { angle: f64 },
    /// Concentric circles around the image center
    Radial,
    /// Ellipse metric around the image center.
    ///
    /// The axis lengths must be positive; the ellipse's spread is set by
    /// [`ELLIPSE_SPREAD`] relative to the image size.
    Elliptical { major_axis: f64, minor_axis: f64 },
    /// Sweep around `(center_x, center_y)`, starting at `angle` degrees
    CenterPoint { center_x: f64, center_y: f64, angle: f64 },
}

impl Geometry {
    pub fn name(&self) -> &'static str {
        match self {
            Geometry::Linear { .. } => "linear",
            Geometry::Radial => "radial",
            Geometry::Elliptical { .. } => "elliptical",
            Geometry::CenterPoint { .. } => "center-point",
        }
    }

    /// Compute this variant's distance field for a `width` x `height` image.
    pub fn distance_field(&self, width: u32, height: u32) -> Result<DistanceField> {
        match *self {
            Geometry::Linear { angle } => field::linear(width, height, angle),
            Geometry::Radial => field::radial(width, height),
            Geometry::Elliptical { major_axis, minor_axis } => {
                for (name, axis) in [("major_axis", major_axis), ("minor_axis", minor_axis)] {
                    if !axis.is_finite() || axis <= 0.0 {
                        return Err(Error::InvalidGeometry(format!(
                            "{} must be positive and finite, got {}",
                            name, axis
                        )));
                    }
                }
                field::elliptical(width, height, ELLIPSE_SPREAD)
            }
            Geometry::CenterPoint { center_x, center_y, angle } => {
                field::center_point(width, height, center_x, center_y, angle)
            }
        }
    }
}

/// Render a gradient into an in-memory RGB image.
pub fn render_image(
    width: u32,
    height: u32,
    heatmap: &Heatmap,
    geometry: &Geometry,
) -> Result<RgbImage> {
    let field = geometry.distance_field(width, height)?;
    let (lo, hi) = field.range();
    log::debug!("{} field {}x{}: range [{}, {}]", geometry.name(), width, height, lo, hi);
    Ok(rendering::interpolate(&field, heatmap))
}

/// A single gradient render: size, heatmap, output path and geometry
///
/// Requests are immutable; rendering never modifies them.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientRequest {
    pub width: u32,
    pub height: u32,
    pub heatmap: Heatmap,
    pub path: PathBuf,
    pub geometry: Geometry,
}

impl GradientRequest {
    pub fn new(
        width: u32,
        height: u32,
        heatmap: Heatmap,
        path: impl AsRef<Path>,
        geometry: Geometry,
    ) -> Self {
        Self { width, height, heatmap, path: path.as_ref().to_path_buf(), geometry }
    }

    pub fn linear(width: u32, height: u32, heatmap: Heatmap, path: impl AsRef<Path>, angle: f64) -> Self {
        Self::new(width, height, heatmap, path, Geometry::Linear { angle })
    }

    pub fn radial(width: u32, height: u32, heatmap: Heatmap, path: impl AsRef<Path>) -> Self {
        Self::new(width, height, heatmap, path, Geometry::Radial)
    }

    pub fn elliptical(
        width: u32,
        height: u32,
        heatmap: Heatmap,
        path: impl AsRef<Path>,
        major_axis: f64,
        minor_axis: f64,
    ) -> Self {
        Self::new(width, height, heatmap, path, Geometry::Elliptical { major_axis, minor_axis })
    }

    pub fn center_point(
        width: u32,
        height: u32,
        heatmap: Heatmap,
        path: impl AsRef<Path>,
        center_x: f64,
        center_y: f64,
        angle: f64,
    ) -> Self {
        Self::new(width, height, heatmap, path, Geometry::CenterPoint { center_x, center_y, angle })
    }

    /// Render into memory without touching the output path.
    pub fn render_image(&self) -> Result<RgbImage> {
        render_image(self.width, self.height, &self.heatmap, &self.geometry)
    }

    /// Render and encode as PNG bytes.
    pub fn render_png(&self) -> Result<Vec<u8>> {
        rendering::encode_png(&self.render_image()?)
    }

    /// Render and write to `self.path`, format inferred from its extension.
    pub fn render(&self) -> Result<()> {
        // fail on a bad extension before computing anything
        rendering::raster::format_for_path(&self.path)?;
        let image = self.render_image()?;
        rendering::write_image(&image, &self.path)
    }
}
