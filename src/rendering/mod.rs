//! Rendering pipeline: distance field, interpolation, encoding

pub mod field;
pub mod interpolate;
pub mod raster;

pub use field::{DistanceField, ELLIPSE_SPREAD};
pub use interpolate::{color_at, interpolate};
pub use raster::{encode_png, pixel_digest, write_image};
