//! Data models for Fokal.

pub mod color;
pub mod geo;
pub mod photo;

pub use color::{DominantColor, Rgb};
pub use geo::GeoPoint;
pub use photo::{Photo, PhotoBuilder, PhotoId};
