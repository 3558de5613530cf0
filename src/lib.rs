//! gpx-polyline core
//!
//! Extracts track-point coordinates from GPX documents and encodes them
//! into the compact Google polyline string format.

pub mod gpx;
pub mod polyline;

pub use gpx::extract_track_points;
pub use polyline::Polyline;
