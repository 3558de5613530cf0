//! Polyline representation and encoding for track geometries.
//!
//! This module provides a type for working with polylines as decoded
//! coordinate sequences, plus encoding into the compact Google polyline
//! format (delta + zigzag + 5-bit variable-length chunks, 1e5 precision)
//! expected by mapping APIs.

use serde::{Deserialize, Serialize};

/// A polyline representing a track geometry as decoded coordinates.
///
/// Stores latitude/longitude points directly for internal processing;
/// [`encode`](Polyline::encode) produces the compact string form for
/// API boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    ///
    /// Each point is a (latitude, longitude) tuple.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Creates a Polyline from the track points of a GPX document.
    ///
    /// Extraction is permissive: malformed input yields an empty polyline.
    pub fn from_gpx(xml: &str) -> Self {
        Self::new(crate::gpx::extract_track_points(xml))
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }

    /// Returns the number of coordinate points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the polyline has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Encodes the polyline into the Google polyline string format.
    ///
    /// Coordinates are scaled to five decimal digits of fixed-point
    /// precision and each axis is delta-encoded against the previous
    /// point, so nearby consecutive points encode short. An empty
    /// polyline encodes to an empty string.
    ///
    /// Deltas use wrapping 32-bit arithmetic; coordinates far outside
    /// the representable fixed-point range wrap rather than fail,
    /// consistent with the reference algorithm.
    pub fn encode(&self) -> String {
        let mut prev_lat: i32 = 0;
        let mut prev_lon: i32 = 0;
        let mut encoded = String::new();

        for &(lat, lon) in &self.points {
            let lat_e5 = (lat * 1e5).round() as i32;
            let lon_e5 = (lon * 1e5).round() as i32;

            encode_value(lat_e5.wrapping_sub(prev_lat), &mut encoded);
            encode_value(lon_e5.wrapping_sub(prev_lon), &mut encoded);

            prev_lat = lat_e5;
            prev_lon = lon_e5;
        }

        encoded
    }
}

/// Encodes one signed delta as zigzagged 5-bit chunks, low bits first,
/// with the continuation bit 0x20 on all but the last chunk and each
/// chunk offset by 63 into printable ASCII.
fn encode_value(value: i32, out: &mut String) {
    let mut v = if value < 0 {
        !((value as u32) << 1)
    } else {
        (value as u32) << 1
    };

    while v >= 0x20 {
        out.push((((0x20 | (v & 0x1f)) + 63) as u8) as char);
        v >>= 5;
    }
    out.push(((v + 63) as u8) as char);
}
