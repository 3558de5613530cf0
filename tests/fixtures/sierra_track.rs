//! A small Sierra Nevada track in GPX form.
//!
//! The three track points are the canonical polyline-format example
//! coordinates, so the expected encoding is the well-known reference
//! string that every interoperable encoder must reproduce.

/// A minimal but well-formed GPX document with three track points.
pub const SIERRA_GPX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="gpx-polyline-tests" xmlns="http://www.topografix.com/GPX/1/1">
  <trk>
    <name>Sierra sample</name>
    <trkseg>
      <trkpt lat="38.5" lon="-120.2">
        <ele>1203.0</ele>
      </trkpt>
      <trkpt lat="40.7" lon="-120.95">
        <ele>986.4</ele>
      </trkpt>
      <trkpt lat="43.252" lon="-126.453"/>
    </trkseg>
  </trk>
</gpx>"#;

/// Coordinates of [`SIERRA_GPX`] in document order.
pub const SIERRA_POINTS: &[(f64, f64)] =
    &[(38.5, -120.2), (40.7, -120.95), (43.252, -126.453)];

/// Reference polyline encoding of [`SIERRA_POINTS`].
pub const SIERRA_ENCODED: &str = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";

/// The same track with two corrupted points mixed in; a spec-conformant
/// extractor drops exactly those and keeps the rest in order.
pub const SIERRA_GPX_CORRUPTED: &str = r#"<gpx>
  <trk><trkseg>
    <trkpt lat="38.5" lon="-120.2"/>
    <trkpt lat="n/a" lon="-120.9"/>
    <trkpt lat="40.7" lon="-120.95"/>
    <trkpt lon="-126.0"/>
    <trkpt lat="43.252" lon="-126.453"/>
  </trkseg></trk>
</gpx>"#;
