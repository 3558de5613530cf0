//! Track-point extraction from GPX documents.
//!
//! Scans markup for `<trkpt lat=".." lon="..">` elements and collects their
//! coordinates in document order. Extraction is deliberately permissive:
//! malformed documents and unparsable attributes never surface an error,
//! they just contribute nothing.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::{debug, warn};

/// Tag name of the single element shape the extractor consumes.
const TRACK_POINT_TAG: &[u8] = b"trkpt";

/// Extracts (latitude, longitude) pairs from a GPX string.
///
/// Matches `trkpt` elements case-sensitively, in document order. A pair is
/// dropped when either attribute is missing or fails to parse as a decimal
/// number; everything else passes through unchanged, including values
/// outside typical geographic ranges.
///
/// Never fails. A document that cannot be parsed yields an empty vector,
/// even when track points appeared before the error.
pub fn extract_track_points(xml: &str) -> Vec<(f64, f64)> {
    let mut reader = Reader::from_str(xml);

    let mut points = Vec::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) if e.name().as_ref() == TRACK_POINT_TAG => {
                let lat = attr_f64(&e, "lat");
                let lon = attr_f64(&e, "lon");
                if !lat.is_nan() && !lon.is_nan() {
                    points.push((lat, lon));
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => {
                warn!("discarding track points, document failed to parse: {err}");
                return Vec::new();
            }
        }
    }

    debug!("extracted {} track points", points.len());
    points
}

/// Reads a named attribute as f64, yielding NaN when absent or unparsable.
fn attr_f64(element: &BytesStart, name: &str) -> f64 {
    match element.try_get_attribute(name) {
        Ok(Some(attr)) => match attr.unescape_value() {
            Ok(value) => value.trim().parse::<f64>().unwrap_or(f64::NAN),
            Err(_) => f64::NAN,
        },
        _ => f64::NAN,
    }
}
