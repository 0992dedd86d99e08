//! Degrees/minutes/seconds coordinate model.
//!
//! Conversions truncate at every step (no rounding), so a decimal → DMS → decimal
//! round trip loses up to one arc-second. Displacement uses a flat
//! 111 km per degree of latitude.

use serde::Serialize;
use std::fmt;

/// Mean length of one degree of latitude, in kilometers.
pub const KM_PER_DEGREE_LATITUDE: f64 = 111.0;

/// One arc-second expressed in decimal degrees.
pub const ARC_SECOND: f64 = 1.0 / 3600.0;

/// Slack added before each floor so a whole unit stored as `12.999…` stays 13.
const FLOOR_EPSILON: f64 = 1e-9;

/// Which axis a coordinate belongs to; only decides the hemisphere letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    pub fn hemisphere(self, is_negative: bool) -> char {
        match (self, is_negative) {
            (Self::Latitude, false) => 'N',
            (Self::Latitude, true) => 'S',
            (Self::Longitude, false) => 'E',
            (Self::Longitude, true) => 'W',
        }
    }
}

/// A single axis value in DMS form. The sign lives only in `is_negative`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Coordinate {
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub is_negative: bool,
}

impl Coordinate {
    pub fn new(degrees: u32, minutes: u32, seconds: u32, is_negative: bool) -> Self {
        Self { degrees, minutes, seconds, is_negative }
    }

    /// Render with the hemisphere letter for `axis`, e.g. `35° 41'22" N`.
    pub fn with_hemisphere(&self, axis: Axis) -> String {
        format(self, axis)
    }
}

/// Sign-less legacy rendering: `35° 41'22"`.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}° {}'{}\"", self.degrees, self.minutes, self.seconds)
    }
}

/// A latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GeoPosition {
    pub latitude: Coordinate,
    pub longitude: Coordinate,
}

impl GeoPosition {
    pub fn from_decimal(lat: f64, lon: f64) -> Self {
        Self {
            latitude: decimal_to_dms(lat),
            longitude: decimal_to_dms(lon),
        }
    }
}

impl fmt::Display for GeoPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}",
            format(&self.latitude, Axis::Latitude),
            format(&self.longitude, Axis::Longitude)
        )
    }
}

// ─── Conversions ────────────────────────────────────────────────

fn truncate(x: f64) -> f64 {
    (x + FLOOR_EPSILON).floor().max(0.0)
}

pub fn decimal_to_dms(value: f64) -> Coordinate {
    let is_negative = value < 0.0;
    let absolute = value.abs();

    let degrees = truncate(absolute);
    let minutes_decimal = ((absolute - degrees) * 60.0).max(0.0);
    let minutes = truncate(minutes_decimal);
    let seconds = truncate((minutes_decimal - minutes) * 60.0);

    Coordinate {
        degrees: degrees as u32,
        // float rounding can land exactly on 60 at the top of the range
        minutes: (minutes as u32).min(59),
        seconds: (seconds as u32).min(59),
        is_negative,
    }
}

pub fn dms_to_decimal(coord: &Coordinate) -> f64 {
    let magnitude =
        coord.degrees as f64 + coord.minutes as f64 / 60.0 + coord.seconds as f64 / 3600.0;
    if coord.is_negative {
        -magnitude
    } else {
        magnitude
    }
}

pub fn format(coord: &Coordinate, axis: Axis) -> String {
    format!(
        "{}° {}'{}\" {}",
        coord.degrees,
        coord.minutes,
        coord.seconds,
        axis.hemisphere(coord.is_negative)
    )
}

// ─── Displacement ───────────────────────────────────────────────

/// Cardinal direction for latitude displacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    North,
    South,
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::North => write!(f, "north"),
            Self::South => write!(f, "south"),
        }
    }
}

/// Move `distance_km` along `heading`. Longitude is copied as-is.
pub fn displace(pos: &GeoPosition, heading: Heading, distance_km: f64) -> GeoPosition {
    let lat = dms_to_decimal(&pos.latitude);
    let change = distance_km / KM_PER_DEGREE_LATITUDE;
    let new_lat = match heading {
        Heading::North => lat + change,
        Heading::South => lat - change,
    };
    GeoPosition {
        latitude: decimal_to_dms(new_lat),
        longitude: pos.longitude,
    }
}

pub fn move_north(pos: &GeoPosition, distance_km: f64) -> GeoPosition {
    displace(pos, Heading::North, distance_km)
}

pub fn move_south(pos: &GeoPosition, distance_km: f64) -> GeoPosition {
    displace(pos, Heading::South, distance_km)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    // Truncation loss plus a little float slack.
    const TOLERANCE: f64 = ARC_SECOND + 1e-9;

    #[rstest]
    #[case(35.6895, Coordinate::new(35, 41, 22, false))]
    #[case(139.6917, Coordinate::new(139, 41, 30, false))]
    #[case(-33.8688, Coordinate::new(33, 52, 7, true))]
    #[case(0.5, Coordinate::new(0, 30, 0, false))]
    #[case(-0.25, Coordinate::new(0, 15, 0, true))]
    fn test_decimal_to_dms(#[case] input: f64, #[case] expected: Coordinate) {
        assert_eq!(decimal_to_dms(input), expected);
    }

    #[test]
    fn test_zero_is_not_negative() {
        assert_eq!(decimal_to_dms(0.0), Coordinate::new(0, 0, 0, false));
    }

    #[test]
    fn test_truncates_instead_of_rounding() {
        // 10.99999° is 10° 59' 59.964" — seconds must floor to 59, not carry over.
        assert_eq!(decimal_to_dms(10.99999), Coordinate::new(10, 59, 59, false));
    }

    #[test]
    fn test_dms_to_decimal() {
        assert_abs_diff_eq!(dms_to_decimal(&Coordinate::new(1, 30, 0, false)), 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(dms_to_decimal(&Coordinate::new(0, 0, 36, true)), -0.01, epsilon = 1e-12);
    }

    #[test]
    fn test_round_trip_within_one_arc_second() {
        let mut v = -180.0;
        while v <= 180.0 {
            let back = dms_to_decimal(&decimal_to_dms(v));
            assert!((back - v).abs() <= TOLERANCE, "{} came back as {}", v, back);
            v += 0.0137;
        }
    }

    #[test]
    fn test_sign_and_bounds() {
        let mut v = -180.0;
        while v <= 180.0 {
            let c = decimal_to_dms(v);
            assert!(c.minutes <= 59 && c.seconds <= 59, "{} gave {:?}", v, c);
            if v < 0.0 {
                assert!(c.is_negative);
            }
            v += 0.0071;
        }
    }

    #[test]
    fn test_format_hemispheres() {
        assert_eq!(format(&Coordinate::new(35, 41, 22, false), Axis::Latitude), "35° 41'22\" N");
        assert_eq!(format(&Coordinate::new(139, 41, 30, true), Axis::Longitude), "139° 41'30\" W");
        assert_eq!(format(&Coordinate::new(12, 0, 5, true), Axis::Latitude), "12° 0'5\" S");
        assert_eq!(format(&Coordinate::new(3, 7, 0, false), Axis::Longitude), "3° 7'0\" E");
    }

    #[test]
    fn test_plain_display_has_no_hemisphere() {
        assert_eq!(Coordinate::new(35, 41, 22, true).to_string(), "35° 41'22\"");
    }

    #[test]
    fn test_position_display() {
        let pos = GeoPosition::from_decimal(35.6895, 139.6917);
        assert_eq!(pos.to_string(), "35° 41'22\" N, 139° 41'30\" E");
    }

    /// Whole-second coordinates across both hemispheres.
    fn whole_second_grid() -> impl Iterator<Item = Coordinate> {
        [0u32, 1, 10, 35, 89].into_iter().flat_map(|d| {
            (0..60).flat_map(move |m| {
                (0..60).step_by(7).flat_map(move |s| {
                    [false, true].into_iter().map(move |neg| Coordinate::new(d, m, s, neg))
                })
            })
        })
        // -0.0 is not negative, so a signed zero cannot come back signed
        .filter(|c| !(c.is_negative && c.degrees == 0 && c.minutes == 0 && c.seconds == 0))
    }

    #[test]
    fn test_whole_seconds_round_trip_exactly() {
        for d in [0u32, 1, 10, 35, 89, 139, 179] {
            for m in 0..60 {
                for s in 0..60 {
                    let c = Coordinate::new(d, m, s, d % 2 == 1);
                    assert_eq!(decimal_to_dms(dms_to_decimal(&c)), c, "{}", c);
                }
            }
        }
    }

    #[test]
    fn test_zero_distance_is_identity() {
        for lat in whole_second_grid() {
            let lon = Coordinate::new(139 - lat.degrees, lat.seconds, lat.minutes, !lat.is_negative);
            let pos = GeoPosition { latitude: lat, longitude: lon };
            let moved = move_north(&pos, 0.0);
            assert_eq!(moved.longitude, pos.longitude);
            assert_eq!(moved.latitude, pos.latitude, "{}", pos);
            assert_eq!(move_south(&pos, 0.0), pos);
        }
    }

    #[test]
    fn test_longitude_survives_repeated_moves() {
        let mut pos = GeoPosition::from_decimal(0.0, 0.0);
        pos.longitude = Coordinate::new(0, 0, 13, false);
        for _ in 0..5 {
            pos = move_north(&pos, 0.0);
        }
        assert_eq!(format(&pos.longitude, Axis::Longitude), "0° 0'13\" E");
    }

    #[test]
    fn test_out_and_back() {
        let start = GeoPosition::from_decimal(35.0, 139.0);
        let back = move_south(&move_north(&start, 111.0), 111.0);
        assert_abs_diff_eq!(dms_to_decimal(&back.latitude), 35.0, epsilon = TOLERANCE);
    }

    #[test]
    fn test_out_and_back_sweep() {
        let distances = [0.3, 1.0, 12.7, 55.5, 111.0, 123.4];
        for lat in whole_second_grid() {
            let start = GeoPosition { latitude: lat, longitude: Coordinate::new(10, 0, 0, true) };
            let expected = dms_to_decimal(&lat);
            for d in distances {
                let back = move_south(&move_north(&start, d), d);
                let err = (dms_to_decimal(&back.latitude) - expected).abs();
                assert!(err <= TOLERANCE, "{} by {} km came back {} arcsec off", start, d, err * 3600.0);
                assert_eq!(back.longitude, start.longitude);
            }
        }
    }

    #[test]
    fn test_one_degree_north() {
        let pos = GeoPosition::from_decimal(0.0, 0.0);
        let moved = move_north(&pos, 111.0);
        assert_abs_diff_eq!(dms_to_decimal(&moved.latitude), 1.0, epsilon = TOLERANCE);
        assert_eq!(moved.longitude, pos.longitude);
    }

    #[test]
    fn test_large_displacement() {
        let moved = move_north(&GeoPosition::from_decimal(0.0, 0.0), 555.0);
        assert_abs_diff_eq!(dms_to_decimal(&moved.latitude), 5.0, epsilon = TOLERANCE);
    }

    #[test]
    fn test_south_crosses_equator() {
        let moved = move_south(&GeoPosition::from_decimal(0.5, 10.0), 111.0);
        assert!(moved.latitude.is_negative);
        assert_eq!(format(&moved.latitude, Axis::Latitude), "0° 30'0\" S");
    }
}
