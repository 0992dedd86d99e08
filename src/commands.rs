//! Ship commands: position reports, sailing north/south, and the flavor tables.
//!
//! A missing position is not an error here: the command says the coordinates
//! are unknown and skips everything that needs them.

use clap::Subcommand;
use serde::Serialize;
use std::io::Write;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::coordinate::{self, Axis, Coordinate, GeoPosition, Heading};
use crate::location::{LocationError, LocationResolver, LocationSource};
use crate::ship::{areas::AREAS, cannons::CANNONS, docks::DOCKS, garden::GARDEN, ShipRecord, ShipTable};

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Report the ship's current position.
    Locate,
    /// Sail north by a distance in kilometers.
    North {
        #[arg(value_parser = parse_distance)]
        km: f64,
    },
    /// Sail south by a distance in kilometers.
    South {
        #[arg(value_parser = parse_distance)]
        km: f64,
    },
    /// Convert decimal degrees to degrees/minutes/seconds.
    Convert {
        #[arg(allow_hyphen_values = true, value_parser = parse_decimal)]
        decimal: f64,
    },
    /// Launch a vehicle from the Soldier Dock System (channel number or name).
    Dock { query: String },
    /// List every dock channel.
    Docks,
    /// Visit the garden. Lists everything when no item is given.
    Garden { query: Option<String> },
    /// Fire a cannon. Defaults to the Gaon Cannon.
    Fire { query: Option<String> },
    /// Try to enter a restricted area.
    Area { query: String },
}

/// Distance in kilometers: finite and not negative.
pub fn parse_distance(s: &str) -> Result<f64, String> {
    let km: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number of kilometers", s))?;
    if !km.is_finite() {
        return Err(format!("'{}' is not a finite distance", s));
    }
    if km < 0.0 {
        return Err(format!("Distance cannot be negative ({} km). Sail the other way instead.", km));
    }
    Ok(km)
}

/// Decimal degrees in -180..=180.
pub fn parse_decimal(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a decimal degree value", s))?;
    if !(-180.0..=180.0).contains(&value) {
        return Err(format!("{} is outside -180..180", value));
    }
    Ok(value)
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("no {table} matches '{query}'")]
    UnknownRecord { table: &'static str, query: String },
    #[error("could not write output: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// How a command finished.
#[derive(Debug)]
pub enum Outcome {
    Completed,
    /// The position was needed but unavailable; dependent work was skipped.
    CoordinatesUnknown(LocationError),
}

/// Output mode for position reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Text,
    Json,
}

// ─── Reports ────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct AxisReport {
    dms: Coordinate,
    decimal: f64,
    formatted: String,
}

impl AxisReport {
    fn new(coord: Coordinate, axis: Axis) -> Self {
        Self {
            dms: coord,
            decimal: coordinate::dms_to_decimal(&coord),
            formatted: coordinate::format(&coord, axis),
        }
    }
}

#[derive(Debug, Serialize)]
struct PositionReport {
    latitude: AxisReport,
    longitude: AxisReport,
}

impl From<&GeoPosition> for PositionReport {
    fn from(pos: &GeoPosition) -> Self {
        Self {
            latitude: AxisReport::new(pos.latitude, Axis::Latitude),
            longitude: AxisReport::new(pos.longitude, Axis::Longitude),
        }
    }
}

#[derive(Debug, Serialize)]
struct FixReport {
    source: LocationSource,
    position: PositionReport,
}

#[derive(Debug, Serialize)]
struct VoyageReport {
    source: LocationSource,
    heading: String,
    distance_km: f64,
    from: PositionReport,
    to: PositionReport,
}

#[derive(Debug, Serialize)]
struct ConversionReport {
    decimal: f64,
    dms: Coordinate,
    plain: String,
    as_latitude: String,
    as_longitude: String,
}

#[derive(Debug, Serialize)]
struct UnknownReport {
    status: &'static str,
    reason: String,
}

// ─── Execution ──────────────────────────────────────────────────

pub async fn run(
    command: &Command,
    resolver: &LocationResolver,
    format: Format,
    out: &mut impl Write,
) -> Result<Outcome, CommandError> {
    debug!(?command, ?format, "running command");
    match command {
        Command::Locate => locate(resolver, format, out).await,
        Command::North { km } => sail(resolver, Heading::North, *km, format, out).await,
        Command::South { km } => sail(resolver, Heading::South, *km, format, out).await,
        Command::Convert { decimal } => convert(*decimal, format, out),
        Command::Dock { query } => show(&DOCKS, query, "🚢", out),
        Command::Docks => list(&DOCKS, out),
        Command::Garden { query: Some(q) } => show(&GARDEN, q, "🍊", out),
        Command::Garden { query: None } => list(&GARDEN, out),
        Command::Fire { query } => match query {
            Some(q) => show(&CANNONS, q, "💥", out),
            None => print_record(&CANNONS.records[0], "💥", out),
        },
        Command::Area { query } => show(&AREAS, query, "⛔", out),
    }
}

async fn locate(resolver: &LocationResolver, format: Format, out: &mut impl Write) -> Result<Outcome, CommandError> {
    let fix = match resolver.obtain_current_position().await {
        Ok(fix) => fix,
        Err(e) => return coordinates_unknown(e, format, out),
    };

    let report = FixReport {
        source: fix.source,
        position: PositionReport::from(&fix.position),
    };
    match format {
        Format::Json => writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?,
        Format::Text => {
            writeln!(out, "📍 Current position ({})", report.source)?;
            write_position(&report.position, out)?;
        }
    }
    Ok(Outcome::Completed)
}

async fn sail(
    resolver: &LocationResolver,
    heading: Heading,
    distance_km: f64,
    format: Format,
    out: &mut impl Write,
) -> Result<Outcome, CommandError> {
    let fix = match resolver.obtain_current_position().await {
        Ok(fix) => fix,
        Err(e) => return coordinates_unknown(e, format, out),
    };

    let moved = coordinate::displace(&fix.position, heading, distance_km);
    info!(%heading, distance_km, from = %fix.position, to = %moved, "sailed");

    let report = VoyageReport {
        source: fix.source,
        heading: heading.to_string(),
        distance_km,
        from: PositionReport::from(&fix.position),
        to: PositionReport::from(&moved),
    };
    match format {
        Format::Json => writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?,
        Format::Text => {
            writeln!(out, "⛵ Sailing {} {} km", report.heading, distance_km)?;
            writeln!(out, "  From: {}", fix.position)?;
            writeln!(out, "  To:   {}", moved)?;
        }
    }
    Ok(Outcome::Completed)
}

fn convert(decimal: f64, format: Format, out: &mut impl Write) -> Result<Outcome, CommandError> {
    let dms = coordinate::decimal_to_dms(decimal);
    let report = ConversionReport {
        decimal,
        dms,
        plain: dms.to_string(),
        as_latitude: coordinate::format(&dms, Axis::Latitude),
        as_longitude: coordinate::format(&dms, Axis::Longitude),
    };
    match format {
        Format::Json => writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?,
        Format::Text => {
            writeln!(out, "🧭 {} = {}", decimal, report.plain)?;
            writeln!(out, "  As latitude:  {}", report.as_latitude)?;
            writeln!(out, "  As longitude: {}", report.as_longitude)?;
        }
    }
    Ok(Outcome::Completed)
}

fn coordinates_unknown(error: LocationError, format: Format, out: &mut impl Write) -> Result<Outcome, CommandError> {
    warn!(%error, "position unavailable");
    match format {
        Format::Json => {
            let report = UnknownReport {
                status: "unknown",
                reason: error.to_string(),
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
        Format::Text => writeln!(out, "⚠️  Coordinates unknown: {}", error)?,
    }
    Ok(Outcome::CoordinatesUnknown(error))
}

fn write_position(report: &PositionReport, out: &mut impl Write) -> Result<(), CommandError> {
    writeln!(out, "  Latitude:  {} ({:.6})", report.latitude.formatted, report.latitude.decimal)?;
    writeln!(out, "  Longitude: {} ({:.6})", report.longitude.formatted, report.longitude.decimal)?;
    Ok(())
}

fn show(table: &ShipTable, query: &str, icon: &str, out: &mut impl Write) -> Result<Outcome, CommandError> {
    let record = table.lookup(query).ok_or_else(|| CommandError::UnknownRecord {
        table: table.name,
        query: query.to_string(),
    })?;
    print_record(record, icon, out)
}

fn print_record(record: &ShipRecord, icon: &str, out: &mut impl Write) -> Result<Outcome, CommandError> {
    writeln!(out, "{} {}", icon, record.title)?;
    writeln!(out, "  {}", record.description)?;
    writeln!(out, "  >> {}", record.launch_message)?;
    Ok(Outcome::Completed)
}

fn list(table: &ShipTable, out: &mut impl Write) -> Result<Outcome, CommandError> {
    for (i, record) in table.iter().enumerate() {
        writeln!(out, "  {}. {} [{}]", i, record.title, record.key)?;
    }
    Ok(Outcome::Completed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::{FixedProvider, UnavailableProvider};
    use std::sync::Arc;
    use std::time::Duration;

    fn fixed(lat: f64, lon: f64) -> LocationResolver {
        LocationResolver::new(Arc::new(FixedProvider::new(lat, lon)), Duration::from_secs(1))
    }

    fn unavailable() -> LocationResolver {
        LocationResolver::new(Arc::new(UnavailableProvider), Duration::from_secs(1))
    }

    async fn run_text(command: Command, resolver: &LocationResolver) -> (Outcome, String) {
        let mut buf = Vec::new();
        let outcome = run(&command, resolver, Format::Text, &mut buf).await.unwrap();
        (outcome, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_parse_distance() {
        assert_eq!(parse_distance("12.5"), Ok(12.5));
        assert_eq!(parse_distance(" 0 "), Ok(0.0));
        assert!(parse_distance("-3").is_err());
        assert!(parse_distance("far").is_err());
        assert!(parse_distance("NaN").is_err());
        assert!(parse_distance("inf").is_err());
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("-139.5"), Ok(-139.5));
        assert!(parse_decimal("200").is_err());
        assert!(parse_decimal("north").is_err());
    }

    #[tokio::test]
    async fn test_locate_text() {
        let (outcome, text) = run_text(Command::Locate, &fixed(35.6895, 139.6917)).await;
        assert!(matches!(outcome, Outcome::Completed));
        assert!(text.contains("35° 41'22\" N"));
        assert!(text.contains("139° 41'30\" E"));
        assert!(text.contains("(Mock)"));
    }

    #[tokio::test]
    async fn test_north_moves_one_degree() {
        let (_, text) = run_text(Command::North { km: 111.0 }, &fixed(0.0, 0.0)).await;
        assert!(text.contains("Sailing north 111 km"));
        assert!(text.contains("To:   1° 0'0\" N, 0° 0'0\" E"), "{}", text);
    }

    #[tokio::test]
    async fn test_south_json_report() {
        let mut buf = Vec::new();
        run(&Command::South { km: 555.0 }, &fixed(0.0, -10.0), Format::Json, &mut buf)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["heading"], "south");
        assert_eq!(value["to"]["latitude"]["formatted"], "5° 0'0\" S");
        assert_eq!(value["to"]["longitude"]["formatted"], "10° 0'0\" W");
        assert_eq!(value["source"], "fixed");
    }

    #[tokio::test]
    async fn test_unavailable_skips_displacement() {
        let (outcome, text) = run_text(Command::North { km: 10.0 }, &unavailable()).await;
        assert!(matches!(outcome, Outcome::CoordinatesUnknown(_)));
        assert!(text.starts_with("⚠️  Coordinates unknown"));
        assert!(!text.contains("Sailing"));
    }

    #[tokio::test]
    async fn test_unavailable_json() {
        let mut buf = Vec::new();
        run(&Command::Locate, &unavailable(), Format::Json, &mut buf).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["status"], "unknown");
    }

    #[tokio::test]
    async fn test_convert() {
        let (_, text) = run_text(Command::Convert { decimal: -139.6917 }, &unavailable()).await;
        assert!(text.contains("= 139° 41'30\""));
        assert!(text.contains("As latitude:  139° 41'30\" S"));
        assert!(text.contains("As longitude: 139° 41'30\" W"));
    }

    #[tokio::test]
    async fn test_dock_launch() {
        let (_, text) = run_text(Command::Dock { query: "2".into() }, &unavailable()).await;
        assert!(text.starts_with("🚢 Channel 2: Mini Merry II"));
        assert!(text.contains(">> Mini Merry II, launch!"));
    }

    #[tokio::test]
    async fn test_fire_defaults_to_gaon() {
        let (_, text) = run_text(Command::Fire { query: None }, &unavailable()).await;
        assert!(text.contains("Gaon Cannon"));
    }

    #[tokio::test]
    async fn test_garden_list() {
        let (_, text) = run_text(Command::Garden { query: None }, &unavailable()).await;
        assert_eq!(text.lines().count(), GARDEN.records.len());
    }

    #[tokio::test]
    async fn test_unknown_area() {
        let mut buf = Vec::new();
        let err = run(&Command::Area { query: "ballroom".into() }, &unavailable(), Format::Text, &mut buf)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "no area matches 'ballroom'");
    }
}
