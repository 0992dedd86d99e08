//! Location providers: a fixed (mock) position, IP geolocation, and a
//! provider that is never available.

use super::types::{LocationError, LocationSource};
use crate::coordinate::GeoPosition;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// A blocking source of the current device position.
pub trait LocationProvider: Send + Sync {
    fn locate(&self) -> Result<GeoPosition, LocationError>;

    fn source(&self) -> LocationSource;
}

/// Reject values a real fix can never have.
pub fn validate_decimal(lat: f64, lon: f64) -> Result<(), LocationError> {
    if !lat.is_finite() || !lon.is_finite() {
        return Err(LocationError::InvalidResponse(format!("non-finite coordinates {}, {}", lat, lon)));
    }
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return Err(LocationError::InvalidResponse(format!(
            "coordinates out of range: {:.4}, {:.4}",
            lat, lon
        )));
    }
    Ok(())
}

// ─── Fixed (mock) provider ──────────────────────────────────────

/// Default mock position: Tokyo.
pub const DEFAULT_LATITUDE: f64 = 35.6895;
pub const DEFAULT_LONGITUDE: f64 = 139.6917;

#[derive(Debug, Clone)]
pub struct FixedProvider {
    lat: f64,
    lon: f64,
}

impl FixedProvider {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl Default for FixedProvider {
    fn default() -> Self {
        Self::new(DEFAULT_LATITUDE, DEFAULT_LONGITUDE)
    }
}

impl LocationProvider for FixedProvider {
    fn locate(&self) -> Result<GeoPosition, LocationError> {
        validate_decimal(self.lat, self.lon)?;
        Ok(GeoPosition::from_decimal(self.lat, self.lon))
    }

    fn source(&self) -> LocationSource {
        LocationSource::Fixed
    }
}

// ─── IP-based geolocation ───────────────────────────────────────

const IP_API_URL: &str = "https://ipapi.co/json/";

#[derive(Deserialize)]
struct IpApiResult {
    latitude: Option<f64>,
    longitude: Option<f64>,
    #[serde(default)]
    error: bool,
    #[serde(default)]
    reason: Option<String>,
}

impl IpApiResult {
    fn into_position(self) -> Result<GeoPosition, LocationError> {
        if self.error {
            return Err(LocationError::ServiceUnavailable(
                self.reason.unwrap_or_else(|| "provider reported an error".into()),
            ));
        }
        let lat = self.latitude.ok_or_else(|| LocationError::InvalidResponse("no latitude".into()))?;
        let lon = self.longitude.ok_or_else(|| LocationError::InvalidResponse("no longitude".into()))?;
        validate_decimal(lat, lon)?;
        Ok(GeoPosition::from_decimal(lat, lon))
    }
}

/// Approximate device position from the public IP address.
#[derive(Debug, Clone)]
pub struct IpProvider {
    url: String,
    request_timeout: Duration,
}

impl IpProvider {
    pub fn new(request_timeout: Duration) -> Self {
        Self {
            url: IP_API_URL.to_string(),
            request_timeout,
        }
    }
}

impl LocationProvider for IpProvider {
    fn locate(&self) -> Result<GeoPosition, LocationError> {
        debug!(url = %self.url, "requesting IP geolocation");
        let response = ureq::get(&self.url)
            .set("User-Agent", concat!("ThousandSunny/", env!("CARGO_PKG_VERSION")))
            .timeout(self.request_timeout)
            .call()
            .map_err(|e| LocationError::Network(e.to_string()))?;

        let r: IpApiResult = response
            .into_json()
            .map_err(|e| LocationError::InvalidResponse(e.to_string()))?;

        r.into_position()
    }

    fn source(&self) -> LocationSource {
        LocationSource::Ip
    }
}

// ─── No location service ────────────────────────────────────────

/// Stands in for a machine with no location service at all.
#[derive(Debug, Clone, Default)]
pub struct UnavailableProvider;

impl LocationProvider for UnavailableProvider {
    fn locate(&self) -> Result<GeoPosition, LocationError> {
        Err(LocationError::ServiceUnavailable("no location service on this system".into()))
    }

    fn source(&self) -> LocationSource {
        LocationSource::Fixed
    }
}
