//! Free-text place-name geocoding via Nominatim.
//!
//! The one piece of network I/O in the system. Blocking, single
//! request per lookup, fixed 10-second timeout. Callers decide what to
//! do on failure; this crate only reports it (the CLI falls back to a
//! documented default location and says so).

pub mod error;

use std::time::Duration;

use serde::Deserialize;

pub use error::GeocodeError;

const SEARCH_URL: &str = "https://nominatim.openstreetmap.org/search";
const USER_AGENT: &str = "nebula-locator/0.1";
const TIMEOUT: Duration = Duration::from_secs(10);

/// A resolved place: coordinates plus the provider's display address.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub latitude: f64,
    pub longitude: f64,
    pub display_name: String,
}

/// One hit of a Nominatim `format=json` response. `lat`/`lon` arrive
/// as strings on the wire.
#[derive(Debug, Deserialize)]
struct NominatimHit {
    lat: String,
    lon: String,
    display_name: String,
}

/// Blocking Nominatim client.
pub struct Geocoder {
    client: reqwest::blocking::Client,
}

impl Geocoder {
    pub fn new() -> Result<Self, GeocodeError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(TIMEOUT)
            .build()
            .map_err(|e| GeocodeError::Http(e.to_string()))?;
        Ok(Self { client })
    }

    /// Resolve a free-text place name.
    ///
    /// `Ok(None)` means the service answered but found nothing;
    /// `Err` covers timeouts, transport failures, and malformed
    /// responses.
    pub fn lookup(&self, query: &str) -> Result<Option<Place>, GeocodeError> {
        tracing::debug!(query, "geocoding");
        let response = self
            .client
            .get(SEARCH_URL)
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .send()
            .map_err(|e| GeocodeError::Http(e.to_string()))?
            .error_for_status()
            .map_err(|e| GeocodeError::Http(e.to_string()))?;

        let body = response
            .text()
            .map_err(|e| GeocodeError::Http(e.to_string()))?;
        parse_response(&body)
    }
}

/// Parse a Nominatim JSON body into at most one place.
fn parse_response(body: &str) -> Result<Option<Place>, GeocodeError> {
    let hits: Vec<NominatimHit> =
        serde_json::from_str(body).map_err(|e| GeocodeError::Malformed(e.to_string()))?;
    let Some(hit) = hits.into_iter().next() else {
        return Ok(None);
    };
    let latitude: f64 = hit
        .lat
        .parse()
        .map_err(|_| GeocodeError::Malformed(format!("bad latitude {:?}", hit.lat)))?;
    let longitude: f64 = hit
        .lon
        .parse()
        .map_err(|_| GeocodeError::Malformed(format!("bad longitude {:?}", hit.lon)))?;
    Ok(Some(Place {
        latitude,
        longitude,
        display_name: hit.display_name,
    }))
}
