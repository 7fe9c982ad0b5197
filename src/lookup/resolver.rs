//! Address resolution on top of a [`Geocoder`].

use tracing::{debug, warn};

use crate::geo_types::{Address, Coordinate};

use super::{GeoObject, Geocoder};

/// Build an address from the first entry of a result set.
///
/// Missing properties become empty strings so the address is either
/// complete or absent.
pub fn address_from_results(results: Vec<GeoObject>) -> Option<Address> {
    let first = results.into_iter().next()?;
    Some(Address {
        location: first.description.unwrap_or_default(),
        route: first.name.unwrap_or_default(),
    })
}

/// Resolve a coordinate to an address.
///
/// Geocoder failures are logged and reported as no address.
pub async fn resolve_address(geocoder: &dyn Geocoder, coordinate: Coordinate) -> Option<Address> {
    match geocoder.geocode(coordinate).await {
        Ok(results) => {
            let address = address_from_results(results);
            if address.is_none() {
                debug!(lat = coordinate.lat, lon = coordinate.lon, "geocoder returned no results");
            }
            address
        }
        Err(e) => {
            warn!(lat = coordinate.lat, lon = coordinate.lon, error = %e, "address lookup failed");
            None
        }
    }
}
