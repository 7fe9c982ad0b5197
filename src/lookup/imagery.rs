//! Panoramic imagery availability.

use tracing::{debug, warn};

use crate::errors::Error;
use crate::geo_types::Coordinate;

use super::{ImageryLocator, LookupFuture, Panorama};

/// Whether any panorama exists near a coordinate.
///
/// Locator failures are logged and reported as no imagery.
pub async fn check_imagery(locator: &dyn ImageryLocator, coordinate: Coordinate) -> bool {
    match locator.locate(coordinate).await {
        Ok(panoramas) => {
            debug!(lat = coordinate.lat, lon = coordinate.lon, found = panoramas.len(), "imagery lookup finished");
            !panoramas.is_empty()
        }
        Err(e) => {
            warn!(lat = coordinate.lat, lon = coordinate.lon, error = %e, "imagery lookup failed");
            false
        }
    }
}

/// Locator for environments without an imagery service. Never finds anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoImagery;

impl ImageryLocator for NoImagery {
    fn locate(&self, _coordinate: Coordinate) -> LookupFuture<'_, Vec<Panorama>> {
        Box::pin(async { Ok::<_, Error>(Vec::new()) })
    }
}
