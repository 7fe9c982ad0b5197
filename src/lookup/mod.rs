//! External lookup collaborators: reverse geocoding and panoramic imagery.
//!
//! Both collaborators are async and fallible. The traits return boxed
//! futures so a session can hold them as trait objects and run lookups on
//! spawned tasks.

mod imagery;
mod resolver;
pub mod yandex;

use std::future::Future;
use std::pin::Pin;

use crate::errors::Error;
use crate::geo_types::Coordinate;

pub use imagery::{check_imagery, NoImagery};
pub use resolver::{address_from_results, resolve_address};
pub use yandex::YandexGeocoder;

/// Boxed future returned by lookup collaborators.
pub type LookupFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, Error>> + Send + 'a>>;

/// One entry of a reverse geocoding result set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeoObject {
    /// Description-like property (city, region).
    pub description: Option<String>,
    /// Name-like property (street and house, landmark).
    pub name: Option<String>,
}

/// A reverse geocoding provider.
pub trait Geocoder: Send + Sync + 'static {
    /// Resolve a coordinate to a result set, best match first.
    fn geocode(&self, coordinate: Coordinate) -> LookupFuture<'_, Vec<GeoObject>>;
}

/// A panoramic imagery entry near a coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Panorama {
    pub position: Coordinate,
}

/// A provider of street-level panoramic imagery.
pub trait ImageryLocator: Send + Sync + 'static {
    /// Find panoramas near a coordinate.
    fn locate(&self, coordinate: Coordinate) -> LookupFuture<'_, Vec<Panorama>>;
}
