//! Reverse geocoding through the Yandex Geocoder HTTP API.
//!
//! Requests `GET {url}?geocode={lon},{lat}&format=json&lang={lang}[&apikey=..]`
//! and reads `response.GeoObjectCollection.featureMember[*].GeoObject`.

use std::time::Duration;

use serde_json::Value;

use crate::config::Config;
use crate::errors::Error;
use crate::geo_types::Coordinate;

use super::{GeoObject, Geocoder, LookupFuture};

/// HTTP reverse geocoder.
pub struct YandexGeocoder {
    client: reqwest::Client,
    url: String,
    api_key: Option<String>,
    lang: String,
}

impl YandexGeocoder {
    /// Create a geocoder from configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            url: config.geocoder_url.clone(),
            api_key: config.geocoder_api_key.clone(),
            lang: config.geocoder_lang.clone(),
        })
    }

    async fn reverse(&self, coordinate: Coordinate) -> Result<Vec<GeoObject>, Error> {
        // The API takes longitude first.
        let point = format!("{},{}", coordinate.lon, coordinate.lat);
        let mut query: Vec<(&str, &str)> = vec![
            ("geocode", point.as_str()),
            ("format", "json"),
            ("lang", self.lang.as_str()),
        ];
        if let Some(key) = &self.api_key {
            query.push(("apikey", key.as_str()));
        }

        let response = self.client.get(&self.url).query(&query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read error body".to_owned());
            return Err(Error::Lookup(format!("geocoder returned {status}: {body}")));
        }

        let json: Value = response.json().await?;
        parse_feature_members(&json)
    }
}

impl Geocoder for YandexGeocoder {
    fn geocode(&self, coordinate: Coordinate) -> LookupFuture<'_, Vec<GeoObject>> {
        Box::pin(self.reverse(coordinate))
    }
}

/// Extract result entries from a geocoder response, preserving their order.
pub(crate) fn parse_feature_members(json: &Value) -> Result<Vec<GeoObject>, Error> {
    let members = json
        .get("response")
        .and_then(|r| r.get("GeoObjectCollection"))
        .and_then(|c| c.get("featureMember"))
        .and_then(Value::as_array)
        .ok_or_else(|| {
            Error::Lookup(
                "geocoder response missing response.GeoObjectCollection.featureMember".to_owned(),
            )
        })?;

    Ok(members
        .iter()
        .filter_map(|m| m.get("GeoObject"))
        .map(|obj| GeoObject {
            description: obj
                .get("description")
                .and_then(Value::as_str)
                .map(ToOwned::to_owned),
            name: obj.get("name").and_then(Value::as_str).map(ToOwned::to_owned),
        })
        .collect())
}
