use std::time::Duration;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;

use vmap_boundary::{PlacesDoc, StatsDoc};
use vmap_core::{
    usecases::{collect_places, latest_category_counts, MissingFieldPolicy},
    FeedError, FeedGateway,
};
use vmap_entities::{category::Category, place::PlaceFeature};

/// Fetches the place-data document and the statistics document over plain
/// HTTP GET (no auth). There is no retry; the optional timeout defaults to
/// none.
#[derive(Debug, Clone)]
pub struct HttpFeedGateway {
    client: Client,
    places_url: String,
    stats_url: String,
}

impl HttpFeedGateway {
    pub fn new(
        places_url: impl Into<String>,
        stats_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| FeedError::Fetch(err.to_string()))?;
        Ok(Self {
            client,
            places_url: places_url.into(),
            stats_url: stats_url.into(),
        })
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FeedError> {
        let response = self
            .client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|err| FeedError::Fetch(err.to_string()))?;
        response.json().map_err(|err| FeedError::Fetch(err.to_string()))
    }
}

impl FeedGateway for HttpFeedGateway {
    fn fetch_places(&self, policy: MissingFieldPolicy) -> Result<Vec<PlaceFeature>, FeedError> {
        let doc: PlacesDoc = self.get_json(&self.places_url)?;
        log::debug!("Fetched {} place features", doc.features.len());
        let records = doc.features.into_iter().map(PlaceFeature::try_from);
        Ok(collect_places(records, policy)?)
    }

    fn fetch_category_counts(&self) -> Result<Vec<(Category, u64)>, FeedError> {
        let doc: StatsDoc = self.get_json(&self.stats_url)?;
        Ok(latest_category_counts(&doc.stat))
    }
}
