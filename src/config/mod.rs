use std::{env, fs, io::ErrorKind, path::Path, time::Duration};

use anyhow::{anyhow, Result};

use vmap_core::usecases::{CategoryPolicy, MissingFieldPolicy};
use vmap_entities::geo::MapPoint;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "veggiemap.toml";

const ENV_NAME_PLACES_URL: &str = "VEGGIEMAP_PLACES_URL";
const ENV_NAME_STATS_URL: &str = "VEGGIEMAP_STATS_URL";

#[derive(Debug)]
pub struct Config {
    pub feed: Feed,
    pub map: Map,
    pub locale: Locale,
    pub policies: Policies,
}

#[derive(Debug)]
pub struct Feed {
    pub places_url: String,
    pub stats_url: String,
    /// Optional hardening knob; the baseline contract is no timeout.
    pub timeout: Option<Duration>,
}

#[derive(Debug)]
pub struct Map {
    pub center: MapPoint,
    pub zoom: u8,
    pub attribution: String,
}

#[derive(Debug)]
pub struct Locale {
    pub language: String,
    pub country_code: String,
    pub state: String,
    pub languages: Vec<Language>,
}

#[derive(Debug, Clone)]
pub struct Language {
    pub code: String,
    pub name: String,
}

#[derive(Debug)]
pub struct Policies {
    pub missing_field: MissingFieldPolicy,
    pub category: CategoryPolicy,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(url) = env::var(ENV_NAME_PLACES_URL) {
            cfg.feed.places_url = url;
        }
        if let Ok(url) = env::var(ENV_NAME_STATS_URL) {
            cfg.feed.stats_url = url;
        }
        Ok(cfg)
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;

    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            feed,
            map,
            locale,
            policies,
        } = from;

        let raw::Feed {
            places_url,
            stats_url,
            timeout,
        } = feed.unwrap_or_default();
        let feed = Feed {
            places_url,
            stats_url,
            timeout,
        };

        let raw::Map {
            center_lat,
            center_lng,
            zoom,
            attribution,
        } = map.unwrap_or_default();
        let center = MapPoint::try_from_lat_lng_deg(center_lat, center_lng)
            .ok_or_else(|| anyhow!("Invalid map center: {center_lat},{center_lng}"))?;
        let map = Map {
            center,
            zoom,
            attribution,
        };

        let raw::Locale {
            language,
            country_code,
            state,
            languages,
        } = locale.unwrap_or_default();
        let languages = languages
            .into_iter()
            .map(|raw::Language { code, name }| Language { code, name })
            .collect();
        let locale = Locale {
            language,
            country_code,
            state,
            languages,
        };

        let raw::Policies {
            missing_field,
            category,
        } = policies.unwrap_or_default();
        let missing_field = match missing_field.as_str() {
            "skip-and-warn" => MissingFieldPolicy::SkipAndWarn,
            "fail" => MissingFieldPolicy::Fail,
            other => return Err(anyhow!("Unknown missing-field policy: {other}")),
        };
        let category = match category.as_str() {
            "permissive" => CategoryPolicy::Permissive,
            "strict" => CategoryPolicy::Strict,
            other => return Err(anyhow!("Unknown category policy: {other}")),
        };
        let policies = Policies {
            missing_field,
            category,
        };

        Ok(Self {
            feed,
            map,
            locale,
            policies,
        })
    }
}
