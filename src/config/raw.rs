use std::time::Duration;

use duration_str::deserialize_option_duration;
use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = include_str!("veggiemap.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub feed: Option<Feed>,
    pub map: Option<Map>,
    pub locale: Option<Locale>,
    pub policies: Option<Policies>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Feed {
    pub places_url: String,
    pub stats_url: String,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub timeout: Option<Duration>,
}

impl Default for Feed {
    fn default() -> Self {
        Config::default().feed.expect("Feed configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Map {
    pub center_lat: f64,
    pub center_lng: f64,
    pub zoom: u8,
    pub attribution: String,
}

impl Default for Map {
    fn default() -> Self {
        Config::default().map.expect("Map configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Locale {
    pub language: String,
    pub country_code: String,
    pub state: String,
    pub languages: Vec<Language>,
}

impl Default for Locale {
    fn default() -> Self {
        Config::default().locale.expect("Locale configuration")
    }
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Language {
    pub code: String,
    pub name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Policies {
    pub missing_field: String,
    pub category: String,
}

impl Default for Policies {
    fn default() -> Self {
        Config::default().policies.expect("Policies configuration")
    }
}
