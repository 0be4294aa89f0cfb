use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use vmap_core::{
    usecases::{categorize_places, popup_content, tooltip_content, LayerState, PopupContext},
    util::url::update_url_parameter,
    FeedGateway,
};
use vmap_entities::{category::Category, time::Timestamp};
use vmap_gateways::{HttpFeedGateway, OsmOpeningHours, StaticTranslations};

use crate::{config::Config, surface::HeadlessMapSurface};

#[derive(Debug, Parser)]
#[command(version, about = "Vegan and vegetarian places on a map")]
pub struct Args {
    /// Path to the configuration file.
    #[arg(long, short)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch the feed documents and populate the marker groups.
    Load,
    /// Report places with incomplete data.
    Check,
    /// Print the most recent per-category statistics.
    Stats,
    /// Print tooltip and popup content of a single place.
    Popup { name: String },
    /// Rewrite the `lang` parameter of a page URL.
    Lang { url: String, lang: String },
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let config = Config::try_load_from_file_or_default(args.config.as_deref())?;
    match args.command {
        Command::Load => load(&config),
        Command::Check => check(&config),
        Command::Stats => stats(&config),
        Command::Popup { name } => popup(&config, &name),
        Command::Lang { url, lang } => switch_language(&config, &url, &lang),
    }
}

fn feed_gateway(config: &Config) -> Result<HttpFeedGateway> {
    Ok(HttpFeedGateway::new(
        config.feed.places_url.clone(),
        config.feed.stats_url.clone(),
        config.feed.timeout,
    )?)
}

/// The full startup pipeline: initialize the (headless) marker groups,
/// fetch both documents, populate and apply the default visibility.
fn load(config: &Config) -> Result<()> {
    let feed = feed_gateway(config)?;
    let mut surface = HeadlessMapSurface::default();
    let mut layers = LayerState::initialize(&mut surface);
    println!(
        "map: center {} zoom {} ({})",
        config.map.center, config.map.zoom, config.map.attribution
    );

    // The two fetches are independent; a failure of one never aborts the
    // other, the map simply stays empty for that document.
    match feed.fetch_places(config.policies.missing_field) {
        Ok(places) => {
            let grouped = categorize_places(places, config.policies.category)?;
            layers.populate(grouped, &mut surface)?;
            layers.apply_default_visibility(&mut surface);
        }
        Err(err) => log::error!("Request failed: {err}"),
    }
    match feed.fetch_category_counts() {
        Ok(counts) => layers.set_counts(counts),
        Err(err) => log::error!("Request failed: {err}"),
    }

    for (key, label) in layers.labels() {
        let category = Category::from(key.as_str());
        let visibility = if layers.is_visible(&category) {
            "shown"
        } else {
            "hidden"
        };
        println!(
            "{label}: {} markers ({visibility})",
            layers.group_len(&category)
        );
    }
    println!("total: {} markers", layers.marker_count());
    Ok(())
}

/// Data-quality report: incomplete addresses and missing opening hours.
fn check(config: &Config) -> Result<()> {
    let feed = feed_gateway(config)?;
    let places = feed.fetch_places(config.policies.missing_field)?;
    let mut issues = 0;
    for place in &places {
        let reference = place
            .osm_ref
            .as_ref()
            .map(|osm| osm.permalink())
            .unwrap_or_else(|| "no OSM reference".to_string());
        if !place.has_complete_address() {
            log::warn!("{}: address information incomplete - {reference}", place.name);
            issues += 1;
        }
        if place.opening_hours.is_none() {
            log::warn!("{}: without opening hours - {reference}", place.name);
            issues += 1;
        }
    }
    println!("checked {} places, {issues} issues", places.len());
    Ok(())
}

fn stats(config: &Config) -> Result<()> {
    let feed = feed_gateway(config)?;
    for (category, count) in feed.fetch_category_counts()? {
        println!("{category}: {count}");
    }
    Ok(())
}

fn popup(config: &Config, name: &str) -> Result<()> {
    let feed = feed_gateway(config)?;
    let places = feed.fetch_places(config.policies.missing_field)?;
    let Some(place) = places.iter().find(|place| place.name == name) else {
        bail!("No place named '{name}'");
    };
    let hours = OsmOpeningHours;
    let i18n = StaticTranslations::for_code(&config.locale.language);
    let ctx = PopupContext {
        hours: &hours,
        i18n: &i18n,
        country_code: &config.locale.country_code,
        state: &config.locale.state,
        locale: &config.locale.language,
        now: Timestamp::now(),
    };
    println!("{}", tooltip_content(place));
    println!("{}", popup_content(place, &ctx));
    Ok(())
}

/// The language-selector callback: rewrite the `lang` parameter. Values
/// come from the closed set of configured languages.
fn switch_language(config: &Config, url: &str, lang: &str) -> Result<()> {
    if !config.locale.languages.iter().any(|l| l.code == lang) {
        bail!("Unsupported language: {lang}");
    }
    println!("{}", update_url_parameter(url, "lang", lang));
    Ok(())
}
