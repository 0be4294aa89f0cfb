use chrono::DateTime;

use vmap_core::{LocationHint, OpeningHoursEvaluator, OpeningHoursGateway, PrettifyOptions};
use vmap_entities::{opening_hours::OpeningHours, time::Timestamp};

/// Evaluates specifications in the structured OSM `opening_hours` syntax
/// with the `opening-hours` crate. Specifications the parser rejects are
/// reported as unavailable.
///
/// Holiday context is not wired up yet, so `PH` rules evaluate as closed
/// regardless of the location hint.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsmOpeningHours;

/// A successfully parsed specification, keeping the raw rule text for
/// display.
#[derive(Debug)]
pub struct CompiledHours {
    compiled: opening_hours::OpeningHours,
    raw: String,
}

impl OpeningHoursEvaluator for CompiledHours {
    fn is_open(&self, at: Timestamp) -> bool {
        let Some(at) = DateTime::from_timestamp(at.into_unix_seconds(), 0) else {
            return false;
        };
        self.compiled.is_open(at.naive_utc())
    }

    fn prettify(&self, options: &PrettifyOptions) -> String {
        let separator = if options.print_semicolons {
            format!(";{}", options.rule_separator)
        } else {
            options.rule_separator.clone()
        };
        self.raw
            .split(';')
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(&separator)
    }
}

impl OpeningHoursGateway for OsmOpeningHours {
    type Evaluator = CompiledHours;

    fn compile(&self, spec: &OpeningHours, _: &LocationHint) -> Option<CompiledHours> {
        let compiled = match spec.as_str().parse() {
            Ok(compiled) => compiled,
            Err(err) => {
                log::debug!("Unparsable opening hours '{}': {err}", spec.as_str());
                return None;
            }
        };
        Some(CompiledHours {
            compiled,
            raw: spec.as_str().to_string(),
        })
    }
}

/// Gateway used when no opening-hours evaluation library is linked into the
/// build: every specification is reported as unavailable, so popups simply
/// omit the opening-hours section.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableHours;

/// Uninhabited evaluator type for [`UnavailableHours`].
#[derive(Debug)]
pub enum NeverEvaluates {}

impl OpeningHoursEvaluator for NeverEvaluates {
    fn is_open(&self, _: Timestamp) -> bool {
        match *self {}
    }

    fn prettify(&self, _: &PrettifyOptions) -> String {
        match *self {}
    }
}

impl OpeningHoursGateway for UnavailableHours {
    type Evaluator = NeverEvaluates;

    fn compile(&self, spec: &OpeningHours, _: &LocationHint) -> Option<NeverEvaluates> {
        log::trace!("No opening-hours evaluator available for: {}", spec.as_str());
        None
    }
}

#[cfg(test)]
mod tests {
    use vmap_entities::geo::MapPoint;

    use super::*;

    // 2023-11-14 (a Tuesday) 12:00:00 UTC and 22:13:20 UTC.
    const TUESDAY_NOON: i64 = 1_699_963_200;
    const TUESDAY_NIGHT: i64 = 1_700_000_000;

    fn hint() -> LocationHint {
        LocationHint {
            pos: MapPoint::try_from_lat_lng_deg(51.49, 11.97).unwrap(),
            country_code: "de".to_string(),
            state: "st".to_string(),
            locale: "en".to_string(),
        }
    }

    fn spec(raw: &str) -> OpeningHours {
        raw.parse().unwrap()
    }

    #[test]
    fn weekday_rules_evaluate_against_the_clock() {
        let evaluator = OsmOpeningHours
            .compile(&spec("Mo-Fr 10:00-18:00"), &hint())
            .unwrap();
        let noon = Timestamp::try_from_unix_seconds(TUESDAY_NOON).unwrap();
        let night = Timestamp::try_from_unix_seconds(TUESDAY_NIGHT).unwrap();
        assert!(evaluator.is_open(noon));
        assert!(!evaluator.is_open(night));
    }

    #[test]
    fn around_the_clock_is_always_open() {
        let evaluator = OsmOpeningHours.compile(&spec("24/7"), &hint()).unwrap();
        let noon = Timestamp::try_from_unix_seconds(TUESDAY_NOON).unwrap();
        let night = Timestamp::try_from_unix_seconds(TUESDAY_NIGHT).unwrap();
        assert!(evaluator.is_open(noon));
        assert!(evaluator.is_open(night));
    }

    #[test]
    fn unparsable_specifications_are_unavailable() {
        assert!(OsmOpeningHours
            .compile(&spec("not a specification"), &hint())
            .is_none());
    }

    #[test]
    fn prettify_separates_rules() {
        let evaluator = OsmOpeningHours
            .compile(&spec("Mo,We 10:00-12:00; PH off"), &hint())
            .unwrap();
        assert_eq!(
            evaluator.prettify(&PrettifyOptions::default()),
            "Mo,We 10:00-12:00<br />PH off"
        );
    }

    #[test]
    fn unavailable_gateway_never_compiles() {
        assert!(UnavailableHours
            .compile(&spec("Mo-Fr 10:00-18:00"), &hint())
            .is_none());
    }
}
