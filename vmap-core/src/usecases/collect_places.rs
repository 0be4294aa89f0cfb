use super::prelude::*;

/// What to do with a record that misses a required field.
///
/// The reference behavior is undefined here, so both policies are explicit
/// and the integrator chooses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingFieldPolicy {
    /// Skip the record and log a warning (default).
    #[default]
    SkipAndWarn,
    /// Abort the whole load with an error.
    Fail,
}

pub fn collect_places<I>(records: I, policy: MissingFieldPolicy) -> Result<Vec<PlaceFeature>>
where
    I: IntoIterator<Item = std::result::Result<PlaceFeature, PlaceFeatureError>>,
{
    let mut places = Vec::new();
    for record in records {
        match record {
            Ok(place) => places.push(place),
            Err(err) => match policy {
                MissingFieldPolicy::SkipAndWarn => {
                    log::warn!("Skipping place record: {err}");
                }
                MissingFieldPolicy::Fail => {
                    return Err(err.into());
                }
            },
        }
    }
    Ok(places)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<std::result::Result<PlaceFeature, PlaceFeatureError>> {
        vec![
            Ok(PlaceFeature::build("Ok place", Category::VeganOnly).finish()),
            Err(PlaceFeatureError::MissingName),
            Ok(PlaceFeature::build("Another ok place", Category::VeganFriendly).finish()),
        ]
    }

    #[test]
    fn skip_and_warn_keeps_valid_records() {
        let places = collect_places(records(), MissingFieldPolicy::SkipAndWarn).unwrap();
        assert_eq!(places.len(), 2);
        assert_eq!(places[0].name, "Ok place");
        assert_eq!(places[1].name, "Another ok place");
    }

    #[test]
    fn fail_aborts_the_load() {
        let err = collect_places(records(), MissingFieldPolicy::Fail).unwrap_err();
        assert_eq!(err, Error::Place(PlaceFeatureError::MissingName));
    }
}
