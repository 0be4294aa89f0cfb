use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("The marker groups are already populated")]
    AlreadyPopulated,
    #[error(transparent)]
    Place(#[from] vmap_entities::place::PlaceFeatureError),
}
