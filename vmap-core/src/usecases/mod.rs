mod categorize_places;
mod category_counts;
mod collect_places;
mod error;
mod manage_layers;
mod opening_state;
mod resolve_icon;
mod synthesize_content;

pub use self::{
    categorize_places::*, category_counts::*, collect_places::*, error::Error, manage_layers::*,
    opening_state::*, resolve_icon::*, synthesize_content::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use vmap_entities::{
        category::Category,
        geo::MapPoint,
        place::{PlaceFeature, PlaceFeatureError},
        time::Timestamp,
    };
}
