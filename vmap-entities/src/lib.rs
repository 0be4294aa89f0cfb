#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # vmap-entities
//!
//! Reusable, agnostic domain entities for the veggie map.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific presentation logic.

pub mod address;
pub mod category;
pub mod contact;
pub mod geo;
pub mod links;
pub mod opening_hours;
pub mod osm;
pub mod place;
pub mod time;
pub mod url {
    pub use url::{ParseError, Url};
}

#[cfg(any(test, feature = "builders"))]
pub mod builders;
