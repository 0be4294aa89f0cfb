//! # vmap-gateways
//!
//! Implementations of the `vmap-core` gateway traits against real
//! collaborators: the HTTP data feed and the localized-string tables.

mod hours;
mod http;
mod translations;

pub use self::{hours::*, http::*, translations::*};
