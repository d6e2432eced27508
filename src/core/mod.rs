//! Core data types for the venue catalog.
//!
//! - [`Venue`](venue::Venue): one record, an `id` plus opaque pass-through fields
//! - [`VenueId`](types::VenueId): the identifier used for lookups

pub mod types;
pub mod venue;
