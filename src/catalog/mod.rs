//! Venue catalog loading and lookup.
//!
//! The catalog is read once from a JSON file at startup and never changes
//! afterwards. The file holds an array of objects; each object needs a
//! non-empty string `id` and may carry any other fields, which are passed
//! through untouched.
//!
//! ```json
//! [
//!   {"id": "1", "name": "Grand Hall", "capacity": {"min": 20, "max": 300}},
//!   {"id": "2", "name": "Riverside Room"}
//! ]
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use venue_catalog::VenueCatalog;
//! use std::path::Path;
//!
//! let catalog = VenueCatalog::load_from_file(Path::new("data/venues.json")).unwrap();
//!
//! for venue in catalog.venues() {
//!     println!("{}", venue.id());
//! }
//!
//! let hall = catalog.get("1");
//! ```

pub mod store;
