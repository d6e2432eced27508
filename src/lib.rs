//! # venue-catalog
//!
//! A read-only HTTP API over a static catalog of venue records.
//!
//! The catalog is a JSON array of venue objects loaded once at startup. Each
//! venue needs a non-empty string `id`; every other field is passed through to
//! clients untouched. After loading, the catalog never changes and the server
//! never touches the disk again.
//!
//! ## Features
//!
//! - **List**: `GET /api/venues` returns every venue in data file order
//! - **Lookup**: `GET /api/venues/{venue_id}` returns the first venue whose id
//!   matches exactly, or 404 `{"detail": "Venue not found"}`
//! - **Open CORS**: any origin, method and header is accepted
//! - **Fail fast**: a missing or malformed data file stops the process before
//!   the port is bound
//!
//! ## Example
//!
//! ```rust,no_run
//! use venue_catalog::VenueCatalog;
//!
//! let catalog = VenueCatalog::from_json(
//!     r#"[{"id":"1","name":"Grand Hall"},{"id":"2","name":"Riverside Room"}]"#,
//! )
//! .unwrap();
//!
//! let hall = catalog.get("1").unwrap();
//! assert_eq!(hall.display_name(), Some("Grand Hall"));
//!
//! // Serve it
//! let app = venue_catalog::web::server::create_router(catalog);
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Loading and looking up venues
//! - [`core`]: The `Venue` record and its identifier
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: HTTP API

pub mod catalog;
pub mod cli;
pub mod core;
pub mod web;

// Re-export commonly used types for convenience
pub use catalog::store::{CatalogError, VenueCatalog};
pub use core::types::VenueId;
pub use core::venue::Venue;
