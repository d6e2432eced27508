//! Read-only HTTP API over the venue catalog.
//!
//! Built on Axum. The catalog is loaded before the listener is bound; a data
//! error stops the process before any request is accepted.
//!
//! ## Starting the Server
//!
//! ```text
//! # Serve venues.json from next to the binary on 0.0.0.0:8001
//! venue-catalog serve
//!
//! # Custom data file and port
//! venue-catalog serve --data data/venues.json --port 3000
//!
//! # Local only
//! venue-catalog serve --address 127.0.0.1
//! ```
//!
//! ## API Endpoints
//!
//! - `GET /api/venues` - All venues, in data file order
//! - `GET /api/venues/{venue_id}` - One venue, or 404 `{"detail": "Venue not found"}`
//!
//! Cross-origin requests are allowed from any origin.

pub mod error;
pub mod server;
