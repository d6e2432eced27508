use anyhow::Context;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::catalog::store::VenueCatalog;
use crate::cli::ServeArgs;
use crate::web::error::ApiError;

/// Requests still running after this are answered with 408
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Upper bound on requests handled at the same time, across all routes
pub const MAX_CONCURRENT_REQUESTS: usize = 100;

/// Request limits enforced by the middleware stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerLimits {
    pub request_timeout: Duration,
    pub max_concurrent_requests: usize,
}

impl Default for ServerLimits {
    fn default() -> Self {
        Self {
            request_timeout: REQUEST_TIMEOUT,
            max_concurrent_requests: MAX_CONCURRENT_REQUESTS,
        }
    }
}

/// Shared application state
///
/// Built once before the listener is bound and only ever read afterwards.
pub struct AppState {
    pub catalog: VenueCatalog,
}

/// Run the web server
///
/// The catalog is loaded before the runtime starts, so a bad data file stops
/// the process without ever binding the port.
///
/// # Errors
///
/// Returns an error if the venue data cannot be loaded, the tokio runtime
/// cannot be created, or the server fails to start.
pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    let catalog = args.data.load_catalog()?;
    let app = create_router(catalog);
    let addr = format!("{}:{}", args.address, args.port);

    // Build tokio runtime
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(app, &addr).await })
}

/// Create the application router with all routes and middleware configured.
pub fn create_router(catalog: VenueCatalog) -> Router {
    let state = Arc::new(AppState { catalog });

    let routes = Router::new()
        .route(
            "/api/venues",
            get(list_venues_handler).fallback(method_not_allowed_handler),
        )
        .route(
            "/api/venues/{venue_id}",
            get(get_venue_handler).fallback(method_not_allowed_handler),
        )
        .fallback(not_found_handler)
        .with_state(state);

    apply_middleware(routes, ServerLimits::default())
}

/// Wrap `router` in the tracing, header, CORS, timeout and concurrency layers.
///
/// `Router::layer` applies each layer to every route separately, so the
/// concurrency limit uses a global semaphore shared by all of them.
pub fn apply_middleware(router: Router, limits: ServerLimits) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(SetResponseHeaderLayer::if_not_present(
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ))
            // Any origin, method and header; origin is echoed so credentials work
            .layer(CorsLayer::very_permissive())
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                limits.request_timeout,
            ))
            .layer(GlobalConcurrencyLimitLayer::new(
                limits.max_concurrent_requests,
            )),
    )
}

async fn run_server(app: Router, addr: &str) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    tracing::info!(%addr, "Listening for HTTP traffic");
    println!("Starting venue-catalog web server at http://{addr}");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Return every venue in data file order
async fn list_venues_handler(State(state): State<Arc<AppState>>) -> Response {
    Json(state.catalog.venues()).into_response()
}

/// Return the first venue whose id equals the path segment exactly
///
/// A segment that cannot be decoded (e.g. invalid UTF-8) can never equal a
/// loaded id, so it is reported as not found.
async fn get_venue_handler(
    State(state): State<Arc<AppState>>,
    venue_id: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let venue_id = match venue_id {
        Ok(Path(venue_id)) => venue_id,
        Err(rejection) => {
            tracing::debug!(%rejection, "Undecodable venue id");
            return Err(ApiError::venue_not_found());
        }
    };

    match state.catalog.get(&venue_id) {
        Some(venue) => Ok(Json(venue).into_response()),
        None => {
            tracing::debug!(%venue_id, "Venue not found");
            Err(ApiError::venue_not_found())
        }
    }
}

async fn not_found_handler() -> ApiError {
    ApiError::route_not_found()
}

async fn method_not_allowed_handler() -> ApiError {
    ApiError::method_not_allowed()
}
