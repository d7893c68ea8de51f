use tower_http::cors::{Any, CorsLayer};

/// Build the CORS layer: all origins, methods, and headers are permitted.
///
/// The service has no credentialed or origin-sensitive surface, so no
/// access control is applied at this layer.
pub fn build_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
