mod handlers;
mod state;

use axum::Router;
use axum::routing::get;
use state::AppState;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::suggest::SuggestionEngine;

pub use handlers::SuggestionsResponse;

pub fn build_router(engine: SuggestionEngine) -> Router {
    let state = Arc::new(AppState { engine });

    Router::new()
        .route("/suggestions", get(handlers::suggestions))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start(engine: SuggestionEngine, host: &str, port: u16) {
    let app = build_router(engine);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            eprintln!("Error: Cannot bind to {}: {}", addr, e);
            std::process::exit(1);
        });

    eprintln!("  City Suggest server listening on http://{}", addr);
    eprintln!("  Press Ctrl+C to stop.");

    axum::serve(listener, app)
        .await
        .unwrap_or_else(|e| {
            eprintln!("Server error: {}", e);
            std::process::exit(1);
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, City};
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn router() -> Router {
        let catalog = Catalog::from_cities(vec![
            City::new("Toronto", 43.70011, -79.4163),
            City::new("Montreal", 45.50884, -73.58781),
        ]);
        build_router(SuggestionEngine::new(Arc::new(catalog)))
    }

    async fn fetch(uri: &str) -> (StatusCode, String) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = router().oneshot(request).await.unwrap();
        let status = response.status();
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_route_with_location() {
        let (status, body) = fetch("/suggestions?q=toronto&latitude=43.70011&longitude=-79.41630").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            r#"{"suggestions":[{"name":"Toronto","latitude":"43.70011","longitude":"-79.41630","score":1.0}]}"#
        );
    }

    #[tokio::test]
    async fn test_route_repeated_param_uses_first() {
        let (status, body) = fetch("/suggestions?q=Toronto&q=Tor").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#""score":0.8"#));
    }

    #[tokio::test]
    async fn test_route_without_params() {
        let (status, body) = fetch("/suggestions").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Toronto") && body.contains("Montreal"));
    }

    #[tokio::test]
    async fn test_route_newline_in_term() {
        let (status, body) = fetch("/suggestions?q=MONT%0Areal&unknown=1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"suggestions":[]}"#);
    }
}
