mod catalog;
mod chat;
mod error;
mod group;
mod itinerary;
mod preferences;
mod views;

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Json, Router,
};
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tripr_common::types::ServiceInfo;
use tripr_config::{init_tracing, AppConfig};
use tripr_store::group::memory_repository::MemoryGroupRepository;
use tripr_store::preferences::memory_repository::MemoryPreferencesRepository;

#[derive(Clone, Default)]
pub struct AppState {
    pub preferences_repo: MemoryPreferencesRepository,
    pub group_repo: MemoryGroupRepository,
}

async fn root() -> &'static str {
    "✅ TripDavisor backend is running!"
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn info() -> Json<ServiceInfo> {
    Json(ServiceInfo::new("tripr-api"))
}

async fn ping() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Backend is working!" }))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

fn build_router(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/info", get(info))
        .route("/api/ping", get(ping))
        .merge(preferences::router())
        .merge(itinerary::router())
        .merge(chat::router())
        .merge(group::router())
        .merge(catalog::router())
        .merge(views::router())
        .layer(cors_layer(cors_origins))
        .with_state(state)
}

#[tokio::main]
async fn main() {
    let config = AppConfig::from_env().expect("failed to load config");
    init_tracing(&config.log_level);
    tracing::info!(service = "tripr-api", "starting");

    let app = build_router(AppState::default(), &config.cors_origins);
    let addr: SocketAddr = config.bind_addr().parse().expect("invalid bind address");

    tracing::info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");
    axum::serve(listener, app).await.expect("server error");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(
            AppState::default(),
            &["http://localhost:3000".to_string()],
        )
    }

    async fn read_body(resp: axum::http::Response<Body>) -> serde_json::Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn read_body_string(resp: axum::http::Response<Body>) -> String {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    // ── Health / Info ───────────────────────────────────────────────

    #[tokio::test]
    async fn root_returns_running_banner() {
        let resp = app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(read_body_string(resp).await, "✅ TripDavisor backend is running!");
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let resp = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(read_body(resp).await["status"], "ok");
    }

    #[tokio::test]
    async fn info_returns_service_name() {
        let resp = app()
            .oneshot(Request::get("/info").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(read_body(resp).await["name"], "tripr-api");
    }

    #[tokio::test]
    async fn ping_reports_backend_working() {
        let resp = app()
            .oneshot(Request::get("/api/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(read_body(resp).await["message"], "Backend is working!");
    }

    #[tokio::test]
    async fn cors_allows_configured_origin() {
        let resp = app()
            .oneshot(
                Request::get("/health")
                    .header("origin", "http://localhost:3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            resp.headers()
                .get("access-control-allow-origin")
                .unwrap()
                .to_str()
                .unwrap(),
            "http://localhost:3000"
        );
    }

    // ── Preferences ─────────────────────────────────────────────────

    #[tokio::test]
    async fn unknown_user_gets_default_preferences() {
        let resp = app()
            .oneshot(Request::get("/api/preferences/nobody").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            read_body(resp).await,
            serde_json::json!({ "preferences": {}, "budget": "moderate" })
        );
    }

    #[tokio::test]
    async fn saved_preferences_are_returned() {
        let app = app();
        let saved = serde_json::json!({
            "preferences": { "food": true, "adventure": false },
            "budget": "luxury"
        });
        let resp = app
            .clone()
            .oneshot(post_json("/api/preferences/u1", saved.clone()))
            .await
            .unwrap();
        assert_eq!(
            read_body(resp).await,
            serde_json::json!({ "success": true, "message": "Preferences saved" })
        );

        let resp = app
            .oneshot(Request::get("/api/preferences/u1").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(read_body(resp).await, saved);
    }

    // ── Itinerary / Chat ────────────────────────────────────────────

    #[tokio::test]
    async fn itinerary_returns_three_days() {
        let resp = app()
            .oneshot(post_json(
                "/api/itinerary/generate",
                serde_json::json!({ "preferences": { "food": true }, "budget": "cheap" }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = read_body(resp).await;
        assert_eq!(body["success"], true);
        let days = body["data"]["itinerary"].as_array().unwrap();
        assert_eq!(days.len(), 3);
        assert_eq!(days[0]["activities"][0]["activity"], "Visit Museum");
        assert_eq!(days[2]["activities"][0]["crowdLevel"], "Low");
    }

    #[tokio::test]
    async fn chat_replies_by_keyword() {
        let resp = app()
            .oneshot(post_json(
                "/api/chat",
                serde_json::json!({ "message": "Is there a pharmacy nearby?" }),
            ))
            .await
            .unwrap();
        let body = read_body(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(
            body["data"]["text"],
            "The nearest pharmacy is 200m from your location."
        );
    }

    #[tokio::test]
    async fn blank_chat_message_is_rejected() {
        let resp = app()
            .oneshot(post_json("/api/chat", serde_json::json!({ "message": "   " })))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(read_body(resp).await["error"].is_string());
    }

    // ── Group ───────────────────────────────────────────────────────

    #[tokio::test]
    async fn group_add_then_list() {
        let app = app();
        let resp = app
            .clone()
            .oneshot(post_json(
                "/api/group/add",
                serde_json::json!({ "name": "Asha", "preferences": { "food": true } }),
            ))
            .await
            .unwrap();
        let body = read_body(resp).await;
        assert_eq!(body["message"], "Member added");
        assert_eq!(body["members"].as_array().unwrap().len(), 1);

        let resp = app
            .oneshot(Request::get("/api/group").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = read_body(resp).await;
        assert_eq!(body[0]["name"], "Asha");
    }

    #[tokio::test]
    async fn group_add_rejects_blank_name() {
        let resp = app()
            .oneshot(post_json("/api/group/add", serde_json::json!({ "name": " " })))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    // ── Catalog ─────────────────────────────────────────────────────

    #[tokio::test]
    async fn spots_filter_by_total_budget() {
        let resp = app()
            .oneshot(
                Request::get("/api/spots?preference=adventure&budget=150&people=2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = read_body(resp).await;
        assert_eq!(body["fallback"], false);
        assert_eq!(body["count"], 1);
        assert_eq!(body["data"][0]["name"], "Rishikesh, India");
    }

    #[tokio::test]
    async fn spots_fall_back_to_whole_tag() {
        let resp = app()
            .oneshot(
                Request::get("/api/spots?preference=adventure&budget=1&people=1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = read_body(resp).await;
        assert_eq!(body["fallback"], true);
        assert!(body["count"].as_u64().unwrap() > 1);
    }

    #[tokio::test]
    async fn spots_read_fractional_party_size_as_integer() {
        let resp = app()
            .oneshot(
                Request::get("/api/spots?preference=adventure&budget=150&people=2.5")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = read_body(resp).await;
        assert_eq!(body["fallback"], false);
        assert_eq!(body["data"][0]["name"], "Rishikesh, India");
    }

    #[tokio::test]
    async fn spots_reject_invalid_form() {
        let resp = app()
            .oneshot(
                Request::get("/api/spots?preference=adventure&budget=abc&people=2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            read_body(resp).await["error"],
            "Please fill out all fields with valid numbers."
        );
    }

    #[tokio::test]
    async fn trips_default_form_returns_everything() {
        let resp = app()
            .oneshot(Request::get("/api/trips").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = read_body(resp).await;
        assert_eq!(body["count"], 5);
    }

    #[tokio::test]
    async fn trips_sort_by_price_ascending() {
        let resp = app()
            .oneshot(
                Request::get("/api/trips?sort=price_asc&min_rating=4.4")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = read_body(resp).await;
        let prices: Vec<f64> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["price"].as_f64().unwrap())
            .collect();
        assert!(!prices.is_empty());
        assert!(prices.windows(2).all(|w| w[0] <= w[1]));
    }

    // ── Views ───────────────────────────────────────────────────────

    #[tokio::test]
    async fn trips_view_renders_dark_page() {
        let resp = app()
            .oneshot(
                Request::get("/view/trips?q=zzz&dark=true")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let page = read_body_string(resp).await;
        assert!(page.contains("<body class=\"dark-mode\">"));
        assert!(page.contains("0 results"));
        assert!(page.contains("No trips match your filters."));
    }

    #[tokio::test]
    async fn spots_view_shows_validation_message() {
        let resp = app()
            .oneshot(Request::get("/view/spots?preference=beaches").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let page = read_body_string(resp).await;
        assert!(page.contains("Please fill out all fields with valid numbers."));
    }
}
