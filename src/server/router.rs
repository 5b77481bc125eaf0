use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{airplane, auth, city, flight, flight_crew, flight_path, passenger, staff},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "Airline operations API",
    description = "Fleet, staff, flight scheduling, passenger and booking administration"
))]
struct ApiDoc;

/// Builds the application router with every `/api` route, the OpenAPI document and
/// Swagger UI at `/api/docs`.
pub fn router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(city::create_city))
        .routes(routes!(airplane::create_airplane))
        .routes(routes!(staff::create_staff))
        .routes(routes!(staff::create_pilot))
        .routes(routes!(flight::create_flight))
        .routes(routes!(flight::delete_flight))
        .routes(routes!(flight::get_flights))
        .routes(routes!(flight::search_flights))
        .routes(routes!(flight::search_all_flights))
        .routes(routes!(flight_crew::create_crew_assignment))
        .routes(routes!(flight_crew::get_staff_flights))
        .routes(routes!(flight_path::create_flight_path))
        .routes(routes!(passenger::create_passenger))
        .routes(routes!(passenger::create_booking))
        .routes(routes!(passenger::get_bookings))
        .routes(routes!(auth::login))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
