use actix_web::{get, post, web, HttpResponse};
use road_graph::models::{RoadNetwork, Routes, Segments, Traffic};
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use crate::error::ApiError;

/// Shared server state. All reads and writes go through the one lock so a
/// route query sees congestion that cannot change mid-search
pub struct AppState {
    pub network: Mutex<RoadNetwork>,
    pub route_timeout: Duration,
}

impl AppState {
    pub fn new(network: RoadNetwork, route_timeout: Duration) -> Self {
        Self {
            network: Mutex::new(network),
            route_timeout,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, RoadNetwork>, ApiError> {
        self.network
            .lock()
            .map_err(|_| ApiError::Internal("road network lock poisoned".to_string()))
    }
}

#[derive(Debug, Deserialize)]
pub struct VehicleRequest {
    pub road: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Serialize)]
struct RouteResponse {
    route: Option<Vec<String>>,
}

#[derive(Clone, Copy)]
enum VehicleAction {
    Add,
    Remove,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    // JSON bodies only carry vehicle requests; a body without a usable road
    // or type is the same client error as an unknown one
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("Rejected vehicle request body: {err}");
        ApiError::InvalidVehicleRequest.into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        ApiError::MalformedRequest(err.to_string()).into()
    }))
    .service(health)
    .service(list_roads)
    .service(add_vehicle)
    .service(remove_vehicle)
    .service(find_route);
}

#[get("/health")]
async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

#[get("/roads")]
async fn list_roads(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let network = state.lock()?;
    Ok(HttpResponse::Ok().json(network.export()))
}

#[post("/add-vehicle")]
async fn add_vehicle(state: web::Data<AppState>, body: web::Json<VehicleRequest>) -> Result<HttpResponse, ApiError> {
    update_vehicles(&state, &body, VehicleAction::Add)
}

#[post("/remove-vehicle")]
async fn remove_vehicle(state: web::Data<AppState>, body: web::Json<VehicleRequest>) -> Result<HttpResponse, ApiError> {
    update_vehicles(&state, &body, VehicleAction::Remove)
}

fn update_vehicles(state: &AppState, request: &VehicleRequest, action: VehicleAction) -> Result<HttpResponse, ApiError> {
    let mut network = state.lock()?;

    if network.get_segment_index(&request.road).is_none() || !network.weights.recognizes(&request.kind) {
        return Err(ApiError::InvalidVehicleRequest);
    }

    match action {
        VehicleAction::Add => network.add_vehicle_to_segment(&request.road, &request.kind),
        VehicleAction::Remove => network.remove_vehicle_from_segment(&request.road, &request.kind),
    };

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "roads": network.export(),
    })))
}

#[get("/route")]
async fn find_route(state: web::Data<AppState>, query: web::Query<RouteQuery>) -> Result<HttpResponse, ApiError> {
    let RouteQuery { start, end } = query.into_inner();
    let budget = state.route_timeout;

    // Enumeration can be slow on dense maps, keep it off the async workers
    let route = web::block(move || -> Result<_, ApiError> {
        let network = state.lock()?;
        if network.get_segment_index(&start).is_none() || network.get_segment_index(&end).is_none() {
            return Err(ApiError::InvalidRoute);
        }
        Ok(network.find_route_within(&start, &end, budget)?)
    })
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(RouteResponse {
        route: route.map(|route| route.segments),
    }))
}
