use actix_web::{middleware, web, App, HttpResponse, HttpServer, Result};
use std::sync::{Mutex, MutexGuard};
use tracing::info;

use crate::coordinator::Coordinator;
use crate::form::{AvailabilityChange, AvailabilityForm, GroupTourForm, NavigatorForm, WalkInForm};
use crate::schedule::ScheduleError;

/// Shared server state. One lock guards the roster and the slot catalog together.
pub struct AppState {
    pub coordinator: Mutex<Coordinator>,
}

impl AppState {
    pub fn new(coordinator: Coordinator) -> Self {
        AppState {
            coordinator: Mutex::new(coordinator),
        }
    }
}

fn lock(state: &AppState) -> Result<MutexGuard<'_, Coordinator>> {
    state
        .coordinator
        .lock()
        .map_err(|_| actix_web::error::ErrorInternalServerError("Scheduler state is unavailable"))
}

/// Maps a scheduling error to a JSON error body with a matching status
fn error_response(err: &ScheduleError) -> HttpResponse {
    let body = serde_json::json!({"success": false, "error": err.to_string()});
    match err {
        ScheduleError::TimeParse { .. } | ScheduleError::InvalidInput(_) => HttpResponse::BadRequest().json(body),
        ScheduleError::UnknownNavigator(_) => HttpResponse::NotFound().json(body),
        ScheduleError::DuplicateName(_)
        | ScheduleError::AlreadyAssigned { .. }
        | ScheduleError::WalkInAlreadyAssigned { .. } => HttpResponse::Conflict().json(body),
        ScheduleError::Csv(_) | ScheduleError::Io(_) => HttpResponse::InternalServerError().json(body),
    }
}

fn success(message: &str) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({"success": true, "message": message}))
}

// Navigator availabilities
async fn list_navigators(state: web::Data<AppState>) -> Result<HttpResponse> {
    let coordinator = lock(&state)?;
    Ok(HttpResponse::Ok().json(coordinator.availabilities()))
}

async fn add_navigator(req: web::Json<NavigatorForm>, state: web::Data<AppState>) -> Result<HttpResponse> {
    let record = match req.validate() {
        Ok(record) => record,
        Err(e) => return Ok(error_response(&e)),
    };
    let mut coordinator = lock(&state)?;
    match coordinator.add_navigator(&record.name, record.availability) {
        Ok(()) => Ok(success(&format!("Navigator '{}' added successfully", record.name))),
        Err(e) => Ok(error_response(&e)),
    }
}

async fn update_availability(
    name: web::Path<String>,
    req: web::Json<AvailabilityForm>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let change = match req.validate() {
        Ok(change) => change,
        Err(e) => return Ok(error_response(&e)),
    };
    let mut coordinator = lock(&state)?;
    let result = match change {
        AvailabilityChange::DayOff(day) => coordinator
            .set_day_off(&name, day)
            .map(|()| format!("{} is marked as unavailable on {}", name, day)),
        AvailabilityChange::Window(day, interval) => coordinator
            .set_availability(&name, day, interval)
            .map(|()| format!("{}'s availability updated for {}: {}", name, day, interval)),
    };
    match result {
        Ok(message) => Ok(success(&message)),
        Err(e) => Ok(error_response(&e)),
    }
}

// Walk-in tours
async fn set_walk_in(req: web::Json<WalkInForm>, state: web::Data<AppState>) -> Result<HttpResponse> {
    let (day, time, offered) = match req.validate() {
        Ok(parsed) => parsed,
        Err(e) => return Ok(error_response(&e)),
    };
    let mut coordinator = lock(&state)?;
    let result = if offered {
        coordinator.open_walk_in_slot(day, time)
    } else {
        coordinator.close_walk_in_slot(day, time)
    };
    match result {
        Ok(()) => Ok(success("Walk-in tour saved")),
        Err(e) => Ok(error_response(&e)),
    }
}

// Group tours
async fn add_group_tour(req: web::Json<GroupTourForm>, state: web::Data<AppState>) -> Result<HttpResponse> {
    let record = match req.validate() {
        Ok(record) => record,
        Err(e) => return Ok(error_response(&e)),
    };
    let mut coordinator = lock(&state)?;
    match coordinator.add_group_tour_request(record.day, record.time, &record.school, record.students) {
        Ok(()) => Ok(success("Group tour saved")),
        Err(e) => Ok(error_response(&e)),
    }
}

// Assignment run
async fn assign_tours(state: web::Data<AppState>) -> Result<HttpResponse> {
    let mut coordinator = lock(&state)?;
    match coordinator.run_assignment() {
        Ok(report) => Ok(HttpResponse::Ok().json(serde_json::json!({"success": true, "report": report}))),
        Err(e) => Ok(error_response(&e)),
    }
}

async fn get_schedule(state: web::Data<AppState>) -> Result<HttpResponse> {
    let coordinator = lock(&state)?;
    Ok(HttpResponse::Ok().json(coordinator.weekly_schedule()))
}

async fn get_tour_counts(state: web::Data<AppState>) -> Result<HttpResponse> {
    let coordinator = lock(&state)?;
    Ok(HttpResponse::Ok().json(coordinator.tour_counts()))
}

/// Registers every API route on an actix service config
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/navigators", web::get().to(list_navigators))
        .route("/api/navigators", web::post().to(add_navigator))
        .route("/api/navigators/{name}/availability", web::post().to(update_availability))
        .route("/api/walk-ins", web::post().to(set_walk_in))
        .route("/api/group-tours", web::post().to(add_group_tour))
        .route("/api/assign", web::post().to(assign_tours))
        .route("/api/schedule", web::get().to(get_schedule))
        .route("/api/tour-counts", web::get().to(get_tour_counts));
}

pub async fn start_server(port: u16, coordinator: Coordinator) -> std::io::Result<()> {
    let app_state = web::Data::new(AppState::new(coordinator));
    info!(port, "starting web server");

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
