use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use warp::Filter;
use warp::http::StatusCode;

use crate::error::ScheduleError;
use crate::service::scheduling_service::SchedulingService;

#[derive(Debug, Deserialize)]
pub struct CreateRequestBody {
    pub requester_name: String,
    pub requester_email: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ConfirmBody {
    pub slot_index: usize,
}

#[derive(Debug, Deserialize)]
pub struct EventsQuery {
    pub days: Option<i64>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Serialize)]
struct StatusBody {
    status: &'static str,
}

/// HTTP surface over the scheduling service.
///
/// POST   /requests                 -> slot proposal
/// POST   /requests/{id}/confirm    -> confirmed event
/// DELETE /requests/{id}            -> abandon pending request
/// GET    /events?days=N            -> upcoming events (default 7 days)
/// GET    /health
pub fn routes(
    service: Arc<SchedulingService>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let with_service = warp::any().map(move || service.clone());

    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .map(|| {
            warp::reply::with_status(
                warp::reply::json(&StatusBody { status: "ok" }),
                StatusCode::OK,
            )
        });

    let create_request = warp::path("requests")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(with_service.clone())
        .and_then(handle_create_request);

    let confirm_request = warp::path!("requests" / String / "confirm")
        .and(warp::post())
        .and(warp::body::json())
        .and(with_service.clone())
        .and_then(handle_confirm_request);

    let abandon_request = warp::path!("requests" / String)
        .and(warp::delete())
        .and(with_service.clone())
        .and_then(handle_abandon_request);

    let list_events = warp::path("events")
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<EventsQuery>())
        .and(with_service)
        .and_then(handle_list_events);

    health
        .or(create_request)
        .or(confirm_request)
        .or(abandon_request)
        .or(list_events)
}

async fn handle_create_request(
    body: CreateRequestBody,
    service: Arc<SchedulingService>,
) -> Result<warp::reply::WithStatus<warp::reply::Json>, warp::Rejection> {
    let result = service
        .process_request(
            &body.requester_name,
            &body.requester_email,
            &body.message,
            Utc::now(),
        )
        .await;
    match result {
        Ok(proposal) => Ok(warp::reply::with_status(
            warp::reply::json(&proposal),
            StatusCode::OK,
        )),
        Err(err) => Ok(error_reply(&err)),
    }
}

async fn handle_confirm_request(
    request_id: String,
    body: ConfirmBody,
    service: Arc<SchedulingService>,
) -> Result<warp::reply::WithStatus<warp::reply::Json>, warp::Rejection> {
    match service.confirm(&request_id, body.slot_index).await {
        Ok(event) => Ok(warp::reply::with_status(
            warp::reply::json(&event),
            StatusCode::OK,
        )),
        Err(err) => Ok(error_reply(&err)),
    }
}

async fn handle_abandon_request(
    request_id: String,
    service: Arc<SchedulingService>,
) -> Result<warp::reply::WithStatus<warp::reply::Json>, warp::Rejection> {
    match service.abandon(&request_id).await {
        Ok(()) => Ok(warp::reply::with_status(
            warp::reply::json(&StatusBody { status: "abandoned" }),
            StatusCode::OK,
        )),
        Err(err) => Ok(error_reply(&err)),
    }
}

async fn handle_list_events(
    query: EventsQuery,
    service: Arc<SchedulingService>,
) -> Result<warp::reply::WithStatus<warp::reply::Json>, warp::Rejection> {
    // A non-positive range is simply an empty calendar view.
    let days = query.days.unwrap_or(7);
    let events = service.upcoming_events(days, Utc::now()).await;
    Ok(warp::reply::with_status(
        warp::reply::json(&events),
        StatusCode::OK,
    ))
}

fn error_reply(err: &ScheduleError) -> warp::reply::WithStatus<warp::reply::Json> {
    let status = match err {
        ScheduleError::NotFound(_) => StatusCode::NOT_FOUND,
        ScheduleError::Conflict => StatusCode::CONFLICT,
        ScheduleError::InvalidDuration(_)
        | ScheduleError::InvalidInterval
        | ScheduleError::InvalidEvent(_)
        | ScheduleError::OutOfRange { .. } => StatusCode::BAD_REQUEST,
    };
    warp::reply::with_status(
        warp::reply::json(&ErrorBody {
            error: err.to_string(),
        }),
        status,
    )
}
