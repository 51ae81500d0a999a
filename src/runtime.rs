use std::sync::Arc;

use crate::handlers::api;
use crate::service::scheduling_service::SchedulingService;

pub async fn run_api(service: Arc<SchedulingService>, port: u16) {
    let routes = api::routes(service);
    println!("Scheduling API listening on 127.0.0.1:{}", port);
    warp::serve(routes).run(([127, 0, 0, 1], port)).await;
}
